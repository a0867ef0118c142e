//! Issue Analysis Module
//!
//! シート単位で、ヘッダー行の昇格、既知列の抽出、非準拠行の絞り込み、
//! または先頭行のプレビューを行うモジュール。

use log::debug;

use crate::api::{HEADER_TOKENS, IS_COMPLIANT_COLUMN, KNOWN_COLUMNS};
use crate::formatter::CellFormatter;
use crate::grid::LogicalGrid;
use crate::types::{CellValue, Sheet};

/// シートの解析結果
#[derive(Debug)]
pub(crate) enum SheetSection {
    /// データ行が無いため出力しない
    Skipped,

    /// 非準拠行のテーブル
    NonCompliant { count: usize, grid: LogicalGrid },

    /// すべての行が準拠（見出しのみ出力）
    AllCompliant,

    /// 既知列はあるが`is_compliant`列が無い（見出しのみ出力）
    Unfiltered { retained_rows: usize },

    /// 既知列が無いシートの先頭行プレビュー
    RawPreview(LogicalGrid),
}

/// シートを解析して出力内容を決定する
///
/// # 引数
///
/// * `sheet` - メモリ上に展開されたシート
/// * `preview_rows` - 既知列が無い場合に出力する最大行数
/// * `formatter` - セルフォーマッター
pub(crate) fn analyze_sheet(
    mut sheet: Sheet,
    preview_rows: usize,
    formatter: &CellFormatter,
) -> SheetSection {
    if sheet.rows.is_empty() {
        debug!("Sheet '{}' has no data rows; skipping", sheet.name);
        return SheetSection::Skipped;
    }

    if promote_header_row(&mut sheet) {
        debug!("Sheet '{}': promoted first data row to headers", sheet.name);
    }

    if sheet.rows.is_empty() {
        debug!("Sheet '{}' has no rows after header promotion; skipping", sheet.name);
        return SheetSection::Skipped;
    }

    // 既知列（固定順）と列インデックスの対応
    let selected: Vec<(&str, usize)> = KNOWN_COLUMNS
        .iter()
        .filter_map(|&name| sheet.column_index(name).map(|idx| (name, idx)))
        .collect();

    if selected.is_empty() {
        let limit = preview_rows.min(sheet.rows.len());
        return SheetSection::RawPreview(LogicalGrid::build(
            &sheet.columns,
            &sheet.rows[..limit],
            formatter,
        ));
    }

    debug!(
        "Sheet '{}': known columns {:?}",
        sheet.name,
        selected.iter().map(|(name, _)| *name).collect::<Vec<_>>()
    );

    // 既知列のみに絞り込み、すべて欠損の行を除外
    let subset: Vec<Vec<CellValue>> = sheet
        .rows
        .iter()
        .map(|row| selected.iter().map(|&(_, idx)| row[idx].clone()).collect())
        .filter(|row: &Vec<CellValue>| !row.iter().all(CellValue::is_missing))
        .collect();

    let Some(compliant_idx) = selected
        .iter()
        .position(|&(name, _)| name == IS_COMPLIANT_COLUMN)
    else {
        return SheetSection::Unfiltered {
            retained_rows: subset.len(),
        };
    };

    let non_compliant: Vec<Vec<CellValue>> = subset
        .into_iter()
        .filter(|row| is_non_compliant(&row[compliant_idx]))
        .collect();

    if non_compliant.is_empty() {
        return SheetSection::AllCompliant;
    }

    let columns: Vec<String> = selected.iter().map(|(name, _)| name.to_string()).collect();
    SheetSection::NonCompliant {
        count: non_compliant.len(),
        grid: LogicalGrid::build(&columns, &non_compliant, formatter),
    }
}

/// 先頭データ行がヘッダーであれば列名に昇格させる
///
/// いずれかのセルを文字列化・小文字化した値が`issue_name`または`label`と完全一致する場合に
/// ヘッダーとみなします。列名は小文字化せず元の文字列を使用します。
///
/// # 戻り値
///
/// 昇格した場合は`true`
pub(crate) fn promote_header_row(sheet: &mut Sheet) -> bool {
    let Some(first_row) = sheet.rows.first() else {
        return false;
    };

    let is_header = first_row.iter().any(|cell| {
        let text = cell.as_raw_string().to_lowercase();
        HEADER_TOKENS.contains(&text.as_str())
    });

    if is_header {
        let header = sheet.rows.remove(0);
        sheet.columns = header.iter().map(CellValue::as_raw_string).collect();
    }

    is_header
}

/// `is_compliant`の値が非準拠を示すかどうか
///
/// 文字列化・小文字化した値が`"true"`でなければ非準拠です（空セルも非準拠）。
pub(crate) fn is_non_compliant(value: &CellValue) -> bool {
    value.as_raw_string().to_lowercase() != "true"
}
