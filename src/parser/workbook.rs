//! Workbook Parser
//!
//! calamineのラッパーとして、シート名の取得とシートのメモリ展開を提供します。

use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets};
use std::io::{Cursor, Read, Seek};

use crate::error::ReportError;
use crate::security::SecurityConfig;
use crate::types::{CellValue, Sheet};

/// ワークブックパーサー
///
/// 入力全体をメモリに読み込んだうえでcalamineに渡します。
/// 入力は読み取り専用で、元ファイルを変更することはありません。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック（形式は自動判定）
    workbook: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - スプレッドシートを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `security_config` - 入力サイズ制限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(ReportError)` - 読み込み失敗、サイズ超過、未対応形式の場合
    pub fn open<R: Read + Seek>(
        mut reader: R,
        security_config: &SecurityConfig,
    ) -> Result<Self, ReportError> {
        // 上限+1バイトまでしか読み込まない
        let limit = security_config.max_input_file_size.saturating_add(1);
        let mut buffer = Vec::new();
        let bytes_read = reader.by_ref().take(limit).read_to_end(&mut buffer)?;
        security_config.check_input_size(bytes_read as u64)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        Ok(Self { workbook })
    }

    /// すべてのシート名をワークブック内の順序で取得
    pub fn get_sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シートを読み込み、メモリ上の表に展開する
    ///
    /// 使用範囲の1行目を列名、2行目以降をデータ行とします。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Sheet)` - 展開されたシート
    /// * `Err(ReportError::Parse)` - シートの解析に失敗した場合
    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, ReportError> {
        let range = self.workbook.worksheet_range(sheet_name)?;

        let mut rows = range.rows();
        let header: Vec<CellValue> = rows
            .next()
            .map(|row| row.iter().map(convert_cell).collect())
            .unwrap_or_default();
        let data = rows
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        Ok(Sheet::new(sheet_name, &header, data))
    }
}

/// calamineのセル値を変換
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        // 1904年エポックの判定はcalamine側で行われる
        Data::DateTime(dt) if dt.is_duration() => dt
            .as_duration()
            .map(CellValue::Duration)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        #[allow(unreachable_patterns)]
        _ => CellValue::Empty,
    }
}
