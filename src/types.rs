//! Core Data Types
//!
//! シート単位の表データを表現するための基本型を定義するモジュール。

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::formatter::{format_datetime, format_duration, format_number};

/// セルの値
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellValue {
    /// 空セル
    Empty,

    /// 数値（整数もf64として保持）
    Number(f64),

    /// 文字列
    String(String),

    /// 真偽値
    Bool(bool),

    /// 日時
    DateTime(NaiveDateTime),

    /// 経過時間（`[h]:mm:ss`形式のセル）
    Duration(Duration),

    /// エラー値（例: `#DIV/0!`）
    Error(String),
}

impl CellValue {
    /// 空白セルかどうか
    ///
    /// 空セル、または空白文字のみの文字列を空白とみなします。
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 欠損セルかどうか
    ///
    /// 空セルと空文字列のみを欠損とみなします。空白文字を含む文字列は値として扱います。
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 数値セルかどうか
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// 値を文字列に変換（エスケープなし）
    ///
    /// ヘッダー判定・列名・準拠判定など、比較に使う文字列はすべてこの変換を通します。
    pub fn as_raw_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => format_number(*n),
            CellValue::String(s) => s.clone(),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::DateTime(dt) => format_datetime(dt),
            CellValue::Duration(d) => format_duration(d),
            CellValue::Error(e) => e.clone(),
        }
    }
}

/// メモリ上に展開されたシート
///
/// 使用範囲の1行目を列名とし、2行目以降をデータ行として保持します。
/// データ行は常に列数と同じ長さに揃えられます。
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sheet {
    /// シート名
    pub name: String,

    /// 列名
    pub columns: Vec<String>,

    /// データ行（行 × 列）
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// ヘッダー行とデータ行からシートを構築
    ///
    /// 空の列名は`Unnamed: <列番号>`、重複する列名は`<名前>.1`, `<名前>.2`…に置き換えます。
    pub fn new(name: impl Into<String>, header: &[CellValue], rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(header.len());

        let mut header = header.to_vec();
        header.resize(width, CellValue::Empty);
        let columns = column_labels(&header);

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// 列名から列インデックスを取得（最初に一致した列）
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }
}

/// ヘッダーセルから一意な列名を生成
fn column_labels(header: &[CellValue]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut labels = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let base = if cell.is_blank() {
            format!("Unnamed: {}", idx)
        } else {
            cell.as_raw_string()
        };

        let mut label = base.clone();
        let mut suffix = 1;
        while taken.contains(&label) {
            label = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        taken.insert(label.clone());
        labels.push(label);
    }

    labels
}
