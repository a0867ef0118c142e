//! Formatter Module
//!
//! セル値の表示用フォーマット処理を提供するモジュール。

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::types::CellValue;

/// セルフォーマッター
///
/// Markdownテーブルに出力するセル文字列を生成します。
#[derive(Debug, Default)]
pub(crate) struct CellFormatter;

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self
    }

    /// セル値をテーブル用にフォーマット
    ///
    /// 前後の空白を除去し、Markdown特殊文字をエスケープします。
    pub fn format_cell(&self, value: &CellValue) -> String {
        self.escape_markdown(value.as_raw_string().trim())
    }

    /// 列名をテーブル用にフォーマット
    pub fn format_header(&self, label: &str) -> String {
        self.escape_markdown(label.trim())
    }

    /// Markdown特殊文字をエスケープ
    ///
    /// # 引数
    ///
    /// * `s` - エスケープする文字列
    ///
    /// # 戻り値
    ///
    /// エスケープ済み文字列
    fn escape_markdown(&self, s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('|', "\\|")
            .replace("\r\n", "<br>")
            .replace(['\n', '\r'], "<br>")
    }
}

/// 数値を文字列に変換
///
/// 整数値（絶対値が1e15未満）は小数部なしで出力し、それ以外は`f64`の表示形式に従います。
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// 日時を文字列に変換
///
/// 時刻が0時ちょうどの場合は日付のみ（`YYYY-MM-DD`）、それ以外は`YYYY-MM-DD HH:MM:SS`。
pub(crate) fn format_datetime(dt: &NaiveDateTime) -> String {
    if dt.num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// 経過時間を文字列に変換
///
/// Excelの`[h]:mm:ss`と同様に、時間部分は24を超えても繰り上げません。秒未満は四捨五入します。
pub(crate) fn format_duration(duration: &Duration) -> String {
    let total = (duration.num_milliseconds() as f64 / 1000.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}
