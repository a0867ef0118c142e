//! Public API Types
//!
//! 公開APIで使用する定数と結果型を定義するモジュール。

use std::path::PathBuf;

/// 抽出対象の既知列（出力時の列順もこの順序）
pub const KNOWN_COLUMNS: [&str; 6] = [
    "issue_name",
    "label",
    "description",
    "affected_pages",
    "severity_type",
    "is_compliant",
];

/// 準拠判定に使用する列名
pub const IS_COMPLIANT_COLUMN: &str = "is_compliant";

/// ヘッダー行の判定に使用するトークン（小文字化したセル値と完全一致）
pub const HEADER_TOKENS: [&str; 2] = ["issue_name", "label"];

/// 既定の入力ファイルパス
pub const DEFAULT_INPUT_PATH: &str = "issues-68299-2025-12-09.xls";

/// 既定の出力ファイルパス
pub const DEFAULT_OUTPUT_PATH: &str = "SITE_ISSUES.md";

/// レポートのタイトル
pub const DEFAULT_TITLE: &str = "Site Issues Report";

/// 出典行に記載するファイル名
pub const DEFAULT_SOURCE_NAME: &str = "issues-68299-2025-12-09.xls";

/// 出典行に記載する日付（`%Y-%m-%d`）
pub const DEFAULT_REPORT_DATE: &str = "2025-12-09";

/// 既知列が1つも無いシートで出力する最大行数
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// レポート書き込み結果
///
/// `ReportGenerator::write_report()`の戻り値です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// 書き込んだレポートファイルのパス
    pub output_path: PathBuf,

    /// レポートのトップレベル行（エントリ）数
    ///
    /// データ行数ではなく、見出しやテーブルなどのエントリ数です。
    pub line_count: usize,
}
