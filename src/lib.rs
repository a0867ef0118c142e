//! xlsxissues - Site compliance issue exports to Markdown reports
//!
//! スプレッドシート形式で出力されたWebサイトのアクセシビリティ／コンプライアンス課題を
//! 読み込み、シートごとに非準拠の課題をMarkdownテーブルとしてまとめたレポートを生成します。
//!
//! # 処理の流れ
//!
//! 1. ワークブックを開く（XLS / XLSX / XLSB / ODSを内容から自動判定）
//! 2. シートごとに先頭データ行がヘッダーか判定し、必要なら列名へ昇格
//! 3. 既知列（`issue_name`, `label`, `description`, `affected_pages`,
//!    `severity_type`, `is_compliant`）を抽出し、`is_compliant`が`true`でない行に絞り込む
//! 4. 既知列が無いシートは先頭20行をそのまま出力
//! 5. レポートを1つのMarkdownファイルへ書き出す
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxissues::{ReportBuilder, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ReportBuilder::new().build()?;
//!     let summary = generator.write_report(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)?;
//!
//!     println!("Written to: {}", summary.output_path.display());
//!     println!("Total lines: {}", summary.line_count);
//!     Ok(())
//! }
//! ```
//!
//! # In-memory conversion
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use xlsxissues::ReportBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ReportBuilder::new()
//!     .with_source_name("export.xlsx")
//!     .build()?;
//! let excel_data: Vec<u8> = vec![]; // Your spreadsheet bytes
//! let report = generator.generate(Cursor::new(excel_data));
//! println!("{}", report.to_markdown());
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod grid;
mod issues;
mod parser;
mod report;
mod security;
mod types;

// 公開API
pub use api::{
    WriteSummary, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_PREVIEW_ROWS,
    DEFAULT_REPORT_DATE, DEFAULT_SOURCE_NAME, DEFAULT_TITLE, HEADER_TOKENS, IS_COMPLIANT_COLUMN,
    KNOWN_COLUMNS,
};
pub use builder::{ReportBuilder, ReportGenerator};
pub use error::ReportError;
pub use report::Report;
