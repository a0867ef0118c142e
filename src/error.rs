//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// xlsxissuesクレート全体で使用するエラー型
///
/// ワークブックの読み込み、シートの解析、レポートの書き込み中に発生する
/// すべてのエラーを統一的に扱います。
///
/// # エラーの扱い
///
/// - ワークブックを開けない場合とシート単位のエラーは、レポート内の
///   1行のエラーメッセージに変換されます（処理は中断されません）。
/// - レポートファイルの書き込みエラーのみが呼び出し元へ返されます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxissues::ReportError;
/// use std::fs::File;
///
/// fn open_export(path: &str) -> Result<File, ReportError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O操作中に発生したエラー
    ///
    /// 入力ファイルの読み込み失敗、レポートファイルの書き込み失敗など。
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー
    ///
    /// calamineがワークブックまたはシートを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ReportBuilder::build()`時に無効な設定が検出された場合に発生します。
    ///
    /// ```rust,no_run
    /// use xlsxissues::{ReportBuilder, ReportError};
    ///
    /// match ReportBuilder::new().with_report_date("2025-13-40").build() {
    ///     Err(ReportError::Config(msg)) => println!("設定エラー: {}", msg),
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// テーブル出力の生成に失敗したエラー
    #[error("Render error: {0}")]
    Render(String),
}
