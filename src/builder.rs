//! Builder Module
//!
//! Fluent Builder APIを提供し、`ReportGenerator`インスタンスを段階的に構築する。

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::api::{
    WriteSummary, DEFAULT_PREVIEW_ROWS, DEFAULT_REPORT_DATE, DEFAULT_SOURCE_NAME, DEFAULT_TITLE,
    IS_COMPLIANT_COLUMN,
};
use crate::error::ReportError;
use crate::formatter::CellFormatter;
use crate::issues::{analyze_sheet, SheetSection};
use crate::parser::WorkbookParser;
use crate::report::Report;
use crate::security::SecurityConfig;
use crate::types::Sheet;

/// レポート生成の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ReportConfig {
    /// レポートのタイトル（H1）
    pub title: String,

    /// 出典行に記載するファイル名
    pub source_name: String,

    /// 出典行に記載する日付（`%Y-%m-%d`）
    pub report_date: String,

    /// 既知列が無いシートで出力する最大行数
    pub preview_rows: usize,

    /// 入力サイズ制限
    pub security: SecurityConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            report_date: DEFAULT_REPORT_DATE.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxissues::ReportBuilder;
///
/// # fn main() -> Result<(), xlsxissues::ReportError> {
/// let generator = ReportBuilder::new()
///     .with_source_name("issues-export.xlsx")
///     .with_report_date("2025-12-09")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// * タイトル: `Site Issues Report`
    /// * 出典ファイル名: `issues-68299-2025-12-09.xls`
    /// * 日付: `2025-12-09`
    /// * プレビュー行数: 20
    /// * 入力サイズ上限: 2GB
    pub fn new() -> Self {
        Self::default()
    }

    /// レポートのタイトルを指定する
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// 出典行に記載するファイル名を指定する
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.config.source_name = source_name.into();
        self
    }

    /// 出典行に記載する日付を指定する（`YYYY-MM-DD`）
    pub fn with_report_date(mut self, date: impl Into<String>) -> Self {
        self.config.report_date = date.into();
        self
    }

    /// 既知列が無いシートで出力する最大行数を指定する
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.config.preview_rows = rows;
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`ReportGenerator`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ReportError::Config(String)`: 設定の検証に失敗した場合
    ///   * タイトルまたは出典ファイル名が空
    ///   * 日付が`YYYY-MM-DD`形式の有効な日付でない
    ///   * プレビュー行数または入力サイズ上限が0
    pub fn build(self) -> Result<ReportGenerator, ReportError> {
        if self.config.title.trim().is_empty() {
            return Err(ReportError::Config("Report title must not be empty".to_string()));
        }

        if self.config.source_name.trim().is_empty() {
            return Err(ReportError::Config("Source name must not be empty".to_string()));
        }

        NaiveDate::parse_from_str(&self.config.report_date, "%Y-%m-%d").map_err(|e| {
            ReportError::Config(format!(
                "Invalid report date '{}': {}",
                self.config.report_date, e
            ))
        })?;

        if self.config.preview_rows == 0 {
            return Err(ReportError::Config(
                "Preview row count must be at least 1".to_string(),
            ));
        }

        if self.config.security.max_input_file_size == 0 {
            return Err(ReportError::Config(
                "Maximum input size must be at least 1 byte".to_string(),
            ));
        }

        Ok(ReportGenerator::new(self.config))
    }
}

/// レポート生成のファサード
///
/// ワークブックを読み込み、シートごとに非準拠の課題を抽出してMarkdownレポートを生成します。
/// ワークブックを開けない場合やシート単位のエラーは、レポート内のエラー行に変換されます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxissues::ReportBuilder;
///
/// # fn main() -> Result<(), xlsxissues::ReportError> {
/// let generator = ReportBuilder::new().build()?;
/// let summary = generator.write_report("issues.xlsx", "SITE_ISSUES.md")?;
/// println!("Total lines: {}", summary.line_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReportGenerator {
    config: ReportConfig,
    formatter: CellFormatter,
}

impl ReportGenerator {
    pub(crate) fn new(config: ReportConfig) -> Self {
        Self {
            config,
            formatter: CellFormatter::new(),
        }
    }

    /// リーダーからワークブックを読み込み、レポートを生成する
    ///
    /// この処理は失敗しません。ワークブックを開けない場合は、
    /// タイトル・出典行と`Error: <message>`の行のみを持つレポートを返します。
    pub fn generate<R: Read + Seek>(&self, input: R) -> Report {
        let mut parser = match WorkbookParser::open(input, &self.config.security) {
            Ok(parser) => parser,
            Err(e) => return self.open_failure(e),
        };

        let sheet_names = parser.get_sheet_names();
        info!("Opened workbook with {} sheet(s)", sheet_names.len());

        let sheets = sheet_names.iter().map(|name| {
            let loaded = parser.read_sheet(name);
            (name.clone(), loaded)
        });

        self.assemble(sheet_names.len(), sheets)
    }

    /// ファイルパスからワークブックを読み込み、レポートを生成する
    ///
    /// ファイルサイズは読み込み前にメタデータで検証します。
    pub fn generate_from_path<P: AsRef<Path>>(&self, path: P) -> Report {
        match self.open_input(path.as_ref()) {
            Ok(file) => self.generate(file),
            Err(e) => self.open_failure(e),
        }
    }

    /// レポートを生成してファイルへ書き出す
    ///
    /// # 戻り値
    ///
    /// * `Ok(WriteSummary)` - 書き込みに成功した場合
    /// * `Err(ReportError)` - 出力ファイルの書き込みに失敗した場合のみ
    pub fn write_report<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<WriteSummary, ReportError> {
        let report = self.generate_from_path(input);
        report.write_to_path(output.as_ref())?;

        info!(
            "Wrote {} report line(s) to {}",
            report.line_count(),
            output.as_ref().display()
        );

        Ok(WriteSummary {
            output_path: output.as_ref().to_path_buf(),
            line_count: report.line_count(),
        })
    }

    /// シートの読み込み結果からレポートを組み立てる（内部メソッド）
    ///
    /// シートはワークブックの順序で1つずつ処理されます。
    pub(crate) fn assemble<I>(&self, sheet_count: usize, sheets: I) -> Report
    where
        I: IntoIterator<Item = (String, Result<Sheet, ReportError>)>,
    {
        let mut report = self.preamble();
        report.push(format!("## Sheets Found: {}\n", sheet_count));

        for (name, loaded) in sheets {
            let lines = loaded.and_then(|sheet| self.render_sheet(sheet));
            match lines {
                Ok(lines) => report.extend(lines),
                Err(e) => {
                    warn!("Failed to process sheet '{}': {}", name, e);
                    report.push(format!("Error reading sheet '{}': {}\n", name, e));
                }
            }
        }

        report
    }

    /// 1シート分の出力行を生成（内部ヘルパー）
    fn render_sheet(&self, sheet: Sheet) -> Result<Vec<String>, ReportError> {
        let name = sheet.name.clone();
        let heading = format!("### {}\n", name);
        let section = analyze_sheet(sheet, self.config.preview_rows, &self.formatter);

        let lines = match section {
            SheetSection::Skipped => Vec::new(),
            SheetSection::AllCompliant => vec![heading],
            SheetSection::Unfiltered { retained_rows } => {
                // is_compliant列が無い場合は見出しのみ
                debug!(
                    "Sheet '{}': no '{}' column; {} row(s) retained but not rendered",
                    name, IS_COMPLIANT_COLUMN, retained_rows
                );
                vec![heading]
            }
            SheetSection::NonCompliant { count, grid } => vec![
                heading,
                format!("**Non-Compliant Issues ({}):**\n", count),
                grid.to_markdown_string()?,
                "\n".to_string(),
            ],
            SheetSection::RawPreview(grid) => {
                debug!(
                    "Sheet '{}': no known columns; previewing {} row(s) x {} column(s)",
                    name,
                    grid.get_rows(),
                    grid.get_cols()
                );
                vec![heading, grid.to_markdown_string()?, "\n".to_string()]
            }
        };

        Ok(lines)
    }

    fn open_input(&self, path: &Path) -> Result<File, ReportError> {
        let file = File::open(path)?;
        self.config
            .security
            .check_input_size(file.metadata()?.len())?;
        Ok(file)
    }

    fn preamble(&self) -> Report {
        Report::with_preamble(
            &self.config.title,
            &self.config.source_name,
            &self.config.report_date,
        )
    }

    fn open_failure(&self, error: ReportError) -> Report {
        warn!("Failed to open workbook: {}", error);
        let mut report = self.preamble();
        report.push(format!("Error: {}", error));
        report
    }
}
