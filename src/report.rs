//! Report Module
//!
//! レポートのトップレベル行を順序付きで保持し、Markdown文書として書き出すモジュール。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ReportError;

/// Markdownレポート
///
/// 見出し、テーブル、エラーメッセージなどのエントリを順序付きで保持します。
/// 各エントリは必要に応じて自身の末尾改行を含み、シリアライズ時は改行で連結されます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// タイトルと出典行を持つレポートを生成
    pub(crate) fn with_preamble(title: &str, source_name: &str, report_date: &str) -> Self {
        Self {
            lines: vec![
                format!("# {}", title),
                format!("Generated from: {}", source_name),
                format!("Date: {}\n", report_date),
            ],
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.lines.extend(lines);
    }

    /// すべてのエントリ
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// トップレベルのエントリ数（データ行数ではない）
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Markdown文書として連結
    pub fn to_markdown(&self) -> String {
        self.lines.join("\n")
    }

    /// ライターへ書き出す
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut writer = BufWriter::new(writer);
        writer.write_all(self.to_markdown().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// ファイルへ書き出す（既存ファイルは上書き、UTF-8）
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let file = File::create(path)?;
        self.write_to(file)
    }
}
