//! Grid Module
//!
//! 列名とセル値から論理的なテーブルを構築し、Markdownのパイプテーブルとして出力するモジュール。

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::ReportError;
use crate::formatter::CellFormatter;
use crate::types::CellValue;

/// 列の揃え方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alignment {
    Left,
    Right,
}

/// 論理的なグリッド構造
///
/// ヘッダー行とデータ行（フォーマット済み文字列）を保持します。
/// 行番号などのインデックス列は出力しません。
#[derive(Debug, Clone)]
pub(crate) struct LogicalGrid {
    /// フォーマット済みの列名
    header: Vec<String>,

    /// フォーマット済みのデータ（行 × 列）
    cells: Vec<Vec<String>>,

    /// 列ごとの揃え方向
    alignments: Vec<Alignment>,
}

impl LogicalGrid {
    /// 列名とセル値からグリッドを構築
    ///
    /// 空白以外のセルがすべて数値の列は右揃え、それ以外は左揃えになります。
    ///
    /// # 引数
    ///
    /// * `columns` - 列名
    /// * `rows` - データ行（各行は`columns`と同じ長さ）
    /// * `formatter` - セルフォーマッター
    pub fn build(columns: &[String], rows: &[Vec<CellValue>], formatter: &CellFormatter) -> Self {
        let header = columns.iter().map(|c| formatter.format_header(c)).collect();

        let alignments = (0..columns.len())
            .map(|col| {
                let mut values = rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .filter(|v| !v.is_blank())
                    .peekable();
                if values.peek().is_some() && values.all(CellValue::is_number) {
                    Alignment::Right
                } else {
                    Alignment::Left
                }
            })
            .collect();

        let cells = rows
            .iter()
            .map(|row| {
                (0..columns.len())
                    .map(|col| {
                        row.get(col)
                            .map(|v| formatter.format_cell(v))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self {
            header,
            cells,
            alignments,
        }
    }

    /// データ行数を取得
    pub fn get_rows(&self) -> usize {
        self.cells.len()
    }

    /// 列数を取得
    pub fn get_cols(&self) -> usize {
        self.header.len()
    }

    /// Markdownテーブルとして出力
    ///
    /// 最終行の後に改行は出力しません。
    ///
    /// # 引数
    ///
    /// * `writer` - 出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 出力に成功した場合
    /// * `Err(ReportError)` - エラーが発生した場合
    pub fn render_markdown<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        if self.header.is_empty() {
            return Ok(());
        }

        // 1. 列幅の計算
        let col_widths = self.calculate_column_widths();

        // 2. ヘッダー行と区切り行
        self.write_row(writer, &self.header, &col_widths)?;
        writeln!(writer)?;
        write!(writer, "{}", self.generate_separator(&col_widths))?;

        // 3. データ行
        for row in &self.cells {
            writeln!(writer)?;
            self.write_row(writer, row, &col_widths)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Markdownテーブルを文字列として取得
    pub fn to_markdown_string(&self) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.render_markdown(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ReportError::Render(e.to_string()))
    }

    /// 1行分を出力（内部ヘルパー）
    fn write_row<W: Write>(
        &self,
        writer: &mut W,
        row: &[String],
        col_widths: &[usize],
    ) -> Result<(), ReportError> {
        write!(writer, "|")?;

        for (col_idx, content) in row.iter().enumerate() {
            let width = col_widths[col_idx];
            // 表示幅を計算（全角文字は2、半角文字は1）
            let padding = " ".repeat(width.saturating_sub(content.width()));

            match self.alignments[col_idx] {
                Alignment::Left => write!(writer, " {}{} |", content, padding)?,
                Alignment::Right => write!(writer, " {}{} |", padding, content)?,
            }
        }

        Ok(())
    }

    /// 列幅を計算（内部ヘルパー）
    ///
    /// ヘッダーとすべてのセルの表示幅から列ごとの最大幅を返します（最小3文字）。
    fn calculate_column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.width().max(3)).collect();

        for row in &self.cells {
            for (col_idx, content) in row.iter().enumerate() {
                widths[col_idx] = widths[col_idx].max(content.width());
            }
        }

        widths
    }

    /// 区切り行を生成（内部ヘルパー）
    ///
    /// 左揃えは`:---`、右揃えは`---:`。セル前後のスペース分を含めた長さになります。
    fn generate_separator(&self, col_widths: &[usize]) -> String {
        let mut separator = String::from("|");

        for (&width, alignment) in col_widths.iter().zip(&self.alignments) {
            let dashes = "-".repeat(width + 1);
            match alignment {
                Alignment::Left => separator.push_str(&format!(":{}|", dashes)),
                Alignment::Right => separator.push_str(&format!("{}:|", dashes)),
            }
        }

        separator
    }
}
