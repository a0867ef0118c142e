//! Parser Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! 形式（XLS / XLSX / XLSB / ODS）はファイル内容から自動判定します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
