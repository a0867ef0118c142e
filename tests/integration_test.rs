//! Integration Tests for xlsxissues
//!
//! End-to-end report generation against workbooks generated in memory.

use rust_xlsxwriter::*;
use std::io::Cursor;
use xlsxissues::{Report, ReportBuilder};

// Helper module for generating test fixtures
mod fixtures {
    use super::*;

    /// One sheet "Pages" with real headers `label`, `is_compliant`
    pub fn generate_pages_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Pages")?;

        worksheet.write_string(0, 0, "label")?;
        worksheet.write_string(0, 1, "is_compliant")?;

        worksheet.write_string(1, 0, "Missing alt text")?;
        worksheet.write_string(1, 1, "false")?;

        worksheet.write_string(2, 0, "Color contrast")?;
        worksheet.write_string(2, 1, "true")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Title row first, real headers embedded in the first data row
    pub fn generate_embedded_header() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Issues")?;

        worksheet.write_string(0, 0, "Site audit export")?;

        worksheet.write_string(1, 0, "ISSUE_NAME")?;
        worksheet.write_string(1, 1, "issue_name")?;
        worksheet.write_string(1, 2, "severity_type")?;
        worksheet.write_string(1, 3, "is_compliant")?;

        worksheet.write_string(2, 0, "ignored column")?;
        worksheet.write_string(2, 1, "Empty link")?;
        worksheet.write_string(2, 2, "critical")?;
        worksheet.write_boolean(2, 3, false)?;

        worksheet.write_string(3, 0, "ignored column")?;
        worksheet.write_string(3, 1, "Page title present")?;
        worksheet.write_string(3, 2, "info")?;
        worksheet.write_boolean(3, 3, true)?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Every flavor of `is_compliant` value
    pub fn generate_compliance_values() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Checks")?;

        worksheet.write_string(0, 0, "issue_name")?;
        worksheet.write_string(0, 1, "is_compliant")?;

        let rows = [
            ("upper", Some("TRUE")),
            ("title", Some("True")),
            ("lower", Some("true")),
            ("no", Some("no")),
            ("false", Some("FALSE")),
            ("blank", None),
        ];
        for (i, (name, value)) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, *name)?;
            if let Some(value) = value {
                worksheet.write_string(row, 1, *value)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    /// No known columns, 25 data rows
    pub fn generate_crawl_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Crawl")?;

        worksheet.write_string(0, 0, "url")?;
        worksheet.write_string(0, 1, "status")?;

        for i in 0..25u32 {
            worksheet.write_string(i + 1, 0, &format!("/page-{}", i))?;
            worksheet.write_number(i + 1, 1, 200.0)?;
        }

        Ok(workbook.save_to_buffer()?)
    }

    /// Several sheets, including an empty one and a header-only one
    pub fn generate_multi_sheets() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();

        let summary = workbook.add_worksheet();
        summary.set_name("Summary")?;
        summary.write_string(0, 0, "metric")?;
        summary.write_string(0, 1, "value")?;
        summary.write_string(1, 0, "pages crawled")?;
        summary.write_number(1, 1, 42.0)?;

        let empty = workbook.add_worksheet();
        empty.set_name("Empty")?;

        let header_only = workbook.add_worksheet();
        header_only.set_name("HeaderOnly")?;
        header_only.write_string(0, 0, "label")?;
        header_only.write_string(0, 1, "is_compliant")?;

        let pages = workbook.add_worksheet();
        pages.set_name("Pages")?;
        pages.write_string(0, 0, "label")?;
        pages.write_string(0, 1, "description")?;
        pages.write_string(0, 2, "is_compliant")?;
        pages.write_string(1, 0, "Missing lang")?;
        pages.write_string(1, 1, "html element has no lang | attribute")?;
        pages.write_string(1, 2, "false")?;

        Ok(workbook.save_to_buffer()?)
    }
}

fn generate(data: Vec<u8>) -> Report {
    let generator = ReportBuilder::new().build().unwrap();
    generator.generate(Cursor::new(data))
}

#[test]
fn test_pages_sheet_end_to_end() {
    let report = generate(fixtures::generate_pages_sheet().unwrap());

    assert_eq!(
        report.to_markdown(),
        "# Site Issues Report\n\
         Generated from: issues-68299-2025-12-09.xls\n\
         Date: 2025-12-09\n\n\
         ## Sheets Found: 1\n\n\
         ### Pages\n\n\
         **Non-Compliant Issues (1):**\n\n\
         | label            | is_compliant |\n\
         |:-----------------|:-------------|\n\
         | Missing alt text | false        |\n\
         \n"
    );
    assert_eq!(report.line_count(), 8);
}

#[test]
fn test_embedded_header_is_promoted() {
    let report = generate(fixtures::generate_embedded_header().unwrap());
    let markdown = report.to_markdown();

    assert!(markdown.contains("### Issues\n"));
    assert!(markdown.contains("**Non-Compliant Issues (1):**"));
    assert!(markdown.contains("| issue_name | severity_type | is_compliant |"));
    assert!(markdown.contains("| Empty link | critical      | FALSE        |"));
    assert!(!markdown.contains("Page title present"));
    assert!(!markdown.contains("ignored column"));
    assert!(!markdown.contains("Site audit export"));
}

#[test]
fn test_compliance_values() {
    let report = generate(fixtures::generate_compliance_values().unwrap());
    let markdown = report.to_markdown();

    assert!(markdown.contains("**Non-Compliant Issues (3):**"));
    for included in ["| no ", "| false ", "| blank "] {
        assert!(markdown.contains(included), "missing row {}", included);
    }
    for excluded in ["| upper ", "| title ", "| lower "] {
        assert!(!markdown.contains(excluded), "unexpected row {}", excluded);
    }
}

#[test]
fn test_raw_preview_without_known_columns() {
    let report = generate(fixtures::generate_crawl_sheet().unwrap());
    let markdown = report.to_markdown();

    assert!(markdown.contains("### Crawl\n"));
    assert!(!markdown.contains("Non-Compliant Issues"));
    assert!(markdown.contains("| url      | status |"));
    assert!(markdown.contains("|:---------|-------:|"));
    assert!(markdown.contains("| /page-19 |    200 |"));
    assert!(!markdown.contains("/page-20"));

    let table_rows = markdown
        .lines()
        .filter(|line| line.starts_with("| /page-"))
        .count();
    assert_eq!(table_rows, 20);
}

#[test]
fn test_multi_sheets_in_order() {
    let report = generate(fixtures::generate_multi_sheets().unwrap());
    let lines = report.lines();

    assert_eq!(lines[3], "## Sheets Found: 4\n");
    assert_eq!(lines[4], "### Summary\n");
    assert!(lines[5].contains("| pages crawled |    42 |"));
    assert_eq!(lines[6], "\n");
    // Empty and HeaderOnly produce nothing
    assert_eq!(lines[7], "### Pages\n");
    assert_eq!(lines[8], "**Non-Compliant Issues (1):**\n");
    assert!(lines[9].contains("html element has no lang \\| attribute"));
    assert_eq!(lines[10], "\n");
    assert_eq!(report.line_count(), 11);

    let markdown = report.to_markdown();
    assert!(!markdown.contains("### Empty"));
    assert!(!markdown.contains("### HeaderOnly"));
}

#[test]
fn test_unreadable_workbook_yields_error_report() {
    let report = generate(b"this is not a spreadsheet".to_vec());
    let lines = report.lines();

    assert_eq!(report.line_count(), 4);
    assert_eq!(lines[0], "# Site Issues Report");
    assert_eq!(lines[1], "Generated from: issues-68299-2025-12-09.xls");
    assert_eq!(lines[2], "Date: 2025-12-09\n");
    assert!(lines[3].starts_with("Error: "));
    assert!(!report.to_markdown().contains("Sheets Found"));
}

#[test]
fn test_generation_is_idempotent() {
    let data = fixtures::generate_multi_sheets().unwrap();
    let first = generate(data.clone()).to_markdown();
    let second = generate(data).to_markdown();
    assert_eq!(first, second);
}

#[test]
fn test_custom_preamble() {
    let generator = ReportBuilder::new()
        .with_title("Accessibility Audit")
        .with_source_name("audit.xlsx")
        .with_report_date("2026-01-31")
        .build()
        .unwrap();

    let report = generator.generate(Cursor::new(fixtures::generate_pages_sheet().unwrap()));
    assert!(report
        .to_markdown()
        .starts_with("# Accessibility Audit\nGenerated from: audit.xlsx\nDate: 2026-01-31\n"));
}

#[test]
fn test_write_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("issues.xlsx");
    let output = dir.path().join("SITE_ISSUES.md");
    std::fs::write(&input, fixtures::generate_pages_sheet().unwrap()).unwrap();

    let generator = ReportBuilder::new().build().unwrap();
    let summary = generator.write_report(&input, &output).unwrap();

    assert_eq!(summary.output_path, output);
    assert_eq!(summary.line_count, 8);

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("**Non-Compliant Issues (1):**"));
    assert_eq!(written, generator.generate_from_path(&input).to_markdown());
}

#[test]
fn test_write_report_missing_input_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("SITE_ISSUES.md");

    let generator = ReportBuilder::new().build().unwrap();
    let summary = generator
        .write_report(dir.path().join("missing.xls"), &output)
        .unwrap();

    assert_eq!(summary.line_count, 4);
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# Site Issues Report\n"));
    assert!(written.contains("\nError: IO error"));
}

#[test]
fn test_write_report_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("issues.xlsx");
    std::fs::write(&input, fixtures::generate_pages_sheet().unwrap()).unwrap();

    let generator = ReportBuilder::new().build().unwrap();
    let result = generator.write_report(&input, dir.path().join("no-such-dir").join("out.md"));

    assert!(matches!(result, Err(xlsxissues::ReportError::Io(_))));
}
