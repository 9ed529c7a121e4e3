//! Report artifact rendering.
//!
//! One artifact per run, written to the current working directory and
//! overwritten each time. The HTML report is self-contained (inline
//! styles, no external assets); the JSON report carries the same data in
//! machine-readable form.

use std::fs;

use clap::ValueEnum;
use serde::Serialize;

use crate::model::AggregateReport;
use crate::reporter;

/// File name of the HTML report artifact.
pub const HTML_REPORT_FILE: &str = "report.html";

/// File name of the JSON report artifact.
pub const JSON_REPORT_FILE: &str = "report.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

impl ReportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Html => HTML_REPORT_FILE,
            ReportFormat::Json => JSON_REPORT_FILE,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a AggregateReport,
    missing_entries_count: usize,
}

/// Write the report artifact for this run.
///
/// A write failure is logged but never fatal; the run's exit status is
/// governed by the missing-entry count, not by report delivery.
pub fn write_report(report: &AggregateReport, format: ReportFormat) {
    let content = match render(report, format) {
        Ok(content) => content,
        Err(err) => {
            reporter::warn(&format!("Failed to render report: {}", err));
            return;
        }
    };
    let file_name = format.file_name();
    if let Err(err) = fs::write(file_name, content) {
        reporter::warn(&format!("Failed to write report to {}: {}", file_name, err));
    }
}

fn render(report: &AggregateReport, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Html => Ok(render_html(report)),
        ReportFormat::Json => {
            let json = JsonReport {
                report,
                missing_entries_count: report.missing_entries_count(),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
    }
}

/// Render the self-contained HTML report.
///
/// Languages with zero missing keys are omitted from the body; a run
/// with no missing keys at all says so explicitly.
pub fn render_html(report: &AggregateReport) -> String {
    let total = report.missing_entries_count();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Localization Report</title>\n<style>\n");
    html.push_str(concat!(
        "body { font-family: -apple-system, Helvetica, Arial, sans-serif; ",
        "margin: 2em; color: #24292f; }\n",
        "h1 { border-bottom: 2px solid #d0d7de; padding-bottom: 0.3em; }\n",
        "h2 { margin-bottom: 0.2em; }\n",
        ".path { color: #57606a; font-size: 0.9em; font-family: monospace; }\n",
        ".count { color: #cf222e; font-weight: bold; }\n",
        ".ok { color: #1a7f37; font-weight: bold; }\n",
        "ul { font-family: monospace; }\n",
    ));
    html.push_str("</style>\n</head>\n<body>\n<h1>Localization Report</h1>\n");

    if total == 0 {
        html.push_str("<p class=\"ok\">No missing localization entries.</p>\n");
    } else {
        html.push_str(&format!(
            "<p>Missing <span class=\"count\">{}</span> {} in total.</p>\n",
            total,
            if total == 1 { "entry" } else { "entries" }
        ));
        for language in &report.language_reports {
            if language.missing_keys.is_empty() {
                continue;
            }
            html.push_str(&format!(
                "<h2>{}</h2>\n<p class=\"path\">{}</p>\n",
                escape_html(&language.language_name),
                escape_html(&language.source_path)
            ));
            html.push_str(&format!(
                "<p><span class=\"count\">{}</span> missing {}:</p>\n<ul>\n",
                language.missing_keys.len(),
                if language.missing_keys.len() == 1 {
                    "key"
                } else {
                    "keys"
                }
            ));
            for key in &language.missing_keys {
                html.push_str(&format!("<li>{}</li>\n", escape_html(key)));
            }
            html.push_str("</ul>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
