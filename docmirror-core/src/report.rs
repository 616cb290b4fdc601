// Report generation from a mirror summary

use colored::Colorize;
use docmirror_scanner::MirrorSummary;
use docmirror_scanner::result::WrittenDocument;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("Unknown report format: {}", other)),
        }
    }
}

pub fn render_report(
    summary: &MirrorSummary,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_mirror_report(summary)),
        ReportFormat::Json => serde_json::to_string_pretty(summary),
    }
}

/// Generate a human readable report of a finished mirror run
pub fn generate_mirror_report(summary: &MirrorSummary) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str(&format!("{}\n", "# Summary:".bold()));
    report.push_str(&format!("  Start URL: {}\n", summary.start_url));
    report.push_str(&format!("  URLs fetched: {}\n", summary.fetched.len()));
    report.push_str(&format!("  Documents written: {}\n", summary.written.len()));
    report.push_str(&format!(
        "  Duplicates skipped: {}\n",
        summary.duplicates.len()
    ));
    report.push_str(&format!(
        "  Non-success responses: {}\n",
        summary.non_success.len()
    ));
    report.push_str(&format!("  Outside domain filter: {}\n", summary.filtered));
    report.push_str(&format!(
        "  Duration: {:.1}s\n",
        summary.duration().num_milliseconds() as f64 / 1000.0
    ));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Group written files by directory
    let mut by_directory: BTreeMap<String, Vec<&WrittenDocument>> = BTreeMap::new();
    for written in &summary.written {
        let directory = written
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        by_directory.entry(directory).or_default().push(written);
    }

    for (directory, documents) in &by_directory {
        report.push_str(&format!("## {}\n", directory.bold()));
        report.push_str(&format!("  {} documents written\n\n", documents.len()));
        for document in documents {
            let file_name = document
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| document.path.display().to_string());
            report.push_str(&format!(
                "  {} {}\n",
                file_name,
                document.identifier.bright_black()
            ));
        }
        report.push('\n');
    }

    if !summary.non_success.is_empty() {
        report.push_str(&format!("{}\n", "## Skipped responses".bold()));
        for skipped in &summary.non_success {
            let status = skipped.status_code.to_string();
            let status = match skipped.status_code {
                300..=399 => status.cyan(),
                400..=499 => status.yellow(),
                500..=599 => status.red(),
                _ => status.normal(),
            };
            report.push_str(&format!("  {} {}\n", status, skipped.url));
        }
        report.push('\n');
    }

    report
}
