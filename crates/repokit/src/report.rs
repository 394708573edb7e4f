// Console reports. Everything here goes to stdout; diagnostics go through
// tracing to stderr.

use repokit_core::traits::UpdateResult;
use repokit_core::{DnsReport, FileOutcome, FixReport, RecordConfig, RecordOutcome};

const BANNER_WIDTH: usize = 60;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Header printed before a fixer runs
pub fn fix_header(title: &str, dry_run: bool) -> String {
    let suffix = if dry_run { " (dry run)" } else { "" };
    format!("{}\n{}{}\n{}", banner(), title, suffix, banner())
}

/// One line per fixed file, then the totals
pub fn fix_body(report: &FixReport) -> String {
    let mut out = String::new();

    for outcome in report.fixed_files() {
        if let FileOutcome::Fixed {
            path,
            removed_lines,
        } = outcome
        {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            out.push_str(&format!("✓ {} (-{} lines)\n", name, removed_lines));
        }
    }

    out.push_str(&format!(
        "\n{}\nScanned: {} | Fixed: {} files | Removed: {} lines\n{}",
        banner(),
        report.scanned(),
        report.fixed(),
        report.removed_lines(),
        banner()
    ));
    out
}

/// `name: title` per fixer
pub fn fixer_list<'a>(fixers: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    fixers
        .map(|(name, title)| format!("{:<24}{}", name, title))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dns_header(domain: &str, dry_run: bool) -> String {
    let suffix = if dry_run { " (dry run)" } else { "" };
    format!(
        "{}\nDNS Record Configuration{}\n{}\nDomain: {}\n",
        banner(),
        suffix,
        banner(),
        domain
    )
}

pub fn record_attempt(record: &RecordConfig, domain: &str) -> String {
    format!(
        "Adding {} record: {} -> {}",
        record.record_type,
        record.fqdn(domain),
        record.data
    )
}

pub fn record_result(outcome: &RecordOutcome) -> String {
    let record = &outcome.record;
    match &outcome.result {
        Ok(UpdateResult::Applied { .. }) => format!(
            "✓ Successfully configured {} record for {}\n",
            record.record_type, record.name
        ),
        Ok(UpdateResult::DryRun) => format!(
            "✓ Would configure {} record for {}\n",
            record.record_type, record.name
        ),
        Err(message) => {
            let optional = if record.required { "" } else { " (optional)" };
            format!(
                "✗ Failed to configure {} record{}\n  Response: {}\n",
                record.record_type, optional, message
            )
        }
    }
}

pub fn dns_summary(report: &DnsReport) -> String {
    if !report.succeeded() {
        return format!(
            "{}\n✗ DNS Configuration Failed\n{}\n\nPlease check the error messages above and try again.",
            banner(),
            banner()
        );
    }

    let mut out = format!(
        "{}\n✓ DNS Configuration Complete!\n{}\n\nDNS records configured:",
        banner(),
        banner()
    );
    for (i, outcome) in report.outcomes.iter().enumerate() {
        let record = &outcome.record;
        let note = if outcome.succeeded() { "" } else { " (skipped)" };
        out.push_str(&format!(
            "\n  {}. {}: {} -> {}{}",
            i + 1,
            record.record_type,
            record.fqdn(&report.domain),
            record.data,
            note
        ));
    }
    out.push_str("\n\nDNS propagation typically takes 5-15 minutes.");
    out
}
