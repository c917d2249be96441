// src/presentation.rs
use std::{fmt::Write, path::Path};

use luminosity_domain::{
    analytics::{DistributionEntry, DistributionList},
    model::SidecarFileStats,
};
use luminosity_shared_kernel::FileSize;
use luminosity_usecase::StatsReport;

const EMPTY_LABEL: &str = "(none)";

/// Plain-text rendering of a merged stats report.
pub fn stats_table(report: &StatsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "luminosity v{} · catalogs={} · photos={}",
        crate::VERSION,
        report.catalogs_processed,
        report.stats.photo_total()
    );
    for path in &report.paths {
        let _ = writeln!(out, "  {}", path.display());
    }

    for (title, list) in report.stats.sections() {
        out.push('\n');
        let _ = writeln!(out, "{title}");
        write_distribution(&mut out, &ordered(list, std::ptr::eq(list, &report.stats.by_date)));
    }
    out
}

/// Days stay chronological; every other section lists the largest counts first.
fn ordered(list: &DistributionList, chronological: bool) -> Vec<&DistributionEntry> {
    if chronological { list.entries().iter().collect() } else { list.ranked() }
}

fn write_distribution(out: &mut String, entries: &[&DistributionEntry]) {
    if entries.is_empty() {
        let _ = writeln!(out, "  {EMPTY_LABEL}");
        return;
    }
    let label_of = |label: &str| if label.is_empty() { EMPTY_LABEL.to_string() } else { label.to_string() };
    let width = entries.iter().map(|e| label_of(&e.label).chars().count()).max().unwrap_or(0);
    for entry in entries {
        let _ = writeln!(out, "  {:<width$}  {:>8}", label_of(&entry.label), entry.count);
    }
}

pub fn sidecar_summary(catalog: &Path, stats: &SidecarFileStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sidecar Summary for {}", catalog.display());
    let _ = writeln!(out, "  Count:             {}", stats.count);
    let _ = writeln!(out, "  Total Size:        {:#}", FileSize::from(stats.total_size_bytes));
    let _ = writeln!(out, "  Missing Sidecars:  {}", stats.missing_sidecar_count);
    let _ = writeln!(out, "  Missing Originals: {}", stats.missing_original_count);
    out
}
