//! @acp:module "Batch Command"
//! @acp:summary "Resolve public alternatives for many members in parallel"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Input is JSON lines, one member per line:
//!
//! ```text
//! {"signature": "La/b/C;->foo()V", "doc": "Use {@link #bar(int)}", "maxTargetSdk": 30}
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Deserialize;

use super::output::{print_report, ResolutionReport};
use super::resolve::load_resolver;
use crate::config::Config;
use crate::resolver::ApiResolver;

/// Options for the batch command
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// JSON lines input; `-` reads stdin
    pub input: PathBuf,
    /// Public API list (overrides config)
    pub public_apis: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// @acp:summary "One member to check"
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEntry {
    pub signature: String,
    #[serde(default)]
    pub doc: Option<String>,
    pub max_target_sdk: u32,
}

/// Parse JSON lines, skipping blank lines
pub fn parse_entries(text: &str) -> Result<Vec<MemberEntry>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<MemberEntry>(line)
                .with_context(|| format!("Invalid member entry on line {}", index + 1))
        })
        .collect()
}

/// Resolve every entry in parallel, preserving input order
pub fn resolve_entries(
    resolver: &ApiResolver,
    entries: &[MemberEntry],
    progress: Option<&ProgressBar>,
) -> Vec<ResolutionReport> {
    entries
        .par_iter()
        .map(|entry| {
            let outcome = resolver.resolve_and_collect(
                entry.doc.as_deref(),
                &entry.signature,
                entry.max_target_sdk,
            );
            if let Some(pb) = progress {
                pb.inc(1);
            }
            ResolutionReport::from_outcome(&entry.signature, outcome)
        })
        .collect()
}

/// Execute the batch command
pub fn execute_batch(options: BatchOptions, config: &Config) -> Result<()> {
    let resolver = load_resolver(config, options.public_apis.as_deref())?;

    let text = if options.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&options.input)
            .with_context(|| format!("Failed to read {}", options.input.display()))?
    };
    let entries = parse_entries(&text)?;

    let progress = (!options.json).then(|| create_progress_bar(entries.len() as u64));
    let reports = resolve_entries(&resolver, &entries, progress.as_ref());
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let failures: Vec<&ResolutionReport> = reports.iter().filter(|r| !r.ok).collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_summary(&reports, &failures);
    }

    if !failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("resolving");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summary(reports: &[ResolutionReport], failures: &[&ResolutionReport]) {
    println!(
        "{} Checked {} members: {} ok, {} failed",
        style("→").cyan(),
        reports.len(),
        reports.len() - failures.len(),
        failures.len()
    );

    let mut by_kind: BTreeMap<&str, Vec<&ResolutionReport>> = BTreeMap::new();
    for report in failures {
        by_kind
            .entry(report.kind.unwrap_or("error"))
            .or_default()
            .push(report);
    }

    for (kind, reports) in by_kind {
        println!("\n  {} ({} members)", style(kind).red(), reports.len());
        for report in reports.iter().take(10) {
            print_report(report);
        }
        if reports.len() > 10 {
            println!("    ... and {} more", reports.len() - 10);
        }
    }
}
