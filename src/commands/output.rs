//! @acp:module "Command Output"
//! @acp:summary "Shared rendering of components and resolution outcomes"
//! @acp:domain cli
//! @acp:layer handler

use console::style;
use serde::Serialize;

use crate::error::ResolveError;
use crate::signature::ApiComponents;

/// @acp:summary "Outcome of resolving one member, serializable for --json"
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub signature: String,
    pub ok: bool,
    /// Public APIs the documentation links to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<ApiComponents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Overloads an ambiguous link could mean
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub almost_matches: Vec<ApiComponents>,
}

impl ResolutionReport {
    pub fn from_outcome(
        signature: &str,
        outcome: std::result::Result<Vec<ApiComponents>, ResolveError>,
    ) -> Self {
        match outcome {
            Ok(alternatives) => Self {
                signature: signature.to_string(),
                ok: true,
                alternatives,
                kind: None,
                message: None,
                almost_matches: Vec::new(),
            },
            Err(err) => {
                let almost_matches = match &err {
                    ResolveError::MultipleAlternativesFound { almost_matches, .. } => {
                        almost_matches.clone()
                    }
                    _ => Vec::new(),
                };
                Self {
                    signature: signature.to_string(),
                    ok: false,
                    alternatives: Vec::new(),
                    kind: Some(err.kind()),
                    message: Some(err.to_string()),
                    almost_matches,
                }
            }
        }
    }
}

/// Print the fields of a parsed signature or link
pub fn print_components(components: &ApiComponents) {
    println!("  Package: {}", components.package_name);
    println!("  Class: {}", components.class_name);
    if !components.member_name.is_empty() {
        println!("  Member: {}", components.member_name);
    }
    if !components.method_parameter_types.is_empty() {
        println!("  Parameters: {}", components.method_parameter_types);
    }
}

/// Print a human-readable resolution report
pub fn print_report(report: &ResolutionReport) {
    if report.ok {
        if report.alternatives.is_empty() {
            println!(
                "{} {} (no alternative required)",
                style("✓").green(),
                report.signature
            );
        } else {
            println!("{} {}", style("✓").green(), report.signature);
            for alternative in &report.alternatives {
                println!("    {} {}", style("→").cyan(), alternative);
            }
        }
        return;
    }

    eprintln!(
        "{} {} [{}]",
        style("✗").red(),
        report.signature,
        report.kind.unwrap_or("error")
    );
    if let Some(message) = &report.message {
        eprintln!("    {}", message);
    }
    for candidate in &report.almost_matches {
        eprintln!("    {} {}", style("•").dim(), candidate);
    }
}
