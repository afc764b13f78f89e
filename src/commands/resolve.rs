//! @acp:module "Resolve Command"
//! @acp:summary "Check the documented public alternative of one hidden member"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use super::output::{print_report, ResolutionReport};
use crate::config::Config;
use crate::public_api::PublicApiList;
use crate::resolver::ApiResolver;

/// Options for the resolve command
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Dex descriptor of the documented member
    pub signature: String,
    /// Documentation comment; `-` reads stdin, `None` means undocumented
    pub doc: Option<String>,
    /// maxTargetSdk of the member
    pub max_target_sdk: u32,
    /// Public API list (overrides config)
    pub public_apis: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// Build a resolver from the configured or explicit public API list
pub fn load_resolver(config: &Config, explicit: Option<&Path>) -> Result<ApiResolver> {
    match config.public_apis_path(explicit) {
        Some(path) => {
            let list = PublicApiList::from_file(&path)
                .with_context(|| format!("Failed to load public APIs from {}", path.display()))?;
            if list.is_empty() {
                tracing::warn!("Public API list {} is empty", path.display());
            }
            if list.skipped() > 0 {
                tracing::info!(
                    "Ignored {} non-public rows in {}",
                    list.skipped(),
                    path.display()
                );
            }
            Ok(list.into_resolver(config.min_sdk_requiring_alternative))
        }
        None => {
            tracing::warn!("No public API list configured, every link will fail to resolve");
            Ok(ApiResolver::empty()
                .with_min_sdk_requiring_alternative(config.min_sdk_requiring_alternative))
        }
    }
}

/// Execute the resolve command
pub fn execute_resolve(options: ResolveOptions, config: &Config) -> Result<()> {
    let resolver = load_resolver(config, options.public_apis.as_deref())?;

    let doc = match options.doc.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        other => other.map(str::to_string),
    };

    let outcome =
        resolver.resolve_and_collect(doc.as_deref(), &options.signature, options.max_target_sdk);
    let report = ResolutionReport::from_outcome(&options.signature, outcome);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        if !report.ok {
            eprintln!(
                "  {} checked against {} public APIs",
                style("•").dim(),
                resolver.public_api_count()
            );
        }
    }

    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn list_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_explicit_list_overrides_config() {
        let configured = list_file(&["La/b/C;->foo(I)V"]);
        let explicit = list_file(&["La/b/C;->foo(I)V", "La/b/C;->bar(J)V,sdk"]);
        let config = Config {
            public_apis: Some(configured.path().to_path_buf()),
            ..Config::default()
        };

        let resolver = load_resolver(&config, Some(explicit.path())).unwrap();
        assert_eq!(resolver.public_api_count(), 2);

        let resolver = load_resolver(&config, None).unwrap();
        assert_eq!(resolver.public_api_count(), 1);
    }

    #[test]
    fn test_no_list_gives_empty_resolver() {
        let config = Config {
            min_sdk_requiring_alternative: 31,
            ..Config::default()
        };
        let resolver = load_resolver(&config, None).unwrap();
        assert_eq!(resolver.public_api_count(), 0);
        assert_eq!(resolver.min_sdk_requiring_alternative(), 31);
    }

    #[test]
    fn test_flags_rows_filtered_when_loading() {
        let file = list_file(&["La/b/C;->foo(I)V,public-api", "La/b/C;->bar()V,blocked"]);
        let resolver = load_resolver(&Config::default(), Some(file.path())).unwrap();
        assert_eq!(resolver.public_api_count(), 1);
    }

    #[test]
    fn test_missing_list_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = load_resolver(&Config::default(), Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to load public APIs"));
    }
}
