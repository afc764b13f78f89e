//! @acp:module "Public API List"
//! @acp:summary "Load the public API surface from descriptor lists or hidden API flag CSVs"
//! @acp:domain cli
//! @acp:layer io
//!
//! Two line formats are accepted, and may be mixed:
//!
//! - a bare descriptor: `Landroid/app/Activity;->finish()V`
//! - a flags row: `Landroid/app/Activity;->finish()V,public-api,system-api`
//!
//! Flag rows only contribute when they carry `public-api` or `sdk`.
//! Blank lines and `#` comments are skipped.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{ApiAltError, Result};
use crate::resolver::ApiResolver;
use crate::signature::{parse_dex_signature, ApiComponents};

/// Flags that mark a row of a hidden API flags file as public
const PUBLIC_FLAGS: &[&str] = &["public-api", "sdk"];

/// @acp:summary "Parsed public API surface"
#[derive(Debug, Clone, Default)]
pub struct PublicApiList {
    apis: Vec<ApiComponents>,
    skipped: usize,
}

impl PublicApiList {
    /// @acp:summary "Parse a list from text"
    pub fn from_text(text: &str) -> Result<Self> {
        let mut list = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split(',');
            let descriptor = fields.next().unwrap_or_default().trim();
            let flags: Vec<&str> = fields.map(str::trim).collect();
            if !flags.is_empty() && !flags.iter().any(|f| PUBLIC_FLAGS.contains(f)) {
                trace!(line = index + 1, descriptor, "Skipping non-public row");
                list.skipped += 1;
                continue;
            }

            let api = parse_dex_signature(descriptor).map_err(|source| {
                ApiAltError::PublicApiList {
                    line: index + 1,
                    source,
                }
            })?;
            list.apis.push(api);
        }

        debug!(
            apis = list.apis.len(),
            skipped = list.skipped,
            "Parsed public API list"
        );
        Ok(list)
    }

    /// @acp:summary "Read and parse a list file"
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_text(&content)
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    /// Rows dropped because their flags were not public
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn apis(&self) -> &[ApiComponents] {
        &self.apis
    }

    /// @acp:summary "Build a resolver over this list"
    pub fn into_resolver(self, min_sdk_requiring_alternative: u32) -> ApiResolver {
        ApiResolver::from_components(self.apis)
            .with_min_sdk_requiring_alternative(min_sdk_requiring_alternative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_descriptor_lines() {
        let list = PublicApiList::from_text(
            "# public surface\nLa/b/C;->foo(I)V\n\n  La/b/C;->bar:J  \n",
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.apis()[1].member_name, "bar");
    }

    #[test]
    fn test_flag_rows_filtered() {
        let list = PublicApiList::from_text(
            "La/b/C;->foo(I)V,public-api,system-api\n\
             La/b/C;->hidden()V,blocked\n\
             La/b/C;->sdk()V,sdk\n",
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.skipped(), 1);
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = PublicApiList::from_text("La/b/C;->foo(I)V\nLa/b/C;->bar(Q)V\n").unwrap_err();
        match err {
            ApiAltError::PublicApiList { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_resolver_keeps_boundary() {
        let list = PublicApiList::from_text("La/b/C;->foo(I)V\n").unwrap();
        let resolver = list.into_resolver(30);
        assert_eq!(resolver.min_sdk_requiring_alternative(), 30);
        assert_eq!(resolver.public_api_count(), 1);
    }
}
