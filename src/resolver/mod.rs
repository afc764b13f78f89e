//! @acp:module "Public Alternative Resolver"
//! @acp:summary "Validate the public alternatives documented on hidden API members"
//! @acp:domain cli
//! @acp:layer service
//!
//! # Resolution
//!
//! A hidden member's documentation must point at a public replacement with
//! `{@link ...}`, or explain the absence of one with `{@code ...}`:
//!
//! 1. **Scan** the comment for link and code tags
//! 2. **Exempt** tag-less comments that carry an explanation, or whose member
//!    targets an SDK below the enforcement boundary
//! 3. **Parse** every link against the documented member's signature
//! 4. **Match** each link against the known public APIs
//!
//! One resolving link is enough. When none resolves, the failure of the first
//! link is reported.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace};

use crate::error::{ResolveError, SignatureSyntaxError};
use crate::javadoc::{scan_tags, DocTags};
use crate::signature::{
    parse_dex_signature, parse_link_target, ApiComponents, LinkTarget, PackageAndClassName,
};

/// First API level (Q) at which hidden members must document an alternative
pub const MIN_SDK_REQUIRING_PUBLIC_ALTERNATIVES: u32 = 29;

/// @acp:summary "Resolves {@link} alternatives against a fixed set of public APIs"
///
/// The public API set is fixed at construction; a resolver can be shared
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct ApiResolver {
    /// Sorted and de-duplicated
    potential_public_alternatives: Vec<ApiComponents>,
    public_api_set: HashSet<ApiComponents>,
    public_api_classes: HashSet<PackageAndClassName>,
    min_sdk_requiring_alternative: u32,
}

impl Default for ApiResolver {
    fn default() -> Self {
        Self::empty()
    }
}

impl ApiResolver {
    /// @acp:summary "Build a resolver from raw dex descriptors of public APIs"
    pub fn new<I, S>(public_apis: I) -> Result<Self, SignatureSyntaxError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = public_apis
            .into_iter()
            .map(|api| parse_dex_signature(api.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self::from_components(parsed))
    }

    /// @acp:summary "Build a resolver from already parsed public APIs"
    pub fn from_components(public_apis: impl IntoIterator<Item = ApiComponents>) -> Self {
        let potential_public_alternatives: Vec<ApiComponents> = public_apis
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let public_api_set = potential_public_alternatives.iter().cloned().collect();
        let public_api_classes = potential_public_alternatives
            .iter()
            .map(ApiComponents::package_and_class)
            .collect();

        debug!(
            count = potential_public_alternatives.len(),
            "Loaded public APIs"
        );

        Self {
            potential_public_alternatives,
            public_api_set,
            public_api_classes,
            min_sdk_requiring_alternative: MIN_SDK_REQUIRING_PUBLIC_ALTERNATIVES,
        }
    }

    /// Resolver with no known public APIs
    pub fn empty() -> Self {
        Self::from_components(Vec::new())
    }

    /// Override the SDK level from which an alternative is required
    pub fn with_min_sdk_requiring_alternative(mut self, sdk: u32) -> Self {
        self.min_sdk_requiring_alternative = sdk;
        self
    }

    pub fn min_sdk_requiring_alternative(&self) -> u32 {
        self.min_sdk_requiring_alternative
    }

    pub fn public_api_count(&self) -> usize {
        self.potential_public_alternatives.len()
    }

    pub fn public_apis(&self) -> &[ApiComponents] {
        &self.potential_public_alternatives
    }

    /// @acp:summary "Check the public alternatives documented for a member"
    ///
    /// `context_signature` is the dex descriptor of the documented member; it
    /// supplies the package and class of links like `{@link #foo}`.
    pub fn resolve_public_alternatives(
        &self,
        doc_comment: Option<&str>,
        context_signature: &str,
        max_target_sdk: u32,
    ) -> Result<(), ResolveError> {
        self.resolve_and_collect(doc_comment, context_signature, max_target_sdk)
            .map(|_| ())
    }

    /// @acp:summary "Resolve and return the public APIs the comment links to"
    ///
    /// Returns an empty list when the member is exempt from documenting an
    /// alternative.
    pub fn resolve_and_collect(
        &self,
        doc_comment: Option<&str>,
        context_signature: &str,
        max_target_sdk: u32,
    ) -> Result<Vec<ApiComponents>, ResolveError> {
        let tags = scan_tags(doc_comment.unwrap_or_default());

        if !tags.has_links() {
            return self
                .check_missing_alternative(doc_comment, &tags, max_target_sdk)
                .map(|_| Vec::new());
        }

        let context = parse_dex_signature(context_signature)?;
        let candidates = tags
            .links()
            .iter()
            .map(|tag| parse_link_target(&tag.body, &context))
            .collect::<Result<Vec<_>, _>>()?;

        let mut resolved = Vec::new();
        let mut first_failure = None;
        for candidate in candidates {
            match self.match_candidate(candidate) {
                Ok(api) => {
                    trace!(alternative = %api, "Resolved public alternative");
                    resolved.push(api);
                }
                Err(err) => {
                    trace!(error = %err, "Link did not resolve");
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
            }
        }

        match first_failure {
            Some(err) if resolved.is_empty() => {
                debug!(signature = context_signature, kind = err.kind(), "No link resolved");
                Err(err)
            }
            _ => Ok(resolved),
        }
    }

    /// Decide whether a comment without links is acceptable
    fn check_missing_alternative(
        &self,
        doc_comment: Option<&str>,
        tags: &DocTags,
        max_target_sdk: u32,
    ) -> Result<(), ResolveError> {
        if tags.has_explanation() {
            trace!(explanation = ?tags.code_spans(), "Absence of alternative is explained");
            return Ok(());
        }
        if max_target_sdk < self.min_sdk_requiring_alternative {
            trace!(max_target_sdk, "Grandfathered, no alternative required");
            return Ok(());
        }

        let documented = doc_comment.is_some_and(|doc| !doc.trim().is_empty());
        if documented && self.potential_public_alternatives.is_empty() {
            return Err(ResolveError::NoAlternativesSpecified);
        }
        Err(ResolveError::RequiredAlternativeNotSpecified {
            max_target_sdk,
            min_sdk: self.min_sdk_requiring_alternative,
        })
    }

    /// Match one parsed link against the public APIs, returning the public API
    /// it designates
    fn match_candidate(&self, target: LinkTarget) -> Result<ApiComponents, ResolveError> {
        let LinkTarget {
            api: alternative,
            has_parameter_list,
        } = target;

        if alternative.is_class_reference() {
            if self.public_api_classes.contains(&alternative.package_and_class()) {
                return Ok(alternative);
            }
            return Err(ResolveError::ClassAlternativeNotFound { alternative });
        }

        if self.public_api_set.contains(&alternative) {
            return Ok(alternative);
        }

        // Without a parameter list, {@link #foo} can still name a unique overload
        if has_parameter_list {
            return Err(ResolveError::MemberAlternativeNotFound { alternative });
        }

        let mut almost_matches: Vec<ApiComponents> = self
            .potential_public_alternatives
            .iter()
            .filter(|api| api.equals_ignoring_params(&alternative))
            .cloned()
            .collect();

        match almost_matches.len() {
            0 => Err(ResolveError::MemberAlternativeNotFound { alternative }),
            1 => Ok(almost_matches.remove(0)),
            _ => Err(ResolveError::MultipleAlternativesFound {
                alternative,
                almost_matches,
            }),
        }
    }
}
