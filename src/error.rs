//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for signature parsing and alternative resolution"
//! @acp:domain cli
//! @acp:layer model
//!
//! Three layers of errors:
//!
//! - [`SignatureSyntaxError`] and [`JavadocLinkSyntaxError`] come out of the
//!   parsers in [`crate::signature`].
//! - [`ResolveError`] is the closed set of outcomes of a failed
//!   [`crate::ApiResolver::resolve_public_alternatives`] call.
//! - [`ApiAltError`] wraps everything the CLI plumbing can hit (I/O, JSON,
//!   malformed public API lists).

use thiserror::Error;

use crate::signature::ApiComponents;

/// @acp:summary "Malformed bytecode-style member descriptor"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} in signature `{signature}` at position {position}")]
pub struct SignatureSyntaxError {
    pub message: String,
    pub signature: String,
    /// Byte offset where parsing stopped
    pub position: usize,
}

impl SignatureSyntaxError {
    pub fn new(message: impl Into<String>, signature: &str, position: usize) -> Self {
        Self {
            message: message.into(),
            signature: signature.to_string(),
            position,
        }
    }
}

/// @acp:summary "Malformed {@link} tag body"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} in link `{link}` at position {position}")]
pub struct JavadocLinkSyntaxError {
    pub message: String,
    pub link: String,
    /// Byte offset into the link body
    pub position: usize,
    /// Set when the context signature, not the link itself, was malformed
    #[source]
    pub source: Option<SignatureSyntaxError>,
}

impl JavadocLinkSyntaxError {
    pub fn new(message: impl Into<String>, link: &str, position: usize) -> Self {
        Self {
            message: message.into(),
            link: link.to_string(),
            position,
            source: None,
        }
    }

    pub fn invalid_context(link: &str, source: SignatureSyntaxError) -> Self {
        Self {
            message: "Could not parse the context signature".to_string(),
            link: link.to_string(),
            position: 0,
            source: Some(source),
        }
    }
}

/// @acp:summary "Why a member's documented public alternative was rejected"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    SignatureSyntax(#[from] SignatureSyntaxError),

    #[error(transparent)]
    JavadocLinkSyntax(#[from] JavadocLinkSyntaxError),

    /// A class-only link names a class with no public members
    #[error("Specified class {alternative} does not exist or is not public")]
    ClassAlternativeNotFound { alternative: ApiComponents },

    /// Package and class resolved, but no public member matches
    #[error("Specified member {alternative} does not exist or is not public")]
    MemberAlternativeNotFound { alternative: ApiComponents },

    /// An unqualified member name matches several public overloads
    #[error(
        "Specified link {alternative} is ambiguous, add parameter types to pick one of: {}",
        join_components(.almost_matches)
    )]
    MultipleAlternativesFound {
        alternative: ApiComponents,
        almost_matches: Vec<ApiComponents>,
    },

    #[error(
        "Signature is hidden (maxTargetSdk={max_target_sdk}, enforced from {min_sdk}) but no public alternative or explanation was specified"
    )]
    RequiredAlternativeNotSpecified { max_target_sdk: u32, min_sdk: u32 },

    #[error("No public alternative was specified and no public APIs are known")]
    NoAlternativesSpecified,
}

impl ResolveError {
    /// True for the "alternative not found" family (class or member level)
    pub fn is_alternative_not_found(&self) -> bool {
        matches!(
            self,
            ResolveError::ClassAlternativeNotFound { .. }
                | ResolveError::MemberAlternativeNotFound { .. }
        )
    }

    /// Stable name used for grouping in reports
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::SignatureSyntax(_) => "signature-syntax",
            ResolveError::JavadocLinkSyntax(_) => "javadoc-link-syntax",
            ResolveError::ClassAlternativeNotFound { .. } => "class-alternative-not-found",
            ResolveError::MemberAlternativeNotFound { .. } => "member-alternative-not-found",
            ResolveError::MultipleAlternativesFound { .. } => "multiple-alternatives-found",
            ResolveError::RequiredAlternativeNotSpecified { .. } => {
                "required-alternative-not-specified"
            }
            ResolveError::NoAlternativesSpecified => "no-alternatives-specified",
        }
    }
}

fn join_components(components: &[ApiComponents]) -> String {
    components
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// @acp:summary "Crate-level error for CLI plumbing"
#[derive(Debug, Error)]
pub enum ApiAltError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Public API list line {line}: {source}")]
    PublicApiList {
        line: usize,
        #[source]
        source: SignatureSyntaxError,
    },
}

pub type Result<T> = std::result::Result<T, ApiAltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_not_found_family() {
        let alternative = ApiComponents::new("a.b", "C", "foo", "int");
        assert!(ResolveError::MemberAlternativeNotFound {
            alternative: alternative.clone()
        }
        .is_alternative_not_found());
        assert!(ResolveError::ClassAlternativeNotFound {
            alternative: alternative.clone()
        }
        .is_alternative_not_found());
        assert!(!ResolveError::MultipleAlternativesFound {
            alternative,
            almost_matches: vec![],
        }
        .is_alternative_not_found());
        assert!(!ResolveError::NoAlternativesSpecified.is_alternative_not_found());
    }

    #[test]
    fn test_ambiguity_message_lists_candidates() {
        let err = ResolveError::MultipleAlternativesFound {
            alternative: ApiComponents::new("a.b", "C", "foo", ""),
            almost_matches: vec![
                ApiComponents::new("a.b", "C", "foo", "int"),
                ApiComponents::new("a.b", "C", "foo", "int, int"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("a.b.C#foo(int)"));
        assert!(message.contains("a.b.C#foo(int, int)"));
        assert_eq!(err.kind(), "multiple-alternatives-found");
    }

    #[test]
    fn test_link_error_keeps_context_source() {
        let cause = SignatureSyntaxError::new("Expected 'L'", "bad", 0);
        let err = JavadocLinkSyntaxError::invalid_context("#foo", cause.clone());
        assert_eq!(std::error::Error::source(&err).map(|s| s.to_string()), Some(cause.to_string()));
    }
}
