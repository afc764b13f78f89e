#![forbid(unsafe_code)]

//! @acp:module "apialt Library"
//! @acp:summary "Resolve public alternatives documented on hidden API members"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability experimental
//!
//! # apialt
//!
//! Hidden platform APIs must tell app developers what to use instead. The
//! documentation of a hidden member points at its public replacement with
//! `{@link ...}`; this crate checks that the link names exactly one known
//! public API.
//!
//! ## Features
//!
//! - **Dex signatures**: strict parsing of `Lpkg/Class;->member(Params)Ret`
//! - **Javadoc links**: `{@link pkg.Class#member(params)}` with context deduction
//! - **Resolution**: exact, overload-by-name, and class-level matching with
//!   typed errors
//!
//! ## Example
//!
//! ```rust
//! use apialt::{ApiResolver, ResolveError};
//!
//! let resolver = ApiResolver::new(["La/b/C;->foo(I)V", "La/b/C;->foo(II)V"])?;
//!
//! resolver.resolve_public_alternatives(
//!     Some("Use {@link #foo(int)} instead."),
//!     "La/b/C;->bar()V",
//!     30,
//! )?;
//!
//! let err = resolver
//!     .resolve_public_alternatives(Some("Use {@link #foo}"), "La/b/C;->bar()V", 30)
//!     .unwrap_err();
//! assert!(matches!(err, ResolveError::MultipleAlternativesFound { .. }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod javadoc;
pub mod public_api;
pub mod resolver;
pub mod signature;

// Re-exports
pub use config::Config;
pub use error::{ApiAltError, JavadocLinkSyntaxError, ResolveError, Result, SignatureSyntaxError};
pub use javadoc::{scan_tags, DocTags, LinkTag};
pub use public_api::PublicApiList;
pub use resolver::{ApiResolver, MIN_SDK_REQUIRING_PUBLIC_ALTERNATIVES};
pub use signature::{
    parse_dex_signature, parse_link_tag, parse_link_tag_with_context, parse_link_target,
    ApiComponents, LinkTarget, PackageAndClassName,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
