//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod batch;
pub mod output;
pub mod parse;
pub mod resolve;

pub use batch::{execute_batch, BatchOptions, MemberEntry};
pub use output::{print_components, print_report, ResolutionReport};
pub use parse::{execute_link, execute_parse, LinkOptions, ParseOptions};
pub use resolve::{execute_resolve, load_resolver, ResolveOptions};
