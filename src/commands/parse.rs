//! @acp:module "Parse Command"
//! @acp:summary "Decompose a dex signature or a {@link} body"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use super::output::print_components;
use crate::signature::{parse_dex_signature, parse_link_tag, ApiComponents};

/// Options for the parse command
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Dex descriptor to parse
    pub signature: String,
    /// Output as JSON
    pub json: bool,
}

/// Options for the link command
#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// Body of a {@link} tag
    pub body: String,
    /// Dex descriptor of the documented member
    pub context: String,
    /// Output as JSON
    pub json: bool,
}

/// Execute the parse command
pub fn execute_parse(options: ParseOptions) -> Result<()> {
    let components = parse_dex_signature(&options.signature)?;
    render(&components, options.json)
}

/// Execute the link command
pub fn execute_link(options: LinkOptions) -> Result<()> {
    let components = parse_link_tag(&options.body, &options.context)?;
    render(&components, options.json)
}

fn render(components: &ApiComponents, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(components)?);
    } else {
        println!("{} {}", style("✓").green(), components);
        print_components(components);
    }
    Ok(())
}
