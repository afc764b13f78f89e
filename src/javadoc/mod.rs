//! @acp:module "Javadoc Tag Scanner"
//! @acp:summary "Extract {@link} and {@code} tags from documentation comments"
//! @acp:domain cli
//! @acp:layer parser
//!
//! Only the two inline tags that matter for public alternatives are
//! recognized. Everything else in a comment is prose and is ignored.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `{@link BODY}` and the degenerate `{@link}`.
/// Group 1 = body. `{@linkplain ...}` does not match.
static LINK_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@link(?:\s+([^}]*))?\}").unwrap());

/// Matches `{@code BODY}` with a non-empty body. Group 1 = body.
static CODE_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@code\s+([^}]*\S[^}]*)\}").unwrap());

/// @acp:summary "One {@link} occurrence"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    /// Text between `{@link` and `}`, untrimmed
    pub body: String,
    /// Byte offset of the opening `{` in the comment
    pub offset: usize,
}

/// @acp:summary "Inline tags found in a documentation comment"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocTags {
    links: Vec<LinkTag>,
    code_spans: Vec<String>,
}

impl DocTags {
    pub fn links(&self) -> &[LinkTag] {
        &self.links
    }

    pub fn code_spans(&self) -> &[String] {
        &self.code_spans
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// A `{@code ...}` tag counts as an explanation of why there is no
    /// public alternative
    pub fn has_explanation(&self) -> bool {
        !self.code_spans.is_empty()
    }
}

/// @acp:summary "Scan a comment for {@link} and {@code} tags in order of appearance"
pub fn scan_tags(doc: &str) -> DocTags {
    let links = LINK_TAG_PATTERN
        .captures_iter(doc)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(LinkTag {
                body: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
                offset: whole.start(),
            })
        })
        .collect();

    let code_spans = CODE_TAG_PATTERN
        .captures_iter(doc)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .collect();

    DocTags { links, code_spans }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_multiple_links_in_order() {
        let tags = scan_tags("Use {@link #foo(int)} or {@link a.b.C#bar} instead.");
        let bodies: Vec<&str> = tags.links().iter().map(|l| l.body.as_str()).collect();
        assert_eq!(bodies, vec!["#foo(int)", "a.b.C#bar"]);
        assert_eq!(tags.links()[0].offset, 4);
        assert!(!tags.has_explanation());
    }

    #[test]
    fn test_scan_code_tag_is_explanation() {
        let tags = scan_tags("Foo {@code bar}");
        assert!(!tags.has_links());
        assert!(tags.has_explanation());
        assert_eq!(tags.code_spans(), &["bar".to_string()]);
    }

    #[test]
    fn test_empty_code_tag_is_not_explanation() {
        assert!(!scan_tags("{@code   }").has_explanation());
    }

    #[test]
    fn test_linkplain_is_not_a_link() {
        assert!(!scan_tags("See {@linkplain #foo}").has_links());
    }

    #[test]
    fn test_empty_link_is_reported() {
        let tags = scan_tags("See {@link}");
        assert_eq!(tags.links().len(), 1);
        assert_eq!(tags.links()[0].body, "");
    }

    #[test]
    fn test_link_spanning_lines() {
        let tags = scan_tags("Use {@link #foo(int,\n     long)} instead");
        assert_eq!(tags.links()[0].body, "#foo(int,\n     long)");
    }

    #[test]
    fn test_plain_text_has_no_tags() {
        assert_eq!(scan_tags("Just prose."), DocTags::default());
    }
}
