//! @acp:module "Javadoc Link Parser"
//! @acp:summary "Parse {@link} bodies into ApiComponents, deducing omitted parts from a context signature"
//! @acp:domain cli
//! @acp:layer parser
//!
//! Accepted forms, most to least specific:
//!
//! ```text
//! pkg.Class#member(type1, type2)   pkg.Class#member   pkg.Class
//! Class#member(type1, type2)       Class#member       Class
//! #member(type1, type2)            #member
//! ```
//!
//! Parameter types are source-level names and are kept as written, except
//! that varargs (`T...`) become `T[]` to match the descriptor form.

use super::cursor::StringCursor;
use super::dex::parse_dex_signature;
use super::{explicit_or, explicit_or_empty, ApiComponents};
use crate::error::JavadocLinkSyntaxError;

/// @acp:summary "Parse a link body using a dex descriptor as context"
pub fn parse_link_tag(
    link_body: &str,
    context_signature: &str,
) -> Result<ApiComponents, JavadocLinkSyntaxError> {
    let context = parse_dex_signature(context_signature)
        .map_err(|e| JavadocLinkSyntaxError::invalid_context(link_body, e))?;
    parse_link_tag_with_context(link_body, &context)
}

/// @acp:summary "Parse a link body against an already parsed context"
pub fn parse_link_tag_with_context(
    link_body: &str,
    context: &ApiComponents,
) -> Result<ApiComponents, JavadocLinkSyntaxError> {
    parse_link_target(link_body, context).map(|target| target.api)
}

/// @acp:summary "A parsed link and whether it spelled out a parameter list"
///
/// `#foo()` and `#foo` decompose identically; only the former names the
/// no-argument overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub api: ApiComponents,
    pub has_parameter_list: bool,
}

/// @acp:summary "Parse a link body, keeping whether parentheses were given"
pub fn parse_link_target(
    link_body: &str,
    context: &ApiComponents,
) -> Result<LinkTarget, JavadocLinkSyntaxError> {
    let trimmed = link_body.trim_start();
    let leading = link_body.len() - trimmed.len();
    let reference = &trimmed[..reference_end(trimmed)];
    let error = |message: String, pos: usize| {
        JavadocLinkSyntaxError::new(message, link_body, leading + pos)
    };

    if reference.is_empty() {
        return Err(error("Empty link".to_string(), 0));
    }

    let mut sc = StringCursor::new(reference);
    let class_part = sc.take_until_any(&['#', '(', ')']);
    if matches!(sc.peek(), Some('(') | Some(')')) {
        return Err(error(
            "Parameter list must follow a '#member' reference".to_string(),
            sc.position(),
        ));
    }
    let (explicit_package, explicit_class) =
        split_package_and_class(class_part).map_err(|message| error(message, 0))?;

    let package_name = explicit_or(explicit_package, &context.package_name);
    let class_name = explicit_or(explicit_class, &context.class_name);

    let mut member = None;
    let mut params = None;
    if sc.eat('#') {
        let member_start = sc.position();
        let name = sc.take_until_any(&['(', ')']);
        if name.is_empty() {
            return Err(error("Missing member name after '#'".to_string(), member_start));
        }
        if !is_java_identifier(name) {
            return Err(error(format!("Invalid member name '{}'", name), member_start));
        }
        member = Some(name);

        match sc.bump() {
            Some('(') => {
                let params_start = sc.position();
                let inner = sc.take_until_any(&['(', ')']);
                match sc.bump() {
                    Some(')') => {}
                    Some(_) => {
                        return Err(error(
                            "Nested parenthesis in parameter list".to_string(),
                            sc.position() - 1,
                        ))
                    }
                    None => {
                        return Err(error(
                            "Linked method is missing a closing parenthesis".to_string(),
                            params_start,
                        ))
                    }
                }
                if !sc.is_eof() {
                    return Err(error(
                        format!("Unexpected characters '{}' after ')'", sc.rest()),
                        sc.position(),
                    ));
                }
                let normalized = normalize_parameter_list(inner)
                    .map_err(|message| error(message, params_start))?;
                params = Some(normalized);
            }
            Some(_) => {
                return Err(error(
                    "Closing parenthesis without an opening one".to_string(),
                    sc.position() - 1,
                ))
            }
            None => {}
        }
    }

    let mut member_name = explicit_or_empty(member);
    // {@link #Foo(int)} on class Foo names a constructor
    if params.is_some() && simple_class_name(&class_name) == member_name {
        member_name = "<init>".to_string();
    }

    Ok(LinkTarget {
        has_parameter_list: params.is_some(),
        api: ApiComponents {
            package_name,
            class_name,
            member_name,
            method_parameter_types: explicit_or_empty(params.as_deref()),
        },
    })
}

/// End of the reference part of a link body: the first whitespace outside
/// parentheses. Anything after is the link label.
fn reference_end(body: &str) -> usize {
    let mut depth = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return i,
            _ => {}
        }
    }
    body.len()
}

/// Split `pkg.Class.Inner` at the first capitalized segment. Returns
/// `(None, None)` for an empty reference.
fn split_package_and_class(text: &str) -> Result<(Option<&str>, Option<&str>), String> {
    if text.is_empty() {
        return Ok((None, None));
    }

    let segments: Vec<&str> = text.split('.').collect();
    if let Some(bad) = segments.iter().find(|s| !is_java_identifier(s)) {
        return Err(format!("Invalid segment '{}' in class reference '{}'", bad, text));
    }

    let class_index = segments
        .iter()
        .position(|s| s.starts_with(|c: char| c.is_uppercase()))
        .unwrap_or(segments.len() - 1);

    if class_index == 0 {
        return Ok((None, Some(text)));
    }
    let package_len: usize = segments[..class_index].iter().map(|s| s.len() + 1).sum();
    Ok((Some(&text[..package_len - 1]), Some(&text[package_len..])))
}

fn normalize_parameter_list(inner: &str) -> Result<String, String> {
    if inner.trim().is_empty() {
        return Ok(String::new());
    }

    let mut types = Vec::new();
    for token in inner.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(format!("Empty parameter type in '({})'", inner));
        }
        let normalized = match token.strip_suffix("...") {
            Some(element) => format!("{}[]", element.trim_end()),
            None => token.to_string(),
        };
        types.push(normalized);
    }
    Ok(types.join(", "))
}

fn simple_class_name(class_name: &str) -> &str {
    class_name.rsplit('.').next().unwrap_or(class_name)
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
