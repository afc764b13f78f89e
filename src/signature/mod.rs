//! @acp:module "Signatures"
//! @acp:summary "Structured model of API references parsed from descriptors and {@link} tags"
//! @acp:domain cli
//! @acp:layer model
//!
//! # API Signatures
//!
//! Two notations describe the same thing:
//!
//! - dex descriptors: `Landroid/app/Activity;->startActivity(Landroid/content/Intent;)V`
//! - Javadoc links: `android.app.Activity#startActivity(android.content.Intent)`
//!
//! Both parse into an [`ApiComponents`] value so they can be compared
//! structurally. Descriptor types are decoded to the source spelling
//! (`I` → `int`, `Lfoo/Bar;` → `foo.Bar`, `[J` → `long[]`) and nested classes
//! use `.` in both notations.

mod cursor;
pub mod dex;
pub mod link;

pub use dex::parse_dex_signature;
pub use link::{parse_link_tag, parse_link_tag_with_context, parse_link_target, LinkTarget};

use serde::{Deserialize, Serialize};

/// @acp:summary "Package and simple class name of an API reference"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageAndClassName {
    pub package_name: String,
    pub class_name: String,
}

impl PackageAndClassName {
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
        }
    }
}

impl std::fmt::Display for PackageAndClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.package_name.is_empty() {
            write!(f, "{}", self.class_name)
        } else {
            write!(f, "{}.{}", self.package_name, self.class_name)
        }
    }
}

/// @acp:summary "Decomposed API reference: package, class, member, parameter types"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiComponents {
    pub package_name: String,
    pub class_name: String,
    /// Empty for a class-only reference
    pub member_name: String,
    /// `", "`-joined parameter types; empty for fields and `()`
    pub method_parameter_types: String,
}

impl ApiComponents {
    pub fn new(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        member_name: impl Into<String>,
        method_parameter_types: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            member_name: member_name.into(),
            method_parameter_types: method_parameter_types.into(),
        }
    }

    pub fn package_and_class(&self) -> PackageAndClassName {
        PackageAndClassName::new(self.package_name.clone(), self.class_name.clone())
    }

    /// True when this references a class rather than one of its members
    pub fn is_class_reference(&self) -> bool {
        self.member_name.is_empty()
    }

    /// Compare package, class and member, ignoring parameter types
    pub fn equals_ignoring_params(&self, other: &ApiComponents) -> bool {
        self.package_name == other.package_name
            && self.class_name == other.class_name
            && self.member_name == other.member_name
    }
}

impl std::fmt::Display for ApiComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.package_name, self.class_name)?;
        if !self.member_name.is_empty() {
            write!(f, "#{}", self.member_name)?;
            if !self.method_parameter_types.is_empty() {
                write!(f, "({})", self.method_parameter_types)?;
            }
        }
        Ok(())
    }
}

/// Explicit value when present and non-empty, otherwise the fallback.
///
/// Link parsing composes these in sequence (package, then class) so each
/// precedence rule stays a one-liner.
pub fn explicit_or(explicit: Option<&str>, fallback: &str) -> String {
    match explicit {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Explicit value when present, otherwise empty
pub fn explicit_or_empty(explicit: Option<&str>) -> String {
    explicit_or(explicit, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_method_reference() {
        let api = ApiComponents::new("a.b", "C", "foo", "int, long");
        assert_eq!(api.to_string(), "a.b.C#foo(int, long)");
    }

    #[test]
    fn test_display_class_reference() {
        let api = ApiComponents::new("a.b", "C", "", "");
        assert!(api.is_class_reference());
        assert_eq!(api.to_string(), "a.b.C");
    }

    #[test]
    fn test_equals_ignoring_params() {
        let one = ApiComponents::new("a.b", "C", "foo", "int");
        let two = ApiComponents::new("a.b", "C", "foo", "int, int");
        let other = ApiComponents::new("a.b", "C", "bar", "int");
        assert!(one.equals_ignoring_params(&two));
        assert!(!one.equals_ignoring_params(&other));
        assert_ne!(one, two);
    }

    #[test]
    fn test_explicit_or_prefers_explicit() {
        assert_eq!(explicit_or(Some("x.y"), "a.b"), "x.y");
        assert_eq!(explicit_or(Some(""), "a.b"), "a.b");
        assert_eq!(explicit_or(None, "a.b"), "a.b");
        assert_eq!(explicit_or_empty(None), "");
    }

    #[test]
    fn test_serializes_camel_case() {
        let api = ApiComponents::new("a.b", "C", "foo", "int");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["packageName"], "a.b");
        assert_eq!(json["methodParameterTypes"], "int");
    }
}
