//! Signature parsing tests
//!
//! Tests for dex descriptor decoding and {@link} body parsing.

use apialt::signature::dex::decode_type_descriptor;
use apialt::{parse_dex_signature, parse_link_tag, ApiComponents, PackageAndClassName};

// =============================================================================
// Dex Signatures
// =============================================================================

mod dex_signature_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_method_signature() {
        let api = parse_dex_signature("La/b/C;->foo(IJLfoo2/bar/Baz;)V").unwrap();
        assert_eq!(api, ApiComponents::new("a.b", "C", "foo", "int, long, foo2.bar.Baz"));
        assert_eq!(api.package_and_class(), PackageAndClassName::new("a.b", "C"));
    }

    #[test]
    fn test_field_signature() {
        let api = parse_dex_signature("La/b/C;->foo:I").unwrap();
        assert_eq!(api.member_name, "foo");
        assert_eq!(api.method_parameter_types, "");
    }

    #[test]
    fn test_empty_parameter_list() {
        let api = parse_dex_signature("La/b/C;->foo()Ljava/lang/String;").unwrap();
        assert_eq!(api.method_parameter_types, "");
    }

    #[test]
    fn test_all_primitive_and_array_parameters() {
        let api = parse_dex_signature("Lx/Y;->m(ZBSCIJFD[I[[Ljava/lang/Object;)V").unwrap();
        assert_eq!(
            api.method_parameter_types,
            "boolean, byte, short, char, int, long, float, double, int[], java.lang.Object[][]"
        );
    }

    #[test]
    fn test_nested_class_uses_dots() {
        let api = parse_dex_signature("Landroid/os/Build$VERSION;->SDK_INT:I").unwrap();
        assert_eq!(api.package_name, "android.os");
        assert_eq!(api.class_name, "Build.VERSION");
    }

    #[test]
    fn test_rejects_malformed_signatures() {
        for signature in [
            "a/b/C;->foo()V",       // missing L
            "La/b/C->foo()V",       // missing ;
            "La/b/C;->foo(X)V",     // bad parameter type
            "La/b/C;->foo()X",      // bad return type
            "La/b/C;->foo()",       // missing return type
            "La/b/C;foo()V",        // missing arrow
            "La/b/C;->foo",         // missing ( or :
            "La/b/C;->foo:",        // missing field type
            "La/b/C;->foo:II",      // trailing characters
            "La/b/C;->foo()VV",     // trailing characters
            "LC;->foo()V",          // no package
            "La/b/C;->(I)V",        // missing member name
            "La/b/C;->foo(Ljava/lang/String)V", // unterminated object type
        ] {
            assert!(
                parse_dex_signature(signature).is_err(),
                "expected {:?} to be rejected",
                signature
            );
        }
    }

    #[test]
    fn test_type_descriptor_decoding() {
        assert_eq!(decode_type_descriptor("[Ljava/util/List;").unwrap(), "java.util.List[]");
    }
}

// =============================================================================
// Link Tags
// =============================================================================

mod link_tag_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONTEXT: &str = "La/b/C;->foo:I";

    #[test]
    fn test_fully_qualified_link() {
        let api = parse_link_tag("a.b.C#foo(int, long, foo2.bar.Baz)", CONTEXT).unwrap();
        assert_eq!(api, ApiComponents::new("a.b", "C", "foo", "int, long, foo2.bar.Baz"));
    }

    #[test]
    fn test_package_deduced() {
        let api = parse_link_tag("C#foo(int, long, foo2.bar.Baz)", CONTEXT).unwrap();
        assert_eq!(api, ApiComponents::new("a.b", "C", "foo", "int, long, foo2.bar.Baz"));
    }

    #[test]
    fn test_package_and_class_deduced() {
        let api = parse_link_tag("#foo(int, long, foo2.bar.Baz)", CONTEXT).unwrap();
        assert_eq!(api, ApiComponents::new("a.b", "C", "foo", "int, long, foo2.bar.Baz"));
    }

    #[test]
    fn test_other_class_in_context_package() {
        let api = parse_link_tag("D#bar", CONTEXT).unwrap();
        assert_eq!(api, ApiComponents::new("a.b", "D", "bar", ""));
    }

    #[test]
    fn test_class_only_links() {
        assert_eq!(
            parse_link_tag("x.y.Z", CONTEXT).unwrap(),
            ApiComponents::new("x.y", "Z", "", "")
        );
        assert_eq!(
            parse_link_tag("Z", CONTEXT).unwrap(),
            ApiComponents::new("a.b", "Z", "", "")
        );
    }

    #[test]
    fn test_parameter_whitespace_is_normalized() {
        let api = parse_link_tag("#foo( int ,long,  float )", CONTEXT).unwrap();
        assert_eq!(api.method_parameter_types, "int, long, float");
    }

    #[test]
    fn test_unbalanced_parenthesis() {
        assert!(parse_link_tag("a.b.C#foo(int,float", CONTEXT).is_err());
    }

    #[test]
    fn test_malformed_context() {
        let err = parse_link_tag("#foo", "not-a-signature").unwrap_err();
        assert!(err.source.is_some());
    }
}
