//! @acp:module "Dex Signature Parser"
//! @acp:summary "Strict parser for Lpkg/Class;->member(Params)Ret and Lpkg/Class;->field:Type"
//! @acp:domain cli
//! @acp:layer parser

use super::cursor::StringCursor;
use super::ApiComponents;
use crate::error::SignatureSyntaxError;

/// Characters that never appear inside a class path segment or member name
const RESERVED: &[char] = &['/', ';', '(', ')', '[', ':', '.'];

/// @acp:summary "Parse a dex member descriptor into its components"
///
/// The return type of a method is validated but not kept.
pub fn parse_dex_signature(signature: &str) -> Result<ApiComponents, SignatureSyntaxError> {
    let mut sc = StringCursor::new(signature);

    if !sc.eat('L') {
        return Err(syntax_error(&sc, "Expected 'L' at the start of the class descriptor"));
    }
    if sc.find_any(&[';']).is_none() {
        return Err(syntax_error(&sc, "Class descriptor is missing a terminating ';'"));
    }
    let path_start = sc.position();
    let class_path = sc.take_until_any(&[';']);
    sc.eat(';');
    let (package_name, class_name) = split_class_path(class_path)
        .map_err(|message| SignatureSyntaxError::new(message, signature, path_start))?;

    if !sc.eat_str("->") {
        return Err(syntax_error(&sc, "Expected '->' after the class descriptor"));
    }

    let member_start = sc.position();
    let member_name = sc.take_until_any(&['(', ':']);
    if member_name.is_empty() {
        return Err(SignatureSyntaxError::new("Missing member name", signature, member_start));
    }
    if !is_member_name(member_name) {
        return Err(SignatureSyntaxError::new(
            format!("Invalid member name '{}'", member_name),
            signature,
            member_start,
        ));
    }

    let method_parameter_types = match sc.bump() {
        Some('(') => {
            let mut params = Vec::new();
            loop {
                match sc.peek() {
                    Some(')') => break,
                    None => {
                        return Err(syntax_error(&sc, "Method parameters are missing a closing ')'"))
                    }
                    Some(_) => params.push(parse_type(&mut sc, false)?),
                }
            }
            sc.eat(')');
            if sc.is_eof() {
                return Err(syntax_error(&sc, "Missing method return type"));
            }
            parse_type(&mut sc, true)?;
            params.join(", ")
        }
        Some(':') => {
            if sc.is_eof() {
                return Err(syntax_error(&sc, "Missing field type"));
            }
            parse_type(&mut sc, false)?;
            String::new()
        }
        _ => {
            return Err(syntax_error(&sc, "Expected '(' or ':' after the member name"));
        }
    };

    if !sc.is_eof() {
        return Err(syntax_error(
            &sc,
            format!("Unexpected trailing characters '{}'", sc.rest()),
        ));
    }

    Ok(ApiComponents {
        package_name,
        class_name,
        member_name: member_name.to_string(),
        method_parameter_types,
    })
}

/// @acp:summary "Decode one complete type descriptor to its source spelling"
pub fn decode_type_descriptor(descriptor: &str) -> Result<String, SignatureSyntaxError> {
    let mut sc = StringCursor::new(descriptor);
    let decoded = parse_type(&mut sc, true)?;
    if !sc.is_eof() {
        return Err(syntax_error(
            &sc,
            format!("Unexpected trailing characters '{}'", sc.rest()),
        ));
    }
    Ok(decoded)
}

fn syntax_error(sc: &StringCursor<'_>, message: impl Into<String>) -> SignatureSyntaxError {
    SignatureSyntaxError::new(message, sc.input(), sc.position())
}

fn primitive_name(code: char) -> Option<&'static str> {
    match code {
        'Z' => Some("boolean"),
        'B' => Some("byte"),
        'S' => Some("short"),
        'C' => Some("char"),
        'I' => Some("int"),
        'J' => Some("long"),
        'F' => Some("float"),
        'D' => Some("double"),
        _ => None,
    }
}

/// Parse a single field/parameter/return type descriptor.
/// `V` is only accepted when `allow_void` is set and the type is not an array.
fn parse_type(sc: &mut StringCursor<'_>, allow_void: bool) -> Result<String, SignatureSyntaxError> {
    let start = sc.position();
    let mut dimensions = 0;
    while sc.eat('[') {
        dimensions += 1;
    }

    let base = match sc.bump() {
        Some('V') if allow_void && dimensions == 0 => "void".to_string(),
        Some('L') => {
            let path_start = sc.position();
            let path = sc.take_until_any(&[';']);
            if !sc.eat(';') {
                return Err(SignatureSyntaxError::new(
                    "Object type is missing a terminating ';'",
                    sc.input(),
                    path_start,
                ));
            }
            if path.is_empty() || !path.split('/').all(is_identifier) {
                return Err(SignatureSyntaxError::new(
                    format!("Invalid object type 'L{};'", path),
                    sc.input(),
                    path_start,
                ));
            }
            path.replace(['/', '$'], ".")
        }
        Some(code) => match primitive_name(code) {
            Some(name) => name.to_string(),
            None => {
                return Err(SignatureSyntaxError::new(
                    format!("Unrecognized type descriptor '{}'", code),
                    sc.input(),
                    start,
                ))
            }
        },
        None => {
            return Err(SignatureSyntaxError::new(
                "Unexpected end of signature, expected a type",
                sc.input(),
                start,
            ))
        }
    };

    Ok(format!("{}{}", base, "[]".repeat(dimensions)))
}

/// Split `a/b/C$D` into (`a.b`, `C.D`). The class must live in a package.
fn split_class_path(path: &str) -> Result<(String, String), String> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return Err(format!("Class path '{}' has no package", path));
    }
    if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
        return Err(format!("Invalid class path segment '{}' in '{}'", bad, path));
    }
    let (class, package) = segments
        .split_last()
        .ok_or_else(|| format!("Empty class path '{}'", path))?;
    Ok((package.join("."), class.replace('$', ".")))
}

fn is_identifier(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| !c.is_whitespace() && !RESERVED.contains(&c) && c != '<' && c != '>')
}

/// Member names may additionally be `<init>` or `<clinit>`
fn is_member_name(name: &str) -> bool {
    name == "<init>" || name == "<clinit>" || is_identifier(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_descriptors() {
        assert_eq!(decode_type_descriptor("Z").unwrap(), "boolean");
        assert_eq!(decode_type_descriptor("J").unwrap(), "long");
        assert_eq!(decode_type_descriptor("V").unwrap(), "void");
    }

    #[test]
    fn test_array_and_object_descriptors() {
        assert_eq!(decode_type_descriptor("[I").unwrap(), "int[]");
        assert_eq!(
            decode_type_descriptor("[[Ljava/lang/String;").unwrap(),
            "java.lang.String[][]"
        );
        assert_eq!(
            decode_type_descriptor("Landroid/os/Build$VERSION;").unwrap(),
            "android.os.Build.VERSION"
        );
    }

    #[test]
    fn test_rejects_void_array_and_garbage() {
        assert!(decode_type_descriptor("[V").is_err());
        assert!(decode_type_descriptor("X").is_err());
        assert!(decode_type_descriptor("Ljava/lang/String").is_err());
        assert!(decode_type_descriptor("II").is_err());
        assert!(decode_type_descriptor("").is_err());
    }

    #[test]
    fn test_split_class_path() {
        assert_eq!(
            split_class_path("a/b/C").unwrap(),
            ("a.b".to_string(), "C".to_string())
        );
        assert_eq!(
            split_class_path("a/Outer$Inner").unwrap(),
            ("a".to_string(), "Outer.Inner".to_string())
        );
        assert!(split_class_path("C").is_err());
        assert!(split_class_path("a//C").is_err());
    }

    #[test]
    fn test_constructor_member() {
        let api = parse_dex_signature("La/b/C;-><init>(Ljava/lang/String;)V").unwrap();
        assert_eq!(api.member_name, "<init>");
        assert_eq!(api.method_parameter_types, "java.lang.String");
    }

    #[test]
    fn test_error_position_points_at_bad_type() {
        let err = parse_dex_signature("La/b/C;->foo(IX)V").unwrap_err();
        assert_eq!(err.position, 14);
        assert!(err.message.contains("'X'"));
    }

    #[test]
    fn test_void_parameter_rejected() {
        assert!(parse_dex_signature("La/b/C;->foo(V)V").is_err());
    }
}
