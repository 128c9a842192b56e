use oxc::syntax::identifier;

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Renders `value` as a double-quoted JS string literal.
pub fn to_string_literal(value: &str) -> String {
  serde_json::Value::String(value.to_string()).to_string()
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(is_validate_identifier_name("$foo_1"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_to_string_literal() {
  assert_eq!(to_string_literal("jquery"), r#""jquery""#);
  assert_eq!(to_string_literal("a/b-c.d"), r#""a/b-c.d""#);
  assert_eq!(to_string_literal(r#"we"ird\id"#), r#""we\"ird\\id""#);
}
