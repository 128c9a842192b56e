/// Every local binding created for a module id starts with this character.
pub const BINDING_PREFIX: char = '$';

/// Maps a module id to the name of the local variable holding that module's value.
///
/// Anything outside `[A-Za-z0-9_]` becomes `_`, so `jquery/ui.core` turns into `$jquery_ui_core`.
pub fn sanitize_binding_name(id: &str) -> String {
  let mut sanitized = String::with_capacity(id.len() + 1);
  sanitized.push(BINDING_PREFIX);
  for char in id.chars() {
    if char.is_ascii_alphanumeric() || char == '_' {
      sanitized.push(char);
    } else {
      sanitized.push('_');
    }
  }
  sanitized
}

#[test]
fn test_sanitize_binding_name() {
  use crate::ecmascript::is_validate_identifier_name;

  assert_eq!(sanitize_binding_name("foo"), "$foo");
  assert_eq!(sanitize_binding_name("lib/dom-utils.v2"), "$lib_dom_utils_v2");
  assert_eq!(sanitize_binding_name("\0+a=Z_0-"), "$__a_Z_0_");
  assert_eq!(sanitize_binding_name("模块"), "$__");
  assert_eq!(sanitize_binding_name(""), "$");

  for id in ["", "1st", "a b", "../x", "😈", "class"] {
    assert!(is_validate_identifier_name(&sanitize_binding_name(id)), "{id:?}");
  }
}
