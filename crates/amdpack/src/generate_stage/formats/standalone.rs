use amdpack_common::ModuleId;

use super::render_external_bindings;

/// Everything runs inside one immediately invoked function and nothing is exported.
///
/// External modules are bound through the host `require` ahead of the inlined modules.
pub fn render_standalone(code: &str, externals: &[&ModuleId]) -> String {
  if externals.is_empty() {
    format!("(function () {{\n{code}\n}}());")
  } else {
    format!("(function () {{\n{}\n{code}\n}}());", render_external_bindings(externals))
  }
}

#[test]
fn test_render_standalone() {
  assert_eq!(render_standalone("var $a = 1;", &[]), "(function () {\nvar $a = 1;\n}());");

  let x = ModuleId::from("x");
  assert_eq!(
    render_standalone("var $a = 1;", &[&x]),
    "(function () {\nvar $x = require(\"x\");\nvar $a = 1;\n}());"
  );
}
