pub mod compact;
pub mod standalone;

use amdpack_common::ModuleId;
use amdpack_utils::{
  ecmascript::to_string_literal, sanitize_binding_name::sanitize_binding_name,
};
use itertools::Itertools;

/// `define("<id>", [ <dependencies> ], function (require, exports, module) { <body> });`
pub fn render_define<'a>(
  id: &str,
  dependencies: impl IntoIterator<Item = &'a str>,
  body: &str,
) -> String {
  format!(
    "define({}, [ {} ], function (require, exports, module) {{\n{body}\n}});",
    to_string_literal(id),
    dependencies.into_iter().map(to_string_literal).join(", ")
  )
}

/// One `var $id = require("id");` line per external module.
pub fn render_external_bindings(externals: &[&ModuleId]) -> String {
  externals
    .iter()
    .map(|id| format!("var {} = require({});", sanitize_binding_name(id), to_string_literal(id)))
    .join("\n")
}

#[test]
fn test_render_define() {
  assert_eq!(
    render_define("a", [], "body"),
    "define(\"a\", [  ], function (require, exports, module) {\nbody\n});"
  );
  assert_eq!(
    render_define("a", ["b", "c/d"], "body"),
    "define(\"a\", [ \"b\", \"c/d\" ], function (require, exports, module) {\nbody\n});"
  );
}

#[test]
fn test_render_external_bindings() {
  let (jquery, ui) = (ModuleId::from("jquery"), ModuleId::from("jquery/ui"));
  assert_eq!(render_external_bindings(&[]), "");
  assert_eq!(
    render_external_bindings(&[&jquery, &ui]),
    "var $jquery = require(\"jquery\");\nvar $jquery_ui = require(\"jquery/ui\");"
  );
}
