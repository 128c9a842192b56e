use std::{borrow::Cow, sync::LazyLock};

use amdpack_common::ModuleRecord;
use amdpack_utils::sanitize_binding_name::sanitize_binding_name;
use regex::{Captures, Regex};

// `require("id")` that is neither part of a longer identifier nor a member call.
static REQUIRE_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(^|[^.])\brequire\s*\(\s*['"]([^'"]+?)['"]\s*\)"#).unwrap()
});

/// Replaces every `require("<id>")` in a module body with the binding of `<id>`.
///
/// The match is lexical. `require("...")`-shaped text inside strings, comments or regexes is
/// rewritten as well.
pub fn rewrite_module_body(body: &str) -> Cow<'_, str> {
  REQUIRE_CALL_RE.replace_all(body, |caps: &Captures<'_>| {
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let id = caps.get(2).map_or("", |m| m.as_str());
    format!("{prefix}{}", sanitize_binding_name(id))
  })
}

/// Turns a module into a `var` holding the value of its immediately invoked factory.
pub fn wrap_module(record: &ModuleRecord) -> String {
  let binding = sanitize_binding_name(&record.id);
  let body = rewrite_module_body(&record.body);
  format!(
    "var {binding} = function () {{\nvar exports = {{}}, module = {{ exports: exports }};\n{body}\nreturn module.exports;\n}}();"
  )
}
