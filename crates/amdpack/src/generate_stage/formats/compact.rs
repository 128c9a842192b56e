use std::iter;

use amdpack_common::ModuleId;
use amdpack_utils::{
  ecmascript::to_string_literal, sanitize_binding_name::sanitize_binding_name, xxhash::xxhash_hex,
};
use itertools::Itertools;

use super::{render_define, render_external_bindings};

/// A single `define` under the entry's own id, exporting the entry's value.
pub fn render_compact_single(entry: &ModuleId, externals: &[&ModuleId], code: &str) -> String {
  let body = [
    render_external_bindings(externals),
    code.to_string(),
    format!("module.exports = {};", sanitize_binding_name(entry)),
  ]
  .join("\n");

  render_define(entry, externals.iter().map(|id| id.as_str()), &body)
}

/// A shared module named after the hash of `code` that exports every entry, followed by one
/// re-exporting `define` per entry in the order given.
pub fn render_compact_multi(entries: &[ModuleId], externals: &[&ModuleId], code: &str) -> String {
  let bundle_id = xxhash_hex(code.as_bytes());
  log::debug!("Shared bundle module for {} entries: {bundle_id}", entries.len());

  let exports = entries
    .iter()
    .map(|entry| {
      let binding = sanitize_binding_name(entry);
      format!("exports.{binding} = {binding};")
    })
    .join("\n");
  let body = [render_external_bindings(externals), code.to_string(), exports].join("\n");

  let mut output = Vec::with_capacity(entries.len() + 1);
  output.push(render_define(&bundle_id, externals.iter().map(|id| id.as_str()), &body));

  let require_bundle = format!("require({})", to_string_literal(&bundle_id));
  for entry in entries {
    let shim = format!("module.exports = {require_bundle}.{};", sanitize_binding_name(entry));
    output.push(render_define(entry, iter::once(bundle_id.as_str()), &shim));
  }

  output.join("\n")
}

#[cfg(test)]
mod tests {
  use amdpack_common::ModuleId;
  use amdpack_utils::xxhash::xxhash_hex;
  use pretty_assertions::assert_eq;

  use super::{render_compact_multi, render_compact_single};

  #[test]
  fn single_entry_without_externals() {
    assert_eq!(
      render_compact_single(&ModuleId::from("r"), &[], "CODE"),
      "define(\"r\", [  ], function (require, exports, module) {\n\nCODE\nmodule.exports = $r;\n});"
    );
  }

  #[test]
  fn single_entry_with_externals() {
    let e = ModuleId::from("e");
    assert_eq!(
      render_compact_single(&ModuleId::from("r"), &[&e], "CODE"),
      "define(\"r\", [ \"e\" ], function (require, exports, module) {\nvar $e = require(\"e\");\nCODE\nmodule.exports = $r;\n});"
    );
  }

  #[test]
  fn multi_entry_shares_one_hashed_bundle() {
    let e = ModuleId::from("e");
    let entries = [ModuleId::from("p"), ModuleId::from("q")];
    let hash = xxhash_hex(b"CODE");

    let expected = [
      format!(
        "define(\"{hash}\", [ \"e\" ], function (require, exports, module) {{\nvar $e = require(\"e\");\nCODE\nexports.$p = $p;\nexports.$q = $q;\n}});"
      ),
      format!(
        "define(\"p\", [ \"{hash}\" ], function (require, exports, module) {{\nmodule.exports = require(\"{hash}\").$p;\n}});"
      ),
      format!(
        "define(\"q\", [ \"{hash}\" ], function (require, exports, module) {{\nmodule.exports = require(\"{hash}\").$q;\n}});"
      ),
    ]
    .join("\n");

    assert_eq!(render_compact_multi(&entries, &[&e], "CODE"), expected);
  }

  #[test]
  fn bundle_hash_only_depends_on_code() {
    let entries = [ModuleId::from("p"), ModuleId::from("q")];
    let first = render_compact_multi(&entries, &[], "CODE");
    let second = render_compact_multi(&entries, &[], "CODE");
    let other = render_compact_multi(&entries, &[], "OTHER CODE");

    assert_eq!(first, second);
    assert!(first.starts_with(&format!("define(\"{}\"", xxhash_hex(b"CODE"))));
    assert!(other.starts_with(&format!("define(\"{}\"", xxhash_hex(b"OTHER CODE"))));
  }
}
