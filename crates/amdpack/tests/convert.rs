use amdpack::{
  convert, xxhash_hex, ConvertError, ConvertOptions, Converter, ModuleRecord, OutputMode,
};
use amdpack_ecmascript::EcmaCompiler;
use pretty_assertions::assert_eq;

const WRAPPER_HEAD: &str = "var exports = {}, module = { exports: exports };";
const WRAPPER_TAIL: &str = "return module.exports;\n}();";

fn wrapped(binding: &str, body: &str) -> String {
  format!("var {binding} = function () {{\n{WRAPPER_HEAD}\n{body}\n{WRAPPER_TAIL}")
}

fn compact(entries: &[&str]) -> ConvertOptions {
  ConvertOptions {
    mode: Some(OutputMode::Compact),
    entries: Some(entries.iter().map(ToString::to_string).collect()),
  }
}

fn convert_err(code: &str, options: impl Into<ConvertOptions>) -> Vec<ConvertError> {
  convert(code, options).unwrap_err().convert_errors().cloned().collect()
}

/// Re-reads generated output with the same scanner used for input bundles.
fn rescan(output: &str) -> Vec<ModuleRecord> {
  EcmaCompiler::scan_module_records(output).unwrap()
}

fn dependencies(record: &ModuleRecord) -> Vec<&str> {
  record.dependencies.iter().map(|id| id.as_str()).collect()
}

const SIDE_EFFECTS: &str = r#"define("a", [], function (require, exports, module) {
console.log("a");
});
define("b", ["x"], function (require, exports, module) {
require("x").run();
});"#;

#[test]
fn standalone_inlines_every_module() {
  let output = convert(SIDE_EFFECTS, ConvertOptions::default()).unwrap();

  let expected = [
    "(function () {".to_string(),
    "var $x = require(\"x\");".to_string(),
    wrapped("$a", "\nconsole.log(\"a\");\n"),
    wrapped("$b", "\n$x.run();\n"),
    "}());".to_string(),
  ]
  .join("\n");
  assert_eq!(output, expected);

  // Valid script without any registrations left.
  assert!(rescan(&output).is_empty());
}

#[test]
fn standalone_without_externals_matches_the_plain_wrapper() {
  let code = "define(\"a\", [], function () {\nwindow.a = 1;\n});";
  let output = convert(code, OutputMode::Standalone).unwrap();
  assert_eq!(output, format!("(function () {{\n{}\n}}());", wrapped("$a", "\nwindow.a = 1;\n")));
}

#[test]
fn mode_string_shorthand() {
  let options: ConvertOptions = "standalone".parse().unwrap();
  assert_eq!(
    convert(SIDE_EFFECTS, options).unwrap(),
    convert(SIDE_EFFECTS, ConvertOptions::default()).unwrap()
  );
  assert_eq!(
    "amd".parse::<ConvertOptions>().unwrap_err(),
    ConvertError::UnknownMode("amd".to_string())
  );
}

#[test]
fn compact_single_entry() {
  let code = r#"
define("lib/format", [], function (require, exports, module) {
module.exports = function (s) { return "[" + s + "]"; };
});
define("app/main", ["lib/format", "e"], function (require, exports, module) {
var format = require("lib/format");
module.exports = format(require("e").name);
});
"#;
  let output = convert(code, OutputMode::Compact).unwrap();

  let body = [
    "var $e = require(\"e\");".to_string(),
    wrapped(
      "$lib_format",
      "\nmodule.exports = function (s) { return \"[\" + s + \"]\"; };\n",
    ),
    wrapped("$app_main", "\nvar format = $lib_format;\nmodule.exports = format($e.name);\n"),
    "module.exports = $app_main;".to_string(),
  ]
  .join("\n");
  assert_eq!(
    output,
    format!("define(\"app/main\", [ \"e\" ], function (require, exports, module) {{\n{body}\n}});")
  );

  let records = rescan(&output);
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].id.as_str(), "app/main");
  assert_eq!(dependencies(&records[0]), ["e"]);
  assert!(!records[0].body.contains("require(\"lib/format\")"));
}

#[test]
fn compact_multi_entry() {
  let code = r#"
define("shared", ["e"], function (require, exports, module) {
exports.e = require("e");
});
define("p", ["shared", "e"], function (require, exports, module) {
module.exports = require("shared").e.p;
});
define("q", ["shared", "e"], function (require, exports, module) {
module.exports = require("shared").e.q;
});
"#;
  let output = convert(code, OutputMode::Compact).unwrap();

  let modules = [
    wrapped("$shared", "\nexports.e = $e;\n"),
    wrapped("$p", "\nmodule.exports = $shared.e.p;\n"),
    wrapped("$q", "\nmodule.exports = $shared.e.q;\n"),
  ]
  .join("\n");
  let hash = xxhash_hex(modules.as_bytes());

  let records = rescan(&output);
  assert_eq!(records.len(), 3);

  assert_eq!(records[0].id.as_str(), hash);
  assert_eq!(dependencies(&records[0]), ["e"]);
  assert_eq!(
    records[0].body,
    format!("\nvar $e = require(\"e\");\n{modules}\nexports.$p = $p;\nexports.$q = $q;\n")
  );

  for (record, entry) in records[1..].iter().zip(["p", "q"]) {
    assert_eq!(record.id.as_str(), entry);
    assert_eq!(dependencies(record), [hash.as_str()]);
    assert_eq!(record.body, format!("\nmodule.exports = require(\"{hash}\").${entry};\n"));
  }
}

#[test]
fn compact_multi_entry_is_deterministic_and_follows_requested_order() {
  let code = "define('p', [], function () {});\ndefine('q', [], function () {});";
  let first = convert(code, compact(&["q", "p"])).unwrap();
  let second = Converter::new(compact(&["q", "p"])).convert(code).unwrap();
  assert_eq!(first, second);

  let ids = rescan(&first).into_iter().map(|record| record.id.to_string()).collect::<Vec<_>>();
  assert_eq!(ids[1..], ["q", "p"]);
}

#[test]
fn explicit_single_entry_picks_the_simple_shape() {
  let code = "define('p', [], function () {});\ndefine('q', [], function () {});";
  let output = convert(code, compact(&["q"])).unwrap();
  let records = rescan(&output);
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].id.as_str(), "q");
  assert!(records[0].body.ends_with("module.exports = $q;\n"));
}

#[test]
fn caller_errors_are_reported() {
  let code = "define('a', ['b'], function () {});\ndefine('b', [], function () {});";

  assert_eq!(convert_err(code, compact(&["b"])), [ConvertError::UnknownEntry("b".to_string())]);
  assert_eq!(convert_err(code, compact(&["x"])), [ConvertError::UnknownEntry("x".to_string())]);
  assert_eq!(convert_err(code, compact(&["a", "a"])), [ConvertError::DuplicateEntry("a".to_string())]);
  assert_eq!(convert_err(code, compact(&[])), [ConvertError::NoEntries]);

  let cycle = "define('a', ['b'], function () {});\ndefine('b', ['a'], function () {});";
  assert_eq!(convert_err(cycle, OutputMode::Compact), [ConvertError::NoEntries]);
  assert_eq!(convert_err("", OutputMode::Compact), [ConvertError::NoEntries]);
}

#[test]
fn colliding_bindings_are_rejected() {
  let code = "define('a-b', ['a.b'], function () {});";
  assert_eq!(
    convert_err(code, OutputMode::Standalone),
    [ConvertError::BindingCollision {
      first: "a-b".to_string(),
      second: "a.b".to_string(),
      binding: "$a_b".to_string(),
    }]
  );
}

#[test]
fn malformed_input_is_propagated() {
  assert!(matches!(
    convert_err("define('a', [], function () {", OutputMode::Standalone).as_slice(),
    [ConvertError::Parse(_)]
  ));
  assert!(matches!(
    convert_err("define('a', [], 42);", OutputMode::Compact).as_slice(),
    [ConvertError::MalformedDefine { .. }]
  ));
}

#[test]
fn converter_is_shareable_across_threads() {
  let converter = Converter::new(OutputMode::Compact);
  let expected = converter.convert(SIDE_EFFECTS).unwrap();

  std::thread::scope(|scope| {
    let handles =
      (0..4).map(|_| scope.spawn(|| converter.convert(SIDE_EFFECTS).unwrap())).collect::<Vec<_>>();
    for handle in handles {
      assert_eq!(handle.join().unwrap(), expected);
    }
  });
}
