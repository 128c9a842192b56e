use amdpack_common::ModuleRecord;
use amdpack_error::{BuildResult, ConvertError};
use itertools::Itertools;
use oxc::{allocator::Allocator, ast_visit::Visit, parser::Parser, span::SourceType};

use crate::DefineScanner;

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses an AMD bundle and returns its `define` registrations in source order.
  ///
  /// The bundle is only parsed, never evaluated.
  pub fn scan_module_records(source: &str) -> BuildResult<Vec<ModuleRecord>> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::default().with_module(false)).parse();
    if ret.panicked || !ret.errors.is_empty() {
      let message = ret.errors.iter().map(ToString::to_string).join("; ");
      return Err(ConvertError::Parse(message).into());
    }

    let mut scanner = DefineScanner::new(source);
    scanner.visit_program(&ret.program);
    scanner.finish()
  }
}

#[test]
fn basic_test() {
  let records = EcmaCompiler::scan_module_records(
    "define(\"a\", [], function (require, exports, module) { module.exports = 1; });",
  )
  .unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].id.as_str(), "a");
  assert_eq!(records[0].body, " module.exports = 1; ");
}

#[test]
fn parse_error() {
  let error = EcmaCompiler::scan_module_records("define(\"a\", [], function () {").unwrap_err();
  assert!(matches!(error.convert_errors().next(), Some(ConvertError::Parse(_))));
}
