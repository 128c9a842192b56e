use std::sync::Arc;

use amdpack_common::{ConvertOptions, NormalizedConvertOptions};
use amdpack_error::BuildResult;

use crate::{
  generate_stage::GenerateStage, link_stage::LinkStage, scan_stage::ScanStage,
  types::SharedOptions, utils::normalize_options::normalize_options,
};

/// Converts AMD bundles with one fixed set of options.
///
/// A `Converter` keeps no state between calls, so one instance can be shared across threads.
pub struct Converter {
  pub(crate) options: SharedOptions,
}

impl Converter {
  pub fn new(options: impl Into<ConvertOptions>) -> Self {
    Self { options: Arc::new(normalize_options(options.into())) }
  }

  pub fn options(&self) -> &NormalizedConvertOptions {
    &self.options
  }

  pub fn convert(&self, code: &str) -> BuildResult<String> {
    let scan_stage_output = ScanStage::new(code).scan()?;
    let link_stage_output = LinkStage::new(scan_stage_output, &self.options).link()?;
    GenerateStage::new(&link_stage_output, &self.options).generate()
  }
}

/// One-shot conversion.
///
/// A mode string is accepted as shorthand for the options, e.g. `"compact".parse()?`.
pub fn convert(code: &str, options: impl Into<ConvertOptions>) -> BuildResult<String> {
  Converter::new(options).convert(code)
}
