pub mod classify_modules;
mod determine_entries;
mod validate_bindings;

use amdpack_common::{Classification, ModuleId, ModuleRecord, OutputMode};
use amdpack_error::BuildResult;

use crate::{scan_stage::ScanStageOutput, types::SharedOptions};

use self::{
  classify_modules::classify_modules, determine_entries::determine_entries,
  validate_bindings::validate_bindings,
};

#[derive(Debug)]
pub struct LinkStageOutput {
  pub records: Vec<ModuleRecord>,
  pub classification: Classification,
  /// Empty in standalone mode.
  pub entries: Vec<ModuleId>,
}

pub struct LinkStage<'a> {
  records: Vec<ModuleRecord>,
  options: &'a SharedOptions,
}

impl<'a> LinkStage<'a> {
  pub fn new(scan_stage_output: ScanStageOutput, options: &'a SharedOptions) -> Self {
    let ScanStageOutput { records } = scan_stage_output;
    Self { records, options }
  }

  pub fn link(self) -> BuildResult<LinkStageOutput> {
    let classification = classify_modules(&self.records);
    validate_bindings(&classification)?;

    let entries = match self.options.mode {
      OutputMode::Standalone => {
        if self.options.entries.is_some() {
          log::debug!("Ignoring `entries`, they only apply to compact output");
        }
        Vec::new()
      }
      OutputMode::Compact => determine_entries(&classification, self.options.entries.as_deref())?,
    };

    Ok(LinkStageOutput { records: self.records, classification, entries })
  }
}
