mod formats;

pub mod rewrite_module;

use amdpack_common::OutputMode;
use amdpack_error::{BuildResult, ConvertError};
use itertools::Itertools;

use crate::{link_stage::LinkStageOutput, types::SharedOptions};

use self::{
  formats::{
    compact::{render_compact_multi, render_compact_single},
    standalone::render_standalone,
  },
  rewrite_module::wrap_module,
};

pub struct GenerateStage<'a> {
  link_output: &'a LinkStageOutput,
  options: &'a SharedOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(link_output: &'a LinkStageOutput, options: &'a SharedOptions) -> Self {
    Self { link_output, options }
  }

  pub fn generate(&self) -> BuildResult<String> {
    let code = self.link_output.records.iter().map(wrap_module).join("\n");
    let externals = self.link_output.classification.externals().collect::<Vec<_>>();

    let output = match self.options.mode {
      OutputMode::Standalone => render_standalone(&code, &externals),
      OutputMode::Compact => match self.link_output.entries.as_slice() {
        [] => return Err(ConvertError::NoEntries.into()),
        [entry] => render_compact_single(entry, &externals, &code),
        entries => render_compact_multi(entries, &externals, &code),
      },
    };

    log::debug!("Generated {} output ({} bytes)", self.options.mode, output.len());
    Ok(output)
  }
}
