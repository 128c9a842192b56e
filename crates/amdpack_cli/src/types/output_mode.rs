use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputMode {
  Standalone,
  Compact,
}

impl From<OutputMode> for amdpack::OutputMode {
  fn from(value: OutputMode) -> Self {
    match value {
      OutputMode::Standalone => amdpack::OutputMode::Standalone,
      OutputMode::Compact => amdpack::OutputMode::Compact,
    }
  }
}
