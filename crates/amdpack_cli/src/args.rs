use std::path::PathBuf;

use clap::Args;

use crate::types::output_mode::OutputMode;

#[derive(Args)]
pub struct InputArgs {
  /// AMD bundle to convert, `-` reads from stdin.
  #[clap(default_value = "-")]
  pub input: PathBuf,

  /// JSON file with `{ "mode": ..., "entries": [...] }`. Flags take precedence.
  #[clap(long)]
  pub options: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'm')]
  pub mode: Option<OutputMode>,

  /// Root module to expose in compact mode. Repeat for several entries.
  #[clap(long = "entry", short = 'e', action = clap::ArgAction::Append)]
  pub entries: Option<Vec<String>>,

  /// Write to this file instead of stdout.
  #[clap(long, short = 'o')]
  pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long, short = 's')]
  pub silent: bool,

  #[clap(long, short = 'v')]
  pub verbose: bool,
}
