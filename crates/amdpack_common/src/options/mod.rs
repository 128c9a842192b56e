pub mod normalized_convert_options;
pub mod output_mode;

use std::str::FromStr;

use amdpack_error::ConvertError;
use serde::Deserialize;

use crate::OutputMode;

/// Raw, user-facing options. Missing fields fall back to defaults in `normalize_options`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConvertOptions {
  pub mode: Option<OutputMode>,
  /// Compact mode only. Overrides the automatically computed root modules.
  pub entries: Option<Vec<String>>,
}

impl From<OutputMode> for ConvertOptions {
  fn from(mode: OutputMode) -> Self {
    Self { mode: Some(mode), entries: None }
  }
}

/// `"compact".parse::<ConvertOptions>()` is shorthand for `{ mode: "compact" }`.
impl FromStr for ConvertOptions {
  type Err = ConvertError;

  fn from_str(mode: &str) -> Result<Self, Self::Err> {
    mode.parse::<OutputMode>().map(Self::from)
  }
}
