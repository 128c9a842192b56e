use std::{fmt::Display, str::FromStr};

use amdpack_error::ConvertError;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputMode {
  /// One self-running script that exports nothing.
  #[default]
  Standalone,
  /// AMD `define` calls for the entry modules, with everything internal inlined.
  Compact,
}

impl FromStr for OutputMode {
  type Err = ConvertError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "standalone" => Ok(Self::Standalone),
      "compact" => Ok(Self::Compact),
      _ => Err(ConvertError::UnknownMode(s.to_string())),
    }
  }
}

impl TryFrom<String> for OutputMode {
  type Error = ConvertError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl Display for OutputMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Standalone => write!(f, "standalone"),
      Self::Compact => write!(f, "compact"),
    }
  }
}

#[test]
fn test_output_mode_round_trips_through_display() {
  for mode in [OutputMode::Standalone, OutputMode::Compact] {
    assert_eq!(mode.to_string().parse::<OutputMode>().unwrap(), mode);
  }
  assert_eq!(OutputMode::default(), OutputMode::Standalone);
  assert!("Compact".parse::<OutputMode>().is_err());
}
