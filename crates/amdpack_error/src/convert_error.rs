use thiserror::Error;

/// Failures a conversion reports to its caller.
///
/// `Parse` and `MalformedDefine` come from discovering module records in the bundle text. The
/// remaining variants are caller configuration errors and are never turned into output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
  #[error("Failed to parse bundle: {0}")]
  Parse(String),

  #[error("Malformed `define` call at {start}..{end}: {reason}")]
  MalformedDefine { reason: String, start: u32, end: u32 },

  #[error("Unknown output mode `{0}`, expected `standalone` or `compact`")]
  UnknownMode(String),

  #[error("Compact output requires at least one entry module")]
  NoEntries,

  #[error("Entry `{0}` is not a root module of the bundle")]
  UnknownEntry(String),

  #[error("Entry `{0}` is listed more than once")]
  DuplicateEntry(String),

  #[error("Module ids `{first}` and `{second}` both map to the binding `{binding}`")]
  BindingCollision { first: String, second: String, binding: String },
}
