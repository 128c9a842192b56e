use crate::{ModuleId, OutputMode};

#[derive(Debug, Clone)]
pub struct NormalizedConvertOptions {
  pub mode: OutputMode,
  /// `None` means "every root module of the bundle".
  pub entries: Option<Vec<ModuleId>>,
}
