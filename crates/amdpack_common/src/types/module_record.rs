use crate::ModuleId;

/// One `define(id, dependencies, factory)` registration found in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
  pub id: ModuleId,
  /// As declared, duplicates and self references included.
  pub dependencies: Vec<ModuleId>,
  /// Source text between the factory's braces. Refers to the free names `require`, `exports`
  /// and `module`.
  pub body: String,
}

impl ModuleRecord {
  pub fn new(
    id: impl Into<ModuleId>,
    dependencies: impl IntoIterator<Item = impl Into<ModuleId>>,
    body: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      dependencies: dependencies.into_iter().map(Into::into).collect(),
      body: body.into(),
    }
  }
}
