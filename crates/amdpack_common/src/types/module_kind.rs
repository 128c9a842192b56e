/// How an id participates in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
  /// Defined in the bundle and never depended upon by another module of the bundle.
  Root,
  /// Defined in the bundle and consumed by some module of the bundle. Always inlined.
  Internal,
  /// Depended upon but never defined. Stays a live `require` in the output.
  External,
}
