use amdpack_utils::indexmap::FxIndexMap;

use crate::{ModuleId, ModuleKind};

/// Every id mentioned by a bundle, either as a definition or as a dependency, with its kind.
///
/// Iteration follows the order in which ids were first seen while walking the records.
#[derive(Debug, Default, Clone)]
pub struct Classification {
  kinds: FxIndexMap<ModuleId, ModuleKind>,
}

impl Classification {
  pub fn new(kinds: FxIndexMap<ModuleId, ModuleKind>) -> Self {
    Self { kinds }
  }

  pub fn kind_of(&self, id: &str) -> Option<ModuleKind> {
    self.kinds.get(id).copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ModuleId, ModuleKind)> {
    self.kinds.iter().map(|(id, kind)| (id, *kind))
  }

  pub fn roots(&self) -> impl Iterator<Item = &ModuleId> {
    self.ids_of(ModuleKind::Root)
  }

  pub fn internals(&self) -> impl Iterator<Item = &ModuleId> {
    self.ids_of(ModuleKind::Internal)
  }

  pub fn externals(&self) -> impl Iterator<Item = &ModuleId> {
    self.ids_of(ModuleKind::External)
  }

  pub fn len(&self) -> usize {
    self.kinds.len()
  }

  pub fn is_empty(&self) -> bool {
    self.kinds.is_empty()
  }

  fn ids_of(&self, kind: ModuleKind) -> impl Iterator<Item = &ModuleId> {
    self.kinds.iter().filter(move |(_, k)| **k == kind).map(|(id, _)| id)
  }
}
