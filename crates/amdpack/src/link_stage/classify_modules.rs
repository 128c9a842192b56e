use amdpack_common::{Classification, ModuleKind, ModuleRecord};
use amdpack_utils::indexmap::FxIndexMap;
use indexmap::map::Entry;
use rustc_hash::FxHashSet;

/// Sorts every id mentioned by `records` into root, internal or external.
///
/// - An id is `Root` when it is defined exactly once and no record depends on it.
/// - An id is `Internal` when it is defined and also depended upon, or defined more than once.
/// - An id is `External` when records depend on it but none defines it.
///
/// The result doesn't depend on the order of the records, only the iteration order does: ids are
/// kept in the order they were first seen, visiting each record's own id before its dependencies.
pub fn classify_modules(records: &[ModuleRecord]) -> Classification {
  let mut kinds = FxIndexMap::default();
  let mut defined = FxHashSet::default();

  for record in records {
    if !defined.insert(&record.id) {
      log::warn!("Module `{}` is defined more than once, the last definition wins", record.id);
    }

    match kinds.entry(record.id.clone()) {
      Entry::Vacant(entry) => {
        entry.insert(ModuleKind::Root);
      }
      Entry::Occupied(mut entry) => {
        entry.insert(ModuleKind::Internal);
      }
    }

    for dependency in &record.dependencies {
      match kinds.entry(dependency.clone()) {
        Entry::Vacant(entry) => {
          entry.insert(ModuleKind::External);
        }
        Entry::Occupied(mut entry) => {
          if *entry.get() == ModuleKind::Root {
            entry.insert(ModuleKind::Internal);
          }
        }
      }
    }
  }

  let classification = Classification::new(kinds);
  log::debug!(
    "Classified {} id(s): roots {:?}, externals {:?}",
    classification.len(),
    classification.roots().collect::<Vec<_>>(),
    classification.externals().collect::<Vec<_>>(),
  );
  classification
}
