use amdpack_common::{Classification, ModuleId, ModuleKind};
use amdpack_error::ConvertError;
use rustc_hash::FxHashSet;

/// Entry modules of compact output: the requested ones, or every root when nothing was requested.
pub fn determine_entries(
  classification: &Classification,
  requested: Option<&[ModuleId]>,
) -> Result<Vec<ModuleId>, ConvertError> {
  let entries = match requested {
    Some(requested) => {
      let mut seen = FxHashSet::default();
      for entry in requested {
        if classification.kind_of(entry) != Some(ModuleKind::Root) {
          return Err(ConvertError::UnknownEntry(entry.to_string()));
        }
        if !seen.insert(entry) {
          return Err(ConvertError::DuplicateEntry(entry.to_string()));
        }
      }
      requested.to_vec()
    }
    None => classification.roots().cloned().collect(),
  };

  if entries.is_empty() {
    return Err(ConvertError::NoEntries);
  }

  Ok(entries)
}
