use amdpack_common::Classification;
use amdpack_error::ConvertError;
use amdpack_utils::sanitize_binding_name::sanitize_binding_name;
use rustc_hash::FxHashMap;

/// Fails when two distinct ids of the bundle would share one local binding, e.g. `a-b` and `a.b`.
pub fn validate_bindings(classification: &Classification) -> Result<(), ConvertError> {
  let mut bindings = FxHashMap::default();
  for (id, _) in classification.iter() {
    let binding = sanitize_binding_name(id);
    if let Some(first) = bindings.get(&binding) {
      return Err(ConvertError::BindingCollision {
        first: String::from(*first),
        second: id.to_string(),
        binding,
      });
    }
    bindings.insert(binding, id.as_str());
  }
  Ok(())
}

#[test]
fn test_validate_bindings() {
  use amdpack_common::ModuleRecord;

  use crate::classify_modules;

  let classification = classify_modules(&[
    ModuleRecord::new("lib/a-b", ["lib/a_b2", "lib/A-b"], ""),
    ModuleRecord::new("lib/a_b2", Vec::<&str>::new(), ""),
  ]);
  assert_eq!(validate_bindings(&classification), Ok(()));

  let classification = classify_modules(&[ModuleRecord::new("a-b", ["a.b"], "")]);
  assert_eq!(
    validate_bindings(&classification),
    Err(ConvertError::BindingCollision {
      first: "a-b".to_string(),
      second: "a.b".to_string(),
      binding: "$a_b".to_string(),
    })
  );
}
