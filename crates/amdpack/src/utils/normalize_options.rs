use amdpack_common::{ConvertOptions, ModuleId, NormalizedConvertOptions};

pub fn normalize_options(raw_options: ConvertOptions) -> NormalizedConvertOptions {
  NormalizedConvertOptions {
    mode: raw_options.mode.unwrap_or_default(),
    entries: raw_options
      .entries
      .map(|entries| entries.into_iter().map(ModuleId::from).collect()),
  }
}

#[test]
fn test_normalize_options() {
  use amdpack_common::OutputMode;

  let options = normalize_options(ConvertOptions::default());
  assert_eq!(options.mode, OutputMode::Standalone);
  assert!(options.entries.is_none());

  let options = normalize_options(ConvertOptions {
    mode: Some(OutputMode::Compact),
    entries: Some(vec!["a".to_string()]),
  });
  assert_eq!(options.mode, OutputMode::Compact);
  assert_eq!(options.entries, Some(vec![ModuleId::from("a")]));
}
