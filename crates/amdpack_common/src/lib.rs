mod options;
mod types;

pub use crate::{
  options::{
    normalized_convert_options::NormalizedConvertOptions, output_mode::OutputMode, ConvertOptions,
  },
  types::{
    classification::Classification, module_id::ModuleId, module_kind::ModuleKind,
    module_record::ModuleRecord,
  },
};
