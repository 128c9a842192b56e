mod converter;
mod generate_stage;
mod link_stage;
mod scan_stage;
mod types;
mod utils;

pub use crate::{
  converter::{convert, Converter},
  generate_stage::rewrite_module::{rewrite_module_body, wrap_module},
  link_stage::classify_modules::classify_modules,
};
pub use amdpack_common::*;
pub use amdpack_error::{BuildError, BuildResult, ConvertError};
pub use amdpack_utils::{sanitize_binding_name::sanitize_binding_name, xxhash::xxhash_hex};
