mod build_error;
mod convert_error;

pub use crate::{
  build_error::{BuildError, BuildResult},
  convert_error::ConvertError,
};
