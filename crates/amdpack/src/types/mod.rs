use std::sync::Arc;

use amdpack_common::NormalizedConvertOptions;

pub type SharedOptions = Arc<NormalizedConvertOptions>;
