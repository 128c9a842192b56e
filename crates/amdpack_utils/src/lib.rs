pub mod ecmascript;
pub mod indexmap;
pub mod sanitize_binding_name;
pub mod xxhash;
