pub mod classification;
pub mod module_id;
pub mod module_kind;
pub mod module_record;
