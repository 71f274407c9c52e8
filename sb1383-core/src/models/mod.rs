mod field;
mod form_data;
mod procurement;
mod unit;

pub use field::{EntryField, Field, FieldPathError};
pub use form_data::{FormData, ProcurementEntry};
pub use procurement::ProcurementCategory;
pub use unit::Unit;
