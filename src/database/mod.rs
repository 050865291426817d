pub mod patch;
pub mod pool;
pub mod rows;
pub mod table;

pub use patch::{FieldPatch, PartialUpdate, PatchValue};
pub use table::Table;
