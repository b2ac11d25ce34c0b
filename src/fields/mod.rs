pub mod group;
pub mod identifier;

pub use group::{FieldRow, RowGroup};
pub use identifier::FieldIdentifier;
