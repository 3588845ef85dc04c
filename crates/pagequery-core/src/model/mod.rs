mod field;
mod record;

pub use field::{Cardinality, FieldKind, FieldModel};
pub use record::RecordModel;
