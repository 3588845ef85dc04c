use crate::model::RecordModel;
use std::fmt;

///
/// FieldModel
/// Runtime field metadata used by path resolution and literal parsing.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Element type shape (the inner type for `Option<T>` and `Vec<T>`).
    pub kind: FieldKind,
    pub cardinality: Cardinality,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, cardinality: Cardinality) -> Self {
        Self {
            name,
            kind,
            cardinality,
        }
    }

    /// True for sequence-valued fields. Text is never a collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self.cardinality, Cardinality::Many)
    }
}

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cardinality {
    One,
    Opt,
    Many,
}

///
/// FieldKind
///
/// Minimal type surface needed by the resolver and the literal parse table.
/// Aligned with `Value` variants.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Bool,

    /// Signed integer of the given bit width.
    Int { bits: u32 },

    /// Unsigned integer of the given bit width.
    Uint { bits: u32 },

    /// `single` marks an `f32` field.
    Float { single: bool },

    Text,
    Date,
    Timestamp,

    /// Unit-only enum; canonical variant names in declaration order.
    Enum(&'static [&'static str]),

    /// Nested record, resolved lazily so records may refer to themselves.
    Record(fn() -> &'static RecordModel),
}

impl FieldKind {
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Timestamp)
    }

    #[must_use]
    pub fn record(&self) -> Option<&'static RecordModel> {
        match self {
            Self::Record(model) => Some(model()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int { bits } => write!(f, "i{bits}"),
            Self::Uint { bits } => write!(f, "u{bits}"),
            Self::Float { single: true } => f.write_str("f32"),
            Self::Float { single: false } => f.write_str("f64"),
            Self::Text => f.write_str("text"),
            Self::Date => f.write_str("date"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::Enum(variants) => write!(f, "one of [{}]", variants.join(", ")),
            Self::Record(model) => write!(f, "record {}", model().name),
        }
    }
}
