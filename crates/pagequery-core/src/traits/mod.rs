use crate::{
    model::{FieldKind, RecordModel},
    value::Value,
};
use chrono::{DateTime, NaiveDate, Utc};

///
/// Record
///
/// A row type whose public fields can be addressed by the filter and sort
/// grammars. Implemented by `#[derive(Record)]`.
///

pub trait Record {
    /// Field registry, built once per type.
    fn model() -> &'static RecordModel;

    /// Read a field by its declared name.
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// FieldValue
///
/// Conversion boundary between Rust field types and runtime `Value`s.
/// `KIND` is the element shape; `Option<T>` and `Vec<T>` are classified by
/// the derive and use the inner type's implementation.
///

pub trait FieldValue {
    const KIND: FieldKind;

    fn to_value(&self) -> Value;
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for &str {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for NaiveDate {
    const KIND: FieldKind = FieldKind::Date;

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl FieldValue for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

macro_rules! impl_field_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Int { bits: <$ty>::BITS };

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_field_value_uint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Uint { bits: <$ty>::BITS };

                fn to_value(&self) -> Value {
                    Value::Uint(u64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_field_value_float {
    ($($ty:ty => $single:literal),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Float { single: $single };

                fn to_value(&self) -> Value {
                    Value::Float(f64::from(*self))
                }
            }
        )*
    };
}

impl_field_value_int!(i8, i16, i32, i64);
impl_field_value_uint!(u8, u16, u32, u64);
impl_field_value_float!(f32 => true, f64 => false);
