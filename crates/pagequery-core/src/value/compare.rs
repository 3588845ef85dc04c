use super::Value;
use std::cmp::Ordering;

impl Value {
    /// Canonical total ordering used for ORDER BY and range checks.
    ///
    /// Values of the same variant compare naturally; mixed variants fall
    /// back to a fixed rank so the ordering stays total. `Null` sorts first.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        if let Some(ordering) = self.strict_cmp(other) {
            return ordering;
        }

        canonical_rank(self).cmp(&canonical_rank(other))
    }

    /// Ordering for identical variants only.
    ///
    /// Returns `None` for mixed variants.
    #[must_use]
    pub fn strict_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Uint(a), Self::Uint(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => Some(a.total_cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            (Self::Enum(a), Self::Enum(b)) => Some(a.ordinal.cmp(&b.ordinal)),
            (Self::List(a), Self::List(b)) => Some(sequence_cmp(a, b)),
            (Self::Record(a), Self::Record(b)) => Some(record_cmp(a, b)),
            _ => {
                // NOTE: Non-matching variants do not define ordering.
                None
            }
        }
    }
}

const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) => 2,
        Value::Uint(_) => 3,
        Value::Float(_) => 4,
        Value::Text(_) => 5,
        Value::Date(_) => 6,
        Value::Timestamp(_) => 7,
        Value::Enum(_) => 8,
        Value::List(_) => 9,
        Value::Record(_) => 10,
    }
}

fn sequence_cmp(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right) {
        let ordering = left.canonical_cmp(right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len())
}

fn record_cmp(left: &[(String, Value)], right: &[(String, Value)]) -> Ordering {
    for ((left_name, left_value), (right_name, right_value)) in left.iter().zip(right) {
        let ordering = left_name
            .cmp(right_name)
            .then_with(|| left_value.canonical_cmp(right_value));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len())
}
