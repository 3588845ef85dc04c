use crate::{db::query::path::FieldPath, value::Value};
use std::{
    fmt,
    ops::{BitAnd, BitOr},
};

///
/// Predicate AST
///
/// Backend-agnostic boolean test over a record. Construction is pure and
/// deterministic; each backend lowers the tree on its own (the in-memory
/// evaluator in `query::eval`, the textual rendering in `Display`).
///
/// Field paths inside `Any` are relative to the collection element.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    Eq {
        field: FieldPath,
        value: Value,
    },
    /// Case-insensitive substring test.
    Contains {
        field: FieldPath,
        value: String,
    },
    /// Inclusive bounds; at least one side is present.
    Range {
        field: FieldPath,
        lower: Option<Value>,
        upper: Option<Value>,
    },
    Any {
        collection: FieldPath,
        predicate: Box<Self>,
    },
    And(Vec<Self>),
    Or(Vec<Self>),
}

impl Predicate {
    #[must_use]
    pub fn eq(field: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn contains(field: impl Into<FieldPath>, value: impl Into<String>) -> Self {
        Self::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn range(field: impl Into<FieldPath>, lower: Option<Value>, upper: Option<Value>) -> Self {
        Self::Range {
            field: field.into(),
            lower,
            upper,
        }
    }

    #[must_use]
    pub fn any(collection: impl Into<FieldPath>, predicate: Self) -> Self {
        Self::Any {
            collection: collection.into(),
            predicate: Box::new(predicate),
        }
    }

    /// AND of `preds`; a single predicate is returned unwrapped.
    #[must_use]
    pub fn and_all(preds: Vec<Self>) -> Option<Self> {
        Self::combine(preds, Self::And)
    }

    /// OR of `preds`; a single predicate is returned unwrapped.
    #[must_use]
    pub fn or_any(preds: Vec<Self>) -> Option<Self> {
        Self::combine(preds, Self::Or)
    }

    fn combine(mut preds: Vec<Self>, wrap: fn(Vec<Self>) -> Self) -> Option<Self> {
        match preds.len() {
            0 => None,
            1 => preds.pop(),
            _ => Some(wrap(preds)),
        }
    }

    const fn is_compound(&self) -> bool {
        matches!(self, Self::And(_) | Self::Or(_))
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::Or(vec![self.clone(), rhs.clone()])
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq { field, value } => write!(f, "{field} = {value}"),
            Self::Contains { field, value } => write!(f, "{field} ICONTAINS '{value}'"),
            Self::Range {
                field,
                lower: Some(lower),
                upper: Some(upper),
            } => write!(f, "({field} >= {lower} AND {field} <= {upper})"),
            Self::Range {
                field,
                lower: Some(lower),
                upper: None,
            } => write!(f, "{field} >= {lower}"),
            Self::Range {
                field,
                lower: None,
                upper: Some(upper),
            } => write!(f, "{field} <= {upper}"),
            Self::Range {
                field,
                lower: None,
                upper: None,
            } => write!(f, "{field} IS ANYTHING"),
            Self::Any {
                collection,
                predicate,
            } => write!(f, "ANY({collection}, {predicate})"),
            Self::And(children) => write_joined(f, children, " AND "),
            Self::Or(children) => write_joined(f, children, " OR "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Predicate], sep: &str) -> fmt::Result {
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            f.write_str(sep)?;
        }
        if child.is_compound() {
            write!(f, "({child})")?;
        } else {
            write!(f, "{child}")?;
        }
    }

    Ok(())
}
