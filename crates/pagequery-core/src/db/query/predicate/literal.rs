use crate::{
    model::FieldKind,
    value::{Value, ValueEnum},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

///
/// Literal parse table
///
/// One parse function per scalar kind. Input is a single trimmed filter
/// token; `None` means the token does not denote a value of that kind.
/// Records have no literal form.
///

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[must_use]
pub fn parse_literal(kind: FieldKind, raw: &str) -> Option<Value> {
    match kind {
        FieldKind::Bool => parse_bool(raw).map(Value::Bool),
        FieldKind::Int { bits } => raw
            .parse::<i64>()
            .ok()
            .filter(|value| fits_signed(*value, bits))
            .map(Value::Int),
        FieldKind::Uint { bits } => raw
            .parse::<u64>()
            .ok()
            .filter(|value| fits_unsigned(*value, bits))
            .map(Value::Uint),
        FieldKind::Float { single } => parse_float(raw, single).map(Value::Float),
        FieldKind::Text => Some(Value::Text(raw.to_string())),
        FieldKind::Date => parse_date(raw).map(Value::Date),
        FieldKind::Timestamp => parse_timestamp(raw).map(Value::Timestamp),
        FieldKind::Enum(variants) => parse_enum(variants, raw).map(Value::Enum),
        FieldKind::Record(_) => None,
    }
}

fn fits_signed(value: i64, bits: u32) -> bool {
    if bits >= i64::BITS {
        return true;
    }
    let bound = 1_i64 << (bits - 1);

    (-bound..bound).contains(&value)
}

fn fits_unsigned(value: u64, bits: u32) -> bool {
    value.checked_shr(bits).is_none_or(|rest| rest == 0)
}

// f32 fields are widened from f32, so literals must round the same way
fn parse_float(raw: &str, single: bool) -> Option<f64> {
    let value = if single {
        f64::from(raw.parse::<f32>().ok()?)
    } else {
        raw.parse::<f64>().ok()?
    };

    value.is_finite().then_some(value)
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| parse_timestamp(raw).map(|ts| ts.date_naive()))
}

// date-only input is midnight UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_enum(variants: &'static [&'static str], raw: &str) -> Option<ValueEnum> {
    let (ordinal, variant) = variants
        .iter()
        .copied()
        .enumerate()
        .find(|(_, variant)| variant.eq_ignore_ascii_case(raw))?;

    Some(ValueEnum::new(variant, u32::try_from(ordinal).ok()?))
}

///
/// TESTS
///
