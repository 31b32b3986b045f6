//! Property value type of the extended property graph model.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A scalar property value.
///
/// Exactly one variant is active. Ordering is only defined between values
/// of the same variant; see [`PropertyValue::try_cmp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    Null,
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    DateTime(DateTime<Utc>),
    Decimal(Decimal),
}

// ============================================================================
// Fixed-point decimal
// ============================================================================

/// Number of fractional digits carried by [`Decimal`].
pub const DECIMAL_SCALE: u32 = 2;

const DECIMAL_FACTOR: i64 = 10i64.pow(DECIMAL_SCALE);

/// Fixed-point decimal with two fractional digits, stored as an integer
/// count of hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimal {
    hundredths: i64,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { hundredths: 0 };

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self { hundredths }
    }

    pub const fn hundredths(&self) -> i64 {
        self.hundredths
    }

    /// Round a floating-point amount to two fractional digits, ties away
    /// from zero (round-half-up on magnitude).
    ///
    /// Rounding applies to the shortest decimal form of `value`, not to its
    /// binary expansion: `1.005` becomes `1.01` and `2.675` becomes `2.68`.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument(format!("decimal from non-finite value {value}")));
        }
        let out_of_range = || Error::InvalidArgument(format!("decimal out of range: {value}"));

        // `Display` for f64 prints the shortest round-trip digits, never an exponent.
        let text = value.abs().to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let whole: i64 = whole.parse().map_err(|_| out_of_range())?;
        let digits: Vec<i64> = fraction
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .chain(std::iter::repeat(0))
            .take(DECIMAL_SCALE as usize + 1)
            .collect();
        let cents = digits[..DECIMAL_SCALE as usize].iter().fold(0, |acc, d| acc * 10 + d);
        let round_up = i64::from(digits[DECIMAL_SCALE as usize] >= 5);

        let magnitude = whole
            .checked_mul(DECIMAL_FACTOR)
            .and_then(|h| h.checked_add(cents + round_up))
            .ok_or_else(out_of_range)?;
        let hundredths = if value < 0.0 { -magnitude } else { magnitude };
        Ok(Self { hundredths })
    }

    pub fn to_f64(&self) -> f64 {
        self.hundredths as f64 / DECIMAL_FACTOR as f64
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        let factor = DECIMAL_FACTOR as u64;
        write!(f, "{sign}{}.{:02}", abs / factor, abs % factor)
    }
}

// ============================================================================
// Type checking
// ============================================================================

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "NULL",
            PropertyValue::Int(_) => "INT",
            PropertyValue::Long(_) => "LONG",
            PropertyValue::Float(_) => "FLOAT",
            PropertyValue::Double(_) => "DOUBLE",
            PropertyValue::Boolean(_) => "BOOLEAN",
            PropertyValue::String(_) => "STRING",
            PropertyValue::DateTime(_) => "DATETIME",
            PropertyValue::Decimal(_) => "DECIMAL",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, PropertyValue::Null) }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(i64::from(*i)),
            PropertyValue::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(f64::from(*f)),
            PropertyValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<i32> for PropertyValue { fn from(v: i32) -> Self { PropertyValue::Int(v) } }
impl From<i64> for PropertyValue { fn from(v: i64) -> Self { PropertyValue::Long(v) } }
impl From<f32> for PropertyValue { fn from(v: f32) -> Self { PropertyValue::Float(v) } }
impl From<f64> for PropertyValue { fn from(v: f64) -> Self { PropertyValue::Double(v) } }
impl From<bool> for PropertyValue { fn from(v: bool) -> Self { PropertyValue::Boolean(v) } }
impl From<String> for PropertyValue { fn from(v: String) -> Self { PropertyValue::String(v) } }
impl From<&str> for PropertyValue { fn from(v: &str) -> Self { PropertyValue::String(v.to_owned()) } }
impl From<DateTime<Utc>> for PropertyValue { fn from(v: DateTime<Utc>) -> Self { PropertyValue::DateTime(v) } }
impl From<Decimal> for PropertyValue { fn from(v: Decimal) -> Self { PropertyValue::Decimal(v) } }
impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(PropertyValue::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Long(l) => write!(f, "{l}L"),
            PropertyValue::Float(v) => write!(f, "{v}f"),
            PropertyValue::Double(v) => write!(f, "{v}"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
            PropertyValue::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            PropertyValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            PropertyValue::Decimal(d) => write!(f, "{d}"),
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PropertyValue {
    /// Compare two values of the same variant.
    ///
    /// Fails with [`Error::TypeMismatch`] when the variants differ; callers
    /// needing cross-type comparison must coerce first. Floating-point
    /// variants use IEEE total ordering, so the result is always defined.
    pub fn try_cmp(&self, other: &PropertyValue) -> Result<Ordering> {
        match (self, other) {
            (PropertyValue::Null, PropertyValue::Null) => Ok(Ordering::Equal),
            (PropertyValue::Int(a), PropertyValue::Int(b)) => Ok(a.cmp(b)),
            (PropertyValue::Long(a), PropertyValue::Long(b)) => Ok(a.cmp(b)),
            (PropertyValue::Float(a), PropertyValue::Float(b)) => Ok(a.total_cmp(b)),
            (PropertyValue::Double(a), PropertyValue::Double(b)) => Ok(a.total_cmp(b)),
            (PropertyValue::Boolean(a), PropertyValue::Boolean(b)) => Ok(a.cmp(b)),
            (PropertyValue::String(a), PropertyValue::String(b)) => Ok(a.cmp(b)),
            (PropertyValue::DateTime(a), PropertyValue::DateTime(b)) => Ok(a.cmp(b)),
            (PropertyValue::Decimal(a), PropertyValue::Decimal(b)) => Ok(a.cmp(b)),
            _ => Err(Error::TypeMismatch {
                expected: self.type_name().into(),
                got: other.type_name().into(),
            }),
        }
    }
}
