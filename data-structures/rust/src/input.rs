//! Validation for values that arrive untyped, such as JSON documents or
//! floating-point numbers read from elsewhere. Everything here runs before a
//! heap is built or touched, so a rejected call leaves no partial state.

use serde_json::Value;

use crate::error::{HeapError, Result};
use crate::ordering::HeapOrdering;

/// The first constructor argument of a heap: nothing, one value, or many.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Initial {
    #[default]
    Empty,
    Single(i64),
    Many(Vec<i64>),
}

impl Initial {
    pub fn into_vec(self) -> Vec<i64> {
        match self {
            Initial::Empty => Vec::new(),
            Initial::Single(value) => vec![value],
            Initial::Many(values) => values,
        }
    }
}

impl From<i64> for Initial {
    fn from(value: i64) -> Self {
        Initial::Single(value)
    }
}

impl From<Vec<i64>> for Initial {
    fn from(values: Vec<i64>) -> Self {
        Initial::Many(values)
    }
}

impl From<&[i64]> for Initial {
    fn from(values: &[i64]) -> Self {
        Initial::Many(values.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Initial {
    fn from(values: [i64; N]) -> Self {
        Initial::Many(values.to_vec())
    }
}

impl<'a> TryFrom<&'a Value> for Initial {
    type Error = HeapError;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    let value = integer_from_value(item).map_err(|err| match err {
                        HeapError::InvalidArgument(detail) => {
                            HeapError::InvalidArgument(format!("element {idx}: {detail}"))
                        }
                    })?;
                    values.push(value);
                }
                Ok(Initial::Many(values))
            }
            Value::Number(_) => integer_from_value(value).map(Initial::Single),
            other => Err(HeapError::invalid(format!(
                "expected an integer or an array of integers, got {}",
                kind(other)
            ))),
        }
    }
}

pub fn integer_from_f64(value: f64) -> Result<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(HeapError::invalid(format!("{value} is not an integer")));
    }
    if value < -LIMIT || value >= LIMIT {
        return Err(HeapError::invalid(format!("{value} is out of range")));
    }
    Ok(value as i64)
}

pub fn integer_from_value(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(HeapError::invalid(format!("{n} is out of range")))
            } else {
                match n.as_f64() {
                    Some(f) => integer_from_f64(f),
                    None => Err(HeapError::invalid(format!("{n} is not an integer"))),
                }
            }
        }
        other => Err(HeapError::invalid(format!(
            "expected an integer, got {}",
            kind(other)
        ))),
    }
}

pub fn ordering_from_value(value: Option<&Value>, default: HeapOrdering) -> Result<HeapOrdering> {
    match value {
        None => Ok(default),
        Some(Value::String(token)) => token.parse(),
        Some(other) => Err(HeapError::invalid(format!(
            "ordering must be the string \"min\" or \"max\", got {}",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
