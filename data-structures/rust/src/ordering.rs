use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HeapError, Result};

/// Which end of the integer range surfaces at the root of a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapOrdering {
    #[default]
    Min,
    Max,
}

impl HeapOrdering {
    /// Returns `Less` when `a` has strictly higher priority than `b`.
    pub fn compare(self, a: i64, b: i64) -> Ordering {
        match self {
            HeapOrdering::Min => a.cmp(&b),
            HeapOrdering::Max => b.cmp(&a),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            HeapOrdering::Min => "min",
            HeapOrdering::Max => "max",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeapOrdering::Min => "Min Heap",
            HeapOrdering::Max => "Max Heap",
        }
    }

    pub(crate) fn resolve(token: Option<&str>, default: HeapOrdering) -> Result<Self> {
        match token {
            Some(token) => token.parse(),
            None => Ok(default),
        }
    }
}

impl FromStr for HeapOrdering {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(HeapOrdering::Min),
            "max" => Ok(HeapOrdering::Max),
            other => Err(HeapError::invalid(format!(
                "ordering must be \"min\" or \"max\", got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for HeapOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
