// src/persona/score.rs
// Integer trait score with no width limit

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A single trait value.
///
/// Holds the integer exactly as it arrived on the wire, so values beyond the
/// i64/u64 range are stored and echoed digit for digit. Fractional or
/// exponent forms (`75.0`, `7.5e1`) are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TraitScore(Number);

impl TraitScore {
    /// The value as an i64, if it fits
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }
}

fn is_integer(n: &Number) -> bool {
    !n.to_string().contains(['.', 'e', 'E'])
}

impl From<i64> for TraitScore {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl PartialEq<i64> for TraitScore {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl fmt::Display for TraitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TraitScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        if is_integer(&number) {
            Ok(Self(number))
        } else {
            let repr = number.to_string();
            Err(de::Error::invalid_type(Unexpected::Other(&repr), &"an integer"))
        }
    }
}
