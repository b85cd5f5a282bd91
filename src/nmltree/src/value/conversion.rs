// nmltree/src/value/conversion.rs

//! Conversions between Rust types and `Payload`.

use super::payload::{Payload, ValueType};

// Convenient From implementations for common Rust types
impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Boolean(value)
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Payload::Integer(value as i64)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Integer(value)
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Double(value)
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::String(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::String(value.to_string())
    }
}

impl From<Vec<bool>> for Payload {
    fn from(values: Vec<bool>) -> Self {
        Payload::BooleanList(values)
    }
}

impl From<Vec<i32>> for Payload {
    fn from(values: Vec<i32>) -> Self {
        Payload::IntegerList(values.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<i64>> for Payload {
    fn from(values: Vec<i64>) -> Self {
        Payload::IntegerList(values)
    }
}

impl From<Vec<f64>> for Payload {
    fn from(values: Vec<f64>) -> Self {
        Payload::DoubleList(values)
    }
}

impl From<Vec<String>> for Payload {
    fn from(values: Vec<String>) -> Self {
        Payload::StringList(values)
    }
}

impl From<Vec<&str>> for Payload {
    fn from(values: Vec<&str>) -> Self {
        Payload::StringList(values.into_iter().map(str::to_string).collect())
    }
}

// Slices, so literal arrays can be assigned without building a Vec first
impl From<&[bool]> for Payload {
    fn from(values: &[bool]) -> Self {
        Payload::BooleanList(values.to_vec())
    }
}

impl From<&[i32]> for Payload {
    fn from(values: &[i32]) -> Self {
        Payload::IntegerList(values.iter().copied().map(i64::from).collect())
    }
}

impl From<&[i64]> for Payload {
    fn from(values: &[i64]) -> Self {
        Payload::IntegerList(values.to_vec())
    }
}

impl From<&[f64]> for Payload {
    fn from(values: &[f64]) -> Self {
        Payload::DoubleList(values.to_vec())
    }
}

impl From<&[&str]> for Payload {
    fn from(values: &[&str]) -> Self {
        Payload::StringList(values.iter().map(|s| s.to_string()).collect())
    }
}

/// Rust types that a payload can be read back as.
///
/// Implemented for the eight non-empty payload kinds only, so asking for a
/// type the tree cannot hold does not compile.
pub trait PayloadType: Sized {
    /// The payload kind this type corresponds to.
    const VALUE_TYPE: ValueType;

    /// Extract the value if the active alternative matches.
    fn from_payload(payload: &Payload) -> Option<Self>;
}

macro_rules! impl_payload_type {
    ($ty:ty, $variant:ident) => {
        impl PayloadType for $ty {
            const VALUE_TYPE: ValueType = ValueType::$variant;

            fn from_payload(payload: &Payload) -> Option<Self> {
                match payload {
                    Payload::$variant(value) => Some(value.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_payload_type!(bool, Boolean);
impl_payload_type!(i64, Integer);
impl_payload_type!(f64, Double);
impl_payload_type!(String, String);
impl_payload_type!(Vec<bool>, BooleanList);
impl_payload_type!(Vec<i64>, IntegerList);
impl_payload_type!(Vec<f64>, DoubleList);
impl_payload_type!(Vec<String>, StringList);
