// nmltree/src/value/payload.rs

//! The typed payload carried by a tree node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value held by a node: nothing, a scalar, or a homogeneous list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Payload {
    /// No value has been assigned
    #[default]
    Empty,

    /// Logical value, written `.true.` / `.false.`
    Boolean(bool),

    /// Integer value
    Integer(i64),

    /// Floating-point value
    Double(f64),

    /// Character string
    String(String),

    BooleanList(Vec<bool>),
    IntegerList(Vec<i64>),
    DoubleList(Vec<f64>),
    StringList(Vec<String>),
}

/// Classification tag for the active payload alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    None,
    Boolean,
    Integer,
    Double,
    String,
    BooleanList,
    IntegerList,
    DoubleList,
    StringList,
}

impl ValueType {
    /// Get the type name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::BooleanList => "boolean list",
            ValueType::IntegerList => "integer list",
            ValueType::DoubleList => "double list",
            ValueType::StringList => "string list",
        }
    }

    /// Check if this tag names one of the list kinds.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ValueType::BooleanList
                | ValueType::IntegerList
                | ValueType::DoubleList
                | ValueType::StringList
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Payload {
    /// Get the classification tag of the active alternative.
    pub fn value_type(&self) -> ValueType {
        match self {
            Payload::Empty => ValueType::None,
            Payload::Boolean(_) => ValueType::Boolean,
            Payload::Integer(_) => ValueType::Integer,
            Payload::Double(_) => ValueType::Double,
            Payload::String(_) => ValueType::String,
            Payload::BooleanList(_) => ValueType::BooleanList,
            Payload::IntegerList(_) => ValueType::IntegerList,
            Payload::DoubleList(_) => ValueType::DoubleList,
            Payload::StringList(_) => ValueType::StringList,
        }
    }

    /// Check if no value has been assigned.
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}
