// nmltree/src/value/mod.rs

//! The typed tree data model: payloads, their conversions and tree nodes.

pub mod conversion;
pub mod node;
pub mod payload;


// Re-export the main types
pub use conversion::PayloadType;
pub use node::{Value, DEFAULT_ROOT_KEY};
pub use payload::{Payload, ValueType};
