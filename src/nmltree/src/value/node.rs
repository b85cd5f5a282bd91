// nmltree/src/value/node.rs

//! The `Value` tree node and its accessors.

use super::conversion::PayloadType;
use super::payload::{Payload, ValueType};
use crate::error::{NmlError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Key given to a root node when none is supplied.
pub const DEFAULT_ROOT_KEY: &str = "General";

/// A node of a namelist tree.
///
/// A node is a leaf or a block depending only on whether it has children.
/// Children are owned and kept sorted by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    comment: String,
    #[serde(default)]
    payload: Payload,
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "deserialize_children"
    )]
    children: BTreeMap<String, Value>,
}

/// A child's key is always the key it is stored under, whatever the input says.
fn deserialize_children<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut children = BTreeMap::<String, Value>::deserialize(deserializer)?;
    for (key, child) in children.iter_mut() {
        child.key.clone_from(key);
    }
    Ok(children)
}

impl Value {
    /// Create a new empty root node keyed `"General"`.
    pub fn new() -> Self {
        Self::named(DEFAULT_ROOT_KEY)
    }

    /// Create a new empty node with the given key.
    pub fn named<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            comment: String::new(),
            payload: Payload::Empty,
            children: BTreeMap::new(),
        }
    }

    /// The node's name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The node's trailing comment, empty if none.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Set the trailing comment.
    pub fn set_comment<S: Into<String>>(&mut self, comment: S) -> &mut Self {
        self.comment = comment.into();
        self
    }

    /// The active payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Replace the payload.
    pub fn set<P: Into<Payload>>(&mut self, value: P) -> &mut Self {
        self.payload = value.into();
        self
    }

    /// Replace the payload and the comment together.
    pub fn set_with_comment<P, S>(&mut self, value: P, comment: S) -> &mut Self
    where
        P: Into<Payload>,
        S: Into<String>,
    {
        self.payload = value.into();
        self.comment = comment.into();
        self
    }

    /// Reset the payload to empty, keeping comment and children.
    pub fn clear_payload(&mut self) {
        self.payload = Payload::Empty;
    }

    /// Get the child for `key`, creating an empty one if absent.
    pub fn get_or_create(&mut self, key: &str) -> &mut Value {
        self.children
            .entry(key.to_string())
            .or_insert_with(|| Value::named(key))
    }

    /// Get an existing child.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.children
            .get(key)
            .ok_or_else(|| NmlError::key_not_found(self.key.as_str(), key))
    }

    /// Get a mutable reference to an existing child.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        // Split the borrow so the error can still name the parent.
        let parent = &self.key;
        self.children
            .get_mut(key)
            .ok_or_else(|| NmlError::key_not_found(parent.as_str(), key))
    }

    /// Check if a direct child with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Remove a direct child by key.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Iterate over the children in ascending key order.
    pub fn children(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Child keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Get the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if the node renders as a block (it has children).
    pub fn is_block(&self) -> bool {
        !self.children.is_empty()
    }

    /// Read the payload as `T`.
    ///
    /// Fails with [`NmlError::TypeMismatch`] if the active kind is not `T`.
    pub fn get<T: PayloadType>(&self) -> Result<T> {
        T::from_payload(&self.payload).ok_or_else(|| {
            NmlError::type_mismatch(self.key.as_str(), T::VALUE_TYPE, self.value_type())
        })
    }

    /// Read the payload as `T`, falling back to `default` on a kind mismatch.
    pub fn get_or<T: PayloadType>(&self, default: T) -> T {
        T::from_payload(&self.payload).unwrap_or(default)
    }

    /// Classification of the active payload.
    pub fn value_type(&self) -> ValueType {
        self.payload.value_type()
    }

    /// Check if no payload has been assigned.
    pub fn is_null(&self) -> bool {
        self.payload.is_empty()
    }

    /// Move the contents out, leaving an empty root node in place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::new()
    }
}
