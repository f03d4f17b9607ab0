//! Collect key/value pairs for one transpose block.

use crate::utils::config::FILTERED_VALUE;

/// Keys and values gathered since the last flush, in arrival order
///
/// **Public** - owned by the transpose emitter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairBlock {
    keys: Vec<String>,
    values: Vec<String>,
}

impl PairBlock {
    /// Create an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unless its value is exactly `"0"`
    ///
    /// # Returns
    /// `true` if the pair was kept
    pub fn push(&mut self, key: &str, value: &str) -> bool {
        if value == FILTERED_VALUE {
            return false;
        }

        self.keys.push(key.to_string());
        self.values.push(value.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}
