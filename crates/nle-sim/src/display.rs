//! In-memory display node.

use std::collections::BTreeMap;

use nle_core::DisplayTarget;

/// A display node that keeps its dataset, its markup and a write count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayElement {
    dataset: BTreeMap<String, String>,
    inner_html: String,
    writes: usize,
}

impl DisplayElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dataset entry for `key`, if set.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Number of writes of either kind since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DisplayTarget for DisplayElement {
    fn set_data(&mut self, key: &str, value: &str) {
        self.dataset.insert(key.to_string(), value.to_string());
        self.writes += 1;
    }

    fn set_inner_html(&mut self, markup: &str) {
        self.inner_html = markup.to_string();
        self.writes += 1;
    }
}
