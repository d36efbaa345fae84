//! Installed-parts configuration
//!
//! Maps every catalog category to the currently installed part id. `"stock"`
//! everywhere by default; categories missing from the map are treated as
//! stock by the calculator, so a partial configuration is never an error.

use crate::catalog::PartsCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name -> installed part id
///
/// Backed by an ordered map so iteration (and therefore every derived
/// computation) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarConfiguration {
    parts: BTreeMap<String, String>,
}

impl CarConfiguration {
    /// An empty configuration (everything implicitly stock)
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with `"stock"` installed in every catalog category
    pub fn stock_for(catalog: &PartsCatalog) -> Self {
        let mut parts = BTreeMap::new();
        for category in catalog.category_names() {
            parts.insert(category, "stock".to_string());
        }
        Self { parts }
    }

    /// The installed part id for a category, if any
    pub fn installed(&self, category: &str) -> Option<&str> {
        self.parts.get(category).map(String::as_str)
    }

    /// Install a part, replacing whatever the category held
    pub fn install(&mut self, category: &str, part_id: &str) {
        self.parts.insert(category.to_string(), part_id.to_string());
    }

    /// A copy of this configuration with one part swapped (preview builds)
    pub fn with_part(&self, category: &str, part_id: &str) -> Self {
        let mut next = self.clone();
        next.install(category, part_id);
        next
    }

    /// Iterate over (category, part id) pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }

    /// Number of configured categories
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no categories are configured
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
