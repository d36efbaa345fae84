//! Parts Catalog Module
//!
//! The static parts database consumed by the performance model: a mapping
//! from category name (`engine_swap`, `turbo`, `tires`, ...) to part-id to
//! [`PartDefinition`]. Loadable from JSON; a built-in database covering the
//! full upgrade shop ships with the library.

mod aero;
mod drivetrain;
mod engine;
mod error;
mod platform;
mod types;

pub use error::CatalogError;
pub use types::{EngineBaseStats, EngineSpecs, PartDefinition, PartGrade, PartStats};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Map of part-id to part within one category
pub type CategoryParts = HashMap<String, PartDefinition>;

/// The parts database: category name -> part-id -> part
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartsCatalog {
    categories: HashMap<String, CategoryParts>,
}

impl PartsCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: the full upgrade shop
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        engine::register(&mut catalog);
        drivetrain::register(&mut catalog);
        platform::register(&mut catalog);
        aero::register(&mut catalog);
        catalog
    }

    /// Parse a catalog from a JSON string
    ///
    /// Every category must define a `stock` part; the calculator treats
    /// `stock` as the universal no-op fallback.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        for (name, parts) in &catalog.categories {
            if !parts.contains_key("stock") {
                return Err(CatalogError::MissingStockPart(name.clone()));
            }
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Add a part to a category, creating the category if needed
    pub fn insert(&mut self, category: &str, part_id: &str, part: PartDefinition) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(part_id.to_string(), part);
    }

    /// All parts in a category
    pub fn category(&self, category: &str) -> Option<&CategoryParts> {
        self.categories.get(category)
    }

    /// Look up one part
    pub fn part(&self, category: &str, part_id: &str) -> Option<&PartDefinition> {
        self.categories.get(category)?.get(part_id)
    }

    /// Whether the installed part unlocks the matching tuning section
    pub fn allows_tuning(&self, category: &str, part_id: &str) -> bool {
        self.part(category, part_id)
            .map(|p| p.allows_tuning)
            .unwrap_or(false)
    }

    /// Category names, sorted for deterministic iteration
    pub fn category_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.categories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
