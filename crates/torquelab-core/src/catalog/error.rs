//! Error types for catalog loading

use thiserror::Error;

/// Errors that can occur while loading a parts or car catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("category '{0}' does not define a 'stock' part")]
    MissingStockPart(String),

    #[error("car '{0}' declares a transmission with no gears")]
    EmptyTransmission(String),
}
