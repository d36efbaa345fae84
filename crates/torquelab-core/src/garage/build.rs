//! Saved build files
//!
//! A build file captures one car's installed parts and tuning setup as JSON
//! on disk, with enough metadata to list and restore it later.

use super::GarageState;
use crate::carconfig::CarConfiguration;
use crate::tuning::TuningSettings;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A saved build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildFile {
    /// File format version
    pub version: String,

    /// Stable identifier for this build
    pub id: Uuid,

    /// Display name, e.g. "Raptor drag setup"
    pub name: String,

    /// Roster id of the car the build belongs to
    pub car_id: String,

    /// Creation timestamp (RFC 3339)
    pub created: String,

    /// Last modified timestamp (RFC 3339)
    pub modified: String,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Installed parts
    pub config: CarConfiguration,

    /// Tuning knobs
    pub tuning: TuningSettings,
}

impl BuildFile {
    /// Capture the current garage state as a named build
    pub fn from_state(name: impl Into<String>, state: &GarageState) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            version: "1.0".to_string(),
            id: Uuid::new_v4(),
            name: name.into(),
            car_id: state.car.id.clone(),
            created: now.clone(),
            modified: now,
            notes: None,
            config: state.config.clone(),
            tuning: state.tuning.clone(),
        }
    }

    /// Default directory for saved builds
    pub fn builds_dir() -> io::Result<PathBuf> {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find home directory")
            })?;
        Ok(base.join("TorqueLabBuilds"))
    }

    /// Write the build to disk, refreshing the modified timestamp
    pub fn save(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        self.modified = Utc::now().to_rfc3339();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)
    }

    /// Load a build from disk
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
