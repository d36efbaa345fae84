//! Part definition types
//!
//! A part either carries flat stat deltas (`stats`), a power multiplier that
//! scales off the engine baseline (`multiplier`), or for engine swaps a
//! replacement hp/torque baseline (`base_stats`).

use serde::{Deserialize, Serialize};

/// Upgrade tier of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartGrade {
    /// Factory part
    Stock,
    /// Mild street upgrade
    Street,
    /// Aggressive road/track upgrade
    Sport,
    /// Full competition part
    Race,
}

/// Flat stat deltas and factors carried by a part
///
/// hp/torque/weight/rpm_limit are additive offsets; grip/braking/handling are
/// multiplicative factors; shift_time replaces the current shift time
/// outright. Absent fields have no effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartStats {
    /// Horsepower delta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,

    /// Torque delta (lb-ft)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub torque: Option<f64>,

    /// Weight delta (lb, negative for lightweight parts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Grip factor (1.0 = neutral)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grip: Option<f64>,

    /// Braking factor (1.0 = neutral)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub braking: Option<f64>,

    /// Handling factor (1.0 = neutral)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling: Option<f64>,

    /// Redline delta (RPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpm_limit: Option<f64>,

    /// Shift time replacement (seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_time: Option<f64>,

    /// Rated downforce (kg) for display; adjustable aero is driven by the
    /// tuning settings instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downforce: Option<f64>,
}

/// Replacement engine baseline carried by engine-swap parts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineBaseStats {
    /// Rated horsepower of the swapped-in engine
    pub hp: f64,
    /// Rated torque of the swapped-in engine (lb-ft)
    pub torque: f64,
}

/// Display specs for engine swaps (spec sheet in the upgrade shop)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSpecs {
    /// Displacement label, e.g. "6.2L"
    pub displacement: String,
    /// Cylinder layout label, e.g. "V8"
    pub cylinders: String,
    /// Aspiration label, e.g. "NA", "Twin Turbo"
    pub aspiration: String,
    /// Engine weight label, e.g. "200 LBS"
    pub weight: String,
}

/// A single purchasable part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartDefinition {
    /// Display name
    pub name: String,

    /// Shop description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price in credits
    pub price: u32,

    /// Upgrade tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<PartGrade>,

    /// Power multiplier applied to the engine baseline (0 = none).
    /// Gains diminish as the baseline grows, see `physics::constants`.
    pub multiplier: f64,

    /// Flat stat deltas
    pub stats: PartStats,

    /// Replacement hp/torque baseline (engine swaps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_stats: Option<EngineBaseStats>,

    /// Spec-sheet details (engine swaps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs: Option<EngineSpecs>,

    /// Whether installing this part unlocks the matching tuning section
    pub allows_tuning: bool,
}

impl PartDefinition {
    /// Create a named part with a price and no effects
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }
}
