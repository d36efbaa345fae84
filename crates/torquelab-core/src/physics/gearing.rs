//! Gearing curve generation
//!
//! Produces the speed-vs-RPM stair-step for the gearing tuning view: each
//! gear is a segment from the RPM the engine lands on after an upshift at
//! redline to the redline itself, with vertical shift lines between gears.

use super::constants::*;
use crate::tuning::TuningSettings;
use crate::unit_conversion::ms_to_mph;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One point on the gearing chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearingPoint {
    /// Road speed (mph)
    pub speed: f64,
    /// Engine speed (RPM)
    pub rpm: f64,
    /// Gear number (1-based)
    pub gear: u32,
}

/// Generate the stair-step gearing chart
///
/// Two points per gear: where the gear is entered (the origin for 1st; for
/// later gears the post-shift RPM drop at the speed carried over from the
/// previous gear, which plots as a vertical shift line) and where it runs
/// out at `rpm_limit`.
pub fn generate_gearing_graph_data(
    tuning: &TuningSettings,
    rpm_limit: u32,
    number_of_gears: usize,
) -> Vec<GearingPoint> {
    let gears = tuning.gear_ratios(number_of_gears);
    let redline = rpm_limit as f64;

    let mut data: Vec<GearingPoint> = Vec::with_capacity(gears.len() * 2);
    for (index, &gear_ratio) in gears.iter().enumerate() {
        let gear = index as u32 + 1;
        let effective_ratio = gear_ratio * tuning.final_drive;
        let speed_at_rpm = |rpm: f64| {
            let wheel_rpm = rpm / effective_ratio;
            ms_to_mph(wheel_rpm / 60.0 * 2.0 * PI * TIRE_RADIUS)
        };

        if index == 0 {
            data.push(GearingPoint { speed: 0.0, rpm: 0.0, gear });
        } else {
            // RPM the engine drops to after shifting up at redline
            let entry_rpm = redline * (gear_ratio / gears[index - 1]);
            let carried_speed = data.last().map(|p| p.speed).unwrap_or(0.0);
            data.push(GearingPoint { speed: carried_speed, rpm: entry_rpm, gear });
        }

        data.push(GearingPoint { speed: speed_at_rpm(redline), rpm: redline, gear });
    }
    data
}
