//! Dyno curve generation
//!
//! Produces the RPM-indexed power/torque sweep shown in the upgrade shop.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// One sample on the dyno chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynoPoint {
    /// Engine speed (RPM)
    pub rpm: u32,
    /// Horsepower at this RPM
    pub hp: u32,
    /// Torque at this RPM (lb-ft)
    pub torque: u32,
}

/// Generate the dyno sweep from 0 to `rpm_limit` in fixed steps
///
/// The torque curve holds a fraction of peak below [`TORQUE_LOW_RPM`], a
/// flat plateau up to 1000 RPM short of the power peak, then a linear
/// falloff. A redline past [`RACE_CAM_REDLINE`] moves the power peak up,
/// modeling race cams. Power follows `hp = torque * rpm / 5252`.
///
/// `_peak_hp` mirrors the stat sheet passed by callers; the sweep itself is
/// derived from the torque plateau.
pub fn generate_dyno_data(_peak_hp: f64, peak_torque: f64, rpm_limit: u32) -> Vec<DynoPoint> {
    let peak_power_rpm = if rpm_limit > RACE_CAM_REDLINE {
        PEAK_POWER_RPM_RACE
    } else {
        PEAK_POWER_RPM_STOCK
    };
    let plateau_end = peak_power_rpm - 1000.0;

    let mut data = Vec::with_capacity((rpm_limit / DYNO_RPM_STEP + 1) as usize);
    let mut rpm = 0u32;
    while rpm <= rpm_limit {
        let r = rpm as f64;
        let torque = if r < TORQUE_LOW_RPM {
            peak_torque * TORQUE_LOW_FACTOR
        } else if r < plateau_end {
            peak_torque
        } else {
            peak_torque * (1.0 - (r - plateau_end) / TORQUE_FALLOFF_WINDOW)
        };
        let torque = torque.max(0.0);
        let hp = torque * r / HP_RPM_CONST;

        data.push(DynoPoint {
            rpm,
            hp: hp.round() as u32,
            torque: torque.round() as u32,
        });
        rpm += DYNO_RPM_STEP;
    }
    data
}
