//! Tuning settings
//!
//! The flat set of numeric tuning knobs the garage sliders drive. Every knob
//! is a concrete field, so the performance formulas always see a fully
//! populated, finite record; partial JSON deserializes against the factory
//! baseline below.

use serde::{Deserialize, Serialize};

/// Highest gear count any transmission supports
pub const MAX_GEARS: usize = 10;

/// All tuning knobs for one car
///
/// Defaults are the factory baseline setup. Pressures in psi, camber/toe in
/// degrees, springs in lb/in, ride height in inches, downforce in kg,
/// brake and differential settings in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningSettings {
    // Tires
    /// Front tire pressure (psi)
    pub tire_pressure_f: f64,
    /// Rear tire pressure (psi)
    pub tire_pressure_r: f64,

    // Gearing (up to 10 gears supported)
    /// Final drive ratio
    pub final_drive: f64,
    /// 1st gear ratio
    pub gear_1: f64,
    /// 2nd gear ratio
    pub gear_2: f64,
    /// 3rd gear ratio
    pub gear_3: f64,
    /// 4th gear ratio
    pub gear_4: f64,
    /// 5th gear ratio
    pub gear_5: f64,
    /// 6th gear ratio
    pub gear_6: f64,
    /// 7th gear ratio
    pub gear_7: f64,
    /// 8th gear ratio
    pub gear_8: f64,
    /// 9th gear ratio
    pub gear_9: f64,
    /// 10th gear ratio
    pub gear_10: f64,

    // Alignment
    /// Front camber (degrees)
    pub camber_f: f64,
    /// Rear camber (degrees)
    pub camber_r: f64,
    /// Front toe (degrees)
    pub toe_f: f64,
    /// Rear toe (degrees)
    pub toe_r: f64,
    /// Front caster (degrees)
    pub caster_f: f64,

    // ARBs
    /// Front anti-roll bar stiffness
    pub arb_f: f64,
    /// Rear anti-roll bar stiffness
    pub arb_r: f64,

    // Springs
    /// Front spring rate (lb/in)
    pub springs_f: f64,
    /// Rear spring rate (lb/in)
    pub springs_r: f64,
    /// Front ride height (in)
    pub ride_height_f: f64,
    /// Rear ride height (in)
    pub ride_height_r: f64,

    // Damping
    /// Front rebound stiffness
    pub rebound_f: f64,
    /// Rear rebound stiffness
    pub rebound_r: f64,
    /// Front bump stiffness
    pub bump_f: f64,
    /// Rear bump stiffness
    pub bump_r: f64,

    // Aero
    /// Front downforce (kg)
    pub downforce_f: f64,
    /// Rear downforce (kg)
    pub downforce_r: f64,

    // Brakes
    /// Brake balance (% to front)
    pub brake_balance: f64,
    /// Brake pressure (%)
    pub brake_pressure: f64,

    // Differential
    /// Front acceleration lock (%)
    pub diff_accel_f: f64,
    /// Front deceleration lock (%)
    pub diff_decel_f: f64,
    /// Rear acceleration lock (%)
    pub diff_accel_r: f64,
    /// Rear deceleration lock (%)
    pub diff_decel_r: f64,
    /// Center torque split (% rear)
    pub diff_center: f64,
}

impl Default for TuningSettings {
    fn default() -> Self {
        Self {
            tire_pressure_f: 30.0,
            tire_pressure_r: 30.0,

            final_drive: 3.55,
            gear_1: 3.2,
            gear_2: 2.15,
            gear_3: 1.55,
            gear_4: 1.2,
            gear_5: 0.95,
            gear_6: 0.8,
            gear_7: 0.68,
            gear_8: 0.58,
            gear_9: 0.5,
            gear_10: 0.44,

            camber_f: -1.2,
            camber_r: -1.0,
            toe_f: 0.1,
            toe_r: -0.1,
            caster_f: 6.0,

            arb_f: 25.0,
            arb_r: 20.0,

            springs_f: 650.0,
            springs_r: 600.0,
            ride_height_f: 12.0,
            ride_height_r: 12.0,

            rebound_f: 9.5,
            rebound_r: 9.0,
            bump_f: 6.0,
            bump_r: 5.5,

            downforce_f: 120.0,
            downforce_r: 180.0,

            brake_balance: 52.0,
            brake_pressure: 100.0,

            diff_accel_f: 40.0,
            diff_decel_f: 10.0,
            diff_accel_r: 65.0,
            diff_decel_r: 25.0,
            diff_center: 65.0,
        }
    }
}

impl TuningSettings {
    /// Ratio for gear `n` (1-based), if within [`MAX_GEARS`]
    pub fn gear(&self, n: usize) -> Option<f64> {
        match n {
            1 => Some(self.gear_1),
            2 => Some(self.gear_2),
            3 => Some(self.gear_3),
            4 => Some(self.gear_4),
            5 => Some(self.gear_5),
            6 => Some(self.gear_6),
            7 => Some(self.gear_7),
            8 => Some(self.gear_8),
            9 => Some(self.gear_9),
            10 => Some(self.gear_10),
            _ => None,
        }
    }

    /// Ordered gear list for a transmission with `count` gears
    ///
    /// Entries that are not strictly positive are skipped; they cannot turn
    /// a wheel and the simulator would divide by them.
    pub fn gear_ratios(&self, count: usize) -> Vec<f64> {
        (1..=count.min(MAX_GEARS))
            .filter_map(|n| self.gear(n))
            .filter(|g| *g > 0.0)
            .collect()
    }

    /// Set a knob by its slider key (e.g. `"tire_pressure_f"`, `"gear_3"`)
    ///
    /// Returns false for unknown keys; the garage treats those the same way
    /// the calculator treats unknown parts.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "tire_pressure_f" => &mut self.tire_pressure_f,
            "tire_pressure_r" => &mut self.tire_pressure_r,
            "final_drive" => &mut self.final_drive,
            "gear_1" => &mut self.gear_1,
            "gear_2" => &mut self.gear_2,
            "gear_3" => &mut self.gear_3,
            "gear_4" => &mut self.gear_4,
            "gear_5" => &mut self.gear_5,
            "gear_6" => &mut self.gear_6,
            "gear_7" => &mut self.gear_7,
            "gear_8" => &mut self.gear_8,
            "gear_9" => &mut self.gear_9,
            "gear_10" => &mut self.gear_10,
            "camber_f" => &mut self.camber_f,
            "camber_r" => &mut self.camber_r,
            "toe_f" => &mut self.toe_f,
            "toe_r" => &mut self.toe_r,
            "caster_f" => &mut self.caster_f,
            "arb_f" => &mut self.arb_f,
            "arb_r" => &mut self.arb_r,
            "springs_f" => &mut self.springs_f,
            "springs_r" => &mut self.springs_r,
            "ride_height_f" => &mut self.ride_height_f,
            "ride_height_r" => &mut self.ride_height_r,
            "rebound_f" => &mut self.rebound_f,
            "rebound_r" => &mut self.rebound_r,
            "bump_f" => &mut self.bump_f,
            "bump_r" => &mut self.bump_r,
            "downforce_f" => &mut self.downforce_f,
            "downforce_r" => &mut self.downforce_r,
            "brake_balance" => &mut self.brake_balance,
            "brake_pressure" => &mut self.brake_pressure,
            "diff_accel_f" => &mut self.diff_accel_f,
            "diff_decel_f" => &mut self.diff_decel_f,
            "diff_accel_r" => &mut self.diff_accel_r,
            "diff_decel_r" => &mut self.diff_decel_r,
            "diff_center" => &mut self.diff_center,
            _ => {
                tracing::warn!("unknown tuning knob: {key}");
                return false;
            }
        };
        *slot = value;
        true
    }
}
