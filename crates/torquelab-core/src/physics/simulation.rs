//! 0-60 acceleration simulation
//!
//! Forward time-stepped run through the gears: torque-curve lookup, traction
//! clamp, aerodynamic drag, and a power interruption during each shift.

use super::constants::*;
use crate::unit_conversion::{lbft_to_nm, lbs_to_kg};
use std::f64::consts::PI;

/// Inputs for one acceleration run
///
/// `hp` is the rated power for reference; drive force comes entirely from
/// the torque curve.
#[derive(Debug, Clone)]
pub struct AccelerationInput {
    /// Rated horsepower
    pub hp: f64,
    /// Peak torque (lb-ft)
    pub torque: f64,
    /// Weight (lb)
    pub weight: f64,
    /// Effective grip factor (traction limit scaler)
    pub grip: f64,
    /// Drag coefficient
    pub drag: f64,
    /// Gear ratios, first to top
    pub gear_ratios: Vec<f64>,
    /// Final drive ratio
    pub final_drive: f64,
    /// Shift time (s)
    pub shift_time: f64,
}

/// Engine torque at `rpm`: a fraction of peak below [`TORQUE_LOW_RPM`], flat
/// plateau to [`TORQUE_PLATEAU_END`], then linear falloff to zero over
/// [`TORQUE_FALLOFF_WINDOW`]
fn torque_at_rpm(rpm: f64, peak_torque: f64) -> f64 {
    if rpm < TORQUE_LOW_RPM {
        return peak_torque * TORQUE_LOW_FACTOR;
    }
    if rpm < TORQUE_PLATEAU_END {
        return peak_torque;
    }
    (peak_torque * (1.0 - (rpm - TORQUE_PLATEAU_END) / TORQUE_FALLOFF_WINDOW)).max(0.0)
}

/// Simulate a standing start to 60 mph and return the elapsed time in
/// seconds
///
/// The run ends when the target speed is reached or the wall clock hits
/// [`SIM_TIME_CAP`]; a car that never gets there reports the cap itself.
/// The result is always positive and never exceeds the cap.
pub fn simulate_acceleration(input: &AccelerationInput) -> f64 {
    let mass = lbs_to_kg(input.weight);
    let peak_torque_nm = lbft_to_nm(input.torque);
    let drag_area = 0.5 * AIR_DENSITY * input.drag * FRONTAL_AREA;

    let mut speed: f64 = 0.0;
    let mut time: f64 = 0.0;
    let mut current_gear = 0usize;
    let mut shift_timer: f64 = 0.0;

    while speed < TARGET_SPEED && time < SIM_TIME_CAP {
        time += SIM_TIME_STEP;

        if shift_timer > 0.0 {
            // Mid-shift: no drive force, coast against drag
            shift_timer -= SIM_TIME_STEP;
            let decel = drag_area * speed * speed / mass;
            speed = (speed - decel * SIM_TIME_STEP).max(0.0);
            continue;
        }

        let Some(&gear_ratio) = input.gear_ratios.get(current_gear) else {
            break;
        };
        let effective_ratio = gear_ratio * input.final_drive;

        let wheel_rpm = speed / (2.0 * PI * TIRE_RADIUS) * 60.0;
        let rpm = (wheel_rpm * effective_ratio).max(LAUNCH_RPM);

        if rpm > SHIFT_RPM && current_gear < input.gear_ratios.len() - 1 {
            current_gear += 1;
            shift_timer = input.shift_time;
            continue;
        }

        let engine_torque = torque_at_rpm(rpm, peak_torque_nm);
        let wheel_torque = engine_torque * effective_ratio * (1.0 - DRIVETRAIN_LOSS);
        let drive_force = wheel_torque / TIRE_RADIUS;
        let max_traction = input.grip * mass * GRAVITY;
        let limited_force = drive_force.min(max_traction);
        let drag_force = drag_area * speed * speed;
        let accel = (limited_force - drag_force) / mass;
        speed += accel * SIM_TIME_STEP;
    }

    time.min(SIM_TIME_CAP)
}
