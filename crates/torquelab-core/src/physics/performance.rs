//! Performance calculator
//!
//! Folds the installed parts and tuning settings into the car's base stats
//! and derives the full stat sheet: power, weight, top speed, 0-60, braking,
//! lateral grip and the Performance Index.
//!
//! The calculator is a total function: unknown categories and part ids are
//! skipped, missing optional fields fall back to neutral values, and no
//! well-formed catalog data can make it panic.

use super::constants::*;
use super::simulation::{simulate_acceleration, AccelerationInput};
use crate::carconfig::CarConfiguration;
use crate::cars::BaseVehicleStats;
use crate::catalog::PartsCatalog;
use crate::tuning::TuningSettings;
use crate::unit_conversion::{hp_to_watts, ms_to_mph};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Performance Index class band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PiClass {
    /// 999
    X,
    /// 900-998
    S2,
    /// 800-899
    S1,
    /// 700-799
    A,
    /// 600-699
    B,
    /// 500-599
    C,
    /// below 500
    D,
}

impl PiClass {
    /// Class band for a PI value
    pub fn classify(pi: u32) -> Self {
        match pi {
            999.. => Self::X,
            900..=998 => Self::S2,
            800..=899 => Self::S1,
            700..=799 => Self::A,
            600..=699 => Self::B,
            500..=599 => Self::C,
            _ => Self::D,
        }
    }
}

impl fmt::Display for PiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::X => "X",
            Self::S2 => "S2",
            Self::S1 => "S1",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        write!(f, "{label}")
    }
}

/// Derived stat sheet for one configuration
///
/// Recomputed fresh on every change; plain value with no identity beyond
/// its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Horsepower
    pub hp: i32,
    /// Torque (lb-ft)
    pub torque: i32,
    /// Weight (lb)
    pub weight: i32,
    /// Top speed (mph), the lower of the power and gearing limits
    pub top_speed: i32,
    /// 0-60 mph time (s)
    pub acceleration_0_60: f64,
    /// 60-0 mph braking distance (ft)
    pub braking_distance_60_0: f64,
    /// Lateral grip (g)
    pub lateral_g: f64,
    /// Performance Index, clamped to [100, 999]
    pub pi: u32,
    /// Class band for `pi`
    pub pi_class: PiClass,
    /// Redline (RPM) after parts, for the gearing view
    pub rpm_limit: u32,
}

/// Multiplier gain with diminishing returns on the engine baseline
fn part_gain(baseline_hp: f64, category: &str, multiplier: f64) -> f64 {
    let mut diminishing = 1.0;
    for &(floor, factor) in GAIN_TIERS.iter() {
        if baseline_hp > floor {
            diminishing = factor;
            break;
        }
    }
    let category_scale = if category == "ignition" {
        IGNITION_GAIN_SCALE
    } else {
        1.0
    };
    baseline_hp * multiplier * diminishing * category_scale * GAIN_SCALE
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Computes [`PerformanceStats`] against a parts catalog
pub struct PerformanceCalculator<'a> {
    catalog: &'a PartsCatalog,
}

impl<'a> PerformanceCalculator<'a> {
    /// Create a calculator over the given catalog
    pub fn new(catalog: &'a PartsCatalog) -> Self {
        Self { catalog }
    }

    /// Derive the full stat sheet for one configuration
    ///
    /// Deterministic and side-effect free; identical inputs produce
    /// identical output.
    pub fn calculate(
        &self,
        base: &BaseVehicleStats,
        config: &CarConfiguration,
        tuning: &TuningSettings,
        number_of_gears: usize,
    ) -> PerformanceStats {
        let mut hp = base.hp;
        let mut torque = base.torque;
        let mut weight = base.weight;
        let mut grip_multiplier = 1.0;
        let mut braking_multiplier = 1.0;
        let mut handling_multiplier = 1.0;
        let mut rpm_limit = DEFAULT_RPM_LIMIT;
        let mut shift_time = DEFAULT_SHIFT_TIME;

        // An engine swap replaces the hp/torque baseline outright; its
        // weight and redline deltas flow through the normal part loop below
        if let Some(swap_id) = config.installed("engine_swap") {
            if swap_id != "stock" {
                if let Some(swap) = self
                    .catalog
                    .part("engine_swap", swap_id)
                    .and_then(|p| p.base_stats)
                {
                    hp = swap.hp;
                    torque = swap.torque;
                }
            }
        }

        // Baseline for multiplier gains, captured once so stacked
        // multiplier parts scale off the same engine
        let engine_base_hp = hp;
        let engine_base_torque = torque;

        for (category, part_id) in config.iter() {
            let Some(part) = self.catalog.part(category, part_id) else {
                continue;
            };

            if part.multiplier > 0.0 {
                let torque_factor = if category == "turbo" {
                    TURBO_TORQUE_FACTOR
                } else {
                    BREATHING_TORQUE_FACTOR
                };
                hp += part_gain(engine_base_hp, category, part.multiplier);
                torque += part_gain(
                    engine_base_torque,
                    category,
                    part.multiplier * torque_factor,
                );
            }

            let stats = &part.stats;
            if let Some(v) = stats.hp {
                hp += v;
            }
            if let Some(v) = stats.torque {
                torque += v;
            }
            if let Some(v) = stats.weight {
                weight += v;
            }
            if let Some(v) = stats.grip {
                grip_multiplier *= v;
            }
            if let Some(v) = stats.braking {
                braking_multiplier *= v;
            }
            if let Some(v) = stats.handling {
                handling_multiplier *= v;
            }
            if let Some(v) = stats.rpm_limit {
                rpm_limit += v;
            }
            if let Some(v) = stats.shift_time {
                shift_time = v;
            }
        }

        // Tire pressure: deviation from ideal costs grip, front and rear
        // averaged; applies regardless of installed parts
        let pressure_factor_f =
            1.0 - (tuning.tire_pressure_f - IDEAL_TIRE_PRESSURE).abs() * PRESSURE_GRIP_LOSS;
        let pressure_factor_r =
            1.0 - (tuning.tire_pressure_r - IDEAL_TIRE_PRESSURE).abs() * PRESSURE_GRIP_LOSS;
        grip_multiplier *= (pressure_factor_f + pressure_factor_r) / 2.0;

        // Downforce helps cornering but costs top speed; inert until an
        // adjustable aero part is installed
        let has_adjustable_aero = config
            .installed("aero")
            .map(|id| self.catalog.allows_tuning("aero", id))
            .unwrap_or(false);
        let total_downforce = if has_adjustable_aero {
            tuning.downforce_f + tuning.downforce_r
        } else {
            0.0
        };
        let downforce_drag_penalty = total_downforce * DOWNFORCE_DRAG_PENALTY;
        handling_multiplier += total_downforce * DOWNFORCE_HANDLING_GAIN;

        // Alignment, springs and ride height; inert on stock suspension
        let has_tunable_suspension = config
            .installed("suspension")
            .map(|id| self.catalog.allows_tuning("suspension", id))
            .unwrap_or(false);

        let camber_penalty = if has_tunable_suspension {
            (tuning.camber_f - IDEAL_CAMBER).abs() * CAMBER_PENALTY
                + (tuning.camber_r - IDEAL_CAMBER).abs() * CAMBER_PENALTY
        } else {
            0.0
        };
        handling_multiplier -= camber_penalty;

        let toe_scrub = if has_tunable_suspension {
            (tuning.toe_f.abs() + tuning.toe_r.abs()) * TOE_SCRUB_PENALTY
        } else {
            0.0
        };

        let avg_stiffness = (tuning.springs_f + tuning.springs_r) / 2.0;
        if has_tunable_suspension {
            handling_multiplier += (avg_stiffness - BASELINE_SPRING_RATE) * SPRING_STIFFNESS_BONUS;
        }

        let avg_height = (tuning.ride_height_f + tuning.ride_height_r) / 2.0;
        if has_tunable_suspension {
            handling_multiplier -= (avg_height - BASELINE_RIDE_HEIGHT) * RIDE_HEIGHT_PENALTY;
        }

        // Differential accel lock buys corner-exit traction; inert on a
        // stock differential
        let has_tunable_diff = config
            .installed("differential")
            .map(|id| self.catalog.allows_tuning("differential", id))
            .unwrap_or(false);
        let traction_bonus = if has_tunable_diff {
            (tuning.diff_accel_f + tuning.diff_accel_r) / 2.0 * DIFF_TRACTION_BONUS
        } else {
            0.0
        };

        let effective_grip = grip_multiplier + traction_bonus;
        let current_drag = BASE_DRAG + downforce_drag_penalty + toe_scrub;

        let gear_ratios = tuning.gear_ratios(number_of_gears);

        let accel_time = simulate_acceleration(&AccelerationInput {
            hp,
            torque,
            weight,
            grip: effective_grip,
            drag: current_drag,
            gear_ratios: gear_ratios.clone(),
            final_drive: tuning.final_drive,
            shift_time,
        });

        // Top speed: power limit from P = F_drag * v, gearing limit from
        // redline through the top gear; the car gets the lower of the two
        let watts = hp_to_watts(hp) * POWER_EFFICIENCY;
        let power_limit_ms = (watts / (0.5 * AIR_DENSITY * current_drag * FRONTAL_AREA)).cbrt();
        let power_limit_mph = ms_to_mph(power_limit_ms);

        let top_gear_ratio =
            gear_ratios.last().copied().unwrap_or(FALLBACK_TOP_GEAR) * tuning.final_drive;
        let gear_limit_ms = rpm_limit * 2.0 * PI * TIRE_RADIUS / (60.0 * top_gear_ratio);
        let gear_limit_mph = ms_to_mph(gear_limit_ms);

        let top_speed = power_limit_mph.min(gear_limit_mph);

        // Braking: pressure past 100% just locks the tires, no extra gain
        let brake_pressure_factor = (tuning.brake_pressure / 100.0).min(1.0);
        let braking_performance = grip_multiplier * braking_multiplier * brake_pressure_factor;
        let weight_factor = weight / REFERENCE_WEIGHT;
        let braking_dist = base.braking_distance_60_0 * weight_factor / braking_performance;

        let lateral_g =
            LATERAL_G_BASE * effective_grip * handling_multiplier * (REFERENCE_WEIGHT / weight);

        // PI: weighted blend of the relative gains over the factory car,
        // damped toward 1.0, then applied to the baseline index
        let hp_change = hp / base.hp;
        let weight_change = base.weight / weight;
        let grip_change = grip_multiplier;
        let base_pi = if base.pi == 0 {
            PI_FALLBACK
        } else {
            base.pi as f64
        };
        // Deviation form: a build with no net change lands exactly on the
        // factory index
        let (w_hp, w_weight, w_grip) = PI_WEIGHTS;
        let raw_multiplier = 1.0
            + (hp_change - 1.0) * w_hp
            + (weight_change - 1.0) * w_weight
            + (grip_change - 1.0) * w_grip;
        let adjusted_multiplier = 1.0 + (raw_multiplier - 1.0) * PI_DAMPING;
        let pi_value = (base_pi * adjusted_multiplier).floor();
        let pi = if pi_value.is_nan() {
            PI_MIN
        } else {
            pi_value.clamp(PI_MIN as f64, PI_MAX as f64) as u32
        };

        PerformanceStats {
            hp: hp.round() as i32,
            torque: torque.round() as i32,
            weight: weight.round() as i32,
            top_speed: top_speed.round() as i32,
            acceleration_0_60: round_to(accel_time, 3),
            braking_distance_60_0: round_to(braking_dist, 1),
            lateral_g: round_to(lateral_g, 2),
            pi,
            pi_class: PiClass::classify(pi),
            rpm_limit: rpm_limit.max(0.0).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_gain_tiers() {
        // Full effect at or below 500 hp, tapering above
        assert_eq!(part_gain(500.0, "exhaust", 0.1), 500.0 * 0.1 * 0.4);
        assert_eq!(part_gain(600.0, "exhaust", 0.1), 600.0 * 0.1 * 0.7 * 0.4);
        assert_eq!(part_gain(800.0, "exhaust", 0.1), 800.0 * 0.1 * 0.55 * 0.4);
        assert_eq!(part_gain(1000.0, "exhaust", 0.1), 1000.0 * 0.1 * 0.4 * 0.4);
    }

    #[test]
    fn test_ignition_gains_are_software_limited() {
        let normal = part_gain(400.0, "exhaust", 0.1);
        let ignition = part_gain(400.0, "ignition", 0.1);
        assert!((ignition - normal * 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_pi_class_bands() {
        assert_eq!(PiClass::classify(999), PiClass::X);
        assert_eq!(PiClass::classify(950), PiClass::S2);
        assert_eq!(PiClass::classify(850), PiClass::S1);
        assert_eq!(PiClass::classify(700), PiClass::A);
        assert_eq!(PiClass::classify(650), PiClass::B);
        assert_eq!(PiClass::classify(550), PiClass::C);
        assert_eq!(PiClass::classify(300), PiClass::D);
    }
}
