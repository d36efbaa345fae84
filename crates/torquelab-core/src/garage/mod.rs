//! Garage state
//!
//! Holds the static catalogs and drives the current build as an explicit
//! state machine: every action produces a fresh [`GarageState`] with the
//! performance stats (and dyno, when power can change) recomputed. States
//! are plain values; nothing here is shared or mutated in place.

mod build;

pub use build::BuildFile;

use crate::carconfig::CarConfiguration;
use crate::cars::{Car, CarCatalog};
use crate::catalog::PartsCatalog;
use crate::physics::{
    generate_dyno_data, DynoPoint, PerformanceCalculator, PerformanceStats,
};
use crate::tuning::TuningSettings;
use serde::{Deserialize, Serialize};

/// One snapshot of the garage: the selected car, its build and the derived
/// stat sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageState {
    /// Selected car
    pub car: Car,
    /// Installed parts
    pub config: CarConfiguration,
    /// Tuning knobs
    pub tuning: TuningSettings,
    /// Derived stat sheet for the build
    pub performance: PerformanceStats,
    /// Dyno sweep for the build
    pub dyno: Vec<DynoPoint>,
}

/// A user action against the garage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GarageAction {
    /// Pick a car from the roster, starting a fresh stock build
    SelectCar {
        /// Roster id of the car
        car_id: String,
    },
    /// Install a part into a category
    InstallPart {
        /// Catalog category, e.g. `"turbo"`
        category: String,
        /// Part id within the category
        part_id: String,
    },
    /// Move one tuning slider
    SetTuning {
        /// Slider key, e.g. `"tire_pressure_f"`
        knob: String,
        /// New value
        value: f64,
    },
    /// Return every tuning knob to the factory baseline
    ResetTuning,
}

/// The garage: static catalogs plus the state-transition logic
#[derive(Debug, Clone)]
pub struct Garage {
    parts: PartsCatalog,
    cars: CarCatalog,
}

impl Garage {
    /// Create a garage over the given catalogs
    pub fn new(parts: PartsCatalog, cars: CarCatalog) -> Self {
        Self { parts, cars }
    }

    /// A garage stocked with the built-in parts database and roster
    pub fn with_builtin_data() -> Self {
        Self::new(PartsCatalog::builtin(), CarCatalog::builtin())
    }

    /// The parts catalog
    pub fn parts(&self) -> &PartsCatalog {
        &self.parts
    }

    /// The car roster
    pub fn cars(&self) -> &CarCatalog {
        &self.cars
    }

    /// Fresh stock state for the default car, if the roster has one
    pub fn initial_state(&self) -> Option<GarageState> {
        let car = self.cars.default_car()?.clone();
        Some(self.stock_state(car))
    }

    /// Fresh stock state for a specific car
    pub fn state_for(&self, car_id: &str) -> Option<GarageState> {
        let car = self.cars.get(car_id)?.clone();
        Some(self.stock_state(car))
    }

    fn stock_state(&self, car: Car) -> GarageState {
        let config = CarConfiguration::stock_for(&self.parts);
        let tuning = TuningSettings::default();
        let (performance, dyno) = self.recompute(&car, &config, &tuning);
        GarageState { car, config, tuning, performance, dyno }
    }

    /// Apply one action and return the next state
    ///
    /// Unknown car ids, parts and knobs leave the state unchanged apart
    /// from a warning; the garage is as permissive as the calculator.
    pub fn apply(&self, state: &GarageState, action: GarageAction) -> GarageState {
        match action {
            GarageAction::SelectCar { car_id } => match self.cars.get(&car_id) {
                Some(car) => self.stock_state(car.clone()),
                None => {
                    tracing::warn!("unknown car id: {car_id}");
                    state.clone()
                }
            },
            GarageAction::InstallPart { category, part_id } => {
                if self.parts.part(&category, &part_id).is_none() {
                    tracing::warn!("unknown part: {category}/{part_id}");
                }
                let config = state.config.with_part(&category, &part_id);
                let (performance, dyno) = self.recompute(&state.car, &config, &state.tuning);
                GarageState {
                    car: state.car.clone(),
                    config,
                    tuning: state.tuning.clone(),
                    performance,
                    dyno,
                }
            }
            GarageAction::SetTuning { knob, value } => {
                let mut tuning = state.tuning.clone();
                if !tuning.set(&knob, value) {
                    return state.clone();
                }
                self.retune(state, tuning)
            }
            GarageAction::ResetTuning => self.retune(state, TuningSettings::default()),
        }
    }

    /// Stat sheet for a part the user is hovering, without changing state
    pub fn preview_part(
        &self,
        state: &GarageState,
        category: &str,
        part_id: &str,
    ) -> PerformanceStats {
        let config = state.config.with_part(category, part_id);
        let calculator = PerformanceCalculator::new(&self.parts);
        calculator.calculate(
            &state.car.base_stats,
            &config,
            &state.tuning,
            state.car.transmission.gears,
        )
    }

    /// Total price of every installed part
    pub fn build_cost(&self, state: &GarageState) -> u32 {
        state
            .config
            .iter()
            .filter_map(|(category, part_id)| self.parts.part(category, part_id))
            .map(|part| part.price)
            .sum()
    }

    /// Reconstruct a state from a saved build
    ///
    /// Returns `None` when the build references a car no longer in the
    /// roster.
    pub fn restore(&self, build: &BuildFile) -> Option<GarageState> {
        let car = self.cars.get(&build.car_id)?.clone();
        let (performance, dyno) = self.recompute(&car, &build.config, &build.tuning);
        Some(GarageState {
            car,
            config: build.config.clone(),
            tuning: build.tuning.clone(),
            performance,
            dyno,
        })
    }

    /// Tuning changes cannot move the dyno inputs, so only the stat sheet
    /// is refreshed
    fn retune(&self, state: &GarageState, tuning: TuningSettings) -> GarageState {
        let calculator = PerformanceCalculator::new(&self.parts);
        let performance = calculator.calculate(
            &state.car.base_stats,
            &state.config,
            &tuning,
            state.car.transmission.gears,
        );
        GarageState {
            car: state.car.clone(),
            config: state.config.clone(),
            tuning,
            performance,
            dyno: state.dyno.clone(),
        }
    }

    fn recompute(
        &self,
        car: &Car,
        config: &CarConfiguration,
        tuning: &TuningSettings,
    ) -> (PerformanceStats, Vec<DynoPoint>) {
        let calculator = PerformanceCalculator::new(&self.parts);
        let performance =
            calculator.calculate(&car.base_stats, config, tuning, car.transmission.gears);
        let dyno = generate_dyno_data(
            performance.hp as f64,
            performance.torque as f64,
            performance.rpm_limit,
        );
        (performance, dyno)
    }
}
