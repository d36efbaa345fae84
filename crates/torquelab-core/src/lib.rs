//! # TorqueLab Core Library
//!
//! Core functionality for the TorqueLab vehicle tuning visualizer.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - The parts catalog (engine, drivetrain, platform and aero upgrades)
//! - The vehicle performance model (hp/torque/weight, 0-60, top speed,
//!   braking, lateral grip, Performance Index)
//! - Dyno and gearing curve generation for the telemetry views
//! - Garage state transitions and saved-build persistence
//!
//! ## Example
//!
//! ```rust,ignore
//! use torquelab_core::prelude::*;
//!
//! let garage = Garage::with_builtin_data();
//! let state = garage.initial_state()?;
//!
//! // Bolt on a turbo and read the new stat sheet
//! let state = garage.apply(&state, GarageAction::InstallPart {
//!     category: "turbo".into(),
//!     part_id: "race_turbo".into(),
//! });
//! println!("0-60: {}s", state.performance.acceleration_0_60);
//! ```

pub mod carconfig;
pub mod cars;
pub mod catalog;
pub mod garage;
pub mod physics;
pub mod tuning;
pub mod unit_conversion;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::carconfig::CarConfiguration;
    pub use crate::cars::{BaseVehicleStats, Car, CarCatalog};
    pub use crate::catalog::{PartDefinition, PartStats, PartsCatalog};
    pub use crate::garage::{BuildFile, Garage, GarageAction, GarageState};
    pub use crate::physics::{
        generate_dyno_data, generate_gearing_graph_data, simulate_acceleration, AccelerationInput,
        DynoPoint, GearingPoint, PerformanceCalculator, PerformanceStats, PiClass,
    };
    pub use crate::tuning::TuningSettings;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
