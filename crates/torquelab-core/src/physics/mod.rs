//! Vehicle Performance Model
//!
//! The computational core: pure, synchronous, deterministic functions with
//! no I/O and no shared state. Safe to call on every slider tick.
//!
//! - [`PerformanceCalculator`]: parts + tuning -> full stat sheet
//! - [`simulate_acceleration`]: time-stepped 0-60 run
//! - [`generate_dyno_data`] / [`generate_gearing_graph_data`]: chart data

pub mod constants;

mod dyno;
mod gearing;
mod performance;
mod simulation;

pub use dyno::{generate_dyno_data, DynoPoint};
pub use gearing::{generate_gearing_graph_data, GearingPoint};
pub use performance::{PerformanceCalculator, PerformanceStats, PiClass};
pub use simulation::{simulate_acceleration, AccelerationInput};
