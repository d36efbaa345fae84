//! Car catalog
//!
//! The garage roster: one record per car with its factory stat sheet, class
//! badge and 3D model path. Loadable from JSON; a built-in roster spanning
//! the PI classes ships with the library.

use crate::catalog::CatalogError;
use crate::physics::PiClass;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Factory stat sheet for a car (never mutated; the performance model
/// derives everything else from it)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseVehicleStats {
    /// Rated horsepower
    pub hp: f64,
    /// Rated torque (lb-ft)
    pub torque: f64,
    /// Curb weight (lb)
    pub weight: f64,
    /// Baseline Performance Index (100-999)
    pub pi: u32,
    /// Factory 0-60 mph time (s)
    pub acceleration_0_60: f64,
    /// Factory top speed (mph)
    pub top_speed: f64,
    /// Factory 60-0 mph braking distance (ft)
    pub braking_distance_60_0: f64,
    /// Factory lateral grip (g)
    pub lateral_g: f64,
}

/// Transmission fitted to a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    /// Number of forward gears
    pub gears: usize,
}

/// A car in the garage roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Manufacturer badge
    pub brand: String,
    /// Class badge shown in the car-select list
    pub class: PiClass,
    /// Path to the 3D model asset (consumed by the viewer, not by this crate)
    pub model_path: String,
    /// Fitted transmission
    pub transmission: Transmission,
    /// Factory stat sheet
    pub base_stats: BaseVehicleStats,
}

/// The garage roster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarCatalog {
    cars: Vec<Car>,
}

impl CarCatalog {
    /// Parse a roster from a JSON array
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        for car in &catalog.cars {
            if car.transmission.gears == 0 {
                return Err(CatalogError::EmptyTransmission(car.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// Load a roster from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a car by id
    pub fn get(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    /// The default car shown when the garage opens
    pub fn default_car(&self) -> Option<&Car> {
        self.cars.first()
    }

    /// Iterate over the roster in listing order
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    /// Number of cars
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// The built-in roster, one car per class band
    pub fn builtin() -> Self {
        let cars = vec![
            Car {
                id: "apex_raptor".into(),
                name: "Apex Raptor".into(),
                brand: "Apex".into(),
                class: PiClass::A,
                model_path: "/models/apex_raptor.glb".into(),
                transmission: Transmission { gears: 6 },
                base_stats: BaseVehicleStats {
                    hp: 500.0,
                    torque: 500.0,
                    weight: 3000.0,
                    pi: 700,
                    acceleration_0_60: 3.5,
                    top_speed: 190.0,
                    braking_distance_60_0: 110.0,
                    lateral_g: 1.0,
                },
            },
            Car {
                id: "titan_lm".into(),
                name: "Titan LM".into(),
                brand: "Titan".into(),
                class: PiClass::S2,
                model_path: "/models/titan_lm.glb".into(),
                transmission: Transmission { gears: 7 },
                base_stats: BaseVehicleStats {
                    hp: 760.0,
                    torque: 710.0,
                    weight: 2900.0,
                    pi: 940,
                    acceleration_0_60: 3.0,
                    top_speed: 220.0,
                    braking_distance_60_0: 100.0,
                    lateral_g: 1.1,
                },
            },
            Car {
                id: "borealis_sl".into(),
                name: "Borealis SL".into(),
                brand: "Borealis".into(),
                class: PiClass::S1,
                model_path: "/models/borealis_sl.glb".into(),
                transmission: Transmission { gears: 6 },
                base_stats: BaseVehicleStats {
                    hp: 640.0,
                    torque: 590.0,
                    weight: 3200.0,
                    pi: 850,
                    acceleration_0_60: 3.4,
                    top_speed: 205.0,
                    braking_distance_60_0: 105.0,
                    lateral_g: 1.05,
                },
            },
            Car {
                id: "veloce_nettuno".into(),
                name: "Veloce Nettuno".into(),
                brand: "Veloce".into(),
                class: PiClass::B,
                model_path: "/models/veloce_nettuno.glb".into(),
                transmission: Transmission { gears: 6 },
                base_stats: BaseVehicleStats {
                    hp: 300.0,
                    torque: 295.0,
                    weight: 2800.0,
                    pi: 650,
                    acceleration_0_60: 4.5,
                    top_speed: 172.0,
                    braking_distance_60_0: 118.0,
                    lateral_g: 0.66,
                },
            },
            Car {
                id: "meridian_gt".into(),
                name: "Meridian GT".into(),
                brand: "Meridian".into(),
                class: PiClass::C,
                model_path: "/models/meridian_gt.glb".into(),
                transmission: Transmission { gears: 5 },
                base_stats: BaseVehicleStats {
                    hp: 180.0,
                    torque: 177.0,
                    weight: 2700.0,
                    pi: 540,
                    acceleration_0_60: 7.0,
                    top_speed: 145.0,
                    braking_distance_60_0: 124.0,
                    lateral_g: 0.68,
                },
            },
            Car {
                id: "kita_swift".into(),
                name: "Kita Swift".into(),
                brand: "Kita".into(),
                class: PiClass::D,
                model_path: "/models/kita_swift.glb".into(),
                transmission: Transmission { gears: 5 },
                base_stats: BaseVehicleStats {
                    hp: 130.0,
                    torque: 140.0,
                    weight: 2300.0,
                    pi: 310,
                    acceleration_0_60: 7.6,
                    top_speed: 130.0,
                    braking_distance_60_0: 128.0,
                    lateral_g: 0.8,
                },
            },
        ];
        Self { cars }
    }
}
