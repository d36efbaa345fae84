//! Aero part data

use super::types::{PartDefinition, PartStats};
use super::PartsCatalog;

fn wing(name: &str, price: u32, downforce: f64, allows_tuning: bool) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        price,
        stats: PartStats { downforce: Some(downforce), ..Default::default() },
        allows_tuning,
        ..Default::default()
    }
}

pub(super) fn register(catalog: &mut PartsCatalog) {
    catalog.insert("aero", "stock", wing("Stock Aero", 0, 0.0, false));
    catalog.insert("aero", "sport", wing("Sport Aero", 1200, 110.0, true));
    catalog.insert("aero", "race", wing("Race Aero", 3500, 280.0, true));
}
