//! Drivetrain part data: transmissions and differentials

use super::types::{PartDefinition, PartStats};
use super::PartsCatalog;

fn trans(name: &str, price: u32, shift_time: f64, allows_tuning: bool) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        price,
        stats: PartStats { shift_time: Some(shift_time), ..Default::default() },
        allows_tuning,
        ..Default::default()
    }
}

fn diff(name: &str, price: u32, handling: f64, allows_tuning: bool) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        price,
        stats: PartStats { handling: Some(handling), ..Default::default() },
        allows_tuning,
        ..Default::default()
    }
}

pub(super) fn register(catalog: &mut PartsCatalog) {
    // Upgraded transmissions shift faster and unlock gearing adjustment
    catalog.insert("transmission", "stock", trans("Stock Trans", 0, 0.35, false));
    catalog.insert("transmission", "sport", trans("Sport Trans", 2000, 0.12, true));
    catalog.insert("transmission", "race", trans("Race Trans", 5000, 0.04, true));

    catalog.insert("differential", "stock", diff("Stock Diff", 0, 1.0, false));
    catalog.insert("differential", "sport", diff("Sport Diff", 1200, 1.09, true));
    catalog.insert("differential", "race", diff("Race Diff", 2800, 1.16, true));
}
