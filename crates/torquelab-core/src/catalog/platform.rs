//! Platform part data: chassis, brakes, suspension, ARBs and tires

use super::types::{PartDefinition, PartStats};
use super::PartsCatalog;

fn stats_part(name: &str, price: u32, stats: PartStats, allows_tuning: bool) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        price,
        stats,
        allows_tuning,
        ..Default::default()
    }
}

pub(super) fn register(catalog: &mut PartsCatalog) {
    catalog.insert(
        "weight_reduction",
        "stock",
        stats_part("Stock Chassis", 0, PartStats::default(), false),
    );
    catalog.insert(
        "weight_reduction",
        "sport",
        stats_part(
            "Sport Weight Reduc.",
            1500,
            PartStats { weight: Some(-150.0), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "weight_reduction",
        "race",
        stats_part(
            "Race Weight Reduc.",
            5000,
            PartStats { weight: Some(-350.0), ..Default::default() },
            false,
        ),
    );

    // Only race brakes expose balance/pressure tuning
    catalog.insert(
        "brakes",
        "stock",
        stats_part(
            "Stock Brakes",
            0,
            PartStats { braking: Some(1.0), weight: Some(0.0), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "brakes",
        "sport",
        stats_part(
            "Sport Brakes",
            1000,
            PartStats { braking: Some(1.22), weight: Some(-8.0), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "brakes",
        "race",
        stats_part(
            "Race Brakes",
            2500,
            PartStats { braking: Some(1.4), weight: Some(-18.0), ..Default::default() },
            true,
        ),
    );

    catalog.insert(
        "suspension",
        "stock",
        stats_part(
            "Stock Susp.",
            0,
            PartStats { handling: Some(1.0), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "suspension",
        "sport",
        stats_part(
            "Sport Susp.",
            1600,
            PartStats { handling: Some(1.2), ..Default::default() },
            true,
        ),
    );
    catalog.insert(
        "suspension",
        "race",
        stats_part(
            "Race Susp.",
            4200,
            PartStats { handling: Some(1.35), ..Default::default() },
            true,
        ),
    );

    catalog.insert(
        "arbs",
        "stock",
        stats_part(
            "Stock ARBs",
            0,
            PartStats { handling: Some(1.0), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "arbs",
        "sport",
        stats_part(
            "Sport ARBs",
            800,
            PartStats { handling: Some(1.1), ..Default::default() },
            true,
        ),
    );
    catalog.insert(
        "arbs",
        "race",
        stats_part(
            "Race ARBs",
            2200,
            PartStats { handling: Some(1.18), ..Default::default() },
            true,
        ),
    );

    catalog.insert(
        "tires",
        "stock",
        stats_part(
            "Stock Compound",
            0,
            PartStats { grip: Some(1.0), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "tires",
        "street",
        stats_part(
            "Street Compound",
            800,
            PartStats { grip: Some(1.12), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "tires",
        "sport",
        stats_part(
            "Sport Compound",
            1500,
            PartStats { grip: Some(1.28), ..Default::default() },
            false,
        ),
    );
    catalog.insert(
        "tires",
        "slick_comp",
        stats_part(
            "Race Slick Compound",
            4000,
            PartStats { grip: Some(1.55), ..Default::default() },
            false,
        ),
    );
}
