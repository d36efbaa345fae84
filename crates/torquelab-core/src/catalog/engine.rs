//! Engine part data: swaps, breathing mods, internals and forced induction

use super::types::{EngineBaseStats, EngineSpecs, PartDefinition, PartGrade, PartStats};
use super::PartsCatalog;

fn swap(
    name: &str,
    description: &str,
    price: u32,
    base: EngineBaseStats,
    stats: PartStats,
    specs: EngineSpecs,
) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        description: Some(description.into()),
        price,
        stats,
        base_stats: Some(base),
        specs: Some(specs),
        ..Default::default()
    }
}

fn specs(displacement: &str, cylinders: &str, aspiration: &str, weight: &str) -> EngineSpecs {
    EngineSpecs {
        displacement: displacement.into(),
        cylinders: cylinders.into(),
        aspiration: aspiration.into(),
        weight: weight.into(),
    }
}

fn mult(name: &str, price: u32, grade: PartGrade, multiplier: f64, stats: PartStats) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        price,
        grade: Some(grade),
        multiplier,
        stats,
        ..Default::default()
    }
}

pub(super) fn register(catalog: &mut PartsCatalog) {
    // Engine swaps: base_stats replaces the car's hp/torque outright,
    // flat stats stay additive offsets
    catalog.insert(
        "engine_swap",
        "stock",
        PartDefinition {
            name: "Stock Engine".into(),
            description: Some("Original factory engine".into()),
            ..Default::default()
        },
    );
    catalog.insert(
        "engine_swap",
        "v8_modern",
        swap(
            "6.2L V8",
            "Naturally Aspirated Modern V8",
            12_000,
            EngineBaseStats { hp: 450.0, torque: 450.0 },
            PartStats { weight: Some(50.0), ..Default::default() },
            specs("6.2L", "V8", "NA", "200 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "rotary_20b",
        swap(
            "2.0L 3-Rotor",
            "Screaming Triple-Rotor Wankel",
            18_000,
            EngineBaseStats { hp: 450.0, torque: 300.0 },
            PartStats { weight: Some(-40.0), rpm_limit: Some(3000.0), ..Default::default() },
            specs("2.0L", "3-Rotor", "TT", "110 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "racing_v8",
        swap(
            "5.0L Racing V8",
            "High-revving Racing V8",
            25_000,
            EngineBaseStats { hp: 600.0, torque: 500.0 },
            PartStats { weight: Some(30.0), rpm_limit: Some(1000.0), ..Default::default() },
            specs("5.0L", "V8", "NA", "180 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "v10_f1_spec",
        swap(
            "3.0L V10 F1",
            "High-revving 2000s F1 Engine",
            55_000,
            EngineBaseStats { hp: 880.0, torque: 380.0 },
            PartStats { weight: Some(-50.0), rpm_limit: Some(8500.0), ..Default::default() },
            specs("3.0L", "V10", "NA", "125 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "racing_v12",
        swap(
            "6.0L Racing V12",
            "Le Mans Prototype Engine",
            45_000,
            EngineBaseStats { hp: 800.0, torque: 700.0 },
            PartStats { weight: Some(70.0), rpm_limit: Some(500.0), ..Default::default() },
            specs("6.0L", "V12", "NA", "220 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "ev_dual_motor",
        swap(
            "Dual Motor EV",
            "Instant Torque Electric Swap",
            40_000,
            EngineBaseStats { hp: 750.0, torque: 950.0 },
            PartStats { weight: Some(160.0), rpm_limit: Some(10_000.0), ..Default::default() },
            specs("N/A", "Electric", "None", "380 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "racing_v6_tt",
        swap(
            "3.8L V6 Twin Turbo",
            "VR38DETT Spec",
            30_000,
            EngineBaseStats { hp: 600.0, torque: 480.0 },
            PartStats { weight: Some(80.0), ..Default::default() },
            specs("3.8L", "V6", "Twin Turbo", "230 LBS"),
        ),
    );
    catalog.insert(
        "engine_swap",
        "turbo_rally_i4",
        swap(
            "1.6L Turbo Rally",
            "WRC Spec Inline-4",
            15_000,
            EngineBaseStats { hp: 380.0, torque: 450.0 },
            PartStats { weight: Some(-30.0), ..Default::default() },
            specs("1.6L", "I4", "Turbo", "120 LBS"),
        ),
    );

    // Breathing mods
    catalog.insert(
        "intake_manifold",
        "stock",
        mult("Stock Intake", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "intake_manifold",
        "street",
        mult(
            "Street Intake",
            500,
            PartGrade::Street,
            0.04,
            PartStats { torque: Some(5.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "intake_manifold",
        "sport",
        mult(
            "Sport Intake",
            1500,
            PartGrade::Sport,
            0.08,
            PartStats { weight: Some(-2.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "intake_manifold",
        "race",
        mult(
            "Race Intake",
            3000,
            PartGrade::Race,
            0.14,
            PartStats { weight: Some(-5.0), ..Default::default() },
        ),
    );

    catalog.insert(
        "fuel_system",
        "stock",
        mult("Stock Fuel", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "fuel_system",
        "street",
        mult("Street Fuel", 800, PartGrade::Street, 0.05, PartStats::default()),
    );
    catalog.insert(
        "fuel_system",
        "sport",
        mult("Sport Fuel", 2000, PartGrade::Sport, 0.1, PartStats::default()),
    );
    catalog.insert(
        "fuel_system",
        "race",
        mult("Race Fuel", 4500, PartGrade::Race, 0.18, PartStats::default()),
    );

    // Ignition gains are software-limited, see the category scale table
    catalog.insert(
        "ignition",
        "stock",
        mult("Stock ECU", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "ignition",
        "street",
        mult("Street ECU", 1000, PartGrade::Street, 0.06, PartStats::default()),
    );
    catalog.insert(
        "ignition",
        "sport",
        mult("Sport ECU", 2500, PartGrade::Sport, 0.14, PartStats::default()),
    );
    catalog.insert(
        "ignition",
        "race",
        mult("Race ECU", 6000, PartGrade::Race, 0.24, PartStats::default()),
    );

    catalog.insert(
        "exhaust",
        "stock",
        mult("Stock Exhaust", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "exhaust",
        "street",
        mult(
            "Street Exhaust",
            900,
            PartGrade::Street,
            0.05,
            PartStats { weight: Some(-5.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "exhaust",
        "sport",
        mult(
            "Sport Exhaust",
            2200,
            PartGrade::Sport,
            0.11,
            PartStats { weight: Some(-12.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "exhaust",
        "race",
        mult(
            "Race Exhaust",
            5000,
            PartGrade::Race,
            0.18,
            PartStats { weight: Some(-25.0), ..Default::default() },
        ),
    );

    // Internals
    catalog.insert(
        "camshaft",
        "stock",
        mult("Stock Cam", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "camshaft",
        "street",
        mult(
            "Street Cam",
            1200,
            PartGrade::Street,
            0.07,
            PartStats { rpm_limit: Some(500.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "camshaft",
        "sport",
        mult(
            "Sport Cam",
            3000,
            PartGrade::Sport,
            0.15,
            PartStats { rpm_limit: Some(1200.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "camshaft",
        "race",
        mult(
            "Race Cam",
            7000,
            PartGrade::Race,
            0.26,
            PartStats { rpm_limit: Some(2200.0), ..Default::default() },
        ),
    );

    catalog.insert(
        "valves",
        "stock",
        mult("Stock Valves", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "valves",
        "street",
        mult("Street Valves", 800, PartGrade::Street, 0.04, PartStats::default()),
    );
    catalog.insert(
        "valves",
        "sport",
        mult("Sport Valves", 2000, PartGrade::Sport, 0.1, PartStats::default()),
    );
    catalog.insert(
        "valves",
        "race",
        mult("Race Valves", 4000, PartGrade::Race, 0.16, PartStats::default()),
    );

    catalog.insert(
        "pistons",
        "stock",
        mult("Stock Block", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "pistons",
        "street",
        mult(
            "Street Pistons",
            1500,
            PartGrade::Street,
            0.06,
            PartStats { weight: Some(-2.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "pistons",
        "sport",
        mult(
            "Sport Pistons",
            4000,
            PartGrade::Sport,
            0.13,
            PartStats { weight: Some(-5.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "pistons",
        "race",
        mult(
            "Race Pistons",
            9000,
            PartGrade::Race,
            0.22,
            PartStats { weight: Some(-10.0), ..Default::default() },
        ),
    );

    // Forced induction: torque follows hp more closely than on breathing mods
    catalog.insert(
        "turbo",
        "stock",
        mult("N/A", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "turbo",
        "sport_turbo",
        mult(
            "Sport Turbo",
            4500,
            PartGrade::Sport,
            0.3,
            PartStats { weight: Some(12.0), torque: Some(50.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "turbo",
        "race_turbo",
        mult(
            "Race Big Turbo",
            10_000,
            PartGrade::Race,
            0.6,
            PartStats { weight: Some(18.0), torque: Some(160.0), ..Default::default() },
        ),
    );

    catalog.insert(
        "intercooler",
        "stock",
        mult("Stock Cooling", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "intercooler",
        "sport",
        mult(
            "Sport Intercooler",
            1200,
            PartGrade::Sport,
            0.06,
            PartStats { weight: Some(5.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "intercooler",
        "race",
        mult(
            "Race Intercooler",
            3000,
            PartGrade::Race,
            0.12,
            PartStats { weight: Some(10.0), ..Default::default() },
        ),
    );

    catalog.insert(
        "flywheel",
        "stock",
        mult("Stock Flywheel", 0, PartGrade::Stock, 0.0, PartStats::default()),
    );
    catalog.insert(
        "flywheel",
        "street",
        mult(
            "Street Flywheel",
            600,
            PartGrade::Street,
            0.02,
            PartStats { weight: Some(-3.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "flywheel",
        "sport",
        mult(
            "Sport Flywheel",
            1500,
            PartGrade::Sport,
            0.05,
            PartStats { weight: Some(-6.0), ..Default::default() },
        ),
    );
    catalog.insert(
        "flywheel",
        "race",
        mult(
            "Race Flywheel",
            3500,
            PartGrade::Race,
            0.09,
            PartStats { weight: Some(-10.0), ..Default::default() },
        ),
    );
}
