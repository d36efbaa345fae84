use pretty_assertions::assert_eq;
use torquelab_core::carconfig::CarConfiguration;
use torquelab_core::cars::CarCatalog;
use torquelab_core::catalog::{CatalogError, PartsCatalog};
use torquelab_core::physics::PiClass;

const EXPECTED_CATEGORIES: &[&str] = &[
    "aero",
    "arbs",
    "brakes",
    "camshaft",
    "differential",
    "engine_swap",
    "exhaust",
    "flywheel",
    "fuel_system",
    "ignition",
    "intake_manifold",
    "intercooler",
    "pistons",
    "suspension",
    "tires",
    "transmission",
    "turbo",
    "valves",
    "weight_reduction",
];

#[test]
fn test_builtin_covers_every_category() {
    let catalog = PartsCatalog::builtin();
    assert_eq!(catalog.category_names(), EXPECTED_CATEGORIES);

    // Every category has the universal no-op fallback
    for category in EXPECTED_CATEGORIES {
        assert!(catalog.part(category, "stock").is_some(), "{category}");
    }
}

#[test]
fn test_part_lookup() {
    let catalog = PartsCatalog::builtin();

    let turbo = catalog.part("turbo", "race_turbo").unwrap();
    assert_eq!(turbo.multiplier, 0.6);
    assert_eq!(turbo.stats.torque, Some(160.0));
    assert_eq!(turbo.price, 10_000);

    let swap = catalog.part("engine_swap", "v10_f1_spec").unwrap();
    let base = swap.base_stats.unwrap();
    assert_eq!(base.hp, 880.0);
    assert_eq!(base.torque, 380.0);
    assert_eq!(swap.stats.rpm_limit, Some(8500.0));

    assert!(catalog.part("turbo", "quad_turbo").is_none());
    assert!(catalog.part("nitrous", "stock").is_none());
}

#[test]
fn test_allows_tuning_flags() {
    let catalog = PartsCatalog::builtin();

    assert!(!catalog.allows_tuning("suspension", "stock"));
    assert!(catalog.allows_tuning("suspension", "sport"));
    assert!(catalog.allows_tuning("suspension", "race"));

    assert!(!catalog.allows_tuning("brakes", "sport"));
    assert!(catalog.allows_tuning("brakes", "race"));

    assert!(!catalog.allows_tuning("tires", "slick_comp"));
    assert!(!catalog.allows_tuning("nitrous", "stock"));
}

#[test]
fn test_json_round_trip() {
    let catalog = PartsCatalog::builtin();
    let json = serde_json::to_string(&catalog).unwrap();
    let reloaded = PartsCatalog::from_json(&json).unwrap();

    assert_eq!(reloaded.category_names(), catalog.category_names());
    let part = reloaded.part("exhaust", "race").unwrap();
    assert_eq!(part.multiplier, 0.18);
    assert_eq!(part.stats.weight, Some(-25.0));
}

#[test]
fn test_category_without_stock_rejected() {
    let json = r#"{"exhaust": {"race": {"name": "Race Exhaust", "price": 5000}}}"#;
    match PartsCatalog::from_json(json) {
        Err(CatalogError::MissingStockPart(category)) => assert_eq!(category, "exhaust"),
        other => panic!("expected MissingStockPart, got {other:?}"),
    }
}

#[test]
fn test_minimal_part_json_fills_defaults() {
    let json = r#"{"exhaust": {"stock": {"name": "Stock Exhaust", "price": 0}}}"#;
    let catalog = PartsCatalog::from_json(json).unwrap();
    let part = catalog.part("exhaust", "stock").unwrap();

    assert_eq!(part.multiplier, 0.0);
    assert_eq!(part.stats.hp, None);
    assert!(!part.allows_tuning);
    assert_eq!(part.base_stats, None);
}

#[test]
fn test_stock_config_covers_catalog() {
    let catalog = PartsCatalog::builtin();
    let config = CarConfiguration::stock_for(&catalog);

    assert_eq!(config.len(), EXPECTED_CATEGORIES.len());
    for category in EXPECTED_CATEGORIES {
        assert_eq!(config.installed(category), Some("stock"));
    }
    assert_eq!(config.installed("nitrous"), None);
}

#[test]
fn test_builtin_roster_spans_classes() {
    let roster = CarCatalog::builtin();
    assert_eq!(roster.len(), 6);

    let classes: Vec<PiClass> = roster.iter().map(|c| c.class).collect();
    for class in [
        PiClass::S2,
        PiClass::S1,
        PiClass::A,
        PiClass::B,
        PiClass::C,
        PiClass::D,
    ] {
        assert!(classes.contains(&class), "missing class {class}");
    }

    let raptor = roster.get("apex_raptor").unwrap();
    assert_eq!(raptor.base_stats.hp, 500.0);
    assert_eq!(raptor.transmission.gears, 6);
    assert_eq!(roster.default_car().unwrap().id, "apex_raptor");
}

#[test]
fn test_roster_rejects_gearless_car() {
    let json = r#"[{
        "id": "bad",
        "name": "Bad Car",
        "brand": "Bad",
        "class": "C",
        "model_path": "/models/bad.glb",
        "transmission": {"gears": 0},
        "base_stats": {
            "hp": 100.0, "torque": 100.0, "weight": 2000.0, "pi": 400,
            "acceleration_0_60": 9.0, "top_speed": 110.0,
            "braking_distance_60_0": 130.0, "lateral_g": 0.7
        }
    }]"#;
    match CarCatalog::from_json(json) {
        Err(CatalogError::EmptyTransmission(id)) => assert_eq!(id, "bad"),
        other => panic!("expected EmptyTransmission, got {other:?}"),
    }
}
