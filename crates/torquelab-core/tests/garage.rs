use pretty_assertions::assert_eq;
use torquelab_core::garage::{BuildFile, Garage, GarageAction};
use torquelab_core::physics::PiClass;

fn install(category: &str, part_id: &str) -> GarageAction {
    GarageAction::InstallPart {
        category: category.to_string(),
        part_id: part_id.to_string(),
    }
}

#[test]
fn test_initial_state_is_stock_default_car() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();

    assert_eq!(state.car.id, "apex_raptor");
    assert_eq!(state.performance.hp, 500);
    assert_eq!(state.performance.pi, 700);
    assert_eq!(state.performance.pi_class, PiClass::A);
    assert_eq!(garage.build_cost(&state), 0);
    assert!(!state.dyno.is_empty());
}

#[test]
fn test_install_part_recomputes_stats_and_dyno() {
    let garage = Garage::with_builtin_data();
    let stock = garage.initial_state().unwrap();
    let boosted = garage.apply(&stock, install("turbo", "race_turbo"));

    // 500 + 500*0.6*0.4 = 620 hp; torque picks up the 0.9x pass-through
    // plus the flat 160 lb-ft
    assert_eq!(boosted.performance.hp, 620);
    assert_eq!(boosted.performance.torque, 768);
    assert_eq!(boosted.performance.weight, 3018);
    assert!(boosted.performance.acceleration_0_60 <= stock.performance.acceleration_0_60);
    assert_ne!(boosted.dyno, stock.dyno);

    // The previous state is untouched
    assert_eq!(stock.performance.hp, 500);
    assert_eq!(stock.config.installed("turbo"), Some("stock"));
}

#[test]
fn test_set_tuning_keeps_dyno() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();
    let softened = garage.apply(
        &state,
        GarageAction::SetTuning {
            knob: "brake_pressure".to_string(),
            value: 50.0,
        },
    );

    assert!(softened.performance.braking_distance_60_0 > state.performance.braking_distance_60_0);
    assert_eq!(softened.dyno, state.dyno);
    assert_eq!(softened.tuning.brake_pressure, 50.0);
}

#[test]
fn test_unknown_inputs_leave_state_unchanged() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();

    let after_knob = garage.apply(
        &state,
        GarageAction::SetTuning {
            knob: "nitrous".to_string(),
            value: 9000.0,
        },
    );
    assert_eq!(after_knob, state);

    let after_car = garage.apply(
        &state,
        GarageAction::SelectCar {
            car_id: "batmobile".to_string(),
        },
    );
    assert_eq!(after_car, state);
}

#[test]
fn test_select_car_starts_fresh_build() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();
    let modified = garage.apply(&state, install("tires", "slick_comp"));

    let switched = garage.apply(
        &modified,
        GarageAction::SelectCar {
            car_id: "titan_lm".to_string(),
        },
    );
    assert_eq!(switched.car.id, "titan_lm");
    assert_eq!(switched.performance.hp, 760);
    assert_eq!(switched.config.installed("tires"), Some("stock"));
    assert_eq!(switched.tuning, Default::default());
}

#[test]
fn test_reset_tuning_restores_baseline() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();
    let detuned = garage.apply(
        &state,
        GarageAction::SetTuning {
            knob: "tire_pressure_f".to_string(),
            value: 50.0,
        },
    );
    assert_ne!(detuned.performance, state.performance);

    let restored = garage.apply(&detuned, GarageAction::ResetTuning);
    assert_eq!(restored.performance, state.performance);
}

#[test]
fn test_preview_does_not_mutate_state() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();

    let preview = garage.preview_part(&state, "tires", "slick_comp");
    assert!(preview.lateral_g > state.performance.lateral_g);
    assert_eq!(state.config.installed("tires"), Some("stock"));
    assert_eq!(state.performance.hp, 500);
}

#[test]
fn test_build_cost_totals_installed_parts() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();
    let state = garage.apply(&state, install("turbo", "race_turbo"));
    let state = garage.apply(&state, install("tires", "slick_comp"));

    assert_eq!(garage.build_cost(&state), 14_000);
}

#[test]
fn test_build_file_round_trip() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();
    let state = garage.apply(&state, install("engine_swap", "racing_v8"));
    let state = garage.apply(
        &state,
        GarageAction::SetTuning {
            knob: "final_drive".to_string(),
            value: 4.1,
        },
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drag_setup.json");
    let mut build = BuildFile::from_state("Drag setup", &state);
    build.save(&path).unwrap();

    let loaded = BuildFile::load(&path).unwrap();
    assert_eq!(loaded.id, build.id);
    assert_eq!(loaded.name, "Drag setup");
    assert_eq!(loaded.car_id, "apex_raptor");
    assert_eq!(loaded.config, state.config);
    assert_eq!(loaded.tuning, state.tuning);

    let restored = garage.restore(&loaded).unwrap();
    assert_eq!(restored.performance, state.performance);
    assert_eq!(restored.dyno, state.dyno);
}

#[test]
fn test_restore_unknown_car_fails_gracefully() {
    let garage = Garage::with_builtin_data();
    let state = garage.initial_state().unwrap();
    let mut build = BuildFile::from_state("Orphan", &state);
    build.car_id = "crushed_car".to_string();

    assert!(garage.restore(&build).is_none());
}
