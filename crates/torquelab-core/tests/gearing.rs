use torquelab_core::physics::generate_gearing_graph_data;
use torquelab_core::tuning::TuningSettings;

#[test]
fn test_two_points_per_gear() {
    let tuning = TuningSettings::default();
    let data = generate_gearing_graph_data(&tuning, 8000, 6);

    assert_eq!(data.len(), 12);
    assert_eq!(data[0].speed, 0.0);
    assert_eq!(data[0].rpm, 0.0);
    assert_eq!(data[0].gear, 1);

    // Each gear contributes an entry point and a redline point
    for (i, point) in data.iter().enumerate() {
        assert_eq!(point.gear as usize, i / 2 + 1);
    }
}

#[test]
fn test_shift_lines_are_vertical() {
    let tuning = TuningSettings::default();
    let data = generate_gearing_graph_data(&tuning, 8000, 6);

    // A gear's entry point carries over the previous gear's exit speed
    for gear_index in 1..6 {
        let entry = &data[gear_index * 2];
        let previous_exit = &data[gear_index * 2 - 1];
        assert_eq!(entry.speed, previous_exit.speed);
        assert!(entry.rpm < previous_exit.rpm);
    }
}

#[test]
fn test_entry_rpm_follows_ratio_drop() {
    let tuning = TuningSettings::default();
    let data = generate_gearing_graph_data(&tuning, 8000, 6);

    // Shifting 1st -> 2nd at redline drops the engine to redline * g2/g1
    let expected = 8000.0 * (tuning.gear_2 / tuning.gear_1);
    assert!((data[2].rpm - expected).abs() < 1e-9);
}

#[test]
fn test_redline_speed_through_first_gear() {
    let tuning = TuningSettings::default();
    let data = generate_gearing_graph_data(&tuning, 8000, 6);

    // 8000 rpm through 3.2 * 3.55 at a 0.33 m tire is about 54.4 mph
    assert!((data[1].speed - 54.44).abs() < 0.05);
    assert_eq!(data[1].rpm, 8000.0);
}

#[test]
fn test_speeds_increase_through_the_box() {
    let tuning = TuningSettings::default();
    let data = generate_gearing_graph_data(&tuning, 8000, 6);

    // Redline speed climbs with every taller gear
    let exit_speeds: Vec<f64> = data.iter().skip(1).step_by(2).map(|p| p.speed).collect();
    for pair in exit_speeds.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_respects_transmission_gear_count() {
    let tuning = TuningSettings::default();
    assert_eq!(generate_gearing_graph_data(&tuning, 8000, 3).len(), 6);
    assert_eq!(generate_gearing_graph_data(&tuning, 8000, 10).len(), 20);
}

#[test]
fn test_unusable_ratio_skipped() {
    let mut tuning = TuningSettings::default();
    tuning.gear_3 = 0.0;
    let data = generate_gearing_graph_data(&tuning, 8000, 6);
    assert_eq!(data.len(), 10);
}
