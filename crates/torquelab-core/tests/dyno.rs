use torquelab_core::physics::generate_dyno_data;

#[test]
fn test_sweep_shape_at_stock_redline() {
    let data = generate_dyno_data(300.0, 300.0, 8000);

    // 0..=8000 in 500 rpm steps
    assert_eq!(data.len(), 17);
    assert_eq!(data[0].rpm, 0);
    assert_eq!(data[0].hp, 0);
    assert_eq!(data[16].rpm, 8000);

    // Plateau holds peak torque at 4000 rpm
    let at_4000 = data.iter().find(|p| p.rpm == 4000).unwrap();
    assert_eq!(at_4000.torque, 300);

    // Past the power peak the curve has fallen off
    assert!(data[16].torque < 300);
    assert_eq!(data[16].torque, 75);
    assert_eq!(data[16].hp, 114);
}

#[test]
fn test_idle_torque_fraction() {
    let data = generate_dyno_data(300.0, 300.0, 8000);
    let at_500 = data.iter().find(|p| p.rpm == 500).unwrap();
    assert_eq!(at_500.torque, 180);
}

#[test]
fn test_hp_torque_rpm_relation() {
    let data = generate_dyno_data(300.0, 300.0, 8000);
    let at_5000 = data.iter().find(|p| p.rpm == 5000).unwrap();
    assert_eq!(at_5000.torque, 300);
    // hp = 300 * 5000 / 5252
    assert_eq!(at_5000.hp, 286);
}

#[test]
fn test_race_cam_redline_moves_power_peak() {
    let stock = generate_dyno_data(300.0, 300.0, 8000);
    let race = generate_dyno_data(300.0, 300.0, 9000);

    let stock_at_6000 = stock.iter().find(|p| p.rpm == 6000).unwrap();
    let race_at_6000 = race.iter().find(|p| p.rpm == 6000).unwrap();

    // With the peak moved to 7500 the plateau still covers 6000 rpm
    assert_eq!(race_at_6000.torque, 300);
    assert!(stock_at_6000.torque < 300);
    assert_eq!(race.len(), 19);
}

#[test]
fn test_curve_clamped_non_negative_at_extreme_redline() {
    // An EV swap pushes the redline far past where the falloff reaches zero
    let data = generate_dyno_data(750.0, 950.0, 18_000);
    assert_eq!(data.len(), 37);
    for point in data.iter().filter(|p| p.rpm >= 11_000) {
        assert_eq!(point.torque, 0);
        assert_eq!(point.hp, 0);
    }
}

#[test]
fn test_zero_redline_yields_origin_point() {
    let data = generate_dyno_data(300.0, 300.0, 0);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].rpm, 0);
    assert_eq!(data[0].hp, 0);
}
