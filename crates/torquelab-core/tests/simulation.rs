use torquelab_core::physics::constants::{SIM_TIME_CAP, SIM_TIME_STEP};
use torquelab_core::physics::{simulate_acceleration, AccelerationInput};

fn sane_input() -> AccelerationInput {
    AccelerationInput {
        hp: 300.0,
        torque: 300.0,
        weight: 3000.0,
        grip: 1.0,
        drag: 0.3,
        gear_ratios: vec![3.2, 2.15, 1.55, 1.2, 0.95, 0.8],
        final_drive: 3.55,
        shift_time: 0.3,
    }
}

#[test]
fn test_terminates_within_bounds() {
    let time = simulate_acceleration(&sane_input());
    assert!(time > 0.0);
    assert!(time < SIM_TIME_CAP);
}

#[test]
fn test_more_torque_is_faster() {
    let baseline = simulate_acceleration(&sane_input());
    let strong = simulate_acceleration(&AccelerationInput {
        hp: 500.0,
        torque: 500.0,
        ..sane_input()
    });
    assert!(strong < baseline);
}

#[test]
fn test_heavier_is_slower() {
    let light = simulate_acceleration(&sane_input());
    let heavy = simulate_acceleration(&AccelerationInput {
        weight: 4200.0,
        ..sane_input()
    });
    assert!(heavy > light);
}

#[test]
fn test_low_grip_limits_launch() {
    let planted = simulate_acceleration(&AccelerationInput {
        torque: 500.0,
        ..sane_input()
    });
    let spinning = simulate_acceleration(&AccelerationInput {
        torque: 500.0,
        grip: 0.3,
        ..sane_input()
    });
    assert!(spinning > planted);
}

#[test]
fn test_longer_shifts_are_slower() {
    let quick = simulate_acceleration(&AccelerationInput {
        shift_time: 0.05,
        ..sane_input()
    });
    let slow = simulate_acceleration(&AccelerationInput {
        shift_time: 0.5,
        ..sane_input()
    });
    assert!(slow > quick);
}

#[test]
fn test_unreachable_target_reports_cap() {
    let time = simulate_acceleration(&AccelerationInput {
        hp: 20.0,
        torque: 20.0,
        weight: 4000.0,
        ..sane_input()
    });
    assert_eq!(time, SIM_TIME_CAP);
}

#[test]
fn test_empty_gear_list_exits_immediately() {
    let time = simulate_acceleration(&AccelerationInput {
        gear_ratios: Vec::new(),
        ..sane_input()
    });
    assert_eq!(time, SIM_TIME_STEP);
}

#[test]
fn test_single_gear_revs_out_but_terminates() {
    let time = simulate_acceleration(&AccelerationInput {
        torque: 500.0,
        gear_ratios: vec![3.2],
        ..sane_input()
    });
    assert!(time > 0.0);
    assert!(time <= SIM_TIME_CAP);
}
