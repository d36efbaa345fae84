use torquelab_core::physics::generate_gearing_graph_data;
use torquelab_core::prelude::*;

fn main() {
    let garage = Garage::with_builtin_data();
    let Some(state) = garage.initial_state() else {
        eprintln!("Car roster is empty");
        std::process::exit(1);
    };

    println!(
        "Car: {} [{} {}]",
        state.car.name, state.car.class, state.car.base_stats.pi
    );
    print_stats("Stock", &state.performance);

    // Bolt on a street-class build
    let upgrades = [
        ("turbo", "race_turbo"),
        ("exhaust", "sport"),
        ("tires", "sport"),
        ("suspension", "sport"),
        ("weight_reduction", "sport"),
    ];
    let mut state = state;
    for (category, part_id) in upgrades {
        state = garage.apply(
            &state,
            GarageAction::InstallPart {
                category: category.to_string(),
                part_id: part_id.to_string(),
            },
        );
    }

    print_stats("Upgraded", &state.performance);
    println!("Build cost: {} cr", garage.build_cost(&state));

    println!("\nDyno:");
    for point in state.dyno.iter().filter(|p| p.rpm % 1000 == 0) {
        println!("  {:>6} rpm  {:>4} hp  {:>4} lb-ft", point.rpm, point.hp, point.torque);
    }

    println!("\nGearing:");
    let gearing = generate_gearing_graph_data(
        &state.tuning,
        state.performance.rpm_limit,
        state.car.transmission.gears,
    );
    for point in &gearing {
        println!(
            "  gear {}: {:>6.0} rpm @ {:>5.1} mph",
            point.gear, point.rpm, point.speed
        );
    }
}

fn print_stats(label: &str, stats: &PerformanceStats) {
    println!(
        "{}: {} hp / {} lb-ft / {} lb | 0-60 {:.3}s | top {} mph | 60-0 {:.1} ft | {:.2} g | PI {} ({})",
        label,
        stats.hp,
        stats.torque,
        stats.weight,
        stats.acceleration_0_60,
        stats.top_speed,
        stats.braking_distance_60_0,
        stats.lateral_g,
        stats.pi,
        stats.pi_class,
    );
}
