//! Pantograph Solver Example - Sizing a small lift table

use pantograph_solver::prelude::*;

fn main() {
    println!("=== Pantograph Solver Example: Small Lift Table ===\n");

    let calculator = MechanismCalculator::default();

    // 8kg load on a 200x200mm platform, 150mm of travel from 50mm up,
    // rods at 60° when fully extended
    let inputs = MechanismInputs {
        load_kg: 8.0,
        width_mm: 200.0,
        depth_mm: 200.0,
        vertical_travel_mm: 150.0,
        min_height_mm: 50.0,
        max_angle_deg: 60.0,
    };

    let report = calculator.validate(&inputs);
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    if !report.is_valid {
        for error in &report.errors {
            println!("error: {error}");
        }
        std::process::exit(1);
    }

    let results = match calculator.calculate_all(&inputs) {
        Ok(results) => results,
        Err(e) => {
            println!("calculation failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Geometry:");
    println!("  Rod length:          {:.1} mm", results.rod_length);
    println!("  Angle range:         {:.2}° - {:.2}°", results.theta_min, results.theta_max);
    println!("  Max base half-span:  {:.1} mm", results.x_max);

    println!("\nForces (critical case at minimum angle):");
    println!("  Actuator force:      {:.1} N  (max angle: {:.1} N)",
        results.actuator_force_min, results.actuator_force_max);
    println!("  Rod axial force:     {:.1} N  (max angle: {:.1} N)",
        results.rod_force_min, results.rod_force_max);

    println!("\nStrength:");
    println!("  Section inertia:     {:.1} mm⁴", results.moment_of_inertia);
    println!("  Euler critical load: {:.2} kN", results.buckling_load);
    println!("  Safety factor:       {:.1} ({})",
        results.safety_factor,
        if results.is_safe { "SAFE" } else { "NOT SAFE" });

    println!("\nActuator:");
    println!("  Screw torque:        {:.1} mN·m", results.screw_torque);
    println!("  Efficiency:          {:.1}% - {:.1}%",
        results.efficiency_min * 100.0, results.efficiency_max * 100.0);

    let curve = calculator.generate_graph_data(&inputs, DEFAULT_GRAPH_STEPS);
    println!("\nTravel-range curve ({} samples):", curve.len());
    println!("{}", serde_json::to_string_pretty(&curve).expect("Failed to serialize curve"));
}
