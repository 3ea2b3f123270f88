//! Mechanism calculator - geometry, statics and strength of the scissor linkage

use crate::config::CalculatorConfig;
use crate::error::{PantographError, PantographResult};
use crate::inputs::MechanismInputs;
use crate::results::{GraphSample, MechanismResult};
use crate::validation::ValidationReport;

/// Default number of samples in the travel-range curve
pub const DEFAULT_GRAPH_STEPS: usize = 30;

/// Sizing calculator for a pantographic lift table.
///
/// Holds read-only configuration (gravity, material, rod section, screw) and
/// exposes three pure operations: [`validate`](Self::validate),
/// [`calculate_all`](Self::calculate_all) and
/// [`generate_graph_data`](Self::generate_graph_data). Every call recomputes
/// from scratch; nothing is cached between requests.
#[derive(Debug, Clone, Default)]
pub struct MechanismCalculator {
    config: CalculatorConfig,
}

impl MechanismCalculator {
    /// Create a calculator with the given configuration
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Get the bound configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================
    // Validation
    // ========================

    /// Validate sizing inputs.
    ///
    /// Never fails; all hard violations and advisory warnings are accumulated
    /// in the returned report, in rule order.
    pub fn validate(&self, inputs: &MechanismInputs) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if inputs.load_kg <= 0.0 {
            errors.push("Load must be greater than zero".to_string());
        }
        if inputs.width_mm <= 0.0 {
            errors.push("Width must be greater than zero".to_string());
        }
        if inputs.depth_mm <= 0.0 {
            errors.push("Depth must be greater than zero".to_string());
        }
        if inputs.vertical_travel_mm <= 0.0 {
            errors.push("Vertical travel must be greater than zero".to_string());
        }
        if inputs.min_height_mm <= 0.0 {
            errors.push("Minimum height must be greater than zero".to_string());
        }
        if inputs.max_angle_deg <= 0.0 || inputs.max_angle_deg >= 90.0 {
            errors.push("Maximum angle must be between 0 and 90 degrees".to_string());
        }

        if inputs.load_kg > 50.0 {
            warnings.push("Elevated load - consider checking the structure".to_string());
        }
        if inputs.max_angle_deg < 30.0 {
            warnings.push("Low maximum angle may result in high forces".to_string());
        }
        if inputs.max_angle_deg > 75.0 {
            warnings.push("High maximum angle may compromise stability".to_string());
        }
        if inputs.vertical_travel_mm > inputs.min_height_mm * 5.0 {
            warnings.push("Vertical travel is very large relative to the minimum height".to_string());
        }

        ValidationReport::new(errors, warnings)
    }

    // ========================
    // Full calculation
    // ========================

    /// Compute the full sizing result at the travel extremes.
    ///
    /// Inputs are expected to have passed [`validate`](Self::validate);
    /// physically unrealizable geometry still fails here with a domain error,
    /// and no partial result is returned.
    pub fn calculate_all(&self, inputs: &MechanismInputs) -> PantographResult<MechanismResult> {
        let p = inputs.load_kg * self.config.gravity;
        let h_min = inputs.h_min_m();
        let h_max = inputs.h_max_m();
        let theta_max = inputs.theta_max_rad();

        let l = rod_length(h_max, theta_max);
        let theta_min = angle_at_height(h_min, l)?;

        // Forces at the minimum angle (critical case) and at full extension
        let actuator_force_min = actuator_force(p, theta_min)?;
        let rod_force_min = rod_force(p, theta_min)?;
        let actuator_force_max = actuator_force(p, theta_max)?;
        let rod_force_max = rod_force(p, theta_max)?;

        let i = self.config.rod_section.moment_of_inertia();
        let p_cr = self.euler_buckling_load(i, l);
        let safety_factor = p_cr / rod_force_min;

        let torque = self.config.screw.torque(actuator_force_min);
        let x_max = 2.0 * l * theta_max.cos();

        Ok(MechanismResult {
            rod_length: l * 1000.0,
            theta_min: theta_min.to_degrees(),
            theta_max: inputs.max_angle_deg,
            x_max: x_max * 1000.0,
            actuator_force_min,
            actuator_force_max,
            rod_force_min,
            rod_force_max,
            buckling_load: p_cr / 1000.0,
            safety_factor,
            is_safe: safety_factor > self.config.min_safety_factor,
            screw_torque: torque * 1000.0,
            moment_of_inertia: i * 1e12,
            efficiency_min: efficiency(rod_force_min, actuator_force_min, theta_min),
            efficiency_max: efficiency(rod_force_max, actuator_force_max, theta_max),
        })
    }

    // ========================
    // Travel-range curve
    // ========================

    /// Sample the angle/force/efficiency curve across the travel range.
    ///
    /// Returns `steps` equally spaced samples from the minimum to the maximum
    /// height, both inclusive. A configuration that fails the full calculation
    /// or any per-sample domain guard yields an empty sequence instead.
    pub fn generate_graph_data(&self, inputs: &MechanismInputs, steps: usize) -> Vec<GraphSample> {
        match self.sample_curve(inputs, steps) {
            Ok(samples) => samples,
            Err(e) => {
                log::debug!("graph data generation aborted: {e}");
                Vec::new()
            }
        }
    }

    fn sample_curve(
        &self,
        inputs: &MechanismInputs,
        steps: usize,
    ) -> PantographResult<Vec<GraphSample>> {
        let results = self.calculate_all(inputs)?;

        let p = inputs.load_kg * self.config.gravity;
        let h_min = inputs.h_min_m();
        let h_max = inputs.h_max_m();
        let l = results.rod_length / 1000.0;

        // steps == 1 would make the step size divide by zero
        let step_size = if steps > 1 {
            (h_max - h_min) / (steps - 1) as f64
        } else {
            0.0
        };

        let mut data = Vec::with_capacity(steps);
        for i in 0..steps {
            let h = h_min + i as f64 * step_size;
            let theta = angle_at_height(h, l)?;

            let f_actuator = actuator_force(p, theta)?;
            let f_rod = rod_force(p, theta)?;
            let x = 2.0 * l * theta.cos();

            data.push(GraphSample {
                height: h * 1000.0,
                angle: theta.to_degrees(),
                actuator_force: f_actuator,
                rod_force: f_rod,
                horizontal_span: x * 1000.0,
                efficiency: efficiency(f_rod, f_actuator, theta) * 100.0,
            });
        }

        Ok(data)
    }

    /// Euler critical buckling load in N for a rod of length `l` in m
    fn euler_buckling_load(&self, i: f64, l: f64) -> f64 {
        let e = self.config.material.e;
        let k = self.config.effective_length_factor;
        std::f64::consts::PI.powi(2) * e * i / (k * l).powi(2)
    }
}

/// Rod length in m from the maximum height and maximum angle
fn rod_length(h_max: f64, theta_max: f64) -> f64 {
    h_max / (2.0 * theta_max.sin())
}

/// Rod angle in radians at platform height `h` for rod length `l`
fn angle_at_height(h: f64, l: f64) -> PantographResult<f64> {
    let sin_value = h / (2.0 * l);
    if !(-1.0..=1.0).contains(&sin_value) {
        return Err(PantographError::InvalidGeometry(
            "minimum height is incompatible with the rod length".to_string(),
        ));
    }
    Ok(sin_value.asin())
}

/// Actuator force in N to hold vertical load `p` at rod angle `theta`
fn actuator_force(p: f64, theta: f64) -> PantographResult<f64> {
    let tan_value = theta.tan();
    if tan_value == 0.0 {
        return Err(PantographError::DegenerateAngle(
            "tangent is zero at a horizontal rod".to_string(),
        ));
    }
    Ok(p / (2.0 * tan_value))
}

/// Axial compression in N in one rod at angle `theta`
fn rod_force(p: f64, theta: f64) -> PantographResult<f64> {
    let sin_value = theta.sin();
    if sin_value == 0.0 {
        return Err(PantographError::DegenerateAngle(
            "sine is zero at a horizontal rod".to_string(),
        ));
    }
    Ok(p / (4.0 * sin_value))
}

/// Fraction of actuator force converted to vertical rod force at `theta`
fn efficiency(f_rod: f64, f_actuator: f64, theta: f64) -> f64 {
    f_rod * theta.sin() / f_actuator
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_inputs() -> MechanismInputs {
        MechanismInputs {
            load_kg: 8.0,
            width_mm: 200.0,
            depth_mm: 200.0,
            vertical_travel_mm: 150.0,
            min_height_mm: 50.0,
            max_angle_deg: 60.0,
        }
    }

    #[test]
    fn test_rod_length_formula() {
        // h_max = 0.2m at 60°: L = 0.2 / (2 sin 60°)
        let l = rod_length(0.2, 60.0_f64.to_radians());
        assert_relative_eq!(l, 0.2 / 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_domain_error() {
        let err = angle_at_height(1.0, 0.1).unwrap_err();
        assert!(matches!(err, PantographError::InvalidGeometry(_)));
    }

    #[test]
    fn test_degenerate_angle_errors() {
        assert!(matches!(
            actuator_force(100.0, 0.0),
            Err(PantographError::DegenerateAngle(_))
        ));
        assert!(matches!(
            rod_force(100.0, 0.0),
            Err(PantographError::DegenerateAngle(_))
        ));
    }

    #[test]
    fn test_force_formulas() {
        let theta = 30.0_f64.to_radians();
        assert_relative_eq!(
            actuator_force(100.0, theta).unwrap(),
            100.0 / (2.0 * theta.tan()),
            epsilon = 1e-12
        );
        // sin 30° = 0.5 so the rod carries P/2
        assert_relative_eq!(rod_force(100.0, theta).unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_validation_accumulates_all_errors() {
        let calc = MechanismCalculator::default();
        let inputs = MechanismInputs {
            load_kg: -1.0,
            width_mm: 0.0,
            depth_mm: -5.0,
            vertical_travel_mm: 0.0,
            min_height_mm: -2.0,
            max_angle_deg: 95.0,
        };
        let report = calc.validate(&inputs);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 6);
    }

    #[test]
    fn test_validation_angle_boundaries_exclusive() {
        let calc = MechanismCalculator::default();
        let mut inputs = reference_inputs();

        inputs.max_angle_deg = 90.0;
        assert!(!calc.validate(&inputs).is_valid);

        inputs.max_angle_deg = 0.0;
        assert!(!calc.validate(&inputs).is_valid);

        inputs.max_angle_deg = 89.9;
        assert!(calc.validate(&inputs).is_valid);
    }

    #[test]
    fn test_validation_warnings() {
        let calc = MechanismCalculator::default();
        let mut inputs = reference_inputs();
        inputs.load_kg = 60.0;
        inputs.max_angle_deg = 80.0;
        inputs.vertical_travel_mm = 400.0; // > 5 x 50mm

        let report = calc.validate(&inputs);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_reference_scenario() {
        let calc = MechanismCalculator::default();
        let inputs = reference_inputs();

        let report = calc.validate(&inputs);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());

        let results = calc.calculate_all(&inputs).unwrap();
        assert_relative_eq!(results.rod_length, 115.470, epsilon = 1e-2);
        assert_relative_eq!(results.theta_min, 12.5035, epsilon = 1e-3);
        assert_relative_eq!(results.theta_max, 60.0, epsilon = 1e-12);
        assert_relative_eq!(results.moment_of_inertia, 45.0, epsilon = 1e-9);
        assert!(results.safety_factor > 3.0);
        assert!(results.is_safe);
    }

    #[test]
    fn test_angle_ordering_invariant() {
        let calc = MechanismCalculator::default();
        let results = calc.calculate_all(&reference_inputs()).unwrap();
        assert!(results.theta_min < results.theta_max);
    }

    /// Inputs that skip validation and ask for a minimum height the rod
    /// cannot reach: h_max below h_min makes h_min/(2L) exceed 1
    fn unreachable_inputs() -> MechanismInputs {
        MechanismInputs {
            load_kg: 8.0,
            width_mm: 200.0,
            depth_mm: 200.0,
            vertical_travel_mm: -80.0,
            min_height_mm: 100.0,
            max_angle_deg: 60.0,
        }
    }

    #[test]
    fn test_unreachable_min_height_is_geometry_error() {
        let calc = MechanismCalculator::default();
        let err = calc.calculate_all(&unreachable_inputs()).unwrap_err();
        assert!(matches!(err, PantographError::InvalidGeometry(_)));
    }

    #[test]
    fn test_graph_data_empty_on_domain_error() {
        let calc = MechanismCalculator::default();
        let samples = calc.generate_graph_data(&unreachable_inputs(), DEFAULT_GRAPH_STEPS);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_graph_single_step_guard() {
        let calc = MechanismCalculator::default();
        let samples = calc.generate_graph_data(&reference_inputs(), 1);
        assert_eq!(samples.len(), 1);
        assert_relative_eq!(samples[0].height, 50.0, epsilon = 1e-9);
    }
}
