//! User-supplied sizing parameters

use serde::{Deserialize, Serialize};

/// Input parameters for a lift table sizing run.
///
/// Boundary units are millimeters, kilograms and degrees; the calculator
/// converts to SI internally. The footprint (`width_mm`, `depth_mm`) is
/// informational and does not enter the force equations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MechanismInputs {
    /// Mass to lift in kg
    pub load_kg: f64,
    /// Platform width in mm
    pub width_mm: f64,
    /// Platform depth in mm
    pub depth_mm: f64,
    /// Stroke between minimum and maximum height in mm
    pub vertical_travel_mm: f64,
    /// Platform height at the lowest position in mm
    pub min_height_mm: f64,
    /// Rod angle from horizontal at full extension in degrees
    pub max_angle_deg: f64,
}

impl MechanismInputs {
    /// Minimum platform height in m
    pub fn h_min_m(&self) -> f64 {
        self.min_height_mm / 1000.0
    }

    /// Maximum platform height in m
    pub fn h_max_m(&self) -> f64 {
        (self.min_height_mm + self.vertical_travel_mm) / 1000.0
    }

    /// Maximum rod angle in radians
    pub fn theta_max_rad(&self) -> f64 {
        self.max_angle_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_si_conversions() {
        let inputs = MechanismInputs {
            load_kg: 8.0,
            width_mm: 200.0,
            depth_mm: 200.0,
            vertical_travel_mm: 150.0,
            min_height_mm: 50.0,
            max_angle_deg: 60.0,
        };
        assert!((inputs.h_min_m() - 0.05).abs() < 1e-12);
        assert!((inputs.h_max_m() - 0.2).abs() < 1e-12);
        assert!((inputs.theta_max_rad() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
    }
}
