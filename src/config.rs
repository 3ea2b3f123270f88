//! Calculator configuration: physical constants and fixed hardware

use serde::{Deserialize, Serialize};

use crate::hardware::{LeadScrew, Material, RodSection};

/// Fixed constants and hardware bound to a calculator at construction.
///
/// Read-only once the calculator is built; substitute an alternate material or
/// screw by constructing a new calculator, never by mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
    /// Rod material
    pub material: Material,
    /// Rod cross-section
    pub rod_section: RodSection,
    /// Actuator lead screw
    pub screw: LeadScrew,
    /// Effective length factor K for Euler buckling (1.0 = pinned-pinned)
    pub effective_length_factor: f64,
    /// Buckling safety factor below which the design is flagged unsafe
    pub min_safety_factor: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            material: Material::steel(),
            rod_section: RodSection::default(),
            screw: LeadScrew::default(),
            effective_length_factor: 1.0,
            min_safety_factor: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.material.e, 200e9);
        assert_eq!(config.effective_length_factor, 1.0);
        assert_eq!(config.min_safety_factor, 3.0);
    }
}
