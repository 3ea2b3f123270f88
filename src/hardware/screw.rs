//! Actuator lead screw properties

use serde::{Deserialize, Serialize};

/// Lead screw driving the actuator carriage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeadScrew {
    /// Nominal thread diameter in m
    pub nominal_diameter: f64,
    /// Thread pitch in m
    pub pitch: f64,
    /// Mean thread diameter in m
    pub mean_diameter: f64,
    /// Thread friction coefficient
    pub friction: f64,
}

impl LeadScrew {
    /// Create a lead screw from its thread geometry (m) and friction coefficient
    pub fn new(nominal_diameter: f64, pitch: f64, mean_diameter: f64, friction: f64) -> Self {
        Self {
            nominal_diameter,
            pitch,
            mean_diameter,
            friction,
        }
    }

    /// Drive torque in N·m required to push the given axial force in N
    ///
    /// Mechanical-advantage term plus a constant friction term:
    /// T = F·p/(2π) + μ·d_m/2.
    pub fn torque(&self, axial_force: f64) -> f64 {
        let mechanical_advantage = self.pitch / (2.0 * std::f64::consts::PI);
        let friction_torque = self.friction * self.mean_diameter / 2.0;
        axial_force * mechanical_advantage + friction_torque
    }
}

impl Default for LeadScrew {
    fn default() -> Self {
        // Tr10x2 screw: 10mm nominal, 2mm pitch, 9mm mean diameter
        Self::new(0.010, 0.002, 0.009, 0.2)
    }
}
