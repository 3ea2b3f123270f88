//! Result types for lift table sizing

use serde::{Deserialize, Serialize};

/// Full sizing result at the configured travel extremes.
///
/// All fields are in display units: mm, N, kN, mN·m, mm⁴, degrees.
/// Efficiency is a dimensionless ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanismResult {
    /// Scissor rod length in mm
    pub rod_length: f64,
    /// Rod angle at the lowest platform position in degrees
    pub theta_min: f64,
    /// Rod angle at full extension in degrees (echo of input)
    pub theta_max: f64,
    /// Maximum horizontal base half-span in mm
    pub x_max: f64,

    /// Actuator force at the minimum angle in N (critical case)
    pub actuator_force_min: f64,
    /// Actuator force at the maximum angle in N
    pub actuator_force_max: f64,
    /// Rod axial force at the minimum angle in N (critical case)
    pub rod_force_min: f64,
    /// Rod axial force at the maximum angle in N
    pub rod_force_max: f64,

    /// Euler critical buckling load in kN
    pub buckling_load: f64,
    /// Buckling safety factor (critical load / rod force at minimum angle)
    pub safety_factor: f64,
    /// True iff the safety factor exceeds the configured minimum
    pub is_safe: bool,

    /// Screw drive torque at the critical angle in mN·m
    pub screw_torque: f64,
    /// Weak-axis moment of inertia of the rod section in mm⁴
    pub moment_of_inertia: f64,

    /// Mechanical efficiency at the minimum angle
    pub efficiency_min: f64,
    /// Mechanical efficiency at the maximum angle
    pub efficiency_max: f64,
}

/// One point of the swept travel-range curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GraphSample {
    /// Platform height in mm
    pub height: f64,
    /// Rod angle in degrees
    pub angle: f64,
    /// Actuator force in N
    pub actuator_force: f64,
    /// Rod axial force in N
    pub rod_force: f64,
    /// Horizontal base distance in mm
    pub horizontal_span: f64,
    /// Mechanical efficiency in percent
    pub efficiency: f64,
}
