//! Pantograph Solver - sizing calculator for pantographic (scissor) lift tables
//!
//! Given the load, platform footprint, vertical travel, minimum height and
//! maximum rod angle, this library derives:
//! - the scissor linkage geometry (rod length, angle range, base span)
//! - actuator and rod forces across the travel range
//! - an Euler buckling safety factor for the rod
//! - the actuator lead-screw drive torque
//!
//! ## Example
//! ```rust
//! use pantograph_solver::prelude::*;
//!
//! let calculator = MechanismCalculator::default();
//!
//! let inputs = MechanismInputs {
//!     load_kg: 8.0,
//!     width_mm: 200.0,
//!     depth_mm: 200.0,
//!     vertical_travel_mm: 150.0,
//!     min_height_mm: 50.0,
//!     max_angle_deg: 60.0,
//! };
//!
//! // Validate before computing
//! let report = calculator.validate(&inputs);
//! assert!(report.is_valid);
//!
//! // Full result set at the travel extremes
//! let results = calculator.calculate_all(&inputs).unwrap();
//! assert!(results.is_safe);
//!
//! // Force/efficiency curve across the travel range
//! let curve = calculator.generate_graph_data(&inputs, DEFAULT_GRAPH_STEPS);
//! assert_eq!(curve.len(), DEFAULT_GRAPH_STEPS);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod hardware;
pub mod inputs;
pub mod results;
pub mod validation;

// Re-export common types
pub mod prelude {
    pub use crate::calculator::{MechanismCalculator, DEFAULT_GRAPH_STEPS};
    pub use crate::config::CalculatorConfig;
    pub use crate::error::{PantographError, PantographResult};
    pub use crate::hardware::{LeadScrew, Material, RodSection};
    pub use crate::inputs::MechanismInputs;
    pub use crate::results::{GraphSample, MechanismResult};
    pub use crate::validation::ValidationReport;
}
