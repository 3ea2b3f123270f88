//! Rod material properties

use serde::{Deserialize, Serialize};

/// Material properties for the scissor rods
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
}

impl Material {
    /// Create a new material with the given elastic modulus in Pa
    pub fn new(e: f64) -> Self {
        Self { e }
    }

    /// Create a standard structural steel material (ASTM A36)
    pub fn steel() -> Self {
        Self { e: 200e9 } // 200 GPa
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}
