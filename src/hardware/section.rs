//! Rod cross-section properties

use serde::{Deserialize, Serialize};

/// Rectangular flat-bar cross-section for the scissor rods
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RodSection {
    /// Bar width in m
    pub width: f64,
    /// Bar thickness in m
    pub thickness: f64,
}

impl RodSection {
    /// Create a rectangular flat-bar section from its two dimensions in m
    pub fn flat_bar(width: f64, thickness: f64) -> Self {
        Self { width, thickness }
    }

    /// Cross-sectional area in m²
    pub fn area(&self) -> f64 {
        self.width * self.thickness
    }

    /// Weak-axis moment of inertia in m⁴
    ///
    /// Buckling governs about the weak axis, so the larger dimension is taken
    /// as the bending width and the smaller as the height: I = b·h³/12.
    pub fn moment_of_inertia(&self) -> f64 {
        let b = self.width.max(self.thickness);
        let h = self.width.min(self.thickness);
        b * h.powi(3) / 12.0
    }
}

impl Default for RodSection {
    fn default() -> Self {
        // 20mm x 3mm flat bar
        Self::flat_bar(0.020, 0.003)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_axis_inertia() {
        let section = RodSection::flat_bar(0.020, 0.003);
        let expected = 0.020 * 0.003_f64.powi(3) / 12.0;
        assert!((section.moment_of_inertia() - expected).abs() < 1e-18);
    }

    #[test]
    fn test_inertia_orientation_independent() {
        // Swapping the dimensions must not change the governing inertia
        let a = RodSection::flat_bar(0.020, 0.003);
        let b = RodSection::flat_bar(0.003, 0.020);
        assert_eq!(a.moment_of_inertia(), b.moment_of_inertia());
    }

    #[test]
    fn test_default_section_inertia_mm4() {
        // 20x3mm bar: I = 20 * 3^3 / 12 = 45 mm⁴
        let i_mm4 = RodSection::default().moment_of_inertia() * 1e12;
        assert!((i_mm4 - 45.0).abs() < 1e-9);
    }
}
