//! Fixed hardware descriptions: rod material, rod cross-section, lead screw

mod material;
mod screw;
mod section;

pub use material::Material;
pub use screw::LeadScrew;
pub use section::RodSection;
