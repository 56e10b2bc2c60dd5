pub mod scene_parameters;
pub mod traverse;

pub use scene_parameters::*;
pub use traverse::*;
