pub mod create_spectrum;
pub mod discrete;

pub use create_spectrum::*;
pub use discrete::*;
