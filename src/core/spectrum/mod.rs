pub mod sampled;
pub mod wavelengths;

pub use sampled::*;
pub use wavelengths::*;
