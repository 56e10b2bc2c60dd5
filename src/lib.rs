pub mod core;
pub mod spectra;
