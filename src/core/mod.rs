pub mod api;
pub mod base;
pub mod error;
pub mod interaction;
pub mod misc;
pub mod param_set;
pub mod parser;
pub mod prelude;
pub mod rng;
pub mod sampling;
pub mod spectrum;
pub mod texture;
pub mod traverse;
