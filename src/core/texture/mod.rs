pub mod texture;

pub use texture::*;
