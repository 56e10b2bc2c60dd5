pub use super::base::*;
pub use super::error::*;
pub use super::interaction::*;
pub use super::misc::*;
pub use super::param_set::*;
pub use super::rng::*;
pub use super::sampling::*;
pub use super::spectrum::*;
pub use super::texture::*;
pub use super::traverse::*;
