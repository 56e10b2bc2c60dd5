pub mod surface_interaction;

pub use surface_interaction::SurfaceInteraction;
