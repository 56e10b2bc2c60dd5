use crate::core::spectrum::*;

/// The part of a surface hit a spectrum texture is allowed to look at.
#[derive(Default, Clone, Debug)]
pub struct SurfaceInteraction {
    pub wavelengths: SampledWavelengths,
}

impl SurfaceInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wavelengths(wavelengths: &SampledWavelengths) -> Self {
        SurfaceInteraction {
            wavelengths: *wavelengths,
        }
    }
}
