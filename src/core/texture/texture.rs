use crate::core::base::*;
use crate::core::error::*;
use crate::core::interaction::*;
use crate::core::spectrum::*;
use crate::core::traverse::*;

use std::fmt::Display;

/// Evaluation of a spectrum as a function of continuous wavelength.
pub trait ContinuousSpectrum {
    fn eval(&self, si: &SurfaceInteraction) -> SampledSpectrum;

    /// Density of `sample_spectrum` with respect to wavelength, per lane.
    fn pdf_spectrum(&self, si: &SurfaceInteraction) -> SampledWavelengths;

    /// Monochromatic evaluation.
    fn eval_1(&self, si: &SurfaceInteraction) -> Result<Float, SpectrumError>;

    /// Evaluation at RGB resolution.
    fn eval_3(&self, si: &SurfaceInteraction) -> Result<[Float; 3], SpectrumError>;

    fn mean(&self) -> Result<Float, SpectrumError>;
}

/// Importance sampling of wavelengths.
pub trait SpectrumSampling {
    /// Maps one uniform variate per lane to a wavelength and the weight
    /// that goes with it.
    fn sample_spectrum(
        &self,
        si: &SurfaceInteraction,
        sample: &SampledWavelengths,
    ) -> (SampledWavelengths, SampledSpectrum);
}

pub trait SpectrumTexture:
    ContinuousSpectrum + SpectrumSampling + Traversable + Display + Send + Sync
{
    fn class_name(&self) -> &'static str;
}
