use crate::core::prelude::*;

use log::*;
use rayon::prelude::*;
use std::fmt;

const CLASS_NAME: &str = "DiscreteSpectrum";

/// Spectrum whose energy sits on a finite set of wavelengths (laser lines,
/// narrow band filters). It has no continuous density: `eval` and
/// `pdf_spectrum` are zero everywhere, and sampling picks one of the lines
/// with probability proportional to its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSpectrum {
    wavelengths: Vec<Float>,
    distr: DiscreteDistribution,
}

/// Validates a (wavelengths, weights) pair and builds the distribution
/// over the weights. Nothing is committed here.
fn build_distribution(
    wavelengths: &[Float],
    weights: &[Float],
) -> Result<DiscreteDistribution, SpectrumError> {
    if weights.len() != wavelengths.len() {
        return Err(SpectrumError::SizeMismatch {
            expected: wavelengths.len(),
            actual: weights.len(),
        });
    }
    let distr = DiscreteDistribution::new(weights)?;
    if wavelengths.windows(2).any(|w| w[1] < w[0]) {
        warn!(
            "{}: wavelengths {} are not in ascending order",
            CLASS_NAME,
            format_floats(wavelengths)
        );
    }
    return Ok(distr);
}

impl DiscreteSpectrum {
    /// Missing weights default to one per wavelength.
    pub fn new(wavelengths: &[Float], weights: Option<&[Float]>) -> Result<Self, SpectrumError> {
        let distr = match weights {
            Some(weights) => build_distribution(wavelengths, weights)?,
            None => build_distribution(wavelengths, &vec![1.0; wavelengths.len()])?,
        };
        debug!(
            "Created {} with {} wavelengths, total weight {}",
            CLASS_NAME,
            wavelengths.len(),
            distr.sum()
        );
        Ok(DiscreteSpectrum {
            wavelengths: Vec::from(wavelengths),
            distr,
        })
    }

    pub fn from_params(params: &ParamSet) -> Result<Self, SpectrumError> {
        let wavelengths = params
            .find_float_list("wavelengths")?
            .ok_or_else(|| SpectrumError::MissingParameter(String::from("wavelengths")))?;
        let weights = params.find_float_list("weights")?;
        let s = Self::new(&wavelengths, weights.as_deref())?;
        params.report_unused();
        return Ok(s);
    }

    pub fn wavelengths(&self) -> &[Float] {
        return &self.wavelengths;
    }

    pub fn weights(&self) -> &[Float] {
        return self.distr.pmf();
    }

    pub fn distribution(&self) -> &DiscreteDistribution {
        return &self.distr;
    }

    /// Replaces both arrays together. On error the current state is kept.
    pub fn set_parameters(
        &mut self,
        wavelengths: &[Float],
        weights: &[Float],
    ) -> Result<(), SpectrumError> {
        let distr = build_distribution(wavelengths, weights)?;
        self.wavelengths = Vec::from(wavelengths);
        self.distr = distr;
        debug!(
            "Updated {} to {} wavelengths, total weight {}",
            CLASS_NAME,
            self.wavelengths.len(),
            self.distr.sum()
        );
        Ok(())
    }

    /// Returns the sampled wavelength and its normalized probability mass.
    #[inline]
    pub fn sample(&self, u: Float) -> (Float, Float) {
        let (index, pmf) = self.distr.sample_pmf(u);
        return (self.wavelengths[index], pmf);
    }

    /// Samples every variate of `samples` independently, in parallel.
    pub fn sample_batch(&self, samples: &[Float]) -> Vec<(Float, Float)> {
        return samples.par_iter().map(|u| self.sample(*u)).collect();
    }
}

impl ContinuousSpectrum for DiscreteSpectrum {
    // Dirac spectrum: zero for every wavelength, including the lines.
    fn eval(&self, _si: &SurfaceInteraction) -> SampledSpectrum {
        return SampledSpectrum::zero();
    }

    fn pdf_spectrum(&self, _si: &SurfaceInteraction) -> SampledWavelengths {
        return SampledWavelengths::zero();
    }

    fn eval_1(&self, _si: &SurfaceInteraction) -> Result<Float, SpectrumError> {
        return Err(SpectrumError::unimplemented(CLASS_NAME, "eval_1"));
    }

    fn eval_3(&self, _si: &SurfaceInteraction) -> Result<[Float; 3], SpectrumError> {
        return Err(SpectrumError::unimplemented(CLASS_NAME, "eval_3"));
    }

    fn mean(&self) -> Result<Float, SpectrumError> {
        return Err(SpectrumError::unimplemented(CLASS_NAME, "mean"));
    }
}

impl SpectrumSampling for DiscreteSpectrum {
    fn sample_spectrum(
        &self,
        _si: &SurfaceInteraction,
        sample: &SampledWavelengths,
    ) -> (SampledWavelengths, SampledSpectrum) {
        let mut wavelengths = SampledWavelengths::zero();
        let mut weights = SampledSpectrum::zero();
        for i in 0..SPECTRAL_SAMPLES {
            let (lambda, weight) = self.sample(sample[i]);
            wavelengths[i] = lambda;
            weights[i] = weight;
        }
        return (wavelengths, weights);
    }
}

impl Traversable for DiscreteSpectrum {
    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_parameter(
            "wavelengths",
            &self.wavelengths,
            ParamFlags::NonDifferentiable,
        );
        callback.put_parameter("weights", self.distr.pmf(), ParamFlags::NonDifferentiable);
    }

    fn parameters_changed(&mut self, updates: &ParameterUpdates) -> Result<(), SpectrumError> {
        if let Some(key) = updates
            .keys()
            .find(|k| *k != "wavelengths" && *k != "weights")
        {
            return Err(SpectrumError::UnknownParameter(key.clone()));
        }
        let wavelengths = updates
            .get("wavelengths")
            .cloned()
            .unwrap_or_else(|| self.wavelengths.clone());
        let weights = updates
            .get("weights")
            .cloned()
            .unwrap_or_else(|| Vec::from(self.distr.pmf()));
        return self.set_parameters(&wavelengths, &weights);
    }
}

impl SpectrumTexture for DiscreteSpectrum {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }
}

impl fmt::Display for DiscreteSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distr = format!("{}", self.distr);
        writeln!(f, "{}[", CLASS_NAME)?;
        writeln!(f, "  wavelengths = {},", format_floats(&self.wavelengths))?;
        writeln!(f, "  distr = {},", indent(&distr, 2))?;
        write!(f, "]")
    }
}

pub fn create_discrete_spectrum(
    params: &ParamSet,
) -> Result<Box<dyn SpectrumTexture>, SpectrumError> {
    let s = DiscreteSpectrum::from_params(params)?;
    return Ok(Box::new(s));
}
