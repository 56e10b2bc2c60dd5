use super::sampled::SPECTRAL_SAMPLES;
use crate::core::base::*;

use std::fmt;
use std::ops;

/// Wavelengths (one per lane) carried by a spectral query.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SampledWavelengths {
    pub lambda: [Float; SPECTRAL_SAMPLES],
}

impl SampledWavelengths {
    pub fn splat(v: Float) -> Self {
        SampledWavelengths {
            lambda: [v; SPECTRAL_SAMPLES],
        }
    }

    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    pub fn len(&self) -> usize {
        SPECTRAL_SAMPLES
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Float> {
        self.lambda.iter()
    }
}

impl Default for SampledWavelengths {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[Float; SPECTRAL_SAMPLES]> for SampledWavelengths {
    fn from(lambda: [Float; SPECTRAL_SAMPLES]) -> Self {
        SampledWavelengths { lambda }
    }
}

impl ops::Index<usize> for SampledWavelengths {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.lambda[i]
    }
}

impl ops::IndexMut<usize> for SampledWavelengths {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.lambda[i]
    }
}

impl fmt::Display for SampledWavelengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.lambda.iter().map(|v| format!("{}", v)).collect();
        write!(f, "[{}]", s.join(", "))
    }
}
