use crate::core::base::*;

use std::fmt;
use std::ops;

/// Number of wavelengths traced together by one spectral query.
pub const SPECTRAL_SAMPLES: usize = 4;

/// Per-lane spectral values for one query.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SampledSpectrum {
    pub c: [Float; SPECTRAL_SAMPLES],
}

impl SampledSpectrum {
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    pub fn splat(v: Float) -> Self {
        SampledSpectrum {
            c: [v; SPECTRAL_SAMPLES],
        }
    }

    pub fn is_black(&self) -> bool {
        return self.c.iter().all(|x| -> bool { *x == 0.0 });
    }
}

impl Default for SampledSpectrum {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[Float; SPECTRAL_SAMPLES]> for SampledSpectrum {
    fn from(c: [Float; SPECTRAL_SAMPLES]) -> Self {
        SampledSpectrum { c }
    }
}

impl ops::Index<usize> for SampledSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl ops::IndexMut<usize> for SampledSpectrum {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl fmt::Display for SampledSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.c.iter().map(|v| format!("{}", v)).collect();
        write!(f, "[{}]", s.join(", "))
    }
}
