use crate::core::base::*;
use crate::core::error::*;
use crate::core::misc::*;

use std::fmt;

/// Discrete distribution over `size()` entries, sampled by inverting its
/// cumulative sums.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiscreteDistribution {
    pmf: Vec<Float>,
    cdf: Vec<Float>,
    sum: Float,
    normalization: Float,
}

fn compute_cdf(pmf: &[Float]) -> Result<(Vec<Float>, Float), SpectrumError> {
    if pmf.is_empty() {
        return Err(SpectrumError::InvalidWeights(String::from(
            "empty distribution",
        )));
    }
    // accumulate in double precision
    let mut sum = 0.0_f64;
    let mut cdf = Vec::with_capacity(pmf.len());
    for (i, v) in pmf.iter().enumerate() {
        if !v.is_finite() || *v < 0.0 {
            let msg = format!(
                "entry {} is {}, entries must be non-negative and finite",
                i, v
            );
            return Err(SpectrumError::InvalidWeights(msg));
        }
        sum += *v as f64;
        cdf.push(sum as Float);
    }
    if sum <= 0.0 {
        return Err(SpectrumError::InvalidWeights(String::from(
            "no probability mass found",
        )));
    }
    if !(sum as Float).is_finite() {
        return Err(SpectrumError::InvalidWeights(String::from(
            "total mass overflows",
        )));
    }
    return Ok((cdf, sum as Float));
}

/// Smallest index `i` with `cdf[i] >= value`, clamped to the last entry.
#[inline(always)]
fn find_interval_cdf(cdf: &[Float], value: Float) -> usize {
    let mut first = 0usize;
    let mut len = cdf.len();
    while len > 0 {
        let half = len >> 1;
        let middle = first + half;
        if cdf[middle] < value {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    return usize::min(first, cdf.len() - 1);
}

impl DiscreteDistribution {
    pub fn new(pmf: &[Float]) -> Result<Self, SpectrumError> {
        let (cdf, sum) = compute_cdf(pmf)?;
        Ok(DiscreteDistribution {
            pmf: Vec::from(pmf),
            cdf,
            sum,
            normalization: 1.0 / sum,
        })
    }

    pub fn size(&self) -> usize {
        return self.pmf.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.pmf.is_empty();
    }

    pub fn pmf(&self) -> &[Float] {
        return &self.pmf;
    }

    pub fn cdf(&self) -> &[Float] {
        return &self.cdf;
    }

    pub fn sum(&self) -> Float {
        return self.sum;
    }

    pub fn normalization(&self) -> Float {
        return self.normalization;
    }

    #[inline]
    pub fn eval_pmf(&self, index: usize) -> Float {
        return self.pmf[index];
    }

    #[inline]
    pub fn eval_pmf_normalized(&self, index: usize) -> Float {
        return self.pmf[index] * self.normalization;
    }

    #[inline]
    pub fn eval_cdf(&self, index: usize) -> Float {
        return self.cdf[index];
    }

    #[inline]
    pub fn eval_cdf_normalized(&self, index: usize) -> Float {
        return self.cdf[index] * self.normalization;
    }

    /// Maps `u` in `[0, 1]` to an entry. A value landing exactly on the
    /// boundary between two entries selects the lower one.
    #[inline(always)]
    pub fn sample(&self, u: Float) -> usize {
        return find_interval_cdf(&self.cdf, u * self.sum);
    }

    //index, pmf
    #[inline(always)]
    pub fn sample_pmf(&self, u: Float) -> (usize, Float) {
        let index = self.sample(u);
        return (index, self.eval_pmf_normalized(index));
    }

    //index, remapped
    #[inline(always)]
    pub fn sample_reuse(&self, u: Float) -> (usize, Float) {
        let (index, remapped, _) = self.sample_reuse_pmf(u);
        return (index, remapped);
    }

    /// Like [`Self::sample_pmf`], also returning the position of `u` inside
    /// the chosen entry's span, rescaled to `[0, 1]`, for reuse as a fresh
    /// uniform variate.
    #[inline(always)]
    pub fn sample_reuse_pmf(&self, u: Float) -> (usize, Float, Float) {
        let value = u * self.sum;
        let index = find_interval_cdf(&self.cdf, value);
        let cdf0 = if index > 0 { self.cdf[index - 1] } else { 0.0 };
        let span = self.pmf[index];
        let remapped = if span > 0.0 {
            Float::clamp((value - cdf0) / span, 0.0, 1.0)
        } else {
            0.0
        };
        return (index, remapped, self.eval_pmf_normalized(index));
    }
}

impl fmt::Display for DiscreteDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DiscreteDistribution[")?;
        writeln!(f, "  size = {},", self.size())?;
        writeln!(f, "  sum = {},", self.sum)?;
        writeln!(f, "  pmf = {}", format_floats(&self.pmf))?;
        write!(f, "]")
    }
}
