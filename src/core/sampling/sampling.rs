use crate::core::base::*;
use crate::core::rng::RNG;

pub fn shuffle<T>(samp: &mut [T], rng: &mut RNG) {
    let count = samp.len();
    for i in 0..count {
        let other = i + rng.uniform_uint32_threshold((count - i) as u32) as usize;
        samp.swap(i, other);
    }
}

pub fn uniform_sample_1d(nsamples: usize, rng: &mut RNG) -> Vec<Float> {
    return (0..nsamples).map(|_| rng.uniform_float()).collect();
}

/// One variate per stratum of `[0, 1)`, in shuffled order.
pub fn stratified_sample_1d(nsamples: usize, rng: &mut RNG, jitter: bool) -> Vec<Float> {
    let inv_nsamples = 1.0 / (nsamples as Float);
    let mut samples = Vec::with_capacity(nsamples);
    for i in 0..nsamples {
        let delta = if jitter { rng.uniform_float() } else { 0.5 };
        samples.push(Float::min(
            ((i as Float) + delta) * inv_nsamples,
            ONE_MINUS_EPSILON,
        ));
    }
    shuffle(&mut samples, rng);
    return samples;
}
