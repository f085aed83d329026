//! In-process sampler backed by the thread-local RNG.

use rand::Rng;

use crate::ports::ConfidenceSampler;

/// Uniform sampler using [`rand::thread_rng`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl ConfidenceSampler for ThreadRngSampler {
    fn sample_unit(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_sample_within_the_unit_interval() {
        let sampler = ThreadRngSampler;
        for _ in 0..1000 {
            let unit = sampler.sample_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }
}
