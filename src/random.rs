use rand::{rngs::ThreadRng, thread_rng, Rng};

/// Source of uniform samples in `[0, 1)`, passed explicitly to every
/// operation that places a fruit
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`
    fn below(&mut self, bound: isize) -> isize {
        (self.next_f64() * bound as f64).floor() as isize
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// The generator used when playing
pub struct ThreadRandom(ThreadRng);

impl Default for ThreadRandom {
    fn default() -> Self {
        Self(thread_rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Endlessly cycles through a fixed list of samples, makes
/// games reproducible
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct FixedSequence {
    samples: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl FixedSequence {
    pub fn new(samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty(), "empty sample sequence");
        assert!(
            samples.iter().all(|s| (0. ..1.).contains(s)),
            "samples must be in [0, 1)"
        );
        Self { samples, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        let sample = self.samples[self.next];
        self.next = (self.next + 1) % self.samples.len();
        sample
    }
}
