pub extern crate rustfft;

// rustfft is re-exported as an independent oracle for fft-reference tests
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Fill an interleaved complex buffer with a random signal, uniform in `[-1, 1)`
pub fn gen_random_signal<T>(data: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();
    let uniform_dist = Uniform::new(-T::one(), T::one());
    for x in data.iter_mut() {
        *x = uniform_dist.sample(&mut rng);
    }
}

/// Converts an interleaved buffer into the complex vector rustfft expects
///
/// # Panics
///
/// Panics if `data` has an odd length
pub fn to_complex<T: Float>(data: &[T]) -> Vec<Complex<T>> {
    assert_eq!(data.len() % 2, 0, "interleaved buffers hold whole samples");
    data.chunks_exact(2)
        .map(|z| Complex::new(z[0], z[1]))
        .collect()
}
