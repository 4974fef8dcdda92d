//! Direct O(N²) DFT over interleaved buffers.
//!
//! Too slow for anything but verification. It evaluates every twiddle factor
//! from `sin`/`cos` in `f64`, which makes it independent of the recurrence the
//! FFT uses and a useful oracle when no golden output file exists.

use std::f64::consts::PI;

use crate::options::Direction;
use crate::sample::Sample;

/// Computes the unnormalized DFT of the interleaved `input` into `output`.
///
/// Accumulation happens in `f64`; each output scalar is rounded once.
///
/// # Panics
///
/// Panics if `input.len() != output.len()` or the length is odd.
pub fn naive_dft<T: Sample>(input: &[T], output: &mut [T], direction: Direction) {
    assert_eq!(input.len(), output.len());
    assert_eq!(input.len() % 2, 0, "interleaved buffers hold whole samples");

    let big_n = input.len() / 2;
    let angle_mult = direction.sign() * 2.0 * PI / big_n as f64;

    for (k, out) in output.chunks_exact_mut(2).enumerate() {
        let (mut acc_re, mut acc_im) = (0.0_f64, 0.0_f64);
        for (t, z) in input.chunks_exact(2).enumerate() {
            // k * t can be large, reduce it first to keep the angle accurate
            let angle = angle_mult * ((k * t) % big_n) as f64;
            let (w_im, w_re) = angle.sin_cos();
            let (z_re, z_im) = (z[0].widen(), z[1].widen());
            acc_re += z_re * w_re - z_im * w_im;
            acc_im += z_re * w_im + z_im * w_re;
        }
        out[0] = T::narrow(acc_re);
        out[1] = T::narrow(acc_im);
    }
}
