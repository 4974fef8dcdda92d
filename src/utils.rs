//! Utility functions such as interleave/deinterleave

#[cfg(feature = "complex-nums")]
use num_complex::Complex;

#[cfg(feature = "complex-nums")]
use bytemuck::{cast_slice, cast_slice_mut, Pod};

/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])`
///
/// A trailing odd element is dropped.
#[multiversion::multiversion(
    targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    ))]
pub fn deinterleave<T: Copy + Default>(input: &[T]) -> (Vec<T>, Vec<T>) {
    let out_len = input.len() / 2;
    let mut out_even = vec![T::default(); out_len];
    let mut out_odd = vec![T::default(); out_len];

    input
        .chunks_exact(2)
        .zip(out_even.iter_mut())
        .zip(out_odd.iter_mut())
        .for_each(|((pair, even), odd)| {
            *even = pair[0];
            *odd = pair[1];
        });

    (out_even, out_odd)
}

/// Writes `reals` and `imags` into `output` as `[re0, im0, re1, im1, …]`.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or `output.len() != 2 * reals.len()`.
#[multiversion::multiversion(
    targets(
    "x86_64+avx2+fma", // x86_64-v3
    "x86_64+sse4.2", // x86_64-v2
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    ))]
pub fn interleave_into<T: Copy>(reals: &[T], imags: &[T], output: &mut [T]) {
    assert_eq!(reals.len(), imags.len());
    assert_eq!(output.len(), reals.len() * 2);

    output
        .chunks_exact_mut(2)
        .zip(reals.iter().zip(imags.iter()))
        .for_each(|(pair, (re, im))| {
            pair[0] = *re;
            pair[1] = *im;
        });
}

/// Combines separate real and imaginary slices into one interleaved vector.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn interleave<T: Copy + Default>(reals: &[T], imags: &[T]) -> Vec<T> {
    let mut output = vec![T::default(); reals.len() * 2];
    interleave_into(reals, imags, &mut output);
    output
}

/// Views a slice of complex numbers as its interleaved scalars.
#[cfg(feature = "complex-nums")]
pub fn complex_as_interleaved<T: Pod>(signal: &[Complex<T>]) -> &[T] {
    cast_slice(signal)
}

/// Mutable view of a slice of complex numbers as its interleaved scalars.
#[cfg(feature = "complex-nums")]
pub fn complex_as_interleaved_mut<T: Pod>(signal: &mut [Complex<T>]) -> &mut [T] {
    cast_slice_mut(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_test_vec(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    /// Slow but obviously correct implementation of deinterleaving,
    /// to be used in tests
    fn deinterleave_naive<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
        input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
    }

    #[test]
    fn deinterleaving_correctness() {
        for len in [0, 1, 2, 3, 15, 16, 17, 127, 128, 129, 130, 135, 100500] {
            let input = gen_test_vec(len);
            let (naive_a, naive_b) = deinterleave_naive(&input);
            let (opt_a, opt_b) = deinterleave(&input);
            assert_eq!(naive_a, opt_a);
            assert_eq!(naive_b, opt_b);
        }
    }

    #[test]
    fn interleave_inverts_deinterleave() {
        for len in [0, 2, 16, 130, 4096] {
            let input = gen_test_vec(len);
            let (reals, imags) = deinterleave(&input);
            assert_eq!(interleave(&reals, &imags), input);
        }
    }

    #[test]
    #[should_panic]
    fn interleave_rejects_mismatched_halves() {
        interleave(&[1.0, 2.0], &[3.0]);
    }

    #[cfg(feature = "complex-nums")]
    #[test]
    fn complex_view_is_interleaved() {
        let mut complex_vec = vec![
            Complex::new(1.0_f64, 2.0),
            Complex::new(3.0, 4.0),
            Complex::new(5.0, 6.0),
        ];

        assert_eq!(
            complex_as_interleaved(&complex_vec),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );

        complex_as_interleaved_mut(&mut complex_vec)[3] = -4.0;
        assert_eq!(complex_vec[1], Complex::new(3.0, -4.0));
    }
}
