//! Reference radix-2 FFT kernels.
//!
//! These are the plain, sequential versions of the transforms that accelerated
//! implementations are checked against, bit for bit or within a tolerance.
//! Buffers hold interleaved complex samples (`[re0, im0, re1, im1, …]`) and are
//! transformed in place. No `1/N` scaling is applied by the forward transform.
//!
//! The functions at the crate root validate their arguments and return
//! [`FftError`]; the unchecked kernels they wrap live in [`algorithms`].
//!
//! ```
//! use fft_reference::fft;
//!
//! let mut data = [1.0_f64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! fft(&mut data).unwrap();
//! assert_eq!(data, [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
//! ```

#[cfg(feature = "complex-nums")]
use num_complex::Complex;

use crate::algorithms::bit_reversal::bit_reverse_interleaved;
use crate::algorithms::dit::fft_dit;
use crate::algorithms::windowed::{fft_sliding, window_count, windowed_output_len};

pub mod algorithms;
mod error;
pub mod io;
pub mod options;
mod sample;
mod twiddles;
pub mod utils;
pub mod verify;

pub use crate::error::{FftError, FileError};
pub use crate::options::{Direction, Precision};
pub use crate::sample::Sample;

/// Number of complex samples in an interleaved buffer of `len` scalars, if
/// that number is a power of two.
fn complex_len(len: usize) -> Result<usize, FftError> {
    let nn = len / 2;
    if len % 2 != 0 || !nn.is_power_of_two() {
        return Err(FftError::InvalidDimension { len });
    }
    Ok(nn)
}

/// Forward FFT of an interleaved buffer, in place.
///
/// # Errors
///
/// [`FftError::InvalidDimension`] unless `data.len()` is `2 * N` with `N` a
/// power of two.
pub fn fft<T: Sample>(data: &mut [T]) -> Result<(), FftError> {
    fft_with_direction(data, Direction::Forward)
}

/// FFT of an interleaved buffer in the given direction, in place and
/// unnormalized.
///
/// # Errors
///
/// [`FftError::InvalidDimension`] unless `data.len()` is `2 * N` with `N` a
/// power of two.
pub fn fft_with_direction<T: Sample>(
    data: &mut [T],
    direction: Direction,
) -> Result<(), FftError> {
    let nn = complex_len(data.len())?;
    fft_dit(data, nn, direction);
    Ok(())
}

/// Inverse FFT, scaled by `1/N` so that `ifft(fft(x)) ≈ x`.
///
/// # Errors
///
/// [`FftError::InvalidDimension`] unless `data.len()` is `2 * N` with `N` a
/// power of two.
pub fn ifft<T: Sample>(data: &mut [T]) -> Result<(), FftError> {
    let nn = complex_len(data.len())?;
    fft_dit(data, nn, Direction::Reverse);

    let scale = T::one() / T::narrow(nn as f64);
    data.iter_mut().for_each(|x| *x = *x * scale);
    Ok(())
}

/// Bit-reversal permutation of an interleaved buffer, in place.
///
/// # Errors
///
/// [`FftError::InvalidDimension`] unless `data.len()` is `2 * N` with `N` a
/// power of two.
pub fn bit_reverse<T>(data: &mut [T]) -> Result<(), FftError> {
    let nn = complex_len(data.len())?;
    bit_reverse_interleaved(data, nn);
    Ok(())
}

/// Sliding-window forward FFT of `input` into `output`.
///
/// `window` counts scalars, so each window spans `window / 2` complex samples.
/// The window advances one complex sample at a time; see
/// [`algorithms::windowed`] for the output layout. Returns the number of
/// windows transformed.
///
/// # Errors
///
/// - [`FftError::InvalidWindow`] if `input` has an odd length, `window / 2` is
///   not a power of two, or `window > input.len()`
/// - [`FftError::BufferSizeMismatch`] if `output` is shorter than
///   `(input.len() - window + 1) * window`
pub fn fft_windowed<T: Sample>(
    input: &[T],
    window: usize,
    output: &mut [T],
) -> Result<usize, FftError> {
    let input_len = input.len();
    if input_len % 2 != 0 || window > input_len || complex_len(window).is_err() {
        return Err(FftError::InvalidWindow { window, input_len });
    }

    let expected = windowed_output_len(input_len, window);
    if output.len() < expected {
        return Err(FftError::BufferSizeMismatch {
            expected,
            actual: output.len(),
        });
    }

    fft_sliding(input, window, &mut output[..expected], Direction::Forward);
    Ok(window_count(input_len, window))
}

/// FFT of a signal stored as separate real and imaginary parts.
///
/// The parts are interleaved into a scratch buffer, transformed, and split
/// back, so the result is bit-identical to [`fft_with_direction`] on the
/// interleaved form.
///
/// # Errors
///
/// - [`FftError::BufferSizeMismatch`] if `reals.len() != imags.len()`
/// - [`FftError::InvalidDimension`] unless the length is a power of two
pub fn fft_split<T: Sample>(
    reals: &mut [T],
    imags: &mut [T],
    direction: Direction,
) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::BufferSizeMismatch {
            expected: reals.len(),
            actual: imags.len(),
        });
    }

    let mut data = utils::interleave(reals, imags);
    fft_with_direction(&mut data, direction)?;

    let (re, im) = utils::deinterleave(&data);
    reals.copy_from_slice(&re);
    imags.copy_from_slice(&im);
    Ok(())
}

/// FFT of a slice of complex numbers, in place, without copying.
///
/// # Errors
///
/// [`FftError::InvalidDimension`] unless `signal.len()` is a power of two.
#[cfg(feature = "complex-nums")]
pub fn fft_complex<T: Sample + bytemuck::Pod>(
    signal: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    fft_with_direction(utils::complex_as_interleaved_mut(signal), direction)
}
