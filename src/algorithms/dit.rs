//! Decimation-in-Time (DIT) FFT Implementation
//!
//! Input is bit-reversed first, then combined by radix-2 butterflies from the
//! smallest stage width up to the full buffer. Output is in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to the interleaved buffer
//! 2. Start with butterflies of width 2 (one complex sample per half)
//! 3. Double the width each stage until it spans the whole buffer, after
//!    `log2(N)` stages
//!
//! Twiddle factors come from the half-angle recurrence in
//! [`crate::twiddles`]. No `1/N` scaling is applied in either direction.
use crate::algorithms::bit_reversal::bit_reverse_interleaved;
use crate::options::Direction;
use crate::sample::Sample;
use crate::twiddles::Twiddles;

/// Runs every butterfly stage over the first `2 * nn` scalars of `data`,
/// which must already be in bit-reversed order.
///
/// Indices below follow the classic 1-based formulation: `i` and `j` address
/// the real part of a sample at `i - 1` and its imaginary part at `i`.
pub fn butterfly_stages<T: Sample>(data: &mut [T], nn: usize, direction: Direction) {
    let n = nn << 1;
    let mut mmax = 2;

    while n > mmax {
        let istep = mmax << 1;
        let twiddles = Twiddles::<T>::new(mmax, direction);

        for (m, (wr, wi)) in (1..mmax).step_by(2).zip(twiddles) {
            for i in (m..=n).step_by(istep) {
                let j = i + mmax;
                let tempr = wr * data[j - 1] - wi * data[j];
                let tempi = wr * data[j] + wi * data[j - 1];

                data[j - 1] = data[i - 1] - tempr;
                data[j] = data[i] - tempi;
                data[i - 1] = data[i - 1] + tempr;
                data[i] = data[i] + tempi;
            }
        }

        mmax = istep;
    }
}

/// In-place DIT FFT over the first `2 * nn` scalars of `data`.
///
/// This is the unchecked reference kernel: `nn` must be a power of two and
/// `data.len() >= 2 * nn`. A shorter buffer panics on indexing; a
/// non-power-of-two `nn` silently produces meaningless output.
pub fn fft_dit<T: Sample>(data: &mut [T], nn: usize, direction: Direction) {
    bit_reverse_interleaved(data, nn);
    butterfly_stages(data, nn, direction);
}
