//! Bit-reversal permutation of an interleaved complex buffer.
//!
//! The decimation-in-time butterflies in [`super::dit`] expect their input in
//! bit-reversed order. The permutation here walks the buffer in physical
//! (scalar) positions and keeps a running reversed index without any explicit
//! bit manipulation.

/// Reorders `data` in place so that the complex sample at index
/// `bitreverse(k, log2 nn)` ends up at index `k`.
///
/// `data` must hold at least `2 * nn` scalars and `nn` must be a power of two.
/// Only the first `2 * nn` scalars are touched.
pub fn bit_reverse_interleaved<T>(data: &mut [T], nn: usize) {
    let n = nn << 1;
    // 1-based physical index of the real part of the partner sample
    let mut j = 1;

    for i in (1..n).step_by(2) {
        if j > i {
            data.swap(j - 1, i - 1);
            data.swap(j, i);
        }

        let mut m = nn;
        while m >= 2 && j > m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}
