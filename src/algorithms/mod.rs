//! Reference FFT kernels.
//!
//! Everything in here trusts its preconditions: lengths are not validated and
//! malformed sizes give unspecified numbers or an out-of-bounds panic. The
//! checked entry points live at the crate root.
//!
//! - [`bit_reversal`]: in-place bit-reversal permutation of interleaved samples
//! - [`dit`]: radix-2 decimation-in-time butterflies and the single-buffer FFT
//! - [`windowed`]: the sliding-window driver
//! - [`dft`]: direct DFT, used as an independent oracle

pub mod bit_reversal;
pub mod dft;
pub mod dit;
pub mod windowed;
