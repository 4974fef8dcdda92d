//! Scalar types the reference kernels operate on.

use std::fmt::{Debug, Display};

use num_traits::Float;

use crate::options::Precision;

/// A floating point scalar usable as the real or imaginary part of a sample.
///
/// Implemented for `f32` and `f64`. Angles for the twiddle recurrence are
/// evaluated in `f64` and rounded once to `Self`, which is what a C reference
/// compiled with `float` or `double` as its working type does.
pub trait Sample: Float + Debug + Display + Default + Send + Sync + 'static {
    /// The precision this type stands for in a benchmark configuration.
    const PRECISION: Precision;

    /// Round an `f64` to the nearest value of `Self`.
    fn narrow(value: f64) -> Self;

    /// Convert to `f64` without loss.
    fn widen(self) -> f64;
}

macro_rules! impl_sample_for {
    ($precision:ty, $tag:expr) => {
        impl Sample for $precision {
            const PRECISION: Precision = $tag;

            #[inline]
            fn narrow(value: f64) -> Self {
                value as $precision
            }

            #[inline]
            fn widen(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_sample_for!(f32, Precision::Float32);
impl_sample_for!(f64, Precision::Float64);
