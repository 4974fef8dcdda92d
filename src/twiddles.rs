use std::f64::consts::PI;

use crate::options::Direction;
use crate::sample::Sample;

/// Twiddle factors of one butterfly stage, produced by the half-angle
/// recurrence
///
/// ```text
/// wpr = -2 sin²(θ/2),  wpi = sin θ
/// wr' = wr + (wr·wpr - wi·wpi)
/// wi' = wi + (wi·wpr + wr·wpi)
/// ```
///
/// starting from `(1, 0)`. Rounding error accumulates across the stage and is
/// part of the reference output, so the factors must never be recomputed
/// from `sin`/`cos` directly.
pub(crate) struct Twiddles<T> {
    wr: T,
    wi: T,
    wpr: T,
    wpi: T,
}

impl<T: Sample> Twiddles<T> {
    /// `mmax` is the stage width in scalars, i.e. twice the number of complex
    /// samples spanned by one butterfly group.
    pub fn new(mmax: usize, direction: Direction) -> Self {
        let theta = T::narrow(direction.sign() * (2.0 * PI / mmax as f64));
        let wtemp = T::narrow((0.5 * theta.widen()).sin());
        let wpr = T::narrow(-2.0) * wtemp * wtemp;
        let wpi = T::narrow(theta.widen().sin());
        Self {
            wr: T::one(),
            wi: T::zero(),
            wpr,
            wpi,
        }
    }
}

impl<T: Sample> Iterator for Twiddles<T> {
    type Item = (T, T);

    #[inline]
    fn next(&mut self) -> Option<(T, T)> {
        let w = (self.wr, self.wi);

        let wtemp = self.wr;
        self.wr = self.wr + (self.wr * self.wpr - self.wi * self.wpi);
        self.wi = self.wi + (self.wi * self.wpr + wtemp * self.wpi);

        Some(w)
    }
}
