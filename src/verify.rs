//! Comparison of a kernel's output against a reference output.

use std::fmt;

use crate::sample::Sample;

/// Outcome of comparing two buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verification {
    /// Every scalar is bit-for-bit identical.
    Passed,
    /// Every scalar is within the tolerance; carries the largest deviation seen.
    PassedWithTolerance { tolerance: f64, max_deviation: f64 },
    /// First scalar that did not match.
    Failed {
        index: usize,
        actual: f64,
        expected: f64,
    },
    /// The buffers differ in length.
    LengthMismatch { actual: usize, expected: usize },
}

impl Verification {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed | Self::PassedWithTolerance { .. })
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "Verification passed"),
            Self::PassedWithTolerance {
                tolerance,
                max_deviation,
            } => write!(
                f,
                "Verification passed with tolerance {tolerance} (max deviation {max_deviation:e})"
            ),
            Self::Failed {
                index,
                actual,
                expected,
            } => write!(
                f,
                "Verification failed at index {index}: got {actual}, expected {expected}"
            ),
            Self::LengthMismatch { actual, expected } => write!(
                f,
                "Verification failed: got {actual} values, expected {expected}"
            ),
        }
    }
}

/// Bit-for-bit comparison. `0.0` and `-0.0` are different values here, and
/// identical NaN payloads compare equal.
pub fn verify_exact<T: Sample>(actual: &[T], expected: &[T]) -> Verification {
    if actual.len() != expected.len() {
        return Verification::LengthMismatch {
            actual: actual.len(),
            expected: expected.len(),
        };
    }

    actual
        .iter()
        .zip(expected.iter())
        .position(|(a, e)| a.widen().to_bits() != e.widen().to_bits())
        .map_or(Verification::Passed, |index| Verification::Failed {
            index,
            actual: actual[index].widen(),
            expected: expected[index].widen(),
        })
}

/// Absolute-tolerance comparison: passes when `|actual - expected| <= tolerance`
/// for every scalar. Any NaN fails.
pub fn verify_tolerance<T: Sample>(
    actual: &[T],
    expected: &[T],
    tolerance: f64,
) -> Verification {
    if actual.len() != expected.len() {
        return Verification::LengthMismatch {
            actual: actual.len(),
            expected: expected.len(),
        };
    }

    let mut max_deviation = 0.0_f64;
    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let deviation = (a.widen() - e.widen()).abs();
        if deviation.is_nan() || deviation > tolerance {
            return Verification::Failed {
                index,
                actual: a.widen(),
                expected: e.widen(),
            };
        }
        max_deviation = max_deviation.max(deviation);
    }

    Verification::PassedWithTolerance {
        tolerance,
        max_deviation,
    }
}
