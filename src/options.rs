//! Run-time configuration shared by the kernels and the benchmark harness.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Scalar precision of every buffer handed to the kernels in one run.
///
/// The kernels themselves are generic over [`crate::Sample`]; this value is how
/// a harness picks which instantiation to drive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// IEEE-754 binary32
    #[default]
    Float32,
    /// IEEE-754 binary64
    Float64,
}

impl Precision {
    /// Size of one scalar in bytes.
    pub const fn size_of(self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float32 => "f32".fmt(f),
            Self::Float64 => "f64".fmt(f),
        }
    }
}

/// Returned when a precision name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown precision `{0}`, expected one of: f32, float, f64, double")]
pub struct ParsePrecisionError(pub String);

impl FromStr for Precision {
    type Err = ParsePrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f32" | "float" | "float32" => Ok(Self::Float32),
            "f64" | "double" | "float64" => Ok(Self::Float64),
            _ => Err(ParsePrecisionError(s.to_owned())),
        }
    }
}

/// Reverse is for running the inverse transform,
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    /// `theta = -2π / mmax`
    #[default]
    Forward = 1,
    /// `theta = +2π / mmax`
    Reverse = -1,
}

impl Direction {
    /// Sign applied to the stage angle.
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Reverse => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_precision() {
        assert_eq!("f32".parse::<Precision>(), Ok(Precision::Float32));
        assert_eq!("Double".parse::<Precision>(), Ok(Precision::Float64));
        assert_eq!(
            "half".parse::<Precision>(),
            Err(ParsePrecisionError("half".to_owned()))
        );
    }

    #[test]
    fn display_round_trips() {
        for p in [Precision::Float32, Precision::Float64] {
            assert_eq!(p.to_string().parse::<Precision>(), Ok(p));
        }
        assert_eq!(Precision::Float64.size_of(), 8);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Forward.sign(), -1.0);
        assert_eq!(Direction::Reverse.sign(), 1.0);
        assert_eq!(Direction::default(), Direction::Forward);
    }
}
