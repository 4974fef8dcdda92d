//! Reading and writing sample files.
//!
//! A sample file holds one scalar per line as the lowercase hex digits of its
//! big-endian IEEE-754 encoding, e.g. `3f800000` for `1.0_f32`. This is the
//! exchange format of the benchmark suite the kernels are validated in.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::FileError;

/// Scalars that can be written as a fixed-width hex word.
pub trait HexWord: Copy {
    /// Number of hex digits per word.
    const WIDTH: usize;

    /// Lowercase hex digits of the big-endian encoding.
    fn to_hex(self) -> String;

    /// Parses exactly [`Self::WIDTH`] hex digits.
    fn from_hex(text: &str) -> Option<Self>;
}

macro_rules! impl_hex_word_for {
    ($precision:ty, $bits:ty) => {
        impl HexWord for $precision {
            const WIDTH: usize = std::mem::size_of::<$precision>() * 2;

            fn to_hex(self) -> String {
                format!("{:0width$x}", self.to_bits(), width = Self::WIDTH)
            }

            fn from_hex(text: &str) -> Option<Self> {
                if text.len() != Self::WIDTH || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                <$bits>::from_str_radix(text, 16).ok().map(<$precision>::from_bits)
            }
        }
    };
}

impl_hex_word_for!(f32, u32);
impl_hex_word_for!(f64, u64);

/// Reads exactly `count` samples from `path`.
///
/// Lines after the first `count` are ignored. Surrounding whitespace on a line
/// is ignored as well.
pub fn read_samples<T: HexWord>(path: &Path, count: usize) -> Result<Vec<T>, FileError> {
    let file = File::open(path).map_err(|source| FileError::Io {
        path: path.to_owned(),
        source,
    })?;

    let mut samples = Vec::with_capacity(count);
    for (idx, line) in BufReader::new(file).lines().take(count).enumerate() {
        let line = line.map_err(|source| FileError::Io {
            path: path.to_owned(),
            source,
        })?;
        let text = line.trim();
        let value = T::from_hex(text).ok_or_else(|| FileError::InvalidDatatype {
            line: idx + 1,
            width: T::WIDTH,
            text: text.to_owned(),
        })?;
        samples.push(value);
    }

    if samples.len() != count {
        return Err(FileError::InvalidSize {
            path: path.to_owned(),
            expected: count,
            found: samples.len(),
        });
    }

    Ok(samples)
}

/// Writes `samples` to `path`, one hex word per line, replacing the file.
pub fn write_samples<T: HexWord>(path: &Path, samples: &[T]) -> Result<(), FileError> {
    let io_err = |source| FileError::Io {
        path: path.to_owned(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for sample in samples {
        writeln!(writer, "{}", sample.to_hex()).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fft-reference-{}-{name}", std::process::id()))
    }

    #[test]
    fn hex_encoding() {
        assert_eq!(1.0_f32.to_hex(), "3f800000");
        assert_eq!((-2.0_f64).to_hex(), "c000000000000000");
        assert_eq!(f32::from_hex("3f800000"), Some(1.0));
        assert_eq!(f32::from_hex("3F800000"), Some(1.0));
        assert_eq!(f32::from_hex("3f80000"), None);
        assert_eq!(f32::from_hex("+f800000"), None);
        assert_eq!(f64::from_hex("3f800000"), None);
    }

    #[test]
    fn file_round_trip_is_bit_exact() {
        let path = scratch_path("round-trip");
        let samples = [0.1_f64, -0.0, f64::MIN_POSITIVE, 1.0e300, -7.25];

        write_samples(&path, &samples).unwrap();
        let read: Vec<f64> = read_samples(&path, samples.len()).unwrap();
        std::fs::remove_file(&path).unwrap();

        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&read), bits(&samples));
    }

    #[test]
    fn short_file() {
        let path = scratch_path("short");
        write_samples(&path, &[1.0_f32, 2.0]).unwrap();
        let err = read_samples::<f32>(&path, 3).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            err,
            FileError::InvalidSize {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn wrong_width() {
        let path = scratch_path("width");
        write_samples(&path, &[1.0_f64]).unwrap();
        let err = read_samples::<f32>(&path, 1).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            err,
            FileError::InvalidDatatype {
                line: 1,
                width: 8,
                ..
            }
        ));
    }

    #[test]
    fn missing_file() {
        let err = read_samples::<f32>(&scratch_path("does-not-exist"), 1).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }
}
