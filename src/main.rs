use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use fft_reference::algorithms::dft::naive_dft;
use fft_reference::algorithms::windowed::{windowed_output_len, windows};
use fft_reference::io::{read_samples, write_samples, HexWord};
use fft_reference::verify::{verify_exact, verify_tolerance, Verification};
use fft_reference::{fft, fft_windowed, Direction, FftError, FileError, Precision, Sample};

#[derive(Parser, Debug)]
#[command(about = "Reference FFT benchmark")]
struct Args {
    /// Number of scalars in the input, i.e. twice the number of complex samples
    #[arg(short, long)]
    size: usize,

    /// Window length in scalars; runs the sliding-window transform
    #[arg(short, long)]
    window: Option<usize>,

    /// Scalar precision
    #[arg(short, long, default_value_t = Precision::Float32)]
    precision: Precision,

    /// Random seed for the generated input
    #[arg(long, default_value_t = 3894283)]
    seed: u64,

    /// Read the input from a hex sample file instead of generating it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Export the result as a hex sample file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Verify the result against a hex sample file, or against a direct DFT
    /// when no file is given
    #[arg(short, long)]
    verify: Option<Option<PathBuf>>,

    /// Absolute tolerance for verification (exact comparison against a file
    /// when omitted)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Print the output to stdout
    #[arg(short, long, default_value_t = false)]
    output: bool,

    /// Print the kernel execution time to stdout
    #[arg(short, long, default_value_t = false)]
    timing: bool,

    /// Print the input to stdout
    #[arg(long, default_value_t = false)]
    print_input: bool,
}

#[derive(Debug, Error)]
enum BenchError {
    #[error(transparent)]
    Fft(#[from] FftError),

    #[error(transparent)]
    File(#[from] FileError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = match args.precision {
        Precision::Float32 => run::<f32>(&args),
        Precision::Float64 => run::<f64>(&args),
    };

    match outcome {
        Ok(Some(verification)) if !verification.passed() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<T>(args: &Args) -> Result<Option<Verification>, BenchError>
where
    T: Sample + HexWord + SampleUniform,
{
    let input: Vec<T> = match &args.input {
        Some(path) => read_samples(path, args.size)?,
        None => gen_input(args.seed, args.size),
    };

    if args.print_input {
        println!("Input:");
        print_samples(&input);
    }

    let now = Instant::now();
    let output = match args.window {
        Some(window) => {
            let mut output = vec![T::zero(); windowed_output_len(input.len(), window)];
            fft_windowed(&input, window, &mut output)?;
            output
        }
        None => {
            let mut output = input.clone();
            fft(&mut output)?;
            output
        }
    };
    let elapsed = now.elapsed();

    if args.timing {
        println!(
            "Elapsed: {elapsed:.2?} ({} scalars, {} bytes, {})",
            input.len(),
            input.len() * T::PRECISION.size_of(),
            T::PRECISION
        );
    }

    if args.output {
        println!("Output:");
        print_samples(&output);
    }

    if let Some(path) = &args.export {
        write_samples(path, &output)?;
    }

    let verification = match &args.verify {
        Some(Some(path)) => {
            let expected: Vec<T> = read_samples(path, output.len())?;
            Some(match args.tolerance {
                Some(tolerance) => verify_tolerance(&output, &expected, tolerance),
                None => verify_exact(&output, &expected),
            })
        }
        Some(None) => {
            let expected = oracle(&input, args.window, output.len());
            let window_samples = args.window.unwrap_or(input.len()) / 2;
            let tolerance = args
                .tolerance
                .unwrap_or_else(|| default_tolerance(&input, window_samples));
            Some(verify_tolerance(&output, &expected, tolerance))
        }
        None => None,
    };

    if let Some(verification) = &verification {
        println!("{verification}");
    }

    Ok(verification)
}

/// Uniform samples in `[-10, 10)`, reproducible from `seed`.
fn gen_input<T: Sample + SampleUniform>(seed: u64, size: usize) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform_dist = Uniform::new(T::narrow(-10.0), T::narrow(10.0));
    (0..size).map(|_| uniform_dist.sample(&mut rng)).collect()
}

/// Expected output computed with the direct DFT, laid out like the kernel's.
fn oracle<T: Sample>(input: &[T], window: Option<usize>, output_len: usize) -> Vec<T> {
    let mut expected = vec![T::zero(); output_len];
    match window {
        Some(window) => {
            for w in windows(input.len(), window) {
                naive_dft(
                    &input[w.input_range()],
                    &mut expected[w.output_range()],
                    Direction::Forward,
                );
            }
        }
        None => naive_dft(input, &mut expected, Direction::Forward),
    }
    expected
}

/// Error bound for an `nn`-point transform of `input`: `ε · max|x| · nn · (log2 nn + 1)`.
fn default_tolerance<T: Sample>(input: &[T], nn: usize) -> f64 {
    let max_abs = input.iter().fold(0.0_f64, |acc, x| acc.max(x.widen().abs()));
    let stages = nn.max(1).ilog2() as f64 + 1.0;
    T::epsilon().widen() * max_abs * nn as f64 * stages
}

fn print_samples<T: Sample>(data: &[T]) {
    for z in data.chunks(2) {
        match z {
            [re, im] => println!("{re} {im}"),
            [re] => println!("{re}"),
            _ => unreachable!(),
        }
    }
}
