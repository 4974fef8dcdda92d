//! Sliding-window FFT.
//!
//! A window of `window` scalars (`window / 2` complex samples) slides over the
//! input one complex sample at a time. Each position is copied into its own
//! slot of the output and transformed there, so the output ends up holding one
//! independent spectrum per position.
//!
//! Slot `k` of the output starts at scalar `start_offset * window`, where
//! `start_offset = 2k` is the physical start of the window in the input. Slots
//! are therefore `2 * window` scalars apart and only their first half is
//! written; the second half of every slot is left as the caller provided it.
use std::ops::Range;

use crate::algorithms::dit::fft_dit;
use crate::options::Direction;
use crate::sample::Sample;

/// One position of the sliding window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Window {
    /// Physical (scalar) index of the first value of the window in the input.
    /// Always even.
    pub start_offset: usize,
    /// Window length in scalars.
    pub window_length: usize,
}

impl Window {
    /// Scalars of the input copied into this window.
    #[inline]
    pub fn input_range(&self) -> Range<usize> {
        self.start_offset..self.start_offset + self.window_length
    }

    /// Scalar offset of this window's slot in the output buffer.
    #[inline]
    pub fn base_offset(&self) -> usize {
        self.start_offset * self.window_length
    }

    /// Scalars of the output this window's spectrum occupies.
    #[inline]
    pub fn output_range(&self) -> Range<usize> {
        let base = self.base_offset();
        base..base + self.window_length
    }
}

/// Every window position over an input of `input_len` scalars, in order.
///
/// Starts run over `0, 2, 4, … < input_len - window + 1`.
pub fn windows(input_len: usize, window: usize) -> impl Iterator<Item = Window> {
    (0..(input_len + 1).saturating_sub(window))
        .step_by(2)
        .map(move |start_offset| Window {
            start_offset,
            window_length: window,
        })
}

/// Number of window positions over an input of `input_len` scalars.
#[inline]
pub fn window_count(input_len: usize, window: usize) -> usize {
    (input_len + 1).saturating_sub(window).div_ceil(2)
}

/// Scalars the output buffer must hold: `(input_len - window + 1) * window`.
#[inline]
pub fn windowed_output_len(input_len: usize, window: usize) -> usize {
    (input_len + 1).saturating_sub(window) * window
}

/// Transforms every window position of `input` into its slot of `output`.
///
/// Unchecked reference kernel: `window / 2` must be a power of two, `window`
/// must not exceed `input.len()`, and `output` must hold
/// [`windowed_output_len`] scalars. The output is split into disjoint slots
/// up front, so no window can disturb another one's result.
pub fn fft_sliding<T: Sample>(
    input: &[T],
    window: usize,
    output: &mut [T],
    direction: Direction,
) {
    let nn = window >> 1;

    output
        .chunks_mut(window << 1)
        .zip(windows(input.len(), window))
        .for_each(|(slot, w)| {
            slot[..window].copy_from_slice(&input[w.input_range()]);
            fft_dit(slot, nn, direction);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_signal(len: usize) -> Vec<f64> {
        (0..len).map(|x| ((x * 37) % 17) as f64 - 8.0).collect()
    }

    #[test]
    fn eight_samples_window_four() {
        // 8 complex samples, 4-scalar window: starts 0, 2, …, 12
        let input_len = 16;
        let window = 4;

        let starts: Vec<_> = windows(input_len, window).map(|w| w.start_offset).collect();
        assert_eq!(starts, [0, 2, 4, 6, 8, 10, 12]);
        assert_eq!(window_count(input_len, window), 7);
        assert_eq!(windowed_output_len(input_len, window), 52);
    }

    #[test]
    fn slots_line_up_with_base_offsets() {
        let input_len = 32;
        let window = 8;
        for (k, w) in windows(input_len, window).enumerate() {
            assert_eq!(w.base_offset(), k * 2 * window);
        }
        let last = windows(input_len, window).last().unwrap();
        assert_eq!(last.output_range().end, windowed_output_len(input_len, window));
    }

    #[test]
    fn window_as_large_as_input() {
        assert_eq!(window_count(8, 8), 1);
        assert_eq!(windowed_output_len(8, 8), 8);
        assert_eq!(window_count(8, 16), 0);
        assert_eq!(windowed_output_len(8, 16), 0);
    }

    #[test]
    fn each_window_matches_single_buffer_fft() {
        let input = gen_signal(16);
        let window = 4;
        let mut output = vec![0.0; windowed_output_len(input.len(), window)];

        fft_sliding(&input, window, &mut output, Direction::Forward);

        for w in windows(input.len(), window) {
            let mut expected = input[w.input_range()].to_vec();
            fft_dit(&mut expected, window >> 1, Direction::Forward);
            assert_eq!(&output[w.output_range()], expected.as_slice(), "{w:?}");
        }
    }

    #[test]
    fn unused_half_of_each_slot_is_untouched() {
        let input = gen_signal(32);
        let window = 8;
        let sentinel = 1234.5;
        let mut output = vec![sentinel; windowed_output_len(input.len(), window)];

        fft_sliding(&input, window, &mut output, Direction::Forward);

        for w in windows(input.len(), window) {
            let gap = w.output_range().end..(w.base_offset() + 2 * window).min(output.len());
            assert!(output[gap].iter().all(|&x| x == sentinel), "{w:?}");
        }
    }

    #[test]
    fn single_sample_window_copies_input() {
        let input = gen_signal(10);
        let window = 2;
        let mut output = vec![0.0; windowed_output_len(input.len(), window)];

        fft_sliding(&input, window, &mut output, Direction::Forward);

        for w in windows(input.len(), window) {
            assert_eq!(&output[w.output_range()], &input[w.input_range()]);
        }
    }

    #[test]
    fn deterministic() {
        let input = gen_signal(64);
        let window = 16;
        let len = windowed_output_len(input.len(), window);
        let mut first = vec![0.0_f64; len];
        let mut second = vec![0.0_f64; len];

        fft_sliding(&input, window, &mut first, Direction::Forward);
        fft_sliding(&input, window, &mut second, Direction::Forward);

        let first: Vec<u64> = first.iter().map(|x| x.to_bits()).collect();
        let second: Vec<u64> = second.iter().map(|x| x.to_bits()).collect();
        assert_eq!(first, second);
    }
}
