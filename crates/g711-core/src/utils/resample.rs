//! Streaming sample rate conversion for 16-bit linear PCM
//!
//! The converter interpolates linearly between consecutive input frames.
//! Both rates are reduced by their greatest common divisor; a phase
//! accumulator then decides, frame by frame, whether to consume more input
//! or emit output. The accumulator and the last two input frames of every
//! channel are kept in [`ResamplerState`], so a stream converted in pieces
//! produces exactly the samples it would produce in one call.
//!
//! Interpolation runs on 16.16 fixed-point values: the weighted sum is
//! divided with truncation toward zero, then shifted back to 16 bits.

use crate::error::Result;
use crate::utils::validation::{validate_interleaving, validate_sample_rate};
use tracing::debug;

/// Continuation state of one resampled stream
///
/// Starts empty and is filled on the first conversion. Each stream owns its
/// own state; cloning one forks the stream history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResamplerState {
    inner: Option<RateState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RateState {
    from_rate: u32,
    to_rate: u32,
    channels: usize,
    /// Input rate divided by gcd(from, to)
    in_step: i64,
    /// Output rate divided by gcd(from, to)
    out_step: i64,
    /// Negative: input needed. Non-negative: output due.
    phase: i64,
    prev: Vec<i32>,
    cur: Vec<i32>,
}

impl ResamplerState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no audio has been converted with this state yet
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Forget all history
    pub fn reset(&mut self) {
        self.inner = None;
    }

    fn prepare(&mut self, from_rate: u32, to_rate: u32, channels: usize) -> &mut RateState {
        if let Some(state) = &self.inner {
            if !state.matches(from_rate, to_rate, channels) {
                debug!(
                    "Resampler reconfigured from {}Hz->{}Hz x{} to {}Hz->{}Hz x{}, dropping history",
                    state.from_rate, state.to_rate, state.channels, from_rate, to_rate, channels
                );
                self.inner = None;
            }
        }

        self.inner.get_or_insert_with(|| {
            debug!(
                "Initialising resampler {}Hz -> {}Hz, {} channel(s)",
                from_rate, to_rate, channels
            );
            RateState::new(from_rate, to_rate, channels)
        })
    }
}

impl RateState {
    fn new(from_rate: u32, to_rate: u32, channels: usize) -> Self {
        let divisor = gcd(from_rate, to_rate);
        let in_step = i64::from(from_rate / divisor);
        let out_step = i64::from(to_rate / divisor);
        Self {
            from_rate,
            to_rate,
            channels,
            in_step,
            out_step,
            phase: -out_step,
            prev: vec![0; channels],
            cur: vec![0; channels],
        }
    }

    fn matches(&self, from_rate: u32, to_rate: u32, channels: usize) -> bool {
        self.from_rate == from_rate && self.to_rate == to_rate && self.channels == channels
    }

    fn convert(&mut self, input: &[i16]) -> Vec<i16> {
        let frames = (input.len() / self.channels) as u64;
        let estimate = frames * self.out_step as u64 / self.in_step as u64 + 1;
        let mut output = Vec::with_capacity(estimate as usize * self.channels);
        let mut frames = input.chunks_exact(self.channels);

        loop {
            while self.phase < 0 {
                let Some(frame) = frames.next() else {
                    return output;
                };
                for (channel, &sample) in frame.iter().enumerate() {
                    self.prev[channel] = self.cur[channel];
                    self.cur[channel] = i32::from(sample) << 16;
                }
                self.phase += self.out_step;
            }

            while self.phase >= 0 {
                for channel in 0..self.channels {
                    output.push(self.interpolate(channel));
                }
                self.phase -= self.in_step;
            }
        }
    }

    #[inline]
    fn interpolate(&self, channel: usize) -> i16 {
        let prev = i128::from(self.prev[channel]);
        let cur = i128::from(self.cur[channel]);
        let phase = i128::from(self.phase);
        let out_step = i128::from(self.out_step);

        let value = (prev * phase + cur * (out_step - phase)) / out_step;
        (value >> 16) as i16
    }
}

/// Convert interleaved samples from `from_rate` to `to_rate`
///
/// `state` carries filter history between calls on the same stream and is
/// updated in place. Equal rates return the input unchanged without
/// touching the state.
///
/// # Errors
///
/// Fails on a zero rate or channel count, or when `input` does not hold
/// whole sample frames. The state is left untouched on error.
pub fn resample(
    input: &[i16],
    channels: usize,
    from_rate: u32,
    to_rate: u32,
    state: &mut ResamplerState,
) -> Result<Vec<i16>> {
    validate_sample_rate(from_rate)?;
    validate_sample_rate(to_rate)?;
    validate_interleaving(input.len(), channels)?;

    if from_rate == to_rate {
        return Ok(input.to_vec());
    }

    Ok(state.prepare(from_rate, to_rate, channels).convert(input))
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(16000, 8000), 8000);
        assert_eq!(gcd(44100, 8000), 100);
        assert_eq!(gcd(48000, 8000), 8000);
        assert_eq!(gcd(7, 5), 1);
    }

    #[test]
    fn test_identity_leaves_state_empty() {
        let mut state = ResamplerState::new();
        let input = vec![1, 2, 3, 4];
        let output = resample(&input, 1, 8000, 8000, &mut state).unwrap();
        assert_eq!(output, input);
        assert!(state.is_empty());
    }

    #[test]
    fn test_halving_keeps_even_samples() {
        let mut state = ResamplerState::new();
        let input: Vec<i16> = (0..320).map(|i| (i * 10) as i16).collect();
        let output = resample(&input, 1, 16000, 8000, &mut state).unwrap();

        let expected: Vec<i16> = input.iter().step_by(2).copied().collect();
        assert_eq!(output.len(), 160);
        assert_eq!(output, expected);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_48k_to_8k_frame_size() {
        let mut state = ResamplerState::new();
        let input = vec![0i16; 960];
        for _ in 0..5 {
            let output = resample(&input, 1, 48000, 8000, &mut state).unwrap();
            assert_eq!(output.len(), 160);
        }
    }

    #[test]
    fn test_44100_to_8k_averages_160_per_frame() {
        let mut state = ResamplerState::new();
        let input = vec![0i16; 882];
        let total: usize = (0..50)
            .map(|_| resample(&input, 1, 44100, 8000, &mut state).unwrap().len())
            .sum();
        // One second of audio in, one second out.
        assert_eq!(total, 8000);
    }

    #[test]
    fn test_doubling_interpolates_midpoints() {
        let mut state = ResamplerState::new();
        let output = resample(&[0, 100, 200], 1, 8000, 16000, &mut state).unwrap();
        assert_eq!(output, vec![0, 50, 100, 150, 200]);

        // The next call continues from the last input sample.
        let output = resample(&[300], 1, 8000, 16000, &mut state).unwrap();
        assert_eq!(output, vec![250, 300]);
    }

    #[test]
    fn test_split_matches_single_call() {
        let signal: Vec<i16> = (0..1000)
            .map(|i| ((i as f64 * 0.05).sin() * 12000.0) as i16)
            .collect();

        let mut whole_state = ResamplerState::new();
        let whole = resample(&signal, 1, 22050, 8000, &mut whole_state).unwrap();

        let mut split_state = ResamplerState::new();
        let mut pieces = Vec::new();
        for chunk in signal.chunks(137) {
            pieces.extend(resample(chunk, 1, 22050, 8000, &mut split_state).unwrap());
        }

        assert_eq!(pieces, whole);
        assert_eq!(split_state, whole_state);
    }

    #[test]
    fn test_stereo_channels_stay_separate() {
        let mut state = ResamplerState::new();
        let input: Vec<i16> = (0..8).flat_map(|i| [i * 100, -i * 100]).collect();
        let output = resample(&input, 2, 16000, 8000, &mut state).unwrap();
        assert_eq!(output, vec![0, 0, 200, -200, 400, -400, 600, -600]);
    }

    #[test]
    fn test_negative_midpoint_rounds_down() {
        let mut state = ResamplerState::new();
        let output = resample(&[-1, 0], 1, 8000, 16000, &mut state).unwrap();
        assert_eq!(output, vec![-1, -1, 0]);
    }

    #[test]
    fn test_reconfiguration_drops_history() {
        let mut state = ResamplerState::new();
        resample(&[500; 320], 1, 16000, 8000, &mut state).unwrap();

        // A fresh 48 kHz stream starts from silence, like a new state would.
        let mut fresh = ResamplerState::new();
        let expected = resample(&[7; 960], 1, 48000, 8000, &mut fresh).unwrap();
        let output = resample(&[7; 960], 1, 48000, 8000, &mut state).unwrap();
        assert_eq!(output, expected);
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_invalid_arguments_leave_state() {
        let mut state = ResamplerState::new();
        resample(&[1, 2, 3, 4], 1, 16000, 8000, &mut state).unwrap();
        let snapshot = state.clone();

        assert!(resample(&[1, 2, 3], 2, 16000, 8000, &mut state).is_err());
        assert!(resample(&[1, 2], 1, 0, 8000, &mut state).is_err());
        assert!(resample(&[1, 2], 1, 16000, 0, &mut state).is_err());
        assert!(resample(&[1, 2], 0, 16000, 8000, &mut state).is_err());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_reset() {
        let mut state = ResamplerState::new();
        resample(&[1, 2, 3, 4], 1, 16000, 8000, &mut state).unwrap();
        state.reset();
        assert!(state.is_empty());
    }
}
