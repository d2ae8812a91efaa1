//! Input validation utilities for codec operations
//!
//! All checks run before any encoder state is touched, so a rejected frame
//! leaves the encoder exactly as it was.

use crate::error::{CodecError, Result};
use crate::types::{AudioFrame, ChannelLayout, SampleFormat, TimeBase};
use crate::SAMPLES_PER_FRAME;

/// Validate a linear PCM frame for encoding and return its layout
pub fn validate_frame(frame: &AudioFrame) -> Result<ChannelLayout> {
    validate_sample_format(frame.format)?;
    let layout = ChannelLayout::from_channels(frame.channels)?;
    validate_sample_rate(frame.sample_rate)?;
    validate_time_base(frame.time_base, frame.sample_rate)?;
    validate_interleaving(frame.samples.len(), layout.channels())?;
    Ok(layout)
}

/// Only 16-bit signed linear samples are accepted
pub fn validate_sample_format(format: SampleFormat) -> Result<()> {
    if format != SampleFormat::S16 {
        return Err(CodecError::invalid_sample_format(format.name()));
    }
    Ok(())
}

/// Validate a sample rate
pub fn validate_sample_rate(rate: u32) -> Result<()> {
    if rate == 0 {
        return Err(CodecError::InvalidSampleRate { rate });
    }
    Ok(())
}

/// Validate that `time_base` counts one sample at `sample_rate`
///
/// `n/d` is accepted when it equals `1/sample_rate`, so `2/16000` passes for
/// an 8 kHz frame.
pub fn validate_time_base(time_base: TimeBase, sample_rate: u32) -> Result<()> {
    let TimeBase { numerator, denominator } = time_base;
    if numerator == 0 || u64::from(denominator) != u64::from(numerator) * u64::from(sample_rate) {
        return Err(CodecError::invalid_format(format!(
            "time base {} does not match sample rate {}Hz",
            time_base, sample_rate
        )));
    }
    Ok(())
}

/// Validate that an interleaved buffer holds whole sample frames
pub fn validate_interleaving(len: usize, channels: usize) -> Result<()> {
    if channels == 0 {
        return Err(CodecError::invalid_format("channel count cannot be zero"));
    }
    if len % channels != 0 {
        return Err(CodecError::invalid_format(format!(
            "sample count {} is not a multiple of channel count {}",
            len, channels
        )));
    }
    Ok(())
}

/// Validate that an encoded payload is exactly one codec frame
pub fn validate_framing(data: &[u8]) -> Result<()> {
    if data.len() != SAMPLES_PER_FRAME {
        return Err(CodecError::InvalidFrameSize {
            expected: SAMPLES_PER_FRAME,
            actual: data.len(),
        });
    }
    Ok(())
}
