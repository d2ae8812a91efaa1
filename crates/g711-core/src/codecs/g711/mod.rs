//! G.711 (PCMU/PCMA) encoder and decoder
//!
//! The companding law is picked at construction time through
//! [`CompandingLaw`]; encoder and decoder share one implementation for both
//! laws.
//!
//! The encoder accepts s16 frames at any sample rate, mono or stereo. It
//! resamples to 8 kHz first (keeping the interpolation history of the stream
//! between calls), then downmixes to mono and compands every sample:
//!
//! ```text
//! AudioFrame ──► resample ──► to_mono ──► compress ──► EncodedFrame
//!   (any rate)    (8 kHz)       (mono)      (1 byte/sample, 8 kHz timestamp)
//! ```
//!
//! The decoder expands one byte per sample into an 8 kHz mono frame.

pub mod reference;
pub mod tables;

#[cfg(test)]
mod tests;

pub use reference::{alaw_compress, alaw_expand, ulaw_compress, ulaw_expand};
pub use tables::init_tables;

use crate::error::{CodecError, Result};
use crate::types::{AudioDecoder, AudioEncoder, AudioFrame, CodecConfig, CodecInfo, EncodedFrame, SampleFormat};
use crate::utils::downmix::to_mono;
use crate::utils::resample::{resample, ResamplerState};
use crate::utils::validation::validate_sample_rate;
use crate::{SAMPLES_PER_FRAME, SAMPLE_RATE, TIME_BASE};
use std::fmt;
use tracing::{trace, warn};

/// G.711 companding law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompandingLaw {
    /// A-law (PCMA)
    ALaw,
    /// μ-law (PCMU)
    MuLaw,
}

impl CompandingLaw {
    /// Compress one linear sample
    #[inline]
    pub fn compress(self, sample: i16) -> u8 {
        match self {
            Self::ALaw => tables::alaw_compress_table(sample),
            Self::MuLaw => tables::mulaw_compress_table(sample),
        }
    }

    /// Expand one code to a linear sample
    #[inline]
    pub fn expand(self, code: u8) -> i16 {
        match self {
            Self::ALaw => tables::alaw_expand_table(code),
            Self::MuLaw => tables::mulaw_expand_table(code),
        }
    }

    /// Compress a slice of samples, in order
    pub fn compress_slice(self, samples: &[i16]) -> Vec<u8> {
        samples.iter().map(|&sample| self.compress(sample)).collect()
    }

    /// Expand a slice of codes, in order
    pub fn expand_slice(self, codes: &[u8]) -> Vec<i16> {
        codes.iter().map(|&code| self.expand(code)).collect()
    }

    /// Encoding name
    pub fn name(self) -> &'static str {
        match self {
            Self::ALaw => "PCMA",
            Self::MuLaw => "PCMU",
        }
    }

    /// MIME type
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::ALaw => "audio/PCMA",
            Self::MuLaw => "audio/PCMU",
        }
    }

    /// Static RTP payload type
    pub fn payload_type(self) -> u8 {
        match self {
            Self::ALaw => 8,
            Self::MuLaw => 0,
        }
    }

    /// Code produced for a silent (zero) sample
    pub fn zero_code(self) -> u8 {
        match self {
            Self::ALaw => 0xD5,
            Self::MuLaw => 0xFF,
        }
    }

    /// Widest quantization interval of the law, in 16-bit units
    ///
    /// `|expand(compress(s)) - s|` never exceeds this for any sample.
    pub fn max_quantization_step(self) -> i32 {
        match self {
            Self::ALaw | Self::MuLaw => 1024,
        }
    }

    /// Look up a law by encoding name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_uppercase().as_str() {
            "PCMA" => Ok(Self::ALaw),
            "PCMU" => Ok(Self::MuLaw),
            _ => Err(CodecError::unsupported_codec(name)),
        }
    }

    /// Look up a law by static RTP payload type
    pub fn from_payload_type(payload_type: u8) -> Result<Self> {
        match payload_type {
            0 => Ok(Self::MuLaw),
            8 => Ok(Self::ALaw),
            _ => Err(CodecError::unsupported_codec(format!("PT{}", payload_type))),
        }
    }

    /// Look up a law by MIME type such as `audio/PCMU` (case-insensitive)
    pub fn from_mime_type(mime_type: &str) -> Result<Self> {
        match mime_type.split_once('/') {
            Some((kind, name)) if kind.eq_ignore_ascii_case("audio") => {
                Self::from_name(name).map_err(|_| CodecError::unsupported_codec(mime_type))
            }
            _ => Err(CodecError::unsupported_codec(mime_type)),
        }
    }

    /// Codec information for this law
    pub fn info(self) -> CodecInfo {
        CodecInfo {
            name: self.name(),
            mime_type: self.mime_type(),
            sample_rate: SAMPLE_RATE,
            channels: 1,
            bitrate: SAMPLE_RATE * 8,
            frame_size: SAMPLES_PER_FRAME,
            payload_type: Some(self.payload_type()),
        }
    }
}

impl fmt::Display for CompandingLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rescale a timestamp counted at `sample_rate` to the 8000 Hz time base
///
/// Uses floor division on a 128-bit intermediate. Upsampling a timestamp
/// near the ends of the `i64` range can leave it unrepresentable; that is
/// reported instead of saturating.
pub(crate) fn rescale_timestamp(pts: i64, sample_rate: u32) -> Result<i64> {
    validate_sample_rate(sample_rate)?;
    let scaled = (i128::from(pts) * i128::from(SAMPLE_RATE)).div_euclid(i128::from(sample_rate));
    i64::try_from(scaled).map_err(|_| {
        CodecError::invalid_format(format!(
            "timestamp {} at {}Hz overflows the {}Hz time base",
            pts, sample_rate, SAMPLE_RATE
        ))
    })
}

/// G.711 encoder
///
/// Owns the resampler history of exactly one stream. Calls must be made in
/// stream order.
#[derive(Debug)]
pub struct G711Encoder {
    law: CompandingLaw,
    resampler: ResamplerState,
}

impl G711Encoder {
    /// Create a new encoder for `law`
    pub fn new(law: CompandingLaw) -> Self {
        Self {
            law,
            resampler: ResamplerState::new(),
        }
    }

    /// Create a new encoder from a configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self::new(config.law)
    }

    /// Create a PCMU encoder
    pub fn pcmu() -> Self {
        Self::new(CompandingLaw::MuLaw)
    }

    /// Create a PCMA encoder
    pub fn pcma() -> Self {
        Self::new(CompandingLaw::ALaw)
    }

    /// Companding law of this encoder
    pub fn law(&self) -> CompandingLaw {
        self.law
    }

    /// Current resampler continuation state
    pub fn resampler_state(&self) -> &ResamplerState {
        &self.resampler
    }
}

impl AudioEncoder for G711Encoder {
    fn encode(&mut self, frame: &AudioFrame, _force_keyframe: bool) -> Result<EncodedFrame> {
        // Every check runs before the resampler state is touched.
        let layout = frame.validate()?;

        let resampled;
        let (samples, timestamp) = if frame.sample_rate != SAMPLE_RATE {
            let timestamp = rescale_timestamp(frame.pts, frame.sample_rate)?;
            resampled = resample(
                &frame.samples,
                layout.channels(),
                frame.sample_rate,
                SAMPLE_RATE,
                &mut self.resampler,
            )?;
            (resampled.as_slice(), timestamp)
        } else {
            (frame.samples.as_slice(), frame.pts)
        };

        let mono = to_mono(samples, layout);
        let data = self.law.compress_slice(&mono);

        trace!(
            "{} encoded {} {} samples at {}Hz into {} bytes, pts {} -> {}",
            self.law,
            frame.samples.len(),
            layout.name(),
            frame.sample_rate,
            data.len(),
            frame.pts,
            timestamp
        );

        Ok(EncodedFrame::new(data, timestamp))
    }

    fn info(&self) -> CodecInfo {
        self.law.info()
    }

    fn reset(&mut self) {
        self.resampler.reset();
    }
}

/// G.711 decoder
///
/// Stateless apart from the law; safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G711Decoder {
    law: CompandingLaw,
}

impl G711Decoder {
    /// Create a new decoder for `law`
    pub fn new(law: CompandingLaw) -> Self {
        Self { law }
    }

    /// Create a new decoder from a configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self::new(config.law)
    }

    /// Create a PCMU decoder
    pub fn pcmu() -> Self {
        Self::new(CompandingLaw::MuLaw)
    }

    /// Create a PCMA decoder
    pub fn pcma() -> Self {
        Self::new(CompandingLaw::ALaw)
    }

    /// Companding law of this decoder
    pub fn law(&self) -> CompandingLaw {
        self.law
    }
}

impl AudioDecoder for G711Decoder {
    fn decode(&self, frame: &EncodedFrame) -> AudioFrame {
        if !frame.is_full_frame() {
            warn!(
                "{} payload of {} bytes, expected {}; decoding as-is",
                self.law,
                frame.len(),
                SAMPLES_PER_FRAME
            );
        }

        let samples = self.law.expand_slice(&frame.data);
        trace!("{} decoded {} bytes, pts {}", self.law, samples.len(), frame.timestamp);

        AudioFrame {
            samples,
            format: SampleFormat::S16,
            channels: 1,
            sample_rate: SAMPLE_RATE,
            pts: frame.timestamp,
            time_base: TIME_BASE,
        }
    }

    fn info(&self) -> CodecInfo {
        self.law.info()
    }
}
