//! Core types and traits for the codec library
//!
//! This module defines the frame types exchanged with the surrounding audio
//! pipeline and the transport layer, plus the uniform encoder/decoder traits.

use crate::codecs::g711::CompandingLaw;
use crate::error::{CodecError, Result};
use crate::utils::validation;
use crate::SAMPLES_PER_FRAME;
use bytes::Bytes;
use std::fmt;

/// Encoder side of the uniform codec interface
pub trait AudioEncoder: Send {
    /// Encode one linear PCM frame into a compressed payload
    ///
    /// `force_keyframe` asks for an independently decodable unit; codecs
    /// without inter-frame dependencies may ignore it.
    ///
    /// # Errors
    ///
    /// Returns a format error if the frame cannot be encoded. The encoder
    /// state is left untouched in that case.
    fn encode(&mut self, frame: &AudioFrame, force_keyframe: bool) -> Result<EncodedFrame>;

    /// Get codec information
    fn info(&self) -> CodecInfo;

    /// Drop any stream continuation state
    ///
    /// Only meant for real stream discontinuities; consecutive frames of one
    /// stream must be encoded without resetting in between.
    fn reset(&mut self);
}

/// Decoder side of the uniform codec interface
pub trait AudioDecoder: Send + Sync {
    /// Decode a compressed payload into a linear PCM frame
    fn decode(&self, frame: &EncodedFrame) -> AudioFrame;

    /// Get codec information
    fn info(&self) -> CodecInfo;
}

/// Audio codec information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    /// Encoding name (e.g., "PCMU", "PCMA")
    pub name: &'static str,
    /// MIME type as used in SDP and the media pipeline
    pub mime_type: &'static str,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Bitrate in bits per second
    pub bitrate: u32,
    /// Frame size in samples
    pub frame_size: usize,
    /// RTP payload type (if static)
    pub payload_type: Option<u8>,
}

/// Sample format tag carried by linear PCM frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Unsigned 8-bit
    U8,
    /// Signed 16-bit
    S16,
    /// Signed 32-bit
    S32,
    /// 32-bit float
    Flt,
    /// 64-bit float
    Dbl,
}

impl SampleFormat {
    /// Short format name
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::S16 => "s16",
            Self::S32 => "s32",
            Self::Flt => "flt",
            Self::Dbl => "dbl",
        }
    }

    /// Bytes per sample
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::S16 => 2,
            Self::S32 | Self::Flt => 4,
            Self::Dbl => 8,
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Channel layouts the encoder accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// One channel
    Mono,
    /// Two interleaved channels (L, R)
    Stereo,
}

impl ChannelLayout {
    /// Map a raw channel count to a layout
    ///
    /// # Errors
    ///
    /// Any count other than 1 or 2 is rejected.
    pub fn from_channels(channels: u8) -> Result<Self> {
        match channels {
            1 => Ok(Self::Mono),
            2 => Ok(Self::Stereo),
            channels => Err(CodecError::InvalidChannelCount {
                channels,
                supported: vec![1, 2],
            }),
        }
    }

    /// Number of interleaved channels
    pub fn channels(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    /// Layout name
    pub fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Stereo => "stereo",
        }
    }
}

/// Unit of a presentation timestamp, as a fraction of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBase {
    /// Numerator
    pub numerator: u32,
    /// Denominator
    pub denominator: u32,
}

impl TimeBase {
    /// Time base of one sample at `sample_rate`
    pub const fn for_rate(sample_rate: u32) -> Self {
        Self {
            numerator: 1,
            denominator: sample_rate,
        }
    }
}

impl fmt::Display for TimeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Linear PCM audio frame shared with the wider audio pipeline
///
/// Samples are interleaved; `pts` counts samples at the frame's own rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFrame {
    /// Interleaved 16-bit PCM samples
    pub samples: Vec<i16>,
    /// Declared sample format
    pub format: SampleFormat,
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Presentation timestamp
    pub pts: i64,
    /// Unit of `pts`
    pub time_base: TimeBase,
}

impl AudioFrame {
    /// Create a new s16 audio frame
    pub fn new(samples: Vec<i16>, channels: u8, sample_rate: u32, pts: i64) -> Self {
        Self {
            samples,
            format: SampleFormat::S16,
            channels,
            sample_rate,
            pts,
            time_base: TimeBase::for_rate(sample_rate),
        }
    }

    /// Create a new mono s16 frame
    pub fn mono(samples: Vec<i16>, sample_rate: u32, pts: i64) -> Self {
        Self::new(samples, 1, sample_rate, pts)
    }

    /// Create a new interleaved stereo s16 frame
    pub fn stereo(samples: Vec<i16>, sample_rate: u32, pts: i64) -> Self {
        Self::new(samples, 2, sample_rate, pts)
    }

    /// Override the declared sample format
    pub fn with_format(mut self, format: SampleFormat) -> Self {
        self.format = format;
        self
    }

    /// Get the frame size in samples per channel
    pub fn samples_per_channel(&self) -> usize {
        match self.channels {
            0 => 0,
            channels => self.samples.len() / channels as usize,
        }
    }

    /// Get the frame duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        (self.samples_per_channel() as f64 * 1000.0) / self.sample_rate as f64
    }

    /// Channel layout of this frame
    ///
    /// # Errors
    ///
    /// Fails for channel counts other than 1 or 2.
    pub fn layout(&self) -> Result<ChannelLayout> {
        ChannelLayout::from_channels(self.channels)
    }

    /// Validate the frame for encoding
    ///
    /// # Errors
    ///
    /// Returns a format error for non-s16 samples, unsupported layouts, a
    /// zero sample rate, a time base other than one sample at that rate, or
    /// a buffer that does not hold whole sample frames.
    pub fn validate(&self) -> Result<ChannelLayout> {
        validation::validate_frame(self)
    }
}

/// Compressed G.711 payload with its timestamp in the 8000 Hz time base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    /// One companded byte per mono 8 kHz sample
    pub data: Bytes,
    /// Timestamp in samples at 8000 Hz
    pub timestamp: i64,
}

impl EncodedFrame {
    /// Create a new encoded frame
    pub fn new(data: impl Into<Bytes>, timestamp: i64) -> Self {
        Self {
            data: data.into(),
            timestamp,
        }
    }

    /// Number of encoded samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the payload holds exactly one 20 ms codec frame
    pub fn is_full_frame(&self) -> bool {
        self.data.len() == SAMPLES_PER_FRAME
    }

    /// Check the payload length against one codec frame
    ///
    /// Decoding never requires this; it lets callers treat short or long
    /// payloads as a framing defect.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFrameSize`] when the length is not 160.
    pub fn check_framing(&self) -> Result<()> {
        validation::validate_framing(&self.data)
    }
}

/// Codec configuration
///
/// Sample rate, width and frame size are fixed by G.711; only the law is
/// selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Companding law
    pub law: CompandingLaw,
}

impl CodecConfig {
    /// Create a new codec configuration
    pub fn new(law: CompandingLaw) -> Self {
        Self { law }
    }

    /// Create G.711 PCMU configuration
    pub fn pcmu() -> Self {
        Self::new(CompandingLaw::MuLaw)
    }

    /// Create G.711 PCMA configuration
    pub fn pcma() -> Self {
        Self::new(CompandingLaw::ALaw)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::pcmu()
    }
}
