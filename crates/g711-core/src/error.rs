//! Error handling for the G.711 codec
//!
//! Every fallible operation in this crate is a pure, synchronous transform,
//! so errors carry enough detail to be logged or surfaced directly and are
//! never retried internally.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Sample format other than 16-bit signed linear
    #[error("Unsupported sample format: {format} (supported: s16)")]
    InvalidSampleFormat { format: String },

    /// Channel count the encoder cannot downmix
    #[error("Invalid channel count: {channels} (supported: {supported:?})")]
    InvalidChannelCount { channels: u8, supported: Vec<u8> },

    /// Sample rate the resampler cannot work with
    #[error("Invalid sample rate: {rate}Hz")]
    InvalidSampleRate { rate: u32 },

    /// Malformed audio buffer (e.g. length not a multiple of the channel count)
    #[error("Invalid audio format: {details}")]
    InvalidFormat { details: String },

    /// Encoded payload length differs from one codec frame
    #[error("Invalid frame size: expected {expected}, got {actual}")]
    InvalidFrameSize { expected: usize, actual: usize },

    /// Unknown encoding name, payload type or MIME type
    #[error("Unsupported codec: {codec}")]
    UnsupportedCodec { codec: String },
}

impl CodecError {
    /// Create a new invalid format error
    pub fn invalid_format(details: impl Into<String>) -> Self {
        Self::InvalidFormat {
            details: details.into(),
        }
    }

    /// Create a new unsupported sample format error
    pub fn invalid_sample_format(format: impl Into<String>) -> Self {
        Self::InvalidSampleFormat {
            format: format.into(),
        }
    }

    /// Create a new unsupported codec error
    pub fn unsupported_codec(codec: impl Into<String>) -> Self {
        Self::UnsupportedCodec {
            codec: codec.into(),
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSampleFormat { .. }
            | Self::InvalidChannelCount { .. }
            | Self::InvalidSampleRate { .. }
            | Self::InvalidFormat { .. } => ErrorCategory::Format,

            Self::InvalidFrameSize { .. } => ErrorCategory::Framing,

            Self::UnsupportedCodec { .. } => ErrorCategory::Configuration,
        }
    }

    /// Whether this error rejects the shape of an input audio frame
    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Unsupported sample format, channel layout or rate
    Format,
    /// Encoded payload is not exactly one codec frame
    Framing,
    /// Unknown codec name, payload type or MIME type
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "Format"),
            Self::Framing => write!(f, "Framing"),
            Self::Configuration => write!(f, "Configuration"),
        }
    }
}
