//! # G711-Core: G.711 Telephony Codec
//!
//! Bidirectional conversion between 16-bit linear PCM and 8-bit G.711
//! companded payloads (PCMU / μ-law and PCMA / A-law), including the rate
//! conversion and stereo downmix needed to feed the fixed 8 kHz mono codec
//! from arbitrary-rate, mono-or-stereo input.
//!
//! ## Features
//!
//! - **Bit-exact companding**: matches the ITU-T G.711 reference tables
//! - **Lookup Tables**: Pre-computed tables for O(1) per-sample conversion
//! - **Streaming resampler**: interpolation history survives across frames
//! - **Timestamp rescaling**: encoded timestamps are always in the 8000 Hz time base
//!
//! ## Usage
//!
//! ```rust
//! use g711_core::{AudioDecoder, AudioEncoder, AudioFrame, CodecConfig, CodecFactory};
//!
//! let mut encoder = CodecFactory::create_encoder(CodecConfig::pcmu());
//! let decoder = CodecFactory::create_decoder(CodecConfig::pcmu());
//!
//! // 20ms of 16 kHz stereo audio
//! let frame = AudioFrame::stereo(vec![0i16; 640], 16000, 320);
//! let encoded = encoder.encode(&frame, false)?;
//! assert_eq!(encoded.data.len(), 160);
//! assert_eq!(encoded.timestamp, 160);
//!
//! let decoded = decoder.decode(&encoded);
//! assert_eq!(decoded.samples, vec![0i16; 160]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use codecs::g711::{CompandingLaw, G711Decoder, G711Encoder};
pub use codecs::{CodecCapabilities, CodecFactory};
pub use error::{CodecError, ErrorCategory, Result};
pub use types::{
    AudioDecoder, AudioEncoder, AudioFrame, ChannelLayout, CodecConfig, CodecInfo, EncodedFrame,
    SampleFormat, TimeBase,
};
pub use utils::resample::ResamplerState;

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// G.711 sample rate in Hz
pub const SAMPLE_RATE: u32 = 8000;

/// Bytes per linear PCM sample
pub const SAMPLE_WIDTH: usize = 2;

/// Samples in one 20ms codec frame
pub const SAMPLES_PER_FRAME: usize = 160;

/// Duration of one codec frame in milliseconds
pub const FRAME_DURATION_MS: u32 = 20;

/// Time base of decoded frames and encoded timestamps
pub const TIME_BASE: TimeBase = TimeBase::for_rate(SAMPLE_RATE);

/// Initialize the codec library
///
/// Installs a `tracing` subscriber if none is set and builds the companding
/// lookup tables up front. It's safe to call multiple times.
///
/// # Errors
///
/// Currently never fails; the `Result` leaves room for fallible setup.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    codecs::g711::init_tables();

    tracing::info!("G711-Core v{} initialized", VERSION);
    tracing::info!("Supported codecs: {:?}", codecs::CodecFactory::supported_codecs());

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_codecs: CodecFactory::supported_codecs(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// List of supported codec names
    pub supported_codecs: Vec<&'static str>,
}
