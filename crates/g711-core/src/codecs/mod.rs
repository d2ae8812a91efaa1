//! Codec implementations and factory

use crate::error::Result;
use crate::types::{AudioDecoder, AudioEncoder, CodecConfig, CodecInfo};
use std::collections::HashMap;

pub mod g711;

use g711::{CompandingLaw, G711Decoder, G711Encoder};

/// Codec factory for creating encoder and decoder instances
pub struct CodecFactory;

impl CodecFactory {
    /// Create an encoder from configuration
    pub fn create_encoder(config: CodecConfig) -> Box<dyn AudioEncoder> {
        Box::new(G711Encoder::with_config(config))
    }

    /// Create a decoder from configuration
    pub fn create_decoder(config: CodecConfig) -> Box<dyn AudioDecoder> {
        Box::new(G711Decoder::with_config(config))
    }

    /// Create an encoder by encoding name ("PCMU", "PCMA")
    pub fn create_encoder_by_name(name: &str) -> Result<Box<dyn AudioEncoder>> {
        Ok(Self::create_encoder(CodecConfig::new(CompandingLaw::from_name(name)?)))
    }

    /// Create a decoder by encoding name ("PCMU", "PCMA")
    pub fn create_decoder_by_name(name: &str) -> Result<Box<dyn AudioDecoder>> {
        Ok(Self::create_decoder(CodecConfig::new(CompandingLaw::from_name(name)?)))
    }

    /// Create an encoder by static RTP payload type
    pub fn create_encoder_by_payload_type(payload_type: u8) -> Result<Box<dyn AudioEncoder>> {
        Ok(Self::create_encoder(CodecConfig::new(CompandingLaw::from_payload_type(payload_type)?)))
    }

    /// Create a decoder by static RTP payload type
    pub fn create_decoder_by_payload_type(payload_type: u8) -> Result<Box<dyn AudioDecoder>> {
        Ok(Self::create_decoder(CodecConfig::new(CompandingLaw::from_payload_type(payload_type)?)))
    }

    /// Create an encoder by MIME type ("audio/PCMU", "audio/PCMA")
    pub fn create_encoder_by_mime_type(mime_type: &str) -> Result<Box<dyn AudioEncoder>> {
        Ok(Self::create_encoder(CodecConfig::new(CompandingLaw::from_mime_type(mime_type)?)))
    }

    /// Create a decoder by MIME type ("audio/PCMU", "audio/PCMA")
    pub fn create_decoder_by_mime_type(mime_type: &str) -> Result<Box<dyn AudioDecoder>> {
        Ok(Self::create_decoder(CodecConfig::new(CompandingLaw::from_mime_type(mime_type)?)))
    }

    /// Get all supported codec names
    pub fn supported_codecs() -> Vec<&'static str> {
        vec![CompandingLaw::MuLaw.name(), CompandingLaw::ALaw.name()]
    }

    /// Check if a codec is supported
    pub fn is_supported(name: &str) -> bool {
        CompandingLaw::from_name(name).is_ok()
    }
}

/// Codec capability information
#[derive(Debug, Clone)]
pub struct CodecCapabilities {
    /// Available companding laws
    pub laws: Vec<CompandingLaw>,
    /// Codec information
    pub codec_info: HashMap<CompandingLaw, CodecInfo>,
}

impl CodecCapabilities {
    /// Get capabilities for all supported codecs
    pub fn get_all() -> Self {
        let laws = vec![CompandingLaw::MuLaw, CompandingLaw::ALaw];
        let codec_info = laws.iter().map(|&law| (law, law.info())).collect();
        Self { laws, codec_info }
    }

    /// Check if a law is supported
    pub fn is_supported(&self, law: CompandingLaw) -> bool {
        self.laws.contains(&law)
    }

    /// Get information for a specific law
    pub fn get_info(&self, law: CompandingLaw) -> Option<&CodecInfo> {
        self.codec_info.get(&law)
    }
}
