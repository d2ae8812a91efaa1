//! Signal conditioning and validation helpers used by the encoder

pub mod downmix;
pub mod resample;
pub mod validation;
