//! G.711 Decoder Unit Tests
//!
//! Tests for the decode path:
//! - Frame shape of decoded output
//! - Code-level bijection of both laws
//! - Short and long payloads
//! - Encode/decode round trips

use super::generate_test_signal;
use crate::codecs::g711::*;
use crate::types::{AudioDecoder, AudioEncoder, AudioFrame, EncodedFrame, SampleFormat, TimeBase};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_decode_silence() {
        let decoder = G711Decoder::pcmu();
        let frame = decoder.decode(&EncodedFrame::new(vec![0xFFu8; 160], 9600));

        assert_eq!(frame.samples, vec![0i16; 160]);
        assert_eq!(frame.format, SampleFormat::S16);
        assert_eq!(frame.channels, 1);
        assert_eq!(frame.sample_rate, 8000);
        assert_eq!(frame.pts, 9600);
        assert_eq!(frame.time_base, TimeBase::for_rate(8000));
    }

    #[test]
    fn test_decode_alaw_zero_code() {
        let decoder = G711Decoder::pcma();
        let frame = decoder.decode(&EncodedFrame::new(vec![0xD5u8; 160], 0));
        // A-law has no exact zero; the smallest positive level is 8.
        assert!(frame.samples.iter().all(|&s| s == 8));
    }

    #[test]
    fn test_decode_preserves_order() {
        let decoder = G711Decoder::pcmu();
        let codes: Vec<u8> = (0u8..160).collect();
        let frame = decoder.decode(&EncodedFrame::new(codes.clone(), 0));

        let expected: Vec<i16> = codes.iter().map(|&c| ulaw_expand(c)).collect();
        assert_eq!(frame.samples, expected);
    }

    #[test]
    fn test_short_and_long_payloads() {
        let decoder = G711Decoder::pcma();

        let short = EncodedFrame::new(vec![0xD5u8; 80], 160);
        assert!(short.check_framing().is_err());
        let frame = decoder.decode(&short);
        assert_eq!(frame.samples.len(), 80);
        assert_eq!(frame.pts, 160);

        let long = decoder.decode(&EncodedFrame::new(vec![0xD5u8; 240], 0));
        assert_eq!(long.samples.len(), 240);

        let empty = decoder.decode(&EncodedFrame::new(Vec::new(), 0));
        assert!(empty.samples.is_empty());
    }

    #[test]
    fn test_code_bijection_alaw() {
        for code in 0u8..=255 {
            assert_eq!(alaw_compress(alaw_expand(code)), code, "A-law code {:#04x}", code);
        }
    }

    #[test]
    fn test_code_bijection_mulaw() {
        for code in 0u8..=255 {
            let recompressed = ulaw_compress(ulaw_expand(code));
            if code == 0x7F {
                // Negative zero folds onto positive zero.
                assert_eq!(recompressed, 0xFF);
            } else {
                assert_eq!(recompressed, code, "μ-law code {:#04x}", code);
            }
        }
    }

    #[test]
    fn test_quantization_error_bound() {
        for law in [CompandingLaw::ALaw, CompandingLaw::MuLaw] {
            let bound = law.max_quantization_step();
            for sample in i16::MIN..=i16::MAX {
                let error = (i32::from(law.expand(law.compress(sample))) - i32::from(sample)).abs();
                assert!(error <= bound, "{} error {} for sample {}", law, error, sample);
            }
        }
    }

    #[test]
    fn test_round_trip_through_codec() {
        for law in [CompandingLaw::ALaw, CompandingLaw::MuLaw] {
            let mut encoder = G711Encoder::new(law);
            let decoder = G711Decoder::new(law);
            let samples = generate_test_signal(160, 8000, 1000.0, 20000.0);

            let encoded = encoder.encode(&AudioFrame::mono(samples.clone(), 8000, 320), false).unwrap();
            let decoded = decoder.decode(&encoded);

            assert_eq!(decoded.pts, 320);
            for (original, recovered) in samples.iter().zip(decoded.samples.iter()) {
                let error = (i32::from(*recovered) - i32::from(*original)).abs();
                assert!(error <= law.max_quantization_step());
            }
        }
    }

    #[test]
    fn test_decoder_shared_across_threads() {
        assert_send_sync::<G711Decoder>();

        let decoder = G711Decoder::pcmu();
        let payload = EncodedFrame::new(vec![0x80u8; 160], 0);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let frame = decoder.decode(&payload);
                    assert!(frame.samples.iter().all(|&s| s == 32124));
                });
            }
        });
    }

    #[test]
    fn test_decoder_info() {
        let decoder = G711Decoder::pcmu();
        assert_eq!(decoder.law(), CompandingLaw::MuLaw);
        let info = decoder.info();
        assert_eq!(info.name, "PCMU");
        assert_eq!(info.mime_type, "audio/PCMU");
        assert_eq!(info.payload_type, Some(0));
    }
}
