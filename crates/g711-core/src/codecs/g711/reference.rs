//! G.711 Audio Codec Reference Implementation
//!
//! Per-sample μ-law and A-law compression and expansion, bit-exact with the
//! ITU-T G.191 Software Tools Library `g711.c` module.
//!
//! ## Reference
//!
//! - ITU-T Recommendation G.711: "Pulse code modulation (PCM) of voice frequencies"
//! - ITU-T Recommendation G.191: Software Tools Library (STL)
//!
//! ## Algorithm Details
//!
//! ### A-law
//! - Uses the 13 most significant bits of the input
//! - Negative values are one's-complemented before segmenting
//! - Eight segments; segments 0 and 1 share the same step size
//! - Even bits of the code are inverted (XOR 0x55)
//!
//! ### μ-law
//! - Uses the 14 most significant bits of the input
//! - Adds a bias of 33 and clips the biased magnitude at 0x1FFF
//! - All code bits are inverted, so positive zero is 0xFF

/// Upper end of each A-law segment, on the 13-bit magnitude
const ALAW_SEGMENT_ENDS: [i16; 8] = [0x1F, 0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF];

/// Upper end of each μ-law segment, on the biased 14-bit magnitude
const MULAW_SEGMENT_ENDS: [i16; 8] = [0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF, 0x1FFF];

const MULAW_BIAS: i16 = 33;
const MULAW_CLIP: i16 = 0x1FFF;

#[inline]
fn segment_of(magnitude: i16, ends: &[i16; 8]) -> u8 {
    let mut segment = 0;
    while segment < 7 && magnitude > ends[segment] {
        segment += 1;
    }
    segment as u8
}

/// A-law compression according to ITU-T G.711
///
/// Compresses a 16-bit linear PCM sample to an 8-bit A-law code.
pub fn alaw_compress(sample: i16) -> u8 {
    let (mask, magnitude) = if sample >= 0 {
        (0xD5u8, sample >> 3)
    } else {
        (0x55u8, !sample >> 3)
    };

    let segment = segment_of(magnitude, &ALAW_SEGMENT_ENDS);
    let shift = if segment < 2 { 1 } else { segment };
    let mantissa = ((magnitude >> shift) & 0x0F) as u8;

    ((segment << 4) | mantissa) ^ mask
}

/// A-law expansion according to ITU-T G.711
///
/// Expands an 8-bit A-law code to the 16-bit midpoint of its interval.
pub fn alaw_expand(code: u8) -> i16 {
    let code = code ^ 0x55;
    let segment = (code & 0x70) >> 4;
    let mut magnitude = i16::from(code & 0x0F) << 4;

    match segment {
        0 => magnitude += 0x08,
        1 => magnitude += 0x108,
        _ => magnitude = (magnitude + 0x108) << (segment - 1),
    }

    if code & 0x80 != 0 { magnitude } else { -magnitude }
}

/// μ-law compression according to ITU-T G.711
///
/// Compresses a 16-bit linear PCM sample to an 8-bit μ-law code.
pub fn ulaw_compress(sample: i16) -> u8 {
    let (mask, magnitude) = if sample >= 0 {
        (0xFFu8, sample >> 2)
    } else {
        (0x7Fu8, !sample >> 2)
    };
    let biased = (magnitude + MULAW_BIAS).min(MULAW_CLIP);

    let segment = segment_of(biased, &MULAW_SEGMENT_ENDS);
    let mantissa = ((biased >> (segment + 1)) & 0x0F) as u8;

    ((segment << 4) | mantissa) ^ mask
}

/// μ-law expansion according to ITU-T G.711
///
/// Expands an 8-bit μ-law code to a 16-bit linear sample.
pub fn ulaw_expand(code: u8) -> i16 {
    let code = !code;
    let segment = (code & 0x70) >> 4;
    let biased = ((i16::from(code & 0x0F) << 3) + (MULAW_BIAS << 2)) << segment;

    if code & 0x80 != 0 {
        (MULAW_BIAS << 2) - biased
    } else {
        biased - (MULAW_BIAS << 2)
    }
}
