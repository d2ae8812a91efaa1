//! Stereo to mono downmix for 16-bit linear samples

use crate::types::ChannelLayout;
use std::borrow::Cow;

/// Collapse interleaved samples to mono
///
/// Each output sample is the floor of the mean of its L/R pair, computed as
/// `(l + r) >> 1` in 32-bit arithmetic; an odd sum rounds toward negative
/// infinity. Mono input is returned unchanged.
pub fn to_mono(samples: &[i16], layout: ChannelLayout) -> Cow<'_, [i16]> {
    match layout {
        ChannelLayout::Mono => Cow::Borrowed(samples),
        ChannelLayout::Stereo => samples
            .chunks_exact(2)
            .map(|pair| average(pair[0], pair[1]))
            .collect(),
    }
}

#[inline]
fn average(left: i16, right: i16) -> i16 {
    // Mean of two i16 values always fits back into i16.
    ((i32::from(left) + i32::from(right)) >> 1) as i16
}
