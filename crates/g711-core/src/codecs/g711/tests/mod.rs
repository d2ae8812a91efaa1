//! G.711 encoder and decoder unit tests

mod decoder_tests;

/// Sine tone at `frequency` Hz, `length` samples long, sampled at `sample_rate`
pub(super) fn generate_test_signal(
    length: usize,
    sample_rate: u32,
    frequency: f32,
    amplitude: f32,
) -> Vec<i16> {
    (0..length)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let sample = (2.0 * std::f32::consts::PI * frequency * t).sin() * amplitude;
            sample.clamp(-32768.0, 32767.0) as i16
        })
        .collect()
}
