//! Tiny tone generator for the music & sound effects.  Everything is mono
//! at [`SAMPLE_RATE`].
use super::Effect;
use std::f32::consts::TAU;

pub(crate) const SAMPLE_RATE: u32 = 44_100;

/// Background loop: a short arpeggio, as (frequency in Hz, seconds) pairs
const MELODY: [(f32, f32); 8] = [
    (262.0, 0.2),
    (330.0, 0.2),
    (392.0, 0.2),
    (523.0, 0.2),
    (392.0, 0.2),
    (330.0, 0.2),
    (294.0, 0.2),
    (247.0, 0.2),
];

const EAT_NOTES: [(f32, f32); 2] = [(520.0, 0.08), (680.0, 0.12)];

const GAME_OVER_DURATION: f32 = 0.5;

/// One loop's worth of background music
pub(crate) fn music() -> Vec<f32> {
    MELODY
        .iter()
        .flat_map(|&(freq, secs)| tone(freq, secs, 0.25))
        .collect()
}

pub(crate) fn effect(effect: Effect) -> Vec<f32> {
    match effect {
        Effect::Eat => EAT_NOTES
            .iter()
            .flat_map(|&(freq, secs)| tone(freq, secs, 0.3))
            .collect(),
        Effect::GameOver => sweep(400.0, 80.0, GAME_OVER_DURATION, 0.3),
    }
}

/// A sine tone that fades out linearly over its duration
fn tone(freq: f32, secs: f32, gain: f32) -> Vec<f32> {
    let n = sample_count(secs);
    (0..n)
        .map(|i| {
            let t = seconds(i);
            let envelope = 1.0 - progress(i, n);
            gain * envelope * (TAU * freq * t).sin()
        })
        .collect()
}

/// A fading sine tone whose pitch slides from `from` Hz to `to` Hz
fn sweep(from: f32, to: f32, secs: f32, gain: f32) -> Vec<f32> {
    let n = sample_count(secs);
    let mut phase = 0.0f32;
    (0..n)
        .map(|i| {
            let p = progress(i, n);
            let freq = from + (to - from) * p;
            phase = (phase + TAU * freq / sample_rate()) % TAU;
            gain * (1.0 - p) * phase.sin()
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_count(secs: f32) -> usize {
    (sample_rate() * secs.max(0.0)) as usize
}

#[allow(clippy::cast_precision_loss)]
fn sample_rate() -> f32 {
    SAMPLE_RATE as f32
}

#[allow(clippy::cast_precision_loss)]
fn seconds(i: usize) -> f32 {
    i as f32 / sample_rate()
}

#[allow(clippy::cast_precision_loss)]
fn progress(i: usize, n: usize) -> f32 {
    if n == 0 {
        0.0
    } else {
        i as f32 / n as f32
    }
}
