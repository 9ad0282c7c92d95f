//! Synthesized gong tone

use std::{f32::consts::TAU, time::Duration};

/// Parameters of the fallback gong: an exponential frequency sweep under an
/// attack/decay gain envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GongTone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration: Duration,
    pub attack: Duration,
    pub peak_gain: f32,
    pub floor_gain: f32,
}

impl Default for GongTone {
    fn default() -> Self {
        Self {
            start_hz: 200.0,
            end_hz: 50.0,
            duration: Duration::from_secs(2),
            attack: Duration::from_millis(100),
            peak_gain: 0.3,
            floor_gain: 0.01,
        }
    }
}

impl GongTone {
    /// Oscillator frequency `t` seconds into the tone
    pub fn frequency_at(&self, t: f32) -> f32 {
        let progress = (t / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.start_hz * (self.end_hz / self.start_hz).powf(progress)
    }

    /// Gain `t` seconds into the tone
    pub fn gain_at(&self, t: f32) -> f32 {
        let attack = self.attack.as_secs_f32();
        let duration = self.duration.as_secs_f32();
        if t <= 0.0 {
            0.0
        } else if t < attack {
            self.peak_gain * t / attack
        } else if t < duration {
            let progress = (t - attack) / (duration - attack);
            self.peak_gain * (self.floor_gain / self.peak_gain).powf(progress)
        } else {
            self.floor_gain
        }
    }

    /// Render mono samples at `sample_rate`
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let count = (self.duration.as_secs_f32() * sample_rate as f32).round() as usize;
        let step = 1.0 / sample_rate as f32;
        let mut phase = 0.0f32;
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let t = i as f32 * step;
            samples.push(phase.sin() * self.gain_at(t));
            phase = (phase + TAU * self.frequency_at(t) * step) % TAU;
        }

        samples
    }
}
