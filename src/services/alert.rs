//! Completion alert ("gong") emitter

use tracing::{debug, info, warn};

use super::tone::GongTone;
use crate::error::AudioError;

/// Audio capabilities the alert emitter needs from the host
pub trait AudioBackend {
    /// Whether a sample source is configured
    fn has_sample(&self) -> bool;

    /// Rewind the configured sample to its beginning and play it
    fn play_sample(&mut self) -> Result<(), AudioError>;

    /// Synthesize and play the given tone
    fn play_tone(&mut self, tone: &GongTone) -> Result<(), AudioError>;
}

/// Which path an alert ended up taking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    Sample,
    Synthesized,
    /// Every audio path failed; the alert is visual only
    Silent,
}

/// Plays the gong, falling back from the sample to a synthesized tone
pub struct AlertEmitter {
    backend: Box<dyn AudioBackend>,
    tone: GongTone,
}

impl AlertEmitter {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            tone: GongTone::default(),
        }
    }

    pub fn with_tone(mut self, tone: GongTone) -> Self {
        self.tone = tone;
        self
    }

    /// Fire one alert. Never fails; failures are logged.
    pub fn fire(&mut self) -> AlertOutcome {
        if self.backend.has_sample() {
            match self.backend.play_sample() {
                Ok(()) => {
                    info!("Playing gong sample");
                    return AlertOutcome::Sample;
                }
                Err(e) => warn!("Gong sample failed, synthesizing instead: {}", e),
            }
        } else {
            debug!("No gong sample configured, synthesizing");
        }

        match self.backend.play_tone(&self.tone) {
            Ok(()) => {
                info!("Playing synthesized gong");
                AlertOutcome::Synthesized
            }
            Err(e) => {
                warn!("Could not play gong sound: {}", e);
                AlertOutcome::Silent
            }
        }
    }
}

/// Backend with no audio output at all
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn has_sample(&self) -> bool {
        false
    }

    fn play_sample(&mut self) -> Result<(), AudioError> {
        Err(AudioError::NoSample)
    }

    fn play_tone(&mut self, _tone: &GongTone) -> Result<(), AudioError> {
        Err(AudioError::Device("audio disabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct Calls {
        samples: u32,
        tones: u32,
    }

    struct FakeBackend {
        sample: Option<bool>,
        tone_ok: bool,
        calls: Rc<RefCell<Calls>>,
    }

    impl AudioBackend for FakeBackend {
        fn has_sample(&self) -> bool {
            self.sample.is_some()
        }

        fn play_sample(&mut self) -> Result<(), AudioError> {
            self.calls.borrow_mut().samples += 1;
            match self.sample {
                Some(true) => Ok(()),
                Some(false) => Err(AudioError::Playback("broken".to_string())),
                None => Err(AudioError::NoSample),
            }
        }

        fn play_tone(&mut self, _tone: &GongTone) -> Result<(), AudioError> {
            self.calls.borrow_mut().tones += 1;
            if self.tone_ok {
                Ok(())
            } else {
                Err(AudioError::Device("none".to_string()))
            }
        }
    }

    fn emitter(sample: Option<bool>, tone_ok: bool) -> (AlertEmitter, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let backend = FakeBackend {
            sample,
            tone_ok,
            calls: Rc::clone(&calls),
        };
        (AlertEmitter::new(Box::new(backend)), calls)
    }

    #[test]
    fn test_sample_preferred() {
        let (mut alerts, calls) = emitter(Some(true), true);
        assert_eq!(alerts.fire(), AlertOutcome::Sample);
        assert_eq!(calls.borrow().samples, 1);
        assert_eq!(calls.borrow().tones, 0);
    }

    #[test]
    fn test_failed_sample_falls_back() {
        let (mut alerts, calls) = emitter(Some(false), true);
        assert_eq!(alerts.fire(), AlertOutcome::Synthesized);
        assert_eq!(calls.borrow().samples, 1);
        assert_eq!(calls.borrow().tones, 1);
    }

    #[test]
    fn test_missing_sample_synthesizes() {
        let (mut alerts, calls) = emitter(None, true);
        assert_eq!(alerts.fire(), AlertOutcome::Synthesized);
        assert_eq!(calls.borrow().samples, 0);
    }

    #[test]
    fn test_all_paths_failing_is_silent() {
        let (mut alerts, _) = emitter(Some(false), false);
        assert_eq!(alerts.fire(), AlertOutcome::Silent);
        let mut silent = AlertEmitter::new(Box::new(SilentBackend));
        assert_eq!(silent.fire(), AlertOutcome::Silent);
    }
}
