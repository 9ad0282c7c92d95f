//! Fakes for driving the controller without a terminal, runtime or sound card

#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use tab_timer::{
    controller::{ThemeManager, TimerController},
    error::{AudioError, ScheduleError, StoreError},
    events::{ClickTarget, KeyInput, UiEvent},
    services::{AlertEmitter, AudioBackend, GongTone, MemoryStore, PreferenceStore},
    state::Field,
    tasks::{ThemeListener, TickSource},
};

#[derive(Debug, Default)]
pub struct TickerLog {
    pub active: bool,
    pub generation: u64,
    pub starts: u32,
    pub stops: u32,
}

#[derive(Clone, Default)]
pub struct ManualTicker(pub Rc<RefCell<TickerLog>>);

impl TickSource for ManualTicker {
    fn start(&mut self) -> Result<u64, ScheduleError> {
        let mut log = self.0.borrow_mut();
        if log.active {
            return Err(ScheduleError::AlreadyRunning);
        }
        log.active = true;
        log.generation += 1;
        log.starts += 1;
        Ok(log.generation)
    }

    fn stop(&mut self) {
        let mut log = self.0.borrow_mut();
        if log.active {
            log.stops += 1;
        }
        log.active = false;
    }

    fn is_active(&self) -> bool {
        self.0.borrow().active
    }
}

#[derive(Clone, Default)]
pub struct FakeListener(pub Rc<RefCell<bool>>);

impl ThemeListener for FakeListener {
    fn listen(&mut self) {
        *self.0.borrow_mut() = true;
    }

    fn stop(&mut self) {
        *self.0.borrow_mut() = false;
    }

    fn is_listening(&self) -> bool {
        *self.0.borrow()
    }
}

/// How the fake audio backend behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audio {
    /// Sample configured and plays
    Sample,
    /// Sample configured but playback fails
    BrokenSample,
    /// No sample, tone synthesis works
    ToneOnly,
    /// Nothing works
    Mute,
}

#[derive(Debug, Default)]
pub struct AudioLog {
    pub samples: u32,
    pub tones: u32,
}

pub struct FakeAudio {
    pub mode: Audio,
    pub log: Rc<RefCell<AudioLog>>,
}

impl AudioBackend for FakeAudio {
    fn has_sample(&self) -> bool {
        matches!(self.mode, Audio::Sample | Audio::BrokenSample)
    }

    fn play_sample(&mut self) -> Result<(), AudioError> {
        self.log.borrow_mut().samples += 1;
        match self.mode {
            Audio::Sample => Ok(()),
            _ => Err(AudioError::Playback("sample refused".to_string())),
        }
    }

    fn play_tone(&mut self, _tone: &GongTone) -> Result<(), AudioError> {
        self.log.borrow_mut().tones += 1;
        match self.mode {
            Audio::Mute => Err(AudioError::Device("no output".to_string())),
            _ => Ok(()),
        }
    }
}

/// Store whose writes always fail
#[derive(Debug, Default)]
pub struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: "/read-only/prefs.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

pub struct Harness {
    pub controller: TimerController,
    pub ticker: ManualTicker,
    pub listener: FakeListener,
    pub store: MemoryStore,
    pub audio: Rc<RefCell<AudioLog>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(MemoryStore::new(), false, Audio::ToneOnly)
    }

    pub fn with(store: MemoryStore, system_is_dark: bool, audio: Audio) -> Self {
        let ticker = ManualTicker::default();
        let listener = FakeListener::default();
        let log = Rc::new(RefCell::new(AudioLog::default()));

        let theme = ThemeManager::load(
            Box::new(store.clone()),
            Box::new(listener.clone()),
            system_is_dark,
        );
        let alerts = AlertEmitter::new(Box::new(FakeAudio {
            mode: audio,
            log: Rc::clone(&log),
        }));
        let controller = TimerController::new(Box::new(ticker.clone()), alerts, theme);

        Self {
            controller,
            ticker,
            listener,
            store,
            audio: log,
        }
    }

    pub fn key(&mut self, key: KeyInput) {
        self.controller.dispatch(UiEvent::Key(key));
    }

    pub fn type_digits(&mut self, digits: &str) {
        for digit in digits.chars() {
            self.key(KeyInput::Digit(digit));
        }
    }

    pub fn tab(&mut self) {
        self.key(KeyInput::Tab { reverse: false });
    }

    pub fn shift_tab(&mut self) {
        self.key(KeyInput::Tab { reverse: true });
    }

    pub fn enter(&mut self) {
        self.key(KeyInput::Enter);
    }

    pub fn click(&mut self, target: ClickTarget) {
        self.controller.dispatch(UiEvent::Click(target));
    }

    /// Select a field, type two digits and leave edit mode
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.click(ClickTarget::Field(field));
        self.type_digits(value);
        self.enter();
    }

    pub fn start_pause(&mut self) {
        self.click(ClickTarget::StartPause);
    }

    /// Deliver one tick from the current tick source
    pub fn tick(&mut self) {
        let generation = self.ticker.0.borrow().generation;
        self.controller.dispatch(UiEvent::Tick(generation));
    }

    pub fn fields(&self) -> (u32, u32, u32) {
        let timer = self.controller.timer();
        (timer.hours, timer.minutes, timer.seconds)
    }

    pub fn remaining(&self) -> u32 {
        self.controller.timer().remaining_total_seconds
    }
}
