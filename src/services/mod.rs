//! Host service module
//!
//! This module contains the audio, preference-storage and system-theme
//! services the timer controller talks to.

pub mod alert;
pub mod audio;
pub mod preferences;
pub mod system_theme;
pub mod tone;

// Re-export main types
pub use alert::{AlertEmitter, AlertOutcome, AudioBackend, SilentBackend};
pub use audio::{RodioBackend, SampleClip};
pub use preferences::{JsonFileStore, MemoryStore, PreferenceStore};
pub use system_theme::SystemThemeProbe;
pub use tone::GongTone;
