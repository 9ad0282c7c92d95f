//! Audio output through the default device

use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::Arc,
};

use rodio::{buffer::SamplesBuffer, Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, info, warn};

use super::{alert::AudioBackend, tone::GongTone};
use crate::error::AudioError;

/// Sample rate used for the synthesized gong
pub const TONE_SAMPLE_RATE: u32 = 44_100;

/// A gong sample held in memory so every playback starts from the beginning
#[derive(Debug, Clone)]
pub struct SampleClip {
    path: PathBuf,
    bytes: Arc<[u8]>,
}

impl SampleClip {
    /// Read a sample file into memory
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        let bytes = std::fs::read(path)
            .map_err(|e| AudioError::Decode(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded gong sample {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            path: path.to_path_buf(),
            bytes: bytes.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rewound(&self) -> Cursor<Arc<[u8]>> {
        Cursor::new(Arc::clone(&self.bytes))
    }
}

/// `rodio` backend. The output stream is opened on first use and kept open.
pub struct RodioBackend {
    sample: Option<SampleClip>,
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl RodioBackend {
    pub fn new(sample: Option<SampleClip>) -> Self {
        Self { sample, output: None }
    }

    /// Build a backend from an optional sample path. An unreadable sample is
    /// logged and left out so the synthesized gong is used instead.
    pub fn from_path(path: Option<&Path>) -> Self {
        let sample = path.and_then(|p| match SampleClip::load(p) {
            Ok(clip) => Some(clip),
            Err(e) => {
                warn!("Ignoring gong sample: {}", e);
                None
            }
        });
        Self::new(sample)
    }

    fn sink(&mut self) -> Result<Sink, AudioError> {
        if self.output.is_none() {
            let output =
                OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
            info!("Opened default audio output");
            self.output = Some(output);
        }
        let (_, handle) = self
            .output
            .as_ref()
            .ok_or_else(|| AudioError::Device("output stream unavailable".to_string()))?;
        Sink::try_new(handle).map_err(|e| AudioError::Playback(e.to_string()))
    }
}

impl AudioBackend for RodioBackend {
    fn has_sample(&self) -> bool {
        self.sample.is_some()
    }

    fn play_sample(&mut self) -> Result<(), AudioError> {
        let clip = self.sample.as_ref().ok_or(AudioError::NoSample)?;
        let source = Decoder::new(clip.rewound())
            .map_err(|e| AudioError::Decode(format!("{}: {}", clip.path().display(), e)))?;
        let sink = self.sink()?;
        sink.append(source);
        sink.detach();
        Ok(())
    }

    fn play_tone(&mut self, tone: &GongTone) -> Result<(), AudioError> {
        let samples = tone.render(TONE_SAMPLE_RATE);
        let sink = self.sink()?;
        sink.append(SamplesBuffer::new(1, TONE_SAMPLE_RATE, samples));
        sink.detach();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sample_file_is_dropped() {
        let backend = RodioBackend::from_path(Some(Path::new("/nonexistent/gong.wav")));
        assert!(!backend.has_sample());
    }

    #[test]
    fn test_undecodable_sample_errors_before_output() {
        let clip = SampleClip {
            path: PathBuf::from("garbage.wav"),
            bytes: Arc::from(&b"not audio"[..]),
        };
        let mut backend = RodioBackend::new(Some(clip));
        assert!(backend.has_sample());
        assert!(matches!(backend.play_sample(), Err(AudioError::Decode(_))));
    }
}
