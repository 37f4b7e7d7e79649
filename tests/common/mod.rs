//! Shared test helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use lrc_slicer::audio::{AudioBuffer, AudioCodec};
use lrc_slicer::{Error, Result};

/// Codec that serves a fixed buffer and records every export.
///
/// Each exported file contains the fragment's frame count so tests can check
/// what was written without a real encoder.
pub struct RecordingCodec {
    pub audio: AudioBuffer,
    pub encoded: RefCell<Vec<(PathBuf, usize)>>,
    /// Fail on this 1-based export, if set.
    pub fail_on: Option<usize>,
}

impl RecordingCodec {
    pub fn new(audio: AudioBuffer) -> Self {
        Self {
            audio,
            encoded: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing_on(audio: AudioBuffer, export: usize) -> Self {
        Self {
            fail_on: Some(export),
            ..Self::new(audio)
        }
    }

    pub fn encoded_names(&self) -> Vec<String> {
        self.encoded
            .borrow()
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl AudioCodec for RecordingCodec {
    fn decode(&self, _path: &Path) -> Result<AudioBuffer> {
        Ok(self.audio.clone())
    }

    fn encode(&self, audio: &AudioBuffer, path: &Path, format: &str) -> Result<()> {
        assert_eq!(format, "mp3");
        let attempt = self.encoded.borrow().len() + 1;
        if self.fail_on == Some(attempt) {
            return Err(Error::Io(std::io::Error::other("disk full")));
        }
        std::fs::write(path, audio.frames().to_string())?;
        self.encoded
            .borrow_mut()
            .push((path.to_path_buf(), audio.frames()));
        Ok(())
    }
}

/// Mono silence at 1 kHz, so one frame is one millisecond.
pub fn silence_ms(length_ms: usize) -> AudioBuffer {
    AudioBuffer::new(vec![0.0; length_ms], 1000, 1)
}

/// Write interleaved 16-bit `samples` as a WAV file.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32, channels: u16) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}
