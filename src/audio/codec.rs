//! Audio codec service.
//!
//! Decoding runs in-process through symphonia. Encoding to compressed
//! formats is delegated to an external ffmpeg binary: the fragment is
//! staged as a 16-bit PCM WAV and ffmpeg transcodes it to the target path.

use std::path::Path;
use std::process::{Command, Stdio};

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::debug;

use crate::audio::{AudioBuffer, decode_audio_file};
use crate::config::CodecConfig;
use crate::constants::APP_NAME;
use crate::constants::codec::{STAGING_BITS_PER_SAMPLE, STAGING_SUFFIX};
use crate::error::{Error, Result};

/// Loads audio files into memory and writes buffers back out.
pub trait AudioCodec {
    /// Decode a whole audio file.
    fn decode(&self, path: &Path) -> Result<AudioBuffer>;

    /// Encode `audio` to `path` in the given container `format` (e.g. `mp3`).
    ///
    /// An existing file at `path` is overwritten.
    fn encode(&self, audio: &AudioBuffer, path: &Path, format: &str) -> Result<()>;

    /// Confirm the codec can encode before any fragment is cut.
    fn check_available(&self) -> Result<()> {
        Ok(())
    }
}

/// Codec backed by symphonia for decoding and ffmpeg for encoding.
#[derive(Debug, Clone)]
pub struct FfmpegCodec {
    config: CodecConfig,
}

impl FfmpegCodec {
    /// Create a codec using the given tool locations.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Verify that both external tools can be started.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CodecToolUnavailable`] naming the first tool that
    /// cannot be run.
    pub fn check_tools(&self) -> Result<()> {
        check_tool("encoder", &self.config.encoder_path)?;
        check_tool("prober", &self.config.prober_path)
    }
}

impl AudioCodec for FfmpegCodec {
    fn check_available(&self) -> Result<()> {
        self.check_tools()
    }

    fn decode(&self, path: &Path) -> Result<AudioBuffer> {
        decode_audio_file(path)
    }

    fn encode(&self, audio: &AudioBuffer, path: &Path, format: &str) -> Result<()> {
        let staging_dir = tempfile::Builder::new().prefix(APP_NAME).tempdir()?;
        let staging = staging_dir.path().join(format!("fragment{STAGING_SUFFIX}"));
        write_staging_wav(&staging, audio)?;

        let output = Command::new(&self.config.encoder_path)
            .args(["-hide_banner", "-loglevel", "error", "-y", "-i"])
            .arg(&staging)
            .args(["-f", format])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::CodecToolUnavailable {
                tool: "encoder",
                path: self.config.encoder_path.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::EncodeFailed {
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!("Encoded {} as {format}", path.display());
        Ok(())
    }
}

/// Run `<tool> -version` and require a successful exit.
fn check_tool(tool: &'static str, path: &Path) -> Result<()> {
    let status = Command::new(path)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| Error::CodecToolUnavailable {
            tool,
            path: path.to_path_buf(),
            source: e,
        })?;

    if !status.success() {
        return Err(Error::CodecToolUnavailable {
            tool,
            path: path.to_path_buf(),
            source: std::io::Error::other(format!("`-version` exited with {status}")),
        });
    }

    debug!("Found {tool} at {}", path.display());
    Ok(())
}

/// Write an interleaved buffer as 16-bit PCM WAV.
fn write_staging_wav(path: &Path, audio: &AudioBuffer) -> Result<()> {
    let spec = WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: STAGING_BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let staging_err = |e| Error::StagingWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = WavWriter::create(path, spec).map_err(staging_err)?;

    for &sample in audio.samples() {
        #[allow(clippy::cast_possible_truncation)]
        let sample_i16 = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        writer.write_sample(sample_i16).map_err(staging_err)?;
    }

    writer.finalize().map_err(staging_err)?;

    Ok(())
}
