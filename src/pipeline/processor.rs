//! Audio + lyrics splitting pipeline.

use crate::audio::AudioCodec;
use crate::error::Result;
use crate::lyrics::parse_lyrics_file;
use crate::slicer::{ExportedFragment, FragmentSlicer, SliceOutcome};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory receiving fragments.
    pub output_dir: PathBuf,
    /// Lyric lines containing any of these are dropped.
    pub exclude_markers: Vec<String>,
    /// Whether to draw a progress bar.
    pub show_progress: bool,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The audio or lyrics file does not exist; nothing was done.
    MissingInputs,
    /// The lyrics file has no usable lines; nothing was written.
    NoEntries,
    /// All fragments were exported.
    Completed(Vec<ExportedFragment>),
}

/// Split `audio_path` into one fragment per lyric line of `lyrics_path`.
///
/// The audio is decoded before the lyrics are read. Missing inputs and an
/// empty lyrics file are reported as outcomes rather than errors.
///
/// # Errors
///
/// Fails fast on the first decode, read, directory or export error.
pub fn split_audio_by_lyrics<C: AudioCodec + ?Sized>(
    codec: &C,
    audio_path: &Path,
    lyrics_path: &Path,
    options: &PipelineOptions,
) -> Result<PipelineOutcome> {
    if !audio_path.exists() || !lyrics_path.exists() {
        warn!(
            "Audio file '{}' or lyrics file '{}' not found. Put both files in the working \
             directory or pass their paths as arguments.",
            audio_path.display(),
            lyrics_path.display()
        );
        return Ok(PipelineOutcome::MissingInputs);
    }

    let start_time = Instant::now();

    info!("Loading audio: {}", audio_path.display());
    let audio = codec.decode(audio_path)?;
    #[allow(clippy::cast_precision_loss)]
    let audio_secs = audio.length_ms() as f64 / 1000.0;
    info!(
        "Loaded {audio_secs:.1}s of audio ({} Hz, {} channel(s))",
        audio.sample_rate(),
        audio.channels()
    );

    let entries = parse_lyrics_file(lyrics_path, &options.exclude_markers)?;
    if entries.is_empty() {
        warn!("No valid lyric lines found in {}", lyrics_path.display());
        return Ok(PipelineOutcome::NoEntries);
    }

    codec.check_available()?;

    let slicer =
        FragmentSlicer::new(options.output_dir.clone()).with_progress(options.show_progress);

    let outcome = match slicer.slice(codec, &audio, &entries)? {
        SliceOutcome::NoEntries => PipelineOutcome::NoEntries,
        SliceOutcome::Exported(fragments) => PipelineOutcome::Completed(fragments),
    };

    info!("Complete in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(outcome)
}
