//! Fragment export.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::audio::{AudioBuffer, AudioCodec};
use crate::constants::EXPORT_FORMAT;
use crate::error::{Error, Result};
use crate::lyrics::TimedEntry;
use crate::output::progress;

use super::{Interval, compute_intervals, fragment_filename};

/// A fragment that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFragment {
    /// 1-based position in parse order.
    pub index: usize,
    /// Lyric text the fragment was cut for.
    pub text: String,
    /// Source range of the fragment.
    pub interval: Interval,
    /// Written file.
    pub path: PathBuf,
}

/// Result of a slicing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceOutcome {
    /// There was nothing to slice; no directory was created and no file written.
    NoEntries,
    /// Every entry was exported, in parse order.
    Exported(Vec<ExportedFragment>),
}

/// Cuts an audio buffer into one fragment per lyric entry.
#[derive(Debug, Clone)]
pub struct FragmentSlicer {
    /// Directory receiving fragments.
    output_dir: PathBuf,
    /// Whether to draw a progress bar.
    show_progress: bool,
}

impl FragmentSlicer {
    /// Create a slicer writing to `output_dir`.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar.
    #[must_use]
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Export one fragment per entry.
    ///
    /// Fragments are written in entry order as `NNN_<text>.mp3`, overwriting
    /// files of the same name. The first failure aborts the pass; fragments
    /// already written stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a
    /// fragment cannot be encoded.
    pub fn slice<C: AudioCodec + ?Sized>(
        &self,
        codec: &C,
        audio: &AudioBuffer,
        entries: &[TimedEntry],
    ) -> Result<SliceOutcome> {
        if entries.is_empty() {
            info!("No entries to slice");
            return Ok(SliceOutcome::NoEntries);
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.output_dir.clone(),
            source: e,
        })?;

        info!("Found {} lyric lines, slicing...", entries.len());

        let intervals = compute_intervals(entries, audio.length_ms());
        let pb = progress::create_fragment_progress(entries.len(), self.show_progress);
        let mut exported = Vec::with_capacity(entries.len());

        for (i, (entry, interval)) in entries.iter().zip(intervals).enumerate() {
            let index = i + 1;
            let filename = fragment_filename(index, &entry.text, EXPORT_FORMAT);
            let path = self.output_dir.join(&filename);
            pb.set_message(filename.clone());

            debug!(
                "Fragment {index}: {}ms-{}ms -> {}",
                interval.start_ms,
                interval.end_ms,
                path.display()
            );

            let fragment = audio.slice(interval.start_ms, interval.end_ms);
            if let Err(e) = codec.encode(&fragment, &path, EXPORT_FORMAT) {
                pb.abandon_with_message("failed");
                return Err(e);
            }

            progress::report(&pb, &format!("Exported: {filename}"));
            pb.inc(1);

            exported.push(ExportedFragment {
                index,
                text: entry.text.clone(),
                interval,
                path,
            });
        }

        pb.finish_with_message("done");
        info!(
            "All {} fragments exported to {}",
            exported.len(),
            self.output_dir.display()
        );

        Ok(SliceOutcome::Exported(exported))
    }
}
