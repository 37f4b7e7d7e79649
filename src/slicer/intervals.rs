//! Per-line interval derivation.

use crate::lyrics::TimedEntry;

/// Time range covered by one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Start in milliseconds.
    pub start_ms: u64,
    /// End in milliseconds.
    pub end_ms: u64,
}

/// Derive one interval per entry.
///
/// Each entry runs until the next entry starts; the last one runs to
/// `audio_length_ms`. Intervals are not clamped or reordered, so out-of-order
/// timestamps produce inverted intervals.
pub fn compute_intervals(entries: &[TimedEntry], audio_length_ms: u64) -> Vec<Interval> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Interval {
            start_ms: entry.offset_ms,
            end_ms: entries
                .get(i + 1)
                .map_or(audio_length_ms, |next| next.offset_ms),
        })
        .collect()
}
