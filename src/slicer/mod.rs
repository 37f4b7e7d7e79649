//! Cutting audio into one fragment per lyric line.
//!
//! Each entry's fragment starts at its own timestamp and ends where the next
//! entry starts; the final fragment runs to the end of the recording.

mod export;
mod intervals;
mod naming;

pub use export::{ExportedFragment, FragmentSlicer, SliceOutcome};
pub use intervals::{Interval, compute_intervals};
pub use naming::{fragment_filename, sanitize_filename};
