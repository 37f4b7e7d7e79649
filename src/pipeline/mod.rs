//! Processing pipeline components.

mod processor;

pub use processor::{PipelineOptions, PipelineOutcome, split_audio_by_lyrics};
