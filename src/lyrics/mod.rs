//! Timed-lyrics input.

mod parser;

pub use parser::{TimedEntry, parse_lyrics, parse_lyrics_file};
