//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "lrc-slicer";

/// Audio file used when none is given on the command line.
pub const DEFAULT_AUDIO_FILE: &str = "LaoJieXianQing.mp3";

/// Lyrics file used when none is given on the command line.
pub const DEFAULT_LYRICS_FILE: &str = "LaoJieXianQing.lrc";

/// Default directory for exported fragments.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Container format of exported fragments.
pub const EXPORT_FORMAT: &str = "mp3";

/// UTF-8 Byte Order Mark, stripped from the start of lyrics files.
pub const UTF8_BOM: char = '\u{FEFF}';

/// Timed-lyrics constants.
pub mod lyrics {
    /// Credit-line markers for lyricist and composer.
    ///
    /// Lines whose text contains any of these are not lyrics.
    pub const DEFAULT_EXCLUDE_MARKERS: &[&str] = &["作词", "作曲"];

    /// Milliseconds per minute.
    pub const MS_PER_MINUTE: u64 = 60_000;

    /// Milliseconds per second.
    pub const MS_PER_SECOND: u64 = 1_000;

    /// Multiplier applied to a two-digit (centisecond) fraction.
    pub const CENTISECOND_MS: u64 = 10;
}

/// External codec tool constants.
pub mod codec {
    /// Default encoder executable, resolved through `PATH`.
    pub const DEFAULT_ENCODER: &str = "ffmpeg";

    /// Default prober executable, resolved through `PATH`.
    pub const DEFAULT_PROBER: &str = "ffprobe";

    /// Bit depth of the staging WAV handed to the encoder.
    pub const STAGING_BITS_PER_SAMPLE: u16 = 16;

    /// Suffix of the staging file.
    pub const STAGING_SUFFIX: &str = ".wav";
}

/// Characters removed from lyric text before it becomes part of a filename.
pub const RESERVED_FILENAME_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];
