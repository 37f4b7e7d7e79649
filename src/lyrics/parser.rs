//! Timed-lyrics (LRC) parsing.
//!
//! Only lines beginning with a `[MM:SS.FF]` or `[MM:SS.FFF]` timestamp are
//! treated as lyrics. Everything else (metadata tags, blank lines, free text)
//! is skipped without error.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{UTF8_BOM, lyrics};
use crate::error::{Error, Result};

// Pattern is hardcoded and known to be valid
#[allow(clippy::expect_used)]
static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{2}):(\d{2})\.(\d{2,3})\](.*)").expect("valid timestamp regex")
});

#[allow(clippy::expect_used)]
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("valid digit regex"));

/// A lyric line together with the moment it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntry {
    /// Milliseconds from the start of the timeline.
    pub offset_ms: u64,
    /// Trimmed lyric text, never empty.
    pub text: String,
}

/// Read and parse a timed-lyrics file.
///
/// Entries are returned in file order; no sorting is applied.
///
/// # Errors
///
/// Returns [`Error::LyricsRead`] if the file cannot be read as UTF-8 text.
/// Malformed lines never produce an error.
pub fn parse_lyrics_file<S: AsRef<str>>(
    path: &Path,
    exclude_markers: &[S],
) -> Result<Vec<TimedEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::LyricsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_lyrics(&content, exclude_markers))
}

/// Parse timed-lyrics text into entries.
///
/// A line is kept when it starts with a valid timestamp, its trimmed text is
/// non-empty, and the text contains none of `exclude_markers`. Lines may end
/// in `\n`, `\r\n` or a lone `\r`.
pub fn parse_lyrics<S: AsRef<str>>(content: &str, exclude_markers: &[S]) -> Vec<TimedEntry> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    content
        .split(['\n', '\r'])
        .filter_map(parse_line)
        .filter(|entry| {
            !exclude_markers
                .iter()
                .any(|marker| entry.text.contains(marker.as_ref()))
        })
        .collect()
}

/// Parse a single line, returning `None` for anything that is not a lyric.
fn parse_line(line: &str) -> Option<TimedEntry> {
    let caps = TIMESTAMP_LINE.captures(line)?;

    let minutes = parse_decimal(&caps[1])?;
    let seconds = parse_decimal(&caps[2])?;
    let fraction = &caps[3];
    let fraction_value = parse_decimal(fraction)?;

    // Three digits are milliseconds, two are centiseconds
    let millis = if fraction.chars().count() == 3 {
        fraction_value
    } else {
        fraction_value * lyrics::CENTISECOND_MS
    };

    let text = caps[4].trim();
    if text.is_empty() {
        return None;
    }

    Some(TimedEntry {
        offset_ms: minutes * lyrics::MS_PER_MINUTE + seconds * lyrics::MS_PER_SECOND + millis,
        text: text.to_string(),
    })
}

/// Parse a run of Unicode decimal digits (ASCII or any other script).
fn parse_decimal(digits: &str) -> Option<u64> {
    digits.chars().try_fold(0u64, |acc, c| Some(acc * 10 + u64::from(digit_value(c)?)))
}

/// Value of a Unicode decimal digit.
///
/// Decimal digits are encoded in contiguous runs from zero to nine, so the
/// value is the distance to the start of the run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}
