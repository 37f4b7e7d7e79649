//! Fragment file naming.

use crate::constants::RESERVED_FILENAME_CHARS;

/// Remove characters reserved by common filesystems.
///
/// Only `\ / * ? : " < > |` are dropped; case, whitespace and any other
/// Unicode are left as they are.
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .filter(|c| !RESERVED_FILENAME_CHARS.contains(c))
        .collect()
}

/// Build the file name for the fragment at 1-based `index`.
///
/// Format: `{index:03}_{sanitized text}.{format}`, e.g. `007_hello.mp3`.
pub fn fragment_filename(index: usize, text: &str, format: &str) -> String {
    format!("{index:03}_{}.{format}", sanitize_filename(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_removes_reserved() {
        assert_eq!(sanitize_filename("a/b:c?d"), "abcd");
        assert_eq!(sanitize_filename(r#"\/*?:"<>|"#), "");
    }

    #[test]
    fn test_sanitize_keeps_everything_else() {
        assert_eq!(sanitize_filename("Hello World"), "Hello World");
        assert_eq!(sanitize_filename("老街 闲情"), "老街 闲情");
        assert_eq!(sanitize_filename("it's (live) ..."), "it's (live) ...");
    }

    #[test]
    fn test_fragment_filename_padding() {
        assert_eq!(fragment_filename(1, "hello", "mp3"), "001_hello.mp3");
        assert_eq!(fragment_filename(42, "a/b:c?d", "mp3"), "042_abcd.mp3");
        assert_eq!(fragment_filename(1234, "x", "mp3"), "1234_x.mp3");
    }
}
