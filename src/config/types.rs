//! Configuration type definitions.

use crate::constants::{DEFAULT_OUTPUT_DIR, codec, lyrics};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// External codec tools.
    #[serde(default)]
    pub codec: CodecConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Lyrics parsing settings.
    #[serde(default)]
    pub lyrics: LyricsConfig,
}

/// Locations of the external encoder and prober.
///
/// Handed to the codec at construction time; bare names are resolved
/// through `PATH` when the tool is spawned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    /// Encoder executable (ffmpeg).
    pub encoder_path: PathBuf,

    /// Prober executable (ffprobe).
    pub prober_path: PathBuf,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            encoder_path: PathBuf::from(codec::DEFAULT_ENCODER),
            prober_path: PathBuf::from(codec::DEFAULT_PROBER),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives exported fragments.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Lyrics parsing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LyricsConfig {
    /// Lines whose text contains any of these substrings are dropped.
    pub exclude_markers: Vec<String>,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            exclude_markers: lyrics::DEFAULT_EXCLUDE_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.codec.encoder_path, PathBuf::from("ffmpeg"));
        assert_eq!(config.codec.prober_path, PathBuf::from("ffprobe"));
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.lyrics.exclude_markers, vec!["作词", "作曲"]);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[codec]
encoder_path = "/opt/ffmpeg/bin/ffmpeg"
"#,
        )
        .unwrap();

        assert_eq!(
            config.codec.encoder_path,
            PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
        assert_eq!(config.codec.prober_path, PathBuf::from("ffprobe"));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
