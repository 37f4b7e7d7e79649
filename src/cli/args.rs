//! CLI argument definitions.

use crate::constants::{DEFAULT_AUDIO_FILE, DEFAULT_LYRICS_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Split an audio recording into one clip per timed lyric line.
#[derive(Debug, Parser)]
#[command(name = "lrc-slicer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Audio file to split.
    #[arg(default_value = DEFAULT_AUDIO_FILE)]
    pub audio: PathBuf,

    /// Timed-lyrics (LRC) file sharing the audio's timeline.
    #[arg(default_value = DEFAULT_LYRICS_FILE)]
    pub lyrics: PathBuf,

    /// Options for splitting.
    #[command(flatten)]
    pub split: SplitArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for splitting.
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Output directory for fragments (default: from config, else "output").
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path to the ffmpeg executable (overrides config).
    #[arg(long)]
    pub encoder: Option<PathBuf>,

    /// Path to the ffprobe executable (overrides config).
    #[arg(long)]
    pub prober: Option<PathBuf>,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_bundled_filenames() {
        let cli = Cli::try_parse_from(["lrc-slicer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.audio, PathBuf::from("LaoJieXianQing.mp3"));
        assert_eq!(cli.lyrics, PathBuf::from("LaoJieXianQing.lrc"));
        assert_eq!(cli.split.output_dir, None);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "lrc-slicer",
            "song.flac",
            "song.lrc",
            "-o",
            "clips",
            "--encoder",
            "/usr/local/bin/ffmpeg",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.audio, PathBuf::from("song.flac"));
        assert_eq!(cli.lyrics, PathBuf::from("song.lrc"));
        assert_eq!(cli.split.output_dir, Some(PathBuf::from("clips")));
        assert_eq!(
            cli.split.encoder,
            Some(PathBuf::from("/usr/local/bin/ffmpeg"))
        );
        assert!(cli.split.quiet);
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["lrc-slicer", "-vv"]).unwrap();
        assert_eq!(cli.split.verbose, 2);
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["lrc-slicer", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }
}
