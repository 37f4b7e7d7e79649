//! lrc-slicer - split audio into one clip per timed lyric line.
//!
//! A timed-lyrics (LRC) file supplies the start of every line; each line's
//! fragment runs until the next line starts, and the last one runs to the end
//! of the recording.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod output;
pub mod pipeline;
pub mod slicer;

use clap::Parser;
use cli::{Cli, Command, SplitArgs};
use config::{CodecConfig, Config, config_file_path, load_default_config, save_default_config};
use pipeline::{PipelineOptions, PipelineOutcome, split_audio_by_lyrics};
use std::path::Path;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the lrc-slicer CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.split.verbose, cli.split.quiet);

    let config = load_default_config()?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    split_files(&cli.audio, &cli.lyrics, &cli.split, &config)
}

/// Split one audio file using one lyrics file.
fn split_files(audio: &Path, lyrics: &Path, args: &SplitArgs, config: &Config) -> Result<()> {
    // Priority: CLI flag > config file > built-in default
    let codec_config = CodecConfig {
        encoder_path: args
            .encoder
            .clone()
            .unwrap_or_else(|| config.codec.encoder_path.clone()),
        prober_path: args
            .prober
            .clone()
            .unwrap_or_else(|| config.codec.prober_path.clone()),
    };
    let codec = audio::FfmpegCodec::new(codec_config);

    let options = PipelineOptions {
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.dir.clone()),
        exclude_markers: config.lyrics.exclude_markers.clone(),
        show_progress: !args.quiet && !args.no_progress,
    };

    match split_audio_by_lyrics(&codec, audio, lyrics, &options)? {
        PipelineOutcome::Completed(fragments) => {
            debug!("{} fragment(s) written", fragments.len());
        }
        PipelineOutcome::MissingInputs | PipelineOutcome::NoEntries => {}
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction, config: &Config) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nEdit [codec] to point at your ffmpeg/ffprobe if they are not on PATH.");
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
