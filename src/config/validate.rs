//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_codec(config)?;
    validate_output(config)?;
    validate_lyrics(config)?;
    Ok(())
}

fn validate_codec(config: &Config) -> Result<()> {
    if config.codec.encoder_path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "codec.encoder_path must not be empty".to_string(),
        });
    }

    if config.codec.prober_path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "codec.prober_path must not be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if config.output.dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output.dir must not be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_lyrics(config: &Config) -> Result<()> {
    // An empty marker is a substring of every line and would drop all lyrics
    if let Some(pos) = config
        .lyrics
        .exclude_markers
        .iter()
        .position(|m| m.trim().is_empty())
    {
        return Err(Error::ConfigValidation {
            message: format!("lyrics.exclude_markers[{pos}] must not be blank"),
        });
    }

    Ok(())
}
