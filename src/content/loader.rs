//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayDefaults, Level};
use super::validation::{ValidationError, validate_defaults, validate_level};

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text.
pub fn parse_ron<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Attach a file name to validation failures.
fn checked<T>(
    file_name: &str,
    value: T,
    validation: Vec<ValidationError>,
) -> Result<T, Vec<ContentLoadError>> {
    if validation.is_empty() {
        return Ok(value);
    }
    Err(validation
        .into_iter()
        .map(|e| ContentLoadError {
            file: file_name.to_string(),
            message: e.to_string(),
        })
        .collect())
}

/// Parse and validate a level.
pub fn level_from_str(file_name: &str, contents: &str) -> Result<Level, Vec<ContentLoadError>> {
    let level: Level = parse_ron(file_name, contents).map_err(|e| vec![e])?;
    let validation = validate_level(&level);
    checked(file_name, level, validation)
}

/// Parse and validate gameplay tuning.
pub fn defaults_from_str(
    file_name: &str,
    contents: &str,
) -> Result<GameplayDefaults, Vec<ContentLoadError>> {
    let defaults: GameplayDefaults = parse_ron(file_name, contents).map_err(|e| vec![e])?;
    let validation = validate_defaults(&defaults);
    checked(file_name, defaults, validation)
}

/// Load assets/data/level.ron and gameplay_defaults.ron.
/// The level is required; missing gameplay defaults fall back to built-ins.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(Level, GameplayDefaults), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let defaults_path = base_path.join("gameplay_defaults.ron");
    let gameplay_defaults = if defaults_path.exists() {
        let file_name = defaults_path.display().to_string();
        let loaded = fs::read_to_string(&defaults_path)
            .map_err(|e| {
                vec![ContentLoadError {
                    file: file_name.clone(),
                    message: format!("IO error: {}", e),
                }]
            })
            .and_then(|contents| defaults_from_str(&file_name, &contents));
        match loaded {
            Ok(defaults) => defaults,
            Err(mut defaults_errors) => {
                errors.append(&mut defaults_errors);
                GameplayDefaults::default()
            }
        }
    } else {
        warn!(
            "Gameplay defaults not found at {:?}, using built-in tuning",
            defaults_path
        );
        GameplayDefaults::default()
    };

    let level_path = base_path.join("level.ron");
    let level = match fs::read_to_string(&level_path) {
        Ok(contents) => match level_from_str(&level_path.display().to_string(), &contents) {
            Ok(level) => Some(level),
            Err(mut level_errors) => {
                errors.append(&mut level_errors);
                None
            }
        },
        Err(e) => {
            errors.push(ContentLoadError {
                file: level_path.display().to_string(),
                message: format!("IO error: {}", e),
            });
            None
        }
    };

    match level {
        Some(level) if errors.is_empty() => Ok((level, gameplay_defaults)),
        _ => Err(errors),
    }
}
