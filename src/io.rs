use std::{io::Write, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::kinetics::{parameters::ReactionParameters, result::KineticsResult};

/// Loads a parameter set from a JSON file.
///
/// `duration` and `point_count` may be omitted and fall back to their defaults.
/// The parameters are not validated here; validation happens when a model is
/// built from them.
///
/// # Arguments
///
/// * `path` - Path to the JSON parameter file
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(ReactionParameters)` - The parsed parameter set
/// * `Err(IOError)` - An error that occurred during file reading or JSON parsing
///
/// # Errors
///
/// * `IOError::FileNotFound` if the file cannot be opened
/// * `IOError::JsonParseError` if the contents are not a valid parameter set
pub fn load_parameters(path: impl Into<PathBuf>) -> Result<ReactionParameters, IOError> {
    load_json(path)
}

/// Saves a parameter set as pretty-printed JSON.
///
/// # Arguments
///
/// * `path` - Path of the file to create or overwrite
/// * `params` - The parameter set to save
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(())` - The parameters were written
/// * `Err(IOError)` - An error that occurred during file creation, writing or JSON serialization
///
/// # Errors
///
/// * `IOError::WriteError` if the file cannot be created or written
/// * `IOError::JsonSerializeError` if the parameters cannot be serialized
pub fn save_parameters(
    path: impl Into<PathBuf>,
    params: &ReactionParameters,
) -> Result<(), IOError> {
    save_json(path, params)
}

/// Loads a kinetics result from a JSON file.
///
/// `null` samples in any series are read back as NaN.
///
/// # Arguments
///
/// * `path` - Path to a JSON file written by [`save_result`]
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(KineticsResult)` - The parsed result
/// * `Err(IOError)` - An error that occurred during file reading or JSON parsing
///
/// # Errors
///
/// * `IOError::FileNotFound` if the file cannot be opened
/// * `IOError::JsonParseError` if the contents are not a valid result
pub fn load_result(path: impl Into<PathBuf>) -> Result<KineticsResult, IOError> {
    load_json(path)
}

/// Saves a kinetics result as pretty-printed JSON.
///
/// Non-finite samples are written as `null`.
///
/// # Arguments
///
/// * `path` - Path of the file to create or overwrite
/// * `result` - The result to save
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(())` - The result was written
/// * `Err(IOError)` - An error that occurred during file creation, writing or JSON serialization
///
/// # Errors
///
/// * `IOError::WriteError` if the file cannot be created or written
/// * `IOError::JsonSerializeError` if the result cannot be serialized
pub fn save_result(path: impl Into<PathBuf>, result: &KineticsResult) -> Result<(), IOError> {
    save_json(path, result)
}

fn load_json<T: DeserializeOwned>(path: impl Into<PathBuf>) -> Result<T, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

fn save_json<T: Serialize>(path: impl Into<PathBuf>, value: &T) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::WriteError)?;
    write_json(file, value)
}

fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<(), IOError> {
    serde_json::to_writer_pretty(&mut writer, value).map_err(|err| {
        if err.is_io() {
            IOError::WriteError(err.into())
        } else {
            IOError::JsonSerializeError(err)
        }
    })?;
    writer.flush().map_err(IOError::WriteError)
}

/// Represents errors that can occur while reading or writing JSON files.
#[derive(Error, Debug)]
pub enum IOError {
    /// The file could not be opened for reading.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file contents could not be parsed as JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// The file could not be created, or writing to it failed.
    #[error("Failed to write file: {0}")]
    WriteError(std::io::Error),

    /// The value could not be represented as JSON.
    #[error("Failed to serialize JSON: {0}")]
    JsonSerializeError(serde_json::Error),
}
