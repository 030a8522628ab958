//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Preset not found
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// Unknown waveform name
    #[error("unknown waveform: {0}")]
    UnknownWaveform(String),

    /// Validation errors
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock")
    }

    #[test]
    fn io_variants_carry_path_and_source() {
        let read = ConfigError::read_file("/a/b.toml", mock_io_err());
        let write = ConfigError::write_file("/a/c.toml", mock_io_err());
        let dir = ConfigError::create_dir("/a", mock_io_err());

        assert!(read.to_string().starts_with("failed to read file '/a/b.toml'"));
        assert!(write.to_string().starts_with("failed to write file '/a/c.toml'"));
        assert!(dir.to_string().starts_with("failed to create directory '/a'"));

        for err in [read, write, dir] {
            assert!(err.source().is_some(), "{err} must expose its I/O source");
        }
    }

    #[test]
    fn lookup_errors_display() {
        assert_eq!(
            ConfigError::PresetNotFound("wobble".to_string()).to_string(),
            "preset not found: wobble"
        );
        assert_eq!(
            ConfigError::UnknownWaveform("saw".to_string()).to_string(),
            "unknown waveform: saw"
        );
        assert!(ConfigError::UnknownWaveform("saw".to_string()).source().is_none());
    }

    #[test]
    fn toml_errors_convert() {
        let parse: ConfigError = toml::from_str::<toml::Table>("name = ").unwrap_err().into();
        assert!(matches!(parse, ConfigError::TomlParse(_)));
        assert!(parse.to_string().starts_with("failed to parse TOML"));
    }
}
