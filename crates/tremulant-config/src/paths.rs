//! Platform-specific paths for presets.
//!
//! # Directory Structure
//!
//! - **User presets**: `~/.config/tremulant/presets/` (Linux), `~/Library/Application Support/tremulant/presets/` (macOS), `%APPDATA%\tremulant\presets\` (Windows)
//! - **System presets**: `/usr/share/tremulant/presets/` (Linux), `/Library/Application Support/tremulant/presets/` (macOS)
//!
//! # Example
//!
//! ```rust,no_run
//! use tremulant_config::paths;
//!
//! let presets_dir = paths::user_presets_dir();
//! println!("User presets: {:?}", presets_dir);
//!
//! // Searches the current directory, then user, then system presets
//! if let Some(path) = paths::find_preset("my_preset") {
//!     println!("Found preset at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "tremulant";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific presets directory.
///
/// Falls back to `./tremulant/presets` if the config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Returns the system-wide presets directory.
///
/// This directory is typically read-only.
pub fn system_presets_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME).join(PRESETS_SUBDIR)
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Library/Application Support")
            .join(APP_NAME)
            .join(PRESETS_SUBDIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(PRESETS_SUBDIR)
    }
}

/// Find a preset file by name.
///
/// `name` may be a path to a TOML file, or a preset name with or without the
/// `.toml` extension. Searches the literal path first, then the user presets
/// directory, then the system presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    [user_presets_dir(), system_presets_dir()]
        .into_iter()
        .map(|dir| dir.join(&filename))
        .find(|candidate| candidate.is_file())
}

/// Ensure the user presets directory exists and return it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_presets_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all preset files in the user presets directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// List all preset files in the system presets directory.
pub fn list_system_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&system_presets_dir())
}

/// List all preset files in `dir`, sorted by path.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// Get the preset name from a file path (the file stem).
///
/// ```rust
/// use tremulant_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/slow_swell.toml"));
/// assert_eq!(name, Some("slow_swell".to_string()));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dirs_are_app_specific() {
        assert!(user_presets_dir().ends_with("tremulant/presets"));
        assert!(system_presets_dir().ends_with("tremulant/presets"));
    }

    #[test]
    fn test_find_preset_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let preset_path = temp_dir.path().join("test.toml");
        fs::write(&preset_path, "name = \"test\"").unwrap();

        assert_eq!(find_preset(preset_path.to_str().unwrap()), Some(preset_path));
    }

    #[test]
    fn test_find_preset_not_found() {
        assert!(find_preset("nonexistent_preset_12345").is_none());
    }

    #[test]
    fn test_list_presets_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.toml"), "").unwrap();
        fs::write(temp_dir.path().join("a.toml"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("dir.toml")).unwrap();

        let presets = list_presets_in_dir(temp_dir.path());
        let names: Vec<_> = presets.iter().filter_map(|p| preset_name_from_path(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_list_presets_nonexistent_dir() {
        assert!(list_presets_in_dir(Path::new("/nonexistent/path/12345")).is_empty());
    }
}
