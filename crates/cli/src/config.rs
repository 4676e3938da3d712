//! Configuration file management

use anyhow::{Context, Result};
use gqlproto::ProtoOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = directories::ProjectDirs::from("com", "gqlproto", "gqlproto")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();

    Ok(config_dir)
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    let mut path = config_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// Load header options.
///
/// An explicit path must exist. Without one, the default config file is used
/// when present, otherwise the built-in defaults.
pub fn load_options(explicit: Option<&Path>) -> Result<ProtoOptions> {
    if let Some(path) = explicit {
        return read_options(path);
    }

    // A missing config directory (no HOME, sandboxed runs) just means defaults
    let default_path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("No config directory available: {}", e);
            return Ok(ProtoOptions::default());
        }
    };

    if default_path.exists() {
        read_options(&default_path)
    } else {
        Ok(ProtoOptions::default())
    }
}

fn read_options(path: &Path) -> Result<ProtoOptions> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let options: ProtoOptions = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_paths() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"));
            assert_eq!(path.parent(), config_dir().ok().as_deref());
        }
    }

    #[test]
    fn test_explicit_config_overrides_some_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gqlproto.toml");
        fs::write(&path, "package = \"acme.api\"\nmessage_id_prefix = \"acme\"\n").unwrap();

        let options = load_options(Some(path.as_path())).unwrap();
        assert_eq!(
            options,
            ProtoOptions::builder()
                .package("acme.api")
                .message_id_prefix("acme")
                .build()
        );
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "package = [1, 2").unwrap();

        let err = load_options(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
