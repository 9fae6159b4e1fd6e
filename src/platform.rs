//! Where `lgo` keeps its files.
//!
//! Config always lives under the home directory. The saved form follows the
//! config override when set, then home, then the platform data directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".logout-clock";
const DATA_DIR: &str = "logout-clock";

/// Resolve and create the directory holding the saved form.
pub fn get_state_dir(override_dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        create_dir(dir)?;
        return Ok(dir.clone());
    }

    let candidates = [
        home::home_dir().map(|home| home.join(APP_DIR)),
        dirs::data_local_dir().map(|data| data.join(DATA_DIR)),
    ];

    for dir in candidates.into_iter().flatten() {
        match create_dir(&dir) {
            Ok(()) => return Ok(dir),
            Err(e) => tracing::warn!("{:#}; trying next location", e),
        }
    }

    anyhow::bail!(
        "No usable state directory. Set state.state_dir_override in {}/config.toml",
        APP_DIR
    )
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Lock and form file paths inside the resolved state directory.
pub fn form_paths(state_dir_override: Option<&PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let state_dir = get_state_dir(state_dir_override)?;
    Ok((state_dir.join("form.lock"), state_dir.join("form.json")))
}

/// Default location of `config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(APP_DIR)
        .join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir_takes_priority() {
        let temp = TempDir::new().unwrap();
        let override_path = temp.path().join("a").join("b");

        let result = get_state_dir(Some(&override_path)).unwrap();
        assert_eq!(result, override_path);
        assert!(override_path.is_dir());
    }

    #[test]
    fn test_override_that_is_a_file_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let err = get_state_dir(Some(&blocker.join("state"))).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
    }

    #[test]
    fn test_form_paths_with_override() {
        let temp = TempDir::new().unwrap();
        let override_path = temp.path().to_path_buf();

        let (lock, form) = form_paths(Some(&override_path)).unwrap();
        assert_eq!(lock, override_path.join("form.lock"));
        assert_eq!(form, override_path.join("form.json"));
    }
}
