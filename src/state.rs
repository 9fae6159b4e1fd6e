use crate::form::Form;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// The form as persisted between invocations.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SavedForm {
    pub version: String,
    #[serde(default)]
    pub form: Form,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SavedForm {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            form: Form::default(),
            updated_at: None,
        }
    }
}

impl SavedForm {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("Failed to read form file")?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).context("Failed to parse form JSON")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize form")?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: temp file, then rename over the old one
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// Run `f` against the saved form under an exclusive lock.
///
/// The form is written back only when `f` succeeds, so a rejected calculation
/// leaves the file exactly as it was.
pub fn with_form_lock<F, R>(lock_path: &Path, form_path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&mut SavedForm) -> Result<R>,
{
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(lock_path)
        .context("Failed to open lock file")?;

    file.lock_exclusive().context("Failed to acquire lock")?;

    let mut saved = SavedForm::load(form_path)?;

    let result = f(&mut saved);

    if result.is_ok() {
        saved.updated_at = Some(Utc::now());
        saved.save(form_path)?;
    }

    file.unlock().context("Failed to unlock")?;

    result
}
