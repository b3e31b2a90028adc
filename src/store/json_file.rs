use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use super::Store;
use crate::models::StoreState;
use crate::utils::StoreError;

/// Store persisted as one pretty-printed JSON document on disk.
///
/// A missing (or blank) file is a fresh store; a file that exists but does not
/// parse is reported as `StoreError::Parse` so corruption is never mistaken
/// for an empty store.
pub struct JsonFileStore {
    path: PathBuf,
    announced_empty: AtomicBool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            announced_empty: AtomicBool::new(false),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn empty(&self) -> StoreState {
        if !self.announced_empty.swap(true, Ordering::Relaxed) {
            log::info!("📂 No store at {}, starting with an empty one", self.path.display());
        }
        StoreState::default()
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load(&self) -> Result<StoreState, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(self.empty()),
            Ok(raw) => serde_json::from_str(&raw).map_err(StoreError::Parse),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.empty()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(state).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write beside the store and swap it in, so a crash never leaves half a file
        let temp = self.temp_path();
        tokio::fs::write(&temp, raw).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        Ok(())
    }
}
