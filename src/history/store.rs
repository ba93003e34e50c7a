//! File-backed History Store
//!
//! The whole history lives in one pretty-printed JSON array. Every write is
//! a read-modify-write of that file, serialized by an async mutex.

use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::history::entry::HistoryEntry;
use crate::history::error::HistoryResult;

/// Bounded, append-only log of analyses
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
    lock: Mutex<()>,
}

impl HistoryStore {
    /// Open the store, creating an empty history file if none exists
    pub async fn open(path: impl Into<PathBuf>, max_entries: usize) -> HistoryResult<Self> {
        let path = path.into();

        if !tokio::fs::try_exists(&path).await? {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            write_entries(&path, &[]).await?;
            tracing::info!("Created history file {:?}", path);
        }

        Ok(Self {
            path,
            max_entries,
            lock: Mutex::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first
    ///
    /// An unreadable or corrupt file reads as an empty history.
    pub async fn entries(&self) -> Vec<HistoryEntry> {
        let _guard = self.lock.lock().await;
        self.load_lenient().await
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries().await.len()
    }

    /// Append an entry, dropping the oldest ones beyond `max_entries`
    pub async fn append(&self, entry: HistoryEntry) -> HistoryResult<()> {
        let _guard = self.lock.lock().await;

        let mut entries = self.load_lenient().await;
        entries.push(entry);
        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(..excess);
        }

        write_entries(&self.path, &entries).await
    }

    /// Remove every entry
    pub async fn clear(&self) -> HistoryResult<()> {
        let _guard = self.lock.lock().await;
        write_entries(&self.path, &[]).await?;
        tracing::info!("History cleared");
        Ok(())
    }

    async fn load_lenient(&self) -> Vec<HistoryEntry> {
        match read_entries(&self.path).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to read history {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }
}

async fn read_entries(path: &Path) -> HistoryResult<Vec<HistoryEntry>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn write_entries(path: &Path, entries: &[HistoryEntry]) -> HistoryResult<()> {
    let content = serde_json::to_string_pretty(entries)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}
