use crate::models::CheckIn;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write history slot: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the persisted check-ins. Missing or unreadable slots yield an empty list.
pub async fn load_entries(path: &Path) -> Vec<CheckIn> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), "discarding malformed history slot: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!(path = %path.display(), "failed to read history slot: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_entries(path: &Path, entries: &[CheckIn]) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(entries)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    #[tokio::test]
    async fn missing_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = load_entries(&dir.path().join("absent.json")).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn malformed_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, b"{not json").await.unwrap();
        assert!(load_entries(&path).await.is_empty());

        fs::write(&path, br#"[{"mood":"ecstatic","ts":1,"username":"guest"}]"#)
            .await
            .unwrap();
        assert!(load_entries(&path).await.is_empty());
    }

    #[tokio::test]
    async fn persisted_entries_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let entries = vec![
            CheckIn::new(Mood::Okay, Some("slept well"), 2_000, "guest"),
            CheckIn::new(Mood::Tired, None, 1_000, "guest"),
        ];

        persist_entries(&path, &entries).await.unwrap();
        assert_eq!(load_entries(&path).await, entries);
    }

    #[tokio::test]
    async fn missing_note_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, br#"[{"mood":"sad","ts":5,"username":"guest"}]"#)
            .await
            .unwrap();

        let entries = load_entries(&path).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].note, "");
    }
}
