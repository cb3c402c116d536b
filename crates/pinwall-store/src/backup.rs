use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::models::Board;
use crate::snapshot;

/// Full backup payload, written as pretty JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    /// ISO 8601 timestamp of when the backup was created
    pub created_at: String,
    /// App version that produced the backup
    pub version: String,
    pub boards: Vec<Board>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStats {
    pub boards_imported: usize,
    pub boards_skipped: usize,
    pub posts_imported: usize,
}

/// Capture the given collection.
pub fn export(boards: &[Board]) -> BackupPayload {
    BackupPayload {
        created_at: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        boards: boards.to_vec(),
    }
}

/// Append the payload's boards to `current`, skipping any board whose id is
/// already present. Existing boards are never overwritten.
pub fn merge(current: &[Board], payload: &BackupPayload) -> (Vec<Board>, ImportStats) {
    let mut stats = ImportStats::default();
    let mut known: HashSet<_> = current.iter().map(|b| b.id.clone()).collect();
    let mut merged = current.to_vec();

    for board in &payload.boards {
        if !known.insert(board.id.clone()) {
            stats.boards_skipped += 1;
            continue;
        }
        stats.boards_imported += 1;
        stats.posts_imported += board.posts.len();
        merged.push(board.clone());
    }

    snapshot::repair(&mut merged);
    (merged, stats)
}

pub fn write_to(path: &Path, payload: &BackupPayload) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn read_from(path: &Path) -> Result<BackupPayload> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardDraft, Post, PostDraft};
    use crate::seed;

    #[test]
    fn merge_skips_known_boards() {
        let current = seed::sample_boards();
        let mut extra = Board::new(BoardDraft::new("Extra", "", "pink")).unwrap();
        extra.posts.push(Post::new(PostDraft::new("a", "b")));

        let mut payload = export(&current);
        payload.boards.push(extra.clone());

        let (merged, stats) = merge(&current, &payload);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], extra);
        assert_eq!(
            stats,
            ImportStats {
                boards_imported: 1,
                boards_skipped: 1,
                posts_imported: 1
            }
        );
    }

    #[test]
    fn merge_caps_imported_titles() {
        let mut extra = Board::new(BoardDraft::new("Extra", "", "pink")).unwrap();
        let mut post = Post::new(PostDraft::new("a", "b"));
        post.title = "y".repeat(30);
        extra.posts.push(post);

        let payload = BackupPayload {
            created_at: String::new(),
            version: String::new(),
            boards: vec![extra],
        };
        let (merged, _) = merge(&[], &payload);
        assert_eq!(merged[0].posts[0].title.chars().count(), 26);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        let payload = export(&seed::sample_boards());
        write_to(&path, &payload).unwrap();
        assert_eq!(read_from(&path).unwrap(), payload);
    }

    #[test]
    fn unreadable_backup_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(read_from(&path), Err(StoreError::Corrupt(_))));
    }
}
