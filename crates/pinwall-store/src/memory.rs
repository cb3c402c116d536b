//! In-process [`SnapshotStore`].
//!
//! Holds the serialized snapshot text rather than live values so it goes
//! through the same codec as the database and can be primed with arbitrary
//! (including broken) documents.

use crate::error::{Result, StoreError};
use crate::models::Board;
use crate::snapshot::{self, SnapshotStore};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    raw: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    /// An empty store: `load` reports that nothing was ever saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose stored document is exactly `raw`.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The currently stored document.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Board>>> {
        self.raw.as_deref().map(snapshot::decode).transpose()
    }

    fn save(&mut self, boards: &[Board]) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::WriteRefused("store is read-only".into()));
        }
        self.raw = Some(snapshot::encode(boards)?);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoardDraft;

    #[test]
    fn empty_then_saved() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        let board = Board::new(BoardDraft::new("Trip", "", "sky")).unwrap();
        store.save(std::slice::from_ref(&board)).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![board]));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn refused_write_keeps_previous_document() {
        let mut store = MemoryStore::with_raw("[]");
        store.set_fail_writes(true);
        assert!(store.save(&[]).is_err());
        assert_eq!(store.raw(), Some("[]"));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn corrupt_document_is_reported() {
        let store = MemoryStore::with_raw("nonsense");
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}
