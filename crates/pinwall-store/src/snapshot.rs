//! Whole-collection snapshots.
//!
//! A snapshot is the complete board collection serialized as one JSON
//! document. Decoding is forgiving about legacy fields (see [`Board`]) but
//! anything that is not a board list is reported as
//! [`StoreError::Corrupt`].

use std::collections::HashSet;

use pinwall_shared::constants::{BOARDS_KEY, BOARD_TITLE_MAX, POST_TITLE_MAX};
use pinwall_shared::types::truncate_chars;
use pinwall_shared::{BoardId, PostId};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::Board;

/// Persistence contract for the board collection.
///
/// `load` yields `Ok(None)` when nothing was ever stored, which is distinct
/// from a stored empty collection.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<Vec<Board>>>;

    fn save(&mut self, boards: &[Board]) -> Result<()>;
}

pub fn encode(boards: &[Board]) -> Result<String> {
    Ok(serde_json::to_string(boards)?)
}

pub fn decode(raw: &str) -> Result<Vec<Board>> {
    let mut boards: Vec<Board> =
        serde_json::from_str(raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    repair(&mut boards);
    Ok(boards)
}

/// Bring decoded boards back within the model invariants: unique ids,
/// title caps and the pin rules. Older builds derived ids from the clock, so duplicates
/// are possible in real snapshots.
pub fn repair(boards: &mut [Board]) {
    let mut board_ids = HashSet::new();
    for board in boards.iter_mut() {
        if !board_ids.insert(board.id.clone()) {
            let fresh = BoardId::new();
            tracing::warn!(old_id = %board.id, new_id = %fresh, "reassigned duplicate board id");
            board.id = fresh.clone();
            board_ids.insert(fresh);
        }
        if board.title.chars().count() > BOARD_TITLE_MAX {
            board.title = truncate_chars(&board.title, BOARD_TITLE_MAX);
        }

        let mut post_ids = HashSet::new();
        for post in board.posts.iter_mut() {
            if !post_ids.insert(post.id.clone()) {
                let fresh = PostId::new();
                tracing::warn!(board_id = %board.id, old_id = %post.id, "reassigned duplicate post id");
                post.id = fresh.clone();
                post_ids.insert(fresh);
            }
            if post.title.chars().count() > POST_TITLE_MAX {
                tracing::warn!(board_id = %board.id, post_id = %post.id, "truncated over-long post title");
                post.title = truncate_chars(&post.title, POST_TITLE_MAX);
            }
        }

        let cleared = board.normalize_pins();
        if cleared > 0 {
            tracing::warn!(board_id = %board.id, cleared, "cleared pins beyond the per-board limit");
        }
    }
}

impl SnapshotStore for Database {
    fn load(&self) -> Result<Option<Vec<Board>>> {
        match self.get_value(BOARDS_KEY)? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, boards: &[Board]) -> Result<()> {
        let raw = encode(boards)?;
        self.put_value(BOARDS_KEY, &raw)?;
        tracing::debug!(boards = boards.len(), bytes = raw.len(), "snapshot written");
        Ok(())
    }
}
