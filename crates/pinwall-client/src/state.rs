//! The wall session: current collection, selection and latest notice, bound
//! to a [`SnapshotStore`].
//!
//! Every accepted mutation replaces the collection and is written through
//! to the store as a whole snapshot. A failed write never rolls back the
//! in-memory state: it stays authoritative until a later write succeeds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use pinwall_shared::{BoardId, PostId, Rejection};
use pinwall_store::backup::{self, BackupPayload, ImportStats};
use pinwall_store::{seed, Board, BoardDraft, Post, PostDraft, SnapshotStore, StoreError};

use crate::commands::{boards, posts, Transition};
use crate::config::WallConfig;
use crate::events::{Notice, WallEvent};
use crate::query::{self, PostFilter};

/// Outcome of an accepted mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub event: WallEvent,
    /// Whether the resulting snapshot reached the store.
    pub persisted: bool,
}

pub struct Wall<S: SnapshotStore> {
    store: S,
    boards: Vec<Board>,
    selected: Option<BoardId>,
    notice: Option<Notice>,
    notice_ttl: Duration,
    /// An accepted change failed to reach the store. A snapshot that could
    /// not be read on open does not count: it is only replaced by the next
    /// accepted mutation.
    dirty: bool,
}

impl<S: SnapshotStore> Wall<S> {
    /// Load the collection from `store`.
    ///
    /// - nothing stored: seed (when enabled) and write the seed immediately
    /// - a stored empty collection stays empty
    /// - unreadable snapshot: seed in memory only, leaving the stored
    ///   document alone until the next accepted mutation overwrites it
    pub fn open(store: S, config: &WallConfig) -> Self {
        let mut wall = Self {
            store,
            boards: Vec::new(),
            selected: None,
            notice: None,
            notice_ttl: config.notice_ttl(),
            dirty: false,
        };

        match wall.store.load() {
            Ok(Some(boards)) => {
                info!(boards = boards.len(), "loaded wall");
                wall.boards = boards;
            }
            Ok(None) if config.seed_on_first_run => {
                info!("no stored wall, seeding sample board");
                wall.boards = seed::sample_boards();
                wall.persist();
            }
            Ok(None) => {
                info!("no stored wall, starting empty");
            }
            Err(e) => {
                warn!(error = %e, "stored wall unreadable, falling back to sample board");
                wall.boards = seed::sample_boards();
                wall.notice = Some(Notice::warning(
                    "load_failed",
                    "Saved boards could not be read; showing sample board",
                ));
            }
        }

        wall
    }

    // -- Boards --------------------------------------------------------------

    pub fn create_board(&mut self, draft: BoardDraft) -> Result<Receipt, Rejection> {
        let result = boards::create_board(&self.boards, draft);
        self.apply(result)
    }

    pub fn update_board(&mut self, id: &BoardId, draft: BoardDraft) -> Result<Receipt, Rejection> {
        let result = boards::update_board(&self.boards, id, draft);
        self.apply(result)
    }

    /// Delete a board. The selection clears only if it pointed at this board.
    pub fn delete_board(&mut self, id: &BoardId) -> Result<Receipt, Rejection> {
        let result = boards::delete_board(&self.boards, id);
        let receipt = self.apply(result)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Ok(receipt)
    }

    pub fn reorder_boards(&mut self, order: &[BoardId]) -> Result<Receipt, Rejection> {
        let result = boards::reorder_boards(&self.boards, order);
        self.apply(result)
    }

    pub fn move_board(&mut self, source: &BoardId, target: &BoardId) -> Result<Receipt, Rejection> {
        let result = boards::move_board(&self.boards, source, target);
        self.apply(result)
    }

    // -- Posts ---------------------------------------------------------------

    pub fn create_post(&mut self, board_id: &BoardId, draft: PostDraft) -> Result<Receipt, Rejection> {
        let result = posts::create_post(&self.boards, board_id, draft);
        self.apply(result)
    }

    pub fn update_post(
        &mut self,
        board_id: &BoardId,
        post_id: &PostId,
        draft: PostDraft,
    ) -> Result<Receipt, Rejection> {
        let result = posts::update_post(&self.boards, board_id, post_id, draft);
        self.apply(result)
    }

    pub fn delete_post(&mut self, board_id: &BoardId, post_id: &PostId) -> Result<Receipt, Rejection> {
        let result = posts::delete_post(&self.boards, board_id, post_id);
        self.apply(result)
    }

    pub fn like_post(&mut self, board_id: &BoardId, post_id: &PostId) -> Result<Receipt, Rejection> {
        let result = posts::like_post(&self.boards, board_id, post_id);
        self.apply(result)
    }

    pub fn bookmark_post(
        &mut self,
        board_id: &BoardId,
        post_id: &PostId,
    ) -> Result<Receipt, Rejection> {
        let result = posts::bookmark_post(&self.boards, board_id, post_id);
        self.apply(result)
    }

    pub fn pin_post(&mut self, board_id: &BoardId, post_id: &PostId) -> Result<Receipt, Rejection> {
        let result = posts::pin_post(&self.boards, board_id, post_id);
        self.apply(result)
    }

    pub fn reorder_posts(
        &mut self,
        board_id: &BoardId,
        source: &PostId,
        target: &PostId,
    ) -> Result<Receipt, Rejection> {
        let result = posts::reorder_posts(&self.boards, board_id, source, target);
        self.apply(result)
    }

    // -- Selection -----------------------------------------------------------

    pub fn select_board(&mut self, id: &BoardId) -> Result<(), Rejection> {
        if !self.boards.iter().any(|b| &b.id == id) {
            return Err(Rejection::BoardNotFound(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected board, or `None` when nothing is selected or the
    /// selection no longer exists.
    pub fn selected_board(&self) -> Option<&Board> {
        let id = self.selected.as_ref()?;
        self.boards.iter().find(|b| &b.id == id)
    }

    // -- Queries -------------------------------------------------------------

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn post(&self, board_id: &BoardId, post_id: &PostId) -> Option<&Post> {
        self.board(board_id)?.find_post(post_id)
    }

    /// Pinned posts of a board in stored order, for its preview card.
    pub fn board_preview(&self, board_id: &BoardId) -> Result<Vec<&Post>, Rejection> {
        self.board(board_id)
            .map(Board::pinned_posts)
            .ok_or_else(|| Rejection::BoardNotFound(board_id.clone()))
    }

    pub fn visible_boards(&self, query: &str) -> Vec<&Board> {
        query::filter_boards(&self.boards, query)
    }

    /// Posts of `board_id` passing `filter`, pinned first.
    pub fn visible_posts(&self, board_id: &BoardId, filter: &PostFilter) -> Result<Vec<&Post>, Rejection> {
        let board = self
            .board(board_id)
            .ok_or_else(|| Rejection::BoardNotFound(board_id.clone()))?;
        Ok(query::filter_posts(board, filter))
    }

    /// The latest notice, while it is younger than the configured lifetime.
    pub fn notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired(now, self.notice_ttl))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Whether an accepted change is still waiting for a successful write.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // -- Backup --------------------------------------------------------------

    pub fn export_backup(&self) -> BackupPayload {
        backup::export(&self.boards)
    }

    /// Append boards from `payload` whose ids are not already on the wall.
    pub fn import_backup(&mut self, payload: &BackupPayload) -> (Receipt, ImportStats) {
        let (boards, stats) = backup::merge(&self.boards, payload);
        info!(
            imported = stats.boards_imported,
            skipped = stats.boards_skipped,
            posts = stats.posts_imported,
            "backup merged"
        );
        let transition = Transition::new(
            boards,
            WallEvent::BackupImported {
                boards_imported: stats.boards_imported,
            },
        );
        (self.accept(transition), stats)
    }

    // -- Persistence ---------------------------------------------------------

    /// Retry writing the current collection after an earlier failure.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        self.store.save(&self.boards)?;
        self.dirty = false;
        info!(boards = self.boards.len(), "pending changes written");
        Ok(())
    }

    fn apply(&mut self, result: Result<Transition, Rejection>) -> Result<Receipt, Rejection> {
        match result {
            Ok(transition) => Ok(self.accept(transition)),
            Err(rejection) => {
                warn!(code = rejection.code(), reason = %rejection, "mutation rejected");
                self.notice = Some(Notice::rejected(&rejection));
                Err(rejection)
            }
        }
    }

    fn accept(&mut self, transition: Transition) -> Receipt {
        let Transition { boards, event } = transition;
        self.boards = boards;
        info!(
            event = event.code(),
            board_id = event.board_id().map(BoardId::as_str),
            post_id = event.post_id().map(PostId::as_str),
            "mutation accepted"
        );

        let persisted = self.persist();
        self.notice = Some(if persisted {
            Notice::success(&event)
        } else {
            Notice::warning(
                "save_failed",
                format!("{} (changes not saved)", event.message()),
            )
        });
        Receipt { event, persisted }
    }

    fn persist(&mut self) -> bool {
        match self.store.save(&self.boards) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                error!(error = %e, "failed to write wall snapshot");
                self.dirty = true;
                self.notice = Some(Notice::warning("save_failed", "Changes could not be saved"));
                false
            }
        }
    }
}
