//! State transitions over the board collection.
//!
//! Every function takes the current collection by reference and either
//! returns the complete next collection together with the event describing
//! what happened, or a [`Rejection`] leaving the input untouched. Nothing
//! here touches storage; persisting the result is the caller's job.
//!
//! [`Rejection`]: pinwall_shared::Rejection

pub mod boards;
pub mod posts;

use pinwall_shared::{BoardId, Rejection};
use pinwall_store::Board;

use crate::events::WallEvent;

/// The next collection plus the event that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub boards: Vec<Board>,
    pub event: WallEvent,
}

impl Transition {
    pub fn new(boards: Vec<Board>, event: WallEvent) -> Self {
        Self { boards, event }
    }
}

pub(crate) fn board_index(boards: &[Board], id: &BoardId) -> Result<usize, Rejection> {
    boards
        .iter()
        .position(|b| &b.id == id)
        .ok_or_else(|| Rejection::BoardNotFound(id.clone()))
}
