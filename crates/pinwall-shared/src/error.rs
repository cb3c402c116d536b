use thiserror::Error;

use crate::constants::MAX_PINNED_POSTS;
use crate::types::{BoardId, PostId};

/// Why a state transition was refused.
///
/// A rejection never changes state. It is an expected outcome, surfaced to
/// the user as a notice, not a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Board title cannot be empty")]
    EmptyTitle,

    #[error("Board not found: {0}")]
    BoardNotFound(BoardId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("You can only pin up to {} posts", MAX_PINNED_POSTS)]
    PinLimitReached,

    #[error("Pinned posts cannot be used as a drop target")]
    PinnedTarget,

    #[error("Pinned posts cannot be moved")]
    PinnedSource,

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("New order does not match the existing items")]
    OrderMismatch,

    #[error("Please upload an image file")]
    NotAnImage,

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: u64, max: u64 },
}

impl Rejection {
    /// Stable, machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::EmptyTitle => "empty_title",
            Rejection::BoardNotFound(_) => "board_not_found",
            Rejection::PostNotFound(_) => "post_not_found",
            Rejection::PinLimitReached => "pin_limit_reached",
            Rejection::PinnedTarget => "pinned_target",
            Rejection::PinnedSource => "pinned_source",
            Rejection::IndexOutOfRange { .. } => "index_out_of_range",
            Rejection::OrderMismatch => "order_mismatch",
            Rejection::NotAnImage => "not_an_image",
            Rejection::ImageTooLarge { .. } => "image_too_large",
        }
    }

    /// Whether the rejection comes from a stale id rather than bad input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Rejection::BoardNotFound(_) | Rejection::PostNotFound(_))
    }
}
