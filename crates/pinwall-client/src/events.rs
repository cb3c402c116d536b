//! Machine-readable outcomes of wall mutations and the transient notices
//! shown for them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use pinwall_shared::{BoardId, PostId, Rejection};

/// An accepted state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WallEvent {
    BoardCreated { board_id: BoardId },
    BoardUpdated { board_id: BoardId },
    BoardDeleted { board_id: BoardId },
    BoardsReordered,
    PostCreated { board_id: BoardId, post_id: PostId },
    PostUpdated { board_id: BoardId, post_id: PostId },
    PostDeleted { board_id: BoardId, post_id: PostId },
    PostLiked { board_id: BoardId, post_id: PostId, liked: bool },
    PostBookmarked { board_id: BoardId, post_id: PostId, bookmarked: bool },
    PostPinned { board_id: BoardId, post_id: PostId, pinned: bool },
    PostsReordered { board_id: BoardId },
    BackupImported { boards_imported: usize },
}

impl WallEvent {
    pub fn code(&self) -> &'static str {
        match self {
            WallEvent::BoardCreated { .. } => "board_created",
            WallEvent::BoardUpdated { .. } => "board_updated",
            WallEvent::BoardDeleted { .. } => "board_deleted",
            WallEvent::BoardsReordered => "boards_reordered",
            WallEvent::PostCreated { .. } => "post_created",
            WallEvent::PostUpdated { .. } => "post_updated",
            WallEvent::PostDeleted { .. } => "post_deleted",
            WallEvent::PostLiked { .. } => "post_liked",
            WallEvent::PostBookmarked { .. } => "post_bookmarked",
            WallEvent::PostPinned { .. } => "post_pinned",
            WallEvent::PostsReordered { .. } => "posts_reordered",
            WallEvent::BackupImported { .. } => "backup_imported",
        }
    }

    /// User-facing text for the notice.
    pub fn message(&self) -> String {
        match self {
            WallEvent::BoardCreated { .. } => "New board created".into(),
            WallEvent::BoardUpdated { .. } => "Board updated".into(),
            WallEvent::BoardDeleted { .. } => "Board deleted".into(),
            WallEvent::BoardsReordered => "Boards reordered".into(),
            WallEvent::PostCreated { .. } => "New post created".into(),
            WallEvent::PostUpdated { .. } => "Post updated".into(),
            WallEvent::PostDeleted { .. } => "Post deleted".into(),
            WallEvent::PostLiked { liked: true, .. } => "Post liked".into(),
            WallEvent::PostLiked { liked: false, .. } => "Post unliked".into(),
            WallEvent::PostBookmarked { bookmarked: true, .. } => "Post bookmarked".into(),
            WallEvent::PostBookmarked { bookmarked: false, .. } => {
                "Post removed from bookmarks".into()
            }
            WallEvent::PostPinned { pinned: true, .. } => "Post pinned to top".into(),
            WallEvent::PostPinned { pinned: false, .. } => "Post unpinned".into(),
            WallEvent::PostsReordered { .. } => "Posts reordered".into(),
            WallEvent::BackupImported { boards_imported } => {
                format!("Imported {boards_imported} board(s)")
            }
        }
    }

    pub fn board_id(&self) -> Option<&BoardId> {
        match self {
            WallEvent::BoardCreated { board_id }
            | WallEvent::BoardUpdated { board_id }
            | WallEvent::BoardDeleted { board_id }
            | WallEvent::PostCreated { board_id, .. }
            | WallEvent::PostUpdated { board_id, .. }
            | WallEvent::PostDeleted { board_id, .. }
            | WallEvent::PostLiked { board_id, .. }
            | WallEvent::PostBookmarked { board_id, .. }
            | WallEvent::PostPinned { board_id, .. }
            | WallEvent::PostsReordered { board_id } => Some(board_id),
            WallEvent::BoardsReordered | WallEvent::BackupImported { .. } => None,
        }
    }

    pub fn post_id(&self) -> Option<&PostId> {
        match self {
            WallEvent::PostCreated { post_id, .. }
            | WallEvent::PostUpdated { post_id, .. }
            | WallEvent::PostDeleted { post_id, .. }
            | WallEvent::PostLiked { post_id, .. }
            | WallEvent::PostBookmarked { post_id, .. }
            | WallEvent::PostPinned { post_id, .. } => Some(post_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    Success,
    Rejected,
    Warning,
}

/// A short-lived message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    /// Event or rejection code.
    pub code: String,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(event: &WallEvent) -> Self {
        Self::new(NoticeKind::Success, event.code(), event.message())
    }

    pub fn rejected(rejection: &Rejection) -> Self {
        Self::new(NoticeKind::Rejected, rejection.code(), rejection.to_string())
    }

    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, code, message.into())
    }

    fn new(kind: NoticeKind, code: &str, message: String) -> Self {
        Self {
            kind,
            code: code.to_string(),
            message,
            issued_at: Utc::now(),
        }
    }

    /// Whether `ttl` has elapsed between issue time and `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match (now - self.issued_at).to_std() {
            Ok(age) => age >= ttl,
            // clock went backwards
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_messages() {
        let ev = |liked| WallEvent::PostLiked {
            board_id: BoardId::from("b"),
            post_id: PostId::from("p"),
            liked,
        };
        assert_eq!(ev(true).message(), "Post liked");
        assert_eq!(ev(false).message(), "Post unliked");
        assert_eq!(ev(true).code(), "post_liked");
        assert_eq!(ev(true).post_id(), Some(&PostId::from("p")));
    }

    #[test]
    fn test_event_serializes_tagged() {
        let ev = WallEvent::PostPinned {
            board_id: BoardId::from("b"),
            post_id: PostId::from("p"),
            pinned: true,
        };
        let value = serde_json::to_value(&ev).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "postPinned", "boardId": "b", "postId": "p", "pinned": true})
        );
    }

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::rejected(&Rejection::PinLimitReached);
        assert_eq!(notice.code, "pin_limit_reached");
        assert_eq!(notice.message, "You can only pin up to 2 posts");

        let ttl = Duration::from_secs(5);
        let issued = notice.issued_at;
        assert!(!notice.is_expired(issued, ttl));
        assert!(!notice.is_expired(issued + chrono::Duration::milliseconds(4_999), ttl));
        assert!(notice.is_expired(issued + chrono::Duration::seconds(5), ttl));
        assert!(!notice.is_expired(issued - chrono::Duration::seconds(1), ttl));
    }
}
