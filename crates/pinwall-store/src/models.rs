//! Domain model structs persisted as one snapshot document.
//!
//! Field names serialize in camelCase so the stored layout is exactly the
//! board collection shape the presentation layer renders from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use pinwall_shared::constants::{BOARD_TITLE_MAX, MAX_PINNED_POSTS, POST_TITLE_MAX};
use pinwall_shared::ordering::{partition_fixed_first, Ordered};
use pinwall_shared::palette;
use pinwall_shared::types::truncate_chars;
use pinwall_shared::{BoardId, PostId, Rejection};

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A titled content card within a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    /// At most [`POST_TITLE_MAX`] characters.
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Opaque image reference (remote URL or local handle).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub image_url: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or editing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

impl Post {
    /// Build a fresh post: new id, zero likes, every flag cleared, title
    /// truncated to [`POST_TITLE_MAX`] characters.
    pub fn new(draft: PostDraft) -> Self {
        Self {
            id: PostId::new(),
            title: truncate_chars(&draft.title, POST_TITLE_MAX),
            content: draft.content,
            image_url: draft.image_url.filter(|u| !u.is_empty()),
            likes: 0,
            is_liked: false,
            is_bookmarked: false,
            is_pinned: false,
            created_at: Utc::now(),
        }
    }

    /// Copy of this post with the editable fields replaced. Id, counters,
    /// flags and creation time are preserved.
    pub fn edited(&self, draft: PostDraft) -> Self {
        Self {
            title: truncate_chars(&draft.title, POST_TITLE_MAX),
            content: draft.content,
            image_url: draft.image_url.filter(|u| !u.is_empty()),
            ..self.clone()
        }
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }
}

impl Ordered for Post {
    type Key = PostId;

    fn key(&self) -> &PostId {
        &self.id
    }

    fn is_fixed(&self) -> bool {
        self.is_pinned
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A named container owning an ordered list of posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    /// At most [`BOARD_TITLE_MAX`] characters, never blank.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Background presentation token, opaque to the core.
    #[serde(default)]
    pub color: String,
    /// Text presentation token, opaque to the core.
    #[serde(default)]
    pub text_color: String,
    /// Stored order is display order; pinned posts lead.
    #[serde(default)]
    pub posts: Vec<Post>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or editing a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Palette name, background token, or any opaque token.
    #[serde(default = "default_color_token")]
    pub color: String,
    /// Explicit text token. Wins over whatever `color` resolves to.
    #[serde(default)]
    pub text_color: Option<String>,
}

fn default_color_token() -> String {
    palette::default_swatch().name.to_string()
}

impl BoardDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: color.into(),
            text_color: None,
        }
    }

    pub fn with_text_color(mut self, text_color: impl Into<String>) -> Self {
        self.text_color = Some(text_color.into());
        self
    }

    /// `(color, text_color)` for this draft. Palette tokens resolve to their
    /// pair; other tokens are kept verbatim with no text colour.
    fn colors(&self) -> (String, String) {
        let (color, resolved) = palette::resolve(&self.color);
        (color, self.text_color.clone().unwrap_or(resolved))
    }

    /// Validated, truncated title.
    fn checked_title(&self) -> Result<String, Rejection> {
        if self.title.trim().is_empty() {
            return Err(Rejection::EmptyTitle);
        }
        Ok(truncate_chars(&self.title, BOARD_TITLE_MAX))
    }
}

impl Board {
    /// Build a fresh, empty board.
    pub fn new(draft: BoardDraft) -> Result<Self, Rejection> {
        let title = draft.checked_title()?;
        let (color, text_color) = draft.colors();
        Ok(Self {
            id: BoardId::new(),
            title,
            description: draft.description,
            color,
            text_color,
            posts: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Copy of this board with title, description and colours replaced.
    /// Posts, id and creation time are untouched. Resubmitting the current
    /// non-palette colour keeps the current text colour.
    pub fn edited(&self, draft: BoardDraft) -> Result<Self, Rejection> {
        let title = draft.checked_title()?;
        let (color, mut text_color) = draft.colors();
        let unchanged_opaque = draft.text_color.is_none()
            && palette::lookup(&draft.color).is_none()
            && color == self.color;
        if unchanged_opaque {
            text_color = self.text_color.clone();
        }
        Ok(Self {
            title,
            description: draft.description,
            color,
            text_color,
            ..self.clone()
        })
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn pinned_count(&self) -> usize {
        self.posts.iter().filter(|p| p.is_pinned).count()
    }

    /// Pinned posts in stored order, used for the board preview.
    pub fn pinned_posts(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.is_pinned).collect()
    }

    pub fn find_post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Restore the pin invariants on data from an untrusted source: keep
    /// the first [`MAX_PINNED_POSTS`] pins, clear the rest, and move pinned
    /// posts to the front. Returns the number of pins cleared.
    pub fn normalize_pins(&mut self) -> usize {
        let mut seen = 0;
        let mut cleared = 0;
        for post in self.posts.iter_mut().filter(|p| p.is_pinned) {
            seen += 1;
            if seen > MAX_PINNED_POSTS {
                post.is_pinned = false;
                cleared += 1;
            }
        }
        self.posts = partition_fixed_first(&self.posts);
        cleared
    }
}

impl Ordered for Board {
    type Key = BoardId;

    fn key(&self) -> &BoardId {
        &self.id
    }
}

/// Treat `""` the same as a missing value.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_creation_defaults() {
        let post = Post::new(PostDraft::new("Hello", "World"));
        assert_eq!(post.likes, 0);
        assert!(!post.is_liked && !post.is_bookmarked && !post.is_pinned);
        assert_eq!(post.image_url, None);
    }

    #[test]
    fn test_post_title_truncated_to_26() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789ABCD";
        assert_eq!(long.chars().count(), 40);
        let post = Post::new(PostDraft::new(long, "x"));
        assert_eq!(post.title, &long[..26]);

        let edited = post.edited(PostDraft::new(long, "y"));
        assert_eq!(edited.title.chars().count(), 26);
        assert_eq!(edited.id, post.id);
        assert_eq!(edited.created_at, post.created_at);
    }

    #[test]
    fn test_empty_image_url_is_absent() {
        let post = Post::new(PostDraft::new("t", "c").with_image(""));
        assert_eq!(post.image_url, None);
    }

    #[test]
    fn test_board_requires_title() {
        assert_eq!(
            Board::new(BoardDraft::new("   ", "d", "sky")),
            Err(Rejection::EmptyTitle)
        );
    }

    #[test]
    fn test_board_title_truncated_and_color_resolved() {
        let board = Board::new(BoardDraft::new("A very long board title", "", "green")).unwrap();
        assert_eq!(board.title, "A very long boar");
        assert_eq!(board.color, "bg-green-100");
        assert_eq!(board.text_color, "text-green-800");
        assert!(board.posts.is_empty());
    }

    #[test]
    fn test_board_edit_keeps_posts() {
        let mut board = Board::new(BoardDraft::new("Trip", "desc", "sky")).unwrap();
        board.posts.push(Post::new(PostDraft::new("p", "c")));
        let edited = board.edited(BoardDraft::new("Trip 2", "new", "pink")).unwrap();
        assert_eq!(edited.posts, board.posts);
        assert_eq!(edited.id, board.id);
        assert_eq!(edited.title, "Trip 2");
        assert_eq!(edited.color, "bg-pink-100");
    }

    #[test]
    fn test_board_opaque_colors_pass_through() {
        let board = Board::new(
            BoardDraft::new("Trip", "", "bg-teal-50").with_text_color("text-teal-900"),
        )
        .unwrap();
        assert_eq!(board.color, "bg-teal-50");
        assert_eq!(board.text_color, "text-teal-900");

        let same = board.edited(BoardDraft::new("Trip", "", "bg-teal-50")).unwrap();
        assert_eq!(same.text_color, "text-teal-900");

        let other = board.edited(BoardDraft::new("Trip", "", "bg-lime-50")).unwrap();
        assert_eq!(other.color, "bg-lime-50");
        assert_eq!(other.text_color, "");

        let explicit = board
            .edited(BoardDraft::new("Trip", "", "sky").with_text_color("text-black"))
            .unwrap();
        assert_eq!(explicit.color, "bg-sky-100");
        assert_eq!(explicit.text_color, "text-black");
    }

    #[test]
    fn test_post_matches_case_insensitive() {
        let post = Post::new(PostDraft::new("Paris Trip", "Eiffel tower"));
        assert!(post.matches("trip"));
        assert!(post.matches("EIFFEL"));
        assert!(post.matches(""));
        assert!(!post.matches("tokyo"));
    }

    #[test]
    fn test_normalize_pins() {
        let mut board = Board::new(BoardDraft::new("b", "", "sky")).unwrap();
        for (i, pinned) in [false, true, true, false, true].into_iter().enumerate() {
            let mut p = Post::new(PostDraft::new(format!("p{i}"), ""));
            p.is_pinned = pinned;
            board.posts.push(p);
        }

        assert_eq!(board.normalize_pins(), 1);
        assert_eq!(board.pinned_count(), 2);
        let titles: Vec<&str> = board.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["p1", "p2", "p0", "p3", "p4"]);
    }

    #[test]
    fn test_legacy_post_json_loads() {
        let json = r#"{
            "id": "post-1",
            "title": "Old post",
            "content": "text",
            "imageUrl": "",
            "likes": 3,
            "isLiked": true,
            "isBookmarked": false,
            "createdAt": "2023-07-25T10:00:00.000Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId::from("post-1"));
        assert_eq!(post.image_url, None);
        assert!(!post.is_pinned);
        assert_eq!(post.likes, 3);
    }
}
