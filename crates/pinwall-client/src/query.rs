//! Read-only views over the collection: board title filter and post search.

use pinwall_store::{Board, Post};

/// Post search criteria. The default filter matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Case-insensitive substring matched against title or content.
    pub query: String,
    pub bookmarked_only: bool,
}

impl PostFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            bookmarked_only: false,
        }
    }

    pub fn bookmarked(mut self) -> Self {
        self.bookmarked_only = true;
        self
    }

    fn accepts(&self, post: &Post) -> bool {
        if self.bookmarked_only && !post.is_bookmarked {
            return false;
        }
        post.matches(&self.query)
    }
}

/// Posts of `board` passing `filter`: pinned ones first, then the rest, each
/// group in stored order.
pub fn filter_posts<'a>(board: &'a Board, filter: &PostFilter) -> Vec<&'a Post> {
    let (pinned, rest): (Vec<&Post>, Vec<&Post>) = board
        .posts
        .iter()
        .filter(|p| filter.accepts(p))
        .partition(|p| p.is_pinned);
    pinned.into_iter().chain(rest).collect()
}

/// Boards whose title contains `query`, case-insensitively, in stored order.
/// An empty query matches every board.
pub fn filter_boards<'a>(boards: &'a [Board], query: &str) -> Vec<&'a Board> {
    let needle = query.to_lowercase();
    boards
        .iter()
        .filter(|b| needle.is_empty() || b.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinwall_store::{BoardDraft, PostDraft};

    fn board(posts: &[(&str, &str)]) -> Board {
        let mut board = Board::new(BoardDraft::new("Trip", "", "sky")).unwrap();
        for (title, content) in posts {
            board.posts.push(Post::new(PostDraft::new(*title, *content)));
        }
        board
    }

    fn titles(posts: Vec<&Post>) -> Vec<&str> {
        posts.into_iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_filter_boards_by_title() {
        let boards = vec![
            Board::new(BoardDraft::new("Paris Trip", "", "sky")).unwrap(),
            Board::new(BoardDraft::new("Tokyo Notes", "", "pink")).unwrap(),
        ];
        let hits = filter_boards(&boards, "trip");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Paris Trip");
        assert_eq!(filter_boards(&boards, "").len(), 2);
        assert!(filter_boards(&boards, "trip ").is_empty());
    }

    #[test]
    fn test_search_matches_title_or_content() {
        let b = board(&[("Beach", "sand"), ("Museum", "Beach nearby"), ("Park", "trees")]);
        assert_eq!(
            titles(filter_posts(&b, &PostFilter::search("BEACH"))),
            vec!["Beach", "Museum"]
        );
        assert_eq!(filter_posts(&b, &PostFilter::default()).len(), 3);
        // the query is matched as typed, whitespace included
        assert!(filter_posts(&b, &PostFilter::search("park ")).is_empty());
        assert_eq!(
            titles(filter_posts(&b, &PostFilter::search("beach "))),
            vec!["Museum"]
        );
    }

    #[test]
    fn test_bookmarked_only() {
        let mut b = board(&[("a", ""), ("b", ""), ("c", "")]);
        b.posts[1].is_bookmarked = true;
        b.posts[2].is_bookmarked = true;
        assert_eq!(
            titles(filter_posts(&b, &PostFilter::default().bookmarked())),
            vec!["b", "c"]
        );
        assert_eq!(
            titles(filter_posts(&b, &PostFilter::search("c").bookmarked())),
            vec!["c"]
        );
    }

    #[test]
    fn test_pinned_lead_without_reordering_rest() {
        let mut b = board(&[("a", ""), ("b", ""), ("c", ""), ("d", "")]);
        b.posts[3].is_pinned = true;
        b.posts[1].is_pinned = true;
        assert_eq!(
            titles(filter_posts(&b, &PostFilter::default())),
            vec!["b", "d", "a", "c"]
        );
    }
}
