use pinwall_shared::constants::MAX_PINNED_POSTS;
use pinwall_shared::ordering;
use pinwall_shared::{BoardId, PostId, Rejection};
use pinwall_store::{Board, Post, PostDraft};

use super::{board_index, Transition};
use crate::events::WallEvent;

/// Run `f` against one board and splice its result into a copy of the
/// collection.
fn with_board<F>(boards: &[Board], board_id: &BoardId, f: F) -> Result<Transition, Rejection>
where
    F: FnOnce(&Board) -> Result<(Board, WallEvent), Rejection>,
{
    let idx = board_index(boards, board_id)?;
    let (updated, event) = f(&boards[idx])?;

    let mut next = boards.to_vec();
    next[idx] = updated;
    Ok(Transition::new(next, event))
}

/// Run `f` against one post and splice the changed post back into its board.
fn with_post<F>(
    boards: &[Board],
    board_id: &BoardId,
    post_id: &PostId,
    f: F,
) -> Result<Transition, Rejection>
where
    F: FnOnce(&Board, &Post) -> Result<(Post, WallEvent), Rejection>,
{
    with_board(boards, board_id, |board| {
        let idx = post_index(board, post_id)?;
        let (post, event) = f(board, &board.posts[idx])?;

        let mut next = board.clone();
        next.posts[idx] = post;
        Ok((next, event))
    })
}

fn post_index(board: &Board, post_id: &PostId) -> Result<usize, Rejection> {
    ordering::position_of(&board.posts, post_id)
        .ok_or_else(|| Rejection::PostNotFound(post_id.clone()))
}

/// Append a post to the end of a board.
pub fn create_post(
    boards: &[Board],
    board_id: &BoardId,
    draft: PostDraft,
) -> Result<Transition, Rejection> {
    with_board(boards, board_id, |board| {
        let post = Post::new(draft);
        let event = WallEvent::PostCreated {
            board_id: board.id.clone(),
            post_id: post.id.clone(),
        };

        let mut next = board.clone();
        next.posts.push(post);
        Ok((next, event))
    })
}

/// Replace title, content and image of a post.
pub fn update_post(
    boards: &[Board],
    board_id: &BoardId,
    post_id: &PostId,
    draft: PostDraft,
) -> Result<Transition, Rejection> {
    with_post(boards, board_id, post_id, |board, post| {
        let event = WallEvent::PostUpdated {
            board_id: board.id.clone(),
            post_id: post.id.clone(),
        };
        Ok((post.edited(draft), event))
    })
}

pub fn delete_post(
    boards: &[Board],
    board_id: &BoardId,
    post_id: &PostId,
) -> Result<Transition, Rejection> {
    with_board(boards, board_id, |board| {
        let idx = post_index(board, post_id)?;

        let mut next = board.clone();
        next.posts.remove(idx);
        let event = WallEvent::PostDeleted {
            board_id: board.id.clone(),
            post_id: post_id.clone(),
        };
        Ok((next, event))
    })
}

/// Toggle the like flag, moving the counter with it. The counter never
/// drops below zero.
pub fn like_post(
    boards: &[Board],
    board_id: &BoardId,
    post_id: &PostId,
) -> Result<Transition, Rejection> {
    with_post(boards, board_id, post_id, |board, post| {
        let liked = !post.is_liked;
        let likes = if liked {
            post.likes.saturating_add(1)
        } else {
            post.likes.saturating_sub(1)
        };
        let event = WallEvent::PostLiked {
            board_id: board.id.clone(),
            post_id: post.id.clone(),
            liked,
        };
        Ok((
            Post {
                likes,
                is_liked: liked,
                ..post.clone()
            },
            event,
        ))
    })
}

pub fn bookmark_post(
    boards: &[Board],
    board_id: &BoardId,
    post_id: &PostId,
) -> Result<Transition, Rejection> {
    with_post(boards, board_id, post_id, |board, post| {
        let bookmarked = !post.is_bookmarked;
        let event = WallEvent::PostBookmarked {
            board_id: board.id.clone(),
            post_id: post.id.clone(),
            bookmarked,
        };
        Ok((
            Post {
                is_bookmarked: bookmarked,
                ..post.clone()
            },
            event,
        ))
    })
}

/// Toggle the pin flag.
///
/// Unpinning always succeeds. Pinning fails with
/// [`Rejection::PinLimitReached`] once the board already holds
/// [`MAX_PINNED_POSTS`] pins. Either way pinned posts are moved to the
/// front afterwards, keeping their relative order.
pub fn pin_post(
    boards: &[Board],
    board_id: &BoardId,
    post_id: &PostId,
) -> Result<Transition, Rejection> {
    with_board(boards, board_id, |board| {
        let idx = post_index(board, post_id)?;
        let pinned = !board.posts[idx].is_pinned;
        if pinned && board.pinned_count() >= MAX_PINNED_POSTS {
            return Err(Rejection::PinLimitReached);
        }

        let mut posts = board.posts.clone();
        posts[idx].is_pinned = pinned;
        // an unpinned post rejoins the unpinned run at its head
        if !pinned {
            let post = posts.remove(idx);
            let first_unpinned = posts.iter().take_while(|p| p.is_pinned).count();
            posts.insert(first_unpinned, post);
        }

        let next = Board {
            posts: ordering::partition_fixed_first(&posts),
            ..board.clone()
        };
        let event = WallEvent::PostPinned {
            board_id: board.id.clone(),
            post_id: post_id.clone(),
            pinned,
        };
        Ok((next, event))
    })
}

/// Drag the post `source` into the slot held by `target`. Pinned posts are
/// neither draggable nor valid drop targets.
pub fn reorder_posts(
    boards: &[Board],
    board_id: &BoardId,
    source: &PostId,
    target: &PostId,
) -> Result<Transition, Rejection> {
    with_board(boards, board_id, |board| {
        let posts = ordering::reorder_by_key(&board.posts, source, target, |id| {
            Rejection::PostNotFound(id.clone())
        })?;
        let next = Board {
            posts,
            ..board.clone()
        };
        Ok((
            next,
            WallEvent::PostsReordered {
                board_id: board.id.clone(),
            },
        ))
    })
}
