use pinwall_shared::ordering;
use pinwall_shared::{BoardId, Rejection};
use pinwall_store::{Board, BoardDraft};

use super::{board_index, Transition};
use crate::events::WallEvent;

/// Append a new, empty board.
pub fn create_board(boards: &[Board], draft: BoardDraft) -> Result<Transition, Rejection> {
    let board = Board::new(draft)?;
    let event = WallEvent::BoardCreated {
        board_id: board.id.clone(),
    };

    let mut next = boards.to_vec();
    next.push(board);
    Ok(Transition::new(next, event))
}

/// Replace title, description and colour of a board. Posts are untouched.
pub fn update_board(
    boards: &[Board],
    id: &BoardId,
    draft: BoardDraft,
) -> Result<Transition, Rejection> {
    let idx = board_index(boards, id)?;
    let updated = boards[idx].edited(draft)?;

    let mut next = boards.to_vec();
    next[idx] = updated;
    Ok(Transition::new(
        next,
        WallEvent::BoardUpdated {
            board_id: id.clone(),
        },
    ))
}

pub fn delete_board(boards: &[Board], id: &BoardId) -> Result<Transition, Rejection> {
    let idx = board_index(boards, id)?;

    let mut next = boards.to_vec();
    next.remove(idx);
    Ok(Transition::new(
        next,
        WallEvent::BoardDeleted {
            board_id: id.clone(),
        },
    ))
}

/// Replace the board order wholesale. `order` must list every board id
/// exactly once.
pub fn reorder_boards(boards: &[Board], order: &[BoardId]) -> Result<Transition, Rejection> {
    let next = ordering::reorder_to_match(boards, order)?;
    Ok(Transition::new(next, WallEvent::BoardsReordered))
}

/// Drag the board `source` into the slot held by `target`.
pub fn move_board(
    boards: &[Board],
    source: &BoardId,
    target: &BoardId,
) -> Result<Transition, Rejection> {
    let next = ordering::reorder_by_key(boards, source, target, |id| {
        Rejection::BoardNotFound(id.clone())
    })?;
    Ok(Transition::new(next, WallEvent::BoardsReordered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinwall_store::{seed, Post, PostDraft};

    fn wall(titles: &[&str]) -> Vec<Board> {
        titles
            .iter()
            .map(|t| Board::new(BoardDraft::new(*t, "", "sky")).unwrap())
            .collect()
    }

    fn titles(boards: &[Board]) -> Vec<&str> {
        boards.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_create_board_appends() {
        let boards = wall(&["One"]);
        let t = create_board(&boards, BoardDraft::new("Trip", "desc", "sky")).unwrap();
        assert_eq!(titles(&t.boards), vec!["One", "Trip"]);
        assert!(t.boards[1].posts.is_empty());
        assert_eq!(t.event.board_id(), Some(&t.boards[1].id));
        // input untouched
        assert_eq!(boards.len(), 1);
    }

    #[test]
    fn test_create_board_rejects_empty_title() {
        assert_eq!(
            create_board(&[], BoardDraft::new("", "desc", "sky")),
            Err(Rejection::EmptyTitle)
        );
    }

    #[test]
    fn test_update_board_truncates_and_keeps_posts() {
        let mut boards = wall(&["Trip"]);
        boards[0].posts.push(Post::new(PostDraft::new("p", "c")));
        let id = boards[0].id.clone();

        let t = update_board(&boards, &id, BoardDraft::new("Seventeen chars!!", "d", "pink")).unwrap();
        assert_eq!(t.boards[0].title, "Seventeen chars!");
        assert_eq!(t.boards[0].posts, boards[0].posts);
        assert_eq!(t.boards[0].created_at, boards[0].created_at);
    }

    #[test]
    fn test_update_keeps_text_color_of_unchanged_opaque_color() {
        let boards = seed::sample_boards();
        let before = &boards[0];
        let draft = BoardDraft::new(
            before.title.clone(),
            before.description.clone(),
            before.color.clone(),
        );

        let t = update_board(&boards, &before.id, draft).unwrap();
        assert_eq!(t.boards[0].color, "bg-sky-50");
        assert_eq!(t.boards[0].text_color, "text-sky-800");

        let retinted = update_board(
            &boards,
            &before.id,
            BoardDraft::new("Places", "", "bg-sky-50").with_text_color("text-sky-900"),
        )
        .unwrap();
        assert_eq!(retinted.boards[0].text_color, "text-sky-900");
    }

    #[test]
    fn test_update_missing_board() {
        let boards = wall(&["Trip"]);
        let missing = BoardId::from("nope");
        assert_eq!(
            update_board(&boards, &missing, BoardDraft::new("x", "", "sky")),
            Err(Rejection::BoardNotFound(missing))
        );
    }

    #[test]
    fn test_delete_board() {
        let boards = wall(&["A", "B", "C"]);
        let t = delete_board(&boards, &boards[1].id).unwrap();
        assert_eq!(titles(&t.boards), vec!["A", "C"]);
        assert!(delete_board(&t.boards, &boards[1].id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_reorder_boards_permutation() {
        let boards = wall(&["A", "B", "C"]);
        let order = vec![boards[2].id.clone(), boards[0].id.clone(), boards[1].id.clone()];
        let t = reorder_boards(&boards, &order).unwrap();
        assert_eq!(titles(&t.boards), vec!["C", "A", "B"]);

        assert_eq!(
            reorder_boards(&boards, &order[..2]),
            Err(Rejection::OrderMismatch)
        );
    }

    #[test]
    fn test_move_board() {
        let boards = wall(&["A", "B", "C"]);
        let t = move_board(&boards, &boards[0].id, &boards[2].id).unwrap();
        assert_eq!(titles(&t.boards), vec!["B", "C", "A"]);
        assert_eq!(t.event, WallEvent::BoardsReordered);
    }
}
