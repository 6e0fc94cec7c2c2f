use super::*;
use crate::error::EngineError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2, Pos::new(3, 4));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
    assert_eq!(Pos::try_new(8, 3), None);
    assert_eq!(Pos::try_new(2, 3), Some(Pos::new(2, 3)));
    assert!(Pos::new(7, 7).on_board());
    assert!(!Pos { row: 8, col: 0 }.on_board());
    assert!(!Pos { row: 0, col: 8 }.on_board());
}

#[test]
fn test_pos_offset_stops_at_edge() {
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[63], Pos::new(7, 7));
}

#[test]
fn test_directions_are_distinct_unit_offsets() {
    for (i, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
        assert!((dr, dc) != (0, 0));
        assert!(dr.abs() <= 1 && dc.abs() <= 1);
        assert!(!DIRECTIONS[i + 1..].contains(&(dr, dc)));
    }
}

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::White);
    assert_eq!(board.get(Pos::new(4, 3)), Stone::White);
    assert_eq!(board.count(Stone::Black), 2);
    assert_eq!(board.count(Stone::White), 2);
    assert_eq!(board.empty_count(), 60);
}

#[test]
fn test_owner_bounds() {
    let board = Board::new();
    assert_eq!(board.owner(3, 3), Ok(Stone::Black));
    assert_eq!(board.owner(0, 0), Ok(Stone::Empty));
    assert_eq!(
        board.owner(-1, 2),
        Err(EngineError::OutOfBounds { row: -1, col: 2 })
    );
    assert_eq!(
        board.owner(3, 8),
        Err(EngineError::OutOfBounds { row: 3, col: 8 })
    );
    assert!(board.in_bounds(7, 0));
    assert!(!board.in_bounds(7, 8));
}

#[test]
fn test_set_keeps_single_owner() {
    let mut board = Board::empty();
    let pos = Pos::new(2, 5);
    board.set(pos, Stone::Black);
    board.set(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.black.get(pos));
    board.set(pos, Stone::Empty);
    assert!(board.is_empty(pos));
    assert_eq!(board, Board::empty());
}

#[test]
fn test_snapshot_round_trip() {
    let board = Board::new();
    let text = board.to_string();
    assert_eq!(text.lines().nth(3), Some(". . . B W . . ."));
    assert_eq!(text.parse::<Board>(), Ok(board));
}

#[test]
fn test_snapshot_accepts_compact_rows() {
    let text = "\
--------
--------
--------
---BW---
---WB---
--------
--------
-------b
";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::White);
    assert_eq!(board.stone_count(), 5);
}

#[test]
fn test_snapshot_rejects_bad_input() {
    assert!(matches!("B W".parse::<Board>(), Err(EngineError::Parse(_))));

    let mut rows = vec!["........"; 8];
    rows[2] = "...X....";
    assert!(matches!(
        rows.join("\n").parse::<Board>(),
        Err(EngineError::Parse(_))
    ));

    let nine_rows = vec!["........"; 9].join("\n");
    assert!(matches!(
        nine_rows.parse::<Board>(),
        Err(EngineError::Parse(_))
    ));
}
