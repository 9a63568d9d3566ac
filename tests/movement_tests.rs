//! Pair geometry, shift legality and rotation kicks.

use puyo_drop::core::{can_shift, resolve_rotation, secondary_column_for, Board, Piece};
use puyo_drop::types::{Direction, Orientation, PairCell, PuyoColor, Spin, CELL_SIZE};

fn pair_at(column: i8) -> Piece {
    Piece::spawn(PuyoColor::Red, PuyoColor::Blue, column, CELL_SIZE)
}

fn stack(board: &mut Board, column: i8, n: usize) {
    for _ in 0..n {
        let row = board.height_of(column).unwrap();
        board.lock(column, row, PuyoColor::Green).unwrap();
    }
}

#[test]
fn test_spawned_pair_geometry() {
    let piece = pair_at(2);
    assert_eq!(piece.orientation(), Orientation::Top);
    assert_eq!(piece.active(), PairCell::Primary);
    assert!(piece.is_paired());

    let primary = piece.primary().unwrap();
    let secondary = piece.secondary().unwrap();
    assert_eq!((primary.column, primary.y), (2, 0.0));
    assert_eq!((secondary.column, secondary.y), (2, -CELL_SIZE));
}

#[test]
fn test_secondary_column_follows_orientation() {
    assert_eq!(secondary_column_for(Orientation::Top, 3), 3);
    assert_eq!(secondary_column_for(Orientation::Right, 3), 4);
    assert_eq!(secondary_column_for(Orientation::Bottom, 3), 3);
    assert_eq!(secondary_column_for(Orientation::Left, 3), 2);
}

#[test]
fn test_shift_rejected_at_walls() {
    let board = Board::new();

    let left_edge = pair_at(0);
    assert!(!can_shift(&left_edge, &board, Direction::Left, CELL_SIZE));
    assert!(can_shift(&left_edge, &board, Direction::Right, CELL_SIZE));

    let right_edge = pair_at(5);
    assert!(!can_shift(&right_edge, &board, Direction::Right, CELL_SIZE));
    assert!(can_shift(&right_edge, &board, Direction::Left, CELL_SIZE));
}

#[test]
fn test_shift_rejected_when_horizontal_pair_would_leave_board() {
    let board = Board::new();
    let mut piece = pair_at(4);
    assert_eq!(piece.rotate(Spin::Clockwise, &board, CELL_SIZE), Orientation::Right);
    assert_eq!(piece.column_span(), Some((4, 5)));

    assert!(!can_shift(&piece, &board, Direction::Right, CELL_SIZE));
    assert!(can_shift(&piece, &board, Direction::Left, CELL_SIZE));
}

#[test]
fn test_shift_rejected_into_taller_stack() {
    let mut board = Board::new();
    // Column 3 landing row 5, threshold 150.
    stack(&mut board, 3, 6);

    let mut piece = pair_at(2);
    assert!(can_shift(&piece, &board, Direction::Right, CELL_SIZE));

    piece.cell_mut(PairCell::Primary).unwrap().y = 200.0;
    piece.cell_mut(PairCell::Secondary).unwrap().y = 170.0;
    assert!(!can_shift(&piece, &board, Direction::Right, CELL_SIZE));
    assert!(can_shift(&piece, &board, Direction::Left, CELL_SIZE));
}

#[test]
fn test_shift_checks_each_cell_of_horizontal_pair() {
    let mut board = Board::new();
    // Column 0 landing row 1, threshold 30.
    stack(&mut board, 0, 10);

    let mut piece = pair_at(2);
    assert_eq!(
        piece.rotate(Spin::Anticlockwise, &Board::new(), CELL_SIZE),
        Orientation::Left
    );
    assert_eq!(piece.column_span(), Some((1, 2)));
    piece.cell_mut(PairCell::Primary).unwrap().y = 100.0;
    piece.cell_mut(PairCell::Secondary).unwrap().y = 100.0;

    // Primary's destination (column 1) is empty; only the secondary is blocked.
    assert!(!can_shift(&piece, &board, Direction::Left, CELL_SIZE));
    assert!(can_shift(&piece, &board, Direction::Right, CELL_SIZE));
}

#[test]
fn test_shift_rejected_into_full_column() {
    let mut board = Board::new();
    stack(&mut board, 1, 12);

    let piece = pair_at(2);
    assert!(!can_shift(&piece, &board, Direction::Left, CELL_SIZE));
}

#[test]
fn test_shift_moves_both_cells() {
    let mut piece = pair_at(2);
    piece.shift(Direction::Left);
    assert_eq!(piece.primary().unwrap().column, 1);
    assert_eq!(piece.secondary().unwrap().column, 1);
}

#[test]
fn test_rotation_from_side_orientations_is_always_free() {
    let mut board = Board::new();
    // Primary's column almost full; a Bottom secondary would sit inside it.
    stack(&mut board, 2, 11);

    let mut piece = pair_at(2);
    piece.rotate(Spin::Clockwise, &Board::new(), CELL_SIZE);
    assert_eq!(piece.orientation(), Orientation::Right);
    assert_eq!(
        resolve_rotation(&piece, &board, Spin::Clockwise, CELL_SIZE),
        Orientation::Bottom
    );
    assert_eq!(
        resolve_rotation(&piece, &board, Spin::Anticlockwise, CELL_SIZE),
        Orientation::Top
    );
}

#[test]
fn test_rotation_from_top_at_wall_kicks_to_bottom() {
    let board = Board::new();
    let piece = pair_at(0);

    // Left would put the secondary at column -1.
    assert_eq!(
        resolve_rotation(&piece, &board, Spin::Anticlockwise, CELL_SIZE),
        Orientation::Bottom
    );
    assert_eq!(
        resolve_rotation(&piece, &board, Spin::Clockwise, CELL_SIZE),
        Orientation::Right
    );
}

#[test]
fn test_rotation_from_top_into_blocked_column_kicks() {
    let mut board = Board::new();
    stack(&mut board, 3, 12);

    let mut piece = pair_at(2);
    assert_eq!(piece.rotate(Spin::Clockwise, &board, CELL_SIZE), Orientation::Bottom);

    let primary = piece.primary().unwrap();
    let secondary = piece.secondary().unwrap();
    assert_eq!(secondary.column, primary.column);
    assert_eq!(secondary.y, primary.y + CELL_SIZE);
}

#[test]
fn test_four_clockwise_turns_return_to_top() {
    let board = Board::new();
    let mut piece = pair_at(2);
    let seen: Vec<_> = (0..4)
        .map(|_| piece.rotate(Spin::Clockwise, &board, CELL_SIZE))
        .collect();
    assert_eq!(
        seen,
        vec![
            Orientation::Right,
            Orientation::Bottom,
            Orientation::Left,
            Orientation::Top
        ]
    );
}

#[test]
fn test_taking_a_cell_relabels_active() {
    let mut piece = pair_at(2);
    let taken = piece.take(PairCell::Primary).unwrap();
    assert_eq!(taken.color, PuyoColor::Red);
    assert!(!piece.is_paired());
    assert_eq!(piece.active(), PairCell::Secondary);

    let before = piece.orientation();
    assert_eq!(piece.rotate(Spin::Clockwise, &Board::new(), CELL_SIZE), before);
}
