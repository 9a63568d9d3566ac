use puyo_drop::core::{CellSnapshot, GameSnapshot, GameState};
use puyo_drop::term::{AnchorY, GameView, Viewport};
use puyo_drop::types::{PairCell, Phase, PuyoColor};

// 6 cells * 2 chars + border, 12 rows + border.
const VP: Viewport = Viewport {
    width: 14,
    height: 14,
};

fn empty_snapshot() -> GameSnapshot {
    let mut snap = GameState::new(1).snapshot();
    snap.primary = None;
    snap.secondary = None;
    snap
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, VP);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(13, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = empty_snapshot();
    snap.board[11][0] = PuyoColor::Red.index() + 1;

    let fb = GameView::default().render(&snap, VP);

    // Inside border: (1,1) origin.
    let y0 = 1 + 11;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
    assert_ne!(fb.get(1, y0).unwrap().style.fg, fb.get(3, y0).unwrap().style.fg);
}

#[test]
fn term_view_draws_airborne_cells_at_nearest_row() {
    let mut snap = empty_snapshot();
    snap.primary = Some(CellSnapshot {
        which: PairCell::Primary,
        color: PuyoColor::Blue,
        column: 4,
        y: 95.0,
    });
    snap.secondary = Some(CellSnapshot {
        which: PairCell::Secondary,
        color: PuyoColor::Green,
        column: 5,
        y: 95.0,
    });

    let fb = GameView::default().render(&snap, VP);

    // y = 95 with 30-unit cells rounds to row 3.
    let y = 1 + 3;
    for x in [9, 10, 11, 12] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "x = {x}");
    }
    assert_ne!(fb.get(9, y).unwrap().style.fg, fb.get(11, y).unwrap().style.fg);
    assert_eq!(fb.get(9, y + 1).unwrap().ch, '·');
}

#[test]
fn term_view_skips_cells_above_the_board() {
    let mut snap = empty_snapshot();
    snap.secondary = Some(CellSnapshot {
        which: PairCell::Secondary,
        color: PuyoColor::Yellow,
        column: 2,
        y: -30.0,
    });

    let fb = GameView::default().render(&snap, VP);
    assert!(fb.cells().iter().all(|c| c.ch != '█'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.pieces_spawned = 37;
    snap.cells_locked = 70;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(40, 14));

    let text: Vec<String> = (0..14).map(|y| fb.row_text(y)).collect();
    let joined = text.join("\n");
    for needle in ["NEXT", "PHASE", "CONTROL", "PIECES", "37", "LOCKED", "70"] {
        assert!(joined.contains(needle), "missing {needle}:\n{joined}");
    }
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = empty_snapshot();
    snap.phase = Phase::GameOver;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, VP);

    assert!(fb.row_text(7).contains("GAME OVER"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = empty_snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));
    view.render_into(&snap, VP, &mut fb);
    assert_eq!((fb.width(), fb.height()), (14, 14));
    assert_eq!(fb.cells().len(), 14 * 14);
}
