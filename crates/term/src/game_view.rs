//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure, no I/O.

use crate::core::{CellSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PuyoColor, BOARD_COLUMNS, BOARD_ROWS};

const PLAY_BG: Rgb = Rgb::new(24, 24, 36);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal view of the board and its side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_COLUMNS as u16) * self.cell_w + 2,
            (BOARD_ROWS as u16) * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        // Locked cells, row 0 at the top.
        for row in 0..BOARD_ROWS as u16 {
            for column in 0..BOARD_COLUMNS as u16 {
                let v = snap.board[row as usize][column as usize];
                match v.checked_sub(1).and_then(PuyoColor::from_index) {
                    Some(color) => self.draw_puyo(fb, start_x, start_y, column, row, color, false),
                    None => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        column,
                        row,
                        '·',
                        CellStyle::new(Rgb::new(70, 70, 85), PLAY_BG).dim(),
                    ),
                }
            }
        }

        for cell in snap.falling_cells() {
            self.draw_airborne(fb, start_x, start_y, cell, snap.cell_size);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over() {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = start_y.saturating_add(frame_h / 2);
            fb.put_str(
                x,
                y,
                text,
                CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold(),
            );
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Screen position of the top-left character of a board cell.
    pub fn cell_origin(&self, start_x: u16, start_y: u16, column: u16, row: u16) -> (u16, u16) {
        (
            start_x + 1 + column * self.cell_w,
            start_y + 1 + row * self.cell_h,
        )
    }

    fn draw_airborne(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: &CellSnapshot,
        cell_size: f32,
    ) {
        let row = cell.display_row(cell_size);
        // The secondary spawns above the board.
        if row < 0 || row >= BOARD_ROWS as i8 || cell.column < 0 || cell.column >= BOARD_COLUMNS as i8 {
            return;
        }
        self.draw_puyo(
            fb,
            start_x,
            start_y,
            cell.column as u16,
            row as u16,
            cell.color,
            true,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_puyo(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        column: u16,
        row: u16,
        color: PuyoColor,
        airborne: bool,
    ) {
        let mut style = CellStyle::new(puyo_rgb(color), PLAY_BG);
        if airborne {
            style = style.bold();
        }
        self.fill_cell(fb, start_x, start_y, column, row, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        column: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, column, row);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let (primary, secondary) = snap.next_pair;
        // Secondary sits on top of the primary at spawn.
        fb.put_str(panel_x, y, "██", CellStyle::new(puyo_rgb(secondary), PANEL_BG));
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "██", CellStyle::new(puyo_rgb(primary), PANEL_BG));
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PHASE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, phase_label(snap.phase), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pieces_spawned, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LOCKED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.cells_locked, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.seed, CellStyle { dim: true, ..value });
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

pub fn puyo_rgb(color: PuyoColor) -> Rgb {
    match color {
        PuyoColor::Red => Rgb::new(230, 70, 70),
        PuyoColor::Green => Rgb::new(90, 210, 100),
        PuyoColor::Blue => Rgb::new(80, 130, 235),
        PuyoColor::Yellow => Rgb::new(240, 215, 70),
        PuyoColor::Purple => Rgb::new(185, 100, 225),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Control => "CONTROL",
        Phase::Falling => "FALLING",
        Phase::GameOver => "OVER",
    }
}
