//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

const FIELD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
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

/// Lays out the playfield, ghost, active piece and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a cell in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen origin of the playfield frame
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = snap.columns.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.rows.saturating_mul(self.cell_h).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for y in 0..snap.rows {
            for x in 0..snap.columns {
                match snap.cell(x as i32, y as i32).flatten() {
                    Some(color) => self.draw_block(fb, frame, x, y, color),
                    None => {
                        let empty = CellStyle::plain(FIELD_BG, FIELD_BG);
                        self.paint_cell(fb, frame, x, y, ' ', empty);
                    }
                }
            }
        }

        if let Some(ghost) = snap.ghost.filter(|_| !snap.game_over) {
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: FIELD_BG,
                bold: false,
                dim: true,
            };
            self.draw_piece(fb, snap, &ghost, |view, fb, x, y, _| {
                view.paint_cell(fb, frame, x, y, '░', style)
            });
        }

        if let Some(active) = snap.active {
            self.draw_piece(fb, snap, &active, |view, fb, x, y, color| {
                view.draw_block(fb, frame, x, y, color)
            });
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, &["GAME OVER", "r restart", "q quit"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    /// Visible cells only; rows above the field are skipped.
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        piece: &Piece,
        mut paint: impl FnMut(&Self, &mut FrameBuffer, u16, u16, Color),
    ) {
        for (x, y) in piece.cells() {
            if snap.cell(x, y).is_some() {
                paint(self, fb, x as u16, y as u16, piece.color);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Color) {
        let style = CellStyle {
            fg: color.rgb().into(),
            bg: FIELD_BG,
            bold: true,
            dim: false,
        };
        self.paint_cell(fb, frame, x, y, '█', style);
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = f.y;
        for (name, v) in [("SCORE", snap.score), ("LINES", snap.lines), ("LEVEL", snap.level)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            for (row, cols) in next.shape.rows().enumerate() {
                for (col, filled) in cols.enumerate() {
                    if filled {
                        let style = CellStyle {
                            fg: next.color.rgb().into(),
                            bold: true,
                            ..value
                        };
                        let cx = panel_x + col as u16 * self.cell_w;
                        fb.fill_rect(cx, y + row as u16, self.cell_w, 1, '█', style);
                    }
                }
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        let top = f.y.saturating_add(f.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}
