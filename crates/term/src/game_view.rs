//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, EMPTY};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

const CONTROLS: [(&str, &str); 5] = [
    ("←→", "move"),
    ("↓", "drop"),
    ("q/w", "rotate"),
    ("r", "restart"),
    ("esc", "quit"),
];

/// Display color for a board color id: hue `id * 40`, 70% saturation,
/// 50% lightness.
pub fn cell_color(id: Cell) -> Rgb {
    Rgb::from_hsl(f32::from(id) * 40.0, 0.7, 0.5)
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_controls: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            show_controls: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            show_controls: true,
        }
    }

    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Size of the bordered play area in terminal cells
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = clamp_u16(snap.board.cols()).saturating_mul(self.cell_w);
        let h = clamp_u16(snap.board.rows()).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Cells past the viewport edge are clipped.
        'rows: for y in 0..snap.board.rows() {
            for x in 0..snap.board.cols() {
                let Some((px, py)) = self.cell_origin(start_x, start_y, x, y) else {
                    if x == 0 {
                        break 'rows;
                    }
                    break;
                };
                if py >= fb.height() {
                    break 'rows;
                }
                if px >= fb.width() {
                    break;
                }

                match snap.composited_cell(x as i32, y as i32) {
                    Some(id) if id != EMPTY => self.draw_filled_cell(fb, px, py, id),
                    _ => self.draw_empty_cell(fb, px, py),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..(w - 1).min(fb.width()) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..(h - 1).min(fb.height()) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAY_BG,
            bold: false,
            dim: true,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    fn draw_filled_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, id: Cell) {
        let style = CellStyle {
            fg: cell_color(id),
            bg: PLAY_BG,
            bold: true,
            dim: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    /// Top-left terminal position of board cell (x, y), if it is addressable
    fn cell_origin(&self, start_x: u16, start_y: u16, x: usize, y: usize) -> Option<(u16, u16)> {
        let dx = u16::try_from(x).ok()?.checked_mul(self.cell_w)?;
        let dy = u16::try_from(y).ok()?.checked_mul(self.cell_h)?;
        let px = start_x.checked_add(1)?.checked_add(dx)?;
        let py = start_y.checked_add(1)?.checked_add(dy)?;
        Some((px, py))
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
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        if !self.show_controls {
            return;
        }

        let hint = CellStyle { dim: true, ..value };
        for (keys, what) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, keys, value);
            fb.put_str(panel_x.saturating_add(5), y, what, hint);
            y = y.saturating_add(1);
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
