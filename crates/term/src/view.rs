//! LifeView: maps a simulation session into a terminal framebuffer.
//!
//! No terminal I/O happens here, so every layout decision is testable
//! against a plain framebuffer.

use crate::core::LifeSession;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CELL_ASPECT, DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE};

/// Rows reserved at the bottom for the status and help lines.
const HUD_ROWS: u16 = 2;

/// Size of the drawable terminal area.
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

/// A lightweight terminal renderer for the simulation.
///
/// Grid cells are scaled by `cell_size`: a cell occupies
/// `cell_size * CELL_ASPECT` columns by `cell_size` rows, which keeps cells
/// roughly square on typical terminal fonts.
pub struct LifeView {
    cell_size: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl LifeView {
    pub fn new(cell_size: u16) -> Self {
        Self {
            cell_size: cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
        }
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Change the on-screen cell size, clamped to the allowed range.
    pub fn set_cell_size(&mut self, size: u16) {
        self.cell_size = size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
    }

    fn cell_w(&self) -> u16 {
        self.cell_size * CELL_ASPECT
    }

    fn cell_h(&self) -> u16 {
        self.cell_size
    }

    /// Grid dimensions that fill the viewport at the current cell size.
    ///
    /// The border and the HUD rows are subtracted first; the rest divides
    /// down by the cell footprint. Shrinking viewports floor at 0x0.
    pub fn grid_dims(&self, viewport: Viewport) -> (i32, i32) {
        let avail_w = viewport.width.saturating_sub(2);
        let avail_h = viewport.height.saturating_sub(2 + HUD_ROWS);
        let columns = (avail_w / self.cell_w()) as i32;
        let rows = (avail_h / self.cell_h()) as i32;
        (columns, rows)
    }

    /// Render the session into an existing framebuffer.
    ///
    /// The run loop keeps one framebuffer alive and passes it in every
    /// frame, so steady-state rendering does not allocate.
    pub fn render_into(&self, session: &LifeSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid = session.grid();
        // Footprint math saturates: a grid too large for the terminal
        // clips at the viewport edge instead of wrapping coordinates.
        let cols = grid.columns().clamp(0, u16::MAX as i32) as u16;
        let rows = grid.rows().clamp(0, u16::MAX as i32) as u16;
        let field_w = cols.saturating_mul(self.cell_w());
        let field_h = rows.saturating_mul(self.cell_h());
        let frame_w = field_w.saturating_add(2);
        let frame_h = field_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport
            .height
            .saturating_sub(HUD_ROWS)
            .saturating_sub(frame_h)
            / 2;

        let paper = CellStyle {
            fg: Rgb::new(51, 51, 51),
            bg: Rgb::new(225, 225, 225),
            bold: false,
            dim: false,
        };
        let ink = CellStyle {
            fg: Rgb::new(51, 51, 51),
            bg: Rgb::new(225, 225, 225),
            bold: true,
            dim: false,
        };
        let dot = CellStyle { dim: true, ..paper };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the play field, clipped to the visible part.
        let fill_w = field_w.min(viewport.width.saturating_sub(start_x + 1));
        let fill_h = field_h.min(viewport.height.saturating_sub(start_y + 1));
        fb.fill_rect(start_x + 1, start_y + 1, fill_w, fill_h, ' ', paper);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Cells. Pixel positions grow with the cell index, so the scan
        // stops at the first row or column past the viewport edge.
        let cell_w = self.cell_w();
        let cell_h = self.cell_h();
        for y in 0..grid.rows() {
            let py = start_y as u32 + 1 + y as u32 * cell_h as u32;
            if py >= viewport.height as u32 {
                break;
            }
            for x in 0..grid.columns() {
                let px = start_x as u32 + 1 + x as u32 * cell_w as u32;
                if px >= viewport.width as u32 {
                    break;
                }
                if grid.state_at(x, y).is_alive() {
                    fb.fill_rect(px as u16, py as u16, cell_w, cell_h, '█', ink);
                } else if self.cell_size >= 2 {
                    // Grid texture: one centered dot per empty cell.
                    let cx = (px as u16).saturating_add(cell_w / 2);
                    let cy = (py as u16).saturating_add(cell_h / 2);
                    fb.put_char(cx, cy, '·', dot);
                }
            }
        }

        self.draw_hud(fb, session, viewport);

        if !session.running() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, session: &LifeSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
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

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &LifeSession, viewport: Viewport) {
        if viewport.height < HUD_ROWS {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let help = CellStyle { dim: true, ..value };

        let status_y = viewport.height - 2;
        let mut x = 1u16;
        x += fb.put_str(x, status_y, "GEN ", label);
        x += fb.put_u64(x, status_y, session.generation(), value);
        x += fb.put_str(x, status_y, "  POP ", label);
        x += fb.put_u64(x, status_y, session.grid().live_count() as u64, value);
        x += fb.put_str(x, status_y, "  INT ", label);
        x += fb.put_u32(x, status_y, session.step_interval_ms(), value);
        x += fb.put_str(x, status_y, "ms", value);
        x += fb.put_str(x, status_y, "  CELL ", label);
        x += fb.put_u32(x, status_y, self.cell_size as u32, value);
        x += fb.put_str(x, status_y, "  GRID ", label);
        x += fb.put_u32(x, status_y, session.grid().columns().max(0) as u32, value);
        x += fb.put_str(x, status_y, "x", value);
        x += fb.put_u32(x, status_y, session.grid().rows().max(0) as u32, value);
        x += fb.put_str(x, status_y, "  SEED ", label);
        x += fb.put_u32(x, status_y, session.seed(), value);
        x += fb.put_str(x, status_y, "  ", label);
        let state = if session.running() { "RUNNING" } else { "PAUSED" };
        fb.put_str(x, status_y, state, label);

        fb.put_str(
            1,
            viewport.height - 1,
            "space run/pause  n step  r random  c clear  p pattern  +/- cell  [/] speed  q quit",
            help,
        );
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
