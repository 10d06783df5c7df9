//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The same geometry drives drawing and the
//! [`Layout`] handed to the session for click resolution, so what the player sees is
//! exactly what gets hit-tested.

use crate::core::{Layout, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellPos, TileKind, SLOT_CAPACITY};

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

const BOARD_BG: Rgb = Rgb::new(60, 48, 36);
const HUD: CellStyle = CellStyle::new(Rgb::new(245, 222, 179), Rgb::new(0, 0, 0));
const FRAME: CellStyle = CellStyle::new(Rgb::new(139, 69, 19), Rgb::new(0, 0, 0));
const SLOT_BG: Rgb = Rgb::new(90, 70, 50);

/// Screen placement of the board frame, slot and HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    hud_x: u16,
    hud_y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    slot_x: u16,
    slot_y: u16,
    slot_w: u16,
    slot_h: u16,
}

/// Terminal renderer for a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Diagonal shift between neighbouring layers, in cells.
    layer_shift: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square in typical terminal fonts.
        Self {
            tile_w: 6,
            tile_h: 3,
            layer_shift: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, layer_shift: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            layer_shift,
        }
    }

    fn geometry(&self, viewport: Viewport, layers: u8, rows: u8, cols: u8) -> Geometry {
        let spill = u16::from(layers.saturating_sub(1)) * self.layer_shift;
        let frame_w = u16::from(cols) * self.tile_w + spill + 2;
        let frame_h = u16::from(rows) * self.tile_h + spill + 2;
        let slot_w = SLOT_CAPACITY as u16 * self.tile_w + 2;
        let slot_h = self.tile_h + 2;

        let total_w = frame_w.max(slot_w);
        // HUD line, board frame, one blank line, slot frame.
        let total_h = 1 + frame_h + 1 + slot_h;
        let left = viewport.width.saturating_sub(total_w) / 2;
        let top = viewport.height.saturating_sub(total_h) / 2;

        Geometry {
            hud_x: left,
            hud_y: top,
            frame_x: left + (total_w - frame_w) / 2,
            frame_y: top + 1,
            frame_w,
            frame_h,
            slot_x: left + (total_w - slot_w) / 2,
            slot_y: top + 1 + frame_h + 1,
            slot_w,
            slot_h,
        }
    }

    /// Layout (terminal-cell units) of a board with these dimensions in `viewport`.
    pub fn board_layout(&self, viewport: Viewport, layers: u8, rows: u8, cols: u8) -> Layout {
        let g = self.geometry(viewport, layers, rows, cols);
        Layout {
            origin_x: i32::from(g.frame_x) + 1,
            origin_y: i32::from(g.frame_y) + 1,
            tile_w: i32::from(self.tile_w),
            tile_h: i32::from(self.tile_h),
            layer_dx: i32::from(self.layer_shift),
            layer_dy: i32::from(self.layer_shift),
        }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let g = self.geometry(viewport, snap.layers, snap.rows, snap.cols);
        let layout = self.board_layout(viewport, snap.layers, snap.rows, snap.cols);

        self.draw_hud(fb, snap, g);

        fb.fill_rect(
            g.frame_x + 1,
            g.frame_y + 1,
            g.frame_w.saturating_sub(2),
            g.frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        fb.draw_box(g.frame_x, g.frame_y, g.frame_w, g.frame_h, FRAME);

        // Bottom layer first so upper tiles overdraw the ones they cover.
        for layer in 0..snap.layers {
            for row in 0..snap.rows {
                for col in 0..snap.cols {
                    let pos = CellPos::new(layer, row, col);
                    if let Some((kind, covered)) = snap.cell(pos) {
                        let (x, y) = layout.tile_origin(pos, snap.layers);
                        self.draw_tile(fb, x, y, kind, covered);
                    }
                }
            }
        }

        self.draw_slot(fb, snap, g);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, g: Geometry) {
        let label = HUD.bold();
        let mut x = g.hud_x;
        fb.put_str(x, g.hud_y, "TIME", label);
        x += 5;
        x += fb.put_u32(x, g.hud_y, snap.remaining_secs(), HUD) + 2;
        fb.put_str(x, g.hud_y, "SCORE", label);
        x += 6;
        x += fb.put_u32(x, g.hud_y, snap.score, HUD) + 2;
        fb.put_str(x, g.hud_y, snap.difficulty.label(), label);
        x += snap.difficulty.label().len() as u16 + 2;
        let revive = if snap.revive_available {
            "REVIVE READY"
        } else {
            "REVIVE USED"
        };
        fb.put_str(x, g.hud_y, revive, HUD.dim());
    }

    fn draw_slot(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, g: Geometry) {
        // A revived slot holds more than capacity; the frame grows around the extra tiles.
        let extra = (snap.slot.len().saturating_sub(SLOT_CAPACITY) as u16) * self.tile_w;
        let slot_x = g.slot_x.saturating_sub(extra / 2);
        let slot_w = g.slot_w + extra;

        fb.fill_rect(
            slot_x + 1,
            g.slot_y + 1,
            slot_w.saturating_sub(2),
            g.slot_h.saturating_sub(2),
            ' ',
            CellStyle::new(SLOT_BG, SLOT_BG),
        );
        fb.draw_box(slot_x, g.slot_y, slot_w, g.slot_h, FRAME.bold());

        for (i, kind) in snap.slot.iter().enumerate() {
            let x = i32::from(slot_x) + 1 + i as i32 * i32::from(self.tile_w);
            self.draw_tile(fb, x, i32::from(g.slot_y) + 1, *kind, false);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: i32, y: i32, kind: TileKind, covered: bool) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        let color = tile_color(kind);
        let style = if covered {
            CellStyle::new(color.darken(), color.darken().darken()).dim()
        } else {
            CellStyle::new(color, color.darken()).bold()
        };

        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        if self.tile_w >= 2 && self.tile_h >= 2 {
            fb.draw_box(x, y, self.tile_w, self.tile_h, style);
        }
        let cx = x + (self.tile_w - 1) / 2;
        let cy = y + (self.tile_h - 1) / 2;
        fb.put_char(cx, cy, kind.letter(), style);
    }
}

/// Display color of each tile kind.
pub fn tile_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Ruby => Rgb::new(220, 60, 80),
        TileKind::Jade => Rgb::new(70, 200, 120),
        TileKind::Amber => Rgb::new(240, 180, 50),
        TileKind::Pearl => Rgb::new(230, 230, 240),
        TileKind::Onyx => Rgb::new(150, 120, 220),
    }
}
