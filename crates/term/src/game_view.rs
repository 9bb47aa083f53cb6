//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{glyph, Outcome};

/// Banner shown when the player reaches the win row.
pub const WIN_BANNER: [&str; 2] = ["Ribbit!", "You've won!!!"];

/// Banner shown when the player runs out of lives.
pub const LOSE_BANNER: [&str; 2] = ["You lose.", "Too bad frogs don't have 9 lives!"];

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the field's top-left tile landed in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOrigin {
    pub x: u16,
    pub y: u16,
}

const ROAD_BG: Rgb = Rgb::new(35, 35, 40);
const PAVEMENT_BG: Rgb = Rgb::new(70, 70, 75);

/// A lightweight terminal renderer for the lane field.
pub struct GameView {
    /// Terminal columns per grid tile.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame size needed for a field: tiles, a one-cell border and the HUD row.
    pub fn required_size(&self, field_w: u16, field_h: u16) -> Viewport {
        Viewport::new(
            field_w.saturating_mul(self.cell_w).saturating_add(2),
            field_h.saturating_add(3),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; its allocation is
    /// kept and only the size follows the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> FieldOrigin {
        fb.reset(viewport.width, viewport.height);

        let need = self.required_size(snap.width(), snap.height());
        let start_x = viewport.width.saturating_sub(need.width) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(need.height) / 2,
            AnchorY::Top => 0,
        };
        let origin = FieldOrigin {
            x: start_x + 1,
            y: start_y + 1,
        };

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(
            fb,
            start_x,
            start_y,
            need.width,
            snap.height().saturating_add(2),
            border,
        );

        let w = snap.width() as usize;
        for (i, &tile) in snap.tiles().iter().enumerate() {
            let x = (i % w) as u16;
            let y = (i / w) as u16;
            let (ch, style) = tile_style(tile);
            let px = origin.x.saturating_add(x.saturating_mul(self.cell_w));
            for dx in 0..self.cell_w {
                fb.put_char(px.saturating_add(dx), origin.y.saturating_add(y), ch, style);
            }
        }

        self.draw_hud(fb, snap, start_x, start_y.saturating_add(snap.height()).saturating_add(2));

        if let Some(outcome) = snap.outcome {
            self.draw_banner(fb, snap, origin, outcome);
        }
        origin
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
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

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot<'_>, x: u16, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(120, 220, 120));

        let after_label = fb.put_str(x, y, "LIVES ", label);
        let after_value = fb.put_u32(after_label, y, snap.lives as u32, value);
        let hint = "q quit";
        let hint_x = x.saturating_add(
            self.required_size(snap.width(), snap.height())
                .width
                .saturating_sub(hint.len() as u16),
        );
        if hint_x > after_value.saturating_add(1) {
            fb.put_str(hint_x, y, hint, CellStyle::default().dim());
        }
    }

    /// Two centred lines starting at the field's middle row.
    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<'_>,
        origin: FieldOrigin,
        outcome: Outcome,
    ) {
        let lines = match outcome {
            Outcome::Won => WIN_BANNER,
            Outcome::Lost => LOSE_BANNER,
        };
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let field_w = snap.width().saturating_mul(self.cell_w);
        let mid_y = origin.y + snap.height() / 2;

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin.x + field_w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y + i as u16, text, style);
        }
    }
}

fn tile_style(tile: char) -> (char, CellStyle) {
    match tile {
        glyph::CAR => (
            '█',
            CellStyle::new(Rgb::new(220, 80, 80), ROAD_BG).bold(),
        ),
        glyph::PAVEMENT => (
            '·',
            CellStyle::new(Rgb::new(160, 160, 160), PAVEMENT_BG).dim(),
        ),
        glyph::PLAYER => (
            '@',
            CellStyle::new(Rgb::new(100, 230, 120), ROAD_BG).bold(),
        ),
        glyph::BACKGROUND => (' ', CellStyle::new(ROAD_BG, ROAD_BG)),
        other => (other, CellStyle::new(Rgb::new(220, 220, 220), ROAD_BG)),
    }
}
