//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. Board cell tags map to a fixed palette; tag 0 is empty and
//! never drawn as a block.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';
const GRID_DOT: char = '·';

/// Block color for a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

/// Where the well sits inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(SCREEN_BG, SCREEN_BG).cell(' '));

        let layout = self.layout(snap, viewport);
        let well = CellStyle::plain(Rgb::new(80, 80, 90), WELL_BG);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            well.cell(' '),
        );
        draw_border(
            fb,
            layout,
            CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        for y in 0..snap.height as i16 {
            for x in 0..snap.width as i16 {
                match PieceKind::from_tag(snap.cell(x, y)) {
                    Some(kind) => self.draw_block(fb, layout, x, y, kind),
                    None => self.draw_empty(fb, layout, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_active(fb, layout, snap, &active);
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        let overlay = match snap.phase {
            Phase::NotStarted => Some("PRESS ENTER"),
            Phase::Paused => Some("PAUSED"),
            Phase::GameOver => Some("GAME OVER"),
            Phase::Running => None,
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, layout, text);
        }
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = (snap.width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = (snap.height as u16).saturating_mul(self.cell_h).saturating_add(2);
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    fn draw_active(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        snap: &GameSnapshot,
        active: &PieceSnapshot,
    ) {
        // Rows above the top edge are not drawn.
        for (x, y) in active.cells() {
            if x >= 0 && y >= 0 && x < snap.width as i16 && y < snap.height as i16 {
                self.draw_block(fb, layout, x, y, active.kind);
            }
        }
    }

    fn cell_origin(&self, layout: Layout, x: i16, y: i16) -> (u16, u16) {
        (
            layout.x + 1 + x as u16 * self.cell_w,
            layout.y + 1 + y as u16 * self.cell_h,
        )
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: i16, y: i16, kind: PieceKind) {
        let (px, py) = self.cell_origin(layout, x, y);
        let style = CellStyle::plain(piece_color(kind), WELL_BG).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, style.cell(BLOCK));
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: Layout, x: i16, y: i16) {
        let (px, py) = self.cell_origin(layout, x, y);
        let style = CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, style.cell(GRID_DOT));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = layout.y;
        for (name, number) in [
            ("SCORE", snap.score.score),
            ("LEVEL", snap.score.level),
            ("LINES", snap.score.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &number.to_string(), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            let style = CellStyle::plain(piece_color(next.kind), SCREEN_BG).bold();
            for (dx, dy) in next.matrix.minos() {
                fb.fill_rect(
                    panel_x + dx as u16 * self.cell_w,
                    y + dy as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    style.cell(BLOCK),
                );
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
    let Layout {
        x,
        y,
        frame_w: w,
        frame_h: h,
    } = layout;
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, style.cell('┌'));
    fb.set(x + w - 1, y, style.cell('┐'));
    fb.set(x, y + h - 1, style.cell('└'));
    fb.set(x + w - 1, y + h - 1, style.cell('┘'));
    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.cell('─'));
        fb.set(x + dx, y + h - 1, style.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.cell('│'));
        fb.set(x + w - 1, y + dy, style.cell('│'));
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: Layout, text: &str) {
    let width = text.chars().count() as u16;
    let x = layout.x + layout.frame_w.saturating_sub(width) / 2;
    let y = layout.y + layout.frame_h / 2;
    fb.put_str(x, y, text, CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold());
}
