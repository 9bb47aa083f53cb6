//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change) is a full redraw;
//! after that only changed runs of cells are re-emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// Fallback when the terminal size cannot be queried.
const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

/// Anything that can present a finished frame.
pub trait Renderer {
    /// Surface size to render the next frame at.
    fn viewport(&self) -> Viewport;

    /// Present `fb`. Implementations may swap its contents with a previous
    /// frame, so callers should re-render into it every time.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`]. Raw mode is released even when the
    /// restore sequence cannot be written.
    pub fn exit(&mut self) -> Result<()> {
        self.last = None;
        self.buf.clear();
        let restored = queue_restore(&mut self.buf)
            .map_err(anyhow::Error::from)
            .and_then(|()| self.flush_buf());
        terminal::disable_raw_mode()?;
        restored
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn viewport(&self) -> Viewport {
        terminal::size()
            .map(|(w, h)| Viewport::new(w, h))
            .unwrap_or(FALLBACK_VIEWPORT)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        if let Some(row) = fb.row(y) {
            painter.paint_at(0, y, row)?;
        }
    }
    painter.finish()?;
    Ok(())
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for_each_changed_run(prev, next, |x, y, len| {
        if let Some(row) = next.row(y) {
            let start = x as usize;
            painter.paint_at(x, y, &row[start..start + len as usize])?;
        }
        Ok(())
    })?;
    painter.finish()?;
    Ok(())
}

fn queue_restore(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(ResetColor)?
        .queue(SetAttribute(Attribute::Reset))?
        .queue(terminal::EnableLineWrap)?
        .queue(cursor::Show)?
        .queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Writes runs of cells, emitting style changes only at style boundaries.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint_at(&mut self, x: u16, y: u16, cells: &[Cell]) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    out.queue(SetForegroundColor(to_color(style.fg)))?
        .queue(SetBackgroundColor(to_color(style.bg)))?
        .queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each horizontal run of cells that differ between
/// the two frames. A size change marks every row as one run.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        let (Some(old), Some(new), true) = (prev.row(y), next.row(y), same_size) else {
            f(0, y, next.width())?;
            continue;
        };

        let mut x = 0;
        while x < new.len() {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < new.len() && old[x] != new[x] {
                x += 1;
            }
            f(start as u16, y, (x - start) as u16)?;
        }
    }

    Ok(())
}
