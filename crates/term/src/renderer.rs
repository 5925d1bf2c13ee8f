//! TerminalRenderer: flushes a cell framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are re-emitted; a size change forces a full redraw. Each frame is wrapped
//! in a synchronized update so the terminal shows it atomically.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            // A full 200x60 half-block frame with per-cell colors is ~2MB of
            // escape codes in the worst case; start smaller and let it grow.
            buf: Vec::with_capacity(256 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it in every frame; after
    /// the call it holds the previous frame's cells, ready to be overwritten.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::BeginSynchronizedUpdate)?;
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.buf.queue(terminal::EndSynchronizedUpdate)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, current_style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, current_style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

// Only emit the parts of the style that changed; terrain frames mostly vary
// one of the two colors between neighbouring cells.
fn apply_style_into(out: &mut Vec<u8>, style: CellStyle, prev: Option<CellStyle>) -> Result<()> {
    let bold_changed = prev.map_or(true, |p| p.bold != style.bold);
    if bold_changed {
        out.queue(SetAttribute(if style.bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        }))?;
    }
    if prev.map_or(true, |p| p.fg != style.fg) {
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    }
    if prev.map_or(true, |p| p.bg != style.bg) {
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let prev_cells = prev.cells();
    let next_cells = next.cells();

    for y in 0..next.height() {
        let row = (y as usize) * (w as usize);
        let mut x = 0;
        while x < w {
            if prev_cells[row + x as usize] == next_cells[row + x as usize] {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev_cells[row + x as usize] != next_cells[row + x as usize] {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
