//! SheetView: maps a `ScoringSheet` into styled terminal output.
//!
//! Renders the classic framed ten-column sheet: marks row on top,
//! running totals below, strikes and spares highlighted.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{FrameCell, ScoringSheet};
use crate::types::{RollMark, TENPIN_FRAMES};

/// A lightweight terminal renderer for a bowling score sheet.
pub struct SheetView {
    /// Inner width of a regular frame column, in terminal columns.
    frame_w: usize,
    /// Inner width of the last (three-roll) frame column.
    last_frame_w: usize,
}

impl Default for SheetView {
    fn default() -> Self {
        // 5 fits "9 /" with breathing room; 7 fits "X X X".
        Self {
            frame_w: 5,
            last_frame_w: 7,
        }
    }
}

const TITLE: Color = Color::Rgb {
    r: 220,
    g: 220,
    b: 220,
};
const BORDER: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 130,
};
const STRIKE: Color = Color::Rgb {
    r: 80,
    g: 220,
    b: 220,
};
const SPARE: Color = Color::Rgb {
    r: 240,
    g: 220,
    b: 80,
};
const PINS: Color = Color::Rgb {
    r: 200,
    g: 200,
    b: 200,
};
const MISS: Color = Color::Rgb {
    r: 140,
    g: 140,
    b: 140,
};

impl SheetView {
    pub fn new(frame_w: usize, last_frame_w: usize) -> Self {
        Self {
            frame_w,
            last_frame_w,
        }
    }

    /// Render one player's sheet into the writer and flush.
    pub fn render<W: Write>(&self, out: &mut W, title: &str, sheet: &ScoringSheet) -> Result<()> {
        self.draw_title(out, title, sheet)?;
        self.draw_border(out, '┌', '┬', '┐')?;
        self.draw_marks_row(out, sheet)?;
        self.draw_scores_row(out, sheet)?;
        self.draw_border(out, '└', '┴', '┘')?;
        self.draw_footer(out, sheet)?;

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.flush()?;
        Ok(())
    }

    fn column_width(&self, column: usize) -> usize {
        if column == TENPIN_FRAMES - 1 {
            self.last_frame_w
        } else {
            self.frame_w
        }
    }

    fn draw_title<W: Write>(&self, out: &mut W, title: &str, sheet: &ScoringSheet) -> Result<()> {
        apply_style(out, TITLE, true, false)?;
        out.queue(Print(title))?;
        if !sheet.closed {
            apply_style(out, MISS, false, true)?;
            out.queue(Print(" [in progress]"))?;
        }
        out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn draw_border<W: Write>(&self, out: &mut W, left: char, mid: char, right: char) -> Result<()> {
        apply_style(out, BORDER, false, true)?;
        out.queue(Print(left))?;
        for column in 0..TENPIN_FRAMES {
            out.queue(Print("─".repeat(self.column_width(column))))?;
            let joint = if column + 1 == TENPIN_FRAMES { right } else { mid };
            out.queue(Print(joint))?;
        }
        out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn draw_marks_row<W: Write>(&self, out: &mut W, sheet: &ScoringSheet) -> Result<()> {
        for column in 0..TENPIN_FRAMES {
            self.draw_separator(out)?;
            let width = self.column_width(column);
            match cell_at(sheet, column) {
                Some(cell) => self.draw_marks_cell(out, cell, width)?,
                None => {
                    out.queue(Print(" ".repeat(width)))?;
                }
            }
        }
        self.draw_separator(out)?;
        out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn draw_marks_cell<W: Write>(&self, out: &mut W, cell: &FrameCell, width: usize) -> Result<()> {
        // Every mark renders as one character, space-separated.
        let visible = 2 * cell.marks.len().max(1) - 1;
        let left = width.saturating_sub(visible) / 2;
        let right = width.saturating_sub(visible + left);

        out.queue(Print(" ".repeat(left)))?;
        for (i, mark) in cell.marks.iter().enumerate() {
            if i > 0 {
                out.queue(Print(" "))?;
            }
            let (color, bold) = match mark {
                RollMark::Strike => (STRIKE, true),
                RollMark::Spare => (SPARE, true),
                RollMark::Miss => (MISS, false),
                RollMark::Pins(_) => (PINS, false),
            };
            apply_style(out, color, bold, false)?;
            out.queue(Print(mark.to_string()))?;
        }
        out.queue(Print(" ".repeat(right)))?;
        Ok(())
    }

    fn draw_scores_row<W: Write>(&self, out: &mut W, sheet: &ScoringSheet) -> Result<()> {
        for column in 0..TENPIN_FRAMES {
            self.draw_separator(out)?;
            let width = self.column_width(column);
            match cell_at(sheet, column) {
                Some(cell) => {
                    apply_style(out, PINS, false, false)?;
                    out.queue(Print(format!("{:>1$} ", cell.score, width - 1)))?;
                }
                None => {
                    out.queue(Print(" ".repeat(width)))?;
                }
            }
        }
        self.draw_separator(out)?;
        out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn draw_separator<W: Write>(&self, out: &mut W) -> Result<()> {
        apply_style(out, BORDER, false, true)?;
        out.queue(Print("│"))?;
        Ok(())
    }

    fn draw_footer<W: Write>(&self, out: &mut W, sheet: &ScoringSheet) -> Result<()> {
        apply_style(out, PINS, false, false)?;
        out.queue(Print(format!("  scratch {}", sheet.scratch)))?;
        if sheet.closed && sheet.handicap > 0 {
            out.queue(Print(format!(
                " + handicap {} = {}",
                sheet.handicap,
                sheet.total()
            )))?;
        }
        out.queue(Print("\r\n"))?;
        Ok(())
    }
}

fn cell_at(sheet: &ScoringSheet, column: usize) -> Option<&FrameCell> {
    sheet.frames.iter().find(|cell| cell.index == column)
}

fn apply_style<W: Write>(out: &mut W, fg: Color, bold: bool, dim: bool) -> Result<()> {
    out.queue(SetForegroundColor(fg))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringEngine;

    // We can't validate real terminal output here, but rendering into a
    // buffer exercises the full queue/flush path.
    #[test]
    fn test_renders_marks_and_totals() {
        let mut engine = ScoringEngine::new();
        for pins in [8, 1, 10, 3, 7] {
            engine.roll(pins).unwrap();
        }
        let sheet = ScoringSheet::project(&engine, 0);

        let mut buf = Vec::new();
        SheetView::default()
            .render(&mut buf, "The Dude", &sheet)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("The Dude"));
        assert!(text.contains("[in progress]"));
        assert!(text.contains('X'));
        assert!(text.contains('/'));
        assert!(text.contains("39"));
        assert!(text.contains("scratch 39"));
    }

    #[test]
    fn test_closed_sheet_shows_handicap_total() {
        let mut engine = ScoringEngine::new();
        for _ in 0..12 {
            engine.roll(10).unwrap();
        }
        let sheet = ScoringSheet::project(&engine, 8);

        let mut buf = Vec::new();
        SheetView::default()
            .render(&mut buf, "Sobchak", &sheet)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("[in progress]"));
        assert!(text.contains("scratch 300"));
        assert!(text.contains("+ handicap 8 = 308"));
    }
}
