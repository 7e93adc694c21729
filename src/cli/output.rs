//! Handles all user-facing output for the CLI.
//!
//! Results are rendered either as a box-drawn table or as JSON. Rendering is
//! independent of classification: both renderers take a slice of finished
//! records and a writer, so they can be captured in tests.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::classifier::ClassificationResult;
use crate::errors::PqError;

// ============================================================================
// TABLE LAYOUT
// ============================================================================

const HEADERS: [&str; 5] = ["Input No.", "Valid", "Axiom", "Theorem", "Input"];

/// Column widths for one table; only the input column grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    widths: [usize; 5],
}

impl Layout {
    pub fn for_results(results: &[ClassificationResult]) -> Self {
        let mut widths = HEADERS.map(|header| header.width());
        let longest = results
            .iter()
            .map(|r| r.input.width())
            .max()
            .unwrap_or(0);
        widths[4] = widths[4].max(longest);
        Self { widths }
    }

    pub fn input_width(&self) -> usize {
        self.widths[4]
    }

    /// Width between the outer bars: every cell is padded by one space on
    /// each side and cells are separated by a single bar.
    pub fn inner_width(&self) -> usize {
        self.widths.iter().map(|w| w + 2).sum::<usize>() + self.widths.len() - 1
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Renders results as a table, colouring boolean cells when the writer
/// supports colour.
pub fn render_table<W: WriteColor>(results: &[ClassificationResult], writer: &mut W) -> io::Result<()> {
    let layout = Layout::for_results(results);

    write_border(writer, &layout, '┍', '┑', '━')?;
    for (header, width) in HEADERS.iter().zip(layout.widths) {
        write!(writer, "│ {:<width$} ", header, width = width)?;
    }
    writeln!(writer, "│")?;
    write_border(writer, &layout, '├', '┤', '─')?;

    for (index, result) in results.iter().enumerate() {
        write!(writer, "│ {:>width$} ", index + 1, width = layout.widths[0])?;
        write_flag(writer, result.valid, layout.widths[1])?;
        write_flag(writer, result.is_axiom, layout.widths[2])?;
        write_flag(writer, result.is_theorem, layout.widths[3])?;

        // `{:<w}` pads by char count, not display width
        let padding = layout.input_width() - result.input.width();
        writeln!(writer, "│ {}{} │", result.input, " ".repeat(padding))?;
    }

    write_border(writer, &layout, '└', '┘', '─')
}

/// Renders results as a pretty-printed JSON array.
pub fn render_json<W: Write>(results: &[ClassificationResult], writer: &mut W) -> Result<(), PqError> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_border<W: Write>(writer: &mut W, layout: &Layout, left: char, right: char, fill: char) -> io::Result<()> {
    let line: String = std::iter::repeat(fill).take(layout.inner_width()).collect();
    writeln!(writer, "{}{}{}", left, line, right)
}

fn write_flag<W: WriteColor>(writer: &mut W, flag: bool, width: usize) -> io::Result<()> {
    let color = if flag { Color::Green } else { Color::Red };
    write!(writer, "│ ")?;
    writer.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(writer, "{:<width$}", flag, width = width)?;
    writer.reset()?;
    write!(writer, " ")
}
