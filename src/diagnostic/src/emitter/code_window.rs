//! Code windows are previews into the source code presented when displaying
//! diagnostic messages to help the user locate problems.

use std::io::Write;

use termcolor::WriteColor;

use super::terminal::{FancyEmitter, Style, MIN_NOTE_MARGIN};
use crate::caret::Caret;
use crate::highlight::Highlight;
use crate::input_coordinator::{InputCoordinator, InputId};
use crate::span::Span;

/// A preview into the source code with highlights and notes in the margins.
///
/// The window covers every line from the first highlight's start to the last
/// highlight's end.
#[derive(Debug)]
pub(crate) struct CodeWindow<'i, 'd> {
    highlights: &'d [Highlight],
    starting_line: u32,
    lines: Vec<&'i str>,
}

impl<'i, 'd> CodeWindow<'i, 'd> {
    pub fn new(
        highlights: &'d [Highlight],
        inputs: &'i InputCoordinator,
        id: InputId,
    ) -> Self {
        let starting_line = highlights
            .iter()
            .map(|h| h.span().start().line())
            .min()
            .unwrap_or(0);
        let ending_line = highlights
            .iter()
            .map(|h| h.span().end().line())
            .max()
            .unwrap_or(starting_line);

        let lines = (starting_line..=ending_line)
            .map(|line| inputs.line_text(id, line))
            .collect();

        CodeWindow {
            highlights,
            starting_line,
            lines,
        }
    }

    /// The line number the code windows ends at.
    fn ending_line(&self) -> u32 {
        self.starting_line + self.lines.len().saturating_sub(1) as u32
    }

    /// All highlights which intersect a span, paired with the highlight's note
    /// when the intersection is where the highlight ends.
    fn highlights_intersecting(
        &self,
        span: Span,
    ) -> impl Iterator<Item = (Span, Option<&str>)> {
        self.highlights.iter().filter_map(move |h| {
            h.span().intersection(span).map(|s| {
                let ends_here = s.end() == h.span().end();
                (s, if ends_here { h.note() } else { None })
            })
        })
    }

    pub(crate) fn print<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        label: &str,
    ) -> std::io::Result<()> {
        self.header(e, label)?;

        for (i, line) in self.lines.iter().enumerate() {
            self.line(e, self.starting_line + i as u32, line)?;
        }

        writeln!(e.out())
    }

    /// Print a code window header with the right line art, right aligning the
    /// label.
    fn header<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        label: &str,
    ) -> std::io::Result<()> {
        let label_length = e.presentation_width(label);
        let code_width = self.code_width(e);
        let h = e.line_art().horizontal();
        let t = e.line_art().tee();

        e.set_style(Style::Frame)?;
        e.pad(h, self.gutter_width(e))?;
        write!(e.out(), "{}", t)?;
        e.pad(h, code_width.saturating_sub(label_length + 1))?;
        e.reset_style()?;

        writeln!(e.out(), " {}", label)
    }

    /// Print the line `number` and any highlights and notes under it.
    fn line<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        number: u32,
        line: &str,
    ) -> std::io::Result<()> {
        let mut start = 0;
        let chunks = e.code_wrap(line, self.code_width(e));
        let last = chunks.len() - 1;

        for (n, chunk) in chunks.iter().enumerate() {
            if n == 0 {
                self.gutter(e, number + 1)?;
            } else {
                let more = e.line_art().more();
                self.gutter(e, more)?;
            }

            writeln!(e.out(), "{}", chunk)?;

            // Columns count chars, the same way `LineMap` does. The last chunk
            // reaches one past the end of the line so positions at the line
            // terminator are still shown.
            let len = chunk.chars().count() as u32;
            let end = if n == last { start + len + 1 } else { start + len };
            let span =
                Span::new(Caret::new(number, start), Caret::new(number, end));
            self.highlight_lines(e, span)?;
            start += len;
        }

        Ok(())
    }

    /// Draw the highlights (and notes if any) that apply within `span`.
    fn highlight_lines<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        span: Span,
    ) -> std::io::Result<()> {
        debug_assert!(span.is_single_line());
        let code_width = self.code_width(e);

        for (sp, note) in self.highlights_intersecting(span) {
            let left = (sp.start().column() - span.start().column()) as usize;
            let columns = sp.end().column() - sp.start().column();
            let underline = (columns as usize).max(1);
            let right = code_width.saturating_sub(left + underline);

            match note {
                Some(note) if right >= MIN_NOTE_MARGIN => {
                    self.underline(e, left, underline)?;
                    self.right_margin_note(e, note, left + underline + 1)?;
                }
                Some(note) => {
                    self.underline(e, left, underline)?;
                    writeln!(e.out())?;
                    self.below_note(e, note)?;
                }
                None => {
                    self.underline(e, left, underline)?;
                    writeln!(e.out())?;
                }
            }
        }

        Ok(())
    }

    /// Write an empty gutter, pad `left` spaces, then run the line art up for
    /// `length`.
    fn underline<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        left: usize,
        length: usize,
    ) -> std::io::Result<()> {
        self.gutter(e, "")?;
        e.pad(' ', left)?;
        e.set_style(Style::Underline)?;
        let up = e.line_art().up();
        e.pad(up, length)?;
        e.reset_style()
    }

    /// Write a note below the highlight line, since it didn't fit in the right
    /// margin.
    fn below_note<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        note: &str,
    ) -> std::io::Result<()> {
        for line in e.wrap(note, self.code_width(e)) {
            self.gutter(e, "")?;
            e.set_style(Style::Note)?;
            writeln!(e.out(), "{}", line)?;
            e.reset_style()?;
        }
        Ok(())
    }

    fn right_margin_note<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        note: &str,
        indent: usize,
    ) -> std::io::Result<()> {
        let lines = e.wrap(note, self.code_width(e).saturating_sub(indent));

        for (n, line) in lines.iter().enumerate() {
            if n != 0 {
                self.gutter(e, "")?;
                e.pad(' ', indent)?;
            }
            e.set_style(Style::Note)?;
            writeln!(e.out(), " {}", line)?;
            e.reset_style()?;
        }

        Ok(())
    }

    /// Print the left hand gutter, right aligning some `Display`able content.
    fn gutter<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        content: impl std::fmt::Display,
    ) -> std::io::Result<()> {
        let vertical = e.line_art().vertical();
        let width = self.gutter_width(e);

        e.set_style(Style::Frame)?;
        write!(e.out(), "{: >width$}{} ", content, vertical, width = width)?;
        e.reset_style()
    }

    /// The width of the left column in the gutter, not including the vertical
    /// line or space after it. Line numbers are shown one-indexed.
    fn gutter_width<W: WriteColor>(&self, e: &FancyEmitter<W>) -> usize {
        let digits = (self.ending_line() + 1).to_string().len();
        let more = e.line_art().more().chars().count();
        let code_width = self.code_width_for(e.width(), digits);
        if self.lines.iter().any(|l| l.len() > code_width) {
            digits.max(more)
        } else {
            digits
        }
    }

    /// The width of the code, which is the emitter's width minus the gutter
    /// and the "| " after it.
    fn code_width<W: WriteColor>(&self, e: &FancyEmitter<W>) -> usize {
        self.code_width_for(e.width(), self.gutter_width(e))
    }

    fn code_width_for(&self, width: usize, gutter: usize) -> usize {
        width.saturating_sub(gutter + 2).max(1)
    }
}
