//! The terminal emitter: colour from `termcolor`, terminal size from
//! `term_size`, display widths from `unicode-width` and message wrapping from
//! `textwrap`.

use std::borrow::Cow;
use std::io::{Result, Write};

use term_size::dimensions_stderr;
use termcolor::{
    BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor,
};
use unicode_width::UnicodeWidthStr;

use super::code_window::CodeWindow;
use super::line_art::LineArt;
use super::Emitter;
use crate::highlight::Highlight;
use crate::level::Level;
use crate::{Diagnostic, InputCoordinator, Span};

/// Writes coloured, wrapped messages followed by a window into the source
/// code with the problem underlined.
pub struct FancyEmitter<W = BufferedStandardStream> {
    out: W,
    line_art: LineArt,
    width: usize,
}

/// How a run of output is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    /// Line numbers, gutters and rules.
    Frame,
    /// The underline under highlighted source.
    Underline,
    Note,
    Level(Level),
}

impl Style {
    fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Style::Frame => spec.set_dimmed(true),
            Style::Underline => spec.set_bold(true).set_fg(Some(Color::Yellow)),
            Style::Note => spec.set_fg(Some(Color::Blue)),
            Style::Level(level) => spec.set_bold(true).set_fg(Some(match level {
                Level::Error => Color::Red,
                Level::Warning => Color::Yellow,
                Level::Message => Color::Cyan,
            })),
        };
        spec
    }
}

/// The default terminal width used if the actual terminal is below
/// `MIN_WIDTH`.
pub(crate) const DEFAULT_WIDTH: usize = 80;

/// The narrowest allowed terminal size that things will be wrapped to, any
/// smaller and we use `DEFAULT_WIDTH` instead to maintain readability.
pub(crate) const MIN_WIDTH: usize = 40;

/// Notes in the margins must be at least this wide.
pub(crate) const MIN_NOTE_MARGIN: usize = 25;

impl FancyEmitter {
    /// Plain ASCII on stderr, no colour, default width.
    pub fn simpler() -> Self {
        FancyEmitter::new(
            BufferedStandardStream::stderr(ColorChoice::Never),
            DEFAULT_WIDTH,
            false,
        )
    }

    /// Prints to stderr, using all the fancy features.
    pub fn full() -> Self {
        let width = match dimensions_stderr() {
            Some((w, _)) if w >= MIN_WIDTH => w,
            _ => DEFAULT_WIDTH,
        };

        let out = BufferedStandardStream::stderr(ColorChoice::Auto);
        FancyEmitter::new(out, width, true)
    }
}

impl<W: WriteColor> FancyEmitter<W> {
    pub fn new(out: W, width: usize, unicode: bool) -> Self {
        FancyEmitter {
            out,
            line_art: LineArt::new(unicode),
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The width of line-wrapped output.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn line_art(&self) -> LineArt {
        self.line_art
    }

    /// A handle on the output stream.
    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Terminal columns taken up by `s`, which is neither its byte length nor
    /// its char count.
    pub(crate) fn presentation_width(&self, s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Line wrapping for message text.
    pub(crate) fn wrap<'a>(
        &self,
        text: &'a str,
        width: usize,
    ) -> Vec<Cow<'a, str>> {
        textwrap::wrap(text, width.max(1))
    }

    /// Cut a line of source into pieces of at most `width` bytes, never
    /// splitting a char. Always returns at least one piece.
    pub(crate) fn code_wrap<'a>(
        &self,
        text: &'a str,
        width: usize,
    ) -> Vec<&'a str> {
        let mut pieces = vec![];
        let mut start = 0;

        for (i, c) in text.char_indices() {
            if i > start && i + c.len_utf8() - start > width {
                pieces.push(&text[start..i]);
                start = i;
            }
        }

        if start < text.len() || pieces.is_empty() {
            pieces.push(&text[start..]);
        }

        pieces
    }

    pub(crate) fn pad(&mut self, padding: char, len: usize) -> Result<()> {
        write!(self.out, "{}", padding.to_string().repeat(len))
    }

    pub(crate) fn set_style(&mut self, style: Style) -> Result<()> {
        self.out.set_color(&style.color_spec())
    }

    pub(crate) fn reset_style(&mut self) -> Result<()> {
        self.out.reset()
    }

    fn emit_message(&mut self, d: &Diagnostic) -> Result<()> {
        // Wrapped lines line up under the end of the prefix.
        let prefix = match d.get_code() {
            Some(code) => format!("{}[GM{}]: ", d.get_level(), code),
            None => format!("{}: ", d.get_level()),
        };
        self.set_style(Style::Level(d.get_level()))?;
        write!(self.out, "{prefix}")?;
        self.reset_style()?;

        let prefix_length = prefix.len();
        let text_width = self.width.saturating_sub(prefix_length);
        let lines = self.wrap(d.get_text(), text_width);

        for (n, line) in lines.iter().enumerate() {
            if n != 0 {
                self.pad(' ', prefix_length)?;
            }
            writeln!(self.out, "{line}")?;
        }

        if lines.is_empty() {
            writeln!(self.out)?;
        }

        Ok(())
    }
}

impl<W: WriteColor> Emitter for FancyEmitter<W> {
    fn emit(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> Result<()> {
        self.emit_message(d)?;

        let location = d.resolve_location(inputs);
        if let (Some(id), Some(location)) = (d.get_input(), location) {
            let caret_only;
            let highlights = if d.get_highlights().is_empty() {
                let span = Span::new(location, location.right(1));
                caret_only = [Highlight::bare(span)];
                &caret_only[..]
            } else {
                d.get_highlights()
            };

            let label = format!("{}:{}", inputs.get_input_name(id), location);
            CodeWindow::new(highlights, inputs, id).print(self, &label)?;
        }

        self.out.flush()
    }
}
