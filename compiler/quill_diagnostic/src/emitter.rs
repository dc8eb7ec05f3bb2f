//! Terminal rendering of diagnostics.
//!
//! Without source text a label prints its raw span (`8..14`). With source
//! attached it prints `path:line:col`, the source line, and a caret
//! underline.

use std::io::{self, Write};

use crate::{ChildKind, Diagnostic, Label, LabelStyle, Severity};

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Closing `aborting due to N previous errors` line; nothing for zero.
    fn emit_summary(&mut self, error_count: usize);
}

/// `--color=auto|always|never`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Byte offsets of line starts, for offset to line/column lookups.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(at, _)| at + 1))
            .collect();
        LineIndex { source, starts }
    }

    /// 1-based `(line, column)`; the column counts chars. Offsets past the
    /// end clamp to the end of the source.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = (offset as usize).min(self.source.len());
        let line = self.line_of(offset);
        let start = self.starts[line];
        let column = self
            .source
            .get(start..offset)
            .map_or(offset - start, |text| text.chars().count());
        (saturate(line + 1), saturate(column + 1))
    }

    /// Text of the line holding `offset`, without its newline, and the
    /// line's starting offset.
    fn line_at(&self, offset: usize) -> (&'src str, usize) {
        let line = self.line_of(offset);
        let start = self.starts[line];
        let end = self
            .starts
            .get(line + 1)
            .map_or(self.source.len(), |next| next - 1);
        (self.source.get(start..end).unwrap_or(""), start)
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// ANSI styling, or nothing when colors are off.
#[derive(Copy, Clone)]
struct Palette {
    enabled: bool,
}

impl Palette {
    const RESET: &'static str = "\x1b[0m";

    fn severity(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
        }
    }

    fn label(style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Primary => "\x1b[1;31m",
            LabelStyle::Secondary => "\x1b[1;34m",
        }
    }

    fn child(kind: ChildKind) -> &'static str {
        match kind {
            ChildKind::Note => "\x1b[1m",
            ChildKind::Help => "\x1b[1;32m",
        }
    }

    fn paint(self, out: &mut impl Write, style: &str, text: &str) -> io::Result<()> {
        if self.enabled {
            write!(out, "{style}{text}{}", Self::RESET)
        } else {
            out.write_all(text.as_bytes())
        }
    }
}

struct SourceFile<'src> {
    path: &'src str,
    lines: LineIndex<'src>,
}

/// Human-readable emitter over any writer.
///
/// Write errors are ignored: diagnostics go to a terminal or a buffer, and
/// there is nowhere else to report a failure to print one.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    palette: Palette,
    source: Option<SourceFile<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            palette: Palette {
                enabled: mode.should_use_colors(is_tty),
            },
            source: None,
        }
    }

    /// Attach source text so labels render with line, column, and snippet.
    #[must_use]
    pub fn with_source(mut self, text: &'src str) -> Self {
        let path = self.source.as_ref().map_or("<input>", |file| file.path);
        self.source = Some(SourceFile {
            path,
            lines: LineIndex::new(text),
        });
        self
    }

    /// Set the path printed in locations. Has no effect before
    /// [`Self::with_source`].
    #[must_use]
    pub fn with_file_path(mut self, path: &'src str) -> Self {
        if let Some(file) = &mut self.source {
            file.path = path;
        }
        self
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let palette = self.palette;
        palette.paint(
            &mut self.writer,
            Palette::severity(diag.severity),
            diag.severity.as_str(),
        )?;
        palette.paint(&mut self.writer, "\x1b[1m", &format!("[{}]", diag.code))?;
        writeln!(self.writer, ": {}", diag.message)?;

        for label in &diag.labels {
            self.write_label(label)?;
        }
        for child in &diag.children {
            write!(self.writer, "  = ")?;
            palette.paint(&mut self.writer, Palette::child(child.kind), child.kind.as_str())?;
            writeln!(self.writer, ": {}", child.message)?;
        }
        writeln!(self.writer)
    }

    fn write_label(&mut self, label: &Label) -> io::Result<()> {
        let marker = match label.style {
            LabelStyle::Primary => "-->",
            LabelStyle::Secondary => "   ",
        };
        write!(self.writer, "  {marker} ")?;
        match &self.source {
            Some(file) => {
                let (line, col) = file.lines.line_col(label.span.start);
                write!(self.writer, "{}:{line}:{col}: ", file.path)?;
            }
            None => write!(self.writer, "{:?}: ", label.span)?,
        }
        let style = Palette::label(label.style);
        self.palette.paint(&mut self.writer, style, &label.message)?;
        writeln!(self.writer)?;

        let Some(file) = &self.source else {
            return Ok(());
        };
        let start = (label.span.start as usize).min(file.lines.source.len());
        let (line_text, line_start) = file.lines.line_at(start);
        let line_end = line_start + line_text.len();
        let end = (label.span.end as usize).clamp(start, line_end);
        let pad = line_text.get(..start - line_start).map_or(0, |s| s.chars().count());
        let width = line_text
            .get(start - line_start..end - line_start)
            .map_or(1, |s| s.chars().count().max(1));

        writeln!(self.writer, "     | {line_text}")?;
        write!(self.writer, "     | {}", " ".repeat(pad))?;
        self.palette.paint(&mut self.writer, style, &"^".repeat(width))?;
        writeln!(self.writer)
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.write_diagnostic(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        let tail = match error_count {
            0 => return,
            1 => "aborting due to previous error".to_string(),
            n => format!("aborting due to {n} previous errors"),
        };
        let error = Palette::severity(Severity::Error);
        let _ = self
            .palette
            .paint(&mut self.writer, error, "error")
            .and_then(|()| writeln!(self.writer, ": {tail}"));
    }
}

#[cfg(test)]
mod tests;
