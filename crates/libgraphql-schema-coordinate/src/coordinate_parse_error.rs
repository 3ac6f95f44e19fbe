use crate::CoordinateErrorNote;
use crate::CoordinateErrorNotes;
use crate::CoordinateParseErrorKind;
use crate::CoordinateSourceSpan;

/// A lexical or syntax error in a schema coordinate, with location
/// information and contextual notes.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct CoordinateParseError {
    /// Human-readable primary error message.
    message: String,

    /// The span of the offending character or token.
    span: CoordinateSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: CoordinateParseErrorKind,

    /// Additional notes (context and suggestions).
    notes: CoordinateErrorNotes,
}

impl CoordinateParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: CoordinateSourceSpan,
        kind: CoordinateParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: CoordinateErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: CoordinateSourceSpan,
        kind: CoordinateParseErrorKind,
        notes: CoordinateErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span where the error was detected.
    pub fn span(&self) -> &CoordinateSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &CoordinateParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &CoordinateErrorNotes {
        &self.notes
    }

    /// Returns the 1-based line of the error.
    pub fn line(&self) -> usize {
        self.span.start_inclusive.display_line()
    }

    /// Returns the 1-based column of the error.
    pub fn column(&self) -> usize {
        self.span.start_inclusive.display_col()
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(CoordinateErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: CoordinateSourceSpan,
    ) {
        self.notes
            .push(CoordinateErrorNote::general_with_span(message, span));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(CoordinateErrorNote::help(message));
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// <input>:1:11: error: Expected <EOF>, found `.`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.span.display_file_name(),
            self.line(),
            self.column(),
            self.message,
        )
    }

    /// Formats this error as a multi-line diagnostic for CLI output.
    ///
    /// ```text
    /// error: Expected <EOF>, found `.`
    ///   --> <input>:1:11
    ///    |
    ///  1 | Query.user.name
    ///    |           ^
    ///    = help: nested paths like `Type.field.subfield` are not supported
    /// ```
    ///
    /// The source snippet is omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!(
            "error: {}\n  --> {}:{}:{}\n",
            self.message,
            self.span.display_file_name(),
            self.line(),
            self.column(),
        );

        if let Some(src) = source
            && let Some(snippet) = Self::format_snippet(src, &self.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.prefix(),
                note.message,
            ));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    fn format_snippet(
        source: &str,
        span: &CoordinateSourceSpan,
        marker: char,
    ) -> Option<String> {
        let line_num = span.start_inclusive.line();
        // `split('\n')` rather than `lines()` so a coordinate that consists of
        // only a line terminator still yields an (empty) line 0.
        let line_content = source.split('\n').nth(line_num)?;
        let line_content = line_content.trim_end_matches('\r');
        let display_line_num = line_num + 1;
        let width = display_line_num.to_string().len().max(2);

        let col_start = span.start_inclusive.col_utf8();
        let col_end = span.end_exclusive.col_utf8();
        let underline_len = col_end.saturating_sub(col_start).max(1);

        Some(format!(
            "{:>width$} |\n{display_line_num:>width$} | {line_content}\n{:>width$} | {:>col_start$}{}\n",
            "",
            "",
            "",
            marker.to_string().repeat(underline_len),
        ))
    }
}
