//! A strict lexer for schema coordinate text.
//!
//! Schema coordinates share GraphQL's lexical primitives (names and a handful
//! of punctuators) but nothing is ignorable: where a document lexer would
//! skip whitespace, commas, and comments, this lexer reports an
//! [`InvalidCharacter`](crate::CoordinateParseErrorKind::InvalidCharacter)
//! error. The only exception is a single leading byte-order mark.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_schema_coordinate::CoordinateLexer;
//! use libgraphql_schema_coordinate::token::CoordinateTokenKind;
//!
//! let mut lexer = CoordinateLexer::new("Query.user");
//! assert_eq!(lexer.token().kind, CoordinateTokenKind::Sof);
//! assert_eq!(lexer.lookahead().unwrap().kind, CoordinateTokenKind::Name("Query"));
//! assert_eq!(lexer.advance().unwrap().kind, CoordinateTokenKind::Name("Query"));
//! assert_eq!(lexer.advance().unwrap().kind, CoordinateTokenKind::Dot);
//! assert_eq!(lexer.advance().unwrap().kind, CoordinateTokenKind::Name("user"));
//! assert_eq!(lexer.advance().unwrap().kind, CoordinateTokenKind::Eof);
//! assert_eq!(lexer.advance().unwrap().kind, CoordinateTokenKind::Eof);
//! ```

use crate::CoordinateErrorNote;
use crate::CoordinateParseError;
use crate::CoordinateParseErrorKind;
use crate::CoordinateSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::CoordinateToken;
use crate::token::CoordinateTokenKind;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A stateful lexer over a single schema coordinate.
///
/// Tokens are appended to an internal buffer as they are lexed and are never
/// discarded; [`token()`](Self::token) is a cursor into that buffer. This
/// lets [`lookahead()`](Self::lookahead) lex one token ahead without losing
/// the current one, and lets callers inspect every token lexed so far via
/// [`lexed_tokens()`](Self::lexed_tokens).
///
/// The lexer starts positioned on a `Sof` token. Once `Eof` has been reached,
/// further calls to [`advance()`](Self::advance) keep returning it.
pub struct CoordinateLexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Optional file path, included in every token span.
    file_path: Option<&'src Path>,

    /// Byte offset of the next character to lex.
    curr_byte_offset: usize,

    /// 0-based UTF-8 character column of the next character to lex.
    curr_col_utf8: usize,

    /// Append-only buffer of every token lexed so far. Never empty: index 0
    /// is always the `Sof` token.
    tokens: Vec<CoordinateToken<'src>>,

    /// Index into `tokens` of the current token.
    curr_token_idx: usize,
}

impl<'src> CoordinateLexer<'src> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'src str) -> Self {
        Self::new_impl(source, None)
    }

    /// Creates a new lexer whose token spans include `file_path`.
    pub fn with_file_path(source: &'src str, file_path: &'src Path) -> Self {
        Self::new_impl(source, Some(file_path))
    }

    fn new_impl(source: &'src str, file_path: Option<&'src Path>) -> Self {
        let mut lexer = Self {
            source,
            file_path,
            curr_byte_offset: 0,
            curr_col_utf8: 0,
            tokens: Vec::with_capacity(8),
            curr_token_idx: 0,
        };

        let start = lexer.curr_position();
        let sof_span = lexer.make_span(start);
        lexer.tokens.push(CoordinateToken::new(CoordinateTokenKind::Sof, sof_span));

        if lexer.peek_char() == Some(BYTE_ORDER_MARK) {
            lexer.consume_char(BYTE_ORDER_MARK);
        }

        lexer
    }

    /// Returns the source text being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the current token (initially `Sof`).
    pub fn token(&self) -> &CoordinateToken<'src> {
        &self.tokens[self.curr_token_idx]
    }

    /// Returns every token from `Sof` up to and including the current token.
    pub fn lexed_tokens(&self) -> &[CoordinateToken<'src>] {
        &self.tokens[..=self.curr_token_idx]
    }

    /// Advances to the next token and returns it.
    ///
    /// Returns `Eof` again if the current token is already `Eof`. On a lexical
    /// error the lexer does not move, so retrying reports the same error.
    pub fn advance(&mut self) -> Result<&CoordinateToken<'src>, CoordinateParseError> {
        self.ensure_lexed(self.curr_token_idx + 1)?;
        if self.curr_token_idx + 1 < self.tokens.len() {
            self.curr_token_idx += 1;
        }
        Ok(self.token())
    }

    /// Returns the token after the current one without consuming it.
    ///
    /// At `Eof` this returns the `Eof` token itself.
    pub fn lookahead(&mut self) -> Result<&CoordinateToken<'src>, CoordinateParseError> {
        self.ensure_lexed(self.curr_token_idx + 1)?;
        let idx = (self.curr_token_idx + 1).min(self.tokens.len() - 1);
        Ok(&self.tokens[idx])
    }

    /// Lexes until `tokens[idx]` exists or `Eof` has been buffered.
    fn ensure_lexed(&mut self, idx: usize) -> Result<(), CoordinateParseError> {
        while self.tokens.len() <= idx {
            let at_eof = self.tokens
                .last()
                .is_some_and(|token| token.kind == CoordinateTokenKind::Eof);
            if at_eof {
                break;
            }
            let token = self.lex_token()?;
            self.tokens.push(token);
        }
        Ok(())
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(0, self.curr_col_utf8, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes `ch`, which the caller has already peeked.
    ///
    /// Line terminators are never consumed (they are lexical errors), so only
    /// the column and byte offset need to move.
    fn consume_char(&mut self, ch: char) {
        self.curr_byte_offset += ch.len_utf8();
        self.curr_col_utf8 += 1;
    }

    fn make_span(&self, start: SourcePosition) -> CoordinateSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => CoordinateSourceSpan::with_file(start, end, path.to_path_buf()),
            None => CoordinateSourceSpan::new(start, end),
        }
    }

    // =========================================================================
    // Token lexing
    // =========================================================================

    fn lex_token(&mut self) -> Result<CoordinateToken<'src>, CoordinateParseError> {
        let start = self.curr_position();

        let Some(ch) = self.peek_char() else {
            let span = self.make_span(start);
            return Ok(CoordinateToken::new(CoordinateTokenKind::Eof, span));
        };

        let kind = match ch {
            '.' => CoordinateTokenKind::Dot,
            '(' => CoordinateTokenKind::ParenOpen,
            ')' => CoordinateTokenKind::ParenClose,
            ':' => CoordinateTokenKind::Colon,
            '@' => CoordinateTokenKind::At,
            ch if is_name_start(ch) => return Ok(self.lex_name(start)),
            ch => return Err(self.invalid_character_error(start, ch)),
        };

        self.consume_char(ch);
        let span = self.make_span(start);
        Ok(CoordinateToken::new(kind, span))
    }

    /// Lexes a maximal run of name characters. The caller has verified that
    /// the first character is a valid name start.
    fn lex_name(&mut self, start: SourcePosition) -> CoordinateToken<'src> {
        let name_len = self
            .remaining()
            .find(|ch: char| !is_name_continue(ch))
            .unwrap_or(self.remaining().len());

        // Name characters are all ASCII: one byte, one column each.
        let value = &self.source[self.curr_byte_offset..self.curr_byte_offset + name_len];
        self.curr_byte_offset += name_len;
        self.curr_col_utf8 += name_len;

        let span = self.make_span(start);
        CoordinateToken::new(CoordinateTokenKind::Name(value), span)
    }

    fn invalid_character_error(
        &self,
        start: SourcePosition,
        ch: char,
    ) -> CoordinateParseError {
        let end = SourcePosition::new(
            start.line(),
            start.col_utf8() + 1,
            start.byte_offset() + ch.len_utf8(),
        );
        let span = match self.file_path {
            Some(path) => CoordinateSourceSpan::with_file(start, end, path.to_path_buf()),
            None => CoordinateSourceSpan::new(start, end),
        };

        let mut notes = smallvec![];
        if ch.is_whitespace() || ch == ',' {
            notes.push(CoordinateErrorNote::help(
                "schema coordinates cannot contain whitespace, commas, or line \
                terminators",
            ));
        } else if ch.is_ascii_digit() {
            notes.push(CoordinateErrorNote::general(
                "names must start with a letter or `_`",
            ));
        }

        CoordinateParseError::with_notes(
            format!("Invalid character: {}.", describe_char(ch)),
            span,
            CoordinateParseErrorKind::InvalidCharacter { character: ch },
            notes,
        )
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Printable ASCII is shown quoted (`"x"`); anything else as a `U+XXXX` code
/// point so invisible characters are still identifiable.
fn describe_char(ch: char) -> String {
    match ch {
        '"' => "'\"'".to_string(),
        ' '..='~' => format!("\"{ch}\""),
        _ => format!("U+{:04X}", ch as u32),
    }
}
