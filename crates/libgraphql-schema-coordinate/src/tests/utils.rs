//! Various test utils.

use crate::CoordinateLexer;
use crate::CoordinateParseError;
use crate::ast;
use crate::parse_schema_coordinate;
use crate::token::CoordinateTokenKind;

/// Lexes all of `source`, returning every token kind after `Sof` up to and
/// including `Eof`.
pub fn lex_all(source: &str) -> Result<Vec<CoordinateTokenKind<'_>>, CoordinateParseError> {
    let mut lexer = CoordinateLexer::new(source);
    let mut kinds = vec![];
    loop {
        let kind = lexer.advance()?.kind;
        kinds.push(kind);
        if kind == CoordinateTokenKind::Eof {
            return Ok(kinds);
        }
    }
}

/// Parses `source`, panicking with the detailed diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::SchemaCoordinate<'_> {
    match parse_schema_coordinate(source) {
        Ok(coordinate) => coordinate,
        Err(err) => panic!(
            "expected `{source}` to parse:\n{}",
            err.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> CoordinateParseError {
    match parse_schema_coordinate(source) {
        Ok(coordinate) => panic!(
            "expected `{source}` to fail to parse, but got {coordinate:?}",
        ),
        Err(err) => err,
    }
}

/// Whether any help note on `err` contains `fragment`.
pub fn has_help_containing(err: &CoordinateParseError, fragment: &str) -> bool {
    err.notes().iter().any(|note| {
        note.kind == crate::CoordinateErrorNoteKind::Help
            && note.message.contains(fragment)
    })
}
