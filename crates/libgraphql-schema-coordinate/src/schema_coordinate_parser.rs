//! Recursive descent parser for schema coordinates.
//!
//! The grammar is small and total over the input:
//!
//! ```text
//! SchemaCoordinate :
//!   Name
//!   Name . Name
//!   Name . Name ( Name : )
//!   @ Name
//!   @ Name ( Name : )
//! ```
//!
//! A leading `@` selects the directive productions; otherwise a type
//! production. After a production has matched, the next token must be
//! `<EOF>`. There is no error recovery: the first unexpected character or
//! token ends the parse.

use crate::ByteSpan;
use crate::CoordinateLexer;
use crate::CoordinateParseError;
use crate::CoordinateParseErrorKind;
use crate::ast;
use crate::token::CoordinateToken;
use crate::token::CoordinateTokenKind;
use std::borrow::Cow;
use std::path::Path;

type Result<T> = std::result::Result<T, CoordinateParseError>;

/// Parses `source` as a single schema coordinate.
///
/// ```rust
/// use libgraphql_schema_coordinate::ast::SchemaCoordinate;
/// use libgraphql_schema_coordinate::parse_schema_coordinate;
///
/// let coordinate = parse_schema_coordinate("Query.user(id:)").unwrap();
/// let SchemaCoordinate::Argument(arg_coord) = coordinate else {
///     panic!("expected an argument coordinate");
/// };
/// assert_eq!(arg_coord.name.as_str(), "Query");
/// assert_eq!(arg_coord.field_name.as_str(), "user");
/// assert_eq!(arg_coord.argument_name.as_str(), "id");
///
/// assert!(parse_schema_coordinate("Query.user.name").is_err());
/// ```
pub fn parse_schema_coordinate(source: &str) -> Result<ast::SchemaCoordinate<'_>> {
    SchemaCoordinateParser::new(source).parse_schema_coordinate()
}

/// A parser for one schema coordinate.
///
/// The parser owns a [`CoordinateLexer`]; the lexer's current token is always
/// the last token the parser consumed, and the parser peeks at the next one
/// with [`CoordinateLexer::lookahead()`].
pub struct SchemaCoordinateParser<'src> {
    lexer: CoordinateLexer<'src>,
}

impl<'src> SchemaCoordinateParser<'src> {
    /// Creates a new parser from a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self {
            lexer: CoordinateLexer::new(source.as_ref()),
        }
    }

    /// Creates a new parser whose error spans include `file_path`.
    pub fn with_file_path(source: &'src str, file_path: &'src Path) -> Self {
        Self {
            lexer: CoordinateLexer::with_file_path(source, file_path),
        }
    }

    /// Parses the whole input as one schema coordinate.
    pub fn parse_schema_coordinate(mut self) -> Result<ast::SchemaCoordinate<'src>> {
        let coordinate =
            if self.peek_is(&CoordinateTokenKind::At)? {
                self.parse_directive_coordinate()?
            } else {
                self.parse_type_coordinate()?
            };
        self.expect_eof(&coordinate)?;
        Ok(coordinate)
    }

    // =========================================================================
    // Productions
    // =========================================================================

    /// `@ Name` or `@ Name ( Name : )`
    fn parse_directive_coordinate(&mut self) -> Result<ast::SchemaCoordinate<'src>> {
        let start = self.expect(&CoordinateTokenKind::At)?;
        let name = self.expect_name()?;

        if self.peek_is(&CoordinateTokenKind::ParenOpen)? {
            let argument_name = self.parse_argument_clause()?;
            Ok(ast::SchemaCoordinate::DirectiveArgument(
                ast::DirectiveArgumentCoordinate {
                    span: self.span_from(start),
                    name,
                    argument_name,
                },
            ))
        } else {
            Ok(ast::SchemaCoordinate::Directive(ast::DirectiveCoordinate {
                span: self.span_from(start),
                name,
            }))
        }
    }

    /// `Name`, `Name . Name`, or `Name . Name ( Name : )`
    fn parse_type_coordinate(&mut self) -> Result<ast::SchemaCoordinate<'src>> {
        let name = self.expect_name()?;
        let start = name.span;

        if !self.peek_is(&CoordinateTokenKind::Dot)? {
            return Ok(ast::SchemaCoordinate::Type(ast::TypeCoordinate {
                span: self.span_from(start),
                name,
            }));
        }

        self.expect(&CoordinateTokenKind::Dot)?;
        let member_name = self.expect_name()?;

        if self.peek_is(&CoordinateTokenKind::ParenOpen)? {
            let argument_name = self.parse_argument_clause()?;
            Ok(ast::SchemaCoordinate::Argument(ast::ArgumentCoordinate {
                span: self.span_from(start),
                name,
                field_name: member_name,
                argument_name,
            }))
        } else {
            Ok(ast::SchemaCoordinate::Member(ast::MemberCoordinate {
                span: self.span_from(start),
                name,
                member_name,
            }))
        }
    }

    /// `( Name : )`, returning the argument name.
    ///
    /// The clause is rigid: coordinates name an argument's position and never
    /// supply a value for it.
    fn parse_argument_clause(&mut self) -> Result<ast::Name<'src>> {
        self.expect(&CoordinateTokenKind::ParenOpen)?;
        let argument_name = self.expect_name()?;
        self.expect(&CoordinateTokenKind::Colon)?;

        let found_value = matches!(
            self.lexer.lookahead()?.kind,
            CoordinateTokenKind::Name(_),
        );
        if let Err(mut error) = self.expect(&CoordinateTokenKind::ParenClose) {
            if found_value {
                error.add_help(format!(
                    "schema coordinates name an argument without supplying a \
                    value; write `({argument_name}:)`",
                ));
            }
            return Err(error);
        }

        Ok(argument_name)
    }

    /// Expects the end of input, adding a targeted hint for the common ways
    /// a coordinate overruns its production.
    fn expect_eof(&mut self, coordinate: &ast::SchemaCoordinate<'src>) -> Result<()> {
        let token = self.lexer.lookahead()?;
        let help = match (&token.kind, coordinate) {
            (CoordinateTokenKind::Eof, _) => return Ok(()),

            (
                CoordinateTokenKind::Dot,
                ast::SchemaCoordinate::Member(_) | ast::SchemaCoordinate::Argument(_),
            ) => Some(
                "schema coordinates address at most one member of a type; \
                nested paths like `Type.field.subfield` are not supported",
            ),

            (
                CoordinateTokenKind::Dot,
                ast::SchemaCoordinate::Directive(_)
                | ast::SchemaCoordinate::DirectiveArgument(_),
            ) => Some(
                "directives have no members; use `@directive(argument:)` to \
                address a directive argument",
            ),

            (CoordinateTokenKind::ParenOpen, ast::SchemaCoordinate::Type(_)) => Some(
                "argument coordinates must include a field name, e.g. \
                `Type.field(argument:)`",
            ),

            _ => None,
        };

        let mut error = Self::unexpected_token_error(token, "<EOF>");
        if let Some(help) = help {
            error.add_help(help);
        }
        Err(error)
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Checks whether the next token has the given kind without consuming it.
    fn peek_is(&mut self, kind: &CoordinateTokenKind<'_>) -> Result<bool> {
        Ok(self.lexer.lookahead()?.kind.is_same_kind(kind))
    }

    /// Expects and consumes a token of the given kind, returning its span.
    fn expect(&mut self, expected_kind: &CoordinateTokenKind<'_>) -> Result<ByteSpan> {
        if self.peek_is(expected_kind)? {
            return Ok(self.lexer.advance()?.span.byte_span());
        }
        let token = self.lexer.lookahead()?;
        Err(Self::unexpected_token_error(token, &expected_kind.description()))
    }

    /// Expects and consumes a name token.
    fn expect_name(&mut self) -> Result<ast::Name<'src>> {
        let token = self.lexer.lookahead()?;
        let CoordinateTokenKind::Name(value) = token.kind else {
            return Err(Self::unexpected_token_error(token, "name"));
        };
        let name = ast::Name {
            value: Cow::Borrowed(value),
            span: token.span.byte_span(),
        };
        self.lexer.advance()?;
        Ok(name)
    }

    /// The span from `start` to the end of the last consumed token.
    fn span_from(&self, start: ByteSpan) -> ByteSpan {
        start.merge(self.lexer.token().span.byte_span())
    }

    fn unexpected_token_error(
        found: &CoordinateToken<'_>,
        expected: &str,
    ) -> CoordinateParseError {
        let message = format!("Expected {expected}, found {}", found.kind.description());
        let expected = vec![expected.to_string()];
        let kind =
            if found.kind == CoordinateTokenKind::Eof {
                CoordinateParseErrorKind::UnexpectedEof { expected }
            } else {
                CoordinateParseErrorKind::UnexpectedToken {
                    expected,
                    found: found.kind.as_str().to_string(),
                }
            };
        CoordinateParseError::new(message, found.span.clone(), kind)
    }
}
