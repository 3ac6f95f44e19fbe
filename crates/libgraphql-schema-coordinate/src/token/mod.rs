//! The token types produced by [`CoordinateLexer`](crate::CoordinateLexer).

mod coordinate_token;
mod coordinate_token_kind;

pub use coordinate_token::CoordinateToken;
pub use coordinate_token_kind::CoordinateTokenKind;
