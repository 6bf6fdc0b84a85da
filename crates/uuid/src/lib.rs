//! RFC 4122 version 4 UUIDs.
//!
//! This crate provides a single value type, [`Uuid`], and the three operations needed to work
//! with random UUIDs as text:
//!
//! - **Generate**: [`Uuid::new_v4`] fills 16 bytes from a cryptographically secure random
//!   source and sets the version 4 and RFC 4122 variant bits.
//! - **Format**: `Display` renders the canonical `8-4-4-4-12` lowercase hex form.
//! - **Parse**: [`Uuid::parse`] (or `str::parse`) reads the hex form back into 16 bytes.
//!
//! ## Canonical UUID form
//! - Length: 36
//! - Characters: `0-9`, `a-f` and `-` at offsets 8, 13, 18 and 23
//! - Example: `331495aa-cdef-4042-8123-aabbccddeeff`
//!
//! ## Accepted input
//! Parsing is more permissive than formatting:
//! - Upper and lower case hex digits are both accepted.
//! - Hyphens are optional. `331495AACDEF40428123AABBCCDDEEFF` is accepted.
//! - Every `-` is stripped before validation, wherever it appears. An input such as
//!   `3-3-1-4-9-5-a-a-c-d-e-f-4-0-4-2-8-1-2-3-a-a-b-b-c-c-d-d-e-e-f-f` parses because exactly
//!   32 hex digits remain. Callers that need the strict canonical layout must check it
//!   themselves.
//! - Braces and `urn:uuid:` prefixes are rejected.
//!
//! Parsing never alters the decoded bytes, so a parsed value is not necessarily a version 4
//! UUID. Use [`Uuid::is_v4`] to check.
//!
//! ## Errors
//! Nothing in this crate logs, retries or panics on bad input. Every failure is returned:
//! - [`GenerationError`] when the random source fails.
//! - [`ParseError`] when text cannot be parsed. It has two levels: the outer variant says
//!   whether the input was malformed ([`ParseError::InvalidFormat`]) or failed to decode
//!   ([`ParseError::Decode`]), and the inner value gives the specific cause. See
//!   [`ParseError::kind`] for a flat view.

mod identifier;

// Re-export public types
pub use identifier::{Simple, Uuid};

/// Error returned when the random source cannot produce bytes for a new UUID.
#[derive(Debug, thiserror::Error)]
#[error("failed to generate UUID: {0}")]
pub struct GenerationError(#[source] rand::Error);

/// Error type for UUID parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The input does not have the shape of a UUID.
    #[error("invalid UUID format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// The input passed validation but could not be decoded as hex.
    #[error("failed to decode UUID: {0}")]
    Decode(#[source] hex::FromHexError),
}

/// Specific reason an input was rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Not exactly 32 characters once hyphens are removed. `len` is the byte length of the
    /// hyphen-stripped input.
    #[error("invalid UUID length: expected 32 characters, got {len}")]
    InvalidLength { len: usize },

    /// A character other than an ASCII hex digit. `index` is the byte offset into the
    /// hyphen-stripped input.
    #[error("invalid UUID hex character: {character:?} at index {index}")]
    InvalidHexCharacter { character: char, index: usize },
}

/// Flat classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidLength,
    InvalidHexCharacter,
    DecodeFailure,
}

impl ParseError {
    /// Returns the specific cause of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::InvalidFormat(FormatError::InvalidLength { .. }) => {
                ParseErrorKind::InvalidLength
            }
            ParseError::InvalidFormat(FormatError::InvalidHexCharacter { .. }) => {
                ParseErrorKind::InvalidHexCharacter
            }
            ParseError::Decode(_) => ParseErrorKind::DecodeFailure,
        }
    }

    /// Returns true if the input was rejected as malformed rather than failing to decode.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ParseError::InvalidFormat(_))
    }
}
