//! The [`Uuid`] value type: generation, canonical rendering and parsing.

use crate::{FormatError, GenerationError, ParseError};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::{fmt, str::FromStr};

/// Number of hex digits in a UUID once hyphens are removed.
const SIMPLE_LEN: usize = 32;

/// Byte ranges of the five hyphen-separated groups (8-4-4-4-12 hex digits).
const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// A 128-bit universally unique identifier.
///
/// The value is a plain 16-byte array. Two bit fields carry meaning for
/// RFC 4122 version 4 identifiers:
/// - byte 6, high nibble: the version (`0100` for version 4)
/// - byte 8, top two bits: the variant (`10` for RFC 4122)
///
/// Values produced by [`Uuid::new_v4`] always carry both markers. Values produced by
/// [`Uuid::parse`] are taken verbatim from the input and may not.
///
/// # Display format
/// `Display` renders the canonical hyphenated form, for example
/// `331495aa-cdef-4042-8123-aabbccddeeff`. Use [`Uuid::simple`] for the 32-digit form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Generates a new random version 4 UUID using the operating system's random source.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the operating system cannot supply 16 random bytes.
    pub fn new_v4() -> Result<Self, GenerationError> {
        Self::new_v4_from_rng(&mut OsRng)
    }

    /// Generates a new random version 4 UUID drawing bytes from `rng`.
    ///
    /// All 16 bytes are filled from `rng`, then the version and variant bits are
    /// overwritten. The remaining 122 bits are whatever the source produced.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] wrapping the source's error if `rng` fails to fill
    /// the buffer. The call is not retried.
    pub fn new_v4_from_rng<R>(rng: &mut R) -> Result<Self, GenerationError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; 16];
        rng.try_fill_bytes(&mut bytes).map_err(GenerationError)?;

        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Ok(Self(bytes))
    }

    /// Parses a UUID from its hexadecimal text form.
    ///
    /// Accepts the canonical hyphenated form and the 32-digit form without hyphens, in
    /// either case. Every `-` in the input is removed before validation wherever it
    /// appears, so `3-31495aa...` is accepted as long as exactly 32 hex digits remain.
    ///
    /// No version or variant bits are forced; the bytes are exactly those decoded.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidLength`] if the input does not contain exactly 32
    ///   characters once hyphens are removed.
    /// - [`FormatError::InvalidHexCharacter`] if any remaining character is not an
    ///   ASCII hex digit.
    /// - [`ParseError::Decode`] if hex decoding fails for any other reason.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let digits: String = input.chars().filter(|&c| c != '-').collect();

        if digits.len() != SIMPLE_LEN {
            return Err(FormatError::InvalidLength { len: digits.len() }.into());
        }

        if let Some((index, character)) = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(FormatError::InvalidHexCharacter { character, index }.into());
        }

        let mut bytes = [0u8; 16];
        hex::decode_to_slice(&digits, &mut bytes).map_err(ParseError::Decode)?;

        Ok(Self(bytes))
    }

    /// The all-zero UUID.
    pub const fn nil() -> Self {
        Self([0u8; 16])
    }

    /// Wraps a raw byte array without inspecting it.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns `true` if every byte is zero.
    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }

    /// Returns the version number stored in the high nibble of byte 6.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns `true` if the top two bits of byte 8 are `10`.
    pub const fn is_rfc4122_variant(&self) -> bool {
        (self.0[8] & 0xc0) == 0x80
    }

    /// Returns `true` if both the version 4 and RFC 4122 variant markers are present.
    pub const fn is_v4(&self) -> bool {
        self.version() == 4 && self.is_rfc4122_variant()
    }

    /// Returns an adapter that displays this UUID as 32 lowercase hex digits with no
    /// hyphens.
    pub const fn simple(&self) -> Simple<'_> {
        Simple(self)
    }
}

impl fmt::Display for Uuid {
    /// Formats the UUID as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` in lowercase hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(start, end)) in GROUPS.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            for byte in &self.0[start..end] {
                write!(f, "{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    /// Equivalent to [`Uuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(uuid: ::uuid::Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl From<Uuid> for ::uuid::Uuid {
    fn from(uuid: Uuid) -> Self {
        ::uuid::Uuid::from_bytes(uuid.0)
    }
}

/// Displays a [`Uuid`] as 32 lowercase hex digits without hyphens.
///
/// Created by [`Uuid::simple`].
#[derive(Clone, Copy, Debug)]
pub struct Simple<'a>(&'a Uuid);

impl fmt::Display for Simple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
