// Rust Bech32 BCH Library
// Written by
//   The Elements developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Rust Bech32 BCH Library
//!
//! Encoding and decoding of the Bech32 and Bech32m formats (BIP-173 and
//! BIP-350), together with a syndrome decoder that locates the characters
//! most likely responsible for a failed checksum.
//!
//! A string of the form `<hrp>1<data><checksum>` carries a six character
//! BCH checksum computed over GF(32). The checksum detects up to three
//! substitution errors anywhere in a 1023 character window, and up to four
//! within the window relevant at the 90 character length cap.
//! [`locate_errors`] exploits the same code to point at up to two suspect
//! character positions when verification fails.
//!
//! This crate operates on opaque 5-bit symbols ([`u5`]). Interpreting the
//! data part (witness versions, regrouping to 8-bit bytes) is the caller's
//! concern.

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]
#![allow(clippy::manual_range_contains)] // this lint is bullshit

/// Re-export of serde crate
#[cfg(feature = "serde")]
#[macro_use]
pub extern crate actual_serde as serde;
#[cfg(all(test, feature = "serde"))]
extern crate serde_json;
#[cfg(all(test, feature = "serde"))]
extern crate serde_test;
#[cfg(test)]
extern crate rand;

use std::{error, fmt};

mod checksum;
mod decode;
mod encode;
mod gf1024;
mod locate;

pub use crate::checksum::Variant;
pub use crate::decode::decode;
pub use crate::encode::{encode, encode_to_fmt};
pub use crate::locate::{locate_errors, LocateError, LocateErrorKind};

/// Maximum length in bytes of an encoded string.
///
/// Decoders reject anything longer; encoders that want their output to be
/// decodable keep `hrp.len() + data.len() + 7` within this bound.
pub const MAX_LENGTH: usize = 90;

/// Integer in the range `0..32`, the alphabet of the data part.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub struct u5(u8);

impl u5 {
    /// Convert a `u8` to `u5` if in range, `Error::InvalidData` otherwise.
    pub fn try_from_u8(value: u8) -> Result<u5, Error> {
        if value > 31 {
            Err(Error::InvalidData(value))
        } else {
            Ok(u5(value))
        }
    }

    /// Returns a copy of the underlying `u8` value.
    pub fn to_u8(self) -> u8 {
        self.0
    }
}

impl From<u5> for u8 {
    fn from(v: u5) -> u8 {
        v.0
    }
}

impl AsRef<u8> for u5 {
    fn as_ref(&self) -> &u8 {
        &self.0
    }
}

/// Error types for Bech32 encoding / decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// String does not contain the separator character.
    MissingSeparator,
    /// The checksum does not match the rest of the data.
    InvalidChecksum,
    /// The data or human-readable part is too long or too short.
    InvalidLength,
    /// Some part of the string contains an invalid character.
    InvalidChar(char),
    /// Some part of the data has an invalid value.
    InvalidData(u8),
    /// The whole string must be of one case.
    MixedCase,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingSeparator => write!(f, "missing human-readable separator, \"1\""),
            Error::InvalidChecksum => write!(f, "invalid checksum"),
            Error::InvalidLength => write!(f, "invalid length"),
            Error::InvalidChar(n) => write!(f, "invalid character (code={})", n),
            Error::InvalidData(n) => write!(f, "invalid data point ({})", n),
            Error::MixedCase => write!(f, "mixed-case strings not allowed"),
        }
    }
}

impl error::Error for Error {}
