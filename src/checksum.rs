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

//! # Checksum Engine
//!
//! The polynomial arithmetic shared by the encoder, the decoder and the
//! error locator: the residue computation modulo the degree-6 generator
//! over GF(32), HRP expansion, and checksum creation / verification.

use crate::u5;

/// The checksum algorithm of an encoded string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(crate = "actual_serde"))]
pub enum Variant {
    /// The original checksum defined in BIP-173.
    Bech32,
    /// The amended checksum defined in BIP-350.
    Bech32m,
}

impl Variant {
    /// The 30-bit constant a valid residue equals under this variant.
    ///
    /// Requiring a nonzero residue means appending a zero symbol to a
    /// valid data part never yields another valid string.
    pub(crate) fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }
}

/// Human-readable part and data part separator
pub(crate) const SEP: char = '1';

/// Encoding character set. Maps data value -> char
pub(crate) const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

/// Reverse character set. Maps ASCII byte -> CHARSET index on [0,31]
pub(crate) const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, -1, 29, -1, 24, 13, 25, 9, 8, 23,
    -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, -1, 29,
    -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1,
    -1, -1, -1, -1,
];

/// Generator coefficients
///
/// These are x^6 mod g(x) multiplied by {1,2,4,8,16} in GF(32), packed five
/// bits per coefficient, for the generator
/// g(x) = x^6 + {29}x^5 + {22}x^4 + {20}x^3 + {21}x^2 + {29}x + {18}.
/// g(x) is the LCM of the minimal polynomials of three consecutive powers
/// (997, 998, 999) of a primitive element of GF(1024), making the code a
/// primitive BCH code of length 1023 and designed distance 4.
const GEN: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// Compute the residue of the input, read as polynomial coefficients over
/// GF(32) with an implicit leading 1, modulo the generator.
///
/// The result packs the six remainder coefficients five bits each, highest
/// power leftmost. A valid codeword leaves the variant constant here.
pub(crate) fn polymod(values: &[u5]) -> u32 {
    let mut chk: u32 = 1;
    let mut b: u8;
    for v in values {
        // Multiply the running remainder by x, add the incoming
        // coefficient, then reduce the overflowing x^6 term: for each set
        // bit n of the dropped coefficient, add {2^n} * (x^6 mod g(x)).
        b = (chk >> 25) as u8;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(*v.as_ref());
        for i in 0..5 {
            if (b >> i) & 1 == 1 {
                chk ^= GEN[i]
            }
        }
    }
    chk
}

/// Expand an HRP for checksum computation: the high 3 bits of each byte, a
/// zero separator, then the low 5 bits of each byte.
pub(crate) fn hrp_expand(hrp: &[u8]) -> Vec<u5> {
    let mut v: Vec<u5> = Vec::with_capacity(hrp.len() * 2 + 1);
    for b in hrp {
        v.push(u5(b >> 5));
    }
    v.push(u5(0));
    for b in hrp {
        v.push(u5(b & 0x1f));
    }
    v
}

/// Compute the six checksum symbols for the given HRP and data.
pub(crate) fn create_checksum(variant: Variant, hrp: &[u8], data: &[u5]) -> Vec<u5> {
    let mut values: Vec<u5> = hrp_expand(hrp);
    values.extend_from_slice(data);
    // Pad with 6 zeros; what polymod returns is then exactly what must be
    // XORed into the padding to reach the target residue.
    values.extend_from_slice(&[u5(0); 6]);
    let plm: u32 = polymod(&values) ^ variant.constant();
    let mut checksum: Vec<u5> = Vec::with_capacity(6);
    for p in 0..6 {
        checksum.push(u5(((plm >> (5 * (5 - p))) & 0x1f) as u8));
    }
    checksum
}

/// Verify the checksum over a full data part (checksum included) and
/// report which variant it satisfies, if either.
pub(crate) fn verify_checksum(hrp: &[u8], data: &[u5]) -> Option<Variant> {
    let mut exp = hrp_expand(hrp);
    exp.extend_from_slice(data);
    let chk = polymod(&exp);
    if chk == Variant::Bech32.constant() {
        Some(Variant::Bech32)
    } else if chk == Variant::Bech32m.constant() {
        Some(Variant::Bech32m)
    } else {
        None
    }
}
