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

//! # Decoding

use crate::checksum::{verify_checksum, Variant, CHARSET_REV, SEP};
use crate::{u5, Error, MAX_LENGTH};

/// Decode a Bech32 or Bech32m string into the variant its checksum
/// satisfies, the lowercased HRP and the data symbols with the checksum
/// removed.
///
/// Uppercase strings are accepted; mixed-case strings are not. The split
/// happens at the last `'1'`, so HRPs containing `'1'` are handled (the
/// separator itself never appears in the data part because `'1'` is not in
/// the alphabet).
pub fn decode(s: &str) -> Result<(Variant, String, Vec<u5>), Error> {
    if s.len() > MAX_LENGTH {
        return Err(Error::InvalidLength);
    }

    // Valid subset of ASCII, and no mixed case anywhere in the string
    // (the HRP counts toward the case of the whole string).
    let mut has_lower: bool = false;
    let mut has_upper: bool = false;
    for b in s.bytes() {
        if b < 33 || b > 126 {
            return Err(Error::InvalidChar(b as char));
        }
        if b >= b'a' && b <= b'z' {
            has_lower = true;
        } else if b >= b'A' && b <= b'Z' {
            has_upper = true;
        }
    }
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }

    // Split at separator and check for two pieces
    let (raw_hrp, raw_data) = match s.rfind(SEP) {
        None => return Err(Error::MissingSeparator),
        Some(sep) => {
            let (hrp, data) = s.split_at(sep);
            (hrp, &data[1..])
        }
    };
    if raw_hrp.is_empty() || raw_data.len() < 6 {
        return Err(Error::InvalidLength);
    }

    let hrp = raw_hrp.to_ascii_lowercase();

    // Check data payload
    let mut data: Vec<u5> = Vec::with_capacity(raw_data.len());
    for b in raw_data.bytes() {
        // b < 128 was established by the ASCII scan above.
        let num_value = CHARSET_REV[b as usize];
        if num_value == -1 {
            return Err(Error::InvalidChar(b as char));
        }
        data.push(u5(num_value as u8));
    }

    let variant = match verify_checksum(hrp.as_bytes(), &data) {
        Some(v) => v,
        None => return Err(Error::InvalidChecksum),
    };

    // Remove checksum from data payload
    let dbl: usize = data.len();
    data.truncate(dbl - 6);

    Ok((variant, hrp, data))
}
