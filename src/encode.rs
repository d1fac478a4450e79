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

//! # Encoding

use std::fmt;

use crate::checksum::{create_checksum, Variant, CHARSET, SEP};
use crate::u5;

/// Encode a Bech32 or Bech32m string.
///
/// The encoder imposes no length limit of its own; callers who want the
/// result to be decodable keep `hrp.len() + data.len() + 7` within
/// [`crate::MAX_LENGTH`].
///
/// # Panics
///
/// If the HRP contains an uppercase ASCII letter. An uppercase HRP would
/// make the output invalid under the all-lowercase output rule, and
/// silently lowercasing it would break round-tripping, so it is treated as
/// a programming error.
pub fn encode<T: AsRef<[u5]>>(variant: Variant, hrp: &str, data: T) -> String {
    let hrp_bytes = hrp.as_bytes();
    for b in hrp_bytes {
        assert!(*b < b'A' || *b > b'Z', "uppercase HRPs do not round-trip");
    }
    let data = data.as_ref();
    let checksum = create_checksum(variant, hrp_bytes, data);

    let mut ret = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    ret.push_str(hrp);
    ret.push(SEP);
    for p in data.iter().chain(checksum.iter()) {
        ret.push(CHARSET[p.to_u8() as usize]);
    }
    ret
}

/// Encode a Bech32 or Bech32m payload to an [`fmt::Formatter`].
///
/// Same contract as [`encode`], without the intermediate allocation for
/// the output string; useful from `Display` implementations.
///
/// # Panics
///
/// If the HRP contains an uppercase ASCII letter, as for [`encode`].
pub fn encode_to_fmt<T: AsRef<[u5]>>(
    fmt: &mut fmt::Formatter,
    hrp: &str,
    data: T,
    variant: Variant,
) -> fmt::Result {
    let hrp_bytes = hrp.as_bytes();
    for b in hrp_bytes {
        assert!(*b < b'A' || *b > b'Z', "uppercase HRPs do not round-trip");
    }
    let checksum = create_checksum(variant, hrp_bytes, data.as_ref());
    let data_part = data.as_ref().iter().chain(checksum.iter());

    write!(
        fmt,
        "{}{}{}",
        hrp,
        SEP,
        data_part
            .map(|p| CHARSET[p.to_u8() as usize])
            .collect::<String>()
    )
}
