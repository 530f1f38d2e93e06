use crate::alphabet;

/// Hex digit group widths of a canonical UUID rendering.
const UUID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Returns true iff every character of `s` belongs to the Base58 alphabet.
///
/// The empty string is valid: it is the zero-length representation of the
/// integer zero.
pub fn is_valid_base58(s: &str) -> bool {
    s.chars().all(|c| alphabet::digit_value(c).is_some())
}

/// Returns true iff `s` is a UUID string in any accepted format.
///
/// Accepted formats are a superset of the canonical lowercase hyphenated
/// rendering: any character case, an optional `0x`/`0X` prefix, and each of
/// the four hyphens individually optional. Hyphens anywhere else are
/// rejected.
pub fn is_valid_uuid(s: &str) -> bool {
    uuid_hex_digits(s).is_some()
}

/// Extracts the 32 hex digits of an accepted UUID string, in input order
/// and original case. Returns `None` when `s` is not an accepted format.
pub(crate) fn uuid_hex_digits(s: &str) -> Option<String> {
    let rest = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let bytes = rest.as_bytes();

    let mut hex = String::with_capacity(32);
    let mut i = 0;
    for (group, &width) in UUID_GROUPS.iter().enumerate() {
        if group > 0 && bytes.get(i) == Some(&b'-') {
            i += 1;
        }
        for _ in 0..width {
            match bytes.get(i) {
                Some(&b) if b.is_ascii_hexdigit() => {
                    hex.push(char::from(b));
                    i += 1;
                }
                _ => return None,
            }
        }
    }

    (i == bytes.len()).then_some(hex)
}
