//! `application/x-www-form-urlencoded` decoding
//!
//! Used both for job payloads posted as forms and for the provisioning
//! page, which submits its fields in the query string.

use heapless::{String, Vec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// `%` not followed by two hex digits
    InvalidEscape,
    /// Decoded value does not fit the destination
    TooLong,
    /// Decoded bytes are not UTF-8
    InvalidUtf8,
}

/// Iterator over raw `key=value` pairs of a form body
pub struct FormPairs<'a> {
    rest: Option<&'a str>,
}

impl<'a> FormPairs<'a> {
    pub fn new(encoded: &'a str) -> Self {
        Self {
            rest: Some(encoded),
        }
    }
}

impl<'a> Iterator for FormPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;
            let (pair, tail) = match rest.split_once('&') {
                Some((pair, tail)) => (pair, Some(tail)),
                None => (rest, None),
            };
            self.rest = tail;

            if pair.is_empty() {
                continue;
            }
            return Some(pair.split_once('=').unwrap_or((pair, "")));
        }
    }
}

/// Decode a single form component
///
/// `+` becomes a space and `%XX` becomes the byte `XX`.
pub fn decode<const N: usize>(raw: &str) -> Result<String<N>, FormError> {
    let mut bytes: Vec<u8, N> = Vec::new();
    let mut input = raw.bytes();

    while let Some(byte) = input.next() {
        let decoded = match byte {
            b'+' => b' ',
            b'%' => {
                let high = input.next().and_then(hex_value);
                let low = input.next().and_then(hex_value);
                match (high, low) {
                    (Some(high), Some(low)) => (high << 4) | low,
                    _ => return Err(FormError::InvalidEscape),
                }
            }
            other => other,
        };
        bytes.push(decoded).map_err(|_| FormError::TooLong)?;
    }

    String::from_utf8(bytes).map_err(|_| FormError::InvalidUtf8)
}

/// Decode a single form component, keeping the first `N` bytes
///
/// The value is cut at a character boundary. Input past the cut is not
/// inspected.
pub fn decode_truncating<const N: usize>(raw: &str) -> Result<String<N>, FormError> {
    let mut bytes: Vec<u8, N> = Vec::new();
    let mut input = raw.bytes();

    while let Some(byte) = input.next() {
        let decoded = match byte {
            b'+' => b' ',
            b'%' => {
                let high = input.next().and_then(hex_value);
                let low = input.next().and_then(hex_value);
                match (high, low) {
                    (Some(high), Some(low)) => (high << 4) | low,
                    _ => return Err(FormError::InvalidEscape),
                }
            }
            other => other,
        };
        if bytes.push(decoded).is_err() {
            break;
        }
    }

    match core::str::from_utf8(&bytes) {
        Ok(_) => {}
        // Multibyte character split by the cut
        Err(e) if e.error_len().is_none() => bytes.truncate(e.valid_up_to()),
        Err(_) => return Err(FormError::InvalidUtf8),
    }
    String::from_utf8(bytes).map_err(|_| FormError::InvalidUtf8)
}

/// Raw, still encoded value of the first field called `key`
pub fn find_raw_field<'a>(encoded: &'a str, key: &str) -> Option<&'a str> {
    FormPairs::new(encoded).find_map(|(raw_key, raw_value)| {
        let name: String<32> = decode(raw_key).ok()?;
        (name == key).then_some(raw_value)
    })
}

/// Find and decode the first field called `key`
pub fn find_field<const N: usize>(
    encoded: &str,
    key: &str,
) -> Result<Option<String<N>>, FormError> {
    find_raw_field(encoded, key).map(decode::<N>).transpose()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_and_percent_are_decoded() {
        let value: String<32> = decode("Home+Wi%2DFi%21").unwrap();
        assert_eq!(value.as_str(), "Home Wi-Fi!");
    }

    #[test]
    fn multibyte_escapes_are_decoded() {
        let value: String<16> = decode("M%C3%BCnchen").unwrap();
        assert_eq!(value.as_str(), "München");
    }

    #[test]
    fn broken_escape_is_an_error() {
        assert_eq!(decode::<8>("50%"), Err(FormError::InvalidEscape));
        assert_eq!(decode::<8>("%zz"), Err(FormError::InvalidEscape));
    }

    #[test]
    fn overlong_value_is_an_error() {
        assert_eq!(decode::<4>("abcde"), Err(FormError::TooLong));
    }

    #[test]
    fn truncating_decode_cuts_at_char_boundary() {
        let value: String<4> = decode_truncating("ab%C3%BC%C3%BC").unwrap();
        assert_eq!(value.as_str(), "abü");

        let value: String<3> = decode_truncating("ab%C3%BC").unwrap();
        assert_eq!(value.as_str(), "ab");
    }

    #[test]
    fn truncating_decode_still_rejects_bad_input() {
        assert_eq!(
            decode_truncating::<8>("a%zz"),
            Err(FormError::InvalidEscape)
        );
        assert_eq!(
            decode_truncating::<8>("%FF%FE"),
            Err(FormError::InvalidUtf8)
        );
    }

    #[test]
    fn lookup_skips_empty_pairs() {
        let found: Option<String<16>> =
            find_field("&&ssid=lab&&pass=", "pass").unwrap();
        assert_eq!(found.as_deref(), Some(""));
    }
}
