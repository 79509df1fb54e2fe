//! Base64url codec for WebAuthn binary fields.
//!
//! The backend emits challenges, user ids, and credential ids base64url
//! encoded; the ceremony wants raw buffers. Encoding is always url-safe
//! without padding. Decoding is lenient: url-safe first, then padded
//! url-safe, then the standard alphabet, since relying-party stacks disagree
//! on padding and some still emit `+`/`/`.

use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::{DecodeError, Engine};

/// Encodes bytes as unpadded base64url.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a base64url (or standard base64) string into bytes.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(input)
        .or_else(|_| URL_SAFE.decode(input))
        .or_else(|_| STANDARD.decode(input))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    #[test]
    fn round_trip_is_byte_exact() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&all_bytes)).unwrap(), all_bytes);

        let cases: [&[u8]; 4] = [&[], &[0x00], &[0x00, 0x01], &[0xff, 0xfe, 0xfd]];
        for input in cases {
            assert_eq!(decode(&encode(input)).unwrap(), input);
        }
    }

    #[test]
    fn encode_uses_url_safe_alphabet_without_padding() {
        // 0xfb 0xff maps onto `+`/`/` in the standard alphabet.
        let encoded = encode(&[0xfb, 0xff, 0xbf, 0x00]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
        assert!(encoded.contains('-') || encoded.contains('_'));
    }

    #[test]
    fn decode_accepts_standard_and_padded_input() {
        let bytes = vec![0xfb, 0xff, 0xbf, 0x00];
        let standard = STANDARD.encode(&bytes);
        assert!(standard.contains('+') || standard.contains('/'));
        assert_eq!(decode(&standard).unwrap(), bytes);

        // Padded url-safe round-trips as well.
        assert_eq!(decode("AA==").unwrap(), vec![0x00]);
    }

    #[test]
    fn decode_matches_known_vectors() {
        assert_eq!(decode("AA").unwrap(), vec![0x00]);
        assert_eq!(decode("AQ").unwrap(), vec![0x01]);
        assert!(decode("!!!").is_err());
    }
}
