use std::ops::RangeInclusive;

use crate::errors;

pub mod account_id;
pub mod lamports;
pub mod transaction_id;

pub use account_id::AccountId;
pub use transaction_id::TransactionId;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Checks that `value` is base58 text decoding to exactly `bytes` bytes.
pub(crate) fn check_base58(
    what: &str,
    value: &str,
    length: RangeInclusive<usize>,
    bytes: usize,
) -> crate::Result<()> {
    if !length.contains(&value.len()) {
        return Err(errors::ErrorKind::InvalidInput(format!(
            "{} `{}` must be {} to {} base58 characters, got {}",
            what,
            value,
            length.start(),
            length.end(),
            value.len()
        ))
        .into());
    }
    if let Some(c) = value.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
        return Err(errors::ErrorKind::InvalidInput(format!(
            "{} `{}` contains non-base58 character `{}`",
            what, value, c
        ))
        .into());
    }
    let decoded = decoded_len(value);
    if decoded != bytes {
        return Err(errors::ErrorKind::InvalidInput(format!(
            "{} `{}` decodes to {} bytes, expected {}",
            what, value, decoded, bytes
        ))
        .into());
    }
    Ok(())
}

/// Byte length of an alphabet-checked base58 string.
fn decoded_len(value: &str) -> usize {
    // little-endian base-256 accumulator
    let mut digits: Vec<u8> = Vec::new();
    for c in value.chars() {
        let mut carry = BASE58_ALPHABET.find(c).unwrap_or_default() as u32;
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) * 58;
            *digit = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            digits.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    let leading_zeros = value.chars().take_while(|c| *c == '1').count();
    digits.len() + leading_zeros
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_len() {
        assert_eq!(decoded_len("11111111111111111111111111111111"), 32);
        assert_eq!(decoded_len("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin"), 32);
        assert_eq!(decoded_len("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"), 33);
        assert_eq!(decoded_len("1112"), 4);
    }

    #[test]
    fn test_wrong_byte_length_is_rejected() {
        let err = check_base58(
            "account id",
            "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz",
            32..=44,
            32,
        )
        .unwrap_err();
        assert!(matches!(err.kind, errors::ErrorKind::InvalidInput(_)));
        assert!(err.message.ends_with("decodes to 33 bytes, expected 32"));
    }
}
