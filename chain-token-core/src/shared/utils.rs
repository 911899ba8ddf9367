//! Utility functions for the token core
//!
//! Address validation and EIP-55 checksum normalization.

use sha3::{Digest, Keccak256};

use crate::shared::constants::{ADDRESS_HEX_LENGTH, ADDRESS_PREFIX};
use crate::shared::error::TokenError;
use crate::shared::types::Address;

/// Validate Ethereum address format
///
/// The `0x` prefix is optional. Returns the 40 hex digits without prefix.
pub fn validate_ethereum_address(address: &str) -> Result<&str, TokenError> {
    let hex_part = address.strip_prefix(ADDRESS_PREFIX).unwrap_or(address);

    if hex_part.len() != ADDRESS_HEX_LENGTH {
        return Err(TokenError::invalid_address(
            address,
            format!("expected {} hex characters, got {}", ADDRESS_HEX_LENGTH, hex_part.len()),
        ));
    }

    // Every character must be a hex digit; the decoded bytes themselves are not needed
    hex::decode(hex_part).map_err(|e| TokenError::invalid_address(address, e.to_string()))?;

    Ok(hex_part)
}

/// EIP-55 mixed-case checksum encoding of a well-formed address
pub fn to_checksum_address(hex_part: &str) -> Address {
    let lower = hex_part.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut result = String::with_capacity(ADDRESS_PREFIX.len() + ADDRESS_HEX_LENGTH);
    result.push_str(ADDRESS_PREFIX);
    for (i, ch) in lower.chars().enumerate() {
        let hash_byte = hash[i / 2];
        let hash_nibble = if i % 2 == 0 { hash_byte >> 4 } else { hash_byte & 0x0f };
        if hash_nibble >= 8 && ch.is_ascii_alphabetic() {
            result.push(ch.to_ascii_uppercase());
        } else {
            result.push(ch);
        }
    }

    result
}

fn is_mixed_case(hex_part: &str) -> bool {
    hex_part.chars().any(|c| c.is_ascii_lowercase()) && hex_part.chars().any(|c| c.is_ascii_uppercase())
}

/// Validate an address and return its canonical checksummed form
///
/// All-lowercase and all-uppercase input is normalized. Mixed-case input is
/// treated as a checksum claim and must already match EIP-55.
pub fn validate_and_parse_address(address: &str) -> Result<Address, TokenError> {
    let hex_part = validate_ethereum_address(address)?;
    let checksummed = to_checksum_address(hex_part);

    if is_mixed_case(hex_part) && &checksummed[ADDRESS_PREFIX.len()..] != hex_part {
        return Err(TokenError::invalid_address(address, "bad checksum"));
    }

    Ok(checksummed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ethereum_address() {
        // Valid addresses
        assert!(validate_ethereum_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6").is_ok());
        assert!(validate_ethereum_address("742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6").is_ok()); // No 0x

        // Invalid addresses
        assert!(validate_ethereum_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b").is_err()); // Too short
        assert!(validate_ethereum_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6a").is_err()); // Too long
        assert!(validate_ethereum_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8bg").is_err()); // Invalid char
        assert!(validate_ethereum_address("").is_err());
        assert!(validate_ethereum_address("0x").is_err());
    }

    #[test]
    fn test_non_hex_character_is_reported() {
        let address = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8bg";
        let err = validate_ethereum_address(address).expect_err("'g' is not a hex digit");

        assert!(matches!(err, TokenError::InvalidAddress(_)));
        let message = err.to_string();
        assert!(message.contains(address));
        assert!(message.contains("'g'"));

        // Multi-byte characters can make the byte length 40 with fewer digits
        let unicode = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8é";
        assert_eq!(unicode.len() - 2, 40);
        assert!(matches!(validate_ethereum_address(unicode), Err(TokenError::InvalidAddress(_))));
    }

    #[test]
    fn test_checksum_known_vectors() {
        // EIP-55 reference vectors
        assert_eq!(
            to_checksum_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert_eq!(
            to_checksum_address("fb6916095ca1df60bb79ce92ce3ea74c37c5d359"),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
        assert_eq!(
            to_checksum_address("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }

    #[test]
    fn test_normalizes_single_case_input() {
        let expected = "0xfbAE861cbDFBB11AC0bC64c27AE7fEd3f99B8737";
        assert_eq!(
            validate_and_parse_address("0xfbae861cbdfbb11ac0bc64c27ae7fed3f99b8737").unwrap(),
            expected
        );
        assert_eq!(
            validate_and_parse_address("0xFBAE861CBDFBB11AC0BC64C27AE7FED3F99B8737").unwrap(),
            expected
        );
        assert_eq!(
            validate_and_parse_address("fbae861cbdfbb11ac0bc64c27ae7fed3f99b8737").unwrap(),
            expected
        );
    }

    #[test]
    fn test_accepts_correct_checksum() {
        let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(validate_and_parse_address(address).unwrap(), address);
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let result = validate_and_parse_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6");
        assert!(matches!(result, Err(TokenError::InvalidAddress(_))));

        assert_eq!(
            validate_and_parse_address("0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6").unwrap(),
            "0x742d35Cc6634C0532925A3B8D4C9dB96C4B4d8B6"
        );
    }

    #[test]
    fn test_all_digit_address_has_no_case() {
        assert_eq!(
            validate_and_parse_address("0x0000000000000000000000000000000000000000").unwrap(),
            "0x0000000000000000000000000000000000000000"
        );
    }
}
