use sha3::{Digest, Keccak256};

const HEX_DIGITS: usize = 40;

/// Decides whether a piece of text is a syntactically valid wallet address.
///
/// Implementations must be pure: the same input always yields the same answer.
pub trait AddressValidator {
    fn is_valid(&self, address: &str) -> bool;
}

/// Validator for 20-byte EVM addresses.
///
/// Accepts an optional lowercase `0x` prefix and 40 hex digits. Single-case
/// digits are accepted as is; mixed case must carry a correct EIP-55 checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmAddressValidator;

impl AddressValidator for EvmAddressValidator {
    fn is_valid(&self, address: &str) -> bool {
        is_address(address)
    }
}

pub fn is_address(address: &str) -> bool {
    let Some(body) = hex_body(address) else {
        return false;
    };

    if !is_mixed_case(body) {
        return true;
    }

    checksum_hex(body) == body
}

/// Returns the EIP-55 form of `address`, or `None` when it is not a valid address.
pub fn to_checksum_address(address: &str) -> Option<String> {
    if !is_address(address) {
        return None;
    }
    hex_body(address).map(|body| format!("0x{}", checksum_hex(body)))
}

/// Shortens an address to `0x1234...abcd` for compact display.
pub fn abbreviate(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

fn hex_body(address: &str) -> Option<&str> {
    let body = address.strip_prefix("0x").unwrap_or(address);
    (body.len() == HEX_DIGITS && body.bytes().all(|b| b.is_ascii_hexdigit())).then_some(body)
}

fn is_mixed_case(body: &str) -> bool {
    body.bytes().any(|b| b.is_ascii_lowercase()) && body.bytes().any(|b| b.is_ascii_uppercase())
}

// A letter is uppercased when the matching nibble of keccak256(lowercase hex) is >= 8.
fn checksum_hex(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
