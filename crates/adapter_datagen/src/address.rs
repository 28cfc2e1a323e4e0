//! Random hex address fabrication.

use rand::Rng;

const HEX_CHARS: &[u8] = b"abcdef0123456789";

/// Fabricate an Ethereum-style address: `0x` plus 40 lowercase hex chars.
pub fn random_address(rng: &mut impl Rng) -> String {
    let mut address = String::with_capacity(42);
    address.push_str("0x");
    for _ in 0..40 {
        let idx = rng.gen_range(0..HEX_CHARS.len());
        address.push(HEX_CHARS[idx] as char);
    }
    address
}
