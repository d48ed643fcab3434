//! Deterministic string hashing.
//!
//! Implements cyrb53, a fast two-lane non-cryptographic hash with good
//! collision resistance for short strings. The output is stable across
//! platforms because every operation is 32-bit wrapping arithmetic; the
//! combined result always fits in 53 bits.

/// Hashes `text` into an integer in `[0, 2^53)`.
///
/// Pure function of `(text, seed)`: the same inputs always produce the same
/// value, on every platform. Iteration is by UTF-16 code unit, so strings
/// outside the ASCII range hash identically to their code-unit sequence.
///
/// ## Examples
///
/// ```
/// # use seedpix::hash::cyrb53;
/// assert_eq!(cyrb53("", 0), 3338908027751811);
/// assert_eq!(cyrb53("alice", 0), cyrb53("alice", 0));
/// assert_ne!(cyrb53("alice", 0), cyrb53("alice", 1));
/// ```
#[must_use]
pub fn cyrb53(text: &str, seed: u32) -> u64 {
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;

    for unit in text.encode_utf16() {
        let ch = u32::from(unit);
        h1 = (h1 ^ ch).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ ch).wrapping_mul(1_597_334_677);
    }

    // Avalanche both lanes, cross-mixing so every input bit reaches every
    // output bit.
    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    // 21 high bits from lane two, 32 low bits from lane one: 53 bits total.
    (u64::from(h2 & 0x1f_ffff) << 32) | u64::from(h1)
}
