//! Short code generation.

use rand::Rng;

/// Alphabet for short codes: lowercase, uppercase, digits.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed length of generated short codes.
///
/// 62^6 ≈ 56.8 billion possible codes; blind collisions are rare but handled
/// by the orchestration layer's bounded retry.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Each character is drawn independently and uniformly from the 62-symbol
/// alphabet using the calling thread's generator, so concurrent requests
/// never contend on a shared random source.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
