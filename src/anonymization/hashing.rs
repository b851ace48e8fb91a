//! Hashing helpers for replacement bookkeeping
//!
//! The replacement map is keyed by a case-sensitive digest of the matched
//! substring, and exhausted uniqueness loops fall back to deterministic
//! hash-derived suffixes. Both come from here.

use sha2::{Digest, Sha256};

const VOWELS: &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Hex-encoded SHA-256 digest of the input (64 characters)
///
/// Case-sensitive by construction: `"Max"` and `"max"` produce different
/// digests, which is exactly what the replacement map needs.
pub fn hex_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Pronounceable hash of the input: alternating vowels and consonants
///
/// The first character is always a vowel; subsequent characters alternate
/// consonant/vowel, each selected by a digest byte. Used to extend an
/// alphabetic placeholder without breaking its word-like appearance.
pub fn readable_hash(input: &str, length: usize) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut readable = String::with_capacity(length);

    for i in 0..length {
        let byte = digest[i % digest.len()] as usize;
        if i % 2 == 0 {
            readable.push(VOWELS[byte % VOWELS.len()] as char);
        } else {
            readable.push(CONSONANTS[byte % CONSONANTS.len()] as char);
        }
    }

    readable
}

/// Whether the input consists solely of letters (Unicode-aware)
pub fn is_letters_only(input: &str) -> bool {
    !input.is_empty() && input.chars().all(char::is_alphabetic)
}
