//! Short code generation.
//!
//! Codes are fixed-length strings drawn uniformly from the 62 ASCII
//! alphanumeric characters, giving a space of 62^6 (about 5.7e10) codes.

use rand::Rng;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Characters a short code is drawn from.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of candidate short codes.
///
/// Generators do not talk to the store; uniqueness is checked by the
/// allocator. Tests substitute deterministic generators to force collisions.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CHARSET.contains(&b))
}
