//! Room code generation.
//!
//! Codes are 6 uppercase alphanumeric characters. Generation is retried
//! against the store's collision check until an unused code comes up.

use rand::Rng;

use crate::domain::rules::ROOM_CODE_LEN;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
