//! Random initial values recommended by RFC 3550 section 5.1 and 8.

/// A fresh synchronization source identifier.
pub fn random_ssrc() -> u32 {
    rand::random::<u32>()
}

pub fn random_sequence_number() -> u16 {
    rand::random::<u16>()
}
