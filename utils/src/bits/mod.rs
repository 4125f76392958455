/// Reads the single bit of `value` at `shift`.
#[inline]
pub const fn bit_at(value: u8, shift: u8) -> bool {
    ((value >> shift) & 0b1) == 0b1
}

/// Places `flag` at bit position `shift`.
#[inline]
pub const fn bit_to(flag: bool, shift: u8) -> u8 {
    match flag {
        true => 0b1 << shift,
        false => 0b0,
    }
}
