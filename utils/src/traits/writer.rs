/// Serializes `Self` into a caller supplied slice.
///
/// Returns the number of bytes written. Implementations must fail
/// without writing past `buffer.len()` when the slice is too short.
pub trait WriteIntoSlice {
    type Error;
    fn write_into(&self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}
