use tokio_util::bytes::Bytes;

/// Parses `Self` from the front of a shared buffer.
///
/// Returns the parsed value along with the number of bytes consumed.
/// Implementations are free to keep `Bytes::slice` views of `bytes`
/// instead of copying, the views keep the allocation alive on their own.
pub trait ReadFromBytes: Sized {
    type Error;
    fn read_from_bytes(bytes: &Bytes) -> Result<(Self, usize), Self::Error>;
}
