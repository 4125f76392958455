/// Bytes needed to grow `size` up to the next multiple of `align`.
pub(crate) fn rtp_get_padding_size(size: usize, align: usize) -> usize {
    if align == 0 {
        return 0;
    }
    (align - (size % align)) % align
}

/// Rounds `size` up to a 32-bit word boundary.
pub(crate) fn rtp_round_to_word(size: usize) -> usize {
    size + rtp_get_padding_size(size, 4)
}

/// Fills `buffer` as an RTP padding trailer, the last byte holds the trailer length.
pub(crate) fn rtp_write_padding(buffer: &mut [u8]) {
    let len = buffer.len();
    buffer.fill(0);
    if let Some(last) = buffer.last_mut() {
        *last = len as u8;
    }
}
