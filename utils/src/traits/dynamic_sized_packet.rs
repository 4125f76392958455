/// A packet whose encoded length depends on its content.
pub trait DynamicSizedPacket {
    /// Exact number of bytes the packet occupies once written.
    fn get_packet_bytes_count(&self) -> usize;

    fn fits_in(&self, buffer_len: usize) -> bool {
        self.get_packet_bytes_count() <= buffer_len
    }
}
