use tokio_util::bytes::Bytes;
use utils::{
    bytes::marshal_to_bytes,
    traits::{dynamic_sized_packet::DynamicSizedPacket, writer::WriteIntoSlice},
};

use crate::{
    errors::{RtpError, RtpResult},
    util::padding::rtp_write_padding,
};

use super::RtpPacket;

impl WriteIntoSlice for RtpPacket {
    type Error = RtpError;
    fn write_into(&self, buffer: &mut [u8]) -> RtpResult<usize> {
        let n = self.get_header().write_into(buffer)?;

        let size = self.get_packet_bytes_count();
        if !self.fits_in(buffer.len()) {
            return Err(RtpError::BufferTooSmall {
                required: size,
                actual: buffer.len(),
            });
        }

        let payload_end = n + self.payload.len();
        buffer[n..payload_end].copy_from_slice(&self.payload);
        rtp_write_padding(&mut buffer[payload_end..size]);
        Ok(size)
    }
}

impl RtpPacket {
    pub fn marshal(&self) -> RtpResult<Bytes> {
        marshal_to_bytes(self)
    }
}
