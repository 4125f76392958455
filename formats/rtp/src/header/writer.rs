use byteorder::{BigEndian, ByteOrder};
use tokio_util::bytes::Bytes;
use utils::{
    bits::bit_to,
    bytes::marshal_to_bytes,
    traits::{dynamic_sized_packet::DynamicSizedPacket, writer::WriteIntoSlice},
};

use crate::{
    errors::{RtpError, RtpResult},
    util::padding::rtp_round_to_word,
};

use super::{
    CSRC_SIZE, EXTENSION_HEADER_SIZE, EXTENSION_PROFILE_ONE_BYTE, EXTENSION_PROFILE_TWO_BYTE,
    EXTENSION_SHIFT, ExtensionProfile, FIXED_HEADER_SIZE, MARKER_SHIFT, MAX_CSRC_COUNT,
    PADDING_SHIFT, PAYLOAD_TYPE_MASK, RtpHeader, VERSION_MASK, VERSION_SHIFT,
};

impl WriteIntoSlice for RtpHeader {
    type Error = RtpError;
    fn write_into(&self, buffer: &mut [u8]) -> RtpResult<usize> {
        if self.csrc_list.len() > MAX_CSRC_COUNT {
            return Err(RtpError::TooManyCsrc(self.csrc_list.len()));
        }

        if self.version > VERSION_MASK {
            return Err(RtpError::InvalidHeaderField(format!(
                "version must fit in 2 bits, got {}",
                self.version
            )));
        }
        if self.payload_type > PAYLOAD_TYPE_MASK {
            return Err(RtpError::InvalidHeaderField(format!(
                "payload type must fit in 7 bits, got {}",
                self.payload_type
            )));
        }
        if self.extension
            && let ExtensionProfile::Generic(
                profile @ (EXTENSION_PROFILE_ONE_BYTE | EXTENSION_PROFILE_TWO_BYTE),
            ) = self.extension_profile
        {
            // would read back as an RFC 8285 body
            return Err(RtpError::InvalidExtension(format!(
                "generic profile cannot use the RFC 8285 value {:#06x}",
                profile
            )));
        }

        let size = self.get_packet_bytes_count();
        if !self.fits_in(buffer.len()) {
            return Err(RtpError::BufferTooSmall {
                required: size,
                actual: buffer.len(),
            });
        }

        buffer[0] = (self.version << VERSION_SHIFT)
            | bit_to(self.padding, PADDING_SHIFT)
            | bit_to(self.extension, EXTENSION_SHIFT)
            | self.csrc_count();
        buffer[1] = self.payload_type | bit_to(self.marker, MARKER_SHIFT);

        BigEndian::write_u16(&mut buffer[2..4], self.sequence_number);
        BigEndian::write_u32(&mut buffer[4..8], self.timestamp);
        BigEndian::write_u32(&mut buffer[8..12], self.ssrc);

        let mut n = FIXED_HEADER_SIZE;
        for csrc in &self.csrc_list {
            BigEndian::write_u32(&mut buffer[n..n + CSRC_SIZE], *csrc);
            n += CSRC_SIZE;
        }

        if self.extension {
            let extension_header_pos = n;
            BigEndian::write_u16(&mut buffer[n..n + 2], self.extension_profile.into());
            n += EXTENSION_HEADER_SIZE;

            let body_size = self
                .extension_profile
                .write_extensions(&self.extensions, &mut buffer[n..size])?;
            let rounded_body_size = rtp_round_to_word(body_size);
            let words = rounded_body_size / 4;
            if words > u16::MAX as usize {
                return Err(RtpError::InvalidExtension(format!(
                    "extension block of {} words does not fit the length field",
                    words
                )));
            }
            BigEndian::write_u16(
                &mut buffer[extension_header_pos + 2..extension_header_pos + 4],
                words as u16,
            );

            buffer[n + body_size..n + rounded_body_size].fill(0);
            n += rounded_body_size;
        }

        Ok(n)
    }
}

impl RtpHeader {
    pub fn marshal(&self) -> RtpResult<Bytes> {
        marshal_to_bytes(self)
    }
}
