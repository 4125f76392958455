use tokio_util::bytes::Bytes;
use utils::traits::reader::ReadFromBytes;

use crate::{
    errors::{RtpError, RtpResult},
    header::RtpHeader,
};

use super::RtpPacket;

impl ReadFromBytes for RtpPacket {
    type Error = RtpError;

    /// The whole buffer is one packet, the consumed count is always `bytes.len()`.
    ///
    /// With the P bit set the last byte counts the padding trailer including
    /// itself, so a trailing 0 is rejected as [`RtpError::MalformedPadding`]
    /// rather than read as "no padding", as is a count larger than what
    /// follows the header.
    fn read_from_bytes(bytes: &Bytes) -> RtpResult<(Self, usize)> {
        let (header, n) = RtpHeader::read_from_bytes(bytes)?;

        let mut end = bytes.len();
        let mut padding_size = 0;
        if header.padding {
            // a header was read, so the buffer is not empty
            padding_size = bytes[end - 1];
            let available = end - n;
            // the trailer length includes the length byte, 0 is never valid
            if padding_size == 0 || padding_size as usize > available {
                tracing::debug!(
                    "bad rtp padding size {}, {} bytes after the header",
                    padding_size,
                    available
                );
                return Err(RtpError::MalformedPadding {
                    padding_size: padding_size as usize,
                    available,
                });
            }
            end -= padding_size as usize;
        }

        Ok((
            Self {
                header,
                payload: bytes.slice(n..end),
                padding_size,
            },
            bytes.len(),
        ))
    }
}
