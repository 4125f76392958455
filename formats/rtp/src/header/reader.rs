use byteorder::{BigEndian, ByteOrder};
use tokio_util::bytes::Bytes;
use utils::{bits::bit_at, traits::reader::ReadFromBytes};

use crate::errors::{RtpError, RtpResult};

use super::{
    CSRC_COUNT_MASK, CSRC_SIZE, EXTENSION_HEADER_SIZE, EXTENSION_SHIFT, ExtensionProfile,
    FIXED_HEADER_SIZE, MARKER_SHIFT, MIN_HEADER_SIZE, PADDING_SHIFT, PAYLOAD_TYPE_MASK, RtpHeader,
    VERSION_MASK, VERSION_SHIFT,
};

impl ReadFromBytes for RtpHeader {
    type Error = RtpError;

    /// The consumed count covers the fixed header, the csrc list and the
    /// whole declared extension block, even when a reserved one-byte id
    /// stopped the extension scan early.
    fn read_from_bytes(bytes: &Bytes) -> RtpResult<(Self, usize)> {
        if bytes.len() < MIN_HEADER_SIZE {
            return Err(RtpError::InsufficientHeader {
                required: MIN_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let first_byte = bytes[0];
        let version = (first_byte >> VERSION_SHIFT) & VERSION_MASK;
        let padding = bit_at(first_byte, PADDING_SHIFT);
        let extension = bit_at(first_byte, EXTENSION_SHIFT);
        let csrc_count = (first_byte & CSRC_COUNT_MASK) as usize;

        let mut n = FIXED_HEADER_SIZE + csrc_count * CSRC_SIZE;
        if bytes.len() < n {
            return Err(RtpError::InsufficientHeader {
                required: n,
                actual: bytes.len(),
            });
        }

        let second_byte = bytes[1];
        let marker = bit_at(second_byte, MARKER_SHIFT);
        let payload_type = second_byte & PAYLOAD_TYPE_MASK;

        let sequence_number = BigEndian::read_u16(&bytes[2..4]);
        let timestamp = BigEndian::read_u32(&bytes[4..8]);
        let ssrc = BigEndian::read_u32(&bytes[8..12]);
        let csrc_list = bytes[FIXED_HEADER_SIZE..n]
            .chunks_exact(CSRC_SIZE)
            .map(BigEndian::read_u32)
            .collect();

        let mut extension_profile = ExtensionProfile::default();
        let mut extensions = Vec::new();
        if extension {
            let expected = n + EXTENSION_HEADER_SIZE;
            if bytes.len() < expected {
                return Err(RtpError::InsufficientExtension {
                    required: expected,
                    actual: bytes.len(),
                });
            }

            extension_profile = BigEndian::read_u16(&bytes[n..n + 2]).into();
            let extension_length = BigEndian::read_u16(&bytes[n + 2..n + 4]) as usize * 4;
            n += EXTENSION_HEADER_SIZE;

            let end = n + extension_length;
            if bytes.len() < end {
                return Err(RtpError::InsufficientExtension {
                    required: end,
                    actual: bytes.len(),
                });
            }

            extensions = extension_profile.read_extensions(bytes, n, end)?;
            n = end;
        }

        Ok((
            Self {
                version,
                padding,
                extension,
                marker,
                payload_type,
                sequence_number,
                timestamp,
                ssrc,
                csrc_list,
                extension_profile,
                extensions,
            },
            n,
        ))
    }
}
