//! Extension block body codec, one routine pair per profile.
//!
//! One-byte form (RFC 8285 4.2), a zero byte is padding, id 15 ends the scan:
//!
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       0xBE    |    0xDE       |           length=3            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |  ID   | L=0   |     data      |  ID   |  L=1  |   data...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!
//! Two-byte form (RFC 8285 4.3):
//!
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       0x10    |    0x00       |           length=3            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      ID       |     L=0       |     ID        |     L=1       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       data    |    0 (pad)    |       ID      |      L=4      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+

use tokio_util::bytes::Bytes;

use crate::errors::{RtpError, RtpResult};

use super::{ExtensionProfile, RtpHeaderExtension};

const PADDING_BYTE: u8 = 0x00;
const ONE_BYTE_RESERVED_ID: u8 = 0x0F;
const ONE_BYTE_MAX_PAYLOAD: usize = 16;
const TWO_BYTE_MAX_PAYLOAD: usize = u8::MAX as usize;

impl ExtensionProfile {
    /// Parses the body occupying `buffer[start..end]`.
    ///
    /// Payloads are slices of `buffer`, nothing is copied.
    pub(crate) fn read_extensions(
        &self,
        buffer: &Bytes,
        start: usize,
        end: usize,
    ) -> RtpResult<Vec<RtpHeaderExtension>> {
        match self {
            Self::OneByte => read_one_byte_extensions(buffer, start, end),
            Self::TwoByte => read_two_byte_extensions(buffer, start, end),
            Self::Generic(_) => Ok(vec![RtpHeaderExtension {
                id: 0,
                payload: buffer.slice(start..end),
            }]),
        }
    }

    /// Body size before word alignment.
    pub(crate) fn body_size(&self, extensions: &[RtpHeaderExtension]) -> usize {
        match self {
            Self::OneByte => extensions
                .iter()
                .map(|extension| 1 + extension.payload.len())
                .sum(),
            Self::TwoByte => extensions
                .iter()
                .map(|extension| 2 + extension.payload.len())
                .sum(),
            Self::Generic(_) => extensions
                .first()
                .map_or(0, |extension| extension.payload.len()),
        }
    }

    /// Writes the body without alignment padding and returns its size.
    ///
    /// `buffer` must hold at least `body_size(extensions)` bytes.
    pub(crate) fn write_extensions(
        &self,
        extensions: &[RtpHeaderExtension],
        buffer: &mut [u8],
    ) -> RtpResult<usize> {
        match self {
            Self::OneByte => write_one_byte_extensions(extensions, buffer),
            Self::TwoByte => write_two_byte_extensions(extensions, buffer),
            Self::Generic(_) => write_generic_extension(extensions, buffer),
        }
    }
}

fn read_one_byte_extensions(
    buffer: &Bytes,
    mut offset: usize,
    end: usize,
) -> RtpResult<Vec<RtpHeaderExtension>> {
    let mut extensions = Vec::new();
    while offset < end {
        if buffer[offset] == PADDING_BYTE {
            offset += 1;
            continue;
        }

        let id = buffer[offset] >> 4;
        let length = (buffer[offset] & 0x0F) as usize + 1;
        offset += 1;

        if id == ONE_BYTE_RESERVED_ID {
            tracing::trace!(
                "reserved one-byte extension id, {} trailing bytes left unparsed",
                end - offset
            );
            break;
        }

        if offset + length > end {
            return Err(RtpError::InsufficientExtension {
                required: offset + length,
                actual: end,
            });
        }
        extensions.push(RtpHeaderExtension {
            id,
            payload: buffer.slice(offset..offset + length),
        });
        offset += length;
    }
    Ok(extensions)
}

fn read_two_byte_extensions(
    buffer: &Bytes,
    mut offset: usize,
    end: usize,
) -> RtpResult<Vec<RtpHeaderExtension>> {
    let mut extensions = Vec::new();
    while offset < end {
        if buffer[offset] == PADDING_BYTE {
            offset += 1;
            continue;
        }

        if offset + 2 > end {
            return Err(RtpError::InsufficientExtension {
                required: offset + 2,
                actual: end,
            });
        }
        let id = buffer[offset];
        let length = buffer[offset + 1] as usize;
        offset += 2;

        if offset + length > end {
            return Err(RtpError::InsufficientExtension {
                required: offset + length,
                actual: end,
            });
        }
        extensions.push(RtpHeaderExtension {
            id,
            payload: buffer.slice(offset..offset + length),
        });
        offset += length;
    }
    Ok(extensions)
}

fn write_one_byte_extensions(
    extensions: &[RtpHeaderExtension],
    buffer: &mut [u8],
) -> RtpResult<usize> {
    let mut n = 0;
    for extension in extensions {
        let length = extension.payload.len();
        // id 0 would read back as padding
        if extension.id == 0 || extension.id >= ONE_BYTE_RESERVED_ID {
            return Err(RtpError::InvalidExtension(format!(
                "one-byte extension id must be within 1..=14, got {}",
                extension.id
            )));
        }
        if !(1..=ONE_BYTE_MAX_PAYLOAD).contains(&length) {
            return Err(RtpError::InvalidExtension(format!(
                "one-byte extension payload must be 1 to 16 bytes, got {}",
                length
            )));
        }

        buffer[n] = (extension.id << 4) | (length - 1) as u8;
        n += 1;
        buffer[n..n + length].copy_from_slice(&extension.payload);
        n += length;
    }
    Ok(n)
}

fn write_two_byte_extensions(
    extensions: &[RtpHeaderExtension],
    buffer: &mut [u8],
) -> RtpResult<usize> {
    let mut n = 0;
    for extension in extensions {
        let length = extension.payload.len();
        if extension.id == 0 {
            return Err(RtpError::InvalidExtension(
                "two-byte extension id 0 is reserved for padding".to_owned(),
            ));
        }
        if length > TWO_BYTE_MAX_PAYLOAD {
            return Err(RtpError::InvalidExtension(format!(
                "two-byte extension payload must be at most 255 bytes, got {}",
                length
            )));
        }

        buffer[n] = extension.id;
        buffer[n + 1] = length as u8;
        n += 2;
        buffer[n..n + length].copy_from_slice(&extension.payload);
        n += length;
    }
    Ok(n)
}

fn write_generic_extension(
    extensions: &[RtpHeaderExtension],
    buffer: &mut [u8],
) -> RtpResult<usize> {
    let extension = match extensions {
        [] => return Ok(0),
        [extension] => extension,
        _ => {
            return Err(RtpError::InvalidExtension(format!(
                "a generic profile carries a single extension block, got {}",
                extensions.len()
            )));
        }
    };

    let length = extension.payload.len();
    // the payload must be in 32-bit words
    if !length.is_multiple_of(4) {
        return Err(RtpError::UnalignedPayload(length));
    }
    buffer[..length].copy_from_slice(&extension.payload);
    Ok(length)
}
