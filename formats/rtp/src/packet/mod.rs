pub mod builder;
pub mod framed;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod test;

use std::fmt;

use builder::RtpPacketBuilder;
use tokio_util::bytes::Bytes;
use utils::{bytes::bytes_to_hex, traits::dynamic_sized_packet::DynamicSizedPacket};

use crate::header::RtpHeader;

/// A whole RTP packet.
///
/// `padding_size` counts every trailing padding byte including the final
/// length byte, 0 means the packet carries no padding. The header padding
/// bit is derived from it when writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RtpPacket {
    pub header: RtpHeader,
    pub payload: Bytes,
    pub padding_size: u8,
}

impl RtpPacket {
    pub fn builder() -> RtpPacketBuilder {
        Default::default()
    }

    pub fn new(header: RtpHeader, payload: Bytes) -> Self {
        let mut result = Self {
            header,
            payload,
            padding_size: 0,
        };
        result.header.padding = false;
        result
    }

    /// The header as it goes on the wire, padding bit in sync with `padding_size`.
    pub fn get_header(&self) -> RtpHeader {
        let mut header = self.header.clone();
        header.padding = self.padding_size != 0;
        header
    }
}

impl DynamicSizedPacket for RtpPacket {
    fn get_packet_bytes_count(&self) -> usize {
        self.header.get_packet_bytes_count() + self.payload.len() + self.padding_size as usize
    }
}

impl fmt::Display for RtpPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        writeln!(f, "RTP PACKET:")?;
        writeln!(f, "\tVersion: {}", header.version)?;
        writeln!(f, "\tMarker: {}", header.marker)?;
        writeln!(f, "\tPayload Type: {}", header.payload_type)?;
        writeln!(f, "\tSequence Number: {}", header.sequence_number)?;
        writeln!(f, "\tTimestamp: {}", header.timestamp)?;
        writeln!(f, "\tSSRC: {} ({:x})", header.ssrc, header.ssrc)?;
        for csrc in &header.csrc_list {
            writeln!(f, "\tCSRC: {} ({:x})", csrc, csrc)?;
        }
        if header.extension {
            writeln!(
                f,
                "\tExtension Profile: {:#06x}",
                u16::from(header.extension_profile)
            )?;
            for extension in &header.extensions {
                writeln!(
                    f,
                    "\tExtension {}: {}",
                    extension.id,
                    bytes_to_hex(&extension.payload)
                )?;
            }
        }
        writeln!(f, "\tPayload Length: {}", self.payload.len())?;
        if self.padding_size != 0 {
            writeln!(f, "\tPadding Size: {}", self.padding_size)?;
        }
        Ok(())
    }
}
