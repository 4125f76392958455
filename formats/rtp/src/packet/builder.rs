use tokio_util::bytes::BytesMut;
use utils::traits::dynamic_sized_packet::DynamicSizedPacket;

use crate::{
    errors::RtpResult,
    header::{RtpHeader, builder::RtpHeaderBuilder},
    util::padding::rtp_get_padding_size,
};

use super::RtpPacket;

#[derive(Debug, Default, Clone, Copy)]
enum Padding {
    #[default]
    None,
    Exact(u8),
    AlignTo(u8),
}

#[derive(Debug, Default)]
pub struct RtpPacketBuilder {
    header: RtpHeader,
    payload: BytesMut,
    padding: Padding,
}

impl RtpPacketBuilder {
    pub fn header(mut self, header: RtpHeader) -> Self {
        self.header = header;
        self
    }

    /// Edits the header in place through a header builder.
    pub fn with_header<F>(mut self, f: F) -> RtpResult<Self>
    where
        F: FnOnce(RtpHeaderBuilder) -> RtpResult<RtpHeaderBuilder>,
    {
        self.header = f(RtpHeaderBuilder::new())?.build();
        Ok(self)
    }

    pub fn marker(mut self, marker: bool) -> Self {
        self.header.marker = marker;
        self
    }

    pub fn payload_type(mut self, payload_type: u8) -> Self {
        self.header.payload_type = payload_type;
        self
    }

    pub fn sequence_number(mut self, number: u16) -> Self {
        self.header.sequence_number = number;
        self
    }

    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.header.timestamp = timestamp;
        self
    }

    pub fn ssrc(mut self, ssrc: u32) -> Self {
        self.header.ssrc = ssrc;
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.payload.extend_from_slice(payload);
        self
    }

    /// Appends `size` padding bytes, 0 removes padding.
    pub fn padding(mut self, size: u8) -> Self {
        self.padding = Padding::Exact(size);
        self
    }

    /// Pads the packet up to a multiple of `align` bytes, e.g. for block ciphers.
    pub fn align_to(mut self, align: u8) -> Self {
        self.padding = Padding::AlignTo(align);
        self
    }

    pub fn build(self) -> RtpPacket {
        let mut packet = RtpPacket::new(self.header, self.payload.freeze());
        packet.padding_size = match self.padding {
            Padding::None => 0,
            Padding::Exact(size) => size,
            Padding::AlignTo(align) => {
                rtp_get_padding_size(packet.get_packet_bytes_count(), align as usize) as u8
            }
        };
        packet.header.padding = packet.padding_size != 0;
        packet
    }
}
