use tokio_util::{
    bytes::BytesMut,
    codec::{Decoder, Encoder},
};
use utils::traits::{
    dynamic_sized_packet::DynamicSizedPacket, reader::ReadFromBytes, writer::WriteIntoSlice,
};

use crate::errors::RtpError;

use super::RtpPacket;

/// Datagram codec, every frame handed over holds exactly one packet.
///
/// Meant for `UdpFramed`, which feeds the decoder one datagram at a time.
#[derive(Debug, Default)]
pub struct RtpPacketFramed;

impl Encoder<RtpPacket> for RtpPacketFramed {
    type Error = RtpError;
    fn encode(&mut self, item: RtpPacket, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let start = dst.len();
        dst.resize(start + item.get_packet_bytes_count(), 0);
        match item.write_into(&mut dst[start..]) {
            Ok(written) => {
                dst.truncate(start + written);
                Ok(())
            }
            Err(err) => {
                dst.truncate(start);
                Err(err)
            }
        }
    }
}

impl Decoder for RtpPacketFramed {
    type Error = RtpError;
    type Item = RtpPacket;
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        let datagram = src.split().freeze();
        let (packet, _) = RtpPacket::read_from_bytes(&datagram)?;
        Ok(Some(packet))
    }
}
