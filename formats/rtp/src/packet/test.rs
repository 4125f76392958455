use tokio_util::{
    bytes::{Bytes, BytesMut},
    codec::{Decoder, Encoder},
};
use utils::traits::{
    dynamic_sized_packet::DynamicSizedPacket, reader::ReadFromBytes, writer::WriteIntoSlice,
};

use crate::{
    errors::RtpError,
    header::{ExtensionProfile, RtpHeader},
};

use super::{RtpPacket, framed::RtpPacketFramed};

#[test]
fn test_minimal_packet() {
    let raw = [
        0x80, 0x00, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00,
    ];
    let bytes = Bytes::copy_from_slice(&raw);
    let (packet, n) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert_eq!(n, 12);
    assert!(packet.payload.is_empty());
    assert_eq!(packet.padding_size, 0);
    assert_eq!(packet.header.sequence_number, 1);
    assert_eq!(packet.marshal().unwrap().as_ref(), raw);
}

#[test]
fn test_payload() {
    let raw = [
        0x80, 0x60, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0xff, //
        0x01, 0x02, 0x03,
    ];
    let bytes = Bytes::copy_from_slice(&raw);
    let (packet, n) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert_eq!(n, raw.len());
    assert_eq!(packet.payload.as_ref(), [1, 2, 3]);
    // the payload is a view into the input buffer
    assert_eq!(packet.payload.as_ptr(), bytes[12..].as_ptr());
    assert_eq!(packet.get_packet_bytes_count(), raw.len());
    assert_eq!(packet.marshal().unwrap().as_ref(), raw);
}

#[test]
fn test_padding() {
    let raw = [
        0xa0, 0x60, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x01, 0x02, 0x03, 0x00, //
        0x00, 0x00, 0x04,
    ];
    let bytes = Bytes::copy_from_slice(&raw);
    let (packet, _) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert!(packet.header.padding);
    assert_eq!(packet.padding_size, 4);
    assert_eq!(packet.payload.as_ref(), [1, 2, 3]);

    let written = packet.marshal().unwrap();
    assert_eq!(written.as_ref(), raw);
    assert_eq!(written[written.len() - 4..], [0, 0, 0, 4]);
}

#[test]
fn test_padding_flag_follows_padding_size() {
    let packet = RtpPacket {
        header: RtpHeader {
            padding: true,
            ..Default::default()
        },
        payload: Bytes::from_static(&[0xaa]),
        padding_size: 0,
    };
    let written = packet.marshal().unwrap();
    assert_eq!(written[0], 0x80);
    assert_eq!(written.len(), 13);

    let packet = RtpPacket {
        padding_size: 2,
        ..packet
    };
    let written = packet.marshal().unwrap();
    assert_eq!(written[0], 0xa0);
    assert_eq!(written[12..], [0xaa, 0x00, 0x02]);
}

#[test]
fn test_malformed_padding() {
    let bytes = Bytes::from_static(&[
        0xa0, 0x60, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x01, 0x05,
    ]);
    assert!(matches!(
        RtpPacket::read_from_bytes(&bytes),
        Err(RtpError::MalformedPadding {
            padding_size: 5,
            available: 2
        })
    ));

    let bytes = Bytes::from_static(&[
        0xa0, 0x60, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x01, 0x00,
    ]);
    assert!(matches!(
        RtpPacket::read_from_bytes(&bytes),
        Err(RtpError::MalformedPadding {
            padding_size: 0,
            available: 2
        })
    ));
}

#[test]
fn test_padding_takes_whole_payload() {
    let bytes = Bytes::from_static(&[
        0xa0, 0x60, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x02,
    ]);
    let (packet, _) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert!(packet.payload.is_empty());
    assert_eq!(packet.padding_size, 2);
}

#[test]
fn test_packet_with_extension() {
    let raw = [
        0x90, 0x60, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0xbe, 0xde, 0x00, 0x01, //
        0x10, 0xaa, 0x00, 0x00, //
        0xca, 0xfe,
    ];
    let bytes = Bytes::copy_from_slice(&raw);
    let (packet, _) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert_eq!(packet.header.extension_profile, ExtensionProfile::OneByte);
    assert_eq!(packet.header.extensions.len(), 1);
    assert_eq!(packet.payload.as_ref(), [0xca, 0xfe]);
    assert_eq!(packet.marshal().unwrap().as_ref(), raw);
}

#[test]
fn test_buffer_too_small() {
    let packet = RtpPacket::builder().payload(&[1, 2, 3]).build();
    let mut buffer = [0; 14];
    assert!(matches!(
        packet.write_into(&mut buffer),
        Err(RtpError::BufferTooSmall {
            required: 15,
            actual: 14
        })
    ));

    let mut buffer = [0; 10];
    assert!(matches!(
        packet.write_into(&mut buffer),
        Err(RtpError::BufferTooSmall {
            required: 12,
            actual: 10
        })
    ));
}

#[test]
fn test_builder_align() {
    let packet = RtpPacket::builder()
        .with_header(|header| {
            Ok(header
                .payload_type(96)
                .sequence_number(7)
                .ssrc(42)
                .csrc(1)?)
        })
        .unwrap()
        .payload(&[1, 2, 3, 4, 5])
        .align_to(4)
        .build();
    // 16 bytes header, 5 bytes payload
    assert_eq!(packet.padding_size, 3);
    assert!(packet.header.padding);
    assert_eq!(packet.get_packet_bytes_count(), 24);

    let bytes = packet.marshal().unwrap();
    assert_eq!(bytes[bytes.len() - 1], 3);
    let (decoded, _) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert_eq!(decoded, packet);

    let aligned = RtpPacket::builder().payload(&[0; 4]).align_to(4).build();
    assert_eq!(aligned.padding_size, 0);
    assert!(!aligned.header.padding);
}

#[test]
fn test_framed() {
    let packet = RtpPacket::builder()
        .marker(true)
        .payload_type(0)
        .timestamp(160)
        .payload(&[0xd5; 160])
        .padding(4)
        .build();

    let mut codec = RtpPacketFramed;
    let mut buffer = BytesMut::new();
    assert!(codec.decode(&mut buffer).unwrap().is_none());

    codec.encode(packet.clone(), &mut buffer).unwrap();
    assert_eq!(buffer.len(), 12 + 160 + 4);

    let decoded = codec.decode(&mut buffer).unwrap();
    assert_eq!(decoded, Some(packet));
    assert!(buffer.is_empty());
}

#[test]
fn test_framed_encode_error_keeps_buffer() {
    let mut packet = RtpPacket::builder().payload(&[1]).build();
    packet.header.extension = true;
    packet.header.extension_profile = ExtensionProfile::Generic(1);
    packet.header.extensions = vec![crate::header::RtpHeaderExtension::new(0, vec![1])];

    let mut codec = RtpPacketFramed;
    let mut buffer = BytesMut::from(&b"keep"[..]);
    assert!(matches!(
        codec.encode(packet, &mut buffer),
        Err(RtpError::UnalignedPayload(1))
    ));
    assert_eq!(buffer.as_ref(), b"keep");
}

#[test]
fn test_display() {
    let packet = RtpPacket::builder()
        .sequence_number(1)
        .ssrc(255)
        .payload(&[1, 2])
        .build();
    let text = packet.to_string();
    assert!(text.starts_with("RTP PACKET:\n"));
    assert!(text.contains("\tSequence Number: 1\n"));
    assert!(text.contains("\tSSRC: 255 (ff)\n"));
    assert!(text.contains("\tPayload Length: 2\n"));
    assert!(!text.contains("Padding"));
}

#[test]
fn test_builder_with_prebuilt_header() {
    let header = crate::header::builder::RtpHeaderBuilder::new()
        .payload_type(111)
        .sequence_number(65535)
        .random_ssrc()
        .extension(3, vec![0x01, 0x02])
        .build();
    let packet = RtpPacket::builder()
        .header(header.clone())
        .payload(&[9, 9, 9])
        .build();
    assert_eq!(packet.header, header);

    let bytes = packet.marshal().unwrap();
    let (decoded, _) = RtpPacket::read_from_bytes(&bytes).unwrap();
    assert_eq!(decoded.header.ssrc, header.ssrc);
    assert_eq!(decoded.header.get_extension(3).unwrap().payload.as_ref(), [1, 2]);
    assert_eq!(decoded.payload.as_ref(), [9, 9, 9]);
}
