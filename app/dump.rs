use std::{fs, path::Path};

use rtp_formats::packet::RtpPacket;
use tokio_util::bytes::Bytes;
use utils::{
    bytes::{bytes_to_hex, hex_to_bytes},
    traits::reader::ReadFromBytes,
};

use crate::{
    config::DumpOptions,
    errors::{AppError, AppResult},
};

pub(crate) fn load_hex(text: &str) -> AppResult<Bytes> {
    hex_to_bytes(text)
        .map(Bytes::from)
        .ok_or_else(|| AppError::InvalidHex(text.trim().to_owned()))
}

/// `.hex` and `.txt` files hold hex text, anything else raw packet bytes.
pub(crate) fn load_file(path: &Path) -> AppResult<Bytes> {
    let content = fs::read(path).map_err(|err| AppError::ReadInput(path.to_owned(), err))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("hex") | Some("txt") => load_hex(&String::from_utf8_lossy(&content)),
        _ => Ok(Bytes::from(content)),
    }
}

pub(crate) fn dump_packet(label: &str, bytes: &Bytes, options: &DumpOptions) -> AppResult<()> {
    let (packet, _) = RtpPacket::read_from_bytes(bytes)?;
    tracing::debug!("{}: decoded {} bytes", label, bytes.len());

    println!("{}:", label);
    print!("{}", packet);
    if options.show_payload {
        let shown = match options.max_payload_bytes {
            0 => packet.payload.len(),
            max => packet.payload.len().min(max),
        };
        println!(
            "\tPayload: {}{}",
            bytes_to_hex(&packet.payload[..shown]),
            if shown < packet.payload.len() { "..." } else { "" }
        );
    }

    if options.verify_round_trip {
        let encoded = packet.marshal()?;
        if encoded == *bytes {
            tracing::info!("{}: round trip ok", label);
        } else {
            // expected when a reserved extension id cut the extension list short
            tracing::warn!(
                "{}: re-encoded {} bytes differ from the {} input bytes",
                label,
                encoded.len(),
                bytes.len()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use rtp_formats::errors::RtpError;

    use super::*;

    fn options() -> DumpOptions {
        DumpOptions {
            verify_round_trip: true,
            show_payload: true,
            max_payload_bytes: 2,
        }
    }

    #[test]
    fn test_load_hex() {
        let bytes = load_hex("80 60 00 01\n00000000 00000000").unwrap();
        assert_eq!(bytes.len(), 12);
        assert!(matches!(load_hex("8"), Err(AppError::InvalidHex(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_file(Path::new("/nonexistent/packet.bin")),
            Err(AppError::ReadInput(_, _))
        ));
    }

    #[test]
    fn test_dump_packet() {
        let bytes = load_hex("80600001 00000000 00000001 010203").unwrap();
        assert!(dump_packet("hex#0", &bytes, &options()).is_ok());

        let bytes = load_hex("80600001 000000").unwrap();
        assert!(matches!(
            dump_packet("hex#1", &bytes, &options()),
            Err(AppError::RtpError(RtpError::InsufficientHeader { .. }))
        ));
    }
}
