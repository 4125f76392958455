use std::fmt::Write;

use tokio_util::bytes::Bytes;

use crate::traits::{dynamic_sized_packet::DynamicSizedPacket, writer::WriteIntoSlice};

/// Parses a hex string, ascii whitespace between digits is ignored.
pub fn hex_to_bytes(s: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if !digits.len().is_multiple_of(2) {
        return None;
    }
    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|sub| u8::from_str_radix(sub, 16).ok())
        })
        .collect()
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing into a String never fails
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Encodes `packet` into a freshly allocated buffer of exactly its size.
pub fn marshal_to_bytes<E, T>(packet: &T) -> Result<Bytes, E>
where
    T: WriteIntoSlice<Error = E> + DynamicSizedPacket,
{
    let mut bytes = vec![0; packet.get_packet_bytes_count()];
    let written = packet.write_into(&mut bytes)?;
    bytes.truncate(written);
    Ok(Bytes::from(bytes))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex_to_bytes("80 00 0001"), Some(vec![0x80, 0x00, 0x00, 0x01]));
        assert_eq!(hex_to_bytes("abc"), None);
        assert_eq!(hex_to_bytes("zz"), None);
        assert_eq!(bytes_to_hex(&[0xbe, 0xde, 0x00]), "bede00");
    }
}
