//! RTP (RFC 3550) packet framing with RFC 8285 header extensions.

pub mod errors;
pub mod header;
pub mod packet;
mod util;
