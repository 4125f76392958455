use tokio_util::bytes::Bytes;
use utils::traits::dynamic_sized_packet::DynamicSizedPacket;

use crate::util::padding::rtp_round_to_word;

pub mod builder;
pub mod extension;
pub mod reader;
pub mod writer;


pub const RTP_VERSION: u8 = 2;
pub const MAX_CSRC_COUNT: usize = 15;
pub const EXTENSION_PROFILE_ONE_BYTE: u16 = 0xBEDE;
pub const EXTENSION_PROFILE_TWO_BYTE: u16 = 0x1000;

pub(crate) const MIN_HEADER_SIZE: usize = 4;
pub(crate) const FIXED_HEADER_SIZE: usize = 12;
pub(crate) const CSRC_SIZE: usize = 4;
pub(crate) const EXTENSION_HEADER_SIZE: usize = 4;

pub(crate) const VERSION_SHIFT: u8 = 6;
pub(crate) const VERSION_MASK: u8 = 0b11;
pub(crate) const PADDING_SHIFT: u8 = 5;
pub(crate) const EXTENSION_SHIFT: u8 = 4;
pub(crate) const CSRC_COUNT_MASK: u8 = 0b1111;
pub(crate) const MARKER_SHIFT: u8 = 7;
pub(crate) const PAYLOAD_TYPE_MASK: u8 = 0b0111_1111;

// @see: RFC 3550 5.1 RTP Fixed Header Fields
///
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |V=2|P|X|  CC   |M|      PT     |        sequence number        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            timestamp                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |            synchronization source (SSRC) identifier           |
/// +=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+
/// |             contributing source (CSRC) identifiers            |
/// |                               ....                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///
/// The csrc count is not stored, it is always `csrc_list.len()`.
/// `extension_profile` and `extensions` only matter when `extension` is set.
/// Encoding rejects a `version` above 3 or a `payload_type` above 127.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpHeader {
    pub version: u8,
    pub padding: bool,
    pub extension: bool,
    pub marker: bool,
    pub payload_type: u8,
    pub sequence_number: u16,
    pub timestamp: u32,
    pub ssrc: u32,
    pub csrc_list: Vec<u32>,
    pub extension_profile: ExtensionProfile,
    pub extensions: Vec<RtpHeaderExtension>,
}

impl Default for RtpHeader {
    fn default() -> Self {
        Self {
            version: RTP_VERSION,
            padding: false,
            extension: false,
            marker: false,
            payload_type: 0,
            sequence_number: 0,
            timestamp: 0,
            ssrc: 0,
            csrc_list: Vec::new(),
            extension_profile: ExtensionProfile::default(),
            extensions: Vec::new(),
        }
    }
}

impl RtpHeader {
    pub fn csrc_count(&self) -> u8 {
        self.csrc_list.len() as u8
    }

    /// First extension carrying `id`, in wire order.
    pub fn get_extension(&self, id: u8) -> Option<&RtpHeaderExtension> {
        self.extensions.iter().find(|extension| extension.id == id)
    }
}

/// Selects how the extension block body is laid out.
///
/// `Generic` carries every profile value other than the two RFC 8285 ones.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionProfile {
    /// RFC 8285 4.2, profile `0xBEDE`
    #[default]
    OneByte,
    /// RFC 8285 4.3, profile `0x1000`
    TwoByte,
    /// RFC 3550 5.3.1, a single opaque block
    Generic(u16),
}

impl From<u16> for ExtensionProfile {
    fn from(value: u16) -> Self {
        match value {
            EXTENSION_PROFILE_ONE_BYTE => Self::OneByte,
            EXTENSION_PROFILE_TWO_BYTE => Self::TwoByte,
            other => Self::Generic(other),
        }
    }
}

impl From<ExtensionProfile> for u16 {
    fn from(value: ExtensionProfile) -> Self {
        match value {
            ExtensionProfile::OneByte => EXTENSION_PROFILE_ONE_BYTE,
            ExtensionProfile::TwoByte => EXTENSION_PROFILE_TWO_BYTE,
            ExtensionProfile::Generic(profile) => profile,
        }
    }
}

/// One element of the extension block.
///
/// `id` is 4 bits wide for the one-byte profile, 8 bits for the two-byte
/// profile and always 0 for a generic profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpHeaderExtension {
    pub id: u8,
    pub payload: Bytes,
}

impl RtpHeaderExtension {
    pub fn new(id: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            id,
            payload: payload.into(),
        }
    }
}

impl DynamicSizedPacket for RtpHeader {
    fn get_packet_bytes_count(&self) -> usize {
        FIXED_HEADER_SIZE
            + self.csrc_list.len() * CSRC_SIZE
            + if self.extension {
                // the extension block always ends on a 32-bit boundary
                EXTENSION_HEADER_SIZE
                    + rtp_round_to_word(self.extension_profile.body_size(&self.extensions))
            } else {
                0
            }
    }
}
