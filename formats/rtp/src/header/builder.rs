use tokio_util::bytes::Bytes;
use utils::{
    random::{random_sequence_number, random_ssrc},
    system::time::get_media_timestamp,
};

use crate::errors::{RtpError, RtpResult};

use super::{ExtensionProfile, MAX_CSRC_COUNT, RtpHeader, RtpHeaderExtension};

#[derive(Debug, Default)]
pub struct RtpHeaderBuilder {
    header: RtpHeader,
}

impl RtpHeaderBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn version(mut self, version: u8) -> Self {
        self.header.version = version;
        self
    }

    pub fn csrc(mut self, csrc: u32) -> RtpResult<Self> {
        if self.header.csrc_list.len() >= MAX_CSRC_COUNT {
            return Err(RtpError::TooManyCsrc(self.header.csrc_list.len() + 1));
        }
        self.header.csrc_list.push(csrc);
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

    pub fn random_sequence_number(self) -> Self {
        self.sequence_number(random_sequence_number())
    }

    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.header.timestamp = timestamp;
        self
    }

    /// Wall clock now, in ticks of a `clock_rate` Hz media clock.
    pub fn timestamp_from_clock(self, clock_rate: u32) -> Self {
        self.timestamp(get_media_timestamp(clock_rate).unwrap_or(0))
    }

    pub fn ssrc(mut self, ssrc: u32) -> Self {
        self.header.ssrc = ssrc;
        self
    }

    pub fn random_ssrc(self) -> Self {
        self.ssrc(random_ssrc())
    }

    pub fn extension_profile(mut self, profile: ExtensionProfile) -> Self {
        self.header.extension = true;
        self.header.extension_profile = profile;
        self
    }

    /// Appends an extension and turns the extension bit on.
    pub fn extension(mut self, id: u8, payload: impl Into<Bytes>) -> Self {
        self.header.extension = true;
        self.header
            .extensions
            .push(RtpHeaderExtension::new(id, payload));
        self
    }

    pub fn build(self) -> RtpHeader {
        self.header
    }
}
