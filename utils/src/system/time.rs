use std::time::{self, SystemTimeError, UNIX_EPOCH};

/// Wall clock time expressed in ticks of a media clock running at
/// `clock_rate` Hz, truncated to the 32-bit RTP timestamp space.
pub fn get_media_timestamp(clock_rate: u32) -> Result<u32, SystemTimeError> {
    let elapsed = time::SystemTime::now().duration_since(UNIX_EPOCH)?;
    let ticks = elapsed.as_micros() * clock_rate as u128 / 1_000_000;
    Ok(ticks as u32)
}
