//! Convert a frame number or time code at a given framerate.

use shotcalc_core::FrameAddress;

/// Digits only means a frame number; anything else is treated as a time code.
pub fn parse_address(s: &str) -> FrameAddress {
    let s = s.trim();
    match s.parse::<u64>() {
        Ok(n) if s.bytes().all(|b| b.is_ascii_digit()) => FrameAddress::FrameNumber(n),
        _ => FrameAddress::Code(s.to_string()),
    }
}

pub fn run(framerate: u32, address: &str) -> anyhow::Result<()> {
    let resolved = parse_address(address).resolve(framerate)?;
    println!("frame:    {}", resolved.to_frame_number());
    println!("timecode: {}", resolved.display_code());
    Ok(())
}
