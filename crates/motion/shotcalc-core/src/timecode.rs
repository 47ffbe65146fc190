//! Time addressing for keyframes.
//!
//! A [`TimeAddress`] is a frame position at a given framerate. It can be built
//! from an `HH:MM:SS:FF` time code or from an absolute frame count, and always
//! reduces to the absolute count. Positions at or past 24 hours wrap around to
//! the start of the day, so the time code and the frame count never disagree.
//!
//! Comparison is by absolute frame only. Addresses built at different
//! framerates are compared as raw frame counts; normalizing them to a common
//! rate is up to the caller.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;
const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
const SECONDS_PER_DAY: u64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

/// Number of frames in one (wrapping) day at `framerate`.
#[inline]
pub fn frames_per_day(framerate: u32) -> u64 {
    u64::from(framerate) * SECONDS_PER_DAY
}

fn check_framerate(framerate: u32) -> Result<()> {
    if framerate == 0 {
        return Err(MotionError::configuration("framerate must be > 0"));
    }
    Ok(())
}

/// The four fields of an `HH:MM:SS:FF` time code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeCodeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub frames: u64,
}

/// A frame position at a fixed framerate.
#[derive(Clone, Copy, Debug)]
pub struct TimeAddress {
    framerate: u32,
    absolute_frame: u64,
}

impl TimeAddress {
    /// Parse an `HH:MM:SS:FF` time code.
    ///
    /// Every field is exactly two ASCII digits. Minutes and seconds above 59
    /// carry into the next field and the result wraps modulo one day.
    ///
    /// Fails with [`MotionError::Format`] when the code does not have exactly
    /// four two-digit fields or when `FF >= framerate`, and with
    /// [`MotionError::Configuration`] when `framerate` is zero.
    pub fn from_code(framerate: u32, code: &str) -> Result<Self> {
        check_framerate(framerate)?;

        let parts: Vec<&str> = code.split(':').collect();
        if parts.len() != 4 {
            return Err(MotionError::format(
                code,
                format!(
                    "expected 4 colon-separated components, found {}",
                    parts.len()
                ),
            ));
        }

        let mut fields = [0u64; 4];
        for (slot, part) in fields.iter_mut().zip(parts.iter()) {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MotionError::format(
                    code,
                    format!("component '{part}' is not a two-digit number"),
                ));
            }
            *slot = part.bytes().fold(0, |n, b| n * 10 + u64::from(b - b'0'));
        }

        let [hours, minutes, seconds, frames] = fields;
        let fr = u64::from(framerate);
        if frames >= fr {
            return Err(MotionError::format(
                code,
                format!("frame field {frames} must be below the framerate {framerate}"),
            ));
        }

        let seconds_in = hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds;
        let total = seconds_in * fr + frames;

        Ok(Self {
            framerate,
            absolute_frame: total % frames_per_day(framerate),
        })
    }

    /// Build an address from an absolute frame count. Counts of a day or more
    /// wrap modulo 24 hours.
    pub fn from_frame_number(framerate: u32, frame: u64) -> Result<Self> {
        check_framerate(framerate)?;
        Ok(Self {
            framerate,
            absolute_frame: frame % frames_per_day(framerate),
        })
    }

    #[inline]
    pub fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Absolute frame count; the canonical value of the address.
    #[inline]
    pub fn to_frame_number(&self) -> u64 {
        self.absolute_frame
    }

    /// Split into time code fields by successive division.
    pub fn parts(&self) -> TimeCodeParts {
        let fr = u64::from(self.framerate);
        let frames = self.absolute_frame % fr;
        let total_seconds = self.absolute_frame / fr;
        let seconds = total_seconds % SECONDS_PER_MINUTE;
        let total_minutes = total_seconds / SECONDS_PER_MINUTE;
        let minutes = total_minutes % MINUTES_PER_HOUR;
        let hours = (total_minutes / MINUTES_PER_HOUR) % HOURS_PER_DAY;
        TimeCodeParts {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Canonical `HH:MM:SS:FF` rendering, zero-padded to two digits.
    pub fn display_code(&self) -> String {
        let p = self.parts();
        format!(
            "{:02}:{:02}:{:02}:{:02}",
            p.hours, p.minutes, p.seconds, p.frames
        )
    }

    /// Order two addresses by absolute frame.
    #[inline]
    pub fn compare(&self, other: &TimeAddress) -> Ordering {
        self.absolute_frame.cmp(&other.absolute_frame)
    }

    /// Absolute frame shifted by `delta`. Returns a plain frame count, not a
    /// new address; build one with [`TimeAddress::from_frame_number`] if needed.
    #[inline]
    pub fn offset(&self, delta: i64) -> i64 {
        // absolute_frame < framerate * 86400, well inside i64.
        (self.absolute_frame as i64).saturating_add(delta)
    }
}

impl PartialEq for TimeAddress {
    fn eq(&self, other: &Self) -> bool {
        self.absolute_frame == other.absolute_frame
    }
}

impl Eq for TimeAddress {}

impl PartialOrd for TimeAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for TimeAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for TimeAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute_frame.hash(state);
    }
}

impl fmt::Display for TimeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_code())
    }
}

/// Caller-supplied keyframe position, either a time code or a frame count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameAddress {
    FrameNumber(u64),
    Code(String),
}

impl FrameAddress {
    /// Resolve to a [`TimeAddress`] at `framerate`.
    pub fn resolve(&self, framerate: u32) -> Result<TimeAddress> {
        match self {
            FrameAddress::Code(code) => TimeAddress::from_code(framerate, code),
            FrameAddress::FrameNumber(n) => TimeAddress::from_frame_number(framerate, *n),
        }
    }
}

impl From<&str> for FrameAddress {
    fn from(code: &str) -> Self {
        FrameAddress::Code(code.to_string())
    }
}

impl From<String> for FrameAddress {
    fn from(code: String) -> Self {
        FrameAddress::Code(code)
    }
}

impl From<u64> for FrameAddress {
    fn from(n: u64) -> Self {
        FrameAddress::FrameNumber(n)
    }
}

impl From<u32> for FrameAddress {
    fn from(n: u32) -> Self {
        FrameAddress::FrameNumber(u64::from(n))
    }
}

impl From<TimeAddress> for FrameAddress {
    fn from(addr: TimeAddress) -> Self {
        FrameAddress::FrameNumber(addr.to_frame_number())
    }
}

impl fmt::Display for FrameAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameAddress::Code(code) => f.write_str(code),
            FrameAddress::FrameNumber(n) => write!(f, "{n}"),
        }
    }
}
