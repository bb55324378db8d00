//! mode tables and the boot time mode decision

use crate::config::{
    BEACON_OFF_MS, BEACON_ON_MS, DUTY_LOW, DUTY_MAX, DUTY_MED, DUTY_MOON, STROBE_OFF_MS,
    STROBE_ON_MS, STROBE_PRESS_THRESHOLD,
};
use crate::drivers::{RampKind, Strobe};
use crate::session::SessionRecord;
use core::convert::TryFrom;
use log::info;

//==========================================================

/// what a mode does once selected
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Mode {
    /// fixed pwm level, watched by the battery monitor
    Steady(u8),
    /// blink out the battery level
    BatteryCheck,
    /// toggle the strobe pin
    Strobe(Strobe),
    /// sweep through the ramp table
    Ramp(RampKind),
}

#[cfg(not(feature = "rising-ramp"))]
const RAMP_KIND: RampKind = RampKind::RiseFall;
#[cfg(feature = "rising-ramp")]
const RAMP_KIND: RampKind = RampKind::Rising;

/// number of regular modes
pub const N_MODES: usize = 7;

/// number of strobe modes
pub const N_STROBE_MODES: usize = 1;

/// regular modes, in short press order
pub static REGULAR_MODES: [Mode; N_MODES] = [
    Mode::Steady(DUTY_MOON),
    Mode::Steady(DUTY_LOW),
    Mode::Steady(DUTY_MED),
    Mode::Steady(DUTY_MAX),
    Mode::BatteryCheck,
    Mode::Strobe(Strobe::new(BEACON_ON_MS, BEACON_OFF_MS)),
    Mode::Ramp(RAMP_KIND),
];

/// hidden modes, reached with rapid short presses
pub static STROBE_MODES: [Mode; N_STROBE_MODES] =
    [Mode::Strobe(Strobe::new(STROBE_ON_MS, STROBE_OFF_MS))];

//==========================================================

/// the regular mode names
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegularMode {
    Moon,
    Low,
    Medium,
    Max,
    BatteryCheck,
    Beacon,
    Ramp,
}

impl From<RegularMode> for u8 {
    fn from(original: RegularMode) -> u8 {
        match original {
            RegularMode::Moon => 0,
            RegularMode::Low => 1,
            RegularMode::Medium => 2,
            RegularMode::Max => 3,
            RegularMode::BatteryCheck => 4,
            RegularMode::Beacon => 5,
            RegularMode::Ramp => 6,
        }
    }
}

/// an index past the end of a mode table
#[derive(Debug, PartialEq)]
pub struct ModeIndexError {
    pub index: u8,
}

/// convert from u8
impl TryFrom<u8> for RegularMode {
    type Error = ModeIndexError;

    fn try_from(original: u8) -> Result<Self, Self::Error> {
        match original {
            0 => Ok(RegularMode::Moon),
            1 => Ok(RegularMode::Low),
            2 => Ok(RegularMode::Medium),
            3 => Ok(RegularMode::Max),
            4 => Ok(RegularMode::BatteryCheck),
            5 => Ok(RegularMode::Beacon),
            6 => Ok(RegularMode::Ramp),
            _ => Err(ModeIndexError { index: original }),
        }
    }
}

/// the strobe mode names, only one for now
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StrobeMode {
    Rapid,
}

impl From<StrobeMode> for u8 {
    fn from(original: StrobeMode) -> u8 {
        match original {
            StrobeMode::Rapid => 0,
        }
    }
}

impl TryFrom<u8> for StrobeMode {
    type Error = ModeIndexError;

    fn try_from(original: u8) -> Result<Self, Self::Error> {
        match original {
            0 => Ok(StrobeMode::Rapid),
            _ => Err(ModeIndexError { index: original }),
        }
    }
}

//==========================================================

/// the one mode to run this boot
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Selection {
    Regular(RegularMode),
    Strobe(StrobeMode),
}

impl Selection {
    /// look up the behavior in the mode tables
    pub fn mode(&self) -> Mode {
        match *self {
            Selection::Regular(m) => REGULAR_MODES[usize::from(u8::from(m))],
            Selection::Strobe(m) => STROBE_MODES[usize::from(u8::from(m))],
        }
    }
}

/// decide which mode to run, after the record was restored
///
/// Indexes past the end of their table go back to the first mode.
/// Enough short presses in a row latch the strobe group, which then
/// stays latched until the record decays.
pub fn select(record: &mut SessionRecord) -> Selection {
    let regular = match RegularMode::try_from(record.mode_index) {
        Ok(m) => m,
        Err(_) => {
            record.mode_index = 0;
            RegularMode::Moon
        }
    };

    if record.short_press_count >= STROBE_PRESS_THRESHOLD && !record.strobe_latched() {
        info!("{} short presses, strobe group latched", record.short_press_count);
        record.strobe_enable = 1;
        record.strobe_mode_index = 0;
    }

    let strobe = match StrobeMode::try_from(record.strobe_mode_index) {
        Ok(m) => m,
        Err(_) => {
            record.strobe_mode_index = 0;
            StrobeMode::Rapid
        }
    };

    if record.strobe_latched() {
        Selection::Strobe(strobe)
    } else {
        Selection::Regular(regular)
    }
}

//==========================================================
