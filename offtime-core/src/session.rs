//! session state kept in ram that is not cleared at startup
//!
//! There is enough energy in the decoupling capacitor to keep the
//! sram contents for roughly half a second after the switch is
//! opened. The `decay_flag` byte is written to zero on every boot; if
//! the light was off for longer than that, some of its bits will have
//! drifted to one and the whole record is garbage. A flag that still
//! reads zero means the user half-pressed the switch to change modes.
//!
//! Bit decay is an analog process, so this is a best guess and not a
//! guarantee. An off-time right at the edge of the window can go
//! either way. A partially decayed flag is treated the same as a fully
//! decayed one.

use crate::port::ModeStore;
use log::debug;

//==========================================================

/// the persisted fields
///
/// Every field is a plain byte because the memory may hold any bit
/// pattern at power up.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SessionRecord {
    /// zero while the record is valid
    pub decay_flag: u8,
    /// position in the regular mode table
    pub mode_index: u8,
    /// number of boots that did not last past the short press window
    pub short_press_count: u8,
    /// nonzero once the strobe group is latched
    pub strobe_enable: u8,
    /// position in the strobe mode table
    pub strobe_mode_index: u8,
    /// last pwm level reached by a ramp
    pub ramp_level: u8,
}

impl SessionRecord {
    /// did any bit of the flag decay
    pub fn has_decayed(&self) -> bool {
        self.decay_flag != 0
    }

    pub fn strobe_latched(&self) -> bool {
        self.strobe_enable != 0
    }

    /// bring the record up to date at boot
    ///
    /// `decayed` comes from the platform, normally `has_decayed()`.
    /// After a long power off everything goes back to defaults,
    /// optionally overwritten from the backing store. After a short
    /// press the mode and the press count advance. The decay flag is
    /// cleared in both cases so the next short power off can be seen.
    pub fn restore<S: ModeStore>(&mut self, decayed: bool, store: &mut S) {
        if decayed {
            *self = SessionRecord::default();
            if let Some(saved) = store.load() {
                self.mode_index = saved.mode;
                self.ramp_level = saved.level;
            }
            debug!("long power off, session reset to mode {}", self.mode_index);
        } else {
            self.mode_index = self.mode_index.wrapping_add(1);
            self.short_press_count = self.short_press_count.saturating_add(1);
            debug!(
                "short press {}, advancing to mode {}",
                self.short_press_count, self.mode_index
            );
        }
        self.decay_flag = 0;
    }
}

//==========================================================

/// access to the memory the record lives in
///
/// The firmware implements this with volatile accesses to the
/// `.noinit` section, a plain record stands in for it everywhere else.
pub trait Retained {
    fn load(&self) -> SessionRecord;
    fn store(&mut self, record: SessionRecord);

    /// update the record in place
    fn modify<F: FnOnce(&mut SessionRecord)>(&mut self, f: F) {
        let mut record = self.load();
        f(&mut record);
        self.store(record);
    }
}

impl Retained for SessionRecord {
    fn load(&self) -> SessionRecord {
        *self
    }
    fn store(&mut self, record: SessionRecord) {
        *self = record;
    }
}

//==========================================================
