use core::ptr;
use offtime_core::{Retained, SessionRecord};

/// the session record, in ram the startup code does not clear
///
/// The initializer is never loaded, `.noinit` is not part of the
/// image. After power up this holds whatever the cells decayed to.
#[link_section = ".noinit"]
static mut SESSION: SessionRecord = SessionRecord {
    decay_flag: 0,
    mode_index: 0,
    short_press_count: 0,
    strobe_enable: 0,
    strobe_mode_index: 0,
    ramp_level: 0,
};

/// handle to the `.noinit` session record
pub struct NoinitSession {
    _private: (),
}

impl NoinitSession {
    /// only one handle may exist, main takes it once
    pub fn take() -> NoinitSession {
        NoinitSession { _private: () }
    }
}

impl Retained for NoinitSession {
    fn load(&self) -> SessionRecord {
        // SAFETY: single threaded, no interrupt touches the record
        unsafe { ptr::read_volatile(&SESSION) }
    }

    fn store(&mut self, record: SessionRecord) {
        // SAFETY: single threaded, no interrupt touches the record
        unsafe { ptr::write_volatile(&mut SESSION, record) }
    }
}
