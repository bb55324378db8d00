//! boot sequence: restore the session, pick a mode, commit to it

use crate::config::SHORT_PRESS_WINDOW_MS;
use crate::drivers::Behavior;
use crate::modes::{self, Mode, Selection};
use crate::port::{LightPort, ModeStore};
use crate::session::Retained;
use log::debug;

//==========================================================

/// first half of the boot, no outputs touched
///
/// Reads the retained record, clears its decay flag and runs the mode
/// decision. The record is written back before returning.
pub fn start<R: Retained, S: ModeStore>(retained: &mut R, store: &mut S) -> Selection {
    let mut record = retained.load();
    let decayed = record.has_decayed();
    record.restore(decayed, store);
    let selection = modes::select(&mut record);
    retained.store(record);
    debug!("selected {:?}", selection);
    selection
}

/// second half of the boot, sets up the outputs for the selection
///
/// Strobe group modes start right away. Regular modes start the pwm and
/// the adc, then wait out the short press window before clearing the
/// press count and saving the mode. A power loss inside the window
/// leaves the count standing.
pub fn commit<P: LightPort, R: Retained, S: ModeStore>(
    selection: Selection,
    port: &mut P,
    retained: &mut R,
    store: &mut S,
) -> Behavior {
    let mode = selection.mode();
    if let Selection::Strobe(_) = selection {
        port.disable_pwm();
        port.set_strobe(false);
        return Behavior::enter(mode, port, &retained.load());
    }

    port.enable_pwm();
    port.set_duty(0);
    port.start_conversion();

    // on for too long to be a short press
    port.delay_ms(SHORT_PRESS_WINDOW_MS);
    retained.modify(|r| r.short_press_count = 0);

    let record = retained.load();
    store.save_mode(record.mode_index);
    // only save a level if a ramp set one
    if record.ramp_level != 0 {
        store.save_level(record.ramp_level);
    }

    if let Mode::Strobe(_) = mode {
        port.disable_pwm();
        port.set_strobe(false);
    }
    Behavior::enter(mode, port, &record)
}

/// the whole boot sequence
pub fn boot<P: LightPort, R: Retained, S: ModeStore>(
    port: &mut P,
    retained: &mut R,
    store: &mut S,
) -> Behavior {
    let selection = start(retained, store);
    commit(selection, port, retained, store)
}

//==========================================================
