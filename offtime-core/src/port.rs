//! the hardware seams the driver logic is written against

use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;

//==========================================================

/// the output/input capabilities of the driver board
///
/// All waiting goes through the `DelayMs` supertrait, so a simulated
/// port can keep its own clock.
pub trait LightPort: DelayMs<u16> {
    /// configure the timer for pwm output on the led pin
    fn enable_pwm(&mut self);
    /// disconnect the timer from the led pin, the pin is then driven
    /// by `set_strobe`
    fn disable_pwm(&mut self);
    /// set the pwm duty cycle, 0 is off, 255 is full on
    fn set_duty(&mut self, duty: u8);
    /// drive the strobe pin directly
    fn set_strobe(&mut self, on: bool);
    /// start an adc conversion of the battery voltage
    fn start_conversion(&mut self);
    /// get the result of the last conversion, `WouldBlock` while the
    /// conversion is still running
    fn read_sample(&mut self) -> nb::Result<u8, Infallible>;
    /// enter the lowest power sleep state. On hardware only a reset
    /// wakes the cpu again.
    fn halt(&mut self);

    /// start a conversion and wait for the result
    fn sample(&mut self) -> u8 {
        self.start_conversion();
        match nb::block!(self.read_sample()) {
            Ok(v) => v,
            Err(e) => match e {},
        }
    }
}

//==========================================================

/// values remembered across a full power loss
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SavedMode {
    pub mode: u8,
    pub level: u8,
}

/// non-volatile backing store for mode memory
pub trait ModeStore {
    /// get the saved values, `None` if nothing was ever saved
    fn load(&mut self) -> Option<SavedMode>;
    fn save_mode(&mut self, mode: u8);
    fn save_level(&mut self, level: u8);
}

/// mode memory disabled
pub struct NoStore;

impl ModeStore for NoStore {
    fn load(&mut self) -> Option<SavedMode> {
        None
    }
    fn save_mode(&mut self, _mode: u8) {}
    fn save_level(&mut self, _level: u8) {}
}
