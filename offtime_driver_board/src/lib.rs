//! Board Support Crate for NANJG 105C style flashlight drivers (ATtiny85 in the
//! ATtiny13 footprint).
//!
//! This crate re-exports functionality from the underlying HAL in ways that make more
//! sense for this particular board. The pins are named by what they are wired to on the
//! driver instead of the MCU names.
//!
//! | MCU pin | Board use |
//! | --- | --- |
//! | `PB1` | led driver gate (7135 bank), OC0B |
//! | `PB2` | battery voltage divider, ADC1 |
//! | `PB3` | star 4, unused |
//! | `PB4` | star 3, unused |
//!
//! A rough skeleton for an application looks like this:
//!
//! ```no_run
//! #![no_std]
//! #![no_main]
//!
//! extern crate panic_halt;
//!
//! #[offtime_driver_board::entry]
//! fn main() -> ! {
//!     let dp = offtime_driver_board::Peripherals::take().unwrap();
//!     let pins = offtime_driver_board::Pins::new(dp.PORTB);
//!     let mut led = pins.led.into_output();
//!     loop {
//!         led.toggle();
//!         offtime_driver_board::delay_ms(500);
//!     }
//! }
//! ```

#![no_std]

// Expose hal & pac crates
pub use attiny_hal as hal;
pub use avr_device::attiny85 as pac;

/// See [`avr_device::entry`](https://docs.rs/avr-device/latest/avr_device/attr.entry.html).
#[cfg(feature = "rt")]
pub use avr_device::entry;

pub use crate::pac::Peripherals;

mod pins;
pub use crate::pins::*;

/// cpu clock, internal rc oscillator with CKDIV8 unprogrammed
pub type Clock = avr_hal_generic::clock::MHz8;

/// Busy-Delay
///
/// **Note**: For just delaying, using [`delay_ms()`][delay_ms] is probably the better
/// choice. This type is more useful when an `embedded-hal` driver needs a delay
/// implementation.
pub type Delay = avr_hal_generic::delay::Delay<Clock>;

/// Wait (busy spin) for `ms` milliseconds
pub fn delay_ms(ms: u16) {
    use avr_hal_generic::prelude::*;

    Delay::new().delay_ms(ms)
}
