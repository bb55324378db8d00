use crate::hal::port::{self, mode, Pin};
use crate::pac;

/// pin as it comes out of reset
pub type Floating<P> = Pin<mode::Input<mode::Floating>, P>;

/// the led gate pin, shared by the timer output and direct drive
pub type LedPin = Pin<mode::Output, port::PB1>;

/// the driver's pins, with the names they have on the board
pub struct Pins {
    /// `PB1`
    ///
    /// * OC0B (timer 0 compare match B)
    /// * gate of the 7135 regulators
    pub led: Floating<port::PB1>,
    /// `PB2`
    ///
    /// * ADC1 (ADC input channel 1)
    /// * battery voltage divider
    pub voltage: Floating<port::PB2>,
    /// `PB3`, star 4
    pub star4: Floating<port::PB3>,
    /// `PB4`, star 3
    pub star3: Floating<port::PB4>,
}

impl Pins {
    pub fn new(portb: pac::PORTB) -> Pins {
        let pins = crate::hal::Pins::new(portb);
        Pins {
            led: pins.pb1,
            voltage: pins.pb2,
            star4: pins.pb3,
            star3: pins.pb4,
        }
    }
}
