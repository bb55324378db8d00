use crate::port::LightPort;

/// fixed period strobe on the strobe pin
///
/// The pwm must be disconnected from the pin before this runs, the
/// two may share a pin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Strobe {
    pub on_ms: u16,
    pub off_ms: u16,
}

impl Strobe {
    pub const fn new(on_ms: u16, off_ms: u16) -> Strobe {
        Strobe { on_ms, off_ms }
    }

    /// one on/off period
    pub fn step<P: LightPort>(&self, port: &mut P) {
        port.set_strobe(true);
        port.delay_ms(self.on_ms);
        port.set_strobe(false);
        port.delay_ms(self.off_ms);
    }
}
