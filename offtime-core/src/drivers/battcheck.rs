use crate::battery::battery_bucket;
use crate::config::{BLINK_OFF_MS, BLINK_ON_MS, DUTY_BLINK, READOUT_PAUSE_MS};
use crate::port::LightPort;

/// blink out the battery level, forever
///
/// 0 blinks: < 3.0V, 1: 3.0-3.3V, 2: 3.3-3.6V, 3: 3.6-3.9V,
/// 4: 3.9-4.2V, 5: > 4.2V
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BatteryCheck {
    last_blinks: u8,
}

impl BatteryCheck {
    pub fn new() -> BatteryCheck {
        BatteryCheck { last_blinks: 0 }
    }

    /// blink count of the last readout
    pub fn last_blinks(&self) -> u8 {
        self.last_blinks
    }

    /// one measure and blink cycle
    pub fn step<P: LightPort>(&mut self, port: &mut P) {
        // turn off and wait before measuring, so the cell is not under load
        port.set_duty(0);
        port.delay_ms(READOUT_PAUSE_MS);
        // the first one is unreliable
        let _ = port.sample();
        let voltage = port.sample();
        self.last_blinks = battery_bucket(voltage);
        for _ in 0..self.last_blinks {
            port.set_duty(DUTY_BLINK);
            port.delay_ms(BLINK_ON_MS);
            port.set_duty(0);
            port.delay_ms(BLINK_OFF_MS);
        }
    }
}
