//! battery voltage classification and the low voltage monitor

use crate::config::{
    ADC_LOW, DUTY_LOW_VOLTAGE, LOW_SAMPLES_SHUTDOWN, LOW_SAMPLES_STEP_DOWN, MONITOR_INTERVAL_MS,
};
use crate::port::LightPort;
use crate::tables::VOLTAGE_BLINKS;
use log::warn;

//==========================================================

/// number of threshold entries the sample is strictly above,
/// 0 to 5. A sample equal to a threshold gets the lower count.
pub fn battery_bucket(sample: u8) -> u8 {
    VOLTAGE_BLINKS.iter().filter(|&&t| sample > t).count() as u8
}

//==========================================================

/// monitor states
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MonitorState {
    Nominal,
    /// stepped down to the warning level
    Degrading,
    /// light off, cpu halted
    Shutdown,
}

/// what to do after a sample
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MonitorAction {
    None,
    StepDown,
    Shutdown,
}

/// watches the battery while a steady mode is running
///
/// Counts consecutive samples under `ADC_LOW`, a single good sample
/// clears the count. Steps the light down at 4 and shuts off at 8.
#[derive(Debug, Clone)]
pub struct BatteryMonitor {
    state: MonitorState,
    low_count: u8,
}

impl BatteryMonitor {
    pub fn new() -> BatteryMonitor {
        BatteryMonitor {
            state: MonitorState::Nominal,
            low_count: 0,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn low_count(&self) -> u8 {
        self.low_count
    }

    /// account for one sample
    pub fn update(&mut self, sample: u8) -> MonitorAction {
        if sample < ADC_LOW {
            self.low_count = self.low_count.saturating_add(1);
        } else {
            self.low_count = 0;
        }
        if self.low_count >= LOW_SAMPLES_SHUTDOWN {
            self.state = MonitorState::Shutdown;
            MonitorAction::Shutdown
        } else if self.low_count == LOW_SAMPLES_STEP_DOWN {
            self.state = MonitorState::Degrading;
            MonitorAction::StepDown
        } else {
            MonitorAction::None
        }
    }

    /// check for a finished conversion and act on it
    ///
    /// Nothing happens until the adc reports a result. After a result
    /// the monitor waits out the sample interval and starts the next
    /// conversion. Returns false once the cpu was halted.
    pub fn poll<P: LightPort>(&mut self, port: &mut P) -> bool {
        let sample = match port.read_sample() {
            Ok(v) => v,
            Err(nb::Error::WouldBlock) => return true,
            Err(nb::Error::Other(e)) => match e {},
        };
        match self.update(sample) {
            MonitorAction::None => {}
            MonitorAction::StepDown => {
                warn!("battery low ({}), stepping down", sample);
                port.set_duty(DUTY_LOW_VOLTAGE);
            }
            MonitorAction::Shutdown => {
                warn!("battery critical ({}), shutting off", sample);
                port.set_duty(0);
                port.halt();
                return false;
            }
        }
        port.delay_ms(MONITOR_INTERVAL_MS);
        port.start_conversion();
        true
    }
}

impl Default for BatteryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

//==========================================================
