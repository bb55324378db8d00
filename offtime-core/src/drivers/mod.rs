//! output behaviors
//!
//! A behavior owns the output pins until power is removed. Each
//! `step` runs one iteration of its loop; `run` never returns.

mod battcheck;
mod ramp;
mod strobe;

pub use battcheck::BatteryCheck;
pub use ramp::{Ramp, RampKind};
pub use strobe::Strobe;

use crate::battery::BatteryMonitor;
use crate::modes::Mode;
use crate::port::LightPort;
use crate::session::{Retained, SessionRecord};
use crate::tables::RAMP;

//==========================================================

/// the behavior running for the rest of the session
#[derive(Debug, Clone)]
pub enum Behavior {
    /// fixed level, the battery monitor runs in the background
    Steady(BatteryMonitor),
    BatteryCheck(BatteryCheck),
    Strobe(Strobe),
    Ramp(Ramp),
    /// light off and cpu halted, nothing follows
    Halted,
}

impl Behavior {
    /// set up the outputs for a mode and get its behavior
    ///
    /// The pwm must already be running for duty cycle modes, and be
    /// disconnected for strobe modes.
    pub fn enter<P: LightPort>(mode: Mode, port: &mut P, record: &SessionRecord) -> Behavior {
        match mode {
            Mode::Steady(duty) => {
                port.set_duty(duty);
                Behavior::Steady(BatteryMonitor::new())
            }
            Mode::BatteryCheck => Behavior::BatteryCheck(BatteryCheck::new()),
            Mode::Strobe(strobe) => Behavior::Strobe(strobe),
            Mode::Ramp(kind) => Behavior::Ramp(Ramp::resume(kind, RAMP, record.ramp_level)),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Behavior::Halted)
    }

    /// run one iteration
    pub fn step<P: LightPort, R: Retained>(&mut self, port: &mut P, retained: &mut R) {
        match self {
            Behavior::Steady(monitor) => {
                if !monitor.poll(port) {
                    *self = Behavior::Halted;
                }
            }
            Behavior::BatteryCheck(check) => check.step(port),
            Behavior::Strobe(strobe) => strobe.step(port),
            Behavior::Ramp(ramp) => ramp.step(port, retained),
            Behavior::Halted => {}
        }
    }

    /// hand the outputs over for good
    pub fn run<P: LightPort, R: Retained>(mut self, port: &mut P, retained: &mut R) -> ! {
        loop {
            self.step(port, retained);
        }
    }
}

//==========================================================
