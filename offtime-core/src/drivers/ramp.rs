use crate::config::RAMP_STEP_MS;
use crate::port::LightPort;
use crate::session::Retained;

//==========================================================

/// ramp direction policy
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RampKind {
    /// //////
    Rising,
    /// /\/\/\
    RiseFall,
}

/// sweep the pwm through a lookup table
///
/// Every level is written to the session record, so it is still there
/// after a short power off.
#[derive(Debug, Clone)]
pub struct Ramp {
    kind: RampKind,
    table: &'static [u8],
    index: usize,
    falling: bool,
}

impl Ramp {
    pub fn new(kind: RampKind, table: &'static [u8]) -> Ramp {
        Ramp {
            kind,
            table,
            index: 0,
            falling: false,
        }
    }

    /// start rising from the first entry at or above `level`,
    /// a level of 0 starts at the bottom
    pub fn resume(kind: RampKind, table: &'static [u8], level: u8) -> Ramp {
        let mut ramp = Ramp::new(kind, table);
        if level != 0 {
            ramp.index = table
                .iter()
                .position(|&v| v >= level)
                .unwrap_or_else(|| table.len().saturating_sub(1));
            // already at the peak, the only way is down
            ramp.falling = kind == RampKind::RiseFall && ramp.index + 1 >= table.len();
        }
        ramp
    }

    /// level the next step will output
    pub fn level(&self) -> u8 {
        self.table.get(self.index).copied().unwrap_or(0)
    }

    /// output the current level, remember it, then move on
    pub fn step<P: LightPort, R: Retained>(&mut self, port: &mut P, retained: &mut R) {
        let duty = self.level();
        port.set_duty(duty);
        retained.modify(|r| r.ramp_level = duty);
        port.delay_ms(RAMP_STEP_MS);
        self.advance();
    }

    fn advance(&mut self) {
        let last = self.table.len().saturating_sub(1);
        if last == 0 {
            return;
        }
        match self.kind {
            RampKind::Rising => {
                self.index = if self.index >= last { 0 } else { self.index + 1 };
            }
            RampKind::RiseFall => {
                if self.falling {
                    self.index -= 1;
                    if self.index == 0 {
                        self.falling = false;
                    }
                } else {
                    self.index += 1;
                    if self.index >= last {
                        self.index = last;
                        self.falling = true;
                    }
                }
            }
        }
    }
}

//==========================================================
