use offtime_driver_board::{pac, LedPin};
pub use avr_hal_generic::pwm::Prescaler;

//==========================================================

/// timer 0 in phase correct pwm mode, 8MHz / 510 ~ 15.7kHz undivided
///
/// Phase correct and not fast pwm: a compare value of 0 keeps OC0B low
/// for the whole period, fast pwm would still pulse once per period.
pub struct Timer0Pwm {
    timer: pac::TC0,
}

impl Timer0Pwm {
    pub fn new(timer: pac::TC0, prescaler: Prescaler) -> Timer0Pwm {
        let t = Timer0Pwm { timer };
        t.timer.tccr0a.write(|w| w.wgm0().pwm_phase());
        t.timer.tccr0b.write(|w| match prescaler {
            Prescaler::Direct => w.cs0().direct(),
            Prescaler::Prescale8 => w.cs0().prescale_8(),
            Prescaler::Prescale64 => w.cs0().prescale_64(),
            Prescaler::Prescale256 => w.cs0().prescale_256(),
            Prescaler::Prescale1024 => w.cs0().prescale_1024(),
        });
        // SAFETY: any value is a valid compare level
        unsafe { t.timer.ocr0b.write(|w| w.bits(0)) };
        t
    }
}

//==========================================================

type PwmDuty = u8;

/// the led pin, driven by OC0B or directly
pub struct PwmPin {
    pin: LedPin,
    timer: Timer0Pwm,
}

impl PwmPin {
    pub fn into_pwm(pin: LedPin, timer: Timer0Pwm) -> PwmPin {
        PwmPin { pin, timer }
    }

    /// connect OC0B to the pin, non-inverting
    pub fn enable(&mut self) {
        let tim = &self.timer.timer;
        avr_device::interrupt::free(|_| {
            tim.tccr0a.modify(|_, w| w.com0b().match_clear());
        })
    }

    /// disconnect OC0B, the pin then follows its port bit
    pub fn disable(&mut self) {
        let tim = &self.timer.timer;
        avr_device::interrupt::free(|_| {
            tim.tccr0a.modify(|_, w| w.com0b().disconnected());
        })
    }

    pub fn set_duty(&mut self, duty: PwmDuty) {
        // SAFETY: any value is a valid compare level
        unsafe { self.timer.timer.ocr0b.write(|w| w.bits(duty)) };
    }

    /// drive the pin directly, only visible while disabled
    pub fn set_level(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
