use crate::adc::VoltageAdc;
use crate::nanopwm::PwmPin;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use offtime_core::LightPort;
use offtime_driver_board::{pac, Delay};

//==========================================================

/// the driver hardware behind the `LightPort` seam
pub struct DriverPort {
    cpu: pac::CPU,
    led: PwmPin,
    adc: VoltageAdc,
    delay: Delay,
}

impl DriverPort {
    pub fn new(cpu: pac::CPU, led: PwmPin, adc: VoltageAdc) -> DriverPort {
        DriverPort {
            cpu,
            led,
            adc,
            delay: Delay::new(),
        }
    }
}

impl DelayMs<u16> for DriverPort {
    fn delay_ms(&mut self, ms: u16) {
        self.delay.delay_ms(ms);
    }
}

impl LightPort for DriverPort {
    fn enable_pwm(&mut self) {
        self.led.enable();
    }

    fn disable_pwm(&mut self) {
        self.led.disable();
    }

    fn set_duty(&mut self, duty: u8) {
        self.led.set_duty(duty);
    }

    fn set_strobe(&mut self, on: bool) {
        self.led.set_level(on);
    }

    fn start_conversion(&mut self) {
        self.adc.start();
    }

    fn read_sample(&mut self) -> nb::Result<u8, Infallible> {
        self.adc.read()
    }

    /// power down with interrupts off, only a power cycle gets out
    fn halt(&mut self) {
        self.led.disable();
        self.led.set_level(false);
        self.adc.disable();
        avr_device::interrupt::disable();
        self.cpu.mcucr.write(|w| w.sm().pdown().se().set_bit());
        loop {
            avr_device::asm::sleep();
        }
    }
}
