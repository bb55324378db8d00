//! firmware for an off-time switching flashlight driver

#![no_std]
#![no_main]

#[cfg(not(debug_assertions))]
use panic_halt as _;

use offtime_core::dispatch;
use offtime_driver_board::{pac, Pins};

// modules from project
mod adc;
use adc::VoltageAdc;
#[cfg(feature = "mode-memory")]
mod eeprom;
mod nanopwm;
use nanopwm::{PwmPin, Timer0Pwm};
mod noinit;
use noinit::NoinitSession;
mod port;
use port::DriverPort;

/// led off, then wait for the power to go away
#[cfg(debug_assertions)]
#[panic_handler]
fn panic(_pi: &core::panic::PanicInfo<'_>) -> ! {
    avr_device::interrupt::disable();
    // SAFETY: nothing else runs after a panic
    let dp = unsafe { pac::Peripherals::steal() };
    dp.TC0.tccr0a.write(|w| w.com0b().disconnected());
    dp.PORTB.portb.modify(|_, w| w.pb1().clear_bit());
    loop {}
}

//==========================================================

#[offtime_driver_board::entry]
fn main() -> ! {
    // SAFETY: this is the first and only time the peripherals are
    // taken. `take()` would add a panic path for nothing.
    let dp = unsafe { pac::Peripherals::steal() };
    let mut session = NoinitSession::take();

    #[cfg(feature = "mode-memory")]
    let mut store = eeprom::EepromStore::new(dp.EEPROM);
    #[cfg(not(feature = "mode-memory"))]
    let mut store = offtime_core::NoStore;

    // the decay flag has to be cleared before anything else happens
    let selection = dispatch::start(&mut session, &mut store);

    let mut port = setup(dp.CPU, dp.AC, dp.PORTB, dp.TC0, dp.ADC);
    let behavior = dispatch::commit(selection, &mut port, &mut session, &mut store);
    behavior.run(&mut port, &mut session)
}

//==========================================================

fn setup(
    cpu: pac::CPU,
    ac: pac::AC,
    portb: pac::PORTB,
    timer0: pac::TC0,
    adc: pac::ADC,
) -> DriverPort {
    // turn off analog comparator
    ac.acsr.write(|w| w.acd().set_bit());

    // sort out the pins
    let pins = Pins::new(portb);
    // the divider pin stays a floating input for the adc
    let _voltage = pins.voltage;
    // unused stars, pulled up so they don't float
    let _star3 = pins.star3.into_pull_up_input();
    let _star4 = pins.star4.into_pull_up_input();

    // pwm, undivided clock
    let timer0 = Timer0Pwm::new(timer0, nanopwm::Prescaler::Direct);
    let mut led = PwmPin::into_pwm(pins.led.into_output(), timer0);
    led.set_level(false);

    let adc = VoltageAdc::new(adc);

    DriverPort::new(cpu, led, adc)
}
