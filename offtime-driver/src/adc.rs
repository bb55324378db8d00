use core::convert::Infallible;
use offtime_driver_board::pac;

//==========================================================

/// battery voltage on ADC1, polled
///
/// Internal 1.1V reference with the result left adjusted, so only
/// the high byte is read. ADC clock is 8MHz / 64 = 125kHz.
pub struct VoltageAdc {
    adc: pac::ADC,
    started: bool,
}

impl VoltageAdc {
    /// setup adc hardware
    pub fn new(adc: pac::ADC) -> VoltageAdc {
        // disable the digital input on the divider pin
        adc.didr0.write(|w| w.adc1d().set_bit());
        adc.admux.write(|w| {
            w.refs()
                .internal()
                .refs2()
                .clear_bit()
                .adlar()
                .set_bit()
                .mux()
                .adc1()
        });
        adc.adcsra
            .write(|w| w.aden().set_bit().adps().prescaler_64());
        VoltageAdc {
            adc,
            started: false,
        }
    }

    /// start a single conversion
    pub fn start(&mut self) {
        self.adc.adcsra.modify(|_, w| w.adsc().set_bit());
        self.started = true;
    }

    /// high byte of the result, once the conversion is done
    pub fn read(&mut self) -> nb::Result<u8, Infallible> {
        if !self.started || self.adc.adcsra.read().adsc().bit_is_set() {
            return Err(nb::Error::WouldBlock);
        }
        self.started = false;
        Ok((self.adc.adc.read().bits() >> 8) as u8)
    }

    /// turn the adc off before sleeping
    pub fn disable(&mut self) {
        self.adc.adcsra.modify(|_, w| w.aden().clear_bit());
        self.started = false;
    }
}
