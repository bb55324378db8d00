use avr_device::interrupt;
use offtime_core::{ModeStore, SavedMode};
use offtime_driver_board::pac;

//==========================================================

/// 512 bytes split in 3 banks
const BANK_SIZE: u16 = 128;
const MODE_ADDR: u16 = 0;
const LEVEL_ADDR: u16 = 1;

/// contents of a cell that was never written
const ERASED: u8 = 0xFF;

//==========================================================

/// mode memory kept in eeprom
///
/// Every value is written to the same offset in 3 banks and read back
/// by majority, so a write torn by a power loss is outvoted.
pub struct EepromStore {
    eeprom: pac::EEPROM,
}

impl EepromStore {
    pub fn new(eeprom: pac::EEPROM) -> EepromStore {
        EepromStore { eeprom }
    }

    fn busy(&self) -> bool {
        self.eeprom.eecr.read().eepe().bit_is_set()
    }

    fn read(&self, address: u16) -> u8 {
        interrupt::free(|_| {
            // poll until write op finished
            while self.busy() {}
            // SAFETY: every address below 512 is valid
            unsafe { self.eeprom.eear.write(|w| w.bits(address)) };
            self.eeprom.eecr.write(|w| w.eere().set_bit());
            self.eeprom.eedr.read().bits()
        })
    }

    fn write(&self, address: u16, val: u8) {
        interrupt::free(|_| {
            // wait for completion of previous write
            while self.busy() {}
            // SAFETY: every address below 512 and every value is valid
            unsafe {
                self.eeprom.eear.write(|w| w.bits(address));
                self.eeprom.eedr.write(|w| w.bits(val));
            }
            // EEPM cleared, erase and write in one go. EEPE has to
            // follow EEMPE within 4 cycles
            self.eeprom.eecr.write(|w| w.eempe().set_bit());
            self.eeprom.eecr.modify(|_, w| w.eepe().set_bit());
        })
    }

    /// majority of the 3 banks, bank 0 if all disagree
    pub fn read8(&self, address: u16) -> u8 {
        let mut v: [u8; 3] = [0; 3];
        for (i, slot) in v.iter_mut().enumerate() {
            *slot = self.read(i as u16 * BANK_SIZE + address);
        }
        if v[1] == v[2] {
            v[2]
        } else {
            v[0]
        }
    }

    /// write to all banks, skipping cells that already hold `val`
    pub fn update8(&self, address: u16, val: u8) {
        for i in 0..3 {
            let addr = i * BANK_SIZE + address;
            if self.read(addr) != val {
                self.write(addr, val);
            }
        }
    }
}

impl ModeStore for EepromStore {
    fn load(&mut self) -> Option<SavedMode> {
        let mode = self.read8(MODE_ADDR);
        if mode == ERASED {
            return None;
        }
        let level = match self.read8(LEVEL_ADDR) {
            ERASED => 0,
            v => v,
        };
        Some(SavedMode { mode, level })
    }

    fn save_mode(&mut self, mode: u8) {
        self.update8(MODE_ADDR, mode);
    }

    fn save_level(&mut self, level: u8) {
        self.update8(LEVEL_ADDR, level);
    }
}
