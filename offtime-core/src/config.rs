//! build time constants for the driver

//==========================================================
// timing

/// delay between ramp steps
pub const RAMP_STEP_MS: u16 = 30;

/// a light that stays on this long was not a short press
pub const SHORT_PRESS_WINDOW_MS: u16 = 25;

/// interval between battery monitor samples
pub const MONITOR_INTERVAL_MS: u16 = 1000;

/// battery check blink on time
pub const BLINK_ON_MS: u16 = 100;

/// battery check blink off time
pub const BLINK_OFF_MS: u16 = 400;

/// pause with the light off before each battery readout
pub const READOUT_PAUSE_MS: u16 = 1000;

/// rapid strobe on/off time
pub const STROBE_ON_MS: u16 = 20;
pub const STROBE_OFF_MS: u16 = 90;

/// beacon on/off time
pub const BEACON_ON_MS: u16 = 20;
pub const BEACON_OFF_MS: u16 = 3000;

/// nominal time the noinit ram holds its contents without power,
/// only used by simulations. The real value depends on the
/// decoupling capacitor, temperature and the part itself.
pub const DECAY_WINDOW_MS: u32 = 500;

//==========================================================
// pwm levels

/// ~2mA on an AK47A
pub const DUTY_MOON: u8 = 0x05;
/// ~50mA
pub const DUTY_LOW: u8 = 0x10;
/// ~240mA
pub const DUTY_MED: u8 = 0x40;
/// ~1A
pub const DUTY_MAX: u8 = 0xFF;

/// level the battery monitor steps down to on a weak cell
pub const DUTY_LOW_VOLTAGE: u8 = DUTY_MOON;

/// battery check blink level
pub const DUTY_BLINK: u8 = 0x40;

//==========================================================
// mode switching

/// consecutive short presses that latch the strobe group
pub const STROBE_PRESS_THRESHOLD: u8 = 3;

//==========================================================
// battery monitor

/// samples below this count as low voltage (~3.0V under load)
pub const ADC_LOW: u8 = 123;

/// consecutive low samples before stepping down
pub const LOW_SAMPLES_STEP_DOWN: u8 = 4;

/// consecutive low samples before shutting off
pub const LOW_SAMPLES_SHUTDOWN: u8 = 8;
