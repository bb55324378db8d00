//! read only lookup tables

//==========================================================

/// perceived intensity is basically linearly increasing
pub static RAMP_SQUARED: [u8; 51] = [
    4, 4, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 21, 24, 27, 30, 33, 37, 40, 44, 48, 53, 57, 62, 67,
    72, 77, 83, 88, 94, 100, 107, 113, 120, 127, 134, 141, 149, 157, 165, 173, 181, 190, 198, 207,
    216, 226, 235, 245, 255,
];

/// smooth sinusoidal ramping
pub static RAMP_SIN_SQUARED: [u8; 100] = [
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 11, 11, 12, 14, 15,
    16, 17, 19, 21, 22, 24, 26, 29, 31, 33, 36, 39, 42, 45, 48, 51, 54, 58, 62, 66, 69, 74, 78, 82,
    87, 91, 96, 100, 105, 110, 115, 120, 125, 130, 135, 140, 146, 151, 156, 161, 166, 171, 176,
    181, 186, 191, 195, 200, 204, 209, 213, 217, 221, 224, 228, 231, 234, 237, 240, 243, 245, 247,
    249, 251, 252, 253, 254, 254, 255, 255,
];

/// the profile the ramp modes use
#[cfg(not(feature = "smooth-ramp"))]
pub static RAMP: &[u8] = &RAMP_SQUARED;
#[cfg(feature = "smooth-ramp")]
pub static RAMP: &[u8] = &RAMP_SIN_SQUARED;

//==========================================================

/// raw adc values for each battery level, ascending.
/// a reading above n entries gives n blinks.
pub static VOLTAGE_BLINKS: [u8; 5] = [
    139, // 1 blink  for 0%-25%   (3.3V resting)
    154, // 2 blinks for 25%-50%  (3.6V resting)
    164, // 3 blinks for 50%-75%  (3.8V resting)
    175, // 4 blinks for 75%-100% (4.0V resting)
    185, // 5 blinks for >100%    (4.2V resting)
];

//==========================================================
