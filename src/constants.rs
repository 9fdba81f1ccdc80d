pub const MAX_DIGITS: u8 = 6;
pub const MAX_BRIGHTNESS: u8 = 15; // 4 bits
pub const DOT_MASK: u8 = 0x80; // colon or decimal point of a digit
pub const DEFAULT_BRIGHTNESS: u8 = 0x0F;
pub const DEFAULT_BIT_DELAY_US: u32 = 1_000;

//      A
//     ---
//  F |   | B
//     -G-
//  E |   | C
//     ---
//      D
// bit 0 = A ... bit 6 = G
pub const NUMBERS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
];
pub const LETTERS: [u8; 26] = [
    0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, 0x3D, 0x76, 0x06, 0x1E, 0x7A, 0x38, 0x15, 0x54, 0x5C, 0x73,
    0x67, 0x50, 0x6D, 0x78, 0x3E, 0x1C, 0x2A, 0x49, 0x6E, 0x52,
];

pub mod command {
    pub const DATA_AUTO_INCREMENT: u8 = 0x40; // write to display registers, auto-increment address
    pub const ADDRESS: u8 = 0xC0; // + digit position 0-5
    pub const DISPLAY_CONTROL: u8 = 0x80; // + brightness, bit 3 is display on
}

/// Segment pattern for a hex digit value (0-15).
pub fn digit_to_segment(value: u8) -> Option<u8> {
    NUMBERS.get(value as usize).copied()
}
