//! Segment layouts for the readouts the display is normally used for.

use crate::constants::{DOT_MASK, NUMBERS};

/// `HHMMSS` across the six digits.
///
/// A zero tens-of-hours digit is left blank. With `colon` set, the separators
/// after the hours and the minutes (dot bits of digits 1 and 3) are lit.
/// Returns `None` for a field outside its range.
pub fn clock_segments(hour: u8, minute: u8, second: u8, colon: bool) -> Option<[u8; 6]> {
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    let hour_tens = if hour / 10 == 0 {
        0
    } else {
        NUMBERS[(hour / 10) as usize]
    };
    let mut segments = [
        hour_tens,
        NUMBERS[(hour % 10) as usize],
        NUMBERS[(minute / 10) as usize],
        NUMBERS[(minute % 10) as usize],
        NUMBERS[(second / 10) as usize],
        NUMBERS[(second % 10) as usize],
    ];
    if colon {
        segments[1] |= DOT_MASK;
        segments[3] |= DOT_MASK;
    }
    Some(segments)
}

/// Decimal digits of one address octet, most significant first, without
/// padding. Returns the patterns and how many of them are used.
pub fn octet_segments(octet: u8) -> ([u8; 3], usize) {
    let digits = [octet / 100, octet / 10 % 10, octet % 10];
    let len = match octet {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    };

    let mut segments = [0; 3];
    for (segment, digit) in segments.iter_mut().zip(&digits[3 - len..]) {
        *segment = NUMBERS[*digit as usize];
    }
    (segments, len)
}
