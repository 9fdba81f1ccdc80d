#![no_std]

pub mod clock;
mod config;
mod constants;
pub mod frame;
pub mod line;

pub use clock::{clock_segments, octet_segments};
pub use config::{Config, ConfigError};
pub use constants::*;
pub use line::{Lines, OpenDrainError, OpenDrainPins, PinBackend, PinMode};

use embedded_hal::delay::DelayNs;
use num_traits::ToPrimitive;

/// TM1637 driven over two bit-banged open-drain lines, six digits.
///
/// The protocol is write-only: every update is sent blind and the
/// controller's acknowledgement is never read.
pub struct Tm1637<B, D> {
    lines: Lines<B, D>,
    brightness: u8,
}

impl<B, D, E> Tm1637<B, D>
where
    B: PinBackend<Error = E>,
    D: DelayNs,
{
    /// Validates `config` and releases both lines to idle high.
    pub fn new(backend: B, delay: D, config: &Config) -> Result<Self, Tm1637Error<E>> {
        config.validate().map_err(Tm1637Error::Config)?;

        let mut lines = Lines::new(backend, delay, config.clk, config.dio, config.bit_delay_us);
        lines.release(config.clk)?;
        lines.settle();
        lines.release(config.dio)?;
        lines.settle();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "tm1637: clk={=u8} dio={=u8} brightness={=u8}",
            config.clk,
            config.dio,
            config.brightness
        );

        Ok(Self {
            lines,
            brightness: config.brightness,
        })
    }

    pub fn destroy(self) -> (B, D) {
        (self.lines.backend, self.lines.delay)
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Takes effect with the next update.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), Tm1637Error<E>> {
        if brightness > MAX_BRIGHTNESS {
            return Err(Tm1637Error::InvalidValue);
        }
        self.brightness = brightness;
        Ok(())
    }

    /// Writes segment patterns starting at digit `pos`, then resends the
    /// display control byte with the configured brightness.
    pub fn set_segments(&mut self, segments: &[u8], pos: u8) -> Result<(), Tm1637Error<E>> {
        if pos >= MAX_DIGITS {
            return Err(Tm1637Error::InvalidLocation(pos));
        }
        if segments.len() > (MAX_DIGITS - pos) as usize {
            return Err(Tm1637Error::TooManySegments(segments.len()));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("tm1637: {=[u8]:#x} at {=u8}", segments, pos);

        self.write_command(command::DATA_AUTO_INCREMENT)?;

        frame::start(&mut self.lines)?;
        frame::write_byte(&mut self.lines, command::ADDRESS + pos)?;
        for segment in segments {
            frame::write_byte(&mut self.lines, *segment)?;
        }
        frame::stop(&mut self.lines)?;

        self.write_command(command::DISPLAY_CONTROL + self.brightness)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), Tm1637Error<E>> {
        self.set_segments(&[0; MAX_DIGITS as usize], 0)
    }

    pub fn display_ascii(&mut self, bytes: &[u8]) -> Result<(), Tm1637Error<E>> {
        if bytes.len() > MAX_DIGITS as usize {
            return Err(Tm1637Error::TooManySegments(bytes.len()));
        }
        let mut segments = [0; MAX_DIGITS as usize];
        for (segment, c) in segments.iter_mut().zip(bytes) {
            *segment = match c {
                b'0'..=b'9' => NUMBERS[(c - b'0') as usize],
                b'a'..=b'z' => LETTERS[(c - b'a') as usize],
                b'A'..=b'Z' => LETTERS[(c - b'A') as usize],
                _ => 0,
            };
        }
        self.set_segments(&segments, 0)
    }

    /// Same as [`Self::display_ascii`]; non-ASCII characters are blank.
    pub fn display_string(&mut self, string: &str) -> Result<(), Tm1637Error<E>> {
        let count = string.chars().count();
        if count > MAX_DIGITS as usize {
            return Err(Tm1637Error::TooManySegments(count));
        }
        let mut bytes = [b' '; MAX_DIGITS as usize];
        for (byte, c) in bytes.iter_mut().zip(string.chars()) {
            *byte = if c.is_ascii() { c as u8 } else { b' ' };
        }
        self.display_ascii(&bytes)
    }

    /// Right-aligned, zero-padded decimal.
    pub fn display_number<T>(&mut self, number: T) -> Result<(), Tm1637Error<E>>
    where
        T: ToPrimitive,
    {
        self.display_radix(number, 10)
    }

    pub fn display_hex_number<T>(&mut self, number: T) -> Result<(), Tm1637Error<E>>
    where
        T: ToPrimitive,
    {
        self.display_radix(number, 16)
    }

    /// Lit separators after the hours and minutes when `colon` is set.
    pub fn display_time(
        &mut self,
        hour: u8,
        minute: u8,
        second: u8,
        colon: bool,
    ) -> Result<(), Tm1637Error<E>> {
        let segments =
            clock_segments(hour, minute, second, colon).ok_or(Tm1637Error::InvalidValue)?;
        self.set_segments(&segments, 0)
    }

    /// Blanks the display, then shows one address octet from digit 0.
    pub fn display_octet(&mut self, octet: u8) -> Result<(), Tm1637Error<E>> {
        self.clear()?;
        let (segments, len) = octet_segments(octet);
        self.set_segments(&segments[..len], 0)
    }

    fn display_radix<T>(&mut self, number: T, radix: u32) -> Result<(), Tm1637Error<E>>
    where
        T: ToPrimitive,
    {
        let mut num = number.to_u32().ok_or(Tm1637Error::InvalidValue)?;
        if num >= radix.pow(MAX_DIGITS as u32) {
            return Err(Tm1637Error::InvalidValue);
        }
        let mut segments = [0; MAX_DIGITS as usize];
        for segment in segments.iter_mut().rev() {
            *segment = NUMBERS[(num % radix) as usize];
            num /= radix;
        }
        self.set_segments(&segments, 0)
    }

    fn write_command(&mut self, byte: u8) -> Result<(), Tm1637Error<E>> {
        frame::start(&mut self.lines)?;
        frame::write_byte(&mut self.lines, byte)?;
        frame::stop(&mut self.lines)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1637Error<E> {
    PinError(E),
    InvalidValue,
    InvalidLocation(u8),
    TooManySegments(usize),
    Config(ConfigError),
}

impl<E> From<E> for Tm1637Error<E> {
    fn from(error: E) -> Self {
        Tm1637Error::PinError(error)
    }
}
