//! Open-drain line discipline.
//!
//! Both lines have external pull-ups. A line is either driven low (`Output`)
//! or released (`Input`) so the pull-up brings it high. Levels are never read.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// High impedance, the pull-up presents a logical high.
    Input,
    /// Driven low.
    Output,
}

/// Sets the mode of a GPIO line by number.
pub trait PinBackend {
    type Error;

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error>;
}

impl<T: PinBackend + ?Sized> PinBackend for &mut T {
    type Error = T::Error;

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        T::set_mode(self, pin, mode)
    }
}

/// [`PinBackend`] over two `embedded-hal` output pins that the HAL has already
/// configured as open-drain. `set_high` on such a pin releases the line.
pub struct OpenDrainPins<CLK, DIO> {
    pub clk: CLK,
    pub dio: DIO,
    clk_id: u8,
    dio_id: u8,
}

impl<CLK, DIO> OpenDrainPins<CLK, DIO> {
    pub fn new(clk: CLK, clk_id: u8, dio: DIO, dio_id: u8) -> Self {
        Self {
            clk,
            dio,
            clk_id,
            dio_id,
        }
    }

    pub fn destroy(self) -> (CLK, DIO) {
        (self.clk, self.dio)
    }
}

impl<CLK, DIO, E> PinBackend for OpenDrainPins<CLK, DIO>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
{
    type Error = OpenDrainError<E>;

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        if pin == self.clk_id {
            set_open_drain(&mut self.clk, mode)
        } else if pin == self.dio_id {
            set_open_drain(&mut self.dio, mode)
        } else {
            Err(OpenDrainError::UnknownPin(pin))
        }
    }
}

fn set_open_drain<P: OutputPin>(
    pin: &mut P,
    mode: PinMode,
) -> Result<(), OpenDrainError<P::Error>> {
    match mode {
        PinMode::Output => pin.set_low()?,
        PinMode::Input => pin.set_high()?,
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OpenDrainError<E> {
    PinError(E),
    UnknownPin(u8),
}

impl<E> From<E> for OpenDrainError<E> {
    fn from(error: E) -> Self {
        OpenDrainError::PinError(error)
    }
}

/// The clock and data lines of one display, plus the settle delay.
pub struct Lines<B, D> {
    pub backend: B,
    pub delay: D,
    clk: u8,
    dio: u8,
    bit_delay_us: u32,
}

impl<B, D> Lines<B, D> {
    pub fn clk(&self) -> u8 {
        self.clk
    }

    pub fn dio(&self) -> u8 {
        self.dio
    }
}

impl<B, D, E> Lines<B, D>
where
    B: PinBackend<Error = E>,
    D: DelayNs,
{
    pub fn new(backend: B, delay: D, clk: u8, dio: u8, bit_delay_us: u32) -> Self {
        Self {
            backend,
            delay,
            clk,
            dio,
            bit_delay_us,
        }
    }

    pub fn drive_low(&mut self, pin: u8) -> Result<(), E> {
        self.backend.set_mode(pin, PinMode::Output)
    }

    pub fn release(&mut self, pin: u8) -> Result<(), E> {
        self.backend.set_mode(pin, PinMode::Input)
    }

    /// Hold the current levels for one bit delay.
    pub fn settle(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }
}
