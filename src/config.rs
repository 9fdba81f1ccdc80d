use crate::constants::{DEFAULT_BIT_DELAY_US, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};

/// Startup configuration of a display.
///
/// Built once by the application (from its own parameter source) and handed
/// to [`crate::Tm1637::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// GPIO number of the clock line.
    pub clk: u8,
    /// GPIO number of the data line.
    pub dio: u8,
    /// Display control brightness, 0-15. Resent with every update.
    #[cfg_attr(feature = "serde", serde(default = "default_brightness"))]
    pub brightness: u8,
    /// Minimum time each line holds a level, in microseconds.
    #[cfg_attr(feature = "serde", serde(default = "default_bit_delay_us"))]
    pub bit_delay_us: u32,
}

#[cfg(feature = "serde")]
fn default_brightness() -> u8 {
    DEFAULT_BRIGHTNESS
}

#[cfg(feature = "serde")]
fn default_bit_delay_us() -> u32 {
    DEFAULT_BIT_DELAY_US
}

impl Config {
    pub const fn new(clk: u8, dio: u8) -> Self {
        Self {
            clk,
            dio,
            brightness: DEFAULT_BRIGHTNESS,
            bit_delay_us: DEFAULT_BIT_DELAY_US,
        }
    }

    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn with_bit_delay_us(mut self, bit_delay_us: u32) -> Self {
        self.bit_delay_us = bit_delay_us;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clk == self.dio {
            return Err(ConfigError::SamePin(self.clk));
        }
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::InvalidBrightness(self.brightness));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Clock and data were given the same GPIO number.
    SamePin(u8),
    InvalidBrightness(u8),
}
