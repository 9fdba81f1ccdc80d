//! Start/stop conditions and LSB-first byte transfer.
//!
//! Every line transition is followed by exactly one settle. Callers bracket
//! each run of `write_byte` calls with `start` and `stop`.

use embedded_hal::delay::DelayNs;

use crate::line::{Lines, PinBackend};

/// Data falls while the clock is still released.
pub fn start<B, D, E>(lines: &mut Lines<B, D>) -> Result<(), E>
where
    B: PinBackend<Error = E>,
    D: DelayNs,
{
    lines.drive_low(lines.dio())?;
    lines.settle();
    Ok(())
}

/// Returns both lines to idle high, data rising last.
pub fn stop<B, D, E>(lines: &mut Lines<B, D>) -> Result<(), E>
where
    B: PinBackend<Error = E>,
    D: DelayNs,
{
    lines.drive_low(lines.dio())?;
    lines.settle();
    lines.release(lines.clk())?;
    lines.settle();
    lines.release(lines.dio())?;
    lines.settle();
    Ok(())
}

pub fn write_byte<B, D, E>(lines: &mut Lines<B, D>, value: u8) -> Result<(), E>
where
    B: PinBackend<Error = E>,
    D: DelayNs,
{
    let mut value = value;
    for _ in 0..8 {
        lines.drive_low(lines.clk())?;
        lines.settle();

        if value & 0x01 != 0 {
            lines.release(lines.dio())?;
        } else {
            lines.drive_low(lines.dio())?;
        }
        lines.settle();

        lines.release(lines.clk())?;
        lines.settle();
        value >>= 1;
    }

    // ack slot, the controller's answer is not sampled
    lines.drive_low(lines.clk())?;
    lines.settle();
    lines.release(lines.clk())?;
    lines.settle();
    lines.drive_low(lines.clk())?;
    lines.settle();
    Ok(())
}
