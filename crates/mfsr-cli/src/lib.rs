//! MFSR demonstration driver
//!
//! Seeds a register, steps it, and renders what comes out. With the default
//! configuration this prints the 20 states of the reference register
//! (16 bits, taps `{0, 4, 7}`, seed `0x95c1`), one nibble-grouped line each:
//!
//! ```text
//! 1001 0101 1100 0001
//! 0100 1010 1110 0000
//! 1010 0101 0111 0000
//! ...
//! ```

mod config;
mod error;
mod render;

pub use config::{parse_seed, Cli, DemoConfig, OutputMode};
pub use error::{Error, Result};
pub use render::{render_binary, render_bits};

use std::io::Write;

use mfsr_core::{detect_cycle, Mfsr, RegisterWord, TapSet};

/// Run the demo described by `config`, writing its output to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<()> {
    match config.width {
        8 => run_width::<u8>(config, out),
        16 => run_width::<u16>(config, out),
        32 => run_width::<u32>(config, out),
        64 => run_width::<u64>(config, out),
        other => Err(Error::UnsupportedWidth(other)),
    }
}

fn run_width<W: RegisterWord>(config: &DemoConfig, out: &mut impl Write) -> Result<()> {
    let seed = W::from_u128(config.seed as u128).ok_or(Error::InvalidSeed {
        seed: config.seed,
        width: W::BITS,
    })?;
    let taps = TapSet::<W>::new(config.taps.iter().copied())?;

    tracing::info!(
        width = W::BITS,
        taps = %taps,
        seed = format_args!("{:#x}", seed),
        mode = ?config.mode,
        "Running MFSR"
    );

    match config.mode {
        OutputMode::States => {
            let mut mfsr = Mfsr::new(seed, taps);
            for state in mfsr.snapshots().take(config.steps) {
                writeln!(out, "{}", render_binary(state))?;
            }
        }
        OutputMode::Bits => {
            let mut mfsr = Mfsr::new(seed, taps);
            writeln!(out, "{}", render_bits(mfsr.bits().take(config.steps)))?;
        }
        OutputMode::Cycle => match detect_cycle(seed, &taps, config.max_steps) {
            Some(cycle) => {
                writeln!(out, "tail: {}", cycle.tail)?;
                writeln!(out, "period: {}", cycle.period)?;
            }
            None => {
                tracing::warn!(max_steps = config.max_steps, "Cycle detection gave up");
                writeln!(out, "no cycle found within {} steps", config.max_steps)?;
            }
        },
    }

    Ok(())
}
