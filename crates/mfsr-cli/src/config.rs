//! Demo configuration.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. [`DemoConfig::default`] (width 16, taps `0,4,7`, seed `0x95c1`, 20 lines)
//! 2. a JSON file given with `--config` / `MFSR_CONFIG`
//! 3. command line flags, or their `MFSR_*` environment variables

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What the demo prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One nibble-grouped binary line per state, seed first
    #[default]
    States,
    /// The feedback bit stream as a single line
    Bits,
    /// Tail and period of the seed's orbit
    Cycle,
}

/// Resolved demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Register width in bits (8, 16, 32 or 64)
    pub width: u32,
    /// Tap positions, validated when the run starts
    pub taps: Vec<u32>,
    /// Initial register contents
    pub seed: u64,
    /// Lines (states) or bits to print
    pub steps: usize,
    pub mode: OutputMode,
    /// Step budget for cycle detection
    pub max_steps: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: mfsr_core::REFERENCE_WIDTH,
            taps: mfsr_core::REFERENCE_TAPS.to_vec(),
            seed: mfsr_core::REFERENCE_SEED as u64,
            steps: 20,
            mode: OutputMode::States,
            max_steps: 1 << 20,
        }
    }
}

impl DemoConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Command line for `mfsr-demo`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mfsr-demo",
    version,
    about = "Step a majority feedback shift register and print its states"
)]
pub struct Cli {
    /// JSON config file; flags override its values
    #[arg(long, env = "MFSR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Register width in bits: 8, 16, 32 or 64
    #[arg(long, env = "MFSR_WIDTH")]
    pub width: Option<u32>,

    /// Comma separated tap positions, e.g. 0,4,7
    #[arg(long, env = "MFSR_TAPS", value_delimiter = ',')]
    pub taps: Option<Vec<u32>>,

    /// Seed: 0x-prefixed hex, 0b-prefixed binary, or decimal
    #[arg(long, env = "MFSR_SEED", value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Number of states (or bits) to print
    #[arg(long, env = "MFSR_STEPS")]
    pub steps: Option<usize>,

    /// Print the feedback bit stream instead of states
    #[arg(long, conflicts_with = "cycle")]
    pub bits: bool,

    /// Print tail and period of the seed's orbit
    #[arg(long)]
    pub cycle: bool,

    /// Step budget for --cycle
    #[arg(long)]
    pub max_steps: Option<u64>,
}

impl Cli {
    /// Merge defaults, the config file and flags into one configuration.
    pub fn resolve(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(taps) = &self.taps {
            config.taps = taps.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if self.bits {
            config.mode = OutputMode::Bits;
        } else if self.cycle {
            config.mode = OutputMode::Cycle;
        }

        Ok(config)
    }
}

/// Parse a seed literal: `0x95c1`, `0b1001_0101`, or `38337`.
pub fn parse_seed(s: &str) -> Result<u64> {
    let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
    let (digits, radix) = if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (cleaned.as_str(), 10)
    };

    u64::from_str_radix(digits, radix)
        .map_err(|e| Error::Parse(format!("invalid seed {:?}: {}", s, e)))
}
