//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (RAM, cache, branch predictor).
//! 2. **Structures:** Hierarchical config for memory, cache, predictor, and run
//!    control.
//!
//! Configuration is supplied as JSON (every field optional) or via
//! `Config::default()` for the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden in a JSON configuration file.
mod defaults {
    /// Total size of main memory (64 KiB).
    pub const RAM_SIZE: usize = 64 * 1024;

    /// Wait cycles imposed by a completed RAM write.
    ///
    /// A store leaves the memory busy for this many cycles; fetch and the
    /// MEM stage observe the busy state as stalls.
    pub const WRITE_WAIT_CYCLES: u64 = 2;

    /// Default cache size in bytes (1 KiB).
    pub const CACHE_SIZE: usize = 1024;

    /// Default cache block size in bytes.
    pub const CACHE_BLOCK: usize = 32;

    /// Default cache associativity (4 ways).
    pub const CACHE_WAYS: usize = 4;

    /// Default branch predictor table size (1024 two-bit counters).
    pub const PREDICTOR_ENTRIES: usize = 1024;

    /// Hard cap on simulated cycles for a single run.
    pub const MAX_CYCLES: u64 = 1_000_000;

    /// Warm-up cycles before the halt sentinel is considered.
    pub const MIN_CYCLES: u64 = 16;
}

/// Main memory configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// RAM size in bytes.
    pub ram_size: usize,
    /// Wait cycles assigned after each completed 32-bit write.
    pub write_wait_cycles: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
            write_wait_cycles: defaults::WRITE_WAIT_CYCLES,
        }
    }
}

/// Cache geometry configuration.
///
/// Sizes must be powers of two; the number of sets is derived as
/// `size_bytes / (block_bytes * ways)`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Total capacity in bytes.
    pub size_bytes: usize,
    /// Block (line) size in bytes.
    pub block_bytes: usize,
    /// Associativity (number of ways per set).
    pub ways: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            block_bytes: defaults::CACHE_BLOCK,
            ways: defaults::CACHE_WAYS,
        }
    }
}

/// Branch predictor configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Number of two-bit counters in the prediction table (power of two).
    pub entries: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            entries: defaults::PREDICTOR_ENTRIES,
        }
    }
}

/// Run-control configuration for the reference run loop.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Cycle cap; the run reports non-completion once this is reached.
    pub max_cycles: u64,
    /// Minimum cycles before the halt sentinel is honored.
    pub min_cycles: u64,
    /// Halt sentinel: address of the terminating jump-to-self slot.
    pub halt_pc: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
            min_cycles: defaults::MIN_CYCLES,
            halt_pc: None,
        }
    }
}

/// Root configuration for a simulation session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit a per-cycle pipeline diagram and stage trace on stderr.
    pub trace: bool,
    /// Main memory parameters.
    pub memory: MemoryConfig,
    /// Data/instruction cache geometry.
    pub cache: CacheConfig,
    /// Branch predictor parameters.
    pub predictor: PredictorConfig,
    /// Termination control for `sim::run`.
    pub run: RunConfig,
}
