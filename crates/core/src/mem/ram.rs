//! Byte-addressed main memory with a wait-cycle latency model.
//!
//! The RAM owns the data cache and models store latency with a single
//! `wait_cycles` counter: a completed write leaves the memory busy, and the
//! pipeline observes the busy state as fetch and memory stalls. Reads are
//! immediate and do not consult the cache.
//!
//! Out-of-range 32-bit accesses are silent: writes are dropped, reads return
//! zero. The fatal-exception channel is not used for them.

use crate::config::{CacheConfig, Config, MemoryConfig};
use crate::core::units::Cache;

/// Main memory: contiguous byte array, latency counter, and the data cache.
#[derive(Clone, Debug)]
pub struct Ram {
    bytes: Vec<u8>,
    wait_cycles: u64,
    write_wait: u64,
    data_cache: Cache,
}

impl Ram {
    /// Creates a RAM of `size` bytes with the default cache geometry and
    /// write latency.
    pub fn new(size: usize) -> Self {
        Self::with_config(
            &MemoryConfig {
                ram_size: size,
                ..MemoryConfig::default()
            },
            &CacheConfig::default(),
        )
    }

    /// Creates a RAM from explicit memory and cache configuration.
    pub fn with_config(memory: &MemoryConfig, cache: &CacheConfig) -> Self {
        Self {
            bytes: vec![0; memory.ram_size],
            wait_cycles: 0,
            write_wait: memory.write_wait_cycles,
            data_cache: Cache::new(cache),
        }
    }

    /// Creates a RAM from the root configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_config(&config.memory, &config.cache)
    }

    /// RAM size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Copies `data` into memory starting at `addr`, clipping at the end of
    /// RAM. Bypasses the cache and latency model (program/data image load).
    pub fn load_at(&mut self, data: &[u8], addr: u32) {
        let base = addr as usize;
        if base >= self.bytes.len() {
            return;
        }
        let len = data.len().min(self.bytes.len() - base);
        self.bytes[base..base + len].copy_from_slice(&data[..len]);
    }

    /// Reads a little-endian 32-bit word. Out-of-range reads return 0.
    pub fn read32(&self, addr: u32) -> u32 {
        let base = addr as usize;
        if base.saturating_add(3) >= self.bytes.len() {
            return 0;
        }
        u32::from_le_bytes([
            self.bytes[base],
            self.bytes[base + 1],
            self.bytes[base + 2],
            self.bytes[base + 3],
        ])
    }

    /// Writes a little-endian 32-bit word through the data cache.
    ///
    /// Returns `Some(hit)` for a completed write and `None` for an
    /// out-of-range address (the write is dropped). A completed write always
    /// leaves `wait_cycles` at exactly the configured write latency: the
    /// final assignment overwrites the miss-path accumulation.
    pub fn write32(&mut self, addr: u32, value: u32) -> Option<bool> {
        let base = addr as usize;
        if base.saturating_add(3) >= self.bytes.len() {
            return None;
        }

        let hit = self.data_cache.access(addr, true);
        if !hit {
            self.wait_cycles += self.write_wait;
        }

        self.bytes[base..base + 4].copy_from_slice(&value.to_le_bytes());
        self.wait_cycles = self.write_wait;

        Some(hit)
    }

    /// Reads a 32-bit word and reinterprets it as an IEEE-754 single.
    pub fn read_float(&self, addr: u32) -> f32 {
        f32::from_bits(self.read32(addr))
    }

    /// Writes an IEEE-754 single as its 32-bit pattern. Same return
    /// semantics as [`Ram::write32`].
    pub fn write_float(&mut self, addr: u32, value: f32) -> Option<bool> {
        self.write32(addr, value.to_bits())
    }

    /// Whether the memory is still busy completing a write.
    pub fn is_waiting(&self) -> bool {
        self.wait_cycles > 0
    }

    /// Remaining wait cycles.
    pub fn wait_cycles(&self) -> u64 {
        self.wait_cycles
    }

    /// Advances the latency model by one cycle. Called once per pipeline
    /// cycle, after all stage logic.
    pub fn tick(&mut self) {
        if self.wait_cycles > 0 {
            self.wait_cycles -= 1;
        }
    }
}
