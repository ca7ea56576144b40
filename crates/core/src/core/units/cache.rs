//! Set-associative cache model.
//!
//! Timing-only: the cache tracks which blocks are resident to classify
//! accesses as hits or misses, but stores no data; the backing RAM holds
//! the ground-truth bytes. Replacement is LRU, tracked with per-line
//! timestamps from a global monotonic access counter.

use crate::config::CacheConfig;

/// One cache line: residency flag, tag, and LRU timestamp.
#[derive(Clone, Copy, Debug, Default)]
struct CacheLine {
    valid: bool,
    tag: u32,
    last_access: u64,
}

/// Set-associative LRU cache.
///
/// Geometry comes from [`CacheConfig`]; with the defaults (1 KiB, 32-byte
/// blocks, 4 ways) this derives 8 sets.
#[derive(Clone, Debug)]
pub struct Cache {
    lines: Vec<CacheLine>, // index = set * ways + way
    num_sets: usize,
    ways: usize,
    block_shift: u32,
    tag_shift: u32,
    access_counter: u64,
}

impl Cache {
    /// Creates a cache with the given geometry.
    ///
    /// Sizes are expected to be powers of two; zero values fall back to a
    /// 1-way, one-set geometry rather than panicking.
    pub fn new(config: &CacheConfig) -> Self {
        let ways = config.ways.max(1);
        let block_bytes = config.block_bytes.max(1);
        let size_bytes = config.size_bytes.max(block_bytes * ways);

        let num_lines = size_bytes / block_bytes;
        let num_sets = (num_lines / ways).max(1);

        Self {
            lines: vec![CacheLine::default(); num_sets * ways],
            num_sets,
            ways,
            block_shift: block_bytes.trailing_zeros(),
            tag_shift: size_bytes.trailing_zeros(),
            access_counter: 0,
        }
    }

    /// Number of sets derived from the geometry.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Accesses `addr`, returning `true` on a hit.
    ///
    /// On a hit the line's timestamp advances to the next counter value.
    /// On a miss the block is installed, evicting the first invalid way or
    /// else the way with the oldest timestamp.
    pub fn access(&mut self, addr: u32, _is_write: bool) -> bool {
        self.access_counter += 1;

        let tag = addr >> self.tag_shift;
        let set_index = ((addr >> self.block_shift) as usize) & (self.num_sets - 1);
        let base_idx = set_index * self.ways;

        for i in 0..self.ways {
            let idx = base_idx + i;
            if self.lines[idx].valid && self.lines[idx].tag == tag {
                self.lines[idx].last_access = self.access_counter;
                return true;
            }
        }

        let mut victim_offset = 0;
        let mut oldest = u64::MAX;
        for i in 0..self.ways {
            let idx = base_idx + i;
            if !self.lines[idx].valid {
                victim_offset = i;
                break;
            }
            if self.lines[idx].last_access < oldest {
                oldest = self.lines[idx].last_access;
                victim_offset = i;
            }
        }

        self.lines[base_idx + victim_offset] = CacheLine {
            valid: true,
            tag,
            last_access: self.access_counter,
        };

        false
    }

    /// Returns whether the block containing `addr` is resident, without
    /// touching timestamps.
    pub fn contains(&self, addr: u32) -> bool {
        let tag = addr >> self.tag_shift;
        let set_index = ((addr >> self.block_shift) as usize) & (self.num_sets - 1);
        let base_idx = set_index * self.ways;

        (0..self.ways).any(|i| {
            let line = &self.lines[base_idx + i];
            line.valid && line.tag == tag
        })
    }
}
