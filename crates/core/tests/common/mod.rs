//! Shared test infrastructure.
//!
//! Helpers for assembling a program into a fresh RAM and driving the
//! pipeline a fixed number of cycles. Tests construct the pipeline
//! themselves because it borrows the RAM for the simulation scope.

use rv32sim_core::Pipeline;
use rv32sim_core::config::Config;
use rv32sim_core::mem::Ram;
use rv32sim_core::sim::loader;

/// A RAM (default geometry) with `words` loaded at address 0.
///
/// Uses the image loader path, so no write latency is pending afterward.
pub fn ram_with_program(words: &[u32]) -> Ram {
    let mut ram = Ram::from_config(&Config::default());
    ram.load_at(&loader::words_to_image(words), 0);
    ram
}

/// Drains any pending write latency so a simulation starts on an idle RAM.
pub fn drain(ram: &mut Ram) {
    while ram.is_waiting() {
        ram.tick();
    }
}

/// Advances the pipeline `n` cycles.
pub fn tick_n(pipeline: &mut Pipeline<'_>, n: usize) {
    for _ in 0..n {
        pipeline.tick();
    }
}
