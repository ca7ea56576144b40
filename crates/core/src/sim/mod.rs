//! Reference run loop and program loading.

pub mod loader;

use crate::config::Config;
use crate::core::arch::CpuState;
use crate::core::pipeline::Pipeline;
use crate::mem::Ram;
use crate::stats::Statistics;

pub use loader::load_program;

/// Result of a completed run: final statistics and architectural state.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Counters at the last simulated cycle.
    pub stats: Statistics,
    /// Architectural state snapshot (PC and register files).
    pub cpu: CpuState,
    /// True if the halt sentinel fired; false means the cycle cap hit.
    pub halted: bool,
}

/// Runs a program already loaded into `ram` until termination.
///
/// The simulation ends when `config.run.halt_pc` is reached after the
/// warm-up threshold, or at the `max_cycles` cap. The fetch stream passes
/// through the sentinel address transiently on every loop iteration of a
/// typical program, so the sentinel only fires once the *executing*
/// instruction sits at the sentinel too, which is the steady state of a
/// jump-to-self terminator.
pub fn run(ram: &mut Ram, config: &Config) -> RunOutcome {
    let mut pipeline = Pipeline::new(ram, config);
    let mut halted = false;

    while pipeline.stats.total_cycles < config.run.max_cycles {
        pipeline.tick();

        if let Some(halt_pc) = config.run.halt_pc {
            if pipeline.stats.total_cycles >= config.run.min_cycles
                && pipeline.cpu.pc == halt_pc
                && !pipeline.ex_mem.bubble
                && pipeline.ex_mem.pc == halt_pc
            {
                halted = true;
                break;
            }
        }
    }

    RunOutcome {
        stats: pipeline.stats.clone(),
        cpu: pipeline.cpu.clone(),
        halted,
    }
}
