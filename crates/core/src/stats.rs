//! Simulation statistics collection and reporting.
//!
//! This module tracks the performance counters of a run. It provides:
//! 1. **Cycle accounting:** Total cycles, completed instructions, CPI.
//! 2. **Stalls:** Data-hazard, memory, control-hazard, and RAM wait cycles.
//! 3. **Branch prediction:** Conditional branch count, mispredictions, rate.
//! 4. **Memory:** Cache miss count.
//! 5. **Exceptions:** Fatal-exception dispatch count.
//!
//! Every counter is monotonically non-decreasing across ticks.

use serde::Serialize;

/// Aggregate counters for a simulation run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Statistics {
    /// Total simulated cycles.
    pub total_cycles: u64,
    /// Instructions retired in Writeback.
    pub instructions_completed: u64,
    /// Cycles lost to RAW-hazard interlocks.
    pub data_hazard_stalls: u64,
    /// Cycles a memory instruction waited for the RAM in MEM.
    pub memory_stalls: u64,
    /// Cycles charged for squashed slots after redirects.
    pub control_hazard_stalls: u64,
    /// Fetch cycles lost to a busy RAM.
    pub ram_wait_cycles: u64,
    /// Instruction and data cache misses.
    pub cache_misses: u64,
    /// Conditional branches whose resolved direction disagreed with the
    /// Decode-time prediction.
    pub branch_mispredictions: u64,
    /// Fatal exceptions dispatched.
    pub exceptions: u64,
    /// Conditional branches resolved in Execute.
    pub total_branches: u64,
}

impl Statistics {
    /// Cycles per instruction. Zero completed instructions reports 0.0.
    pub fn cpi(&self) -> f64 {
        if self.instructions_completed == 0 {
            0.0
        } else {
            self.total_cycles as f64 / self.instructions_completed as f64
        }
    }

    /// Fraction of conditional branches mispredicted. Zero branches
    /// reports 0.0.
    pub fn misprediction_rate(&self) -> f64 {
        if self.total_branches == 0 {
            0.0
        } else {
            self.branch_mispredictions as f64 / self.total_branches as f64
        }
    }

    /// Prints the full human-readable report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("RV32 PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.total_cycles);
        println!("sim_insts                {}", self.instructions_completed);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        let cyc = self.total_cycles.max(1);
        let pct = |n: u64| (n as f64 / cyc as f64) * 100.0;
        println!("STALLS");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.data_hazard_stalls,
            pct(self.data_hazard_stalls)
        );
        println!(
            "  stalls.control         {} ({:.2}%)",
            self.control_hazard_stalls,
            pct(self.control_hazard_stalls)
        );
        println!(
            "  stalls.memory          {} ({:.2}%)",
            self.memory_stalls,
            pct(self.memory_stalls)
        );
        println!(
            "  ram.wait_cycles        {} ({:.2}%)",
            self.ram_wait_cycles,
            pct(self.ram_wait_cycles)
        );
        println!("----------------------------------------------------------");
        println!("BRANCH PREDICTION");
        println!("  bp.branches            {}", self.total_branches);
        println!("  bp.mispredicts         {}", self.branch_mispredictions);
        println!(
            "  bp.mispredict_rate     {:.2}%",
            self.misprediction_rate() * 100.0
        );
        println!("----------------------------------------------------------");
        println!("MEMORY");
        println!("  cache.misses           {}", self.cache_misses);
        println!("  exceptions             {}", self.exceptions);
        println!("==========================================================");
    }
}
