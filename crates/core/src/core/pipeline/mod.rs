//! The 5-stage pipeline state machine.
//!
//! This module orchestrates the per-cycle behavior: latch shifting, stage
//! evaluation order, hazard interlocks, branch redirects, the exception
//! latch, and statistics updates. It provides:
//! 1. **Latches:** One [`latches::StageLatch`] per stage (IF, ID, EX, MEM, WB).
//! 2. **Hazards:** RAW detection and the advisory forwarding unit.
//! 3. **Stages:** Fetch, decode, execute, memory, and writeback logic.

pub mod hazards;
pub mod latches;
pub mod stages;

use crate::config::Config;
use crate::core::arch::CpuState;
use crate::core::units::{BranchPredictor, Cache};
use crate::isa::disasm;
use crate::mem::Ram;
use crate::stats::Statistics;
use latches::StageLatch;

/// A pending PC redirect, applied at the end of the cycle that raised it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Redirect {
    target: u32,
    /// Execute-raised redirects squash both younger slots (IF and ID);
    /// a Decode-time predicted-taken branch squashes only IF.
    squash_id: bool,
}

/// The 5-stage in-order pipeline.
///
/// Owns the architectural state, statistics, branch predictor, instruction
/// cache, and the five stage latches; borrows the RAM for the simulation
/// scope. The driver initializes memory before construction and reads it
/// back after the borrow ends.
pub struct Pipeline<'m> {
    pub(crate) ram: &'m mut Ram,
    /// Architectural register files, PC, and exception latch.
    pub cpu: CpuState,
    /// Aggregate counters, updated from every stage.
    pub stats: Statistics,
    /// Per-cycle trace output on stderr.
    pub trace: bool,

    /// Two-bit branch predictor, consulted in Decode and trained in Execute.
    pub predictor: BranchPredictor,
    /// Instruction cache, probed during fetch (miss accounting only).
    pub icache: Cache,

    /// IF stage latch.
    pub if_id: StageLatch,
    /// ID stage latch.
    pub id_ex: StageLatch,
    /// EX stage latch.
    pub ex_mem: StageLatch,
    /// MEM stage latch.
    pub mem_wb: StageLatch,
    /// WB stage latch.
    pub wb_latch: StageLatch,

    /// Whether the EX latch was loaded by this cycle's shift. A latch held
    /// in place by a memory freeze must not re-execute.
    pub(crate) ex_fresh: bool,
    /// Whether this cycle's shift was suppressed by a stalled MEM stage.
    pub(crate) mem_frozen: bool,
    pub(crate) redirect: Option<Redirect>,
}

impl<'m> Pipeline<'m> {
    /// Creates a pipeline bound to `ram` with the given configuration.
    pub fn new(ram: &'m mut Ram, config: &Config) -> Self {
        Self {
            ram,
            cpu: CpuState::new(),
            stats: Statistics::default(),
            trace: config.trace,
            predictor: BranchPredictor::new(config.predictor.entries),
            icache: Cache::new(&config.cache),
            if_id: StageLatch::bubble(),
            id_ex: StageLatch::bubble(),
            ex_mem: StageLatch::bubble(),
            mem_wb: StageLatch::bubble(),
            wb_latch: StageLatch::bubble(),
            ex_fresh: false,
            mem_frozen: false,
            redirect: None,
        }
    }

    /// Advances the simulation by exactly one cycle.
    ///
    /// Ordering per cycle:
    /// 1. A latched exception is dispatched instead of advancing.
    /// 2. Writeback retires the current WB latch.
    /// 3. Latches shift backward (WB ← MEM ← EX ← ID ← IF), honoring
    ///    producer-side stall flags.
    /// 4. MEM, EX, ID, and IF logic run on the post-shift latches.
    /// 5. At most one redirect applies (Execute outranks Decode), squashing
    ///    the younger slots.
    /// 6. The cycle counter advances and the RAM latency model ticks.
    pub fn tick(&mut self) {
        if self.cpu.exception.is_some() {
            self.handle_exception();
            return;
        }

        if self.trace {
            self.print_pipeline_diagram();
        }

        self.redirect = None;
        stages::wb_stage(self);
        self.shift();
        stages::mem_stage(self);
        stages::ex_stage(self);
        stages::id_stage(self);
        stages::if_stage(self);
        self.apply_redirect();

        self.stats.total_cycles += 1;
        self.ram.tick();
    }

    /// Shifts the stage latches backward for this cycle.
    ///
    /// A stalled MEM latch suppresses the entire shift: WB receives a
    /// bubble and every older latch holds so the memory access can retry.
    /// A stalled ID latch injects a bubble into EX and holds ID and IF.
    /// Stall flags clear here so each stage re-evaluates its condition.
    fn shift(&mut self) {
        self.ex_fresh = false;

        if self.mem_wb.stall {
            self.mem_wb.stall = false;
            self.wb_latch = StageLatch::bubble();
            self.mem_frozen = true;
            return;
        }
        self.mem_frozen = false;

        self.wb_latch = self.mem_wb;
        self.mem_wb = self.ex_mem;

        if self.id_ex.stall {
            self.id_ex.stall = false;
            self.ex_mem = StageLatch::bubble();
        } else {
            self.ex_mem = self.id_ex;
            self.ex_fresh = !self.ex_mem.bubble;
            self.id_ex = self.if_id;
            self.if_id = StageLatch::bubble();
        }
    }

    /// Records a redirect request for this cycle.
    pub(crate) fn request_redirect(&mut self, target: u32, squash_id: bool) {
        self.redirect = Some(Redirect { target, squash_id });
    }

    /// Applies the pending redirect, if any: steer the PC and squash the
    /// younger latches (their stall flags die with them).
    fn apply_redirect(&mut self) {
        if let Some(redirect) = self.redirect.take() {
            self.cpu.pc = redirect.target;
            self.if_id = StageLatch::bubble();
            if redirect.squash_id {
                self.id_ex = StageLatch::bubble();
            }
        }
    }

    /// Dispatches a latched exception: diagnostic, counter, hard restart.
    ///
    /// All latches, the PC, and both register files reset; statistics,
    /// predictor, and cache state survive so counters stay monotonic.
    fn handle_exception(&mut self) {
        if let Some(exception) = self.cpu.exception.take() {
            eprintln!("[!] {}", exception);
            self.stats.exceptions += 1;
        }

        self.cpu.reset();
        self.if_id = StageLatch::bubble();
        self.id_ex = StageLatch::bubble();
        self.ex_mem = StageLatch::bubble();
        self.mem_wb = StageLatch::bubble();
        self.wb_latch = StageLatch::bubble();
        self.ex_fresh = false;
        self.mem_frozen = false;
        self.redirect = None;
    }

    /// Prints the five stage slots on one line, oldest stage rightmost.
    pub fn print_pipeline_diagram(&self) {
        let fmt_stage = |latch: &StageLatch| -> String {
            if latch.bubble {
                format!("[{:^12}]", "--------")
            } else {
                format!("[{:^12}]", disasm::disasm(&latch.inst))
            }
        };

        eprintln!(
            "{} -> {} -> {} -> {} -> {}",
            fmt_stage(&self.if_id),
            fmt_stage(&self.id_ex),
            fmt_stage(&self.ex_mem),
            fmt_stage(&self.mem_wb),
            fmt_stage(&self.wb_latch),
        );
    }
}
