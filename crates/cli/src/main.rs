//! RV32 pipeline simulator CLI.
//!
//! This binary provides the entry points for the simulator:
//! 1. **Run:** Execute a raw little-endian program image loaded at address 0.
//! 2. **Demo:** Assemble the reference vector-add program, run it, and
//!    validate the output region.

use clap::{Parser, Subcommand};
use std::{fs, process};

use rv32sim_core::config::Config;
use rv32sim_core::isa::encode;
use rv32sim_core::mem::Ram;
use rv32sim_core::sim::{self, RunOutcome, loader};

/// Base address of the A input array in the demo layout.
const DEMO_A_BASE: u32 = 0x1000;
/// Base address of the B input array in the demo layout.
const DEMO_B_BASE: u32 = 0x2000;
/// Base address of the C output array in the demo layout.
const DEMO_C_BASE: u32 = 0x3000;
/// Demo element cap: the regions are 4 KiB apart, 1024 floats each.
const DEMO_MAX_ELEMENTS: usize = 1024;

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "Cycle-accurate 5-stage RV32 pipeline simulator",
    long_about = "Run a raw program image or the built-in vector-add demo.\n\nExamples:\n  rv32sim run -f program.bin --halt-pc 0x34\n  rv32sim demo -n 256 --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a raw little-endian program image, loaded at address 0.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (all fields optional).
        #[arg(long)]
        config: Option<String>,

        /// Halt sentinel: address of the terminating jump-to-self slot.
        #[arg(long, value_parser = parse_u32)]
        halt_pc: Option<u32>,

        /// Emit the per-cycle pipeline trace on stderr.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of the human report.
        #[arg(long)]
        json: bool,
    },

    /// Run the reference vector-add program (C[i] = A[i] + B[i]) and
    /// validate the output region.
    Demo {
        /// Number of elements per array (1..=1024).
        #[arg(short = 'n', long, default_value_t = 256)]
        elements: usize,

        /// Emit the per-cycle pipeline trace on stderr.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of the human report.
        #[arg(long)]
        json: bool,
    },
}

/// Accepts decimal or 0x-prefixed hexadecimal addresses.
fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            halt_pc,
            trace,
            json,
        } => cmd_run(file, config, halt_pc, trace, json),
        Commands::Demo {
            elements,
            trace,
            json,
        } => cmd_demo(elements, trace, json),
    }
}

/// Loads a JSON configuration file, or the defaults when none is given.
fn load_config(path: Option<String>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };

    let text = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("[!] could not read config '{}': {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("[!] invalid config '{}': {}", path, e);
        process::exit(1);
    })
}

/// Prints the outcome in the requested format and reports non-completion.
fn report(outcome: &RunOutcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(&outcome.stats) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("[!] could not serialize statistics: {}", e);
                process::exit(1);
            }
        }
    } else {
        outcome.stats.print();
    }

    if !outcome.halted {
        eprintln!(
            "[!] cycle cap reached after {} cycles (pc={:#010x})",
            outcome.stats.total_cycles, outcome.cpu.pc
        );
        process::exit(1);
    }
}

fn cmd_run(file: String, config: Option<String>, halt_pc: Option<u32>, trace: bool, json: bool) {
    let mut config = load_config(config);
    config.trace |= trace;
    if halt_pc.is_some() {
        config.run.halt_pc = halt_pc;
    }

    let image = loader::load_program(&file).unwrap_or_else(|e| {
        eprintln!("[!] could not read program '{}': {}", file, e);
        process::exit(1);
    });

    let mut ram = Ram::from_config(&config);
    ram.load_at(&image, 0);

    println!(
        "[*] running '{}' ({} bytes, ram {} KiB)",
        file,
        image.len(),
        ram.size() / 1024
    );

    let outcome = sim::run(&mut ram, &config);
    report(&outcome, json);
}

/// Assembles the reference vector-add loop.
///
/// Layout: pointers in x1..x3, counter in x4, loop body of nine
/// instructions, and a jump-to-self terminator whose address doubles as the
/// halt sentinel.
fn demo_program(elements: usize) -> (Vec<u32>, u32) {
    let program = vec![
        encode::lui(1, DEMO_A_BASE >> 12),
        encode::lui(2, DEMO_B_BASE >> 12),
        encode::lui(3, DEMO_C_BASE >> 12),
        encode::addi(4, 0, elements as i32),
        // loop:
        encode::flw(1, 1, 0),
        encode::flw(2, 2, 0),
        encode::fadd_s(3, 1, 2),
        encode::fsw(3, 3, 0),
        encode::addi(1, 1, 4),
        encode::addi(2, 2, 4),
        encode::addi(3, 3, 4),
        encode::addi(4, 4, -1),
        encode::bnez(4, -32),
        // done:
        encode::j(0),
    ];

    let halt_pc = (program.len() as u32 - 1) * 4;
    (program, halt_pc)
}

fn cmd_demo(elements: usize, trace: bool, json: bool) {
    if elements == 0 || elements > DEMO_MAX_ELEMENTS {
        eprintln!("[!] element count must be 1..={}", DEMO_MAX_ELEMENTS);
        process::exit(1);
    }

    let (program, halt_pc) = demo_program(elements);

    let mut config = Config::default();
    config.trace = trace;
    config.run.halt_pc = Some(halt_pc);

    let mut ram = Ram::from_config(&config);
    ram.load_at(&loader::words_to_image(&program), 0);

    // A[i] = i + 1, B[i] = 2i, C zeroed; stride 4 throughout.
    for i in 0..elements {
        let offset = (i * 4) as u32;
        ram.write_float(DEMO_A_BASE + offset, (i + 1) as f32);
        ram.write_float(DEMO_B_BASE + offset, (2 * i) as f32);
        ram.write_float(DEMO_C_BASE + offset, 0.0);
    }

    println!(
        "[*] vector-add demo: {} elements, halt sentinel {:#x}",
        elements, halt_pc
    );

    let outcome = sim::run(&mut ram, &config);

    let mut mismatches = 0;
    for i in 0..elements {
        let expected = (3 * i + 1) as f32;
        let got = ram.read_float(DEMO_C_BASE + (i * 4) as u32);
        if got != expected {
            if mismatches < 8 {
                eprintln!("[!] C[{}] = {} (expected {})", i, got, expected);
            }
            mismatches += 1;
        }
    }

    report(&outcome, json);

    if mismatches > 0 {
        eprintln!(
            "[!] validation FAILED: {}/{} mismatches",
            mismatches, elements
        );
        process::exit(1);
    }
    println!("[*] validation passed: {} elements", elements);
}
