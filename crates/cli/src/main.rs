//! LS-8 emulator CLI.
//!
//! This binary loads an `.ls8` program file and runs it to completion. It performs:
//! 1. **Load:** Parse the base-2 program text into memory at address 0.
//! 2. **Run:** Execute until `HLT`, writing `PRN` output to stdout.
//! 3. **Report:** On a fault, print a diagnostic and machine state to stderr and exit with status 1.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::Simulator;
use ls8_core::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit machine emulator",
    long_about = "Load an LS-8 program (one base-2 instruction byte per line, `#` comments) and run it until HLT.\n\nLogging goes to stderr and is controlled by RUST_LOG (default: warn).\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace programs/mult.ls8\n  ls8 --config run.json --stats programs/stack.ls8"
)]
struct Cli {
    /// Program file to load and run.
    program: Option<PathBuf>,

    /// Print a trace line to stderr before every instruction.
    #[arg(long)]
    trace: bool,

    /// JSON run configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print run statistics to stderr on exit.
    #[arg(long)]
    stats: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let Some(program) = cli.program else {
        eprintln!("LS-8 emulator: pass a program file to run");
        eprintln!();
        eprintln!("  ls8 <program.ls8>          Run a program");
        eprintln!("  ls8 --trace <program.ls8>  Run with per-instruction trace");
        eprintln!();
        eprintln!("  ls8 --help  for full options");
        process::exit(1);
    };

    let mut config = match cli.config {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }

    cmd_run(&program, &config, cli.stats);
}

/// Installs the stderr log subscriber, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads `program` and runs it until `HLT`.
///
/// On a load error or a CPU fault, prints a diagnostic to stderr and exits
/// with status 1. A fault also dumps the machine state.
fn cmd_run(program: &Path, config: &Config, show_stats: bool) {
    let mut sim = Simulator::new(config);

    match sim.load_file(program) {
        Ok(len) => tracing::info!(program = %program.display(), bytes = len, "loaded"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    match sim.run() {
        Ok(summary) => {
            tracing::debug!(cycles = summary.cycles, pc = summary.pc, "run complete");
            if show_stats {
                sim.cpu.stats.print();
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            sim.cpu.dump_state();
            if show_stats {
                sim.cpu.stats.print();
            }
            process::exit(1);
        }
    }
}
