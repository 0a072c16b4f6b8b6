//! LS-8 emulator CLI.
//!
//! This binary loads an LS-8 program image and runs it. It performs:
//! 1. **Loading:** Reads the image (default `programs/mult.ls8`) and reports its size.
//! 2. **Running:** Executes until `HLT`, a fault, or the optional step limit.
//! 3. **Reporting:** Prints fault diagnostics and, on request, run statistics.
//!
//! `PRN` output and the unknown-opcode notice go to stdout; logs, traces, fault
//! diagnostics, and statistics go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ls8_core::common::error::{EXIT_LOAD_ERROR, Fault};
use ls8_core::config::Config;
use ls8_core::sim::loader;
use ls8_core::sim::{SimError, Simulator};

/// Program image run when none is given.
const DEFAULT_PROGRAM: &str = "programs/mult.ls8";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit CPU emulator",
    long_about = "Load an LS-8 program image (one base-2 byte per line, `#` comments) and run it.\n\nExit status: 0 on HLT, 1 on a load or config error, 2 on an unknown opcode, 3 on any other fault, 4 when --max-steps is reached.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 programs/sctest.ls8 --trace\n  ls8 programs/stack.ls8 --stats"
)]
struct Cli {
    /// Program image to run.
    #[arg(default_value = DEFAULT_PROGRAM)]
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a trace line before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print run statistics after the program stops.
    #[arg(short, long)]
    stats: bool,

    /// Stop after this many instructions (overrides the config file).
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("[!] {e}");
            process::exit(EXIT_LOAD_ERROR);
        }),
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if let Some(limit) = cli.max_steps {
        config.general.max_steps = Some(limit);
    }
    if let Err(e) = config.validate() {
        eprintln!("[!] {e}");
        process::exit(EXIT_LOAD_ERROR);
    }

    let mut sim = Simulator::new(&config);

    println!("Loading...");
    let loaded = loader::load_program(&cli.program).and_then(|program| sim.load(&program));
    match loaded {
        Ok(bytes) => {
            info!(program = %cli.program.display(), bytes, "program loaded");
            println!("{bytes} bytes. Done.");
        }
        Err(e) => {
            eprintln!("[!] {e}");
            process::exit(e.exit_code());
        }
    }

    let result = sim.run();
    let needs_dump = report_outcome(&result, &mut io::stdout().lock(), &mut io::stderr().lock())
        .unwrap_or(false);
    if needs_dump {
        sim.cpu.dump_state();
    }

    if cli.stats {
        sim.cpu.stats.print();
    }

    process::exit(Simulator::exit_code(&result));
}

/// Writes the end-of-run diagnostic.
///
/// An unknown opcode prints the `Instruction N not implemented. Halting.`
/// notice on `out` (stdout) and the full fault on `err`. Every other failure
/// goes to `err` only.
///
/// # Returns
///
/// Whether the caller should follow up with a register dump.
fn report_outcome(
    result: &Result<(), SimError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(SimError::Fault(fault @ Fault::UnknownOpcode { opcode, .. })) => {
            writeln!(out, "Instruction {opcode} not implemented. Halting.")?;
            out.flush()?;
            writeln!(err, "[!] {fault}")?;
            Ok(false)
        }
        Err(e) => {
            writeln!(err, "\n[!] FATAL: {e}")?;
            Ok(true)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set. Otherwise warnings are shown, plus per-step trace
/// lines when `trace` is on.
fn init_logging(trace: bool) {
    let default_filter = if trace {
        "warn,ls8::trace=trace"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
