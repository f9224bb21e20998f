//! LC-2K CLI — assemble, run, and disassemble.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/decode/assembly error
//! - 2: Runtime fault
//! - 3: Cycle limit exceeded

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lc2k", version, about = "Assembler and interpreter for the LC-2K ISA")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble source text into machine code (one decimal word per line)
    Assemble {
        input: PathBuf,

        /// Output file [default: input with a .mc extension]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Execute a machine-code file, tracing every cycle
    Run {
        input: PathBuf,

        /// Give up after this many instructions without a halt
        #[arg(short = 't', long)]
        max_cycles: Option<u64>,

        /// Only print the final state
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print a machine-code file as assembly text
    Disassemble { input: PathBuf },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors share exit code 1 with other input errors;
            // code 2 is reserved for runtime faults.
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            process::exit(code);
        }
    };

    let result = match cli.command {
        Command::Assemble { input, output } => commands::assemble(&input, output.as_deref()),
        Command::Run {
            input,
            max_cycles,
            quiet,
        } => commands::run(&input, max_cycles, quiet),
        Command::Disassemble { input } => commands::disassemble(&input),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
