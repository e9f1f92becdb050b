use anyhow::{Context, Result};
use clap::Parser;
use ram_runtime::{Machine, MachineConfig, Observer, Snapshot};
use ram_spec::Program;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Built-in program: multiply R1 and R2 by repeated addition
const DEMO: &str = "\
# multiply the two numbers in R1 and R2
# first line initialises the registers
0 3 6
# program text starts here
1  LOAD #0
2  STORE 3
3  LOAD 1
4  JZERO 11
5  SUB #1
6  STORE 1
7  LOAD 2
8  ADD 3
9  STORE 3
10 GOTO 3
11 LOAD 3
12 END 0
";

#[derive(Parser)]
#[command(name = "ram", about = "Random Access Machine interpreter")]
struct Cli {
    /// Program file. Runs a built-in multiplication demo when omitted.
    program: Option<PathBuf>,

    /// Print the machine status before every instruction.
    #[arg(short, long)]
    verbose: bool,

    /// Stop after this many instructions.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Allow STORE to write the accumulator (register 0).
    #[arg(long)]
    allow_accumulator_store: bool,
}

/// Prints one status line per cycle
struct StatusPrinter;

impl Observer for StatusPrinter {
    fn on_cycle(&mut self, snapshot: &Snapshot<'_>) {
        println!("{}", snapshot);
    }
}

fn load(cli: &Cli) -> Result<Program> {
    match &cli.program {
        Some(path) => {
            debug!(path = %path.display(), "loading program");
            ram_assembler::load(path)
                .with_context(|| format!("failed to load program `{}`", path.display()))
        }
        None => {
            println!("No program given, running the built-in demo:");
            println!("{}", DEMO);
            ram_assembler::assemble(DEMO).context("failed to load built-in demo")
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let program = load(cli)?;
    let config = MachineConfig {
        max_cycles: cli.max_cycles,
        allow_accumulator_store: cli.allow_accumulator_store,
    };

    info!(instructions = program.len(), "starting machine");
    let mut vm = Machine::new(program, config);
    let outcome = if cli.verbose {
        vm.run_with(&mut StatusPrinter)
    } else {
        vm.run()
    };

    let result = match outcome {
        Ok(result) => result,
        Err(err) if !err.is_fatal() => {
            warn!(cycles = vm.cycles(), pc = vm.pc(), "machine did not halt");
            return Err(anyhow::Error::new(err).context(format!(
                "machine still running at address {} with R0={}",
                vm.pc(),
                vm.accumulator()
            )));
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("execution faulted after {} cycles", vm.cycles())));
        }
    };

    println!(
        "result(R)={}, time(R)={}, space(R)={}",
        result.accumulator, result.cost.time, result.cost.space
    );
    Ok(())
}
