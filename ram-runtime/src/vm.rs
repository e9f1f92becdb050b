//! Random Access Machine execution engine

use crate::cost::{CostMeter, CostReport};
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::observer::{NoopObserver, Observer, Snapshot};
use crate::registers::RegisterStore;
use crate::state::{MachineState, Status};
use ram_spec::{Address, Program, Value};
use tracing::{debug, warn};

/// Machine configuration
#[derive(Debug, Clone, Default)]
pub struct MachineConfig {
    /// Maximum number of cycles `run` executes before giving up
    ///
    /// `None` runs until the machine halts or faults.
    pub max_cycles: Option<u64>,

    /// Permit STORE to target the accumulator (register 0)
    pub allow_accumulator_store: bool,
}

/// Result of a halted run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Final accumulator value: the machine's result
    pub accumulator: Value,

    /// Number of instructions executed
    pub cycles: u64,

    /// Logarithmic time/space cost
    pub cost: CostReport,

    /// Final register contents
    pub registers: RegisterStore,
}

/// RAM virtual machine
pub struct Machine {
    /// Loaded program (immutable once loaded)
    program: Program,

    /// Registers, PC, status
    state: MachineState,

    /// Configuration
    config: MachineConfig,

    /// Cost accounting
    cost: CostMeter,

    /// Error that faulted the machine
    fault: Option<RuntimeError>,
}

impl Machine {
    /// Create a machine with the program's initial registers, PC at 1
    pub fn new(program: Program, config: MachineConfig) -> Self {
        let registers = RegisterStore::from_values(program.registers.iter().cloned());
        let cost = CostMeter::new(&registers);

        debug!(
            instructions = program.len(),
            registers = registers.len(),
            "loaded program"
        );

        Self {
            program,
            state: MachineState::new(registers),
            config,
            cost,
            fault: None,
        }
    }

    /// Execute one fetch-decode-execute cycle
    pub fn step(&mut self) -> Result<Status> {
        self.step_with(&mut NoopObserver)
    }

    /// Execute one cycle, reporting it to `observer` first
    ///
    /// A halted machine stays halted; a faulted machine keeps returning its fault.
    pub fn step_with<O>(&mut self, observer: &mut O) -> Result<Status>
    where
        O: Observer + ?Sized,
    {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.state.is_halted() {
            return Ok(Status::Halted);
        }

        match self.cycle(observer) {
            Ok(()) => Ok(self.state.status),
            Err(err) => {
                warn!(pc = self.state.pc, error = %err, "machine faulted");
                self.state.status = Status::Faulted;
                self.fault = Some(err.clone());
                Err(err)
            }
        }
    }

    fn cycle<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: Observer + ?Sized,
    {
        let pc = self.state.pc;
        let instruction = self
            .program
            .fetch(pc)
            .ok_or(RuntimeError::AddressOutOfProgram { pc })?;

        observer.on_cycle(&Snapshot {
            cycle: self.state.cycles,
            pc,
            instruction,
            registers: &self.state.registers,
        });

        debug!(cycle = self.state.cycles, pc, %instruction, "execute");

        let executed = execute(instruction, &mut self.state, &self.config)?;
        self.cost.record(&executed, &self.state.registers);
        self.state.cycles += 1;
        self.state.settle();

        if self.state.is_halted() {
            debug!(cycles = self.state.cycles, "machine halted");
        }
        Ok(())
    }

    /// Run until the machine halts
    pub fn run(&mut self) -> Result<ExecutionResult> {
        self.run_with(&mut NoopObserver)
    }

    /// Run until the machine halts, reporting every cycle to `observer`
    ///
    /// Stops with [`RuntimeError::CycleLimitExceeded`] once `max_cycles`
    /// instructions have executed; the machine is left running in that case.
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<ExecutionResult>
    where
        O: Observer + ?Sized,
    {
        loop {
            if self.state.status == Status::Running {
                if let Some(limit) = self.config.max_cycles {
                    if self.state.cycles >= limit {
                        return Err(RuntimeError::CycleLimitExceeded { limit });
                    }
                }
            }

            if self.step_with(observer)? == Status::Halted {
                break;
            }
        }

        Ok(self.halted_result())
    }

    /// Result of the run, once halted
    pub fn result(&self) -> Option<ExecutionResult> {
        self.state.is_halted().then(|| self.halted_result())
    }

    fn halted_result(&self) -> ExecutionResult {
        ExecutionResult {
            accumulator: self.state.accumulator(),
            cycles: self.state.cycles,
            cost: self.cost.report(),
            registers: self.state.registers.clone(),
        }
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn pc(&self) -> Address {
        self.state.pc
    }

    pub fn cycles(&self) -> u64 {
        self.state.cycles
    }

    /// Current accumulator value
    pub fn accumulator(&self) -> Value {
        self.state.accumulator()
    }

    pub fn registers(&self) -> &RegisterStore {
        &self.state.registers
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Error that faulted the machine, if any
    pub fn fault(&self) -> Option<&RuntimeError> {
        self.fault.as_ref()
    }

    /// Cost accumulated so far
    pub fn cost(&self) -> CostReport {
        self.cost.report()
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &MachineState {
        &self.state
    }
}
