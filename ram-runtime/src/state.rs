//! Machine state for the RAM

use crate::registers::RegisterStore;
use ram_spec::{Address, Value, ENTRY_POINT, HALT};

/// Lifecycle of a machine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// PC != 0, instructions execute
    Running,
    /// PC == 0, the accumulator is the result
    Halted,
    /// Stopped by an unrecoverable error
    Faulted,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }
}

/// Registers, program counter and bookkeeping of one machine
#[derive(Debug, Clone)]
pub struct MachineState {
    /// Register store (R0 is the accumulator)
    pub registers: RegisterStore,

    /// Program counter
    pub pc: Address,

    /// Completed instruction count
    pub cycles: u64,

    /// Lifecycle status
    pub status: Status,
}

impl MachineState {
    pub fn new(registers: RegisterStore) -> Self {
        Self {
            registers,
            pc: ENTRY_POINT,
            cycles: 0,
            status: Status::Running,
        }
    }

    /// Advance to the next instruction
    #[inline]
    pub fn advance(&mut self) {
        self.pc += 1;
    }

    /// Jump to a program address
    #[inline]
    pub fn jump(&mut self, target: Address) {
        self.pc = target;
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    /// Accumulator value without materialising it
    pub fn accumulator(&self) -> Value {
        self.registers.peek(ram_spec::ACCUMULATOR)
    }

    /// Mark the machine halted if the PC reached the halt sentinel
    pub(crate) fn settle(&mut self) {
        if self.pc == HALT {
            self.status = Status::Halted;
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new(RegisterStore::new())
    }
}
