//! Per-cycle observation hook
//!
//! The engine hands an observer a [`Snapshot`] of the machine right before
//! each instruction executes. Observers cannot influence execution.

use crate::registers::RegisterStore;
use ram_spec::{Address, Instruction};
use std::fmt;

/// Machine status at the start of a cycle
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Cycles completed so far
    pub cycle: u64,
    /// Address of the instruction about to execute
    pub pc: Address,
    /// Instruction about to execute
    pub instruction: &'a Instruction,
    /// Register store before the instruction runs
    pub registers: &'a RegisterStore,
}

impl fmt::Display for Snapshot<'_> {
    /// Status line `K=(pc, R[(0,r0), (1,r1), ...])` over the stored registers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "K=({}, R[", self.pc)?;
        for (i, (address, value)) in self.registers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({},{})", address, value)?;
        }
        f.write_str("])")
    }
}

/// Receives one snapshot per executed cycle
pub trait Observer {
    fn on_cycle(&mut self, snapshot: &Snapshot<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot<'_>),
{
    fn on_cycle(&mut self, snapshot: &Snapshot<'_>) {
        self(snapshot)
    }
}

/// Observer that ignores every cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_cycle(&mut self, _snapshot: &Snapshot<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use ram_spec::Value;

    #[test]
    fn test_snapshot_display() {
        let inst = Instruction::new("LOAD", "1");
        let regs = RegisterStore::from_values([Value::from(0), Value::from(3), Value::from(6)]);
        let snapshot = Snapshot {
            cycle: 0,
            pc: 1,
            instruction: &inst,
            registers: &regs,
        };
        assert_eq!(snapshot.to_string(), "K=(1, R[(0,0), (1,3), (2,6)])");
    }

    #[test]
    fn test_snapshot_display_skips_untouched_gaps() {
        let inst = Instruction::new("LOAD", "9");
        let mut regs = RegisterStore::from_values([Value::from(4)]);
        regs.write(9, Value::from(-1));
        regs.touch(20);
        let snapshot = Snapshot {
            cycle: 2,
            pc: 3,
            instruction: &inst,
            registers: &regs,
        };
        assert_eq!(snapshot.to_string(), "K=(3, R[(0,4), (9,-1)])");
    }

    #[test]
    fn test_snapshot_display_empty_registers() {
        let inst = Instruction::new("END", "0");
        let snapshot = Snapshot {
            cycle: 3,
            pc: 4,
            instruction: &inst,
            registers: &RegisterStore::new(),
        };
        assert_eq!(snapshot.to_string(), "K=(4, R[])");
    }

    #[test]
    fn test_closure_observer() {
        let inst = Instruction::new("END", "0");
        let mut seen = Vec::new();
        {
            let mut observer = |s: &Snapshot<'_>| seen.push(s.pc);
            let snapshot = Snapshot {
                cycle: 0,
                pc: 7,
                instruction: &inst,
                registers: &RegisterStore::new(),
            };
            observer.on_cycle(&snapshot);
            NoopObserver.on_cycle(&snapshot);
        }
        assert_eq!(seen, vec![7]);
    }
}
