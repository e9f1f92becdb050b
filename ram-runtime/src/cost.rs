//! Logarithmic cost accounting
//!
//! Time and space of a run under the logarithmic cost criterion, where
//! touching a number `n` costs `l(n)` (its bit length, 1 for zero).
//!
//! ## Time
//!
//! Each instruction is charged for the numbers it touches, measured on the
//! state after it executed:
//!
//! | Operand | Charge                             |
//! |---------|------------------------------------|
//! | `#k`    | `l(k)`                             |
//! | `k`     | `l(k) + l(R[k])`                   |
//! | `*k`    | `l(k) + l(R[k]) + l(R[R[k]])`      |
//!
//! STORE, ADD, SUB, MULT and DIV additionally pay `l(R[0])`. GOTO and END
//! cost 1; JZERO costs `l(0) + l(R[0])`.
//!
//! ## Space
//!
//! Every register that was initialised or written contributes the largest
//! `l(v)` it ever held. Registers only materialised by reads are free.

use crate::execute::Executed;
use crate::registers::RegisterStore;
use ram_spec::{cost, to_address, Address, Opcode, Operand, Value, ACCUMULATOR};
use std::collections::BTreeMap;

/// Final cost figures of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostReport {
    /// Accumulated time cost
    pub time: u64,
    /// Sum of per-register space maxima
    pub space: u64,
}

/// Running cost meter
#[derive(Debug, Clone, Default)]
pub struct CostMeter {
    time: u64,
    /// Largest cost held per initialised or written register
    space: BTreeMap<Address, u64>,
}

impl CostMeter {
    /// Start metering with the initial register contents
    pub fn new(initial: &RegisterStore) -> Self {
        Self {
            time: 0,
            space: initial
                .iter()
                .map(|(address, value)| (address, cost(value)))
                .collect(),
        }
    }

    /// Charge a completed instruction
    pub fn record(&mut self, executed: &Executed, registers: &RegisterStore) {
        self.time += time_cost(executed, registers);

        if executed.opcode.writes_accumulator() {
            self.track(ACCUMULATOR, registers);
        }
        if let Some(address) = executed.stored_to {
            self.track(address, registers);
        }
    }

    fn track(&mut self, address: Address, registers: &RegisterStore) {
        let held = cost(&registers.peek(address));
        let max = self.space.entry(address).or_insert(0);
        *max = (*max).max(held);
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn space(&self) -> u64 {
        self.space.values().sum()
    }

    pub fn report(&self) -> CostReport {
        CostReport {
            time: self.time(),
            space: self.space(),
        }
    }
}

fn time_cost(executed: &Executed, registers: &RegisterStore) -> u64 {
    let acc = cost(&registers.peek(ACCUMULATOR));

    match executed.opcode {
        Opcode::Goto | Opcode::End => 1,
        Opcode::Jzero => cost(&Value::from(0)) + acc,
        Opcode::Load => operand_cost(executed.operand.as_ref(), registers),
        Opcode::Store | Opcode::Add | Opcode::Sub | Opcode::Mult | Opcode::Div => {
            operand_cost(executed.operand.as_ref(), registers) + acc
        }
    }
}

fn operand_cost(operand: Option<&Operand>, registers: &RegisterStore) -> u64 {
    match operand {
        None => 0,
        Some(Operand::Immediate(value)) => cost(value),
        Some(Operand::Direct(address)) => {
            address_cost(*address) + cost(&registers.peek(*address))
        }
        Some(Operand::Indirect(pointer)) => {
            let target = registers.peek(*pointer);
            let through = to_address(&target)
                .map(|address| cost(&registers.peek(address)))
                .unwrap_or(0);
            address_cost(*pointer) + cost(&target) + through
        }
    }
}

fn address_cost(address: Address) -> u64 {
    cost(&Value::from(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: i64) -> Value {
        Value::from(n)
    }

    fn store(values: &[i64]) -> RegisterStore {
        RegisterStore::from_values(values.iter().map(|&n| v(n)))
    }

    fn executed(opcode: Opcode, operand: Option<&str>) -> Executed {
        Executed {
            opcode,
            operand: operand.map(|t| Operand::parse(t).unwrap()),
            stored_to: None,
        }
    }

    #[test]
    fn test_initial_space() {
        // l(0) + l(3) + l(6) = 1 + 2 + 3
        let meter = CostMeter::new(&store(&[0, 3, 6]));
        assert_eq!(meter.space(), 6);
        assert_eq!(meter.time(), 0);
    }

    #[test]
    fn test_load_time_per_mode() {
        let regs = store(&[4, 2, 8]);

        let mut meter = CostMeter::new(&regs);
        meter.record(&executed(Opcode::Load, Some("#4")), &regs);
        assert_eq!(meter.time(), 3);

        // l(1) + l(R1=2)
        let mut meter = CostMeter::new(&regs);
        meter.record(&executed(Opcode::Load, Some("1")), &regs);
        assert_eq!(meter.time(), 1 + 2);

        // l(1) + l(R1=2) + l(R2=8)
        let mut meter = CostMeter::new(&regs);
        meter.record(&executed(Opcode::Load, Some("*1")), &regs);
        assert_eq!(meter.time(), 1 + 2 + 4);
    }

    #[test]
    fn test_arithmetic_pays_for_accumulator() {
        // acc = 7 -> l = 3
        let regs = store(&[7]);
        let mut meter = CostMeter::new(&regs);
        meter.record(&executed(Opcode::Add, Some("#1")), &regs);
        assert_eq!(meter.time(), 1 + 3);
    }

    #[test]
    fn test_control_flow_costs() {
        let regs = store(&[5]);
        let mut meter = CostMeter::new(&regs);
        meter.record(&executed(Opcode::Goto, Some("3")), &regs);
        meter.record(&executed(Opcode::End, None), &regs);
        assert_eq!(meter.time(), 2);

        meter.record(&executed(Opcode::Jzero, Some("3")), &regs);
        assert_eq!(meter.time(), 2 + 1 + 3);
    }

    #[test]
    fn test_space_tracks_maximum() {
        let mut regs = store(&[0]);
        let mut meter = CostMeter::new(&regs);
        assert_eq!(meter.space(), 1);

        regs.set_accumulator(v(255));
        meter.record(&executed(Opcode::Load, Some("#255")), &regs);
        assert_eq!(meter.space(), 8);

        regs.set_accumulator(v(1));
        meter.record(&executed(Opcode::Load, Some("#1")), &regs);
        assert_eq!(meter.space(), 8);
    }

    #[test]
    fn test_space_counts_stored_registers() {
        let mut regs = store(&[12]);
        let mut meter = CostMeter::new(&regs);

        regs.write(5, v(12));
        let mut store_exec = executed(Opcode::Store, Some("5"));
        store_exec.stored_to = Some(5);
        meter.record(&store_exec, &regs);

        // R0 = 12 (4) + R5 = 12 (4); R1..R4 were never written
        assert_eq!(meter.space(), 8);
    }

    #[test]
    fn test_space_at_distant_address() {
        let mut regs = store(&[3]);
        let mut meter = CostMeter::new(&regs);

        regs.write(Address::MAX, v(3));
        let mut store_exec = executed(Opcode::Store, Some("1"));
        store_exec.stored_to = Some(Address::MAX);
        meter.record(&store_exec, &regs);

        assert_eq!(meter.space(), 2 + 2);
    }

    #[test]
    fn test_report() {
        let regs = store(&[1]);
        let mut meter = CostMeter::new(&regs);
        meter.record(&executed(Opcode::End, None), &regs);
        assert_eq!(meter.report(), CostReport { time: 1, space: 1 });
    }
}
