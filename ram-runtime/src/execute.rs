//! Instruction execution for the RAM
//!
//! Each handler decodes its operand completely before touching the machine,
//! so a faulting instruction leaves registers and PC as they were.

use crate::decode::{parse_operand, OperandDecoder};
use crate::error::{Result, RuntimeError};
use crate::registers::RegisterStore;
use crate::state::MachineState;
use crate::vm::MachineConfig;
use num_traits::Zero;
use ram_spec::{Address, Instruction, Opcode, Operand, Value, ACCUMULATOR, HALT};

/// What a completed instruction did, for cost accounting and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub opcode: Opcode,
    /// Decoded operand (END ignores its operand)
    pub operand: Option<Operand>,
    /// Register written by STORE
    pub stored_to: Option<Address>,
}

#[derive(Debug, Clone, Copy)]
enum Arithmetic {
    Add,
    Sub,
    Mult,
    Div,
}

impl Arithmetic {
    fn apply(self, acc: Value, value: Value, pc: Address) -> Result<Value> {
        let result = match self {
            Arithmetic::Add => acc + value,
            // Saturates at zero: the machine never produces a negative difference
            Arithmetic::Sub => (acc - value).max(Value::zero()),
            Arithmetic::Mult => acc * value,
            Arithmetic::Div => {
                if value.is_zero() {
                    return Err(RuntimeError::DivisionByZero { pc });
                }
                // BigInt division truncates toward zero
                acc / value
            }
        };
        Ok(result)
    }
}

/// Execute a single instruction
pub fn execute(
    instr: &Instruction,
    state: &mut MachineState,
    config: &MachineConfig,
) -> Result<Executed> {
    let pc = state.pc;
    let opcode = instr.opcode().map_err(|_| RuntimeError::UnknownOpcode {
        pc,
        mnemonic: instr.mnemonic.clone(),
    })?;

    let (operand, stored_to) = match opcode {
        Opcode::End => {
            state.jump(HALT);
            (None, None)
        }

        Opcode::Load => {
            let operand = parse_operand(instr, pc)?;
            let mut dec = OperandDecoder::new(&state.registers, opcode, pc);
            let value = dec.value_of(&operand)?;
            let reach = dec.reach();

            materialise(&mut state.registers, reach);
            state.registers.set_accumulator(value);
            state.advance();
            (Some(operand), None)
        }

        Opcode::Store => {
            let operand = parse_operand(instr, pc)?;
            let mut dec = OperandDecoder::new(&state.registers, opcode, pc);
            let address = dec.address_of(&operand)?;
            if address == ACCUMULATOR && !config.allow_accumulator_store {
                return Err(dec.reject(&operand, "the accumulator is not a STORE target"));
            }
            let reach = dec.reach();

            materialise(&mut state.registers, reach);
            let acc = state.registers.accumulator();
            state.registers.write(address, acc);
            state.advance();
            (Some(operand), Some(address))
        }

        Opcode::Add => (Some(accumulate(instr, state, opcode, Arithmetic::Add)?), None),
        Opcode::Sub => (Some(accumulate(instr, state, opcode, Arithmetic::Sub)?), None),
        Opcode::Mult => (Some(accumulate(instr, state, opcode, Arithmetic::Mult)?), None),
        Opcode::Div => (Some(accumulate(instr, state, opcode, Arithmetic::Div)?), None),

        Opcode::Goto => {
            let operand = parse_operand(instr, pc)?;
            let target = OperandDecoder::new(&state.registers, opcode, pc).jump_target(&operand)?;
            state.jump(target);
            (Some(operand), None)
        }

        Opcode::Jzero => {
            let operand = parse_operand(instr, pc)?;
            let target = OperandDecoder::new(&state.registers, opcode, pc).jump_target(&operand)?;
            if state.registers.accumulator().is_zero() {
                state.jump(target);
            } else {
                state.advance();
            }
            (Some(operand), None)
        }
    };

    Ok(Executed {
        opcode,
        operand,
        stored_to,
    })
}

/// Combine the operand's value into the accumulator
fn accumulate(
    instr: &Instruction,
    state: &mut MachineState,
    opcode: Opcode,
    op: Arithmetic,
) -> Result<Operand> {
    let pc = state.pc;
    let operand = parse_operand(instr, pc)?;
    let mut dec = OperandDecoder::new(&state.registers, opcode, pc);
    let value = dec.value_of(&operand)?;
    let reach = dec.reach();

    let result = op.apply(state.registers.peek(ACCUMULATOR), value, pc)?;
    materialise(&mut state.registers, reach);
    state.registers.set_accumulator(result);
    state.advance();
    Ok(operand)
}

fn materialise(registers: &mut RegisterStore, reach: Option<Address>) {
    if let Some(address) = reach {
        registers.touch(address);
    }
}
