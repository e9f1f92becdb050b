//! Operand decoding
//!
//! Resolves an operand against the register store, either to the value it
//! denotes or to the register / program address it names. Which resolutions
//! an instruction may ask for depends on its opcode:
//!
//! - `value_of`: any mode (LOAD and arithmetic)
//! - `address_of`: direct or indirect (STORE)
//! - `jump_target`: a bare line number only (GOTO, JZERO)
//!
//! Decoding only looks at the registers. The decoder remembers the highest
//! register it read so the caller can materialise it once the instruction is
//! known to succeed.

use crate::error::{Result, RuntimeError};
use crate::registers::RegisterStore;
use ram_spec::{to_address, Address, Instruction, Opcode, Operand, Value};

/// Parse the operand token of the instruction at `pc`
pub fn parse_operand(instr: &Instruction, pc: Address) -> Result<Operand> {
    instr
        .decode_operand()
        .map_err(|source| RuntimeError::MalformedOperand { pc, source })
}

/// Decoder bound to one instruction and the registers it runs against
pub struct OperandDecoder<'a> {
    registers: &'a RegisterStore,
    opcode: Opcode,
    pc: Address,
    reach: Option<Address>,
}

impl<'a> OperandDecoder<'a> {
    pub fn new(registers: &'a RegisterStore, opcode: Opcode, pc: Address) -> Self {
        Self {
            registers,
            opcode,
            pc,
            reach: None,
        }
    }

    /// Value denoted by the operand
    pub fn value_of(&mut self, operand: &Operand) -> Result<Value> {
        match operand {
            Operand::Immediate(value) => Ok(value.clone()),
            Operand::Direct(address) => Ok(self.load(*address)),
            Operand::Indirect(pointer) => {
                let address = self.deref(*pointer)?;
                Ok(self.load(address))
            }
        }
    }

    /// Register address denoted by the operand
    pub fn address_of(&mut self, operand: &Operand) -> Result<Address> {
        match operand {
            Operand::Immediate(_) => Err(self.reject(operand, "operand must denote an address")),
            Operand::Direct(address) => Ok(*address),
            Operand::Indirect(pointer) => self.deref(*pointer),
        }
    }

    /// Program line named by a jump operand
    pub fn jump_target(&self, operand: &Operand) -> Result<Address> {
        match operand {
            Operand::Direct(line) => Ok(*line),
            Operand::Immediate(_) | Operand::Indirect(_) => {
                Err(self.reject(operand, "jump target must be a bare line number"))
            }
        }
    }

    /// Build an operand-form error for the current instruction
    pub fn reject(&self, operand: &Operand, reason: &'static str) -> RuntimeError {
        RuntimeError::InvalidOperandForm {
            pc: self.pc,
            opcode: self.opcode,
            operand: operand.to_string(),
            reason,
        }
    }

    /// Highest register read so far
    pub fn reach(&self) -> Option<Address> {
        self.reach
    }

    fn load(&mut self, address: Address) -> Value {
        self.reach = self.reach.max(Some(address));
        self.registers.peek(address)
    }

    fn deref(&mut self, pointer: Address) -> Result<Address> {
        let value = self.load(pointer);
        to_address(&value).ok_or(RuntimeError::InvalidAddress { pc: self.pc, value })
    }
}
