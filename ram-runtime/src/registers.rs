//! Register store
//!
//! Registers form a conceptually infinite array, all initially zero. Only
//! registers that were initialised or written are stored; the rest read as 0.
//! Touching an address materialises every register up to and including it,
//! which only moves the store's extent. The store never shrinks.

use num_traits::Zero;
use ram_spec::{Address, Value, ACCUMULATOR};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterStore {
    cells: BTreeMap<Address, Value>,
    /// One past the highest materialised address (saturates at `Address::MAX`)
    extent: Address,
}

impl RegisterStore {
    /// Create an empty store (every register reads as 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with initial register values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let cells: BTreeMap<Address, Value> = values.into_iter().enumerate().collect();
        let extent = cells.len();
        Self { cells, extent }
    }

    /// Materialise every register up to `address` without changing any value
    pub fn touch(&mut self, address: Address) {
        if address >= self.extent {
            let extent = address.saturating_add(1);
            trace!(from = self.extent, to = extent, "expanding register store");
            self.extent = extent;
        }
    }

    /// Read a register, materialising it (as 0) if it was never touched
    pub fn read(&mut self, address: Address) -> Value {
        self.touch(address);
        self.peek(address)
    }

    /// Write a register, materialising every register up to it
    pub fn write(&mut self, address: Address, value: Value) {
        self.touch(address);
        self.cells.insert(address, value);
    }

    /// Read the accumulator (register 0)
    #[inline]
    pub fn accumulator(&mut self) -> Value {
        self.read(ACCUMULATOR)
    }

    /// Write the accumulator (register 0)
    #[inline]
    pub fn set_accumulator(&mut self, value: Value) {
        self.write(ACCUMULATOR, value);
    }

    /// Stored value of a register; `None` if it was never initialised or written
    pub fn get(&self, address: Address) -> Option<&Value> {
        self.cells.get(&address)
    }

    /// Value of a register without materialising it (0 if never touched)
    pub fn peek(&self, address: Address) -> Value {
        self.get(address).cloned().unwrap_or_else(Value::zero)
    }

    /// Number of materialised registers
    pub fn len(&self) -> usize {
        self.extent
    }

    pub fn is_empty(&self) -> bool {
        self.extent == 0
    }

    /// Initialised or written registers in address order
    pub fn iter(&self) -> impl Iterator<Item = (Address, &Value)> + '_ {
        self.cells.iter().map(|(&address, value)| (address, value))
    }
}
