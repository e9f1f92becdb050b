//! Register values and their logarithmic cost

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// Register value (unbounded signed integer)
pub type Value = BigInt;

/// Register address or program line
pub type Address = usize;

/// Logarithmic cost `l(n)` of holding or touching a value.
///
/// `l(0) = 1`, otherwise the bit length of `|n|`, i.e. `floor(log2 |n|) + 1`.
#[inline]
pub fn cost(value: &Value) -> u64 {
    if value.is_zero() {
        1
    } else {
        value.bits()
    }
}

/// Interpret a register value as a register address.
///
/// Returns `None` for negative values and values that do not fit in `usize`.
#[inline]
pub fn to_address(value: &Value) -> Option<Address> {
    value.to_usize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_of_zero_is_one() {
        assert_eq!(cost(&Value::from(0)), 1);
    }

    #[test]
    fn test_cost_is_bit_length() {
        assert_eq!(cost(&Value::from(1)), 1);
        assert_eq!(cost(&Value::from(2)), 2);
        assert_eq!(cost(&Value::from(3)), 2);
        assert_eq!(cost(&Value::from(8)), 4);
        assert_eq!(cost(&Value::from(255)), 8);
        assert_eq!(cost(&Value::from(256)), 9);
    }

    #[test]
    fn test_cost_uses_magnitude() {
        assert_eq!(cost(&Value::from(-8)), cost(&Value::from(8)));
    }

    #[test]
    fn test_to_address() {
        assert_eq!(to_address(&Value::from(7)), Some(7));
        assert_eq!(to_address(&Value::from(0)), Some(0));
        assert_eq!(to_address(&Value::from(-1)), None);

        let huge = Value::from(u64::MAX) * Value::from(u64::MAX);
        assert_eq!(to_address(&huge), None);
    }
}
