//! ToMicheline implementation for integers (signed/unsigned).
//!
//! Michelson `int`, `nat`, `mutez` and `timestamp` all share the int leaf.
use num_bigint::{BigInt, BigUint};

use crate::{Micheline, ToMicheline};

macro_rules! implement_trait_for_integer {
    ($type:ty) => {
        impl ToMicheline for $type {
            fn to_micheline(&self) -> Micheline {
                Micheline::Int(BigInt::from(*self))
            }
        }
    };
}

implement_trait_for_integer!(u8);
implement_trait_for_integer!(u16);
implement_trait_for_integer!(u32);
implement_trait_for_integer!(u64);
implement_trait_for_integer!(u128);
implement_trait_for_integer!(usize);

implement_trait_for_integer!(i8);
implement_trait_for_integer!(i16);
implement_trait_for_integer!(i32);
implement_trait_for_integer!(i64);
implement_trait_for_integer!(i128);
implement_trait_for_integer!(isize);

impl ToMicheline for BigInt {
    fn to_micheline(&self) -> Micheline {
        Micheline::Int(self.clone())
    }
}

impl ToMicheline for BigUint {
    fn to_micheline(&self) -> Micheline {
        Micheline::Int(BigInt::from(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_to_micheline() {
        assert_eq!(u8::MAX.to_micheline(), Micheline::Int(BigInt::from(255)));
        assert_eq!(
            u128::MAX.to_micheline(),
            Micheline::Int(BigInt::from(u128::MAX))
        );
    }

    #[test]
    fn test_signed_to_micheline() {
        assert_eq!((-12_i64).to_micheline(), Micheline::Int(BigInt::from(-12)));
        assert_eq!(0_i32.to_micheline(), Micheline::Int(BigInt::from(0)));
    }

    #[test]
    fn test_big_to_micheline() {
        let big = BigUint::from(u128::MAX) * BigUint::from(10_u8);
        assert_eq!(
            big.to_micheline(),
            Micheline::Int(BigInt::from(u128::MAX) * BigInt::from(10_u8))
        );
    }
}
