//! ToMicheline implementation for sequences.
//!
//! Michelson lists and sets are both written as `{ a ; b ; ... }`.
use crate::{Micheline, ToMicheline};

impl<T> ToMicheline for [T]
where
    T: ToMicheline,
{
    fn to_micheline(&self) -> Micheline {
        Micheline::Seq(self.iter().map(ToMicheline::to_micheline).collect())
    }
}

impl<T> ToMicheline for Vec<T>
where
    T: ToMicheline,
{
    fn to_micheline(&self) -> Micheline {
        self.as_slice().to_micheline()
    }
}
