//! ToMicheline implementation for Option.
//!
//! Rust `Some(v)` / `None` map directly to Michelson `Some v` / `None`.
use crate::{Micheline, ToMicheline};

impl<T> ToMicheline for Option<T>
where
    T: ToMicheline,
{
    fn to_micheline(&self) -> Micheline {
        match self {
            Some(v) => Micheline::Some(Box::new(v.to_micheline())),
            None => Micheline::None,
        }
    }
}
