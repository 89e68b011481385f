//! ToMicheline implementation for bool.
use crate::{Micheline, ToMicheline};

impl ToMicheline for bool {
    fn to_micheline(&self) -> Micheline {
        if *self {
            Micheline::True
        } else {
            Micheline::False
        }
    }
}
