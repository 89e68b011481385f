//! ToMicheline implementation for tuples.
//!
//! Tuples are right-comb pairs: `(a, b, c)` is `Pair a (Pair b c)`.
use crate::node::comb;
use crate::{Micheline, ToMicheline};

impl ToMicheline for () {
    fn to_micheline(&self) -> Micheline {
        Micheline::Unit
    }
}

macro_rules! impl_tuples {
    ($( $ty:ident : $no:tt ),+ $(,)?) => {
        impl<$( $ty ),+> ToMicheline for ($( $ty, )+)
        where
            $($ty: ToMicheline,)+
        {
            fn to_micheline(&self) -> Micheline {
                comb(vec![$( self.$no.to_micheline() ),+])
            }
        }
    }
}

impl_tuples!(A:0, B:1);
impl_tuples!(A:0, B:1, C:2);
impl_tuples!(A:0, B:1, C:2, D:3);
impl_tuples!(A:0, B:1, C:2, D:3, E:4);
