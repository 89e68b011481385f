pub mod address;
pub mod array;
pub mod boolean;
pub mod bytes;
pub mod integers;
pub mod option;
pub mod string;
pub mod tuple;

use crate::{Micheline, ToMicheline};

impl ToMicheline for Micheline {
    fn to_micheline(&self) -> Micheline {
        self.clone()
    }
}

impl<T> ToMicheline for &T
where
    T: ToMicheline + ?Sized,
{
    fn to_micheline(&self) -> Micheline {
        (**self).to_micheline()
    }
}

impl<T> ToMicheline for Box<T>
where
    T: ToMicheline + ?Sized,
{
    fn to_micheline(&self) -> Micheline {
        self.as_ref().to_micheline()
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{comb, int, none, pair, seq, some, string};
    use crate::ToMicheline;

    #[test]
    fn test_to_micheline_several_values() {
        let record = (
            "tz1",
            (Some(5_u64), (vec![(1_u8, 2_u8)], Option::<u32>::None)),
        );

        assert_eq!(
            record.to_micheline(),
            comb(vec![
                string("tz1"),
                some(int(5)),
                seq(vec![pair(int(1), int(2))]),
                none(),
            ])
        );
    }
}
