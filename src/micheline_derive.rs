pub use auction_testkit_micheline_derive::*;

#[cfg(test)]
mod tests {
    use auction_testkit_micheline::{
        int, none, pair, seq, some, string, Address, Micheline, ToMicheline,
    };
    use auction_testkit_micheline_derive::ToMicheline;

    #[derive(Debug, ToMicheline)]
    struct ExampleSimple {
        x: Vec<u32>,
        y: u64,
    }

    #[derive(Debug, ToMicheline)]
    struct ExampleNested {
        x: String,
        y: ExampleSimple,
    }

    #[derive(Debug, ToMicheline)]
    struct ExampleTuple(ExampleSimple, Option<i64>, bool);

    #[derive(Debug, ToMicheline)]
    struct ExampleSingle {
        x: u8,
    }

    #[derive(Debug, ToMicheline)]
    struct ExampleBorrowed<'a, T> {
        owner: &'a Address,
        values: &'a [T],
    }

    #[test]
    fn test_derive_struct() {
        let simple = ExampleSimple {
            x: vec![1, 2],
            y: 3,
        };

        assert_eq!(
            simple.to_micheline(),
            pair(seq(vec![int(1), int(2)]), int(3))
        );
    }

    #[test]
    fn test_derive_nested_struct_is_not_flattened() {
        let nested = ExampleNested {
            x: "a".to_string(),
            y: ExampleSimple {
                x: vec![],
                y: 3,
            },
        };

        assert_eq!(
            nested.to_micheline(),
            pair(string("a"), pair(seq(vec![]), int(3)))
        );
    }

    #[test]
    fn test_derive_tuple_struct() {
        let tuple = ExampleTuple(ExampleSimple { x: vec![], y: 0 }, Some(-1), true);

        assert_eq!(
            tuple.to_micheline(),
            pair(
                pair(seq(vec![]), int(0)),
                pair(some(int(-1)), Micheline::True)
            )
        );

        let tuple = ExampleTuple(ExampleSimple { x: vec![], y: 0 }, None, false);
        assert_eq!(tuple.to_micheline().comb_items()[1], &none());
    }

    #[test]
    fn test_derive_single_field() {
        assert_eq!(ExampleSingle { x: 9 }.to_micheline(), int(9));
    }

    #[test]
    fn test_derive_generics() {
        let owner = Address::new("tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK");
        let values = [5_u16, 6];
        let borrowed = ExampleBorrowed {
            owner: &owner,
            values: &values,
        };

        assert_eq!(
            borrowed.to_micheline(),
            pair(
                string("tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK"),
                seq(vec![int(5), int(6)])
            )
        );
    }
}
