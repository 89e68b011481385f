//! Micheline nodes and the combinators used to assemble them.
//!
//! Only the data primitives contract parameters need are modelled:
//! pairs, the `or` injections, options, booleans, unit, and the
//! int/string/bytes leaves plus sequences.
use std::fmt;

use num_bigint::BigInt;

use crate::hex::to_hex;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Micheline {
    Int(BigInt),
    String(String),
    Bytes(Vec<u8>),
    Seq(Vec<Micheline>),
    Pair(Box<Micheline>, Box<Micheline>),
    Left(Box<Micheline>),
    Right(Box<Micheline>),
    Some(Box<Micheline>),
    None,
    Unit,
    True,
    False,
}

impl Micheline {
    /// Name of the primitive application, `None` for leaves and sequences.
    pub fn prim_name(&self) -> Option<&'static str> {
        match self {
            Micheline::Pair(..) => Some("Pair"),
            Micheline::Left(_) => Some("Left"),
            Micheline::Right(_) => Some("Right"),
            Micheline::Some(_) => Some("Some"),
            Micheline::None => Some("None"),
            Micheline::Unit => Some("Unit"),
            Micheline::True => Some("True"),
            Micheline::False => Some("False"),
            Micheline::Int(_) | Micheline::String(_) | Micheline::Bytes(_) | Micheline::Seq(_) => {
                None
            }
        }
    }

    /// Arguments of the primitive application, empty for leaves and sequences.
    pub fn prim_args(&self) -> Vec<&Micheline> {
        match self {
            Micheline::Pair(l, r) => vec![l.as_ref(), r.as_ref()],
            Micheline::Left(v) | Micheline::Right(v) | Micheline::Some(v) => vec![v.as_ref()],
            _ => vec![],
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Micheline::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Flattens a right-comb of pairs into its items.
    ///
    /// `Pair a (Pair b c)` yields `[a, b, c]`. A node that is not a pair
    /// yields itself.
    pub fn comb_items(&self) -> Vec<&Micheline> {
        let mut items = vec![];
        let mut current = self;

        while let Micheline::Pair(l, r) = current {
            items.push(l.as_ref());
            current = r.as_ref();
        }

        items.push(current);
        items
    }

    fn has_args(&self) -> bool {
        !self.prim_args().is_empty()
    }
}

impl fmt::Display for Micheline {
    /// Michelson text notation, as printed by `octez-client`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Micheline::Int(v) => write!(f, "{}", v),
            Micheline::String(s) => write!(f, "{:?}", s),
            Micheline::Bytes(b) => write!(f, "0x{}", to_hex(b)),
            Micheline::Seq(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ;")?;
                    }
                    write!(f, " {}", item)?;
                }
                write!(f, " }}")
            }
            prim => {
                // Every remaining variant is a primitive application.
                write!(f, "{}", prim.prim_name().unwrap_or_default())?;
                for arg in prim.prim_args() {
                    if arg.has_args() {
                        write!(f, " ({})", arg)?;
                    } else {
                        write!(f, " {}", arg)?;
                    }
                }
                Ok(())
            }
        }
    }
}

pub fn pair(left: Micheline, right: Micheline) -> Micheline {
    Micheline::Pair(Box::new(left), Box::new(right))
}

pub fn left(value: Micheline) -> Micheline {
    Micheline::Left(Box::new(value))
}

pub fn right(value: Micheline) -> Micheline {
    Micheline::Right(Box::new(value))
}

pub fn some(value: Micheline) -> Micheline {
    Micheline::Some(Box::new(value))
}

pub fn none() -> Micheline {
    Micheline::None
}

pub fn unit() -> Micheline {
    Micheline::Unit
}

pub fn int(value: impl Into<BigInt>) -> Micheline {
    Micheline::Int(value.into())
}

pub fn string(value: impl Into<String>) -> Micheline {
    Micheline::String(value.into())
}

pub fn bytes(value: impl Into<Vec<u8>>) -> Micheline {
    Micheline::Bytes(value.into())
}

pub fn seq(items: impl IntoIterator<Item = Micheline>) -> Micheline {
    Micheline::Seq(items.into_iter().collect())
}

/// Nests the items as a right-comb of pairs: `[a, b, c]` gives
/// `Pair a (Pair b c)`.
///
/// A single item is returned as is, and no item at all gives `Unit`.
pub fn comb<I>(items: I) -> Micheline
where
    I: IntoIterator<Item = Micheline>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut rev = items.into_iter().rev();

    match rev.next() {
        Some(last) => rev.fold(last, |acc, item| pair(item, acc)),
        None => Micheline::Unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comb() {
        let c = comb(vec![int(1), int(2), int(3)]);
        assert_eq!(c, pair(int(1), pair(int(2), int(3))));

        assert_eq!(comb(vec![int(1)]), int(1));
        assert_eq!(comb(Vec::new()), Micheline::Unit);
    }

    #[test]
    fn test_comb_items() {
        let c = comb(vec![string("a"), int(2), pair(none(), none())]);
        let items = c.comb_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], &string("a"));
        assert_eq!(items[1], &int(2));
        assert_eq!(items[2], &none());
        assert_eq!(items[3], &none());

        assert_eq!(int(5).comb_items(), vec![&int(5)]);
    }

    #[test]
    fn test_prim_name_and_args() {
        let p = pair(int(1), unit());
        assert_eq!(p.prim_name(), Some("Pair"));
        assert_eq!(p.prim_args(), vec![&int(1), &unit()]);

        assert_eq!(int(1).prim_name(), None);
        assert!(int(1).prim_args().is_empty());
        assert_eq!(none().prim_name(), Some("None"));
    }

    #[test]
    fn test_display() {
        let v = pair(
            string("tz1"),
            pair(
                some(int(42)),
                seq(vec![bytes(vec![0x00, 0xff]), left(unit())]),
            ),
        );
        assert_eq!(
            v.to_string(),
            "Pair \"tz1\" (Pair (Some 42) { 0x00ff ; Left Unit })"
        );
        assert_eq!(seq(vec![]).to_string(), "{ }");
        assert_eq!(int(-3).to_string(), "-3");
    }
}
