//! Michelson types, as far as packing contract parameters and big map keys
//! requires them.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    Unit,
    Bool,
    Int,
    Nat,
    Mutez,
    Timestamp,
    String,
    Bytes,
    Address,
    Pair(Box<Ty>, Box<Ty>),
    Or(Box<Ty>, Box<Ty>),
    Option(Box<Ty>),
    List(Box<Ty>),
}

impl Ty {
    pub fn pair(left: Ty, right: Ty) -> Self {
        Ty::Pair(Box::new(left), Box::new(right))
    }

    pub fn or(left: Ty, right: Ty) -> Self {
        Ty::Or(Box::new(left), Box::new(right))
    }

    pub fn option(inner: Ty) -> Self {
        Ty::Option(Box::new(inner))
    }

    pub fn list(inner: Ty) -> Self {
        Ty::List(Box::new(inner))
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Unit => write!(f, "unit"),
            Ty::Bool => write!(f, "bool"),
            Ty::Int => write!(f, "int"),
            Ty::Nat => write!(f, "nat"),
            Ty::Mutez => write!(f, "mutez"),
            Ty::Timestamp => write!(f, "timestamp"),
            Ty::String => write!(f, "string"),
            Ty::Bytes => write!(f, "bytes"),
            Ty::Address => write!(f, "address"),
            Ty::Pair(l, r) => {
                write!(f, "pair ")?;
                fmt_arg(f, l)?;
                write!(f, " ")?;
                fmt_arg(f, r)
            }
            Ty::Or(l, r) => {
                write!(f, "or ")?;
                fmt_arg(f, l)?;
                write!(f, " ")?;
                fmt_arg(f, r)
            }
            Ty::Option(t) => {
                write!(f, "option ")?;
                fmt_arg(f, t)
            }
            Ty::List(t) => {
                write!(f, "list ")?;
                fmt_arg(f, t)
            }
        }
    }
}

fn fmt_arg(f: &mut fmt::Formatter<'_>, t: &Ty) -> fmt::Result {
    match t {
        Ty::Pair(..) | Ty::Or(..) | Ty::Option(_) | Ty::List(_) => write!(f, "({})", t),
        _ => write!(f, "{}", t),
    }
}
