use crate::{Micheline, ToMicheline};

impl ToMicheline for str {
    fn to_micheline(&self) -> Micheline {
        Micheline::String(self.to_string())
    }
}

impl ToMicheline for String {
    fn to_micheline(&self) -> Micheline {
        Micheline::String(self.clone())
    }
}
