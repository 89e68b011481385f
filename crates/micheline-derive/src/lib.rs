use proc_macro::{self, TokenStream};
use syn::{parse_macro_input, Data, DeriveInput};

mod derive_struct;

/// Derives `ToMicheline` for a struct: fields become a right-comb of pairs,
/// in declaration order.
///
/// The declaration order is the wire order, so records mirroring a
/// contract parameter must declare their fields in the contract's layout.
#[proc_macro_derive(ToMicheline)]
pub fn derive(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        data,
        generics,
        ..
    } = parse_macro_input!(input);

    match data {
        Data::Struct(data) => derive_struct::derive_struct(ident, generics, data).into(),
        _ => syn::Error::new(ident.span(), "ToMicheline can only be derived for structs")
            .to_compile_error()
            .into(),
    }
}
