use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DataStruct, GenericParam, Generics, Ident};

pub fn derive_struct(ident: Ident, generics: Generics, data: DataStruct) -> TokenStream {
    let fields = fields_accessors(&data.fields);
    let generics = add_trait_bounds(generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let to_micheline = quote! {
        fn to_micheline(&self) -> ::auction_testkit_micheline::Micheline {
            ::auction_testkit_micheline::comb(::std::vec![
                #(
                    ::auction_testkit_micheline::ToMicheline::to_micheline(&self.#fields),
                )*
            ])
        }
    };

    quote! {
        impl #impl_generics ::auction_testkit_micheline::ToMicheline for #ident #ty_generics #where_clause {
            #to_micheline
        }
    }
}

/// Every type parameter must itself be `ToMicheline`.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param
                .bounds
                .push(parse_quote!(::auction_testkit_micheline::ToMicheline));
        }
    }
    generics
}

fn fields_accessors(fields: &syn::Fields) -> Vec<TokenStream> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field
                .ident
                .clone()
                .map(|ident| quote! { #ident })
                .unwrap_or_else(|| {
                    let i = syn::Index::from(i);
                    quote! { #i }
                })
        })
        .collect()
}
