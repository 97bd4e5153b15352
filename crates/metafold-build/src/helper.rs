use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::Ident;

/// Field identifier for a property name, raw when the name is a keyword.
pub fn field_ident(name: &str) -> Ident {
    syn::parse_str::<Ident>(name).unwrap_or_else(|_| Ident::new_raw(name, Span::call_site()))
}

/// `.map_err(..)` attaching the owning type and property to a conversion error.
pub fn with_context(type_name: &str, property: &str) -> TokenStream {
    quote! {
        .map_err(|err| err.at(#type_name, #property))
    }
}

pub fn bit_literal(bit: u64) -> Literal {
    Literal::u64_suffixed(bit)
}
