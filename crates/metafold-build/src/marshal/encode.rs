use super::{Binding, MarshalGen};
use crate::helper::{bit_literal, with_context};
use metafold_schema::prelude::*;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

// encode
// a property holding no value writes no key
pub(super) fn encode(generator: &MarshalGen, bindings: &[Binding]) -> TokenStream {
    let rt = generator.rt;

    let blocks = bindings.iter().map(|binding| {
        let bit = bit_literal(binding.bit);
        let path = binding.path;
        let field = &binding.field;
        let value = value(generator, binding);

        let write = quote! {
            output.insert(#path, #value);
        };

        if binding.property.optional {
            quote! {
                if id & #bit != 0 {
                    if let ::core::option::Option::Some(field) = &self.#field {
                        #write
                    }
                }
            }
        } else {
            quote! {
                if id & #bit != 0 {
                    let field = &self.#field;
                    #write
                }
            }
        }
    });

    quote! {
        fn encode(
            &self,
            group: ::core::option::Option<&str>,
        ) -> ::core::result::Result<#rt::Container, #rt::MarshalError> {
            let id = <Self as #rt::Marshal>::groups()
                .resolve(<Self as #rt::Marshal>::TYPE_NAME, group)?;
            #[allow(unused_mut)]
            let mut output = #rt::Container::object();
            #(#blocks)*
            let _ = id;

            ::core::result::Result::Ok(output)
        }
    }
}

// value
// expression producing the Value written for one binding
fn value(generator: &MarshalGen, binding: &Binding) -> TokenStream {
    let depth = binding.property.value.depth();

    level(generator, binding, 0, depth, &quote!(field))
}

fn level(
    generator: &MarshalGen,
    binding: &Binding,
    index: usize,
    depth: usize,
    source: &TokenStream,
) -> TokenStream {
    let rt = generator.rt;

    if index == depth {
        let context = with_context(generator.type_name(), &binding.property.name);

        return match binding.property.value.leaf() {
            ValueType::Reference(_) => quote! {
                #rt::Marshal::to_value(#source, group) #context?
            },
            _ => quote! {
                #rt::Scalar::to_value(#source)
            },
        };
    }

    let out = format_ident!("out{index}");
    let key = format_ident!("k{index}");
    let item = format_ident!("v{index}");
    let inner = level(generator, binding, index + 1, depth, &quote!(#item));

    quote! {
        {
            let mut #out = #rt::Container::new();
            for (#key, #item) in #rt::Level::entries(#source) {
                #out.insert(#key, #inner);
            }
            #rt::Value::Container(#out)
        }
    }
}
