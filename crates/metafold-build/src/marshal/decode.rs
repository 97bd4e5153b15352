use super::{Binding, MarshalGen};
use crate::helper::{bit_literal, with_context};
use metafold_schema::prelude::*;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

// decode_into
// only paths present in the input are assigned; everything else is kept
pub(super) fn decode_into(generator: &MarshalGen, bindings: &[Binding]) -> TokenStream {
    let rt = generator.rt;
    let input = if bindings.is_empty() {
        format_ident!("_input")
    } else {
        format_ident!("input")
    };

    let blocks = bindings.iter().map(|binding| {
        let bit = bit_literal(binding.bit);
        let path = binding.path;
        let assign = assign(generator, binding);

        quote! {
            if id & #bit != 0 {
                if let ::core::option::Option::Some(value) = #input.present(#path) {
                    #assign
                }
            }
        }
    });

    quote! {
        fn decode_into(
            &mut self,
            #input: &#rt::Container,
            group: ::core::option::Option<&str>,
        ) -> ::core::result::Result<(), #rt::MarshalError> {
            let id = <Self as #rt::Marshal>::groups()
                .resolve(<Self as #rt::Marshal>::TYPE_NAME, group)?;
            #(#blocks)*
            let _ = id;

            ::core::result::Result::Ok(())
        }
    }
}

// assign
// array levels are walked key by key and created on first use, so a
// decode merges into whatever the property already holds
fn assign(generator: &MarshalGen, binding: &Binding) -> TokenStream {
    let rt = generator.rt;
    let property = binding.property;
    let field = &binding.field;
    let depth = property.value.depth();
    let context = with_context(generator.type_name(), &property.name);
    let leaf = property.value.leaf();

    if depth == 0 {
        return match (leaf, property.optional) {
            (ValueType::Reference(_), true) => quote! {
                #rt::Marshal::decode_value_into(
                    self.#field.get_or_insert_with(::core::default::Default::default),
                    value,
                    group,
                ) #context?;
            },
            (ValueType::Reference(_), false) => quote! {
                #rt::Marshal::decode_value_into(&mut self.#field, value, group) #context?;
            },
            (_, true) => quote! {
                self.#field = ::core::option::Option::Some(
                    #rt::Scalar::from_value(value) #context?
                );
            },
            (_, false) => quote! {
                self.#field = #rt::Scalar::from_value(value) #context?;
            },
        };
    }

    let root = if property.optional {
        quote!(self.#field.get_or_insert_with(::core::default::Default::default))
    } else {
        quote!(&mut self.#field)
    };

    let slot = format_ident!("level{depth}");
    let item = format_ident!("v{}", depth - 1);
    let mut body = match leaf {
        ValueType::Reference(_) => quote! {
            #rt::Marshal::decode_value_into(#slot, #item, group) #context?;
        },
        _ => quote! {
            *#slot = #rt::Scalar::from_value(#item) #context?;
        },
    };

    for i in (0..depth).rev() {
        let level = format_ident!("level{i}");
        let next = format_ident!("level{}", i + 1);
        let key = format_ident!("k{i}");
        let item = format_ident!("v{i}");
        let source = if i == 0 {
            quote!(value)
        } else {
            let parent = format_ident!("v{}", i - 1);
            quote!(#parent)
        };

        body = quote! {
            for (#key, #item) in #source.entries() {
                let #next = #rt::Level::entry(&mut *#level, #key);
                #body
            }
        };
    }

    quote! {
        let level0 = #root;
        #body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementor::Target;

    fn decoded(property: Property) -> String {
        let mut property = property;
        property.directives.push_offset(None, property.name.clone());
        let def = TypeDef::new("T").with_property(property);
        let groups = GroupResolver::new([""]).resolve(&def).unwrap();
        let rt = quote!(rt);

        MarshalGen::new(&def, &groups, &rt)
            .implement(&Target::from_type_name("T").unwrap())
            .to_string()
    }

    #[test]
    fn optional_scalars_are_wrapped() {
        let out = decoded(Property::new("name", ValueType::scalar("String")).optional());
        let expected = quote! {
            self.name = ::core::option::Option::Some(
                rt::Scalar::from_value(value).map_err(|err| err.at("T", "name"))?
            );
        };

        assert!(out.contains(&expected.to_string()), "{out}");
    }

    #[test]
    fn nested_levels_are_walked_and_created() {
        let out = decoded(Property::new(
            "grid",
            ValueType::list(ValueType::list(ValueType::reference("Cell"))),
        ));
        let expected = quote! {
            let level0 = &mut self.grid;
            for (k0, v0) in value.entries() {
                let level1 = rt::Level::entry(&mut *level0, k0);
                for (k1, v1) in v0.entries() {
                    let level2 = rt::Level::entry(&mut *level1, k1);
                    rt::Marshal::decode_value_into(level2, v1, group)
                        .map_err(|err| err.at("T", "grid"))?;
                }
            }
        };

        assert!(out.contains(&expected.to_string()), "{out}");
    }

    #[test]
    fn only_present_paths_are_read() {
        let out = decoded(Property::new("n", ValueType::scalar("u8")));

        assert!(out.contains("if id & 1u64 != 0"), "{out}");
        assert!(out.contains("input . present (\"n\")"), "{out}");
    }
}
