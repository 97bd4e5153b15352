use crate::{
    helper::bit_literal,
    implementor::{Implementor, Target},
};
use metafold_schema::prelude::*;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::WherePredicate;

///
/// JsonGen
///
/// The JSON entry points are provided methods of `JsonMarshal`; the
/// type-specific part is which top-level keys of each `json:` group hold a
/// nested object or array, and so travel as embedded JSON text in the
/// array-of-JSON form.
///

pub struct JsonGen<'a> {
    def: &'a TypeDef,
    groups: &'a GroupMap,
    rt: &'a TokenStream,
}

impl<'a> JsonGen<'a> {
    pub const fn new(def: &'a TypeDef, groups: &'a GroupMap, rt: &'a TokenStream) -> Self {
        Self { def, groups, rt }
    }

    /// `bounds` are the ones the `Marshal` impl was emitted with.
    pub fn implement(&self, target: &Target, bounds: Vec<WherePredicate>) -> TokenStream {
        let rt = self.rt;
        let embedded = self.embedded_json();

        Implementor::new(target, quote!(#rt::JsonMarshal))
            .set_tokens(embedded)
            .add_predicates(bounds)
            .to_token_stream()
    }

    // embedded_json
    fn embedded_json(&self) -> TokenStream {
        let rt = self.rt;
        let masks = self.embedded_masks();

        let body = if masks.is_empty() {
            quote! {
                let _ = (id, key);
                false
            }
        } else {
            let arms = masks.iter().map(|(path, mask)| {
                let mask = bit_literal(*mask);
                quote!(#path => #mask,)
            });

            quote! {
                let mask: #rt::GroupBits = match key {
                    #(#arms)*
                    _ => 0,
                };
                id & mask != 0
            }
        };

        quote! {
            fn embedded_json(id: #rt::GroupBits, key: &str) -> bool {
                #body
            }
        }
    }

    // embedded_masks
    // path -> bits of the json groups where it holds a nested value
    fn embedded_masks(&self) -> Vec<(&'a str, GroupBits)> {
        let mut masks: Vec<(&'a str, GroupBits)> = Vec::new();

        for property in self.def.marshalled() {
            let nested = property.value.depth() > 0
                || matches!(property.value.leaf(), ValueType::Reference(_));
            if !nested {
                continue;
            }

            for offset in property.directives.offsets() {
                let group = offset.group_name();
                if !group.starts_with(JSON_GROUP_PREFIX) {
                    continue;
                }
                let Some(bit) = self.groups.bit(group) else {
                    continue;
                };

                match masks.iter_mut().find(|(path, _)| *path == offset.path) {
                    Some((_, mask)) => *mask |= bit,
                    None => masks.push((&offset.path, bit)),
                }
            }
        }

        masks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(def: &TypeDef) -> String {
        let groups = GroupResolver::new(["", "json:"]).resolve(def).unwrap();
        let rt = quote!(rt);
        let target = Target::from_type_name(&def.name).unwrap();

        JsonGen::new(def, &groups, &rt)
            .implement(&target, Vec::new())
            .to_string()
    }

    fn property(name: &str, value: ValueType, json_groups: &[&str]) -> Property {
        let mut p = Property::new(name, value).optional();
        p.directives.push_offset(None, name);
        for group in json_groups {
            p.directives.push_offset(Some(group), name);
        }
        p
    }

    #[test]
    fn nested_keys_are_masked_by_json_group() {
        let def = TypeDef::new("Root")
            .with_property(property("direct", ValueType::scalar("String"), &["json:"]))
            .with_property(property("nested", ValueType::reference("Leaf"), &["json:", "json:top"]))
            .with_property(property(
                "tags",
                ValueType::list(ValueType::scalar("String")),
                &["json:"],
            ));

        let out = render(&def);
        let arms = quote! {
            let mask: rt::GroupBits = match key {
                "nested" => 6u64,
                "tags" => 2u64,
                _ => 0,
            };
        };

        assert!(out.contains(&arms.to_string()), "{out}");
        assert!(!out.contains("\"direct\""), "{out}");
    }

    #[test]
    fn plain_groups_never_embed_json() {
        let def = TypeDef::new("Root")
            .with_property(property("nested", ValueType::reference("Leaf"), &[]));

        let out = render(&def);

        assert!(out.contains("let _ = (id , key) ; false"), "{out}");
    }
}
