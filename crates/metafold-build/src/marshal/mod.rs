mod decode;
mod encode;

use crate::{
    helper::{bit_literal, field_ident},
    implementor::{Implementor, Target},
};
use metafold_schema::prelude::*;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Type, WherePredicate};

///
/// Binding
///
/// One property bound to one path under one group.
///

struct Binding<'a> {
    property: &'a Property,
    field: Ident,
    bit: GroupBits,
    path: &'a str,
}

///
/// MarshalGen
///

pub struct MarshalGen<'a> {
    def: &'a TypeDef,
    groups: &'a GroupMap,
    rt: &'a TokenStream,
}

impl<'a> MarshalGen<'a> {
    pub const fn new(def: &'a TypeDef, groups: &'a GroupMap, rt: &'a TokenStream) -> Self {
        Self { def, groups, rt }
    }

    pub fn implement(&self, target: &Target) -> TokenStream {
        let rt = self.rt;
        let type_name = &self.def.name;
        let table = self.group_table();
        let bindings = self.bindings();

        let decode = decode::decode_into(self, &bindings);
        let encode = encode::encode(self, &bindings);

        let body = quote! {
            const TYPE_NAME: &'static str = #type_name;

            fn groups() -> &'static #rt::GroupTable {
                #table
            }

            #decode
            #encode
        };

        Implementor::new(target, quote!(#rt::Marshal))
            .set_tokens(body)
            .add_predicates(self.bounds(target))
            .to_token_stream()
    }

    // group_table
    fn group_table(&self) -> TokenStream {
        let rt = self.rt;
        let entries = self.groups.iter().map(|(name, bit)| {
            let bit = bit_literal(bit);
            quote!(#rt::GroupEntry::new(#name, #bit))
        });

        quote! {
            static GROUPS: #rt::GroupTable = #rt::GroupTable::new(&[#(#entries),*]);
            &GROUPS
        }
    }

    // bindings
    // properties in declaration order, offsets in attachment order
    fn bindings(&self) -> Vec<Binding<'a>> {
        let mut bindings = Vec::new();

        for property in self.def.marshalled() {
            for offset in property.directives.offsets() {
                let Some(bit) = self.groups.bit(offset.group_name()) else {
                    continue;
                };
                log::trace!(
                    "{}::{} -> '{}' in group '{}'",
                    self.def.name,
                    property.name,
                    offset.path,
                    offset.group_name()
                );

                bindings.push(Binding {
                    property,
                    field: field_ident(&property.name),
                    bit,
                    path: &offset.path,
                });
            }
        }

        bindings
    }

    // bounds
    // generic targets need every leaf type to carry its conversion trait
    pub fn bounds(&self, target: &Target) -> Vec<WherePredicate> {
        if !target.has_type_params() {
            return Vec::new();
        }

        let rt = self.rt;
        let mut bounds: Vec<WherePredicate> = target
            .type_params()
            .map(|param| syn::parse_quote!(#param: 'static))
            .collect();

        for property in self.def.marshalled() {
            let (name, bound) = match property.value.leaf() {
                ValueType::Scalar(name) => (name, quote!(#rt::Scalar)),
                ValueType::Reference(name) => (name, quote!(#rt::Marshal)),
                _ => continue,
            };
            let Ok(ty) = syn::parse_str::<Type>(name) else {
                continue;
            };

            bounds.push(syn::parse_quote!(#ty: #bound));
        }

        bounds
    }

    fn type_name(&self) -> &str {
        &self.def.name
    }
}
