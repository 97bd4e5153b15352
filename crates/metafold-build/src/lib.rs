//! Marshaller generator.
//!
//! Turns a [`TypeDef`] into the token stream of its `Marshal` (and, with the
//! JSON profile, `JsonMarshal`) implementation. Used by `#[derive(Marshal)]`
//! and usable from build scripts with a model loaded from elsewhere.

mod helper;
mod implementor;
mod json;
mod marshal;

pub use implementor::{Implementor, Target};

use metafold_schema::prelude::*;
use proc_macro2::TokenStream;
use quote::quote;

///
/// GenerateOptions
///

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Path the generated code uses to reach the runtime.
    pub crate_path: syn::Path,

    /// What the generated code may reach on the target type.
    pub access: Access,

    pub profiles: Vec<ProfileKind>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            crate_path: syn::parse_quote!(::metafold),
            access: Access::default(),
            profiles: vec![ProfileKind::Container],
        }
    }
}

/// Generate the marshaller impls for `def` against `target`.
///
/// Runs the profile inference passes on a copy of `def`, resolves groups,
/// and emits one impl per active profile.
pub fn generate(
    def: &TypeDef,
    target: &Target,
    options: &GenerateOptions,
) -> Result<TokenStream, DefinitionError> {
    let profiles = ProfileSet::from_kinds(&def.name, &options.profiles)?;

    let mut def = def.clone();
    profiles.prepare(&mut def, options.access)?;

    let groups = GroupResolver::new(profiles.pre_registered_groups()).resolve(&def)?;
    log::debug!(
        "generating marshaller for {} ({} properties, {} groups)",
        def.name,
        def.marshalled().count(),
        groups.len()
    );

    let rt = runtime_path(&options.crate_path);
    let marshal = marshal::MarshalGen::new(&def, &groups, &rt);
    let mut tokens = marshal.implement(target);

    if profiles.contains(ProfileKind::Json) {
        let json = json::JsonGen::new(&def, &groups, &rt);
        tokens.extend(json.implement(target, marshal.bounds(target)));
    }

    Ok(tokens)
}

/// Generate for a model whose name is the path of the target type.
pub fn generate_for_model(
    def: &TypeDef,
    options: &GenerateOptions,
) -> Result<TokenStream, DefinitionError> {
    let target = Target::from_type_name(&def.name)?;

    generate(def, &target, options)
}

// runtime_path
fn runtime_path(crate_path: &syn::Path) -> TokenStream {
    quote!(#crate_path::__private)
}
