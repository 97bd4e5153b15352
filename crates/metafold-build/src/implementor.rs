use metafold_schema::DefinitionError;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, Type, WherePredicate};

///
/// Target
///
/// The type an impl is emitted for, with the generics it was declared with.
///

#[derive(Clone, Debug)]
pub struct Target {
    self_ty: TokenStream,
    generics: Generics,
}

impl Target {
    #[must_use]
    pub fn new(ident: &Ident, generics: &Generics) -> Self {
        let (_, ty_generics, _) = generics.split_for_impl();

        Self {
            self_ty: quote!(#ident #ty_generics),
            generics: generics.clone(),
        }
    }

    /// Target named by a type path such as `crate::model::User`.
    pub fn from_type_name(name: &str) -> Result<Self, DefinitionError> {
        let ty: Type = syn::parse_str(name).map_err(|_| DefinitionError::InvalidTypeName {
            name: name.to_string(),
        })?;

        Ok(Self {
            self_ty: ty.to_token_stream(),
            generics: Generics::default(),
        })
    }

    #[must_use]
    pub fn has_type_params(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    pub fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|p| &p.ident)
    }
}

///
/// Implementor
///
/// Wraps trait body tokens in `impl<..> Trait for Target<..> where .. { }`.
///

pub struct Implementor<'a> {
    target: &'a Target,
    trait_path: TokenStream,
    tokens: TokenStream,
    predicates: Vec<WherePredicate>,
}

impl<'a> Implementor<'a> {
    #[must_use]
    pub fn new(target: &'a Target, trait_path: TokenStream) -> Self {
        Self {
            target,
            trait_path,
            tokens: TokenStream::new(),
            predicates: Vec::new(),
        }
    }

    #[must_use]
    pub fn set_tokens(mut self, tokens: TokenStream) -> Self {
        self.tokens = tokens;
        self
    }

    #[must_use]
    pub fn add_predicates(mut self, predicates: impl IntoIterator<Item = WherePredicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }
}

impl ToTokens for Implementor<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let mut generics = self.target.generics.clone();
        if !self.predicates.is_empty() {
            generics
                .make_where_clause()
                .predicates
                .extend(self.predicates.iter().cloned());
        }

        let (impl_generics, _, where_clause) = generics.split_for_impl();
        let Self {
            trait_path,
            tokens: body,
            ..
        } = self;
        let self_ty = &self.target.self_ty;

        tokens.extend(quote! {
            impl #impl_generics #trait_path for #self_ty #where_clause {
                #body
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn generics_are_split_and_extended() {
        let generics: Generics = parse_quote!(<T: Clone>);
        let target = Target::new(&parse_quote!(Page), &generics);
        let predicate: WherePredicate = parse_quote!(T: 'static);

        let out = Implementor::new(&target, quote!(Tr))
            .add_predicates([predicate])
            .to_token_stream()
            .to_string();

        assert_eq!(
            out,
            quote!(impl<T: Clone> Tr for Page<T> where T: 'static {}).to_string()
        );
    }

    #[test]
    fn type_paths_are_accepted_as_targets() {
        let target = Target::from_type_name("crate::model::User").unwrap();
        let out = Implementor::new(&target, quote!(Tr)).to_token_stream().to_string();

        assert_eq!(out, quote!(impl Tr for crate::model::User {}).to_string());
    }

    #[test]
    fn garbage_type_names_are_rejected() {
        let err = Target::from_type_name("not a type").unwrap_err();

        assert_eq!(
            err,
            DefinitionError::InvalidTypeName {
                name: "not a type".into()
            }
        );
    }
}
