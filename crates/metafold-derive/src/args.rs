use darling::{
    Error as DarlingError, FromDeriveInput, FromField, FromMeta,
    ast::{Data, NestedMeta},
    util::PathList,
};
use metafold_build::GenerateOptions;
use metafold_schema::prelude::{Access, DefinitionError, ProfileKind};
use quote::quote;
use syn::{Generics, Ident, Lit, Path, Type, Visibility, ext::IdentExt};

///
/// MarshalArgs
///
/// `#[marshal(...)]` on the type.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(marshal), supports(struct_named, struct_unit))]
pub struct MarshalArgs {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<(), FieldArgs>,

    #[darling(default)]
    pub profiles: Option<PathList>,

    #[darling(default, rename = "crate")]
    pub krate: Option<Path>,

    #[darling(default)]
    pub access: Option<String>,
}

impl MarshalArgs {
    pub fn fields(&self) -> impl Iterator<Item = &FieldArgs> {
        self.data
            .as_ref()
            .take_struct()
            .map(|fields| fields.fields)
            .unwrap_or_default()
            .into_iter()
    }

    pub fn options(&self) -> Result<GenerateOptions, DarlingError> {
        let mut options = GenerateOptions::default();

        if let Some(path) = &self.krate {
            options.crate_path = path.clone();
        }

        if let Some(access) = &self.access {
            options.access = Access::from_name(access)
                .ok_or_else(|| DarlingError::unknown_value(access).with_span(&self.ident))?;
        }

        if let Some(list) = &self.profiles {
            if list.is_empty() {
                return Err(DarlingError::too_few_items(1).with_span(&self.ident));
            }

            options.profiles = list
                .iter()
                .map(|path| {
                    path.get_ident()
                        .and_then(|ident| ProfileKind::from_name(&ident.to_string()))
                        .ok_or_else(|| {
                            DarlingError::unknown_value(&quote!(#path).to_string()).with_span(path)
                        })
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(options)
    }

    /// Report a definition error at the field it names, or at the type.
    pub fn definition_error(&self, err: &DefinitionError) -> DarlingError {
        let message = DarlingError::custom(err.to_string());

        let field = err.property().and_then(|property| {
            self.fields()
                .filter_map(|f| f.ident.as_ref())
                .find(|ident| ident.unraw() == property)
        });

        match field {
            Some(ident) => message.with_span(ident),
            None => message.with_span(&self.ident),
        }
    }
}

///
/// FieldArgs
///
/// `#[marshal(...)]` on one field.
///

#[derive(Debug, FromField)]
#[darling(attributes(marshal))]
pub struct FieldArgs {
    pub ident: Option<Ident>,
    pub ty: Type,
    pub vis: Visibility,

    #[darling(default)]
    pub skip: bool,

    /// Treat the leaf type as a `Scalar` whatever its name.
    #[darling(default)]
    pub scalar: bool,

    #[darling(multiple)]
    pub offset: Vec<OffsetArg>,

    #[darling(multiple)]
    pub json: Vec<JsonArg>,
}

///
/// OffsetArg
///
/// `offset = "path"`, `offset = 0`, or `offset(group = "g", path = "p")`
///

#[derive(Debug)]
pub struct OffsetArg {
    pub group: Option<String>,
    pub path: String,
}

#[derive(FromMeta)]
struct OffsetList {
    #[darling(default)]
    group: Option<String>,
    path: PathLit,
}

impl FromMeta for OffsetArg {
    fn from_value(value: &Lit) -> darling::Result<Self> {
        Ok(Self {
            group: None,
            path: PathLit::from_value(value)?.0,
        })
    }

    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let OffsetList { group, path } = OffsetList::from_list(items)?;

        Ok(Self {
            group,
            path: path.0,
        })
    }
}

///
/// JsonArg
///
/// `json = "name"` or `json(group = "g", name = "n")`
///

#[derive(Debug)]
pub struct JsonArg {
    pub group: Option<String>,
    pub name: String,
}

#[derive(FromMeta)]
struct JsonList {
    #[darling(default)]
    group: Option<String>,
    name: String,
}

impl FromMeta for JsonArg {
    fn from_string(value: &str) -> darling::Result<Self> {
        Ok(Self {
            group: None,
            name: value.to_string(),
        })
    }

    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let JsonList { group, name } = JsonList::from_list(items)?;

        Ok(Self { group, name })
    }
}

///
/// PathLit
///
/// A container key written as a string or an integer literal.
///

struct PathLit(String);

impl FromMeta for PathLit {
    fn from_value(value: &Lit) -> darling::Result<Self> {
        match value {
            Lit::Str(s) => Ok(Self(s.value())),
            Lit::Int(i) => Ok(Self(i.base10_digits().to_string())),
            _ => Err(DarlingError::unexpected_lit_type(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(input: syn::DeriveInput) -> darling::Result<MarshalArgs> {
        MarshalArgs::from_derive_input(&input)
    }

    #[test]
    fn type_level_options_are_read() {
        let args = parse(parse_quote! {
            #[marshal(profiles(json, container), crate = "crate::rt", access = "crate")]
            struct User {
                name: String,
            }
        })
        .unwrap();

        let options = args.options().unwrap();
        assert_eq!(options.profiles, [ProfileKind::Json, ProfileKind::Container]);
        assert_eq!(options.access, Access::Crate);
        let path = &options.crate_path;
        assert_eq!(quote!(#path).to_string(), quote!(crate::rt).to_string());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let args = parse(parse_quote! {
            #[marshal(profiles(xml))]
            struct User {}
        })
        .unwrap();

        assert!(args.options().is_err());
    }

    #[test]
    fn field_directives_in_both_forms() {
        let args = parse(parse_quote! {
            struct User {
                #[marshal(offset = "n", offset(group = "db", path = 3), json(group = "top", name = "b"))]
                #[marshal(json = "a")]
                name: String,
            }
        })
        .unwrap();

        let field = args.fields().next().unwrap();
        let offsets: Vec<_> = field
            .offset
            .iter()
            .map(|o| (o.group.as_deref(), o.path.as_str()))
            .collect();
        assert_eq!(offsets, [(None, "n"), (Some("db"), "3")]);

        let names: Vec<_> = field
            .json
            .iter()
            .map(|j| (j.group.as_deref(), j.name.as_str()))
            .collect();
        assert_eq!(names, [(Some("top"), "b"), (None, "a")]);
    }

    #[test]
    fn enums_are_not_supported() {
        let result = parse(parse_quote! {
            enum Nope { A }
        });

        assert!(result.is_err());
    }

    #[test]
    fn definition_errors_point_at_the_field() {
        let args = parse(parse_quote! {
            struct User {
                r#type: String,
            }
        })
        .unwrap();

        let err = args.definition_error(&DefinitionError::DuplicateDirective {
            type_name: "User".into(),
            property: "type".into(),
            group: String::new(),
        });
        assert!(err.to_string().contains("User::type"));
    }
}
