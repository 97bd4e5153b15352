use crate::args::{FieldArgs, MarshalArgs};
use darling::Error as DarlingError;
use metafold_schema::prelude::{DirectiveList, Property, TypeDef, ValueType, Visibility};
use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type, TypePath, ext::IdentExt};

/// Leaf types copied as-is.
const SCALARS: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64",
];

/// Types with no container mapping.
const UNSUPPORTED: &[&str] = &[
    "usize", "isize", "i128", "u128", "char", "HashMap", "HashSet", "BTreeSet", "VecDeque",
];

// type_def
pub fn type_def(args: &MarshalArgs) -> Result<TypeDef, DarlingError> {
    let mut def = TypeDef::new(args.ident.to_string());
    let mut errors = DarlingError::accumulator();

    for field in args.fields() {
        if let Some(property) = errors.handle(property(field)) {
            def.properties.push(property);
        }
    }

    errors.finish_with(def)
}

// property
fn property(field: &FieldArgs) -> Result<Property, DarlingError> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| DarlingError::custom("expected a named field").with_span(&field.ty))?;

    let (optional, ty) = match option_inner(&field.ty) {
        Some(inner) => (true, inner),
        None => (false, &field.ty),
    };

    let mut directives = DirectiveList::new();
    for offset in &field.offset {
        directives.push_offset(offset.group.as_deref(), offset.path.clone());
    }
    for json in &field.json {
        directives.push_json_name(json.group.as_deref(), json.name.clone());
    }

    Ok(Property {
        name: ident.unraw().to_string(),
        visibility: visibility(&field.vis),
        value: value_type(ty, field.scalar),
        optional,
        transient: field.skip,
        directives,
    })
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(_) => Visibility::Crate,
        syn::Visibility::Inherited => Visibility::Private,
    }
}

// value_type
// Vec and string-keyed BTreeMap are array levels, everything else is a leaf
fn value_type(ty: &Type, scalar: bool) -> ValueType {
    let ty = ungroup(ty);
    let tokens = ty.to_token_stream().to_string();

    let Type::Path(TypePath { qself: None, path }) = ty else {
        return ValueType::Unresolved(tokens);
    };
    let Some(last) = path.segments.last() else {
        return ValueType::Unresolved(tokens);
    };

    let name = last.ident.to_string();
    let args = type_args(&last.arguments);

    match (name.as_str(), args.as_slice()) {
        ("Vec", [item]) => ValueType::list(value_type(item, scalar)),
        ("BTreeMap", [key, item]) if is_string(key) => ValueType::map(value_type(item, scalar)),
        ("Option" | "BTreeMap" | "Vec", _) => ValueType::Unresolved(tokens),
        _ if scalar => ValueType::scalar(tokens),
        (name, []) if SCALARS.contains(&name) => ValueType::scalar(name),
        ("Value", []) => ValueType::Mixed,
        (name, _) if UNSUPPORTED.contains(&name) => ValueType::Unresolved(tokens),
        _ => ValueType::reference(tokens),
    }
}

// option_inner
// only a top-level Option marks a property optional
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ungroup(ty) else {
        return None;
    };
    let last = path.segments.last()?;

    match (last.ident == "Option", type_args(&last.arguments).as_slice()) {
        (true, [inner]) => Some(inner),
        _ => None,
    }
}

fn type_args(arguments: &PathArguments) -> Vec<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn is_string(ty: &Type) -> bool {
    matches!(ungroup(ty), Type::Path(TypePath { qself: None, path }) if path.is_ident("String"))
}

fn ungroup(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => ungroup(&group.elem),
        Type::Paren(paren) => ungroup(&paren.elem),
        other => other,
    }
}
