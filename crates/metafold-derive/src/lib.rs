//! `#[derive(Marshal)]` for named and unit structs.
//!
//! ```ignore
//! #[derive(Default, Marshal)]
//! #[marshal(profiles(container, json))]
//! pub struct User {
//!     #[marshal(offset(group = "db", path = "user_name"), json(name = "userName"))]
//!     pub name: Option<String>,
//!
//!     #[marshal(skip)]
//!     pub cache: Vec<u8>,
//! }
//! ```

mod args;
mod model;

use darling::{Error as DarlingError, FromDeriveInput};
use metafold_build::Target;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(Marshal, attributes(marshal))]
pub fn derive_marshal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(DarlingError::write_errors)
        .into()
}

fn expand(input: &DeriveInput) -> Result<TokenStream2, DarlingError> {
    let args = args::MarshalArgs::from_derive_input(input)?;
    let def = model::type_def(&args)?;
    let options = args.options()?;
    let target = Target::new(&args.ident, &args.generics);

    metafold_build::generate(&def, &target, &options).map_err(|err| args.definition_error(&err))
}
