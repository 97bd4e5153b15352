use crate::node::Visibility;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Access
///
/// Where the generated code is allowed to reach. A marshaller derived next
/// to its type lives in the same module and may assign anything; a
/// marshaller emitted elsewhere only sees what the type exposes.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    #[default]
    #[display("module")]
    Module,

    #[display("crate")]
    Crate,

    #[display("public")]
    Public,
}

impl Access {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "module" => Some(Self::Module),
            "crate" => Some(Self::Crate),
            "public" => Some(Self::Public),
            _ => None,
        }
    }

    /// Whether generated code with this access can read and assign a
    /// property of the given visibility.
    #[must_use]
    pub const fn allows(self, visibility: Visibility) -> bool {
        match self {
            Self::Module => true,
            Self::Crate => !matches!(visibility, Visibility::Private),
            Self::Public => matches!(visibility, Visibility::Public),
        }
    }
}
