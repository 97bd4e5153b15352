mod container;
mod json;

pub use container::ContainerProfile;
pub use json::JsonProfile;

use crate::{DefinitionError, access::Access, node::TypeDef};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ProfileKind
///
/// Ordered by dependency: a profile only ever requires kinds before it.
///

#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    #[display("container")]
    Container,

    #[display("json")]
    Json,
}

impl ProfileKind {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "container" => Some(Self::Container),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn profile(self) -> Box<dyn Profile> {
        match self {
            Self::Container => Box::new(ContainerProfile),
            Self::Json => Box::new(JsonProfile),
        }
    }
}

///
/// Profile
///
/// A layer of generated behaviour. Each profile owns default groups that
/// are registered before any property group, and an inference pass that
/// fills in directives the type left implicit.
///

pub trait Profile {
    fn kind(&self) -> ProfileKind;

    /// Profile that must already be active for this one to be added.
    fn requires(&self) -> Option<ProfileKind> {
        None
    }

    fn default_groups(&self) -> Vec<String>;

    fn prepare(&self, def: &mut TypeDef, access: Access) -> Result<(), DefinitionError>;
}

///
/// ProfileSet
///
/// The profiles active for one type.
///

pub struct ProfileSet {
    type_name: String,
    profiles: Vec<Box<dyn Profile>>,
}

impl ProfileSet {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            profiles: Vec::new(),
        }
    }

    /// Build from a list of kinds in any order; repeats are ignored.
    pub fn from_kinds(
        type_name: impl Into<String>,
        kinds: &[ProfileKind],
    ) -> Result<Self, DefinitionError> {
        let mut kinds = kinds.to_vec();
        kinds.sort_unstable();
        kinds.dedup();

        let mut set = Self::new(type_name);
        for kind in kinds {
            set.add(kind)?;
        }

        Ok(set)
    }

    pub fn add(&mut self, kind: ProfileKind) -> Result<(), DefinitionError> {
        if self.contains(kind) {
            return Ok(());
        }

        let profile = kind.profile();
        if let Some(requires) = profile.requires()
            && !self.contains(requires)
        {
            return Err(DefinitionError::MissingBaseProfile {
                type_name: self.type_name.clone(),
                profile: kind,
                requires,
            });
        }

        self.profiles.push(profile);

        Ok(())
    }

    #[must_use]
    pub fn contains(&self, kind: ProfileKind) -> bool {
        self.profiles.iter().any(|p| p.kind() == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProfileKind> + '_ {
        self.profiles.iter().map(|p| p.kind())
    }

    /// Default groups of every profile, in the order the profiles were added.
    #[must_use]
    pub fn pre_registered_groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for name in self.profiles.iter().flat_map(|p| p.default_groups()) {
            if !groups.contains(&name) {
                groups.push(name);
            }
        }

        groups
    }

    /// Run the inference passes in the order the profiles were added, so a
    /// dependent profile sees the defaults its base profile filled in.
    pub fn prepare(&self, def: &mut TypeDef, access: Access) -> Result<(), DefinitionError> {
        for profile in &self.profiles {
            log::trace!("{}: {} pass", def.name, profile.kind());
            profile.prepare(def, access)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{OffsetDirective, Property, ValueType};

    #[test]
    fn json_requires_container() {
        let mut set = ProfileSet::new("T");
        let err = set.add(ProfileKind::Json).unwrap_err();

        assert_eq!(
            err,
            DefinitionError::MissingBaseProfile {
                type_name: "T".into(),
                profile: ProfileKind::Json,
                requires: ProfileKind::Container,
            }
        );
    }

    #[test]
    fn kinds_in_any_order_are_accepted() {
        let set =
            ProfileSet::from_kinds("T", &[ProfileKind::Json, ProfileKind::Container]).unwrap();

        assert_eq!(
            set.kinds().collect::<Vec<_>>(),
            [ProfileKind::Container, ProfileKind::Json]
        );
        assert_eq!(set.pre_registered_groups(), ["", "json:"]);
    }

    #[test]
    fn base_pass_binds_json_named_properties_to_the_default_group() {
        let set =
            ProfileSet::from_kinds("T", &[ProfileKind::Json, ProfileKind::Container]).unwrap();
        let mut def = TypeDef::new("T").with_property({
            let mut p = Property::new("named", ValueType::scalar("String"));
            p.directives.push_json_name(None, "n");
            p
        });

        set.prepare(&mut def, Access::Module).unwrap();

        let offsets: Vec<_> = def.properties[0].directives.offsets().cloned().collect();
        assert_eq!(
            offsets,
            [
                OffsetDirective::new(None, "named"),
                OffsetDirective::new(Some("json:"), "n"),
            ]
        );
    }
}
