use crate::{DefinitionError, node::TypeDef};
use metafold_core::{GroupBits, MAX_GROUPS};

///
/// GroupMap
///
/// Group names of one type with their bits, in discovery order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GroupMap {
    entries: Vec<(String, GroupBits)>,
}

impl GroupMap {
    #[must_use]
    pub fn bit(&self, name: &str) -> Option<GroupBits> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bit)| *bit)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GroupBits)> {
        self.entries.iter().map(|(n, bit)| (n.as_str(), *bit))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    // register
    // first sighting gets the next free bit
    fn register(&mut self, type_name: &str, name: &str) -> Result<(), DefinitionError> {
        if self.bit(name).is_some() {
            return Ok(());
        }
        if self.entries.len() >= MAX_GROUPS {
            return Err(DefinitionError::TooManyGroups {
                type_name: type_name.to_string(),
                limit: MAX_GROUPS,
            });
        }

        let bit: GroupBits = 1 << self.entries.len();
        log::trace!("{type_name}: group '{name}' -> {bit:#x}");
        self.entries.push((name.to_string(), bit));

        Ok(())
    }
}

///
/// GroupResolver
///
/// Assigns each distinct group of a type one bit. The pre-registered names
/// come first so profile-owned defaults get the lowest bits regardless of
/// what the properties declare.
///

#[derive(Clone, Debug, Default)]
pub struct GroupResolver {
    pre_registered: Vec<String>,
}

impl GroupResolver {
    #[must_use]
    pub fn new<I, S>(pre_registered: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pre_registered: pre_registered.into_iter().map(Into::into).collect(),
        }
    }

    /// Walk properties in declaration order and their offsets in attachment
    /// order. Transient properties take part in no group.
    pub fn resolve(&self, def: &TypeDef) -> Result<GroupMap, DefinitionError> {
        let mut map = GroupMap::default();

        for name in &self.pre_registered {
            map.register(&def.name, name)?;
        }

        for property in def.marshalled() {
            let mut seen: Vec<&str> = Vec::new();

            for offset in property.directives.offsets() {
                let group = offset.group_name();
                if seen.contains(&group) {
                    return Err(DefinitionError::DuplicateDirective {
                        type_name: def.name.clone(),
                        property: property.name.clone(),
                        group: group.to_string(),
                    });
                }
                seen.push(group);

                map.register(&def.name, group)?;
            }
        }

        log::debug!(
            "{}: resolved {} groups {:?}",
            def.name,
            map.len(),
            map.names().collect::<Vec<_>>()
        );

        Ok(map)
    }
}
