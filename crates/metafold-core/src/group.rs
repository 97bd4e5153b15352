use crate::{DEFAULT_GROUP, JSON_GROUP_PREFIX, MarshalError};

/// One bit per group; the inclusion check is a single mask test.
pub type GroupBits = u64;

///
/// GroupEntry
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroupEntry {
    pub name: &'static str,
    pub bit: GroupBits,
}

impl GroupEntry {
    #[must_use]
    pub const fn new(name: &'static str, bit: GroupBits) -> Self {
        Self { name, bit }
    }
}

///
/// GroupTable
///
/// Mapping from group name to group bit, emitted once per generated type.
/// It is written at generation time and only ever read afterwards, so a
/// single `static` is shared by every call of the generated routines.
///

#[derive(Clone, Copy, Debug)]
pub struct GroupTable {
    entries: &'static [GroupEntry],
}

impl GroupTable {
    #[must_use]
    pub const fn new(entries: &'static [GroupEntry]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [GroupEntry] {
        self.entries
    }

    /// Look up the bit of a group; `None` addresses the default group.
    #[must_use]
    pub fn get(&self, group: Option<&str>) -> Option<GroupBits> {
        let name = group.unwrap_or(DEFAULT_GROUP);

        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.bit)
    }

    #[must_use]
    pub fn contains(&self, group: Option<&str>) -> bool {
        self.get(group).is_some()
    }

    /// Resolve a requested group or fail with `UnsupportedGroup`.
    pub fn resolve(
        &self,
        type_name: &'static str,
        group: Option<&str>,
    ) -> Result<GroupBits, MarshalError> {
        self.get(group).ok_or_else(|| MarshalError::UnsupportedGroup {
            type_name,
            group: group.unwrap_or(DEFAULT_GROUP).to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

/// Name of the JSON-namespaced group for a requested group.
#[must_use]
pub fn json_group(group: Option<&str>) -> String {
    format!("{JSON_GROUP_PREFIX}{}", group.unwrap_or(DEFAULT_GROUP))
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: GroupTable = GroupTable::new(&[
        GroupEntry::new("", 1),
        GroupEntry::new("json:", 2),
        GroupEntry::new("db", 4),
    ]);

    #[test]
    fn default_group_is_addressed_by_none_and_empty_name() {
        assert_eq!(TABLE.get(None), Some(1));
        assert_eq!(TABLE.get(Some("")), Some(1));
        assert_eq!(TABLE.get(Some("db")), Some(4));
    }

    #[test]
    fn unknown_group_fails_instead_of_defaulting() {
        let err = TABLE.resolve("Sample", Some("api")).unwrap_err();

        assert_eq!(
            err,
            MarshalError::UnsupportedGroup {
                type_name: "Sample",
                group: "api".to_string(),
            }
        );
        assert_eq!(err.to_string(), "group 'api' not supported for Sample");
    }

    #[test]
    fn json_group_namespaces_requested_name() {
        assert_eq!(json_group(None), "json:");
        assert_eq!(json_group(Some("top")), "json:top");
    }

    #[test]
    fn names_follow_table_order() {
        assert_eq!(TABLE.names().collect::<Vec<_>>(), ["", "json:", "db"]);
        assert_eq!(TABLE.len(), 3);
    }
}
