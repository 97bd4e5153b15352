use crate::{
    DefinitionError,
    access::Access,
    node::TypeDef,
    profile::{Profile, ProfileKind},
};
use metafold_core::DEFAULT_GROUP;

///
/// ContainerProfile
///
/// The base profile. Every marshalled property must be reachable and of a
/// supported type; a property with no offset is bound to its own name in
/// the default group.
///

pub struct ContainerProfile;

impl Profile for ContainerProfile {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Container
    }

    fn default_groups(&self) -> Vec<String> {
        vec![DEFAULT_GROUP.to_string()]
    }

    fn prepare(&self, def: &mut TypeDef, access: Access) -> Result<(), DefinitionError> {
        for property in def.properties.iter_mut().filter(|p| !p.transient) {
            if !access.allows(property.visibility) {
                return Err(DefinitionError::DisallowedVisibility {
                    type_name: def.name.clone(),
                    property: property.name.clone(),
                    visibility: property.visibility,
                });
            }

            if let Some(found) = property.value.unsupported() {
                return Err(DefinitionError::UnresolvedType {
                    type_name: def.name.clone(),
                    property: property.name.clone(),
                    found,
                });
            }

            if !property.directives.has_offset() {
                let path = property.name.clone();
                property.directives.push_offset(None, path);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{OffsetDirective, Property, ValueType, Visibility};

    fn prepare(def: &mut TypeDef, access: Access) -> Result<(), DefinitionError> {
        ContainerProfile.prepare(def, access)
    }

    #[test]
    fn undirected_properties_get_a_default_offset() {
        let mut def = TypeDef::new("T")
            .with_property(Property::new("plain", ValueType::scalar("u8")))
            .with_property({
                let mut p = Property::new("custom", ValueType::scalar("u8"));
                p.directives.push_offset(Some("db"), "c");
                p
            });

        prepare(&mut def, Access::Module).unwrap();

        let plain: Vec<_> = def.properties[0].directives.offsets().cloned().collect();
        assert_eq!(plain, [OffsetDirective::new(None, "plain")]);

        let custom: Vec<_> = def.properties[1].directives.offsets().cloned().collect();
        assert_eq!(custom, [OffsetDirective::new(Some("db"), "c")]);
    }

    #[test]
    fn transient_properties_are_left_alone() {
        let mut def = TypeDef::new("T")
            .with_property(Property::new("cache", ValueType::Mixed).transient());

        prepare(&mut def, Access::Public).unwrap();
        assert!(def.properties[0].directives.is_empty());
    }

    #[test]
    fn mixed_and_unresolved_types_are_rejected() {
        let mut def = TypeDef::new("T").with_property(Property::new(
            "any",
            ValueType::list(ValueType::Mixed),
        ));

        let err = prepare(&mut def, Access::Module).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::UnresolvedType {
                type_name: "T".into(),
                property: "any".into(),
                found: "mixed".into(),
            }
        );
    }

    #[test]
    fn private_properties_need_module_access() {
        let mut def = TypeDef::new("T").with_property(
            Property::new("secret", ValueType::scalar("String"))
                .with_visibility(Visibility::Private),
        );

        assert!(prepare(&mut def.clone(), Access::Module).is_ok());

        let err = prepare(&mut def, Access::Crate).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::DisallowedVisibility { ref property, visibility: Visibility::Private, .. }
                if property == "secret"
        ));
    }
}
