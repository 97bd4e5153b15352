use crate::{
    DefinitionError,
    access::Access,
    node::{Directive, TypeDef},
    profile::{Profile, ProfileKind},
};
use metafold_core::group::json_group;

///
/// JsonProfile
///
/// Maps JSON names onto offsets in `json:`-prefixed groups. A property with
/// explicit JSON names is bound in JSON groups only where they say; one
/// without is bound under its own name in the JSON default group. Runs after
/// the container pass, so plain default offsets are already in place.
///

pub struct JsonProfile;

impl Profile for JsonProfile {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Json
    }

    fn requires(&self) -> Option<ProfileKind> {
        Some(ProfileKind::Container)
    }

    fn default_groups(&self) -> Vec<String> {
        vec![json_group(None)]
    }

    fn prepare(&self, def: &mut TypeDef, _access: Access) -> Result<(), DefinitionError> {
        for property in def.properties.iter_mut().filter(|p| !p.transient) {
            let directives = &mut property.directives;

            if directives.has_json_name() {
                let offsets: Vec<_> = directives.json_names().map(|n| n.to_offset()).collect();
                for offset in offsets {
                    directives.push(Directive::Offset(offset));
                }
                continue;
            }

            if !directives.has_offset() {
                directives.push_offset(None, property.name.clone());
            }
            directives.push_json_name(None, property.name.clone());
            directives.push_offset(Some(&json_group(None)), property.name.clone());
        }

        Ok(())
    }
}
