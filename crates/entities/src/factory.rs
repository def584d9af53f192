//! Construction policy: one `EntityKind` in, one fully built `Entity` out.

use entityforge_core::{IdProvider, RandomIds};

use crate::entity::{Easy, Entity, Hard, Medium};
use crate::kind::EntityKind;

/// Stateless factory namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityFactory;

impl EntityFactory {
    /// Build the entity for `kind` with a fresh random id.
    pub fn create(kind: EntityKind) -> Entity {
        Self::create_with(kind, &mut RandomIds)
    }

    /// Build the entity for `kind`, drawing its id from `ids`.
    ///
    /// `Help` draws no id and ignores the computed name; its display name is
    /// fixed by the variant.
    pub fn create_with<P: IdProvider + ?Sized>(kind: EntityKind, ids: &mut P) -> Entity {
        let name = Self::name_for(kind);
        let entity = match kind {
            EntityKind::Help => Entity::Help,
            EntityKind::Easy => Entity::Easy(Easy::new(ids.next_id(), name)),
            EntityKind::Medium => Entity::Medium(Medium::new(ids.next_id(), name)),
            EntityKind::Hard => Entity::Hard(Hard::new(ids.next_id(), name)),
        };

        tracing::debug!(
            kind = %kind,
            id = entity.id().map(|id| id.as_str()).unwrap_or("-"),
            "entity created"
        );
        entity
    }

    /// Name assigned to an entity of `kind` at construction.
    pub fn name_for(kind: EntityKind) -> String {
        match kind {
            EntityKind::Help => "Help".to_owned(),
            EntityKind::Easy => kind.label().to_owned(),
            EntityKind::Medium => kind.formatted_name(),
            EntityKind::Hard => "Hard".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entityforge_core::{EntityId, SequentialIds};

    #[test]
    fn each_kind_maps_to_its_own_variant() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityFactory::create(kind).kind(), kind);
        }
    }

    #[test]
    fn names_follow_kind() {
        assert_eq!(EntityFactory::create(EntityKind::Easy).name(), "EASY");
        assert_eq!(EntityFactory::create(EntityKind::Medium).name(), "Medium");
        assert_eq!(EntityFactory::create(EntityKind::Hard).name(), "Hard");
    }

    #[test]
    fn help_keeps_its_own_lowercase_name() {
        assert_eq!(EntityFactory::name_for(EntityKind::Help), "Help");
        let help = EntityFactory::create(EntityKind::Help);
        assert_eq!(help, Entity::Help);
        assert_eq!(help.name(), "help");
    }

    #[test]
    fn help_does_not_consume_an_id() {
        let mut ids = SequentialIds::new("e");
        assert_eq!(EntityFactory::create_with(EntityKind::Help, &mut ids), Entity::Help);
        let easy = EntityFactory::create_with(EntityKind::Easy, &mut ids);
        assert_eq!(easy.id(), Some(&EntityId::from("e-1")));
    }

    #[test]
    fn repeated_creation_gives_unequal_entities_with_equal_names() {
        for kind in [EntityKind::Easy, EntityKind::Medium, EntityKind::Hard] {
            let a = EntityFactory::create(kind);
            let b = EntityFactory::create(kind);
            assert_ne!(a, b);
            assert_eq!(a.name(), b.name());
        }
    }

    #[test]
    fn hard_starts_with_default_multiplier() {
        let hard = EntityFactory::create(EntityKind::Hard);
        assert_eq!(hard.as_hard().unwrap().multiplier(), 2.0);
    }

    #[test]
    fn injected_provider_makes_output_deterministic() {
        let mut ids = SequentialIds::new("m");
        let medium = EntityFactory::create_with(EntityKind::Medium, &mut ids);
        assert_eq!(medium, Entity::Medium(Medium::new("m-1", "Medium")));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_kind() -> impl Strategy<Value = EntityKind> {
            prop::sample::select(EntityKind::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn factory_is_total_and_tag_preserving(kind in any_kind()) {
                let entity = EntityFactory::create(kind);
                prop_assert_eq!(entity.kind(), kind);
                prop_assert_eq!(entity.id().is_none(), kind == EntityKind::Help);
            }

            #[test]
            fn generated_ids_have_uuid_shape(kind in any_kind()) {
                if let Some(id) = EntityFactory::create(kind).id() {
                    let s = id.as_str();
                    prop_assert_eq!(s.len(), 36);
                    for pos in [8usize, 13, 18, 23] {
                        prop_assert_eq!(s.as_bytes()[pos], b'-');
                    }
                    prop_assert!(id.to_uuid().is_ok());
                }
            }

            #[test]
            fn renamed_copy_differs_only_in_name(name in "[A-Za-z ]{1,20}") {
                let original = EntityFactory::create(EntityKind::Medium);
                let medium = original.as_medium().unwrap().clone();
                let renamed = medium.clone().with_name(name.clone());
                prop_assert_eq!(renamed.id(), medium.id());
                prop_assert_eq!(renamed.name(), name.as_str());
                prop_assert_eq!(renamed == medium, name == "Medium");
            }
        }
    }
}
