//! Consumers that dispatch over the closed entity set.
//!
//! Matches here are exhaustive with no wildcard arm, so adding a variant
//! breaks the build until every consumer handles it.

use std::io;

use entityforge_core::DomainResult;

use crate::entity::{Entity, Medium};
use crate::kind::EntityKind;

/// Fixed label per variant.
pub fn classify(entity: &Entity) -> &'static str {
    match entity {
        Entity::Help => "Help",
        Entity::Easy(_) => "easy",
        Entity::Medium(_) => "medium",
        Entity::Hard(_) => "hard",
    }
}

/// Classify a variant tag that arrives as text, e.g. `"MEDIUM"`.
pub fn classify_tag(tag: &str) -> DomainResult<&'static str> {
    let label = match EntityKind::from_label(tag)? {
        EntityKind::Help => "Help",
        EntityKind::Easy => "easy",
        EntityKind::Medium => "medium",
        EntityKind::Hard => "hard",
    };
    Ok(label)
}

impl Medium {
    /// `"<name> class <id>"`.
    pub fn summary(&self) -> String {
        format!("{} class {}", self.name(), self.id())
    }

    /// `"Medium class <id>"`, independent of the name.
    pub fn info(&self) -> String {
        format!("Medium class {}", self.id())
    }

    /// Write [`Medium::summary`] as one line.
    pub fn print_info<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Easy, Hard};
    use entityforge_core::DomainError;

    #[test]
    fn classify_labels_each_variant() {
        assert_eq!(classify(&Entity::Help), "Help");
        assert_eq!(classify(&Easy::new("i", "n").into()), "easy");
        assert_eq!(classify(&Medium::new("i", "n").into()), "medium");
        assert_eq!(classify(&Hard::new("i", "n").into()), "hard");
    }

    #[test]
    fn classify_tag_agrees_with_classify() {
        for kind in EntityKind::ALL {
            let entity = crate::EntityFactory::create(kind);
            assert_eq!(classify_tag(kind.label()).unwrap(), classify(&entity));
        }
    }

    #[test]
    fn classify_tag_fails_loudly_on_unknown_tag() {
        assert_eq!(
            classify_tag("EXTREME").unwrap_err(),
            DomainError::exhaustiveness("EXTREME")
        );
    }

    #[test]
    fn medium_summary_and_info() {
        let medium = Medium::new("id", "name");
        assert_eq!(medium.summary(), "name class id");
        assert_eq!(medium.info(), "Medium class id");
    }

    #[test]
    fn print_info_writes_summary_line() {
        let mut out = Vec::new();
        Medium::new("abc", "Medium").print_info(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Medium class abc\n");
    }

    #[test]
    fn print_info_after_narrowing() {
        let entity: Entity = Medium::new("abc", "Medium").into();
        let mut out = Vec::new();
        if let Ok(medium) = entity.as_medium() {
            medium.print_info(&mut out).unwrap();
        }
        assert!(!out.is_empty());

        let hard: Entity = Hard::new("abc", "Hard").into();
        assert!(matches!(
            hard.as_medium(),
            Err(DomainError::NarrowingViolation { .. })
        ));
    }
}
