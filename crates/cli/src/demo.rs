//! The walkthrough printed by the `entityforge` binary.

use std::io::Write;

use anyhow::Context;
use entityforge_core::same_instance;
use entityforge_entities::{Easy, Entity, EntityFactory, EntityKind, classify};

use crate::config::Config;

const SEPARATOR: &str = "---------";

/// Run the demo for every configured kind, then the equality walkthrough.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    for &kind in &config.kinds {
        show_kind(kind, out).with_context(|| format!("demonstrating {kind}"))?;
    }
    writeln!(out, "{SEPARATOR}")?;
    equality(out).context("equality walkthrough")?;
    Ok(())
}

fn show_kind<W: Write>(kind: EntityKind, out: &mut W) -> anyhow::Result<()> {
    let entity = EntityFactory::create(kind);
    tracing::info!(kind = %kind, label = classify(&entity), "created entity");

    writeln!(out, "{entity}")?;
    writeln!(out, "classified as {}", classify(&entity))?;

    if let Entity::Medium(medium) = &entity {
        medium.print_info(out)?;
        writeln!(out, "{}", medium.info())?;
    }
    if let Entity::Hard(hard) = &entity {
        writeln!(out, "multiplier {}", hard.multiplier())?;
    }
    Ok(())
}

fn equality<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let first = EntityFactory::create(EntityKind::Easy);
    let second = EntityFactory::create(EntityKind::Easy);
    writeln!(out, "factory entities equal: {}", first == second)?;

    let a = Easy::new("id", "name");
    let b = Easy::new("id", "name");
    writeln!(out, "hand-built entities equal: {}", a == b)?;

    let copy = a.clone();
    let renamed = a.clone().with_name("new name");
    writeln!(out, "copy equal: {}", copy == a)?;
    writeln!(out, "copy same instance: {}", same_instance(&copy, &a))?;
    writeln!(out, "renamed copy equal: {}", renamed == a)?;
    Ok(())
}
