use crate::output::{print_json, print_table};
use clap::Subcommand;
use persona_core::archetype::ARCHETYPES;
use persona_core::catalog::{GROUPS, STATEMENTS, TRAITS};
use persona_core::values::{INSPIRATIONS, VALUES};

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// List the trait dimensions
    Traits,
    /// List the statement groups with their statement pairs
    Groups,
    /// List the core values
    Values,
    /// List the inspirations
    Inspirations,
    /// List the archetypes
    Archetypes,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CatalogSubcommand::Traits => list_traits(json),
        CatalogSubcommand::Groups => list_groups(json),
        CatalogSubcommand::Values => list_values(json),
        CatalogSubcommand::Inspirations => list_inspirations(json),
        CatalogSubcommand::Archetypes => list_archetypes(json),
    }
}

fn list_traits(json: bool) -> anyhow::Result<()> {
    if json {
        let value: Vec<_> = TRAITS
            .iter()
            .map(|t| {
                serde_json::json!({
                    "key": t.key,
                    "category": t.category,
                    "leftLabel": t.left_label,
                    "rightLabel": t.right_label,
                })
            })
            .collect();
        return print_json(&value);
    }

    let rows = TRAITS
        .iter()
        .map(|t| {
            vec![
                t.key.to_string(),
                t.category.to_string(),
                t.left_label.to_string(),
                t.right_label.to_string(),
            ]
        })
        .collect();
    print_table(&["KEY", "CATEGORY", "LEFT", "RIGHT"], rows);
    Ok(())
}

fn list_groups(json: bool) -> anyhow::Result<()> {
    if json {
        let value: Vec<_> = GROUPS
            .iter()
            .map(|g| {
                serde_json::json!({
                    "category": g.category,
                    "title": g.title,
                    "description": g.description,
                    "traits": g.traits,
                })
            })
            .collect();
        return print_json(&value);
    }

    for group in &GROUPS {
        println!("{} — {}", group.title, group.description);
        for key in &group.traits {
            let pair = &STATEMENTS[key.index()];
            println!("  {key}");
            println!("    L: {}", pair.left_statement);
            println!("    R: {}", pair.right_statement);
        }
        println!();
    }
    Ok(())
}

fn list_values(json: bool) -> anyhow::Result<()> {
    if json {
        let value: Vec<_> = VALUES
            .iter()
            .map(|v| serde_json::json!({"id": v.id, "label": v.label, "category": v.category}))
            .collect();
        return print_json(&value);
    }

    let rows = VALUES
        .iter()
        .map(|v| {
            vec![
                v.id.to_string(),
                v.label.to_string(),
                v.category.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "LABEL", "CATEGORY"], rows);
    Ok(())
}

fn list_inspirations(json: bool) -> anyhow::Result<()> {
    if json {
        let value: Vec<_> = INSPIRATIONS
            .iter()
            .map(|i| serde_json::json!({"id": i.id, "name": i.name, "field": i.field}))
            .collect();
        return print_json(&value);
    }

    let rows = INSPIRATIONS
        .iter()
        .map(|i| vec![i.id.to_string(), i.name.to_string(), i.field.to_string()])
        .collect();
    print_table(&["ID", "NAME", "FIELD"], rows);
    Ok(())
}

fn list_archetypes(json: bool) -> anyhow::Result<()> {
    if json {
        let value: Vec<_> = ARCHETYPES
            .iter()
            .map(|a| {
                serde_json::json!({
                    "name": a.name,
                    "tagline": a.tagline,
                    "tone": a.voice.tone,
                })
            })
            .collect();
        return print_json(&value);
    }

    let rows = ARCHETYPES
        .iter()
        .map(|a| {
            vec![
                a.name.display_name().to_string(),
                a.tagline.to_string(),
                a.voice.tone.to_string(),
            ]
        })
        .collect();
    print_table(&["NAME", "TAGLINE", "TONE"], rows);
    Ok(())
}
