use crate::output::print_json;
use anyhow::Context;
use persona_core::store::ProfileStore;
use std::path::Path;

pub fn run(root: &Path, user: &str, prompt: bool, json: bool) -> anyhow::Result<()> {
    let store = ProfileStore::new(root);
    let record = store.load(user).context("failed to load profile")?;

    if prompt {
        print!("{}", record.system_prompt());
        return Ok(());
    }

    if json {
        return print_json(&record);
    }

    println!(
        "{} — {} (completed {})",
        record.user_id,
        record.archetype_blend.name,
        record.completed_at.format("%Y-%m-%d"),
    );
    for (name, score) in &record.archetype_blend.scores {
        println!("  {:<12} {:>5.1}", name.display_name(), score);
    }
    println!("Tone: {}", record.voice_profile.tone);
    Ok(())
}
