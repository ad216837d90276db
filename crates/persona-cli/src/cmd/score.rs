use crate::input;
use crate::output::print_json;
use anyhow::Context;
use persona_core::onboarding::Onboarding;
use persona_core::record::OnboardingRecord;
use persona_core::store::ProfileStore;
use std::path::Path;

/// Run the full chain — resolve, blend, voice — over a responses file and
/// print (optionally persist) the finished record.
pub fn run(
    root: &Path,
    user: &str,
    input_path: &Path,
    save: bool,
    json: bool,
) -> anyhow::Result<()> {
    let file = input::load(input_path)?;

    let mut session = Onboarding::new(user).context("invalid user id")?;
    if let Some(name) = &file.name {
        session.set_display_name(name.as_str());
    }
    input::apply(&file, session.assessment_mut())?;
    session.select_values(file.values.clone())?;
    session.select_inspirations(file.inspirations.clone())?;
    if let Some(future_self) = &file.future_self {
        session.set_future_self(future_self.as_str());
    }

    let record = session.finish().context("onboarding incomplete")?;

    if save {
        let store = ProfileStore::new(root);
        store.save(&record).context("failed to save profile")?;
        println!("Profile saved: {}", store.path_for(user).display());
    }

    if json {
        return print_json(&record);
    }
    print_summary(&record);
    Ok(())
}

fn print_summary(record: &OnboardingRecord) {
    println!(
        "{} — {} (primary: {}, secondary: {})",
        record.user_id,
        record.archetype_blend.name,
        record.archetype_blend.primary.display_name(),
        record.archetype_blend.secondary.display_name(),
    );
    for (name, score) in &record.archetype_blend.scores {
        println!("  {:<12} {:>5.1}", name.display_name(), score);
    }
    println!("Tone: {}", record.voice_profile.tone);
    println!("Motivation: {}", record.voice_profile.motivation_style);
    for phrase in &record.voice_profile.example_phrases {
        println!("  \"{phrase}\"");
    }
}
