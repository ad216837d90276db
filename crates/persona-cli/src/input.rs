use anyhow::Context;
use persona_core::assessment::Assessment;
use persona_core::types::{Pole, TraitKey};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ResponsesFile
// ---------------------------------------------------------------------------

/// YAML input the onboarding driver consumes: one entry per trait key with
/// both agreement ratings, plus clarification slider values for traits the
/// resolver flags ambiguous, and the value/inspiration selections.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponsesFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub responses: BTreeMap<String, ResponseEntry>,
    #[serde(default)]
    pub clarifications: BTreeMap<String, u8>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub inspirations: Vec<String>,
    #[serde(default)]
    pub future_self: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseEntry {
    #[serde(default)]
    pub left: u8,
    #[serde(default)]
    pub right: u8,
}

pub fn load(path: &Path) -> anyhow::Result<ResponsesFile> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: ResponsesFile =
        serde_yaml::from_str(&data).context("failed to parse responses file")?;
    Ok(file)
}

/// Replay a responses file into an assessment. Unknown trait keys,
/// out-of-range ratings, and clarifications for unambiguous traits all
/// surface as errors; a rating of 0 means "not yet answered" and is
/// skipped.
pub fn apply(file: &ResponsesFile, assessment: &mut Assessment) -> anyhow::Result<()> {
    for (key, entry) in &file.responses {
        let key = TraitKey::from_str(key)?;
        if entry.left > 0 {
            assessment.record_response(key, Pole::Left, entry.left)?;
        }
        if entry.right > 0 {
            assessment.record_response(key, Pole::Right, entry.right)?;
        }
    }
    for (key, value) in &file.clarifications {
        let key = TraitKey::from_str(key)?;
        assessment.record_clarification(key, *value)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
