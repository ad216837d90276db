use crate::archetype::{self, ArchetypeBlend};
use crate::error::Result;
use crate::values;
use serde::{Deserialize, Serialize};

/// When the secondary archetype scores within this many points of the
/// primary, its accent colors the tone text.
pub const SECONDARY_INFLUENCE_THRESHOLD: f64 = 15.0;

/// Substituted for `{name}` when the user gave no display name.
const DEFAULT_NAME: &str = "friend";

// ---------------------------------------------------------------------------
// VoiceTemplate
// ---------------------------------------------------------------------------

/// Static per-archetype voice material. Phrase templates may carry `{name}`,
/// `{value}`, and `{inspiration}` tokens.
#[derive(Debug, Clone, Copy)]
pub struct VoiceTemplate {
    pub tone: &'static str,
    /// Short flavor used when this archetype appears as a close secondary.
    pub tone_accent: &'static str,
    pub motivation_style: &'static str,
    pub phrases: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// VoiceProfile
// ---------------------------------------------------------------------------

/// Derived tone/style/phrasing guidance for downstream prompt construction.
/// Immutable once generated; regenerated only if upstream inputs change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfile {
    pub tone: String,
    pub motivation_style: String,
    pub example_phrases: Vec<String>,
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

pub struct VoiceInputs<'a> {
    pub blend: &'a ArchetypeBlend,
    pub display_name: Option<&'a str>,
    pub value_ids: &'a [String],
    pub inspiration_ids: &'a [String],
    pub future_self: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

fn fill(template: &str, name: &str, value: &str, inspiration: &str) -> String {
    template
        .replace("{name}", name)
        .replace("{value}", value)
        .replace("{inspiration}", inspiration)
}

/// Derive the voice profile from the blend plus selections. Deterministic
/// for identical inputs. The blend and the value/inspiration selections are
/// required contract inputs and are re-validated here; the future-self text
/// is optional and simply omitted when absent.
pub fn generate(inputs: &VoiceInputs) -> Result<VoiceProfile> {
    values::validate_value_selection(inputs.value_ids)?;
    values::validate_inspiration_selection(inputs.inspiration_ids)?;

    let primary = archetype::archetype(inputs.blend.primary);
    let secondary = archetype::archetype(inputs.blend.secondary);

    let gap = inputs.blend.score(inputs.blend.primary) - inputs.blend.score(inputs.blend.secondary);
    let tone = if gap <= SECONDARY_INFLUENCE_THRESHOLD {
        format!(
            "{}, with an undercurrent of {}",
            primary.voice.tone, secondary.voice.tone_accent
        )
    } else {
        primary.voice.tone.to_string()
    };

    let name = inputs.display_name.unwrap_or(DEFAULT_NAME);
    // Selections are validated above, so these lookups cannot miss.
    let top_value = values::value_by_id(&inputs.value_ids[0])
        .expect("validated selection")
        .label;
    let top_inspiration = values::inspiration_by_id(&inputs.inspiration_ids[0])
        .expect("validated selection")
        .name;

    let mut example_phrases: Vec<String> = primary
        .voice
        .phrases
        .iter()
        .map(|t| fill(t, name, top_value, top_inspiration))
        .collect();
    if let Some(future_self) = inputs.future_self {
        example_phrases.push(format!(
            "You said it yourself: \"{future_self}\". Today is part of getting there."
        ));
    }

    Ok(VoiceProfile {
        tone,
        motivation_style: primary.voice.motivation_style.to_string(),
        example_phrases,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersonaError;
    use crate::types::ArchetypeName;
    use std::collections::BTreeMap;

    fn test_blend(primary_score: f64, secondary_score: f64) -> ArchetypeBlend {
        let mut scores: BTreeMap<ArchetypeName, f64> =
            ArchetypeName::all().iter().map(|a| (*a, 10.0)).collect();
        scores.insert(ArchetypeName::Sage, primary_score);
        scores.insert(ArchetypeName::Strategist, secondary_score);
        ArchetypeBlend {
            scores,
            primary: ArchetypeName::Sage,
            secondary: ArchetypeName::Strategist,
            name: "The Scholar".to_string(),
        }
    }

    fn value_ids() -> Vec<String> {
        ["curiosity", "family", "ambition", "health", "justice"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn inspiration_ids() -> Vec<String> {
        [
            "marie-curie",
            "ada-lovelace",
            "frida-kahlo",
            "nelson-mandela",
            "serena-williams",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn generates_from_primary_template() {
        let blend = test_blend(90.0, 60.0);
        let profile = generate(&VoiceInputs {
            blend: &blend,
            display_name: Some("Ada"),
            value_ids: &value_ids(),
            inspiration_ids: &inspiration_ids(),
            future_self: None,
        })
        .unwrap();

        assert_eq!(profile.tone, "calm, reflective, and steady");
        assert!(!profile.motivation_style.is_empty());
        assert_eq!(profile.example_phrases.len(), 4);
        assert!(profile.example_phrases[0].contains("Ada"));
        assert!(profile
            .example_phrases
            .iter()
            .any(|p| p.contains("Marie Curie")));
        assert!(profile
            .example_phrases
            .iter()
            .any(|p| p.contains("Curiosity")));
    }

    #[test]
    fn close_secondary_colors_the_tone() {
        let blend = test_blend(80.0, 70.0);
        let profile = generate(&VoiceInputs {
            blend: &blend,
            display_name: None,
            value_ids: &value_ids(),
            inspiration_ids: &inspiration_ids(),
            future_self: None,
        })
        .unwrap();
        assert_eq!(
            profile.tone,
            "calm, reflective, and steady, with an undercurrent of methodical clarity"
        );
    }

    #[test]
    fn missing_name_falls_back() {
        let blend = test_blend(90.0, 60.0);
        let profile = generate(&VoiceInputs {
            blend: &blend,
            display_name: None,
            value_ids: &value_ids(),
            inspiration_ids: &inspiration_ids(),
            future_self: None,
        })
        .unwrap();
        assert!(profile.example_phrases[0].contains("friend"));
    }

    #[test]
    fn future_self_adds_a_phrase() {
        let blend = test_blend(90.0, 60.0);
        let profile = generate(&VoiceInputs {
            blend: &blend,
            display_name: Some("Ada"),
            value_ids: &value_ids(),
            inspiration_ids: &inspiration_ids(),
            future_self: Some("I run my own studio"),
        })
        .unwrap();
        assert_eq!(profile.example_phrases.len(), 5);
        assert!(profile.example_phrases[4].contains("I run my own studio"));
    }

    #[test]
    fn rejects_incomplete_selections() {
        let blend = test_blend(90.0, 60.0);
        let result = generate(&VoiceInputs {
            blend: &blend,
            display_name: None,
            value_ids: &[],
            inspiration_ids: &inspiration_ids(),
            future_self: None,
        });
        assert!(matches!(
            result,
            Err(PersonaError::InvalidValueSelection { .. })
        ));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let blend = test_blend(80.0, 70.0);
        let inputs = VoiceInputs {
            blend: &blend,
            display_name: Some("Ada"),
            value_ids: &value_ids(),
            inspiration_ids: &inspiration_ids(),
            future_self: Some("calmer and braver"),
        };
        let a = generate(&inputs).unwrap();
        let b = generate(&inputs).unwrap();
        assert_eq!(a, b);
    }
}
