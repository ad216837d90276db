use crate::archetype::ArchetypeBlend;
use crate::resolver::UserTraits;
use crate::values;
use crate::voice::VoiceProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OnboardingRecord
// ---------------------------------------------------------------------------

/// The single atomic record handed to persistence when onboarding finishes:
/// resolved traits, archetype blend, voice profile, and the selections that
/// produced them. Field names follow the exported camelCase contract shared
/// with non-Rust consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub user_id: String,
    pub traits: UserTraits,
    pub archetype_blend: ArchetypeBlend,
    pub voice_profile: VoiceProfile,
    pub selected_value_ids: Vec<String>,
    pub selected_inspiration_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_self: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl OnboardingRecord {
    /// Render the system-instruction text the chat assistant is templated
    /// with. Pure string construction; the completion call itself lives
    /// outside this crate.
    pub fn system_prompt(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "You are a personal assistant speaking to {}. Their personality profile is \"{}\" (primary: {}, secondary: {}).\n",
            self.user_id,
            self.archetype_blend.name,
            self.archetype_blend.primary.display_name(),
            self.archetype_blend.secondary.display_name(),
        ));
        out.push_str(&format!("Speak in a tone that is {}.\n", self.voice_profile.tone));
        out.push_str(&format!(
            "When motivating, use a style that {}.\n",
            self.voice_profile.motivation_style
        ));

        let value_labels: Vec<&str> = self
            .selected_value_ids
            .iter()
            .filter_map(|id| values::value_by_id(id).map(|v| v.label))
            .collect();
        if !value_labels.is_empty() {
            out.push_str(&format!("Their core values: {}.\n", value_labels.join(", ")));
        }

        let inspiration_names: Vec<&str> = self
            .selected_inspiration_ids
            .iter()
            .filter_map(|id| values::inspiration_by_id(id).map(|i| i.name))
            .collect();
        if !inspiration_names.is_empty() {
            out.push_str(&format!(
                "People they admire: {}.\n",
                inspiration_names.join(", ")
            ));
        }

        if let Some(future_self) = &self.future_self {
            out.push_str(&format!(
                "The person they are working toward becoming: \"{future_self}\".\n"
            ));
        }

        out.push_str("Example phrasings in their voice:\n");
        for phrase in &self.voice_profile.example_phrases {
            out.push_str(&format!("- {phrase}\n"));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype;
    use crate::assessment::RawResponse;
    use crate::resolver;
    use crate::types::TraitKey;
    use crate::voice::{self, VoiceInputs};
    use std::collections::BTreeMap;

    fn sample_record() -> OnboardingRecord {
        let responses: BTreeMap<_, _> = TraitKey::all()
            .iter()
            .map(|k| (*k, RawResponse { left: 5, right: 1 }))
            .collect();
        let traits = resolver::resolve(&responses, &BTreeMap::new()).unwrap();
        let blend = archetype::blend(&traits);
        let value_ids: Vec<String> = ["curiosity", "wisdom", "balance", "mindfulness", "health"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let inspiration_ids: Vec<String> = [
            "marcus-aurelius",
            "jane-goodall",
            "maya-angelou",
            "marie-curie",
            "eleanor-roosevelt",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let voice_profile = voice::generate(&VoiceInputs {
            blend: &blend,
            display_name: Some("Ada"),
            value_ids: &value_ids,
            inspiration_ids: &inspiration_ids,
            future_self: None,
        })
        .unwrap();

        OnboardingRecord {
            user_id: "ada".to_string(),
            traits,
            archetype_blend: blend,
            voice_profile,
            selected_value_ids: value_ids,
            selected_inspiration_ids: inspiration_ids,
            future_self: None,
            completed_at: "2026-08-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_contract_keys() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        for key in [
            "\"userId\"",
            "\"traits\"",
            "\"archetypeBlend\"",
            "\"voiceProfile\"",
            "\"motivationStyle\"",
            "\"examplePhrases\"",
            "\"selectedValueIds\"",
            "\"selectedInspirationIds\"",
            "\"completedAt\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
        // absent optional field is omitted entirely
        assert!(!json.contains("futureSelf"));
    }

    #[test]
    fn json_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: OnboardingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn system_prompt_is_deterministic_and_complete() {
        let record = sample_record();
        let a = record.system_prompt();
        let b = record.system_prompt();
        assert_eq!(a, b);
        assert!(a.contains(&record.archetype_blend.name));
        assert!(a.contains(&record.voice_profile.tone));
        assert!(a.contains("Curiosity"));
        assert!(a.contains("Marcus Aurelius"));
    }

    #[test]
    fn system_prompt_includes_future_self_when_present() {
        let mut record = sample_record();
        record.future_self = Some("a calmer, braver version of me".to_string());
        assert!(record.system_prompt().contains("a calmer, braver version of me"));
    }
}
