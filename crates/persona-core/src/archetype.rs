use crate::resolver::UserTraits;
use crate::types::{ArchetypeName, TraitKey};
use crate::voice::VoiceTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// ArchetypeDefinition
// ---------------------------------------------------------------------------

/// A named reference personality profile: a target score vector over the
/// trait space plus the voice template used downstream. Fixed at process
/// start.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeDefinition {
    pub name: ArchetypeName,
    pub tagline: &'static str,
    /// Target scores in `TraitKey::all()` order.
    pub target: [f64; 15],
    pub voice: VoiceTemplate,
}

/// Definition order is the blend engine's tie-break order.
pub const ARCHETYPES: [ArchetypeDefinition; 6] = [
    ArchetypeDefinition {
        name: ArchetypeName::Visionary,
        tagline: "Sees the future first and pulls others toward it.",
        target: [
            55.0, 70.0, 65.0, 20.0, 80.0, 75.0, 65.0, 85.0, 50.0, 60.0, 45.0, 55.0, 90.0, 45.0,
            90.0,
        ],
        voice: VoiceTemplate {
            tone: "bold, future-focused, and energizing",
            tone_accent: "big-picture ambition",
            motivation_style: "connects today's task to the future it is building toward",
            phrases: &[
                "{name}, this is one more brick in the future you said you wanted.",
                "Think about where this lands you a year from now, then take the first step.",
                "Channel a little {inspiration} today: see what others call impossible.",
                "You told me {value} drives you. This is what it looks like in motion.",
            ],
        },
    },
    ArchetypeDefinition {
        name: ArchetypeName::Strategist,
        tagline: "Turns ambitions into sequences of winnable steps.",
        target: [
            35.0, 30.0, 40.0, 85.0, 30.0, 30.0, 15.0, 35.0, 30.0, 40.0, 40.0, 40.0, 40.0, 45.0,
            25.0,
        ],
        voice: VoiceTemplate {
            tone: "clear, measured, and precise",
            tone_accent: "methodical clarity",
            motivation_style: "breaks goals into a sequence of small, winnable steps",
            phrases: &[
                "One step at a time, {name}. The plan only works if today's piece gets done.",
                "Reduce this to the next concrete action and clear it.",
                "{inspiration} didn't improvise results. Stick to the sequence.",
                "Choosing {value} means choosing the discipline behind it.",
            ],
        },
    },
    ArchetypeDefinition {
        name: ArchetypeName::Builder,
        tagline: "Makes steady, tangible progress others can stand on.",
        target: [
            40.0, 25.0, 35.0, 70.0, 35.0, 25.0, 20.0, 25.0, 25.0, 40.0, 45.0, 40.0, 35.0, 50.0,
            20.0,
        ],
        voice: VoiceTemplate {
            tone: "grounded, warm, and practical",
            tone_accent: "grounded craftsmanship",
            motivation_style: "emphasizes consistency and the quiet satisfaction of finished work",
            phrases: &[
                "Brick by brick, {name}. Today's brick is waiting.",
                "Done beats perfect. Finish the piece in front of you.",
                "{inspiration} showed up every day. That's the whole secret.",
                "Every time you act on {value}, it gets a little more solid.",
            ],
        },
    },
    ArchetypeDefinition {
        name: ArchetypeName::Connector,
        tagline: "Moves the world through people and relationships.",
        target: [
            80.0, 55.0, 45.0, 35.0, 55.0, 60.0, 60.0, 55.0, 60.0, 85.0, 85.0, 75.0, 55.0, 80.0,
            55.0,
        ],
        voice: VoiceTemplate {
            tone: "warm, open, and encouraging",
            tone_accent: "warm encouragement",
            motivation_style: "frames progress around the people it matters to",
            phrases: &[
                "{name}, the people around you feel it when you follow through.",
                "Who benefits when you finish this today? Start there.",
                "Reach out the way {inspiration} would. Progress is better shared.",
                "Living {value} out loud is how you lift the whole room.",
            ],
        },
    },
    ArchetypeDefinition {
        name: ArchetypeName::Explorer,
        tagline: "Finds the new path and takes it.",
        target: [
            65.0, 75.0, 60.0, 30.0, 85.0, 55.0, 85.0, 70.0, 65.0, 65.0, 35.0, 55.0, 75.0, 40.0,
            60.0,
        ],
        voice: VoiceTemplate {
            tone: "playful, curious, and direct",
            tone_accent: "restless curiosity",
            motivation_style: "keeps things fresh by turning tasks into challenges and experiments",
            phrases: &[
                "New day, new experiment, {name}. What are we testing today?",
                "If it feels routine, flip it and find the interesting angle.",
                "Take the {inspiration} route: go where the map runs out.",
                "You picked {value} for a reason. Chase it somewhere new today.",
            ],
        },
    },
    ArchetypeDefinition {
        name: ArchetypeName::Sage,
        tagline: "Brings depth, patience, and perspective.",
        target: [
            15.0, 35.0, 20.0, 40.0, 35.0, 65.0, 45.0, 65.0, 20.0, 25.0, 30.0, 15.0, 50.0, 65.0,
            55.0,
        ],
        voice: VoiceTemplate {
            tone: "calm, reflective, and steady",
            tone_accent: "quiet reflection",
            motivation_style: "invites reflection on meaning and long-term growth",
            phrases: &[
                "Slow is smooth, {name}. One deliberate step is enough.",
                "Ask what this moment is teaching you, then act on it.",
                "{inspiration} valued the long view. So do you.",
                "Let {value} be the quiet measure of today.",
            ],
        },
    },
];

pub fn archetype(name: ArchetypeName) -> &'static ArchetypeDefinition {
    &ARCHETYPES[name.index()]
}

// ---------------------------------------------------------------------------
// ArchetypeBlend
// ---------------------------------------------------------------------------

/// The ranked similarity of a user's trait vector to every archetype.
/// Recomputed once per completed assessment; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeBlend {
    pub scores: BTreeMap<ArchetypeName, f64>,
    pub primary: ArchetypeName,
    pub secondary: ArchetypeName,
    pub name: String,
}

impl ArchetypeBlend {
    pub fn score(&self, name: ArchetypeName) -> f64 {
        self.scores[&name]
    }
}

// ---------------------------------------------------------------------------
// Similarity
// ---------------------------------------------------------------------------

/// Normalized Manhattan similarity: 100 for an exact match, falling
/// linearly with total per-dimension absolute difference. Rounded to one
/// decimal so serialized output is stable. Monotonic and total: a
/// zero-variance vector is just another point in the space.
pub fn similarity(user: &UserTraits, target: &[f64; 15]) -> f64 {
    let n = TraitKey::all().len() as f64;
    let distance: f64 = TraitKey::all()
        .iter()
        .enumerate()
        .map(|(i, key)| (user.get(*key) - target[i]).abs())
        .sum();
    let score = 100.0 * (1.0 - distance / (100.0 * n));
    (score * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Blend
// ---------------------------------------------------------------------------

/// Score every archetype against the user's trait vector. Pure function:
/// identical input yields byte-identical output. Ties rank by definition
/// order (first-defined wins), via strictly-greater comparison below.
pub fn blend(user: &UserTraits) -> ArchetypeBlend {
    let mut scores = BTreeMap::new();
    let mut ranked: Vec<(ArchetypeName, f64)> = Vec::with_capacity(ARCHETYPES.len());
    for def in &ARCHETYPES {
        let score = similarity(user, &def.target);
        scores.insert(def.name, score);
        ranked.push((def.name, score));
    }

    let mut primary = ranked[0];
    let mut secondary: Option<(ArchetypeName, f64)> = None;
    for &(name, score) in &ranked[1..] {
        if score > primary.1 {
            secondary = Some(primary);
            primary = (name, score);
        } else if secondary.map(|(_, s)| score > s).unwrap_or(true) {
            secondary = Some((name, score));
        }
    }
    let secondary = secondary.expect("at least two archetypes defined");

    ArchetypeBlend {
        scores,
        primary: primary.0,
        secondary: secondary.0,
        name: blend_name(primary.0, secondary.0),
    }
}

/// Curated display names for common primary/secondary pairs, with a generic
/// fallback for the rest.
fn blend_name(primary: ArchetypeName, secondary: ArchetypeName) -> String {
    use ArchetypeName::*;
    let curated = match (primary, secondary) {
        (Visionary, Strategist) => Some("The Mastermind"),
        (Strategist, Visionary) => Some("The Architect"),
        (Visionary, Explorer) => Some("The Trailblazer"),
        (Explorer, Visionary) => Some("The Pioneer"),
        (Strategist, Builder) => Some("The Engineer"),
        (Builder, Strategist) => Some("The Craftsman"),
        (Connector, Sage) => Some("The Mentor"),
        (Sage, Connector) => Some("The Counselor"),
        (Connector, Explorer) => Some("The Catalyst"),
        (Sage, Strategist) => Some("The Scholar"),
        (Sage, Visionary) => Some("The Philosopher"),
        (Builder, Explorer) => Some("The Pathfinder"),
        _ => None,
    };
    match curated {
        Some(name) => name.to_string(),
        None => format!(
            "{} blended with {}",
            primary.display_name(),
            secondary.display_name()
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RawResponse;
    use crate::resolver;
    use std::collections::BTreeMap;

    /// Build a UserTraits with arbitrary integer scores through the public
    /// resolver API: every pair ambiguous, every score a clarification.
    fn traits_from(values: [u8; 15]) -> UserTraits {
        let responses: BTreeMap<_, _> = TraitKey::all()
            .iter()
            .map(|k| (*k, RawResponse { left: 3, right: 3 }))
            .collect();
        let clarifications: BTreeMap<_, _> = TraitKey::all()
            .iter()
            .enumerate()
            .map(|(i, k)| (*k, values[i]))
            .collect();
        resolver::resolve(&responses, &clarifications).unwrap()
    }

    #[test]
    fn archetype_table_in_name_order() {
        for (i, name) in ArchetypeName::all().iter().enumerate() {
            assert_eq!(ARCHETYPES[i].name, *name);
        }
    }

    #[test]
    fn targets_are_valid_scores() {
        for def in &ARCHETYPES {
            for t in def.target {
                assert!((0.0..=100.0).contains(&t));
            }
        }
    }

    #[test]
    fn exact_match_scores_one_hundred() {
        let target = ARCHETYPES[ArchetypeName::Strategist.index()].target;
        let mut as_u8 = [0u8; 15];
        for (i, t) in target.iter().enumerate() {
            as_u8[i] = *t as u8;
        }
        let user = traits_from(as_u8);
        assert_eq!(similarity(&user, &target), 100.0);
        let b = blend(&user);
        assert_eq!(b.primary, ArchetypeName::Strategist);
        assert_eq!(b.score(ArchetypeName::Strategist), 100.0);
    }

    #[test]
    fn centered_vector_is_deterministic_and_finite() {
        // all 15 traits at exact center: no NaN, no division hazard, and
        // ties resolve to the first-defined archetype.
        let user = traits_from([50; 15]);
        let b = blend(&user);
        for (_, score) in &b.scores {
            assert!(score.is_finite());
        }
        assert_eq!(b.primary, ArchetypeName::Connector);
        assert_eq!(b.secondary, ArchetypeName::Strategist);
        assert_eq!(b.score(ArchetypeName::Connector), 84.7);
        assert_eq!(b.score(ArchetypeName::Strategist), 82.7);
        // Strategist, Builder, and Explorer tie at 82.7; first-defined wins.
        assert_eq!(b.score(ArchetypeName::Builder), 82.7);
        assert_eq!(b.score(ArchetypeName::Explorer), 82.7);
    }

    #[test]
    fn blend_is_pure() {
        let user = traits_from([10, 90, 50, 30, 70, 50, 20, 80, 40, 60, 50, 50, 90, 10, 70]);
        let a = blend(&user);
        let b = blend(&user);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn primary_has_highest_score() {
        let user = traits_from([10, 90, 50, 30, 70, 50, 20, 80, 40, 60, 50, 50, 90, 10, 70]);
        let b = blend(&user);
        let max = b.scores.values().cloned().fold(f64::MIN, f64::max);
        assert_eq!(b.score(b.primary), max);
        assert_ne!(b.primary, b.secondary);
    }

    #[test]
    fn left_leaning_social_traits_land_on_sage() {
        // strongly left on the social group, centered elsewhere
        let mut values = [50u8; 15];
        values[TraitKey::PrivateExpressive.index()] = 0;
        values[TraitKey::IndependentCollaborative.index()] = 0;
        values[TraitKey::ListenerSpeaker.index()] = 0;
        let b = blend(&traits_from(values));
        assert_eq!(b.primary, ArchetypeName::Sage);
    }

    #[test]
    fn curated_blend_names() {
        assert_eq!(
            blend_name(ArchetypeName::Visionary, ArchetypeName::Strategist),
            "The Mastermind"
        );
        assert_eq!(
            blend_name(ArchetypeName::Explorer, ArchetypeName::Sage),
            "Explorer blended with Sage"
        );
    }

    #[test]
    fn blend_serializes_with_snake_case_names() {
        let user = traits_from([50; 15]);
        let json = serde_json::to_string(&blend(&user)).unwrap();
        assert!(json.contains("\"primary\":\"connector\""));
        assert!(json.contains("\"visionary\""));
    }
}
