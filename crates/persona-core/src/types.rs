use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TraitKey
// ---------------------------------------------------------------------------

/// The closed set of bipolar personality dimensions. A score of 0 means
/// fully left-pole, 100 fully right-pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKey {
    IntrovertExtrovert,
    SteadyBurst,
    CalmIntense,
    IntuitiveAnalytical,
    CautiousBold,
    PragmaticIdealistic,
    StructuredFlexible,
    DetailBigPicture,
    DeepFocusMultitasker,
    PrivateExpressive,
    IndependentCollaborative,
    ListenerSpeaker,
    TraditionalInnovative,
    CompetitiveCooperative,
    RealisticVisionary,
}

impl TraitKey {
    pub fn all() -> &'static [TraitKey] {
        &[
            TraitKey::IntrovertExtrovert,
            TraitKey::SteadyBurst,
            TraitKey::CalmIntense,
            TraitKey::IntuitiveAnalytical,
            TraitKey::CautiousBold,
            TraitKey::PragmaticIdealistic,
            TraitKey::StructuredFlexible,
            TraitKey::DetailBigPicture,
            TraitKey::DeepFocusMultitasker,
            TraitKey::PrivateExpressive,
            TraitKey::IndependentCollaborative,
            TraitKey::ListenerSpeaker,
            TraitKey::TraditionalInnovative,
            TraitKey::CompetitiveCooperative,
            TraitKey::RealisticVisionary,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraitKey::IntrovertExtrovert => "introvert_extrovert",
            TraitKey::SteadyBurst => "steady_burst",
            TraitKey::CalmIntense => "calm_intense",
            TraitKey::IntuitiveAnalytical => "intuitive_analytical",
            TraitKey::CautiousBold => "cautious_bold",
            TraitKey::PragmaticIdealistic => "pragmatic_idealistic",
            TraitKey::StructuredFlexible => "structured_flexible",
            TraitKey::DetailBigPicture => "detail_big_picture",
            TraitKey::DeepFocusMultitasker => "deep_focus_multitasker",
            TraitKey::PrivateExpressive => "private_expressive",
            TraitKey::IndependentCollaborative => "independent_collaborative",
            TraitKey::ListenerSpeaker => "listener_speaker",
            TraitKey::TraditionalInnovative => "traditional_innovative",
            TraitKey::CompetitiveCooperative => "competitive_cooperative",
            TraitKey::RealisticVisionary => "realistic_visionary",
        }
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TraitKey {
    type Err = crate::error::PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraitKey::all()
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::PersonaError::UnknownTrait(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TraitCategory
// ---------------------------------------------------------------------------

/// Presentation grouping for trait dimensions. One statement group per
/// category, shown in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Energy,
    Decision,
    Work,
    Social,
    Approach,
}

impl TraitCategory {
    pub fn all() -> &'static [TraitCategory] {
        &[
            TraitCategory::Energy,
            TraitCategory::Decision,
            TraitCategory::Work,
            TraitCategory::Social,
            TraitCategory::Approach,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraitCategory::Energy => "energy",
            TraitCategory::Decision => "decision",
            TraitCategory::Work => "work",
            TraitCategory::Social => "social",
            TraitCategory::Approach => "approach",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TraitCategory {
    type Err = crate::error::PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraitCategory::all()
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::PersonaError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Pole
// ---------------------------------------------------------------------------

/// Which end of a bipolar dimension a statement is phrased toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    Left,
    Right,
}

impl Pole {
    pub fn as_str(self) -> &'static str {
        match self {
            Pole::Left => "left",
            Pole::Right => "right",
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArchetypeName
// ---------------------------------------------------------------------------

/// The closed set of reference archetypes. Definition order here is the
/// deterministic tie-break order of the blend engine: when two archetypes
/// score identically, the first-defined one ranks higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeName {
    Visionary,
    Strategist,
    Builder,
    Connector,
    Explorer,
    Sage,
}

impl ArchetypeName {
    pub fn all() -> &'static [ArchetypeName] {
        &[
            ArchetypeName::Visionary,
            ArchetypeName::Strategist,
            ArchetypeName::Builder,
            ArchetypeName::Connector,
            ArchetypeName::Explorer,
            ArchetypeName::Sage,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArchetypeName::Visionary => "visionary",
            ArchetypeName::Strategist => "strategist",
            ArchetypeName::Builder => "builder",
            ArchetypeName::Connector => "connector",
            ArchetypeName::Explorer => "explorer",
            ArchetypeName::Sage => "sage",
        }
    }

    /// Capitalized form used in blend display names.
    pub fn display_name(self) -> &'static str {
        match self {
            ArchetypeName::Visionary => "Visionary",
            ArchetypeName::Strategist => "Strategist",
            ArchetypeName::Builder => "Builder",
            ArchetypeName::Connector => "Connector",
            ArchetypeName::Explorer => "Explorer",
            ArchetypeName::Sage => "Sage",
        }
    }
}

impl fmt::Display for ArchetypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArchetypeName {
    type Err = crate::error::PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArchetypeName::all()
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::PersonaError::UnknownArchetype(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
