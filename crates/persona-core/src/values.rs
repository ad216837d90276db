use crate::error::{PersonaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// How many core values a user must select.
pub const VALUE_SELECTION_COUNT: usize = 5;
/// Inclusive bounds on how many inspirations a user may select.
pub const INSPIRATION_SELECTION_MIN: usize = 5;
pub const INSPIRATION_SELECTION_MAX: usize = 10;

// ---------------------------------------------------------------------------
// ValueCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Growth,
    Connection,
    Achievement,
    Creativity,
    Stability,
    Freedom,
    Contribution,
    Wellbeing,
}

impl ValueCategory {
    pub fn all() -> &'static [ValueCategory] {
        &[
            ValueCategory::Growth,
            ValueCategory::Connection,
            ValueCategory::Achievement,
            ValueCategory::Creativity,
            ValueCategory::Stability,
            ValueCategory::Freedom,
            ValueCategory::Contribution,
            ValueCategory::Wellbeing,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueCategory::Growth => "growth",
            ValueCategory::Connection => "connection",
            ValueCategory::Achievement => "achievement",
            ValueCategory::Creativity => "creativity",
            ValueCategory::Stability => "stability",
            ValueCategory::Freedom => "freedom",
            ValueCategory::Contribution => "contribution",
            ValueCategory::Wellbeing => "wellbeing",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CoreValue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct CoreValue {
    pub id: &'static str,
    pub label: &'static str,
    pub category: ValueCategory,
}

/// 40 values, 5 per category. Selection inputs only; no behavior beyond
/// lookup and filtering.
pub const VALUES: [CoreValue; 40] = [
    CoreValue { id: "curiosity", label: "Curiosity", category: ValueCategory::Growth },
    CoreValue { id: "lifelong-learning", label: "Lifelong Learning", category: ValueCategory::Growth },
    CoreValue { id: "self-improvement", label: "Self-Improvement", category: ValueCategory::Growth },
    CoreValue { id: "resilience", label: "Resilience", category: ValueCategory::Growth },
    CoreValue { id: "wisdom", label: "Wisdom", category: ValueCategory::Growth },
    CoreValue { id: "family", label: "Family", category: ValueCategory::Connection },
    CoreValue { id: "friendship", label: "Friendship", category: ValueCategory::Connection },
    CoreValue { id: "community", label: "Community", category: ValueCategory::Connection },
    CoreValue { id: "loyalty", label: "Loyalty", category: ValueCategory::Connection },
    CoreValue { id: "empathy", label: "Empathy", category: ValueCategory::Connection },
    CoreValue { id: "ambition", label: "Ambition", category: ValueCategory::Achievement },
    CoreValue { id: "excellence", label: "Excellence", category: ValueCategory::Achievement },
    CoreValue { id: "recognition", label: "Recognition", category: ValueCategory::Achievement },
    CoreValue { id: "leadership", label: "Leadership", category: ValueCategory::Achievement },
    CoreValue { id: "discipline", label: "Discipline", category: ValueCategory::Achievement },
    CoreValue { id: "imagination", label: "Imagination", category: ValueCategory::Creativity },
    CoreValue { id: "self-expression", label: "Self-Expression", category: ValueCategory::Creativity },
    CoreValue { id: "originality", label: "Originality", category: ValueCategory::Creativity },
    CoreValue { id: "beauty", label: "Beauty", category: ValueCategory::Creativity },
    CoreValue { id: "playfulness", label: "Playfulness", category: ValueCategory::Creativity },
    CoreValue { id: "security", label: "Security", category: ValueCategory::Stability },
    CoreValue { id: "order", label: "Order", category: ValueCategory::Stability },
    CoreValue { id: "tradition", label: "Tradition", category: ValueCategory::Stability },
    CoreValue { id: "reliability", label: "Reliability", category: ValueCategory::Stability },
    CoreValue { id: "peace-of-mind", label: "Peace of Mind", category: ValueCategory::Stability },
    CoreValue { id: "independence", label: "Independence", category: ValueCategory::Freedom },
    CoreValue { id: "adventure", label: "Adventure", category: ValueCategory::Freedom },
    CoreValue { id: "spontaneity", label: "Spontaneity", category: ValueCategory::Freedom },
    CoreValue { id: "flexibility", label: "Flexibility", category: ValueCategory::Freedom },
    CoreValue { id: "autonomy", label: "Autonomy", category: ValueCategory::Freedom },
    CoreValue { id: "service", label: "Service", category: ValueCategory::Contribution },
    CoreValue { id: "generosity", label: "Generosity", category: ValueCategory::Contribution },
    CoreValue { id: "justice", label: "Justice", category: ValueCategory::Contribution },
    CoreValue { id: "mentorship", label: "Mentorship", category: ValueCategory::Contribution },
    CoreValue { id: "sustainability", label: "Sustainability", category: ValueCategory::Contribution },
    CoreValue { id: "health", label: "Health", category: ValueCategory::Wellbeing },
    CoreValue { id: "balance", label: "Balance", category: ValueCategory::Wellbeing },
    CoreValue { id: "mindfulness", label: "Mindfulness", category: ValueCategory::Wellbeing },
    CoreValue { id: "joy", label: "Joy", category: ValueCategory::Wellbeing },
    CoreValue { id: "gratitude", label: "Gratitude", category: ValueCategory::Wellbeing },
];

// ---------------------------------------------------------------------------
// InspirationField
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspirationField {
    Science,
    Invention,
    Arts,
    Leadership,
    Sport,
    Exploration,
}

impl InspirationField {
    pub fn as_str(self) -> &'static str {
        match self {
            InspirationField::Science => "science",
            InspirationField::Invention => "invention",
            InspirationField::Arts => "arts",
            InspirationField::Leadership => "leadership",
            InspirationField::Sport => "sport",
            InspirationField::Exploration => "exploration",
        }
    }
}

impl fmt::Display for InspirationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Inspiration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Inspiration {
    pub id: &'static str,
    pub name: &'static str,
    pub field: InspirationField,
}

pub const INSPIRATIONS: [Inspiration; 18] = [
    Inspiration { id: "marie-curie", name: "Marie Curie", field: InspirationField::Science },
    Inspiration { id: "richard-feynman", name: "Richard Feynman", field: InspirationField::Science },
    Inspiration { id: "jane-goodall", name: "Jane Goodall", field: InspirationField::Science },
    Inspiration { id: "ada-lovelace", name: "Ada Lovelace", field: InspirationField::Invention },
    Inspiration { id: "nikola-tesla", name: "Nikola Tesla", field: InspirationField::Invention },
    Inspiration { id: "grace-hopper", name: "Grace Hopper", field: InspirationField::Invention },
    Inspiration { id: "frida-kahlo", name: "Frida Kahlo", field: InspirationField::Arts },
    Inspiration { id: "maya-angelou", name: "Maya Angelou", field: InspirationField::Arts },
    Inspiration { id: "david-bowie", name: "David Bowie", field: InspirationField::Arts },
    Inspiration { id: "nelson-mandela", name: "Nelson Mandela", field: InspirationField::Leadership },
    Inspiration { id: "eleanor-roosevelt", name: "Eleanor Roosevelt", field: InspirationField::Leadership },
    Inspiration { id: "marcus-aurelius", name: "Marcus Aurelius", field: InspirationField::Leadership },
    Inspiration { id: "serena-williams", name: "Serena Williams", field: InspirationField::Sport },
    Inspiration { id: "roger-federer", name: "Roger Federer", field: InspirationField::Sport },
    Inspiration { id: "simone-biles", name: "Simone Biles", field: InspirationField::Sport },
    Inspiration { id: "amelia-earhart", name: "Amelia Earhart", field: InspirationField::Exploration },
    Inspiration { id: "ernest-shackleton", name: "Ernest Shackleton", field: InspirationField::Exploration },
    Inspiration { id: "yuri-gagarin", name: "Yuri Gagarin", field: InspirationField::Exploration },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn value_by_id(id: &str) -> Option<&'static CoreValue> {
    VALUES.iter().find(|v| v.id == id)
}

pub fn values_by_category(category: ValueCategory) -> Vec<&'static CoreValue> {
    VALUES.iter().filter(|v| v.category == category).collect()
}

pub fn inspiration_by_id(id: &str) -> Option<&'static Inspiration> {
    INSPIRATIONS.iter().find(|i| i.id == id)
}

pub fn inspirations_by_field(field: InspirationField) -> Vec<&'static Inspiration> {
    INSPIRATIONS.iter().filter(|i| i.field == field).collect()
}

// ---------------------------------------------------------------------------
// Selection validation
// ---------------------------------------------------------------------------

/// Exactly 5 known, distinct value ids. Violations are input-validation
/// errors and must be rejected at the boundary, never silently fixed up.
pub fn validate_value_selection(ids: &[String]) -> Result<()> {
    if ids.len() != VALUE_SELECTION_COUNT {
        return Err(PersonaError::InvalidValueSelection {
            expected: VALUE_SELECTION_COUNT,
            got: ids.len(),
        });
    }
    let mut seen = BTreeSet::new();
    for id in ids {
        if value_by_id(id).is_none() {
            return Err(PersonaError::UnknownValue(id.clone()));
        }
        if !seen.insert(id.as_str()) {
            return Err(PersonaError::DuplicateSelection(id.clone()));
        }
    }
    Ok(())
}

/// Between 5 and 10 known, distinct inspiration ids.
pub fn validate_inspiration_selection(ids: &[String]) -> Result<()> {
    if ids.len() < INSPIRATION_SELECTION_MIN || ids.len() > INSPIRATION_SELECTION_MAX {
        return Err(PersonaError::InvalidInspirationSelection {
            min: INSPIRATION_SELECTION_MIN,
            max: INSPIRATION_SELECTION_MAX,
            got: ids.len(),
        });
    }
    let mut seen = BTreeSet::new();
    for id in ids {
        if inspiration_by_id(id).is_none() {
            return Err(PersonaError::UnknownInspiration(id.clone()));
        }
        if !seen.insert(id.as_str()) {
            return Err(PersonaError::DuplicateSelection(id.clone()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
