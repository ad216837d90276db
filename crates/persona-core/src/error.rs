use crate::types::{Pole, TraitKey};
use thiserror::Error;

fn join_keys(keys: &[TraitKey]) -> String {
    keys.iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    #[error("unknown trait category: {0}")]
    UnknownCategory(String),

    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),

    #[error("unknown core value: {0}")]
    UnknownValue(String),

    #[error("unknown inspiration: {0}")]
    UnknownInspiration(String),

    #[error("invalid rating {rating} for {trait_key}/{pole}: must be 1-5")]
    InvalidRating {
        trait_key: TraitKey,
        pole: Pole,
        rating: u8,
    },

    #[error("invalid clarification value {value} for {trait_key}: must be 0-100")]
    InvalidClarification { trait_key: TraitKey, value: u8 },

    #[error("trait {0} is not flagged ambiguous")]
    NotAmbiguous(TraitKey),

    #[error("group '{0}' is incomplete: every statement needs a rating")]
    GroupIncomplete(String),

    #[error("assessment incomplete: {missing} of {total} traits unanswered")]
    AssessmentIncomplete { missing: usize, total: usize },

    #[error("clarification pending for: {}", join_keys(.0))]
    ClarificationPending(Vec<TraitKey>),

    #[error("invalid transition from {from}: {reason}")]
    InvalidTransition { from: String, reason: String },

    #[error("expected exactly {expected} core values, got {got}")]
    InvalidValueSelection { expected: usize, got: usize },

    #[error("expected {min}-{max} inspirations, got {got}")]
    InvalidInspirationSelection { min: usize, max: usize, got: usize },

    #[error("duplicate selection: {0}")]
    DuplicateSelection(String),

    #[error("invalid user id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidUserId(String),

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersonaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clarification_pending_lists_keys() {
        let err = PersonaError::ClarificationPending(vec![
            TraitKey::IntrovertExtrovert,
            TraitKey::CautiousBold,
        ]);
        let msg = err.to_string();
        assert!(msg.contains("introvert_extrovert"));
        assert!(msg.contains("cautious_bold"));
    }

    #[test]
    fn invalid_rating_message() {
        let err = PersonaError::InvalidRating {
            trait_key: TraitKey::SteadyBurst,
            pole: Pole::Left,
            rating: 9,
        };
        assert_eq!(
            err.to_string(),
            "invalid rating 9 for steady_burst/left: must be 1-5"
        );
    }
}
