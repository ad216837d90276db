use crate::assessment::RawResponse;
use crate::error::{PersonaError, Result};
use crate::types::TraitKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pair whose ratings differ by less than this needs clarification.
pub const AMBIGUITY_THRESHOLD: i8 = 2;

/// Linear interpolation step: one point of rating difference moves the
/// resolved score 12.5 points from the 50 midpoint.
pub const SCORE_STEP: f64 = 12.5;

// ---------------------------------------------------------------------------
// UserTraits
// ---------------------------------------------------------------------------

/// The terminal artifact of the assessment phase: every trait key mapped to
/// a resolved score in [0, 100]. Fully populated by construction; the only
/// way to obtain one is through [`resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserTraits(BTreeMap<TraitKey, f64>);

impl UserTraits {
    pub fn get(&self, key: TraitKey) -> f64 {
        // Populated for every key by resolve().
        self.0[&key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

// ---------------------------------------------------------------------------
// Score conversion
// ---------------------------------------------------------------------------

pub fn signed_difference(response: RawResponse) -> i8 {
    response.right as i8 - response.left as i8
}

/// True when both statements were rated comparably: neither pole is clearly
/// favored, so the pair cannot be scored automatically. Covers both genuine
/// neutrality (equal ratings) and near-contradiction (agreed or disagreed
/// with both). Incomplete pairs are not ambiguous, they are incomplete.
pub fn is_ambiguous(response: RawResponse) -> bool {
    response.is_complete() && signed_difference(response).abs() < AMBIGUITY_THRESHOLD
}

/// Map a signed rating difference in [-4, 4] linearly onto [0, 100]:
/// -4 -> 0 (strong left), 0 -> 50, +4 -> 100 (strong right).
pub fn convert(difference: i8) -> f64 {
    (50.0 + SCORE_STEP * f64::from(difference)).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Reconcile raw response pairs (plus clarification overrides for ambiguous
/// traits) into a complete score vector.
///
/// Deterministic and idempotent: identical inputs yield byte-identical
/// output. Fails fast rather than guessing:
/// - any trait missing either rating -> `AssessmentIncomplete`
/// - any ambiguous trait without an override -> `ClarificationPending`
///
/// An override is consulted only for traits that are currently ambiguous;
/// overrides are never applied on top of an unambiguous pair.
pub fn resolve(
    responses: &BTreeMap<TraitKey, RawResponse>,
    clarifications: &BTreeMap<TraitKey, u8>,
) -> Result<UserTraits> {
    let total = TraitKey::all().len();
    let missing = TraitKey::all()
        .iter()
        .filter(|k| !responses.get(k).map(|r| r.is_complete()).unwrap_or(false))
        .count();
    if missing > 0 {
        return Err(PersonaError::AssessmentIncomplete { missing, total });
    }

    let mut scores = BTreeMap::new();
    let mut pending = Vec::new();
    for key in TraitKey::all() {
        let response = responses[key];
        if is_ambiguous(response) {
            match clarifications.get(key) {
                Some(value) => {
                    scores.insert(*key, f64::from(*value));
                }
                None => pending.push(*key),
            }
        } else {
            scores.insert(*key, convert(signed_difference(response)));
        }
    }

    if !pending.is_empty() {
        return Err(PersonaError::ClarificationPending(pending));
    }
    Ok(UserTraits(scores))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn full_responses(left: u8, right: u8) -> BTreeMap<TraitKey, RawResponse> {
        TraitKey::all()
            .iter()
            .map(|k| (*k, RawResponse { left, right }))
            .collect()
    }

    #[test]
    fn convert_maps_extremes_exactly() {
        assert_eq!(convert(-4), 0.0);
        assert_eq!(convert(-2), 25.0);
        assert_eq!(convert(0), 50.0);
        assert_eq!(convert(3), 87.5);
        assert_eq!(convert(4), 100.0);
    }

    #[test]
    fn clear_difference_is_not_ambiguous() {
        // left=5, right=1 -> difference -4 -> strong left
        let r = RawResponse { left: 5, right: 1 };
        assert!(!is_ambiguous(r));
        assert_eq!(convert(signed_difference(r)), 0.0);
    }

    #[test]
    fn equal_ratings_are_ambiguous_at_any_level() {
        for v in 1..=5u8 {
            assert!(is_ambiguous(RawResponse { left: v, right: v }));
        }
    }

    #[test]
    fn one_point_difference_is_ambiguous() {
        assert!(is_ambiguous(RawResponse { left: 4, right: 5 }));
        assert!(is_ambiguous(RawResponse { left: 2, right: 1 }));
    }

    #[test]
    fn two_point_difference_is_resolvable() {
        let r = RawResponse { left: 2, right: 4 };
        assert!(!is_ambiguous(r));
        assert_eq!(convert(signed_difference(r)), 75.0);
    }

    #[test]
    fn incomplete_pair_is_not_ambiguous() {
        assert!(!is_ambiguous(RawResponse { left: 3, right: 0 }));
        assert!(!is_ambiguous(RawResponse { left: 0, right: 0 }));
    }

    #[test]
    fn resolve_rejects_incomplete() {
        let mut responses = full_responses(5, 1);
        responses.insert(TraitKey::CalmIntense, RawResponse { left: 3, right: 0 });
        let err = resolve(&responses, &BTreeMap::new()).unwrap_err();
        assert!(matches!(
            err,
            PersonaError::AssessmentIncomplete { missing: 1, total: 15 }
        ));
    }

    #[test]
    fn resolve_requires_clarification_for_ambiguous() {
        let mut responses = full_responses(5, 1);
        responses.insert(TraitKey::SteadyBurst, RawResponse { left: 3, right: 3 });
        let err = resolve(&responses, &BTreeMap::new()).unwrap_err();
        match err {
            PersonaError::ClarificationPending(keys) => {
                assert_eq!(keys, vec![TraitKey::SteadyBurst]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clarification_value_passes_through_untransformed() {
        let mut responses = full_responses(5, 1);
        responses.insert(TraitKey::SteadyBurst, RawResponse { left: 3, right: 3 });
        let clarifications = BTreeMap::from([(TraitKey::SteadyBurst, 70u8)]);
        let traits = resolve(&responses, &clarifications).unwrap();
        assert_eq!(traits.get(TraitKey::SteadyBurst), 70.0);
        assert_eq!(traits.get(TraitKey::IntrovertExtrovert), 0.0);
    }

    #[test]
    fn override_ignored_for_unambiguous_trait() {
        let responses = full_responses(1, 5);
        let clarifications = BTreeMap::from([(TraitKey::CautiousBold, 10u8)]);
        let traits = resolve(&responses, &clarifications).unwrap();
        assert_eq!(traits.get(TraitKey::CautiousBold), 100.0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut responses = full_responses(2, 4);
        responses.insert(TraitKey::ListenerSpeaker, RawResponse { left: 5, right: 5 });
        let clarifications = BTreeMap::from([(TraitKey::ListenerSpeaker, 33u8)]);

        let a = resolve(&responses, &clarifications).unwrap();
        let b = resolve(&responses, &clarifications).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn resolved_scores_follow_contract_formula() {
        // every |difference| >= 2 must equal clamp(50 + 12.5*d, 0, 100)
        for left in 1..=5u8 {
            for right in 1..=5u8 {
                let r = RawResponse { left, right };
                let d = signed_difference(r);
                if d.abs() >= 2 {
                    let expected = (50.0 + 12.5 * f64::from(d)).clamp(0.0, 100.0);
                    assert_eq!(convert(d), expected);
                }
            }
        }
    }

    #[test]
    fn user_traits_serialize_with_snake_case_keys() {
        let responses = full_responses(1, 5);
        let traits = resolve(&responses, &BTreeMap::new()).unwrap();
        let json = serde_json::to_string(&traits).unwrap();
        assert!(json.contains("\"introvert_extrovert\":100.0"));
    }
}
