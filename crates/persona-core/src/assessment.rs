use crate::catalog::{StatementGroup, GROUPS};
use crate::error::{PersonaError, Result};
use crate::resolver::{self, UserTraits};
use crate::types::{Pole, TraitKey};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// RawResponse
// ---------------------------------------------------------------------------

/// Two independent 1-5 agreement ratings for one trait's statement pair.
/// 0 means "not yet answered". The two poles are never coupled: recording
/// one never touches the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub left: u8,
    pub right: u8,
}

impl RawResponse {
    pub fn is_complete(self) -> bool {
        self.left > 0 && self.right > 0
    }
}

// ---------------------------------------------------------------------------
// AssessmentPhase
// ---------------------------------------------------------------------------

/// The wizard state machine, independent of any rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// Presenting statement group `i` (index into the group catalog).
    InGroup(usize),
    /// Direct bipolar sliders for every trait flagged ambiguous.
    Clarification,
    Complete,
}

impl AssessmentPhase {
    fn describe(self) -> String {
        match self {
            AssessmentPhase::InGroup(i) => format!("group {}", i + 1),
            AssessmentPhase::Clarification => "clarification".to_string(),
            AssessmentPhase::Complete => "complete".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Accumulates raw responses across an ordered walk through the statement
/// groups and knows when each group, and the whole assessment, is complete.
/// Owned by one onboarding session; discarding an instance is the only
/// cancellation protocol needed.
#[derive(Debug, Clone)]
pub struct Assessment {
    responses: BTreeMap<TraitKey, RawResponse>,
    clarifications: BTreeMap<TraitKey, u8>,
    phase: AssessmentPhase,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

impl Assessment {
    pub fn new() -> Self {
        Self {
            responses: TraitKey::all()
                .iter()
                .map(|k| (*k, RawResponse::default()))
                .collect(),
            clarifications: BTreeMap::new(),
            phase: AssessmentPhase::InGroup(0),
        }
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn response(&self, key: TraitKey) -> RawResponse {
        self.responses[&key]
    }

    pub fn responses(&self) -> &BTreeMap<TraitKey, RawResponse> {
        &self.responses
    }

    pub fn clarifications(&self) -> &BTreeMap<TraitKey, u8> {
        &self.clarifications
    }

    // ---------------------------------------------------------------------------
    // Recording
    // ---------------------------------------------------------------------------

    /// Record one agreement rating. Ratings outside 1-5 are rejected, never
    /// clamped. Allowed in any phase so a user can revisit a completed group
    /// and edit; editing drops any stale clarification override for the
    /// trait, since its ambiguity must be re-triggered from the new pair.
    pub fn record_response(&mut self, key: TraitKey, pole: Pole, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(PersonaError::InvalidRating {
                trait_key: key,
                pole,
                rating,
            });
        }
        let entry = self.responses.get_mut(&key).expect("all keys present");
        match pole {
            Pole::Left => entry.left = rating,
            Pole::Right => entry.right = rating,
        }
        self.clarifications.remove(&key);
        Ok(())
    }

    /// Record the fallback slider value for a trait flagged ambiguous. The
    /// value becomes the resolved score directly, with no transformation.
    pub fn record_clarification(&mut self, key: TraitKey, value: u8) -> Result<()> {
        if value > 100 {
            return Err(PersonaError::InvalidClarification {
                trait_key: key,
                value,
            });
        }
        if !resolver::is_ambiguous(self.responses[&key]) {
            return Err(PersonaError::NotAmbiguous(key));
        }
        self.clarifications.insert(key, value);
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Completion queries
    // ---------------------------------------------------------------------------

    /// True iff every trait in the group has both ratings present. A trait
    /// with only one rating blocks completion; it never defaults.
    pub fn is_group_complete(&self, group: &StatementGroup) -> bool {
        group.traits.iter().all(|k| self.responses[k].is_complete())
    }

    /// Answered traits / total, 0-100, rounded to nearest integer.
    pub fn progress(&self) -> u8 {
        let answered = self
            .responses
            .values()
            .filter(|r| r.is_complete())
            .count();
        let total = self.responses.len();
        ((answered as f64 / total as f64) * 100.0).round() as u8
    }

    /// Traits whose pairs cannot be scored automatically, in catalog order.
    /// This is the clarification pass work-list.
    pub fn ambiguous_traits(&self) -> Vec<TraitKey> {
        TraitKey::all()
            .iter()
            .filter(|k| resolver::is_ambiguous(self.responses[k]))
            .copied()
            .collect()
    }

    /// Ambiguous traits that still lack a clarification override.
    pub fn pending_clarifications(&self) -> Vec<TraitKey> {
        self.ambiguous_traits()
            .into_iter()
            .filter(|k| !self.clarifications.contains_key(k))
            .collect()
    }

    // ---------------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------------

    /// The `NextRequested` transition. Fails fast instead of walking past
    /// incomplete input.
    pub fn advance(&mut self) -> Result<AssessmentPhase> {
        let next = match self.phase {
            AssessmentPhase::InGroup(i) => {
                let group = &GROUPS[i];
                if !self.is_group_complete(group) {
                    return Err(PersonaError::GroupIncomplete(group.title.to_string()));
                }
                if i + 1 < GROUPS.len() {
                    AssessmentPhase::InGroup(i + 1)
                } else if self.ambiguous_traits().is_empty() {
                    AssessmentPhase::Complete
                } else {
                    AssessmentPhase::Clarification
                }
            }
            AssessmentPhase::Clarification => {
                let pending = self.pending_clarifications();
                if !pending.is_empty() {
                    return Err(PersonaError::ClarificationPending(pending));
                }
                AssessmentPhase::Complete
            }
            AssessmentPhase::Complete => {
                return Err(PersonaError::InvalidTransition {
                    from: self.phase.describe(),
                    reason: "assessment is already complete".to_string(),
                });
            }
        };
        self.phase = next;
        Ok(next)
    }

    /// The `BackRequested` transition: revisit earlier screens to edit.
    pub fn retreat(&mut self) -> Result<AssessmentPhase> {
        let prev = match self.phase {
            AssessmentPhase::InGroup(0) => {
                return Err(PersonaError::InvalidTransition {
                    from: self.phase.describe(),
                    reason: "already at the first group".to_string(),
                });
            }
            AssessmentPhase::InGroup(i) => AssessmentPhase::InGroup(i - 1),
            AssessmentPhase::Clarification => AssessmentPhase::InGroup(GROUPS.len() - 1),
            AssessmentPhase::Complete => {
                if self.ambiguous_traits().is_empty() {
                    AssessmentPhase::InGroup(GROUPS.len() - 1)
                } else {
                    AssessmentPhase::Clarification
                }
            }
        };
        self.phase = prev;
        Ok(prev)
    }

    // ---------------------------------------------------------------------------
    // Resolution
    // ---------------------------------------------------------------------------

    /// Run the resolver over the current responses and overrides. Pure with
    /// respect to the collector: can be called repeatedly, phase-independent,
    /// and fails fast on incomplete input.
    pub fn resolve(&self) -> Result<UserTraits> {
        resolver::resolve(&self.responses, &self.clarifications)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
