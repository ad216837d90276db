use crate::archetype;
use crate::assessment::Assessment;
use crate::error::Result;
use crate::paths;
use crate::record::OnboardingRecord;
use crate::values;
use crate::voice::{self, VoiceInputs};
use chrono::Utc;

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

/// One user's onboarding session: the assessment plus the value and
/// inspiration selections and the optional future-self statement. Thin
/// sequencing only; all scoring lives in the resolver, blend engine, and
/// voice generator. Discarding an unfinished session is the cancellation
/// protocol; nothing is persisted until `finish` succeeds.
#[derive(Debug, Clone)]
pub struct Onboarding {
    user_id: String,
    display_name: Option<String>,
    assessment: Assessment,
    selected_value_ids: Vec<String>,
    selected_inspiration_ids: Vec<String>,
    future_self: Option<String>,
}

impl Onboarding {
    pub fn new(user_id: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        paths::validate_user_id(&user_id)?;
        Ok(Self {
            user_id,
            display_name: None,
            assessment: Assessment::new(),
            selected_value_ids: Vec::new(),
            selected_inspiration_ids: Vec::new(),
            future_self: None,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn assessment_mut(&mut self) -> &mut Assessment {
        &mut self.assessment
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Exactly 5 known, distinct value ids; rejected here, at the boundary.
    pub fn select_values(&mut self, ids: Vec<String>) -> Result<()> {
        values::validate_value_selection(&ids)?;
        self.selected_value_ids = ids;
        Ok(())
    }

    /// 5-10 known, distinct inspiration ids.
    pub fn select_inspirations(&mut self, ids: Vec<String>) -> Result<()> {
        values::validate_inspiration_selection(&ids)?;
        self.selected_inspiration_ids = ids;
        Ok(())
    }

    pub fn set_future_self(&mut self, text: impl Into<String>) {
        self.future_self = Some(text.into());
    }

    /// Run the full chain: resolve traits, blend archetypes, generate the
    /// voice profile, and stamp the finished record. Fails fast on any
    /// incomplete input; never produces a partial record.
    pub fn finish(&self) -> Result<OnboardingRecord> {
        let traits = self.assessment.resolve()?;
        let blend = archetype::blend(&traits);
        let voice_profile = voice::generate(&VoiceInputs {
            blend: &blend,
            display_name: self.display_name.as_deref(),
            value_ids: &self.selected_value_ids,
            inspiration_ids: &self.selected_inspiration_ids,
            future_self: self.future_self.as_deref(),
        })?;

        Ok(OnboardingRecord {
            user_id: self.user_id.clone(),
            traits,
            archetype_blend: blend,
            voice_profile,
            selected_value_ids: self.selected_value_ids.clone(),
            selected_inspiration_ids: self.selected_inspiration_ids.clone(),
            future_self: self.future_self.clone(),
            completed_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
