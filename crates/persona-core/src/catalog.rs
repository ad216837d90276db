use crate::types::{TraitCategory, TraitKey};

// ---------------------------------------------------------------------------
// TraitDimension
// ---------------------------------------------------------------------------

/// One bipolar personality axis. The full table is fixed at process start;
/// because `TraitKey` is a closed enum, lookups are total and can never miss.
#[derive(Debug, Clone, Copy)]
pub struct TraitDimension {
    pub key: TraitKey,
    pub category: TraitCategory,
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub left_text: &'static str,
    pub right_text: &'static str,
}

/// All 15 dimensions, in `TraitKey::all()` order. Archetype target vectors
/// are indexed by this order.
pub const TRAITS: [TraitDimension; 15] = [
    TraitDimension {
        key: TraitKey::IntrovertExtrovert,
        category: TraitCategory::Energy,
        left_label: "Introvert",
        right_label: "Extrovert",
        left_text: "Recharges alone; prefers depth over breadth in company.",
        right_text: "Recharges around people; draws energy from the room.",
    },
    TraitDimension {
        key: TraitKey::SteadyBurst,
        category: TraitCategory::Energy,
        left_label: "Steady",
        right_label: "Burst",
        left_text: "Works at an even, sustainable pace day after day.",
        right_text: "Works in intense sprints followed by recovery.",
    },
    TraitDimension {
        key: TraitKey::CalmIntense,
        category: TraitCategory::Energy,
        left_label: "Calm",
        right_label: "Intense",
        left_text: "Keeps an even keel; rarely visibly worked up.",
        right_text: "Brings visible fire to the things that matter.",
    },
    TraitDimension {
        key: TraitKey::IntuitiveAnalytical,
        category: TraitCategory::Decision,
        left_label: "Intuitive",
        right_label: "Analytical",
        left_text: "Trusts gut feel and pattern recognition.",
        right_text: "Wants evidence and reasoning before committing.",
    },
    TraitDimension {
        key: TraitKey::CautiousBold,
        category: TraitCategory::Decision,
        left_label: "Cautious",
        right_label: "Bold",
        left_text: "Weighs downside risk before moving.",
        right_text: "Moves fast and course-corrects along the way.",
    },
    TraitDimension {
        key: TraitKey::PragmaticIdealistic,
        category: TraitCategory::Decision,
        left_label: "Pragmatic",
        right_label: "Idealistic",
        left_text: "Judges plans by whether they work in practice.",
        right_text: "Judges plans by the ideal they serve.",
    },
    TraitDimension {
        key: TraitKey::StructuredFlexible,
        category: TraitCategory::Work,
        left_label: "Structured",
        right_label: "Flexible",
        left_text: "Thrives on routines, lists, and plans made in advance.",
        right_text: "Thrives on open days and adapting on the fly.",
    },
    TraitDimension {
        key: TraitKey::DetailBigPicture,
        category: TraitCategory::Work,
        left_label: "Detail-focused",
        right_label: "Big-picture",
        left_text: "Notices the small things others miss.",
        right_text: "Thinks in broad strokes, leaves details for later.",
    },
    TraitDimension {
        key: TraitKey::DeepFocusMultitasker,
        category: TraitCategory::Work,
        left_label: "Deep focus",
        right_label: "Multitasker",
        left_text: "Does best work locked onto a single task.",
        right_text: "Does best work juggling several threads at once.",
    },
    TraitDimension {
        key: TraitKey::PrivateExpressive,
        category: TraitCategory::Social,
        left_label: "Private",
        right_label: "Expressive",
        left_text: "Keeps feelings close until trust is established.",
        right_text: "Shares feelings openly and early.",
    },
    TraitDimension {
        key: TraitKey::IndependentCollaborative,
        category: TraitCategory::Social,
        left_label: "Independent",
        right_label: "Collaborative",
        left_text: "Most effective working solo.",
        right_text: "Most effective working as part of a team.",
    },
    TraitDimension {
        key: TraitKey::ListenerSpeaker,
        category: TraitCategory::Social,
        left_label: "Listener",
        right_label: "Speaker",
        left_text: "Mostly listens and takes things in.",
        right_text: "Does a lot of the talking.",
    },
    TraitDimension {
        key: TraitKey::TraditionalInnovative,
        category: TraitCategory::Approach,
        left_label: "Traditional",
        right_label: "Innovative",
        left_text: "Leans on proven ways of doing things.",
        right_text: "Reaches for new ways of doing things.",
    },
    TraitDimension {
        key: TraitKey::CompetitiveCooperative,
        category: TraitCategory::Approach,
        left_label: "Competitive",
        right_label: "Cooperative",
        left_text: "Competition brings out their best.",
        right_text: "Collaboration brings out their best.",
    },
    TraitDimension {
        key: TraitKey::RealisticVisionary,
        category: TraitCategory::Approach,
        left_label: "Realistic",
        right_label: "Visionary",
        left_text: "Focuses on what is achievable right now.",
        right_text: "Focuses on what could be possible someday.",
    },
];

// ---------------------------------------------------------------------------
// StatementPair
// ---------------------------------------------------------------------------

/// Two independently-worded statements per dimension, one phrased toward
/// each pole. Agreement with each is rated separately on a 1-5 scale.
#[derive(Debug, Clone, Copy)]
pub struct StatementPair {
    pub key: TraitKey,
    pub left_statement: &'static str,
    pub right_statement: &'static str,
}

pub const STATEMENTS: [StatementPair; 15] = [
    StatementPair {
        key: TraitKey::IntrovertExtrovert,
        left_statement: "I recharge best with quiet time to myself.",
        right_statement: "I come alive when I'm around other people.",
    },
    StatementPair {
        key: TraitKey::SteadyBurst,
        left_statement: "I do my best work at a steady, consistent pace.",
        right_statement: "I work in intense bursts of energy, then recover.",
    },
    StatementPair {
        key: TraitKey::CalmIntense,
        left_statement: "People would describe my presence as calm and even.",
        right_statement: "I bring visible intensity to the things I care about.",
    },
    StatementPair {
        key: TraitKey::IntuitiveAnalytical,
        left_statement: "I trust my gut to point me in the right direction.",
        right_statement: "I want the data before I commit to a direction.",
    },
    StatementPair {
        key: TraitKey::CautiousBold,
        left_statement: "I prefer to weigh the downsides before acting.",
        right_statement: "I'd rather move fast and course-correct later.",
    },
    StatementPair {
        key: TraitKey::PragmaticIdealistic,
        left_statement: "A good plan is one that works in the real world.",
        right_statement: "A good plan is one that serves a larger ideal.",
    },
    StatementPair {
        key: TraitKey::StructuredFlexible,
        left_statement: "I like my days mapped out in advance.",
        right_statement: "I like keeping my days open to whatever comes up.",
    },
    StatementPair {
        key: TraitKey::DetailBigPicture,
        left_statement: "I notice the small details others miss.",
        right_statement: "I think in broad strokes and leave details for later.",
    },
    StatementPair {
        key: TraitKey::DeepFocusMultitasker,
        left_statement: "I do my best work locked onto a single task.",
        right_statement: "I thrive when I'm juggling several things at once.",
    },
    StatementPair {
        key: TraitKey::PrivateExpressive,
        left_statement: "I keep my feelings close until I know someone well.",
        right_statement: "I share what I'm feeling openly and early.",
    },
    StatementPair {
        key: TraitKey::IndependentCollaborative,
        left_statement: "I'm most effective working on my own.",
        right_statement: "I'm most effective working as part of a team.",
    },
    StatementPair {
        key: TraitKey::ListenerSpeaker,
        left_statement: "In conversation I mostly listen and take things in.",
        right_statement: "In conversation I do a lot of the talking.",
    },
    StatementPair {
        key: TraitKey::TraditionalInnovative,
        left_statement: "Proven ways of doing things usually win.",
        right_statement: "New ways of doing things usually win.",
    },
    StatementPair {
        key: TraitKey::CompetitiveCooperative,
        left_statement: "A bit of competition brings out my best.",
        right_statement: "Working toward a shared goal brings out my best.",
    },
    StatementPair {
        key: TraitKey::RealisticVisionary,
        left_statement: "I focus on what's achievable right now.",
        right_statement: "I focus on what could be possible someday.",
    },
];

// ---------------------------------------------------------------------------
// StatementGroup
// ---------------------------------------------------------------------------

/// One screen of the assessment wizard: an ordered set of three dimensions
/// presented together. Every trait key appears in exactly one group.
#[derive(Debug, Clone, Copy)]
pub struct StatementGroup {
    pub category: TraitCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub traits: [TraitKey; 3],
}

pub const GROUPS: [StatementGroup; 5] = [
    StatementGroup {
        category: TraitCategory::Energy,
        title: "Energy & Pace",
        description: "How you recharge and spend your energy.",
        traits: [
            TraitKey::IntrovertExtrovert,
            TraitKey::SteadyBurst,
            TraitKey::CalmIntense,
        ],
    },
    StatementGroup {
        category: TraitCategory::Decision,
        title: "Making Decisions",
        description: "How you weigh choices and commit.",
        traits: [
            TraitKey::IntuitiveAnalytical,
            TraitKey::CautiousBold,
            TraitKey::PragmaticIdealistic,
        ],
    },
    StatementGroup {
        category: TraitCategory::Work,
        title: "How You Work",
        description: "Your natural working style.",
        traits: [
            TraitKey::StructuredFlexible,
            TraitKey::DetailBigPicture,
            TraitKey::DeepFocusMultitasker,
        ],
    },
    StatementGroup {
        category: TraitCategory::Social,
        title: "Social Style",
        description: "How you relate and communicate.",
        traits: [
            TraitKey::PrivateExpressive,
            TraitKey::IndependentCollaborative,
            TraitKey::ListenerSpeaker,
        ],
    },
    StatementGroup {
        category: TraitCategory::Approach,
        title: "Approach to Life",
        description: "How you orient toward change and the future.",
        traits: [
            TraitKey::TraditionalInnovative,
            TraitKey::CompetitiveCooperative,
            TraitKey::RealisticVisionary,
        ],
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn trait_by_key(key: TraitKey) -> &'static TraitDimension {
    &TRAITS[key.index()]
}

pub fn traits_by_category(category: TraitCategory) -> Vec<&'static TraitDimension> {
    TRAITS.iter().filter(|t| t.category == category).collect()
}

pub fn statement_for(key: TraitKey) -> &'static StatementPair {
    &STATEMENTS[key.index()]
}

pub fn groups() -> &'static [StatementGroup] {
    &GROUPS
}

pub fn group_for(key: TraitKey) -> &'static StatementGroup {
    // Every key belongs to exactly one group (verified in tests).
    GROUPS
        .iter()
        .find(|g| g.traits.contains(&key))
        .expect("every trait key belongs to a group")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
