pub mod types;
pub mod reasoning;
pub mod narrative;
pub mod quick_analysis;

pub use types::{
    HeatRisk, PriorityAction, QuickAnalysis, ResponsePayload, ScoredRecommendation, Urgency,
};

pub use reasoning::{explain, location_notes, location_reasoning, StrategyExplanation};
pub use narrative::{build_user_prompt, fallback_narrative, NO_LOCATION_GUIDANCE, SYSTEM_INSTRUCTION};
pub use quick_analysis::{assess_heat_risk, quick_analysis};
