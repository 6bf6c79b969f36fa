use serde::{Deserialize, Serialize};

use crate::location::{Climate, LocationProfile};
use crate::strategies::{CostTier, StrategyKey, TimeTier};

/// One catalog entry that cleared the inclusion threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecommendation {
    #[serde(skip)]
    pub key: StrategyKey,
    #[serde(rename = "strategy")]
    pub strategy_name: String,
    pub methods: Vec<String>,
    /// Base effectiveness for the profile's climate (0-100)
    #[serde(rename = "effectiveness")]
    pub effectiveness_percent: u32,
    /// Adjusted score (0-100)
    #[serde(rename = "score")]
    pub score_percent: u32,
    #[serde(rename = "cost")]
    pub cost_tier: CostTier,
    #[serde(rename = "timeframe")]
    pub time_tier: TimeTier,
    #[serde(rename = "reasoning")]
    pub reasoning_text: String,
    #[serde(rename = "locationSpecific")]
    pub location_notes: Vec<String>,
    /// Unrounded adjusted score; priority selection compares this, not the percent
    #[serde(skip)]
    pub adjusted_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub action: String,
    pub reason: String,
    pub urgency: Urgency,
}

/// Final chat payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    pub response: String,
    pub location: Option<LocationProfile>,
    pub recommendations: Vec<ScoredRecommendation>,
    pub reasoning: Vec<String>,
    pub priority_actions: Vec<PriorityAction>,
}

impl ResponsePayload {
    /// Payload for a message with no resolvable place
    pub fn location_not_found(guidance: &str) -> Self {
        Self {
            response: guidance.to_string(),
            location: None,
            recommendations: Vec::new(),
            reasoning: Vec::new(),
            priority_actions: Vec::new(),
        }
    }
}

/// Coarse heat-risk ladder for the quick analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatRisk {
    Medium,
    High,
    VeryHigh,
    Extreme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAnalysis {
    pub climate: Climate,
    pub heat_risk: HeatRisk,
    pub top_strategies: Vec<ScoredRecommendation>,
    pub challenges: Vec<String>,
    pub opportunities: Vec<String>,
}
