//! Strategy Scorer - ranks the catalog against a location profile
//!
//! For each catalog entry: look up base effectiveness for the climate, apply
//! the geography/urbanization adjustments, cap at 1.0, keep entries above the
//! inclusion threshold, sort by rounded score (stable, catalog order breaks
//! ties), then pick priority actions from the sorted list.

use tracing::debug;

use crate::explanation::reasoning::{location_notes, location_reasoning, strategy_reasoning};
use crate::explanation::types::{PriorityAction, ScoredRecommendation, Urgency};
use crate::location::{Elevation, LocationProfile, Urbanization};
use crate::strategies::{StrategyDefinition, CATALOG};

/// Hand-tuned scoring constants. `Default` carries the production values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRules {
    /// Base effectiveness for a climate the entry does not list
    pub default_effectiveness: f64,
    /// Entries must score strictly above this to be recommended
    pub inclusion_threshold: f64,
    /// Recommendations strictly above this also become priority actions
    pub priority_threshold: f64,
    pub coastal_water_bonus: f64,
    pub high_elevation_green_penalty: f64,
    pub dense_building_planning_bonus: f64,
    /// Upper clamp only; no lower clamp is applied
    pub score_cap: f64,
    pub max_recommendations: usize,
    pub max_priority_actions: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            default_effectiveness: 0.5,
            inclusion_threshold: 0.6,
            priority_threshold: 0.8,
            coastal_water_bonus: 0.2,
            high_elevation_green_penalty: 0.1,
            dense_building_planning_bonus: 0.15,
            score_cap: 1.0,
            max_recommendations: 6,
            max_priority_actions: 3,
        }
    }
}

/// Scorer output: ranked recommendations plus the location narrative lines
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub recommendations: Vec<ScoredRecommendation>,
    pub priority_actions: Vec<PriorityAction>,
    pub reasoning: Vec<String>,
}

/// Main strategy scorer
pub struct StrategyScorer {
    catalog: &'static [StrategyDefinition],
    rules: ScoringRules,
}

impl Default for StrategyScorer {
    fn default() -> Self {
        Self::new(CATALOG, ScoringRules::default())
    }
}

impl StrategyScorer {
    pub fn new(catalog: &'static [StrategyDefinition], rules: ScoringRules) -> Self {
        Self { catalog, rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Base effectiveness and adjusted score for one entry
    pub fn score_strategy(&self, strategy: &StrategyDefinition, profile: &LocationProfile) -> (f64, f64) {
        let rules = &self.rules;
        let name = strategy.display_name;

        let base = strategy
            .effectiveness_for(profile.climate)
            .unwrap_or(rules.default_effectiveness);
        let mut score = base;

        if profile.geography.coastal && name.contains("Water") {
            score += rules.coastal_water_bonus;
        }

        if profile.geography.elevation == Elevation::High && name.contains("Green") {
            score -= rules.high_elevation_green_penalty;
        }

        if profile.urbanization == Urbanization::High
            && (name.contains("Building") || name.contains("Planning"))
        {
            score += rules.dense_building_planning_bonus;
        }

        (base, score.min(rules.score_cap))
    }

    /// Score the whole catalog against a profile
    pub fn score(&self, profile: &LocationProfile) -> RecommendationSet {
        let mut recommendations: Vec<ScoredRecommendation> = Vec::new();

        for strategy in self.catalog {
            let (base, adjusted) = self.score_strategy(strategy, profile);

            debug!(
                strategy = strategy.key.as_str(),
                base, adjusted, "scored strategy"
            );

            if adjusted <= self.rules.inclusion_threshold {
                continue;
            }

            recommendations.push(ScoredRecommendation {
                key: strategy.key,
                strategy_name: strategy.display_name.to_string(),
                methods: strategy.methods.iter().map(|m| m.to_string()).collect(),
                effectiveness_percent: to_percent(base),
                score_percent: to_percent(adjusted),
                cost_tier: strategy.cost,
                time_tier: strategy.time,
                reasoning_text: strategy_reasoning(strategy.key, profile),
                location_notes: location_notes(Some(strategy.key), profile),
                adjusted_score: adjusted,
            });
        }

        // Stable: equal percents keep catalog order
        recommendations.sort_by(|a, b| b.score_percent.cmp(&a.score_percent));
        recommendations.truncate(self.rules.max_recommendations);

        let priority_actions = recommendations
            .iter()
            .filter(|r| r.adjusted_score > self.rules.priority_threshold)
            .take(self.rules.max_priority_actions)
            .map(|r| PriorityAction {
                action: r.strategy_name.clone(),
                reason: format!(
                    "Highly effective for {} climate{} areas",
                    profile.climate.as_str(),
                    if profile.geography.coastal { " coastal" } else { "" }
                ),
                urgency: Urgency::High,
            })
            .collect();

        RecommendationSet {
            recommendations,
            priority_actions,
            reasoning: location_reasoning(profile),
        }
    }
}

/// Score with the built-in catalog and default rules
pub fn score(profile: &LocationProfile) -> RecommendationSet {
    StrategyScorer::default().score(profile)
}

/// Round a [0, 1] score to a whole percent; negatives saturate to 0
fn to_percent(value: f64) -> u32 {
    (value * 100.0).round() as u32
}
