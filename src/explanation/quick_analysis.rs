//! Quick location analysis: heat risk, challenges and opportunities
//! without the chat narrative.

use crate::explanation::types::{HeatRisk, QuickAnalysis};
use crate::location::{Climate, Elevation, LocationProfile, Urbanization};
use crate::scorer::StrategyScorer;

const TOP_STRATEGIES: usize = 3;

pub fn quick_analysis(scorer: &StrategyScorer, profile: &LocationProfile) -> QuickAnalysis {
    let mut set = scorer.score(profile);
    set.recommendations.truncate(TOP_STRATEGIES);

    QuickAnalysis {
        climate: profile.climate,
        heat_risk: assess_heat_risk(profile),
        top_strategies: set.recommendations,
        challenges: implementation_challenges(profile),
        opportunities: opportunities(profile),
    }
}

/// Risk ladder: warm climate, then density, then inland lowland each step up.
/// The inland step only lifts `very-high` to `extreme`; anything else lands on `high`.
pub fn assess_heat_risk(profile: &LocationProfile) -> HeatRisk {
    let mut risk = HeatRisk::Medium;

    if matches!(profile.climate, Climate::Tropical | Climate::Subtropical) {
        risk = HeatRisk::High;
    }

    if profile.urbanization == Urbanization::High {
        risk = if risk == HeatRisk::High { HeatRisk::VeryHigh } else { HeatRisk::High };
    }

    if !profile.geography.coastal && profile.geography.elevation == Elevation::LowMedium {
        risk = if risk == HeatRisk::VeryHigh { HeatRisk::Extreme } else { HeatRisk::High };
    }

    risk
}

pub fn implementation_challenges(profile: &LocationProfile) -> Vec<String> {
    let mut challenges = Vec::new();

    if profile.urbanization == Urbanization::High {
        challenges.push("Limited space for new green infrastructure".to_string());
        challenges.push("High cost of retrofitting existing buildings".to_string());
    }

    if profile.geography.coastal {
        challenges.push("Salt air corrosion concerns".to_string());
        challenges.push("Hurricane/storm resilience requirements".to_string());
    }

    if profile.climate == Climate::Tropical {
        challenges.push("High maintenance needs for vegetation".to_string());
        challenges.push("Drainage considerations for water features".to_string());
    }

    challenges
}

pub fn opportunities(profile: &LocationProfile) -> Vec<String> {
    let mut out = Vec::new();

    if profile.geography.coastal {
        out.push("Utilize ocean breezes for natural cooling".to_string());
        out.push("Implement seawater-based cooling systems".to_string());
    }

    if profile.urbanization == Urbanization::Medium {
        out.push("Prevent heat island formation through proactive planning".to_string());
        out.push("Integrate cooling strategies into new development".to_string());
    }

    if profile.climate == Climate::Temperate {
        out.push("Seasonal strategies for maximum year-round effectiveness".to_string());
    }

    out
}
