//! Reasoning Generator
//!
//! Deterministic sentence templates keyed by strategy. Each template reads
//! only the profile's climate, coastal flag and urbanization.

use crate::location::{Climate, LocationProfile, Urbanization};
use crate::strategies::StrategyKey;

/// Used when a key is not in the catalog
pub const GENERIC_REASONING: &str = "This strategy provides general urban heat reduction benefits.";

/// Per-strategy text attached to a recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyExplanation {
    pub reasoning_text: String,
    pub location_notes: Vec<String>,
}

/// Reasoning and notes for a strategy key string
pub fn explain(strategy_key: &str, profile: &LocationProfile) -> StrategyExplanation {
    let key = StrategyKey::parse(strategy_key);

    let reasoning_text = match key {
        Some(key) => strategy_reasoning(key, profile),
        None => GENERIC_REASONING.to_string(),
    };

    StrategyExplanation {
        reasoning_text,
        location_notes: location_notes(key, profile),
    }
}

pub fn strategy_reasoning(key: StrategyKey, profile: &LocationProfile) -> String {
    let climate = profile.climate.as_str();
    let coastal = profile.is_coastal();
    let dense = profile.urbanization == Urbanization::High;

    match key {
        StrategyKey::GreenInfrastructure => {
            let degree = match profile.climate {
                Climate::Tropical => "extremely",
                Climate::Subtropical => "highly",
                _ => "moderately",
            };
            format!(
                "Green infrastructure is {} effective in {} climates due to evapotranspiration cooling effects. {}",
                degree,
                climate,
                if dense { "Dense urban areas particularly benefit from increased vegetation." } else { "" }
            )
        }
        StrategyKey::CoolPavements => format!(
            "Cool pavements work exceptionally well in {} regions where surface temperatures are a major heat contributor. {}",
            climate,
            if coastal {
                "Coastal locations benefit from additional ocean breeze interaction with cooler surfaces."
            } else {
                "Inland areas see maximum benefit from reflective surfaces."
            }
        ),
        StrategyKey::WaterFeatures => format!(
            "Water features provide evaporative cooling, most effective in {} climates. {}",
            climate,
            if coastal {
                "Being coastal, this area already has some humidity, but strategic water placement can enhance cooling."
            } else {
                "In this inland location, water features can significantly improve local humidity and cooling."
            }
        ),
        StrategyKey::BuildingDesign => format!(
            "Building design modifications are universally beneficial but particularly important in {} areas. Cool roofs are essential in {} climates to reduce heat absorption.",
            if dense { "densely developed" } else { "developing" },
            climate
        ),
        StrategyKey::UrbanPlanning => format!(
            "Urban planning interventions are crucial for {} urban areas. {}",
            if dense { "already dense" } else { "growing" },
            if coastal {
                "Coastal wind patterns should be incorporated into planning."
            } else {
                "Inland areas need careful consideration of heat island formation."
            }
        ),
        StrategyKey::Transportation => format!(
            "Transportation solutions reduce heat generation from vehicles and infrastructure. {}",
            if dense {
                "High-density areas see maximum benefit from transit improvements."
            } else {
                "Growing areas can prevent future heat island intensification."
            }
        ),
    }
}

/// Notes from three independent predicates, concatenated in fixed order:
/// coastal, tropical, high urbanization.
pub fn location_notes(key: Option<StrategyKey>, profile: &LocationProfile) -> Vec<String> {
    let mut notes = Vec::new();
    let green = key == Some(StrategyKey::GreenInfrastructure);

    if profile.is_coastal() {
        notes.push("Consider salt-tolerance for coastal installations".to_string());
        if green {
            notes.push("Select native coastal vegetation for best results".to_string());
        }
    }

    if profile.climate == Climate::Tropical {
        if green {
            notes.push("Focus on dense canopy trees for maximum shade".to_string());
        }
        if key == Some(StrategyKey::WaterFeatures) {
            notes.push("Design for high humidity management".to_string());
        }
    }

    if profile.urbanization == Urbanization::High {
        notes.push("Prioritize space-efficient implementations".to_string());
        if green {
            notes.push("Emphasize vertical green solutions (walls, roofs)".to_string());
        }
    }

    notes
}

/// Four-line narrative about the place itself, always in this order:
/// climate, urbanization, coastal/inland, country.
pub fn location_reasoning(profile: &LocationProfile) -> Vec<String> {
    vec![
        format!(
            "{} has a {} climate, which affects the effectiveness of different cooling strategies.",
            profile.name,
            profile.climate.as_str()
        ),
        format!(
            "As a {}-urbanization area, certain implementation approaches will be more practical.",
            profile.urbanization.as_str()
        ),
        if profile.is_coastal() {
            "The coastal location provides opportunities for ocean breeze utilization and presents salt-air considerations.".to_string()
        } else {
            "The inland location requires strategies that don't rely on ocean effects.".to_string()
        },
        format!(
            "Regional factors in {} may influence policy implementation and available resources.",
            profile.country_or("this region")
        ),
    ]
}
