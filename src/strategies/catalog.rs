use serde::{Deserialize, Serialize};

use crate::location::Climate;

/// Stable catalog identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKey {
    GreenInfrastructure,
    CoolPavements,
    WaterFeatures,
    BuildingDesign,
    UrbanPlanning,
    Transportation,
}

impl StrategyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKey::GreenInfrastructure => "green-infrastructure",
            StrategyKey::CoolPavements => "cool-pavements",
            StrategyKey::WaterFeatures => "water-features",
            StrategyKey::BuildingDesign => "building-design",
            StrategyKey::UrbanPlanning => "urban-planning",
            StrategyKey::Transportation => "transportation",
        }
    }

    /// Parse a key string; `None` for anything outside the catalog
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "green-infrastructure" => Some(StrategyKey::GreenInfrastructure),
            "cool-pavements" => Some(StrategyKey::CoolPavements),
            "water-features" => Some(StrategyKey::WaterFeatures),
            "building-design" => Some(StrategyKey::BuildingDesign),
            "urban-planning" => Some(StrategyKey::UrbanPlanning),
            "transportation" => Some(StrategyKey::Transportation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostTier {
    LowMedium,
    Medium,
    MediumHigh,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeTier {
    MediumTerm,
    LongTerm,
}

/// A single catalog entry
#[derive(Debug, Clone)]
pub struct StrategyDefinition {
    pub key: StrategyKey,
    pub display_name: &'static str,
    /// Implementation techniques, most representative first
    pub methods: &'static [&'static str],
    /// Base effectiveness in [0, 1] per climate zone
    pub effectiveness: &'static [(Climate, f64)],
    pub cost: CostTier,
    pub time: TimeTier,
}

impl StrategyDefinition {
    pub fn effectiveness_for(&self, climate: Climate) -> Option<f64> {
        self.effectiveness
            .iter()
            .find(|(c, _)| *c == climate)
            .map(|(_, e)| *e)
    }
}

// ============================================================================
// EMBEDDED STRATEGY TABLE
// Iteration order is significant: it breaks ties between equal scores.
// ============================================================================

pub static CATALOG: &[StrategyDefinition] = &[
    StrategyDefinition {
        key: StrategyKey::GreenInfrastructure,
        display_name: "Green Infrastructure",
        methods: &["urban forests", "green roofs", "green walls", "parks", "urban gardens"],
        effectiveness: &[
            (Climate::Tropical, 0.9),
            (Climate::Subtropical, 0.8),
            (Climate::Temperate, 0.7),
            (Climate::Polar, 0.4),
        ],
        cost: CostTier::MediumHigh,
        time: TimeTier::LongTerm,
    },
    StrategyDefinition {
        key: StrategyKey::CoolPavements,
        display_name: "Cool Pavements & Surfaces",
        methods: &["reflective pavements", "permeable surfaces", "light-colored materials"],
        effectiveness: &[
            (Climate::Tropical, 0.8),
            (Climate::Subtropical, 0.9),
            (Climate::Temperate, 0.7),
            (Climate::Polar, 0.3),
        ],
        cost: CostTier::Medium,
        time: TimeTier::MediumTerm,
    },
    StrategyDefinition {
        key: StrategyKey::WaterFeatures,
        display_name: "Water Features & Management",
        methods: &["fountains", "water bodies", "misting systems", "retention ponds"],
        effectiveness: &[
            (Climate::Tropical, 0.7),
            (Climate::Subtropical, 0.8),
            (Climate::Temperate, 0.6),
            (Climate::Polar, 0.2),
        ],
        cost: CostTier::High,
        time: TimeTier::MediumTerm,
    },
    StrategyDefinition {
        key: StrategyKey::BuildingDesign,
        display_name: "Building Design Standards",
        methods: &["cool roofs", "energy-efficient buildings", "building orientation", "shading"],
        effectiveness: &[
            (Climate::Tropical, 0.8),
            (Climate::Subtropical, 0.8),
            (Climate::Temperate, 0.6),
            (Climate::Polar, 0.5),
        ],
        cost: CostTier::Medium,
        time: TimeTier::LongTerm,
    },
    StrategyDefinition {
        key: StrategyKey::UrbanPlanning,
        display_name: "Urban Planning Reforms",
        methods: &["zoning changes", "density management", "wind corridors", "mixed-use development"],
        effectiveness: &[
            (Climate::Tropical, 0.7),
            (Climate::Subtropical, 0.7),
            (Climate::Temperate, 0.8),
            (Climate::Polar, 0.6),
        ],
        cost: CostTier::LowMedium,
        time: TimeTier::LongTerm,
    },
    StrategyDefinition {
        key: StrategyKey::Transportation,
        display_name: "Transportation Solutions",
        methods: &["public transit", "bike lanes", "electric vehicles", "traffic reduction"],
        effectiveness: &[
            (Climate::Tropical, 0.6),
            (Climate::Subtropical, 0.6),
            (Climate::Temperate, 0.7),
            (Climate::Polar, 0.5),
        ],
        cost: CostTier::High,
        time: TimeTier::LongTerm,
    },
];
