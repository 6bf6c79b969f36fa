//! Narrative Text
//!
//! Prompt text handed to the text-generation collaborator, and the
//! deterministic markdown narrative used whenever that collaborator is
//! absent or fails. The fallback is a pure function of its inputs.

use crate::explanation::types::ScoredRecommendation;
use crate::location::{LocationProfile, Urbanization};

/// Response text when no place could be identified in the message
pub const NO_LOCATION_GUIDANCE: &str = "I couldn't identify a specific location in your message. Please provide a city name, address, or specific area you'd like me to analyze for urban heat island effects. For example: 'What can the government do to reduce heat in Phoenix, Arizona?' or 'How can we cool down downtown Mumbai?'";

pub const SYSTEM_INSTRUCTION: &str = "You are an expert urban climatologist and policy advisor specializing in urban heat island mitigation. Provide specific, actionable government recommendations for reducing urban heat based on the location's unique characteristics.

Key principles:
- Be location-specific, not generic
- Explain WHY certain methods work better in this location
- Consider local climate, geography, and urban development
- Provide practical government actions and policies
- Address why some common methods might NOT work well here";

/// Recommendations quoted as context in the prompt
pub const PROMPT_CONTEXT_RECOMMENDATIONS: usize = 3;

/// Methods listed as government actions in the fallback
const FALLBACK_METHODS: usize = 3;

/// User-role prompt embedding the profile and the top recommendations
pub fn build_user_prompt(
    profile: &LocationProfile,
    user_message: &str,
    recommendations: &[ScoredRecommendation],
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Location: {}", profile.name));
    lines.push(format!("Climate: {}", profile.climate.as_str()));
    lines.push(format!("Urbanization Level: {}", profile.urbanization.as_str()));
    lines.push(format!(
        "Geography: {}, {} elevation",
        if profile.is_coastal() { "Coastal" } else { "Inland" },
        profile.geography.elevation.as_str()
    ));
    lines.push(format!("Country: {}", profile.country_or("Unknown")));
    lines.push(String::new());
    lines.push(format!("User asked: \"{}\"", user_message));
    lines.push(String::new());
    lines.push("Based on the analysis, here are the top recommendations:".to_string());

    for rec in recommendations.iter().take(PROMPT_CONTEXT_RECOMMENDATIONS) {
        lines.push(format!(
            "- {}: {}% effective ({})",
            rec.strategy_name, rec.effectiveness_percent, rec.reasoning_text
        ));
    }

    lines.push(String::new());
    lines.push("Please provide a comprehensive response explaining what the government should do to reduce urban heat in this specific location, with clear reasoning for why these approaches work best here and why others might be less effective.".to_string());

    lines.join("\n")
}

/// Deterministic narrative built from the top-ranked recommendation
pub fn fallback_narrative(profile: &LocationProfile, recommendations: &[ScoredRecommendation]) -> String {
    let Some(top) = recommendations.first() else {
        return empty_fallback_narrative(profile);
    };

    let name = &profile.name;
    let mut lines = Vec::new();

    lines.push(format!(
        "Based on my analysis of {}, here are the most effective government actions to reduce urban heat:",
        name
    ));
    lines.push(String::new());
    lines.push(format!(
        "**Priority #1: {}** ({}% effectiveness)",
        top.strategy_name, top.effectiveness_percent
    ));
    lines.push(top.reasoning_text.clone());
    lines.push(String::new());

    lines.push(format!("**Why this works specifically for {}:**", name));
    lines.push(format!(
        "- {} climate makes this approach highly effective",
        profile.climate.display_name()
    ));
    lines.push(if profile.is_coastal() {
        "- Coastal location provides additional benefits".to_string()
    } else {
        "- Inland location requires focused implementation".to_string()
    });
    lines.push(if profile.urbanization == Urbanization::High {
        "- High urban density requires strategic placement".to_string()
    } else {
        "- Growing urban area can implement preventive measures".to_string()
    });
    lines.push(String::new());

    lines.push("**Recommended Government Actions:**".to_string());
    // Bullet blocks stay one line each, so an empty block still leaves its blank line
    lines.push(
        top.methods
            .iter()
            .take(FALLBACK_METHODS)
            .map(|m| format!("• Implement {} through zoning requirements and incentives", m))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    lines.push(String::new());

    lines.push("**Additional Considerations:**".to_string());
    lines.push(
        top.location_notes
            .iter()
            .map(|n| format!("• {}", n))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    lines.push(String::new());

    lines.push(format!(
        "The government should focus on these location-specific strategies rather than generic approaches, as they're tailored to {}'s unique environmental conditions.",
        name
    ));

    lines.join("\n")
}

/// Narrative when no strategy cleared the inclusion threshold
fn empty_fallback_narrative(profile: &LocationProfile) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Based on my analysis of {}, none of the standard urban heat mitigation strategies stand out as highly effective here.",
        profile.name
    ));
    lines.push(String::new());
    lines.push(format!(
        "The {} climate{} limits the cooling benefit of the usual interventions, so the government should favour low-cost, reversible pilots and measure their effect before committing to large programmes.",
        profile.climate.as_str(),
        if profile.is_coastal() { " and coastal setting" } else { "" }
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Climate, Coordinates, Elevation, Geography, Region};
    use crate::scorer::score;

    fn phoenix() -> LocationProfile {
        LocationProfile {
            name: "Phoenix, Arizona".to_string(),
            coordinates: Coordinates { latitude: 33.45, longitude: -112.07 },
            city: Some("Phoenix".to_string()),
            state: Some("Arizona".to_string()),
            country: Some("United States".to_string()),
            country_code: Some("us".to_string()),
            climate: Climate::Subtropical,
            urbanization: Urbanization::High,
            geography: Geography {
                coastal: false,
                elevation: Elevation::LowMedium,
                region: Region::NorthAmerica,
            },
        }
    }

    #[test]
    fn test_fallback_structure() {
        let profile = phoenix();
        let set = score(&profile);
        let text = fallback_narrative(&profile, &set.recommendations);

        // Subtropical + dense: building design 0.95 ranks first
        assert!(text.starts_with("Based on my analysis of Phoenix, Arizona,"));
        assert!(text.contains("**Priority #1: Building Design Standards** (80% effectiveness)"));
        assert!(text.contains("- Subtropical climate makes this approach highly effective"));
        assert!(text.contains("- Inland location requires focused implementation"));
        assert!(text.contains("- High urban density requires strategic placement"));
        assert!(text.contains("• Implement cool roofs through zoning requirements and incentives"));
        assert!(text.contains("• Implement building orientation through"));
        assert!(!text.contains("• Implement shading"));
        assert!(text.contains("• Prioritize space-efficient implementations"));
        assert!(text.ends_with("tailored to Phoenix, Arizona's unique environmental conditions."));
    }

    #[test]
    fn test_fallback_without_location_notes() {
        let mut tucson = phoenix();
        tucson.name = "Tucson, Arizona".to_string();
        tucson.city = Some("Tucson".to_string());
        tucson.urbanization = Urbanization::Medium;

        let mut set = score(&tucson);
        set.recommendations[0].location_notes.clear();
        let text = fallback_narrative(&tucson, &set.recommendations);

        assert!(text.contains(
            "**Additional Considerations:**\n\n\nThe government should focus on these location-specific strategies"
        ));
    }

    #[test]
    fn test_fallback_note_block_layout() {
        let profile = phoenix();
        let set = score(&profile);
        let text = fallback_narrative(&profile, &set.recommendations);

        assert!(text.contains("**Additional Considerations:**\n• "));
        assert!(text.contains("incentives\n\n**Additional Considerations:**"));
    }

    #[test]
    fn test_fallback_is_reproducible() {
        let profile = phoenix();
        let set = score(&profile);
        assert_eq!(
            fallback_narrative(&profile, &set.recommendations),
            fallback_narrative(&profile, &set.recommendations)
        );
    }

    #[test]
    fn test_fallback_without_recommendations() {
        let mut profile = phoenix();
        profile.climate = Climate::Polar;
        let text = fallback_narrative(&profile, &[]);
        assert!(text.contains("none of the standard urban heat mitigation strategies"));
        assert!(text.contains("The polar climate limits"));
    }

    #[test]
    fn test_user_prompt() {
        let profile = phoenix();
        let set = score(&profile);
        let prompt = build_user_prompt(&profile, "How do we cool Phoenix?", &set.recommendations);

        assert!(prompt.starts_with("Location: Phoenix, Arizona\nClimate: subtropical\nUrbanization Level: high\n"));
        assert!(prompt.contains("Geography: Inland, low-medium elevation\nCountry: United States"));
        assert!(prompt.contains("User asked: \"How do we cool Phoenix?\""));

        let context_lines = prompt.lines().filter(|l| l.starts_with("- ")).count();
        assert_eq!(context_lines, PROMPT_CONTEXT_RECOMMENDATIONS);
    }
}
