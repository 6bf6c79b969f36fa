//! Response Composer
//!
//! Assembles the chat payload. The narrative comes from the text-generation
//! collaborator when one is bound and succeeds; otherwise the deterministic
//! fallback is used. Collaborator failure is logged and never surfaced.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::collaborators::{recent_turns, ChatTurn, NarrativeGenerator, NarrativeRequest};
use crate::explanation::narrative::{build_user_prompt, fallback_narrative, SYSTEM_INSTRUCTION};
use crate::explanation::types::ResponsePayload;
use crate::location::LocationProfile;
use crate::scorer::RecommendationSet;

/// Where the payload's narrative came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeSource {
    Generated,
    Fallback,
}

#[derive(Clone, Default)]
pub struct ResponseComposer {
    narrator: Option<Arc<dyn NarrativeGenerator>>,
}

impl ResponseComposer {
    pub fn new(narrator: Option<Arc<dyn NarrativeGenerator>>) -> Self {
        Self { narrator }
    }

    pub fn has_narrator(&self) -> bool {
        self.narrator.is_some()
    }

    pub async fn compose(
        &self,
        profile: &LocationProfile,
        user_message: &str,
        history: &[ChatTurn],
        set: RecommendationSet,
    ) -> ResponsePayload {
        let (response, _) = self.narrative(profile, user_message, history, &set).await;

        ResponsePayload {
            response,
            location: Some(profile.clone()),
            recommendations: set.recommendations,
            reasoning: set.reasoning,
            priority_actions: set.priority_actions,
        }
    }

    /// Narrative text plus its source
    pub async fn narrative(
        &self,
        profile: &LocationProfile,
        user_message: &str,
        history: &[ChatTurn],
        set: &RecommendationSet,
    ) -> (String, NarrativeSource) {
        let Some(narrator) = &self.narrator else {
            debug!("No narrative collaborator bound, using fallback");
            return (fallback_narrative(profile, &set.recommendations), NarrativeSource::Fallback);
        };

        let request = NarrativeRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            history: recent_turns(history).to_vec(),
            user_prompt: build_user_prompt(profile, user_message, &set.recommendations),
        };

        match narrator.generate(&request).await {
            Ok(text) => (text, NarrativeSource::Generated),
            Err(e) => {
                warn!("Narrative generation failed, using fallback: {}", e);
                (fallback_narrative(profile, &set.recommendations), NarrativeSource::Fallback)
            }
        }
    }
}
