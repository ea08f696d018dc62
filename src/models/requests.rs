use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body for `POST /api/classify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Question prompt -> selected option text
    pub questionnaire_results: BTreeMap<String, String>,
    pub classification_goal: String,
}

/// Request body for `POST /api/messages/send`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub content: String,
}

/// Default instruction sent alongside the questionnaire results
pub const DEFAULT_CLASSIFICATION_GOAL: &str = "Generate an investor persona name and a brief \
description (2-3 sentences) for a startup founder based on their questionnaire responses. \
Also, list 3-5 key preferences or characteristics of this founder. The output should be in a \
JSON format with 'name', 'description', and 'details' (an array of strings) keys.";
