//! HTTP DTOs for decision endpoints.
//!
//! These types decouple the wire format (camelCase JSON, string ids)
//! from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::decision::NewOption;
use crate::domain::decision::{Decision, DecisionError};

// ════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════

/// One candidate option as submitted. The id is optional; the server
/// assigns one when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl OptionRequest {
    /// Converts to the application-layer shape, rejecting malformed ids.
    pub fn into_new_option(self) -> Result<NewOption, DecisionError> {
        let id = self
            .id
            .map(|raw| {
                raw.parse().map_err(|_| {
                    DecisionError::validation("option.id", format!("not a valid id: {}", raw))
                })
            })
            .transpose()?;
        Ok(NewOption {
            id,
            name: self.name,
            pros: self.pros,
            cons: self.cons,
        })
    }
}

/// Request to create a new decision.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDecisionRequest {
    pub title: String,
    #[serde(default)]
    pub context: Option<String>,
    pub confidence: u8,
    pub options: Vec<OptionRequest>,
}

/// Request to edit a draft decision. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDecisionRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub options: Option<Vec<OptionRequest>>,
}

/// Request to lock in a chosen option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockDecisionRequest {
    pub chosen_option_id: String,
}

/// Request to record an outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteDecisionRequest {
    pub outcome: String,
    #[serde(default)]
    pub reflection: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub id: String,
    pub name: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Wire view of a decision. The lifecycle variant is flattened back to
/// optional fields to keep the original JSON shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub confidence: u8,
    pub options: Vec<OptionResponse>,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            id: decision.id().to_string(),
            user_id: decision.owner_id().to_string(),
            title: decision.title().to_string(),
            context: decision.context().map(str::to_string),
            confidence: decision.confidence().value(),
            options: decision
                .options()
                .iter()
                .map(|o| OptionResponse {
                    id: o.id().to_string(),
                    name: o.name().to_string(),
                    pros: o.pros().to_vec(),
                    cons: o.cons().to_vec(),
                })
                .collect(),
            state: decision.lifecycle().name().to_string(),
            chosen_option_id: decision.chosen_option_id().map(|id| id.to_string()),
            outcome: decision.outcome().map(|o| o.as_str().to_string()),
            reflection: decision.reflection().map(str::to_string),
            created_at: decision.created_at().to_rfc3339(),
            locked_at: decision.locked_at().map(|t| t.to_rfc3339()),
            completed_at: decision.completed_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Single-decision response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionEnvelope {
    pub decision: DecisionResponse,
}

/// Decision-list response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionListEnvelope {
    pub decisions: Vec<DecisionResponse>,
}
