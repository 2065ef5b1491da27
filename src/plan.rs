use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload accepted by the planning service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub name: String,
    pub email: String,
    pub destination: String,
    pub days: u32,
    pub group_size: u32,
    pub trip_type: String,
    pub budget: String,
    pub preferences: String,
    pub source_location: String,
}

/// Response returned by the planning service: either an error indicator or a
/// mapping of section name to raw plan text plus a status message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanResponse {
    pub summary: Option<String>,
    pub agent_outputs: serde_json::Map<String, Value>,
    pub email_sent: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl PlanResponse {
    /// Parse a service response from its JSON form. Section order is
    /// preserved as sent.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid plan response: {}", e))
    }

    /// Wrap a bare block of plan text as a single-section response.
    pub fn from_text(text: &str) -> Self {
        let mut agent_outputs = serde_json::Map::new();
        agent_outputs.insert("Travel Plan".to_string(), Value::String(text.to_string()));
        PlanResponse {
            agent_outputs,
            ..Default::default()
        }
    }

    /// Sections in arrival order, skipping any non-text values.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.agent_outputs
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|text| (name.as_str(), text)))
    }
}

/// Strip currency decorations from a budget field ("Rs 1,20,000" -> 120000.0).
pub fn normalize_budget(raw: &str) -> Option<f64> {
    raw.replace("Rs", "").replace(',', "").trim().parse().ok()
}
