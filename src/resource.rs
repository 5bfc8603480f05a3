use std::fmt;

use serde::{Deserialize, Serialize};

pub const SYNCED_STATUS: &str = "synced";

/// Analysis result returned by the Cased API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    #[serde(default)]
    pub managed_resources: Vec<ResourceRecord>,
    #[serde(default)]
    pub unmanaged_resources: Vec<ResourceRecord>,
    #[serde(default)]
    pub missing_resources: Vec<ResourceRecord>,
}

impl DriftReport {
    pub fn is_empty(&self) -> bool {
        self.managed_resources.is_empty()
            && self.unmanaged_resources.is_empty()
            && self.missing_resources.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResourceRecord {
    pub service_name: String,
    pub service_type: String,
    pub name: serde_json::Value,
    pub id: serde_json::Value,
    pub status: String,
    #[serde(default)]
    pub drift: Vec<DriftEntry>,
}

impl ResourceRecord {
    pub fn is_synced(&self) -> bool {
        self.status == SYNCED_STATUS
    }

    pub fn has_changes(&self) -> bool {
        !self.is_synced() || !self.drift.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftEntry {
    pub field: String,
    #[serde(default)]
    pub expected: serde_json::Value,
    #[serde(default)]
    pub actual: serde_json::Value,
}

/// Renders a report value the way an operator reads it: strings bare,
/// everything else as JSON.
pub struct DriftValue<'a>(pub &'a serde_json::Value);

impl fmt::Display for DriftValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
