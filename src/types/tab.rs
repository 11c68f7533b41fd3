use serde::{Deserialize, Serialize};

/// Snapshot of one tab as shown in the tab strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSummary {
    pub id: String,
    pub label: String,
    pub title: String,
    pub url: String,
    pub loading: bool,
    pub active: bool,
}
