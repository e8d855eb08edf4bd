use crate::core::{ComponentType, ProbeResultStatus};
use crate::knowledge::KnowledgeBaseArticle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named diagnostic data point attached to a probe outcome, preserving the
/// snapshot values the probe based its classification on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeData {
    pub property: String,
    pub value: String,
}

/// Outcome of executing one probe against one snapshot node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub parent_component: String,

    pub component: String,

    pub component_type: ComponentType,

    pub probe_id: String,

    pub probe_name: String,

    pub status: ProbeResultStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<KnowledgeBaseArticle>,

    pub data: Vec<ProbeData>,

    pub timestamp: DateTime<Utc>,
}

impl ProbeResult {
    pub fn new(
        parent_component: &str,
        component: &str,
        component_type: ComponentType,
        probe_id: &str,
        probe_name: &str,
        status: ProbeResultStatus,
    ) -> Self {
        Self {
            parent_component: parent_component.to_string(),
            component: component.to_string(),
            component_type,
            probe_id: probe_id.to_string(),
            probe_name: probe_name.to_string(),
            status,
            article: None,
            data: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Guard outcome for a probe handed a subject shape it does not target.
    /// Scanners never dispatch mismatches, so this carries no component ids.
    pub fn not_applicable(
        component_type: ComponentType,
        probe_id: &str,
        probe_name: &str,
    ) -> Self {
        Self::new(
            "",
            "",
            component_type,
            probe_id,
            probe_name,
            ProbeResultStatus::NotApplicable,
        )
    }

    pub fn with_article(mut self, article: Option<KnowledgeBaseArticle>) -> Self {
        self.article = article;
        self
    }

    pub fn with_data(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.data.push(ProbeData {
            property: property.into(),
            value: value.to_string(),
        });
        self
    }
}

/// An immutable batch of probe outcomes produced by one scanner execution,
/// appended in traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub id: Uuid,
    pub scanner: String,
    pub results: Vec<ProbeResult>,
    pub timestamp: DateTime<Utc>,
}

impl ScanResult {
    pub fn new(scanner: &str, results: Vec<ProbeResult>) -> Self {
        Self {
            id: Uuid::new_v4(),
            scanner: scanner.to_string(),
            results,
            timestamp: Utc::now(),
        }
    }

    pub fn empty(scanner: &str) -> Self {
        Self::new(scanner, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
