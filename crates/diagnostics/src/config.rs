use serde::{Deserialize, Serialize};

/// Top-level configuration for the diagnostic engine. Validation of these
/// values is a fail-fast concern of the embedding application; the core only
/// reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub probes: ProbesConfig,
}

/// Thresholds consumed by the concrete probes. All fields have working
/// defaults so a zero-config scan behaves sensibly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbesConfig {
    /// Incoming total at or above which a queue counts as high-flow.
    pub high_flow_threshold: u64,

    /// Incoming total at or below which a queue counts as low-flow.
    pub low_flow_threshold: u64,

    /// Redelivered messages are flagged once they reach this multiple of the
    /// incoming total.
    pub message_redelivery_coefficient: f64,

    /// Consumer utilization below this fraction is flagged.
    pub consumer_utilization_threshold: f64,

    /// Connection creation rate (per second) at or above which churn is
    /// flagged.
    pub high_connection_creation_rate_threshold: f64,

    /// Connection closure rate (per second) at or above which churn is
    /// flagged.
    pub high_connection_closure_rate_threshold: f64,

    /// Fraction of the runtime process limit at which usage is flagged.
    pub runtime_process_usage_coefficient: f64,

    /// Fraction of available file descriptors at which usage is flagged.
    pub file_descriptor_usage_coefficient: f64,

    /// Fraction of available socket descriptors at which usage is flagged.
    pub socket_descriptor_usage_coefficient: f64,
}

impl Default for ProbesConfig {
    fn default() -> Self {
        Self {
            high_flow_threshold: 100,
            low_flow_threshold: 20,
            message_redelivery_coefficient: 1.0,
            consumer_utilization_threshold: 0.50,
            high_connection_creation_rate_threshold: 100.0,
            high_connection_closure_rate_threshold: 100.0,
            runtime_process_usage_coefficient: 0.65,
            file_descriptor_usage_coefficient: 0.60,
            socket_descriptor_usage_coefficient: 0.60,
        }
    }
}
