use crate::snapshot::Metric;
use serde::{Deserialize, Serialize};

/// Queues-view of the broker: exchange-level churn for the whole cluster plus
/// the per-queue message and memory detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueuesSnapshot {
    pub cluster_name: String,
    pub churn: BrokerQueueChurnMetrics,
    pub queues: Vec<QueueSnapshot>,
}

/// Cluster-wide message churn aggregated across all queues and exchanges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrokerQueueChurnMetrics {
    pub incoming: Metric,
    pub acknowledged: Metric,
    /// Messages published to an exchange that matched no binding.
    pub not_routed: Metric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub identifier: String,
    pub virtual_host: String,
    /// Name of the node hosting the queue master.
    pub node: String,
    pub messages: QueueChurnMetrics,
    pub memory: QueueMemoryDetails,
    pub consumers: u64,
    pub consumer_utilization: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueChurnMetrics {
    pub incoming: Metric,
    pub acknowledged: Metric,
    pub redelivered: Metric,
    pub ready: Metric,
    pub unacknowledged: Metric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueMemoryDetails {
    /// Bytes of memory attributed to the queue process.
    pub total: u64,
    /// Messages pushed out of resident memory to disk.
    pub paged_out: Metric,
}
