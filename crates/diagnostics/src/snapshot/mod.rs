//! Immutable snapshot tree model
//!
//! Broker state captured at one instant by the external snapshot subsystem.
//! Three shapes exist, one per scanner: the queues-view, the
//! connectivity-view, and the cluster-view. The core only ever reads these
//! trees; it never requests or mutates them.

pub mod cluster;
pub mod connectivity;
pub mod metrics;
pub mod queues;

pub use cluster::{
    ClusterSnapshot, DescriptorUsage, DiskSnapshot, MemorySnapshot, NodeSnapshot,
    OperatingSystemSnapshot, RuntimeSnapshot,
};
pub use connectivity::{
    ChannelSnapshot, ConnectionSnapshot, ConnectionState, ConnectivitySnapshot,
};
pub use metrics::Metric;
pub use queues::{
    BrokerQueueChurnMetrics, QueueChurnMetrics, QueueMemoryDetails, QueueSnapshot, QueuesSnapshot,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a snapshot shape; the key under which scanners are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Queues,
    Connectivity,
    Cluster,
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queues => write!(f, "queues"),
            Self::Connectivity => write!(f, "connectivity"),
            Self::Cluster => write!(f, "cluster"),
        }
    }
}

/// A fully materialized snapshot handed to the core for one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Snapshot {
    Queues(QueuesSnapshot),
    Connectivity(ConnectivitySnapshot),
    Cluster(ClusterSnapshot),
}

impl Snapshot {
    pub fn kind(&self) -> SnapshotKind {
        match self {
            Self::Queues(_) => SnapshotKind::Queues,
            Self::Connectivity(_) => SnapshotKind::Connectivity,
            Self::Cluster(_) => SnapshotKind::Cluster,
        }
    }
}
