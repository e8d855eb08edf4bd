use serde::{Deserialize, Serialize};

/// Cluster-view of the broker: one entry per node with optional disk, memory,
/// runtime, and operating-system sub-records. A sub-record is absent when the
/// capture subsystem could not read it for that node; absent records are
/// skipped by the cluster scanner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub cluster_name: String,
    pub broker_version: String,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub identifier: String,
    pub cluster_identifier: String,
    pub available_cores: u64,
    /// Names of peer nodes this node considers partitioned away.
    pub network_partitions: Vec<String>,
    pub disk: Option<DiskSnapshot>,
    pub memory: Option<MemorySnapshot>,
    pub runtime: Option<RuntimeSnapshot>,
    pub os: Option<OperatingSystemSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskSnapshot {
    pub node_identifier: String,
    pub alarm_in_effect: bool,
    pub capacity_available: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub node_identifier: String,
    pub alarm_in_effect: bool,
    pub used: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSnapshot {
    pub node_identifier: String,
    pub process_limit: u64,
    pub processes_used: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatingSystemSnapshot {
    pub node_identifier: String,
    pub file_descriptors: DescriptorUsage,
    pub socket_descriptors: DescriptorUsage,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DescriptorUsage {
    pub available: u64,
    pub used: u64,
}
