use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single probe outcome. A flat tag, never ordered by
/// severity; the analyzer treats it purely as a bucketing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeResultStatus {
    Healthy,
    Unhealthy,
    Warning,
    Inconclusive,
    #[serde(rename = "na")]
    NotApplicable,
}

impl fmt::Display for ProbeResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Unhealthy => write!(f, "Unhealthy"),
            Self::Warning => write!(f, "Warning"),
            Self::Inconclusive => write!(f, "Inconclusive"),
            Self::NotApplicable => write!(f, "NA"),
        }
    }
}

/// The kind of broker entity a probe targets or an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Connection,
    Channel,
    Queue,
    Exchange,
    Node,
    Disk,
    Memory,
    Runtime,
    OperatingSystem,
    #[serde(rename = "na")]
    NotSpecified,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection => write!(f, "Connection"),
            Self::Channel => write!(f, "Channel"),
            Self::Queue => write!(f, "Queue"),
            Self::Exchange => write!(f, "Exchange"),
            Self::Node => write!(f, "Node"),
            Self::Disk => write!(f, "Disk"),
            Self::Memory => write!(f, "Memory"),
            Self::Runtime => write!(f, "Runtime"),
            Self::OperatingSystem => write!(f, "OperatingSystem"),
            Self::NotSpecified => write!(f, "NA"),
        }
    }
}

/// The diagnostic concern a probe measures. Connectivity-category probes run
/// once per scan against the snapshot root rather than once per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeCategory {
    Throughput,
    Connectivity,
    Memory,
    FaultTolerance,
    Efficiency,
}

impl fmt::Display for ProbeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Throughput => write!(f, "Throughput"),
            Self::Connectivity => write!(f, "Connectivity"),
            Self::Memory => write!(f, "Memory"),
            Self::FaultTolerance => write!(f, "FaultTolerance"),
            Self::Efficiency => write!(f, "Efficiency"),
        }
    }
}
