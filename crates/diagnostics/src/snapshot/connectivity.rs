use crate::snapshot::Metric;
use serde::{Deserialize, Serialize};

/// Connectivity-view of the broker: cluster-wide connection churn plus each
/// open connection and the channels it owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectivitySnapshot {
    pub cluster_name: String,
    pub broker_version: String,
    pub connections_created: Metric,
    pub connections_closed: Metric,
    pub connections: Vec<ConnectionSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionSnapshot {
    pub identifier: String,
    pub node: String,
    pub state: ConnectionState,
    pub open_channels: u64,
    /// Channel cap negotiated for the connection; zero when unlimited.
    pub open_channels_limit: u64,
    pub channels: Vec<ChannelSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    #[default]
    Running,
    Blocked,
    Blocking,
    Closing,
    Closed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub identifier: String,
    pub connection_identifier: String,
    pub prefetch_count: u32,
    pub unacknowledged: u64,
    pub unconfirmed: u64,
    pub consumers: u64,
}
