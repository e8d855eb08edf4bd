#![allow(dead_code)]

use amqpscan_diagnostics::analyzer::AnalyzerSummary;
use amqpscan_diagnostics::snapshot::{
    BrokerQueueChurnMetrics, ChannelSnapshot, ClusterSnapshot, ConnectionSnapshot,
    ConnectionState, ConnectivitySnapshot, DescriptorUsage, DiskSnapshot, MemorySnapshot, Metric,
    NodeSnapshot, OperatingSystemSnapshot, QueueChurnMetrics, QueueMemoryDetails, QueueSnapshot,
    QueuesSnapshot, RuntimeSnapshot, Snapshot,
};

/// Reference queues-view: 8 queues on one node with fixed churn numbers and
/// paged-out totals mirroring the incoming totals, plus one unroutable
/// message recorded cluster-wide.
pub fn golden_queues_snapshot() -> Snapshot {
    let churn: [(u64, u64, u64); 8] = [
        (17, 34, 51),
        (0, 0, 0),
        (20, 40, 60),
        (0, 0, 0),
        (200, 400, 600),
        (0, 0, 0),
        (0, 0, 0),
        (0, 0, 0),
    ];

    let queues = churn
        .iter()
        .enumerate()
        .map(|(i, &(incoming, acknowledged, redelivered))| QueueSnapshot {
            identifier: format!("Queue {i}"),
            virtual_host: "/".to_string(),
            node: "Node0".to_string(),
            messages: QueueChurnMetrics {
                incoming: Metric::of(incoming),
                acknowledged: Metric::of(acknowledged),
                redelivered: Metric::of(redelivered),
                ..Default::default()
            },
            memory: QueueMemoryDetails {
                total: 0,
                paged_out: Metric::of(incoming),
            },
            consumers: 0,
            consumer_utilization: 0.0,
        })
        .collect();

    Snapshot::Queues(QueuesSnapshot {
        cluster_name: "Cluster 1".to_string(),
        churn: BrokerQueueChurnMetrics {
            not_routed: Metric::of(1),
            ..Default::default()
        },
        queues,
    })
}

/// Connectivity-view with visible churn, one struggling connection, and one
/// healthy connection.
pub fn connectivity_snapshot() -> Snapshot {
    Snapshot::Connectivity(ConnectivitySnapshot {
        cluster_name: "Cluster 1".to_string(),
        broker_version: "3.13.1".to_string(),
        connections_created: Metric::new(5000, 120.0),
        connections_closed: Metric::new(4800, 2.0),
        connections: vec![
            ConnectionSnapshot {
                identifier: "connection-1".to_string(),
                node: "Node0".to_string(),
                state: ConnectionState::Blocked,
                open_channels: 2,
                open_channels_limit: 2,
                channels: vec![
                    ChannelSnapshot {
                        identifier: "channel-1.1".to_string(),
                        connection_identifier: "connection-1".to_string(),
                        prefetch_count: 0,
                        unacknowledged: 0,
                        unconfirmed: 0,
                        consumers: 1,
                    },
                    ChannelSnapshot {
                        identifier: "channel-1.2".to_string(),
                        connection_identifier: "connection-1".to_string(),
                        prefetch_count: 10,
                        unacknowledged: 15,
                        unconfirmed: 0,
                        consumers: 1,
                    },
                ],
            },
            ConnectionSnapshot {
                identifier: "connection-2".to_string(),
                node: "Node1".to_string(),
                state: ConnectionState::Running,
                open_channels: 1,
                open_channels_limit: 100,
                channels: vec![ChannelSnapshot {
                    identifier: "channel-2.1".to_string(),
                    connection_identifier: "connection-2".to_string(),
                    prefetch_count: 50,
                    unacknowledged: 10,
                    unconfirmed: 0,
                    consumers: 2,
                }],
            },
        ],
    })
}

/// Cluster-view with one fully populated node under pressure and one bare
/// node missing every sub-record.
pub fn cluster_snapshot() -> Snapshot {
    Snapshot::Cluster(ClusterSnapshot {
        cluster_name: "Cluster 1".to_string(),
        broker_version: "3.13.1".to_string(),
        nodes: vec![
            NodeSnapshot {
                identifier: "rabbit@node-a".to_string(),
                cluster_identifier: "Cluster 1".to_string(),
                available_cores: 4,
                network_partitions: vec!["rabbit@node-b".to_string()],
                disk: Some(DiskSnapshot {
                    node_identifier: "rabbit@node-a".to_string(),
                    alarm_in_effect: true,
                    capacity_available: 1_000_000,
                    limit: 50_000_000,
                }),
                memory: Some(MemorySnapshot {
                    node_identifier: "rabbit@node-a".to_string(),
                    alarm_in_effect: false,
                    used: 2_000_000_000,
                    limit: 6_000_000_000,
                }),
                runtime: Some(RuntimeSnapshot {
                    node_identifier: "rabbit@node-a".to_string(),
                    process_limit: 1000,
                    processes_used: 900,
                }),
                os: Some(OperatingSystemSnapshot {
                    node_identifier: "rabbit@node-a".to_string(),
                    file_descriptors: DescriptorUsage {
                        available: 500,
                        used: 350,
                    },
                    socket_descriptors: DescriptorUsage {
                        available: 500,
                        used: 10,
                    },
                }),
            },
            NodeSnapshot {
                identifier: "rabbit@node-b".to_string(),
                cluster_identifier: "Cluster 1".to_string(),
                available_cores: 0,
                network_partitions: Vec::new(),
                disk: None,
                memory: None,
                runtime: None,
                os: None,
            },
        ],
    })
}

pub fn summary<'a>(summaries: &'a [AnalyzerSummary], id: &str) -> &'a AnalyzerSummary {
    summaries
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no summary for group {id}"))
}
