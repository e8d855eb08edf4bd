//! Connection-targeted probes
//!
//! The churn-rate probes belong to the Connectivity category: they read
//! cluster-wide counters and run once per scan against the connectivity-view
//! root. The remaining probes run once per connection instance.

use crate::core::{ComponentType, ProbeCategory, ProbeResult, ProbeResultStatus};
use crate::snapshot::ConnectionState;

crate::define_probe! {
    HighConnectionCreationRateProbe {
        id: "high-connection-creation-rate",
        name: "High Connection Creation Rate Probe",
        component: ComponentType::Connection,
        category: ProbeCategory::Connectivity,
        description: "Warns when clients open connections fast enough to suggest churn instead of reuse",
        subject: Connectivity,
        thresholds: |config| { threshold: f64 = config.high_connection_creation_rate_threshold },
        run: |probe, snapshot| {
            let rate = snapshot.connections_created.rate;
            let status = if rate >= probe.threshold {
                ProbeResultStatus::Warning
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &snapshot.cluster_name,
                &snapshot.cluster_name,
                ComponentType::Connection,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("connections_created.rate", rate)
            .with_data("threshold", probe.threshold)
        }
    }
}

crate::define_probe! {
    HighConnectionClosureRateProbe {
        id: "high-connection-closure-rate",
        name: "High Connection Closure Rate Probe",
        component: ComponentType::Connection,
        category: ProbeCategory::Connectivity,
        description: "Warns when connections close fast enough to suggest churn instead of reuse",
        subject: Connectivity,
        thresholds: |config| { threshold: f64 = config.high_connection_closure_rate_threshold },
        run: |probe, snapshot| {
            let rate = snapshot.connections_closed.rate;
            let status = if rate >= probe.threshold {
                ProbeResultStatus::Warning
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &snapshot.cluster_name,
                &snapshot.cluster_name,
                ComponentType::Connection,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("connections_closed.rate", rate)
            .with_data("threshold", probe.threshold)
        }
    }
}

crate::define_probe! {
    BlockedConnectionProbe {
        id: "blocked-connection",
        name: "Blocked Connection Probe",
        component: ComponentType::Connection,
        category: ProbeCategory::Throughput,
        description: "Flags connections the broker has blocked from publishing, usually under a resource alarm",
        subject: Connection,
        run: |probe, connection| {
            let status = if connection.state == ConnectionState::Blocked {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &connection.node,
                &connection.identifier,
                ComponentType::Connection,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("connection.state", format!("{:?}", connection.state))
        }
    }
}

crate::define_probe! {
    ChannelLimitReachedProbe {
        id: "channel-limit-reached",
        name: "Channel Limit Reached Probe",
        component: ComponentType::Connection,
        category: ProbeCategory::Throughput,
        description: "Flags connections that have exhausted their negotiated channel limit",
        subject: Connection,
        run: |probe, connection| {
            // A zero limit means the client negotiated no channel cap; there
            // is nothing to measure against.
            let status = if connection.open_channels_limit == 0 {
                ProbeResultStatus::Inconclusive
            } else if connection.open_channels >= connection.open_channels_limit {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &connection.node,
                &connection.identifier,
                ComponentType::Connection,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("connection.open_channels", connection.open_channels)
            .with_data("connection.open_channels_limit", connection.open_channels_limit)
        }
    }
}
