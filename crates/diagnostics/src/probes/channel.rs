//! Channel-targeted probes, executed once per channel under each connection
//! in a connectivity-view snapshot.

use crate::core::{ComponentType, ProbeCategory, ProbeResult, ProbeResultStatus};

crate::define_probe! {
    ChannelThrottlingProbe {
        id: "channel-throttling",
        name: "Channel Throttling Probe",
        component: ComponentType::Channel,
        category: ProbeCategory::Throughput,
        description: "Flags channels holding more unacknowledged deliveries than their prefetch window",
        subject: Channel,
        run: |probe, channel| {
            let status = if channel.prefetch_count > 0
                && channel.unacknowledged > u64::from(channel.prefetch_count)
            {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &channel.connection_identifier,
                &channel.identifier,
                ComponentType::Channel,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("channel.unacknowledged", channel.unacknowledged)
            .with_data("channel.prefetch_count", channel.prefetch_count)
        }
    }
}

crate::define_probe! {
    UnlimitedPrefetchCountProbe {
        id: "unlimited-prefetch-count",
        name: "Unlimited Prefetch Count Probe",
        component: ComponentType::Channel,
        category: ProbeCategory::Throughput,
        description: "Warns about channels consuming with no prefetch cap",
        subject: Channel,
        run: |probe, channel| {
            // An unbounded prefetch is risky but not necessarily wrong for
            // this workload, so the outcome is a warning rather than
            // unhealthy.
            let status = if channel.prefetch_count == 0 {
                ProbeResultStatus::Warning
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &channel.connection_identifier,
                &channel.identifier,
                ComponentType::Channel,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("channel.prefetch_count", channel.prefetch_count)
        }
    }
}
