//! Exchange-targeted probes, executed once per scan against the queues-view
//! root since exchange churn is only reported cluster-wide.

use crate::core::{ComponentType, ProbeCategory, ProbeResult, ProbeResultStatus};

crate::define_probe! {
    UnroutableMessageProbe {
        id: "unroutable-message",
        name: "Unroutable Message Probe",
        component: ComponentType::Exchange,
        category: ProbeCategory::Efficiency,
        description: "Flags messages published to an exchange that matched no binding and were dropped or returned",
        subject: Exchange,
        run: |probe, snapshot| {
            let not_routed = snapshot.churn.not_routed.total;
            let status = if not_routed > 0 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            ProbeResult::new(
                &snapshot.cluster_name,
                &snapshot.cluster_name,
                ComponentType::Exchange,
                Self::ID,
                Self::NAME,
                status,
            )
            .with_article(probe.knowledge_base.try_get(Self::ID, status))
            .with_data("churn.not_routed.total", not_routed)
        }
    }
}
