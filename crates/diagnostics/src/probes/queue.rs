//! Queue-targeted probes
//!
//! Executed once per queue in a queues-view snapshot. Each probe reads the
//! queue's churn or memory detail, classifies it against a configured
//! threshold, and attaches the matching knowledge-base article.

use crate::core::{ComponentType, ProbeCategory, ProbeResult, ProbeResultStatus};
use crate::knowledge::KnowledgeBase;
use crate::snapshot::QueueSnapshot;

crate::define_probe! {
    QueueHighFlowProbe {
        id: "queue-high-flow",
        name: "Queue High Flow Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::Throughput,
        description: "Flags queues whose incoming message volume reaches the high-flow threshold",
        subject: Queue,
        thresholds: |config| { threshold: u64 = config.high_flow_threshold },
        run: |probe, queue| {
            let incoming = queue.messages.incoming.total;
            let status = if incoming >= probe.threshold {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.messages.incoming.total", incoming)
                .with_data("threshold", probe.threshold)
        }
    }
}

crate::define_probe! {
    QueueLowFlowProbe {
        id: "queue-low-flow",
        name: "Queue Low Flow Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::Throughput,
        description: "Flags queues whose incoming message volume sits at or below the low-flow threshold",
        subject: Queue,
        thresholds: |config| { threshold: u64 = config.low_flow_threshold },
        run: |probe, queue| {
            let incoming = queue.messages.incoming.total;
            let status = if incoming <= probe.threshold {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.messages.incoming.total", incoming)
                .with_data("threshold", probe.threshold)
        }
    }
}

crate::define_probe! {
    QueueNoFlowProbe {
        id: "queue-no-flow",
        name: "Queue No Flow Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::Throughput,
        description: "Flags queues that have received no messages at all",
        subject: Queue,
        run: |probe, queue| {
            let incoming = queue.messages.incoming.total;
            let status = if incoming == 0 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.messages.incoming.total", incoming)
        }
    }
}

crate::define_probe! {
    QueueGrowthProbe {
        id: "queue-growth",
        name: "Queue Growth Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::Throughput,
        description: "Warns when messages arrive faster than consumers acknowledge them",
        subject: Queue,
        run: |probe, queue| {
            let incoming = queue.messages.incoming.total;
            let acknowledged = queue.messages.acknowledged.total;
            let status = if incoming > acknowledged {
                ProbeResultStatus::Warning
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.messages.incoming.total", incoming)
                .with_data("queue.messages.acknowledged.total", acknowledged)
        }
    }
}

crate::define_probe! {
    MessagePagingProbe {
        id: "message-paging",
        name: "Message Paging Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::Memory,
        description: "Flags queues that are paging messages out of resident memory to disk",
        subject: Queue,
        run: |probe, queue| {
            let paged_out = queue.memory.paged_out.total;
            let status = if paged_out > 0 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.memory.paged_out.total", paged_out)
        }
    }
}

crate::define_probe! {
    RedeliveredMessagesProbe {
        id: "redelivered-messages",
        name: "Redelivered Messages Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::FaultTolerance,
        description: "Flags queues redelivering a large share of their incoming messages",
        subject: Queue,
        thresholds: |config| { coefficient: f64 = config.message_redelivery_coefficient },
        run: |probe, queue| {
            let incoming = queue.messages.incoming.total;
            let redelivered = queue.messages.redelivered.total;
            let status = if redelivered as f64 >= probe.coefficient * incoming as f64 {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.messages.incoming.total", incoming)
                .with_data("queue.messages.redelivered.total", redelivered)
                .with_data("coefficient", probe.coefficient)
        }
    }
}

crate::define_probe! {
    ConsumerUtilizationProbe {
        id: "consumer-utilization",
        name: "Consumer Utilization Probe",
        component: ComponentType::Queue,
        category: ProbeCategory::Efficiency,
        description: "Flags queues whose consumers are too slow or too few to keep delivery saturated",
        subject: Queue,
        thresholds: |config| { threshold: f64 = config.consumer_utilization_threshold },
        run: |probe, queue| {
            let status = if queue.consumer_utilization < probe.threshold {
                ProbeResultStatus::Unhealthy
            } else {
                ProbeResultStatus::Healthy
            };

            queue_result(queue, Self::ID, Self::NAME, status, &probe.knowledge_base)
                .with_data("queue.consumer_utilization", queue.consumer_utilization)
                .with_data("threshold", probe.threshold)
        }
    }
}

fn queue_result(
    queue: &QueueSnapshot,
    probe_id: &'static str,
    probe_name: &'static str,
    status: ProbeResultStatus,
    knowledge_base: &KnowledgeBase,
) -> ProbeResult {
    ProbeResult::new(
        &queue.node,
        &queue.identifier,
        ComponentType::Queue,
        probe_id,
        probe_name,
        status,
    )
    .with_article(knowledge_base.try_get(probe_id, status))
}
