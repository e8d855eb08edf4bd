//! Built-in remediation articles covering every probe shipped with this
//! crate. The embedding application can replace or extend the set by loading
//! a knowledge-base file or calling `KnowledgeBase::add`.

use crate::core::ProbeResultStatus::{self, Healthy, Inconclusive, Unhealthy, Warning};
use crate::knowledge::KnowledgeBaseArticle;
use crate::probes::{
    AvailableCpuCoresProbe, BlockedConnectionProbe, ChannelLimitReachedProbe,
    ChannelThrottlingProbe, ConsumerUtilizationProbe, DiskAlarmProbe,
    FileDescriptorThrottlingProbe, HighConnectionClosureRateProbe,
    HighConnectionCreationRateProbe, MemoryAlarmProbe, MessagePagingProbe, NetworkPartitionProbe,
    QueueGrowthProbe, QueueHighFlowProbe, QueueLowFlowProbe, QueueNoFlowProbe,
    RedeliveredMessagesProbe, RuntimeProcessLimitProbe, SocketDescriptorThrottlingProbe,
    UnlimitedPrefetchCountProbe, UnroutableMessageProbe,
};

// (probe id, status, reason, remediation)
const ARTICLES: &[(&str, ProbeResultStatus, &str, &str)] = &[
    (
        QueueHighFlowProbe::ID,
        Unhealthy,
        "Incoming message volume on the queue reached the high-flow threshold.",
        "Spread load across additional queues or raise the threshold if this volume is expected.",
    ),
    (
        QueueHighFlowProbe::ID,
        Healthy,
        "Incoming message volume is below the high-flow threshold.",
        "None.",
    ),
    (
        QueueLowFlowProbe::ID,
        Unhealthy,
        "Incoming message volume on the queue is at or below the low-flow threshold.",
        "Verify publishers are running and bindings route messages to this queue.",
    ),
    (
        QueueNoFlowProbe::ID,
        Unhealthy,
        "The queue has received no messages.",
        "Confirm the queue is still in use; delete idle queues to reclaim broker resources.",
    ),
    (
        QueueGrowthProbe::ID,
        Warning,
        "Messages are arriving faster than consumers acknowledge them, so the queue is growing.",
        "Add consumers or increase consumer throughput before the backlog pages to disk.",
    ),
    (
        MessagePagingProbe::ID,
        Unhealthy,
        "The queue is paging messages out of resident memory to disk.",
        "Increase node memory or drain the queue; paged queues deliver at disk speed.",
    ),
    (
        RedeliveredMessagesProbe::ID,
        Unhealthy,
        "A large share of incoming messages is being redelivered.",
        "Look for consumers that reject or time out deliveries instead of acknowledging them.",
    ),
    (
        ConsumerUtilizationProbe::ID,
        Unhealthy,
        "Consumer utilization is below the configured threshold.",
        "Raise the prefetch count or reduce network round-trip time so consumers stay saturated.",
    ),
    (
        UnroutableMessageProbe::ID,
        Unhealthy,
        "Messages published to an exchange matched no binding and were dropped or returned.",
        "Audit exchange bindings; publish with the mandatory flag to surface unroutable messages.",
    ),
    (
        HighConnectionCreationRateProbe::ID,
        Warning,
        "Connections are being opened at a rate that suggests churn rather than reuse.",
        "Use long-lived connections; open channels per workload instead of new connections.",
    ),
    (
        HighConnectionClosureRateProbe::ID,
        Warning,
        "Connections are being closed at a rate that suggests churn rather than reuse.",
        "Use long-lived connections; investigate clients reconnecting in a tight loop.",
    ),
    (
        BlockedConnectionProbe::ID,
        Unhealthy,
        "The broker blocked the connection from publishing, typically under a resource alarm.",
        "Clear the underlying memory or disk alarm; throttle publishers if alarms recur.",
    ),
    (
        ChannelLimitReachedProbe::ID,
        Unhealthy,
        "The connection has opened as many channels as its negotiated limit allows.",
        "Close unused channels or raise the channel limit in the client configuration.",
    ),
    (
        ChannelLimitReachedProbe::ID,
        Inconclusive,
        "The connection negotiated no channel limit, so usage cannot be measured against one.",
        "Configure an explicit channel limit to make this check meaningful.",
    ),
    (
        ChannelThrottlingProbe::ID,
        Unhealthy,
        "The channel holds more unacknowledged deliveries than its prefetch window.",
        "Acknowledge deliveries promptly or lower the prefetch count to match consumer speed.",
    ),
    (
        UnlimitedPrefetchCountProbe::ID,
        Warning,
        "The channel consumes with no prefetch cap, so the broker can overwhelm the consumer.",
        "Set a bounded prefetch count sized to the consumer's processing rate.",
    ),
    (
        NetworkPartitionProbe::ID,
        Unhealthy,
        "The node considers one or more cluster peers partitioned away.",
        "Heal the partition and review the cluster's partition-handling strategy.",
    ),
    (
        AvailableCpuCoresProbe::ID,
        Unhealthy,
        "The node reports no schedulable CPU cores.",
        "Check CPU pinning and container limits; the runtime needs at least one core.",
    ),
    (
        DiskAlarmProbe::ID,
        Unhealthy,
        "Free disk space on the node fell under the broker's alarm limit; publishers are blocked.",
        "Free disk space or raise capacity; the alarm clears once usage drops below the limit.",
    ),
    (
        MemoryAlarmProbe::ID,
        Unhealthy,
        "Memory usage on the node tripped the high-watermark alarm; publishers are blocked.",
        "Drain large queues or add memory; consider lowering per-queue memory footprints.",
    ),
    (
        RuntimeProcessLimitProbe::ID,
        Unhealthy,
        "Runtime process usage on the node is approaching the scheduler's limit.",
        "Raise the runtime process limit or reduce the number of queues and connections.",
    ),
    (
        FileDescriptorThrottlingProbe::ID,
        Unhealthy,
        "The node is consuming most of its available file descriptors.",
        "Raise the OS file descriptor limit for the broker process.",
    ),
    (
        SocketDescriptorThrottlingProbe::ID,
        Unhealthy,
        "The node is consuming most of its available socket descriptors.",
        "Raise the socket descriptor allowance or reduce the connection count.",
    ),
];

pub(crate) fn articles() -> Vec<KnowledgeBaseArticle> {
    ARTICLES
        .iter()
        .map(|&(id, status, reason, remediation)| {
            KnowledgeBaseArticle::new(id, status, reason, remediation)
        })
        .collect()
}
