//! Concrete diagnostic probes
//!
//! Each probe is a stateless check bound to one snapshot node shape, grouped
//! here by the broker area it inspects. Thresholds come from `ProbesConfig`
//! at construction; remediation text comes from the shared knowledge base.

pub mod channel;
pub mod connection;
pub mod exchange;
pub mod node;
pub mod queue;

pub use channel::{ChannelThrottlingProbe, UnlimitedPrefetchCountProbe};
pub use connection::{
    BlockedConnectionProbe, ChannelLimitReachedProbe, HighConnectionClosureRateProbe,
    HighConnectionCreationRateProbe,
};
pub use exchange::UnroutableMessageProbe;
pub use node::{
    AvailableCpuCoresProbe, DiskAlarmProbe, FileDescriptorThrottlingProbe, MemoryAlarmProbe,
    NetworkPartitionProbe, RuntimeProcessLimitProbe, SocketDescriptorThrottlingProbe,
};
pub use queue::{
    ConsumerUtilizationProbe, MessagePagingProbe, QueueGrowthProbe, QueueHighFlowProbe,
    QueueLowFlowProbe, QueueNoFlowProbe, RedeliveredMessagesProbe,
};
