//! Scanner factory and scan facade
//!
//! The factory assembles the full probe set and one scanner per snapshot
//! shape at construction, explicitly and statically; there is no runtime
//! discovery. The scanner cache is populated once and read-mostly afterwards.

use crate::config::{DiagnosticsConfig, ProbesConfig};
use crate::core::{Probe, ProbeObserver, ScanResult};
use crate::knowledge::KnowledgeBase;
use crate::probes::{
    AvailableCpuCoresProbe, BlockedConnectionProbe, ChannelLimitReachedProbe,
    ChannelThrottlingProbe, ConsumerUtilizationProbe, DiskAlarmProbe,
    FileDescriptorThrottlingProbe, HighConnectionClosureRateProbe,
    HighConnectionCreationRateProbe, MemoryAlarmProbe, MessagePagingProbe, NetworkPartitionProbe,
    QueueGrowthProbe, QueueHighFlowProbe, QueueLowFlowProbe, QueueNoFlowProbe,
    RedeliveredMessagesProbe, RuntimeProcessLimitProbe, SocketDescriptorThrottlingProbe,
    UnlimitedPrefetchCountProbe, UnroutableMessageProbe,
};
use crate::scanners::{
    BrokerConnectivityScanner, BrokerQueuesScanner, ClusterScanner, NoOpScanner, Scanner,
};
use crate::snapshot::{Snapshot, SnapshotKind};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// The full default probe set, wired with the given thresholds and knowledge
/// base. Registration is a fixed list: adding a probe means adding it here.
pub fn default_probes(
    config: &ProbesConfig,
    knowledge_base: &Arc<KnowledgeBase>,
) -> Vec<Arc<dyn Probe>> {
    let kb = knowledge_base;
    vec![
        Arc::new(QueueHighFlowProbe::new(config, kb.clone())),
        Arc::new(QueueLowFlowProbe::new(config, kb.clone())),
        Arc::new(QueueNoFlowProbe::new(kb.clone())),
        Arc::new(QueueGrowthProbe::new(kb.clone())),
        Arc::new(MessagePagingProbe::new(kb.clone())),
        Arc::new(RedeliveredMessagesProbe::new(config, kb.clone())),
        Arc::new(ConsumerUtilizationProbe::new(config, kb.clone())),
        Arc::new(UnroutableMessageProbe::new(kb.clone())),
        Arc::new(HighConnectionCreationRateProbe::new(config, kb.clone())),
        Arc::new(HighConnectionClosureRateProbe::new(config, kb.clone())),
        Arc::new(BlockedConnectionProbe::new(kb.clone())),
        Arc::new(ChannelLimitReachedProbe::new(kb.clone())),
        Arc::new(ChannelThrottlingProbe::new(kb.clone())),
        Arc::new(UnlimitedPrefetchCountProbe::new(kb.clone())),
        Arc::new(NetworkPartitionProbe::new(kb.clone())),
        Arc::new(AvailableCpuCoresProbe::new(kb.clone())),
        Arc::new(DiskAlarmProbe::new(kb.clone())),
        Arc::new(MemoryAlarmProbe::new(kb.clone())),
        Arc::new(RuntimeProcessLimitProbe::new(config, kb.clone())),
        Arc::new(FileDescriptorThrottlingProbe::new(config, kb.clone())),
        Arc::new(SocketDescriptorThrottlingProbe::new(config, kb.clone())),
    ]
}

pub struct ScannerFactory {
    probes: Vec<Arc<dyn Probe>>,
    scanners: RwLock<HashMap<SnapshotKind, Arc<dyn Scanner>>>,
}

impl ScannerFactory {
    /// Builds the default probe set and registers one scanner per snapshot
    /// shape.
    pub fn new(config: &DiagnosticsConfig, knowledge_base: Arc<KnowledgeBase>) -> Self {
        let probes = default_probes(&config.probes, &knowledge_base);

        let mut scanners: HashMap<SnapshotKind, Arc<dyn Scanner>> = HashMap::new();
        scanners.insert(
            SnapshotKind::Queues,
            Arc::new(BrokerQueuesScanner::new(&probes)),
        );
        scanners.insert(
            SnapshotKind::Connectivity,
            Arc::new(BrokerConnectivityScanner::new(&probes)),
        );
        scanners.insert(
            SnapshotKind::Cluster,
            Arc::new(ClusterScanner::new(&probes)),
        );

        info!(
            probes = probes.len(),
            scanners = scanners.len(),
            "assembled diagnostic scanner registry"
        );

        Self {
            probes,
            scanners: RwLock::new(scanners),
        }
    }

    /// A factory with no probes and no scanners, for callers composing their
    /// own registry through `try_register`.
    pub fn empty() -> Self {
        Self {
            probes: Vec::new(),
            scanners: RwLock::new(HashMap::new()),
        }
    }

    /// The registered scanner for a shape, or a no-op scanner that returns an
    /// empty result. Never fails.
    pub fn get(&self, kind: SnapshotKind) -> Arc<dyn Scanner> {
        self.scanners
            .read()
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Arc::new(NoOpScanner::new(kind)))
    }

    /// Registers a scanner under its own shape. Idempotent: returns `false`
    /// and leaves the cache unchanged when the shape is already registered.
    pub fn try_register(&self, scanner: Arc<dyn Scanner>) -> bool {
        match self.scanners.write().entry(scanner.kind()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(scanner);
                true
            }
        }
    }

    /// Fans an observer out to every probe instance held by this factory.
    pub fn register_observer(&self, observer: Arc<dyn ProbeObserver>) {
        for probe in &self.probes {
            probe.subscribe(observer.clone());
        }
    }

    pub fn probes(&self) -> &[Arc<dyn Probe>] {
        &self.probes
    }
}

/// Entry point for one-shot scans: routes a snapshot to the scanner cached
/// for its shape. A missing snapshot yields an empty result, never an error.
pub struct DiagnosticScanner {
    factory: ScannerFactory,
}

impl DiagnosticScanner {
    pub fn new(config: &DiagnosticsConfig, knowledge_base: Arc<KnowledgeBase>) -> Self {
        Self {
            factory: ScannerFactory::new(config, knowledge_base),
        }
    }

    pub fn with_factory(factory: ScannerFactory) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &ScannerFactory {
        &self.factory
    }

    pub fn scan(&self, snapshot: Option<&Snapshot>) -> ScanResult {
        match snapshot {
            Some(snapshot) => self.factory.get(snapshot.kind()).scan(snapshot),
            None => ScanResult::empty(NoOpScanner::IDENTITY),
        }
    }
}
