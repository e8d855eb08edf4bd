use crate::core::{ComponentType, Probe, ProbeSubject, ScanResult};
use crate::scanners::Scanner;
use crate::snapshot::{Snapshot, SnapshotKind};
use std::sync::Arc;
use tracing::debug;

/// Walks the queues-view: exchange probes once against the snapshot root,
/// then every queue probe against every queue.
pub struct BrokerQueuesScanner {
    exchange_probes: Vec<Arc<dyn Probe>>,
    queue_probes: Vec<Arc<dyn Probe>>,
}

impl BrokerQueuesScanner {
    pub const IDENTITY: &'static str = "broker-queues-scanner";

    pub fn new(probes: &[Arc<dyn Probe>]) -> Self {
        Self {
            exchange_probes: probes
                .iter()
                .filter(|p| p.component_type() == ComponentType::Exchange)
                .cloned()
                .collect(),
            queue_probes: probes
                .iter()
                .filter(|p| p.component_type() == ComponentType::Queue)
                .cloned()
                .collect(),
        }
    }
}

impl Scanner for BrokerQueuesScanner {
    fn identity(&self) -> &'static str {
        Self::IDENTITY
    }

    fn kind(&self) -> SnapshotKind {
        SnapshotKind::Queues
    }

    fn scan(&self, snapshot: &Snapshot) -> ScanResult {
        let Snapshot::Queues(snapshot) = snapshot else {
            return ScanResult::empty(Self::IDENTITY);
        };

        let mut results = Vec::new();

        for probe in &self.exchange_probes {
            results.push(probe.execute(ProbeSubject::Exchange(snapshot)));
        }

        for queue in &snapshot.queues {
            for probe in &self.queue_probes {
                results.push(probe.execute(ProbeSubject::Queue(queue)));
            }
        }

        debug!(
            scanner = Self::IDENTITY,
            queues = snapshot.queues.len(),
            results = results.len(),
            "scan complete"
        );
        ScanResult::new(Self::IDENTITY, results)
    }
}
