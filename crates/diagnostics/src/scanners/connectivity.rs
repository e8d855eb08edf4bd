use crate::core::{ComponentType, Probe, ProbeCategory, ProbeSubject, ScanResult};
use crate::scanners::Scanner;
use crate::snapshot::{Snapshot, SnapshotKind};
use std::sync::Arc;
use tracing::debug;

/// Walks the connectivity-view: connectivity-category probes once against the
/// root, then per-connection and per-channel probes depth-first.
/// Connectivity-category probes are excluded from the instance partitions so
/// cluster-wide counters are only evaluated once per scan.
pub struct BrokerConnectivityScanner {
    connectivity_probes: Vec<Arc<dyn Probe>>,
    connection_probes: Vec<Arc<dyn Probe>>,
    channel_probes: Vec<Arc<dyn Probe>>,
}

impl BrokerConnectivityScanner {
    pub const IDENTITY: &'static str = "broker-connectivity-scanner";

    pub fn new(probes: &[Arc<dyn Probe>]) -> Self {
        Self {
            connectivity_probes: probes
                .iter()
                .filter(|p| p.category() == ProbeCategory::Connectivity)
                .cloned()
                .collect(),
            connection_probes: probes
                .iter()
                .filter(|p| {
                    p.component_type() == ComponentType::Connection
                        && p.category() != ProbeCategory::Connectivity
                })
                .cloned()
                .collect(),
            channel_probes: probes
                .iter()
                .filter(|p| {
                    p.component_type() == ComponentType::Channel
                        && p.category() != ProbeCategory::Connectivity
                })
                .cloned()
                .collect(),
        }
    }
}

impl Scanner for BrokerConnectivityScanner {
    fn identity(&self) -> &'static str {
        Self::IDENTITY
    }

    fn kind(&self) -> SnapshotKind {
        SnapshotKind::Connectivity
    }

    fn scan(&self, snapshot: &Snapshot) -> ScanResult {
        let Snapshot::Connectivity(snapshot) = snapshot else {
            return ScanResult::empty(Self::IDENTITY);
        };

        let mut results = Vec::new();

        for probe in &self.connectivity_probes {
            results.push(probe.execute(ProbeSubject::Connectivity(snapshot)));
        }

        for connection in &snapshot.connections {
            for probe in &self.connection_probes {
                results.push(probe.execute(ProbeSubject::Connection(connection)));
            }

            for channel in &connection.channels {
                for probe in &self.channel_probes {
                    results.push(probe.execute(ProbeSubject::Channel(channel)));
                }
            }
        }

        debug!(
            scanner = Self::IDENTITY,
            connections = snapshot.connections.len(),
            results = results.len(),
            "scan complete"
        );
        ScanResult::new(Self::IDENTITY, results)
    }
}
