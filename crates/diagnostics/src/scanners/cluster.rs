use crate::core::{ComponentType, Probe, ProbeSubject, ScanResult};
use crate::scanners::Scanner;
use crate::snapshot::{Snapshot, SnapshotKind};
use std::sync::Arc;
use tracing::debug;

/// Walks the cluster-view node by node. Disk, memory, runtime, and OS probes
/// only run when the corresponding sub-record is present on the node; absent
/// records are skipped without comment.
pub struct ClusterScanner {
    node_probes: Vec<Arc<dyn Probe>>,
    disk_probes: Vec<Arc<dyn Probe>>,
    memory_probes: Vec<Arc<dyn Probe>>,
    runtime_probes: Vec<Arc<dyn Probe>>,
    os_probes: Vec<Arc<dyn Probe>>,
}

impl ClusterScanner {
    pub const IDENTITY: &'static str = "cluster-scanner";

    pub fn new(probes: &[Arc<dyn Probe>]) -> Self {
        let partition = |component: ComponentType| -> Vec<Arc<dyn Probe>> {
            probes
                .iter()
                .filter(|p| p.component_type() == component)
                .cloned()
                .collect()
        };

        Self {
            node_probes: partition(ComponentType::Node),
            disk_probes: partition(ComponentType::Disk),
            memory_probes: partition(ComponentType::Memory),
            runtime_probes: partition(ComponentType::Runtime),
            os_probes: partition(ComponentType::OperatingSystem),
        }
    }
}

impl Scanner for ClusterScanner {
    fn identity(&self) -> &'static str {
        Self::IDENTITY
    }

    fn kind(&self) -> SnapshotKind {
        SnapshotKind::Cluster
    }

    fn scan(&self, snapshot: &Snapshot) -> ScanResult {
        let Snapshot::Cluster(snapshot) = snapshot else {
            return ScanResult::empty(Self::IDENTITY);
        };

        let mut results = Vec::new();

        for node in &snapshot.nodes {
            for probe in &self.node_probes {
                results.push(probe.execute(ProbeSubject::Node(node)));
            }

            if let Some(disk) = &node.disk {
                for probe in &self.disk_probes {
                    results.push(probe.execute(ProbeSubject::Disk(disk)));
                }
            }

            if let Some(memory) = &node.memory {
                for probe in &self.memory_probes {
                    results.push(probe.execute(ProbeSubject::Memory(memory)));
                }
            }

            if let Some(runtime) = &node.runtime {
                for probe in &self.runtime_probes {
                    results.push(probe.execute(ProbeSubject::Runtime(runtime)));
                }
            }

            if let Some(os) = &node.os {
                for probe in &self.os_probes {
                    results.push(probe.execute(ProbeSubject::OperatingSystem(os)));
                }
            }
        }

        debug!(
            scanner = Self::IDENTITY,
            nodes = snapshot.nodes.len(),
            results = results.len(),
            "scan complete"
        );
        ScanResult::new(Self::IDENTITY, results)
    }
}
