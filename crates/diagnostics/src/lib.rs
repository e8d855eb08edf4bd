//! Broker Diagnostics - Snapshot Scanning and Analysis Engine
//!
//! This crate evaluates the runtime health of a message-broker cluster by
//! running a registry of typed diagnostic probes against a previously
//! captured state snapshot, then aggregating the outcomes into grouped
//! health statistics, annotated with remediation guidance from a knowledge
//! base.
//!
//! The pipeline is: snapshot tree (captured externally) -> `Scanner::scan`
//! -> ordered `ScanResult` -> `ScannerResultAnalyzer::analyze` -> grouped
//! `AnalyzerSummary` list for dashboards and reports. Scanning is a
//! synchronous, pure computation; the core performs no I/O beyond the
//! one-time knowledge-base load.

pub mod analyzer;
pub mod config;
pub mod core;
pub mod factory;
pub mod knowledge;
pub mod probes;
pub mod scanners;
pub mod snapshot;

pub use analyzer::{AnalyzedBucket, AnalyzerSummary, ScannerResultAnalyzer};
pub use config::{DiagnosticsConfig, ProbesConfig};
pub use core::{
    ComponentType, Probe, ProbeCategory, ProbeData, ProbeExecutionContext, ProbeNotifier,
    ProbeObserver, ProbeResult, ProbeResultStatus, ProbeSubject, ScanResult,
};
pub use factory::{default_probes, DiagnosticScanner, ScannerFactory};
pub use knowledge::{KnowledgeBase, KnowledgeBaseArticle, KnowledgeBaseError};
pub use scanners::{
    BrokerConnectivityScanner, BrokerQueuesScanner, ClusterScanner, NoOpScanner, Scanner,
};
pub use snapshot::{Snapshot, SnapshotKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn factory_registers_one_scanner_per_shape() {
        let factory = ScannerFactory::new(
            &DiagnosticsConfig::default(),
            Arc::new(KnowledgeBase::with_defaults()),
        );
        for kind in [
            SnapshotKind::Queues,
            SnapshotKind::Connectivity,
            SnapshotKind::Cluster,
        ] {
            assert_eq!(factory.get(kind).kind(), kind);
        }
    }
}
