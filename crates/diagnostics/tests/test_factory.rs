mod common;

use amqpscan_diagnostics::{
    BrokerQueuesScanner, DiagnosticScanner, DiagnosticsConfig, KnowledgeBase, NoOpScanner,
    Probe, ProbeExecutionContext, ProbeObserver, Scanner, ScannerFactory, SnapshotKind,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn factory() -> ScannerFactory {
    ScannerFactory::new(
        &DiagnosticsConfig::default(),
        Arc::new(KnowledgeBase::with_defaults()),
    )
}

#[test]
fn registering_an_already_registered_shape_is_a_no_op() {
    let factory = factory();

    let registered = factory.try_register(Arc::new(NoOpScanner::new(SnapshotKind::Queues)));
    assert!(!registered);

    // The cache is unchanged: the original scanner still answers.
    assert_eq!(
        factory.get(SnapshotKind::Queues).identity(),
        BrokerQueuesScanner::IDENTITY
    );
}

#[test]
fn unregistered_shape_falls_back_to_no_op_scanner() {
    let factory = ScannerFactory::empty();

    let scanner = factory.get(SnapshotKind::Cluster);
    assert_eq!(scanner.identity(), NoOpScanner::IDENTITY);

    let result = scanner.scan(&common::cluster_snapshot());
    assert!(result.is_empty());
}

#[test]
fn empty_factory_accepts_first_registration() {
    let factory = ScannerFactory::empty();
    assert!(factory.try_register(Arc::new(NoOpScanner::new(SnapshotKind::Queues))));
    assert!(!factory.try_register(Arc::new(NoOpScanner::new(SnapshotKind::Queues))));
}

struct CountingObserver {
    executions: AtomicUsize,
}

impl ProbeObserver for CountingObserver {
    fn on_executed(&self, context: &ProbeExecutionContext) {
        assert!(!context.result.probe_id.is_empty());
        self.executions.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn observers_are_fanned_out_to_every_probe() {
    let factory = factory();
    let observer = Arc::new(CountingObserver {
        executions: AtomicUsize::new(0),
    });
    factory.register_observer(observer.clone());

    let engine = DiagnosticScanner::with_factory(factory);
    let snapshot = common::golden_queues_snapshot();
    let result = engine.scan(Some(&snapshot));

    // One notification per probe execution, delivered synchronously.
    assert_eq!(observer.executions.load(Ordering::SeqCst), result.len());
}

#[test]
fn default_probe_set_has_unique_identities() {
    let factory = factory();
    let mut ids: Vec<&str> = factory.probes().iter().map(|p| p.id()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn every_probe_carries_complete_metadata() {
    use amqpscan_diagnostics::ComponentType;

    let factory = factory();
    for probe in factory.probes() {
        assert!(!probe.id().is_empty());
        assert!(!probe.name().is_empty());
        assert_ne!(probe.description(), "No description provided", "{}", probe.id());
        assert_ne!(probe.component_type(), ComponentType::NotSpecified, "{}", probe.id());
    }

    let component_of = |id: &str| {
        factory
            .probes()
            .iter()
            .find(|p| p.id() == id)
            .unwrap_or_else(|| panic!("no probe {id}"))
            .component_type()
    };
    assert_eq!(component_of("queue-high-flow"), ComponentType::Queue);
    assert_eq!(component_of("unroutable-message"), ComponentType::Exchange);
    assert_eq!(component_of("blocked-connection"), ComponentType::Connection);
    assert_eq!(component_of("channel-throttling"), ComponentType::Channel);
    assert_eq!(component_of("disk-alarm"), ComponentType::Disk);
}
