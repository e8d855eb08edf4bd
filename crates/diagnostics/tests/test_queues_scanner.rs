mod common;

use amqpscan_diagnostics::{
    DiagnosticScanner, DiagnosticsConfig, KnowledgeBase, ProbeResultStatus, Snapshot,
    SnapshotKind,
};
use std::sync::Arc;

fn scanner() -> DiagnosticScanner {
    DiagnosticScanner::new(
        &DiagnosticsConfig::default(),
        Arc::new(KnowledgeBase::with_defaults()),
    )
}

#[test]
fn golden_snapshot_produces_full_result_batch() {
    let snapshot = common::golden_queues_snapshot();
    let result = scanner().scan(Some(&snapshot));

    // 1 exchange probe against the root, then 7 queue probes per queue.
    assert_eq!(result.len(), 1 + 8 * 7);

    let healthy = result
        .results
        .iter()
        .filter(|r| r.status == ProbeResultStatus::Healthy)
        .count();
    let unhealthy = result
        .results
        .iter()
        .filter(|r| r.status == ProbeResultStatus::Unhealthy)
        .count();
    let warnings = result
        .results
        .iter()
        .filter(|r| r.status == ProbeResultStatus::Warning)
        .count();

    assert_eq!(healthy, 24);
    assert_eq!(unhealthy, 33); // 32 queue outcomes + 1 exchange outcome
    assert_eq!(warnings, 0);
}

#[test]
fn results_follow_traversal_order() {
    let snapshot = common::golden_queues_snapshot();
    let result = scanner().scan(Some(&snapshot));

    // Root-scope exchange probe first, then queues in snapshot order.
    assert_eq!(result.results[0].probe_id, "unroutable-message");
    assert_eq!(result.results[1].component, "Queue 0");
    assert_eq!(result.results[8].component, "Queue 1");
}

#[test]
fn probe_identities_are_stable_across_scans() {
    let snapshot = common::golden_queues_snapshot();
    let engine = scanner();

    let first: Vec<String> = engine
        .scan(Some(&snapshot))
        .results
        .into_iter()
        .map(|r| r.probe_id)
        .collect();
    let second: Vec<String> = engine
        .scan(Some(&snapshot))
        .results
        .into_iter()
        .map(|r| r.probe_id)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn unhealthy_results_carry_knowledge_base_articles() {
    let snapshot = common::golden_queues_snapshot();
    let result = scanner().scan(Some(&snapshot));

    for probe_result in result
        .results
        .iter()
        .filter(|r| r.status == ProbeResultStatus::Unhealthy)
    {
        let article = probe_result
            .article
            .as_ref()
            .unwrap_or_else(|| panic!("missing article for {}", probe_result.probe_id));
        assert_eq!(article.id, probe_result.probe_id);
        assert_eq!(article.status, ProbeResultStatus::Unhealthy);
    }
}

#[test]
fn missing_snapshot_yields_empty_result() {
    let result = scanner().scan(None);
    assert!(result.is_empty());
}

#[test]
fn empty_queue_list_still_runs_root_probes() {
    let Snapshot::Queues(mut queues_view) = common::golden_queues_snapshot() else {
        unreachable!()
    };
    queues_view.queues.clear();

    let result = scanner().scan(Some(&Snapshot::Queues(queues_view)));
    assert_eq!(result.len(), 1);
    assert_eq!(result.results[0].probe_id, "unroutable-message");
}

#[test]
fn wrong_snapshot_shape_yields_empty_result() {
    use amqpscan_diagnostics::Scanner;

    let engine = scanner();
    let queues_scanner = engine.factory().get(SnapshotKind::Queues);
    let result = queues_scanner.scan(&common::cluster_snapshot());
    assert!(result.is_empty());
}
