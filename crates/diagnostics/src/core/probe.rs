//! Probe trait and dispatch model.
//!
//! A probe is a stateless health check bound to exactly one snapshot node
//! shape. Scanners partition probes by component type at construction and
//! dispatch each one only against matching nodes, so the subject match inside
//! a probe is a guard, not a routing mechanism. Probes never fail: an outcome
//! that cannot be classified is reported as Inconclusive.

use crate::core::{ComponentType, ProbeCategory, ProbeObserver, ProbeResult};
use crate::snapshot::{
    ChannelSnapshot, ConnectionSnapshot, ConnectivitySnapshot, DiskSnapshot, MemorySnapshot,
    NodeSnapshot, OperatingSystemSnapshot, QueueSnapshot, QueuesSnapshot, RuntimeSnapshot,
};
use std::sync::Arc;

/// Borrowed reference to the single snapshot node a probe execution targets.
///
/// Root-scope probes (exchange churn, connection churn) receive the snapshot
/// root itself rather than a per-instance node.
#[derive(Debug, Clone, Copy)]
pub enum ProbeSubject<'a> {
    Queue(&'a QueueSnapshot),
    Exchange(&'a QueuesSnapshot),
    Connectivity(&'a ConnectivitySnapshot),
    Connection(&'a ConnectionSnapshot),
    Channel(&'a ChannelSnapshot),
    Node(&'a NodeSnapshot),
    Disk(&'a DiskSnapshot),
    Memory(&'a MemorySnapshot),
    Runtime(&'a RuntimeSnapshot),
    OperatingSystem(&'a OperatingSystemSnapshot),
}

pub trait Probe: Send + Sync {
    /// Stable identity: the same implementation yields the same id across
    /// runs and processes. Keys knowledge-base lookups and analyzer grouping.
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    fn component_type(&self) -> ComponentType;

    fn category(&self) -> ProbeCategory;

    /// Classifies one node and notifies registered observers synchronously
    /// before returning. Never fails and never mutates the subject.
    fn execute(&self, subject: ProbeSubject<'_>) -> ProbeResult;

    fn subscribe(&self, observer: Arc<dyn ProbeObserver>);
}

/// Generates a complete probe: the struct (knowledge base, observer
/// notifier, and any threshold fields pulled from `ProbesConfig`), its
/// constructor, the subject-shape guard, and the `Probe` impl. Only the
/// classification body in `run` is probe-specific; it receives the probe
/// instance and the matched snapshot node under the names given in the
/// closure-style header.
#[macro_export]
macro_rules! define_probe {
    (
        $probe:ident {
            id: $id:expr,
            name: $name:expr,
            component: $component:expr,
            category: $category:expr,
            description: $description:expr,
            subject: $variant:ident,
            $(thresholds: |$cfg:ident| { $($field:ident: $field_ty:ty = $source:expr),+ $(,)? },)?
            run: |$this:ident, $node:ident| $body:expr $(,)?
        }
    ) => {
        pub struct $probe {
            $($($field: $field_ty,)+)?
            knowledge_base: std::sync::Arc<$crate::knowledge::KnowledgeBase>,
            notifier: $crate::core::ProbeNotifier,
        }

        impl $probe {
            pub const ID: &'static str = $id;
            pub const NAME: &'static str = $name;

            pub fn new(
                $($cfg: &$crate::config::ProbesConfig,)?
                knowledge_base: std::sync::Arc<$crate::knowledge::KnowledgeBase>,
            ) -> Self {
                Self {
                    $($($field: $source,)+)?
                    knowledge_base,
                    notifier: $crate::core::ProbeNotifier::new(),
                }
            }

            fn execute_impl(
                &self,
                subject: $crate::core::ProbeSubject<'_>,
            ) -> $crate::core::ProbeResult {
                let $crate::core::ProbeSubject::$variant($node) = subject else {
                    return $crate::core::ProbeResult::not_applicable(
                        $component,
                        Self::ID,
                        Self::NAME,
                    );
                };
                let $this = self;
                $body
            }
        }

        impl $crate::core::Probe for $probe {
            fn id(&self) -> &'static str {
                Self::ID
            }

            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn description(&self) -> &'static str {
                $description
            }

            fn component_type(&self) -> $crate::core::ComponentType {
                $component
            }

            fn category(&self) -> $crate::core::ProbeCategory {
                $category
            }

            fn execute(
                &self,
                subject: $crate::core::ProbeSubject<'_>,
            ) -> $crate::core::ProbeResult {
                let result = self.execute_impl(subject);
                self.notifier.notify(&result);
                result
            }

            fn subscribe(&self, observer: std::sync::Arc<dyn $crate::core::ProbeObserver>) {
                self.notifier.subscribe(observer);
            }
        }
    };
}
