use crate::core::ProbeResult;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Notification payload pushed to observers after each probe execution.
#[derive(Debug, Clone)]
pub struct ProbeExecutionContext {
    pub result: ProbeResult,
    pub timestamp: DateTime<Utc>,
}

/// Cross-cutting hook invoked synchronously, inline with `Probe::execute`,
/// after a result has been produced and before control returns to the
/// scanner. Implementations must not block.
pub trait ProbeObserver: Send + Sync {
    fn on_executed(&self, context: &ProbeExecutionContext);
}

/// Observer list embedded in every probe. Registration happens through the
/// factory at startup; notification is a read-side operation thereafter.
#[derive(Default)]
pub struct ProbeNotifier {
    observers: RwLock<Vec<Arc<dyn ProbeObserver>>>,
}

impl ProbeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn ProbeObserver>) {
        self.observers.write().push(observer);
    }

    pub fn notify(&self, result: &ProbeResult) {
        // Snapshot the list so a callback can subscribe re-entrantly without
        // deadlocking on the lock. Observers added during notification see
        // the next execution.
        let observers = self.observers.read().to_vec();
        if observers.is_empty() {
            return;
        }
        let context = ProbeExecutionContext {
            result: result.clone(),
            timestamp: Utc::now(),
        };
        for observer in &observers {
            observer.on_executed(&context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentType, ProbeResultStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn result() -> ProbeResult {
        ProbeResult::new(
            "node0",
            "queue-a",
            ComponentType::Queue,
            "probe-under-test",
            "Probe Under Test",
            ProbeResultStatus::Healthy,
        )
    }

    struct Counting {
        executions: AtomicUsize,
    }

    impl ProbeObserver for Counting {
        fn on_executed(&self, _context: &ProbeExecutionContext) {
            self.executions.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Resubscribing {
        notifier: Arc<ProbeNotifier>,
        added: Arc<Counting>,
    }

    impl ProbeObserver for Resubscribing {
        fn on_executed(&self, _context: &ProbeExecutionContext) {
            self.notifier.subscribe(self.added.clone());
        }
    }

    #[test]
    fn observer_may_subscribe_from_its_own_callback() {
        let notifier = Arc::new(ProbeNotifier::new());
        let added = Arc::new(Counting {
            executions: AtomicUsize::new(0),
        });
        notifier.subscribe(Arc::new(Resubscribing {
            notifier: notifier.clone(),
            added: added.clone(),
        }));

        // Must not deadlock; the observer added mid-notification is only
        // visible from the next execution on.
        notifier.notify(&result());
        assert_eq!(added.executions.load(Ordering::SeqCst), 0);

        notifier.notify(&result());
        assert_eq!(added.executions.load(Ordering::SeqCst), 1);
    }
}
