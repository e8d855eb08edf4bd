//! Typed scanners, one per snapshot shape
//!
//! A scanner owns the partition of the probe set it will invoke at each tree
//! level. Partitioning happens once at construction; a scan is then a fixed,
//! synchronous walk of the snapshot tree with results appended in traversal
//! order. Missing branches are skipped silently and never abort the walk.

pub mod cluster;
pub mod connectivity;
pub mod noop;
pub mod queues;

pub use cluster::ClusterScanner;
pub use connectivity::BrokerConnectivityScanner;
pub use noop::NoOpScanner;
pub use queues::BrokerQueuesScanner;

use crate::core::ScanResult;
use crate::snapshot::{Snapshot, SnapshotKind};

pub trait Scanner: Send + Sync {
    fn identity(&self) -> &'static str;

    /// The snapshot shape this scanner walks; the key it registers under.
    fn kind(&self) -> SnapshotKind;

    /// Walks the snapshot and returns the ordered outcome batch. A snapshot
    /// variant other than `kind()` yields an empty result, never an error.
    fn scan(&self, snapshot: &Snapshot) -> ScanResult;
}
