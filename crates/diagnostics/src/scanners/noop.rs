use crate::core::ScanResult;
use crate::scanners::Scanner;
use crate::snapshot::{Snapshot, SnapshotKind};

/// Fallback returned by the factory for an unregistered snapshot shape.
/// Always yields an empty result so callers never handle a missing scanner.
pub struct NoOpScanner {
    kind: SnapshotKind,
}

impl NoOpScanner {
    pub const IDENTITY: &'static str = "no-op-scanner";

    pub fn new(kind: SnapshotKind) -> Self {
        Self { kind }
    }
}

impl Scanner for NoOpScanner {
    fn identity(&self) -> &'static str {
        Self::IDENTITY
    }

    fn kind(&self) -> SnapshotKind {
        self.kind
    }

    fn scan(&self, _snapshot: &Snapshot) -> ScanResult {
        ScanResult::empty(Self::IDENTITY)
    }
}
