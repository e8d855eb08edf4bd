//! Core abstractions for the diagnostic engine
//!
//! The Probe trait defines the interface every health check implements, the
//! result types carry classified outcomes through the pipeline, and the
//! observer layer lets cross-cutting consumers watch probe executions without
//! the probes knowing who is listening.

pub mod observer;
pub mod probe;
pub mod result;
pub mod status;

pub use observer::{ProbeExecutionContext, ProbeNotifier, ProbeObserver};
pub use probe::{Probe, ProbeSubject};
pub use result::{ProbeData, ProbeResult, ScanResult};
pub use status::{ComponentType, ProbeCategory, ProbeResultStatus};
