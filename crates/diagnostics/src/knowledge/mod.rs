//! Knowledge base of remediation articles
//!
//! Static operator guidance keyed by (probe identity, outcome status).
//! Articles are loaded once, either from the built-in set or from a JSON
//! file, and are read-only afterwards. A lookup miss is not an error: callers
//! receive a sentinel article with placeholder text.

mod defaults;

use crate::core::ProbeResultStatus;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::info;

pub const MISSING_ARTICLE_REASON: &str = "No KB article Available";
pub const MISSING_ARTICLE_REMEDIATION: &str = "NA";

/// Remediation guidance for one (probe, status) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseArticle {
    /// Probe identity the article applies to.
    pub id: String,
    pub status: ProbeResultStatus,
    pub reason: String,
    pub remediation: String,
}

impl KnowledgeBaseArticle {
    pub fn new(id: &str, status: ProbeResultStatus, reason: &str, remediation: &str) -> Self {
        Self {
            id: id.to_string(),
            status,
            reason: reason.to_string(),
            remediation: remediation.to_string(),
        }
    }

    /// Sentinel returned when no article matches a lookup.
    pub fn missing(id: &str, status: ProbeResultStatus) -> Self {
        Self::new(id, status, MISSING_ARTICLE_REASON, MISSING_ARTICLE_REMEDIATION)
    }
}

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read knowledge base file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Article store. Populated once at startup (file load or built-in set) and
/// read-mostly thereafter; `add` remains available for dynamically composed
/// knowledge bases and tests.
#[derive(Default)]
pub struct KnowledgeBase {
    articles: RwLock<HashMap<String, Vec<KnowledgeBaseArticle>>>,
    loaded: AtomicBool,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// A knowledge base carrying the built-in article set for every probe
    /// shipped with this crate.
    pub fn with_defaults() -> Self {
        let kb = Self::new();
        for article in defaults::articles() {
            kb.add(article);
        }
        kb
    }

    /// Loads articles from `<directory>/<file>`, a JSON array of objects with
    /// `id`, `status`, `reason`, and `remediation` fields. Idempotent: only
    /// the first successful call populates the store, later calls are no-ops.
    /// Concurrent callers serialize on the store, so an `Ok` return always
    /// means the articles are visible. A missing or malformed file is an
    /// error for the caller to treat as fatal at startup; a failed load
    /// leaves the store loadable so a corrected file can be retried.
    pub fn load_from(&self, directory: &Path, file: &str) -> Result<(), KnowledgeBaseError> {
        let mut articles = self.articles.write();
        if self.loaded.load(Ordering::SeqCst) {
            return Ok(());
        }

        let path = directory.join(file);
        let parsed = Self::read_articles(&path)?;
        info!(count = parsed.len(), path = %path.display(), "loaded knowledge base");
        for article in parsed {
            articles.entry(article.id.clone()).or_default().push(article);
        }
        self.loaded.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn read_articles(path: &Path) -> Result<Vec<KnowledgeBaseArticle>, KnowledgeBaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| KnowledgeBaseError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn add(&self, article: KnowledgeBaseArticle) {
        self.articles
            .write()
            .entry(article.id.clone())
            .or_default()
            .push(article);
    }

    /// Looks up the article for a (probe, status) pair; `None` on miss.
    pub fn try_get(
        &self,
        probe_id: &str,
        status: ProbeResultStatus,
    ) -> Option<KnowledgeBaseArticle> {
        self.articles
            .read()
            .get(probe_id)
            .and_then(|articles| articles.iter().find(|a| a.status == status))
            .cloned()
    }

    /// Like `try_get`, but a miss yields the sentinel article instead.
    pub fn get(&self, probe_id: &str, status: ProbeResultStatus) -> KnowledgeBaseArticle {
        self.try_get(probe_id, status)
            .unwrap_or_else(|| KnowledgeBaseArticle::missing(probe_id, status))
    }

    /// All articles registered for a probe identity, empty on miss.
    pub fn articles(&self, probe_id: &str) -> Vec<KnowledgeBaseArticle> {
        self.articles
            .read()
            .get(probe_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.articles.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_miss_yields_sentinel() {
        let kb = KnowledgeBase::new();
        assert!(kb.try_get("unknown-id", ProbeResultStatus::Healthy).is_none());

        let article = kb.get("unknown-id", ProbeResultStatus::Healthy);
        assert_eq!(article.reason, MISSING_ARTICLE_REASON);
        assert_eq!(article.remediation, MISSING_ARTICLE_REMEDIATION);
    }

    #[test]
    fn add_then_lookup_round_trips() {
        let kb = KnowledgeBase::new();
        kb.add(KnowledgeBaseArticle::new(
            "queue-no-flow",
            ProbeResultStatus::Unhealthy,
            "No messages are reaching the queue",
            "Check producer bindings",
        ));

        let article = kb.get("queue-no-flow", ProbeResultStatus::Unhealthy);
        assert_eq!(article.reason, "No messages are reaching the queue");
        assert_eq!(kb.articles("queue-no-flow").len(), 1);
    }

    #[test]
    fn defaults_cover_every_article_status_pair_once() {
        let kb = KnowledgeBase::with_defaults();
        assert!(!kb.is_empty());

        // No duplicate (id, status) pairs in the built-in set.
        for article in defaults::articles() {
            let matches = kb
                .articles(&article.id)
                .into_iter()
                .filter(|a| a.status == article.status)
                .count();
            assert_eq!(matches, 1, "duplicate article for {}", article.id);
        }
    }
}
