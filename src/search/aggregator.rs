use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use futures::future;
use parking_lot::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::DalilConfig;

use super::chain::SourceChain;
use super::models::ServiceRecord;
use super::source::SourceId;


#[derive(Debug, Clone, Default)]
pub struct SourceStats {
    pub requests: usize,
    pub timeouts: usize,
    pub records: usize,
}

// Fans out one task per selected source, joins all of them, then merges.
// The upstream system had no timeout at all, so a hung registry stalled
// every query; both the per-source timeout and the overall deadline are
// configurable here.
pub struct ResultAggregator {
    chains: Vec<Arc<SourceChain>>,
    source_timeout: Duration,
    overall_deadline: Duration,
    stats: RwLock<HashMap<SourceId, SourceStats>>,
}

impl ResultAggregator {
    pub fn new(
        chains: Vec<Arc<SourceChain>>,
        source_timeout: Duration,
        overall_deadline: Duration,
    ) -> Self {
        info!(
            "ResultAggregator initialized: {} sources, timeout={:?}, deadline={:?}",
            chains.len(),
            source_timeout,
            overall_deadline
        );
        Self {
            chains,
            source_timeout,
            overall_deadline,
            stats: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(chains: Vec<Arc<SourceChain>>, config: &DalilConfig) -> Self {
        Self::new(
            chains,
            Duration::from_secs(config.source_timeout_secs),
            Duration::from_secs(config.overall_deadline_secs),
        )
    }

    // Joins every selected source before proceeding; no early return on
    // first success, no partial streaming. Any source fault degrades to an
    // empty contribution and never aborts the join.
    pub async fn aggregate(&self, query: &str, sources: &[SourceId]) -> Vec<ServiceRecord> {
        let request_id = Uuid::new_v4();
        let selected: Vec<Arc<SourceChain>> = self
            .chains
            .iter()
            .filter(|chain| sources.contains(&chain.id()))
            .cloned()
            .collect();

        debug!(
            "[{}] Aggregating {} sources for: {}",
            request_id,
            selected.len(),
            query
        );

        let tasks = selected.iter().map(|chain| {
            let chain = Arc::clone(chain);
            let query = query.to_string();
            let timeout = self.source_timeout;
            async move {
                match tokio::time::timeout(timeout, chain.fetch(&query)).await {
                    Ok(records) => (chain.id(), records, false),
                    Err(_) => {
                        warn!("Source {} timed out after {:?}", chain.id(), timeout);
                        (chain.id(), Vec::new(), true)
                    }
                }
            }
        });

        let joined = tokio::time::timeout(self.overall_deadline, future::join_all(tasks)).await;
        let per_source = match joined {
            Ok(results) => results,
            Err(_) => {
                warn!(
                    "[{}] Aggregation deadline {:?} exceeded, returning empty",
                    request_id, self.overall_deadline
                );
                return Vec::new();
            }
        };

        let mut merged = Vec::new();
        {
            let mut stats = self.stats.write();
            for (id, records, timed_out) in per_source {
                let entry = stats.entry(id).or_default();
                entry.requests += 1;
                entry.records += records.len();
                if timed_out {
                    entry.timeouts += 1;
                }
                merged.extend(records);
            }
        }

        let deduplicated = deduplicate(merged);
        info!(
            "[{}] Aggregated {} records from {} sources",
            request_id,
            deduplicated.len(),
            selected.len()
        );
        deduplicated
    }

    pub fn stats(&self) -> HashMap<SourceId, SourceStats> {
        self.stats.read().clone()
    }
}

// Records colliding on (title, authority) keep whichever has the more
// recent parseable last_updated; ties keep the first encountered. Order is
// otherwise the original fetch order, which the ranker's stable sort relies
// on for tie-breaking.
fn deduplicate(records: Vec<ServiceRecord>) -> Vec<ServiceRecord> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut kept: Vec<ServiceRecord> = Vec::new();

    for record in records {
        match index.get(&record.dedup_key()) {
            None => {
                index.insert(record.dedup_key(), kept.len());
                kept.push(record);
            }
            Some(&at) => {
                if is_strictly_newer(&record.last_updated, &kept[at].last_updated) {
                    debug!("Dedup: replacing stale copy of '{}'", record.title);
                    kept[at] = record;
                }
            }
        }
    }

    kept
}

fn is_strictly_newer(challenger: &str, incumbent: &str) -> bool {
    match (parse_timestamp(challenger), parse_timestamp(incumbent)) {
        (Some(c), Some(i)) => c > i,
        // an unparseable incumbent loses to a parseable challenger
        (Some(_), None) => true,
        _ => false,
    }
}

fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::source::{ServiceSource, SourceError, StaticSource};
    use async_trait::async_trait;

    struct FailingSource(SourceId);

    #[async_trait]
    impl ServiceSource for FailingSource {
        fn id(&self) -> SourceId {
            self.0
        }

        async fn fetch(&self, _query: &str) -> Result<Vec<ServiceRecord>, SourceError> {
            Err(SourceError::Status(500))
        }
    }

    struct SlowSource(SourceId);

    #[async_trait]
    impl ServiceSource for SlowSource {
        fn id(&self) -> SourceId {
            self.0
        }

        async fn fetch(&self, _query: &str) -> Result<Vec<ServiceRecord>, SourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }
    }

    fn record(title: &str, authority: &str, last_updated: &str) -> ServiceRecord {
        ServiceRecord {
            id: format!("svc-{title}"),
            title: title.to_string(),
            description: "desc".to_string(),
            authority: authority.to_string(),
            category: "identity".to_string(),
            subcategory: None,
            fees: None,
            processing_time: None,
            steps: None,
            url: "https://example.test".to_string(),
            last_updated: last_updated.to_string(),
            language: "en".to_string(),
        }
    }

    fn aggregator(chains: Vec<Arc<SourceChain>>) -> ResultAggregator {
        ResultAggregator::new(
            chains,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
    }

    #[tokio::test]
    async fn test_failing_source_does_not_abort_join() {
        let healthy = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::GovernmentPortal,
            vec![record("Renew Emirates ID", "ICP", "2026-01-01T00:00:00Z")],
        ))));
        let broken = Arc::new(SourceChain::single(Arc::new(FailingSource(
            SourceId::IdentityAuthority,
        ))));

        let agg = aggregator(vec![healthy, broken]);
        let records = agg
            .aggregate(
                "emirates id",
                &[SourceId::GovernmentPortal, SourceId::IdentityAuthority],
            )
            .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Renew Emirates ID");
    }

    #[tokio::test]
    async fn test_timed_out_source_contributes_empty() {
        let slow = Arc::new(SourceChain::single(Arc::new(SlowSource(
            SourceId::HealthAuthority,
        ))));
        let fast = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::GovernmentPortal,
            vec![record("Health Card", "DoH", "2026-01-01T00:00:00Z")],
        ))));

        let agg = aggregator(vec![slow, fast]);
        let records = agg
            .aggregate(
                "health card",
                &[SourceId::GovernmentPortal, SourceId::HealthAuthority],
            )
            .await;

        assert_eq!(records.len(), 1);
        let stats = agg.stats();
        assert_eq!(stats[&SourceId::HealthAuthority].timeouts, 1);
    }

    #[tokio::test]
    async fn test_unselected_sources_not_queried() {
        let portal = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::GovernmentPortal,
            vec![record("A", "X", "2026-01-01")],
        ))));
        let other = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::TransportAuthority,
            vec![record("B", "Y", "2026-01-01")],
        ))));

        let agg = aggregator(vec![portal, other]);
        let records = agg.aggregate("q", &[SourceId::GovernmentPortal]).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "A");
    }

    #[test]
    fn test_dedup_keeps_later_timestamp() {
        let stale = record("Renew Visa", "GDRFA", "2025-01-01T00:00:00Z");
        let fresh = record("Renew Visa", "GDRFA", "2026-06-01T00:00:00Z");
        let kept = deduplicate(vec![stale, fresh]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].last_updated, "2026-06-01T00:00:00Z");
    }

    #[test]
    fn test_dedup_tie_keeps_first() {
        let first = record("Renew Visa", "GDRFA", "2026-01-01T00:00:00Z");
        let second = {
            let mut r = record("Renew Visa", "GDRFA", "2026-01-01T00:00:00Z");
            r.id = "svc-second".to_string();
            r
        };
        let kept = deduplicate(vec![first, second]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "svc-Renew Visa");
    }

    #[test]
    fn test_dedup_distinct_authorities_kept() {
        let a = record("Renew Visa", "GDRFA", "2026-01-01");
        let b = record("Renew Visa", "ICP", "2026-01-01");
        assert_eq!(deduplicate(vec![a, b]).len(), 2);
    }

    #[test]
    fn test_dedup_unparseable_never_displaces() {
        let parseable = record("Renew Visa", "GDRFA", "2026-01-01T00:00:00Z");
        let garbage = record("Renew Visa", "GDRFA", "not a date");
        let kept = deduplicate(vec![parseable, garbage]);
        assert_eq!(kept[0].last_updated, "2026-01-01T00:00:00Z");
    }

    #[test]
    fn test_dedup_preserves_fetch_order() {
        let records = vec![
            record("A", "X", "2026-01-01"),
            record("B", "Y", "2026-01-01"),
            record("C", "Z", "2026-01-01"),
        ];
        let kept = deduplicate(records);
        let titles: Vec<_> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_timestamp_date_only() {
        assert!(parse_timestamp("2026-01-15").is_some());
        assert!(parse_timestamp("nonsense").is_none());
    }
}
