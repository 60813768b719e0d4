use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::DalilConfig;
use crate::core::error::Result;
use crate::nlp::language::Language;
use crate::nlp::models::ProcessedQuery;
use crate::nlp::pipeline::QueryPipeline;

use super::aggregator::ResultAggregator;
use super::chain::SourceChain;
use super::models::ServiceRecord;
use super::ranker::RelevanceRanker;
use super::source::{HttpServiceSource, SourceId, select_sources};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: ProcessedQuery,
    pub records: Vec<ServiceRecord>,
}

// Understanding -> source selection -> aggregation -> ranking. By design
// nothing here fails the caller: a total upstream outage yields an empty
// record list, and the formatting layer renders its fallback message.
pub struct ServiceSearch {
    pipeline: QueryPipeline,
    aggregator: ResultAggregator,
    ranker: RelevanceRanker,
    max_results: usize,
}

impl ServiceSearch {
    pub fn new(aggregator: ResultAggregator, max_results: usize) -> Self {
        Self {
            pipeline: QueryPipeline::new(),
            aggregator,
            ranker: RelevanceRanker::new(),
            max_results,
        }
    }


    pub fn from_config(config: &DalilConfig) -> Result<Self> {
        let chains = [
            (SourceId::GovernmentPortal, "portal"),
            (SourceId::IdentityAuthority, "identity"),
            (SourceId::ResidencyDirectorate, "residency"),
            (SourceId::TransportAuthority, "transport"),
            (SourceId::HealthAuthority, "health"),
            (SourceId::LabourMinistry, "labour"),
        ]
        .into_iter()
        .map(|(id, path)| {
            let base_url = format!("{}/{}", config.portal_base_url.trim_end_matches('/'), path);
            let provider = HttpServiceSource::new(id, &base_url, config)?;
            Ok(Arc::new(SourceChain::single(Arc::new(provider))))
        })
        .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(
            ResultAggregator::from_config(chains, config),
            config.max_results,
        ))
    }


    pub async fn search(&self, query: &str, language: Language) -> SearchResult {
        let processed = self.pipeline.process(query, language);
        let sources = select_sources(&processed.recognition.entities);

        let fetched = self
            .aggregator
            .aggregate(&processed.recognition.expanded_query, &sources)
            .await;

        let mut records = self.ranker.rank(fetched, &processed.recognition);
        records.truncate(self.max_results);

        info!(
            "Search complete: {} -> {} records",
            processed.recognition.original_query,
            records.len()
        );

        SearchResult {
            query: processed,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::search::source::{ServiceSource, SourceError, StaticSource};
    use async_trait::async_trait;

    struct FailingSource(SourceId);

    #[async_trait]
    impl ServiceSource for FailingSource {
        fn id(&self) -> SourceId {
            self.0
        }

        async fn fetch(&self, _query: &str) -> std::result::Result<Vec<ServiceRecord>, SourceError> {
            Err(SourceError::Status(502))
        }
    }

    fn record(id: &str, title: &str, authority: &str) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: "renew online".to_string(),
            authority: authority.to_string(),
            category: "identity".to_string(),
            subcategory: Some("id card".to_string()),
            fees: Some("AED 100".to_string()),
            processing_time: Some("2 working days".to_string()),
            steps: None,
            url: "https://example.test".to_string(),
            last_updated: "2026-01-01T00:00:00Z".to_string(),
            language: "en".to_string(),
        }
    }

    fn engine(chains: Vec<Arc<SourceChain>>) -> ServiceSearch {
        ServiceSearch::new(
            ResultAggregator::new(
                chains,
                Duration::from_millis(200),
                Duration::from_millis(500),
            ),
            10,
        )
    }

    #[tokio::test]
    async fn test_end_to_end_with_one_failing_source() {
        let portal = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::GovernmentPortal,
            vec![record("svc-1", "Emirates ID renewal", "ICP")],
        ))));
        let broken = Arc::new(SourceChain::single(Arc::new(FailingSource(
            SourceId::IdentityAuthority,
        ))));

        let result = engine(vec![portal, broken])
            .search("renew my emirates id in dubai", Language::En)
            .await;

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].id, "svc-1");
        assert_eq!(result.query.classification.category, "identity");
    }

    #[tokio::test]
    async fn test_all_sources_down_yields_empty_not_error() {
        let broken = Arc::new(SourceChain::single(Arc::new(FailingSource(
            SourceId::GovernmentPortal,
        ))));
        let result = engine(vec![broken]).search("renew my visa", Language::En).await;
        assert!(result.records.is_empty());
    }

    #[tokio::test]
    async fn test_ranked_order_and_truncation() {
        let records = vec![
            record("low", "Traffic fine payment", "RTA"),
            record("high", "Emirates ID renewal in Dubai", "ICP"),
        ];
        let portal = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::GovernmentPortal,
            records,
        ))));

        let result = engine(vec![portal])
            .search("renew my emirates id in dubai", Language::En)
            .await;

        assert_eq!(result.records[0].id, "high");
    }

    #[tokio::test]
    async fn test_fetch_uses_expanded_query() {
        // synonym-only query: the canonical term is appended before fetching
        let portal = Arc::new(SourceChain::single(Arc::new(StaticSource::new(
            SourceId::GovernmentPortal,
            vec![],
        ))));
        let result = engine(vec![portal]).search("interior ministry", Language::En).await;
        assert!(result
            .query
            .recognition
            .expanded_query
            .contains("ministry of interior"));
    }
}
