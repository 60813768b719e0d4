use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, warn};

use super::models::ServiceRecord;
use super::source::{ServiceSource, SourceId};

// Ordered chain of providers for one upstream source: the first provider to
// answer wins, and when every provider fails the chain degrades to an empty
// result rather than surfacing an error.
pub struct SourceChain {
    id: SourceId,
    providers: Vec<Arc<dyn ServiceSource>>,
    failures: AtomicUsize,
}

impl SourceChain {
    pub fn new(id: SourceId, providers: Vec<Arc<dyn ServiceSource>>) -> Self {
        Self {
            id,
            providers,
            failures: AtomicUsize::new(0),
        }
    }


    pub fn single(provider: Arc<dyn ServiceSource>) -> Self {
        let id = provider.id();
        Self::new(id, vec![provider])
    }

    pub fn id(&self) -> SourceId {
        self.id
    }

    pub fn failure_count(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }


    pub async fn fetch(&self, query: &str) -> Vec<ServiceRecord> {
        for provider in &self.providers {
            match provider.fetch(query).await {
                Ok(records) => return records,
                Err(e) => {
                    self.failures.fetch_add(1, Ordering::SeqCst);
                    warn!("Source {} provider failed: {}", self.id, e);
                }
            }
        }
        debug!("Source {}: all providers failed, returning empty", self.id);
        Vec::new()
    }
}
