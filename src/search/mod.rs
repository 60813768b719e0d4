pub mod aggregator;
pub mod chain;
pub mod engine;
pub mod models;
pub mod ranker;
pub mod source;

pub use aggregator::{ResultAggregator, SourceStats};
pub use chain::SourceChain;
pub use engine::{SearchResult, ServiceSearch};
pub use models::ServiceRecord;
pub use ranker::RelevanceRanker;
pub use source::{HttpServiceSource, ServiceSource, SourceError, SourceId, StaticSource};
