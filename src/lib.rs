pub mod core;
pub mod nlp;
pub mod search;

pub use crate::core::config::DalilConfig;
pub use crate::core::error::{DalilError, Result};
pub use crate::nlp::language::Language;
pub use crate::nlp::models::{
    ClassificationResult, EntityRecognitionResult, EntityType, Intent, IntentLabel,
    ProcessedQuery, RecognizedEntity, SubcategoryScore,
};
pub use crate::nlp::pipeline::QueryPipeline;
pub use crate::search::engine::{SearchResult, ServiceSearch};
pub use crate::search::models::ServiceRecord;
pub use crate::search::source::{ServiceSource, SourceError, SourceId};


pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 10;


pub const DEFAULT_OVERALL_DEADLINE_SECS: u64 = 25;


pub const DEFAULT_MAX_RESULTS: usize = 20;


pub const DEFAULT_PORTAL_URL: &str = "https://services.gov.example/api/v1";
