pub mod classifier;
pub mod expansion;
pub mod extractor;
pub mod intent;
pub mod language;
pub mod lexicon;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod tokenizer;
pub mod weights;

pub use classifier::CategoryClassifier;
pub use expansion::QueryExpander;
pub use extractor::EntityExtractor;
pub use intent::IntentResolver;
pub use language::Language;
pub use models::{
    ClassificationResult, EntityRecognitionResult, EntityType, Intent, IntentLabel,
    ProcessedQuery, RecognizedEntity, SubcategoryScore,
};
pub use normalizer::normalize;
pub use pipeline::QueryPipeline;
