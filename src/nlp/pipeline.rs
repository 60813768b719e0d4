use tracing::{debug, info};

use super::classifier::CategoryClassifier;
use super::expansion::QueryExpander;
use super::extractor::EntityExtractor;
use super::intent::IntentResolver;
use super::language::Language;
use super::models::{EntityRecognitionResult, ProcessedQuery};
use super::normalizer::normalize;
use super::tokenizer;

// Synchronous and side-effect-free: safe to run concurrently for
// independent queries. Entity matching runs on the normalized (unstemmed)
// text; the stemmed token view is produced separately for bag-of-words
// consumers.
pub struct QueryPipeline;

impl QueryPipeline {
    pub fn new() -> Self {
        Self
    }


    pub fn process(&self, query: &str, language: Language) -> ProcessedQuery {
        debug!("Processing query ({}): {}", language, query);

        let normalized = normalize(query, language);

        let entities = EntityExtractor::new(language).extract(&normalized);
        let intents = IntentResolver::new(language).resolve(&normalized);
        let expanded_query = QueryExpander::new(language).expand(&normalized);
        let classification = CategoryClassifier::new(language).classify(&normalized);
        let tokens = tokenizer::content_tokens(&normalized, language);

        info!(
            "Query processed: {} entities, {} intents, category={}",
            entities.len(),
            intents.len(),
            classification.category
        );

        ProcessedQuery {
            language,
            normalized_query: normalized,
            tokens,
            recognition: EntityRecognitionResult {
                entities,
                intents,
                expanded_query,
                original_query: query.to_string(),
            },
            classification,
        }
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new()
    }
}
