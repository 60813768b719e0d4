use std::cmp::Ordering;

use tracing::debug;

use crate::nlp::models::{EntityRecognitionResult, IntentLabel};
use crate::nlp::weights::{
    CATEGORY_MATCH_WEIGHT, DESCRIPTION_MATCH_WEIGHT, INTENT_BONUS_WEIGHT,
    SUBCATEGORY_MATCH_WEIGHT, TITLE_MATCH_WEIGHT,
};

use super::models::ServiceRecord;


pub struct RelevanceRanker;

impl RelevanceRanker {
    pub fn new() -> Self {
        Self
    }

    // Scores are uncapped on purpose: a record matching many entities should
    // dominate. Ties keep the original fetch order (stable sort).
    pub fn rank(
        &self,
        records: Vec<ServiceRecord>,
        recognition: &EntityRecognitionResult,
    ) -> Vec<ServiceRecord> {
        let mut scored: Vec<(f64, ServiceRecord)> = records
            .into_iter()
            .map(|record| (score_record(&record, recognition), record))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        if let Some((top, record)) = scored.first() {
            debug!("Top ranked: '{}' (score {:.1})", record.title, top);
        }
        scored.into_iter().map(|(_, record)| record).collect()
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new()
    }
}

// Record fields are raw upstream text; comparisons lowercase them so
// matching lines up with the normalized entity values.
pub fn score_record(record: &ServiceRecord, recognition: &EntityRecognitionResult) -> f64 {
    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();
    let category = record.category.to_lowercase();
    let subcategory = record.subcategory.as_deref().map(str::to_lowercase);

    let mut score = 0.0;

    for entity in &recognition.entities {
        let needle = if entity.normalized_value.is_empty() {
            entity.text.as_str()
        } else {
            entity.normalized_value.as_str()
        };
        if needle.is_empty() {
            continue;
        }

        if title.contains(needle) {
            score += TITLE_MATCH_WEIGHT * entity.confidence;
        }
        if description.contains(needle) {
            score += DESCRIPTION_MATCH_WEIGHT * entity.confidence;
        }
        if category.contains(needle) {
            score += CATEGORY_MATCH_WEIGHT * entity.confidence;
        }
        if let Some(sub) = &subcategory {
            if sub.contains(needle) {
                score += SUBCATEGORY_MATCH_WEIGHT * entity.confidence;
            }
        }
    }

    for intent in recognition.intents.values() {
        let keywords = intent_keywords(intent.label);
        if keywords
            .iter()
            .any(|kw| title.contains(kw) || description.contains(kw))
        {
            score += INTENT_BONUS_WEIGHT * intent.confidence;
        }
    }

    score
}

// INFORMATION carries no bonus keywords: it is the fallback intent and
// would otherwise reward every record equally.
fn intent_keywords(label: IntentLabel) -> &'static [&'static str] {
    match label {
        IntentLabel::Application => &["apply", "application"],
        IntentLabel::Renewal => &["renew"],
        IntentLabel::Cancellation => &["cancel"],
        IntentLabel::Payment => &["pay", "fee", "payment"],
        IntentLabel::Status => &["status", "track"],
        IntentLabel::Complaint => &["complaint", "complain"],
        IntentLabel::Information => &[],
    }
}
