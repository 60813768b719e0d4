use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::language::Language;
use super::lexicon;
use super::models::{EntityType, RecognizedEntity};
use super::weights::{SYNONYM_DISCOUNT, TIME_PATTERN_CONFIDENCE};

// Date/time patterns scanned independently of the lexicon. The normalizer
// blanks "/" and ":", so each pattern also accepts a single space where the
// original query had a separator.
lazy_static! {
    static ref TIME_PATTERNS: Vec<Regex> = {
        let month = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec";
        vec![
            // D/M/Y and Y/M/D numeric dates
            Regex::new(r"\b\d{1,2}[/ ]\d{1,2}[/ ]\d{2,4}\b").unwrap(),
            Regex::new(r"\b\d{4}[/ ]\d{1,2}[/ ]\d{1,2}\b").unwrap(),
            // month-name-adjacent dates
            Regex::new(&format!(r"\b(?:{month}) \d{{1,2}}\b")).unwrap(),
            Regex::new(&format!(r"\b\d{{1,2}} (?:{month})\b")).unwrap(),
            // clock times; am/pm is required because a bare "16 30" is
            // indistinguishable from a date fragment once ":" is blanked
            Regex::new(r"\b\d{1,2} \d{2}(?: \d{2})? ?(?:am|pm)\b").unwrap(),
            Regex::new(r"\b\d{1,2} ?(?:am|pm)\b").unwrap(),
        ]
    };
}


pub struct EntityExtractor {
    language: Language,
}

impl EntityExtractor {
    pub fn new(language: Language) -> Self {
        Self { language }
    }


    pub fn extract(&self, normalized: &str) -> Vec<RecognizedEntity> {
        let profile = lexicon::profile(self.language);
        let mut entities = Vec::new();

        for entry in profile.entities {
            if let Some(pos) = normalized.find(entry.canonical) {
                entities.push(RecognizedEntity {
                    text: entry.canonical.to_string(),
                    entity_type: entry.entity_type,
                    confidence: entry.base_confidence,
                    normalized_value: entry.canonical.to_string(),
                    start_offset: pos,
                    end_offset: pos + entry.canonical.len(),
                });
                continue;
            }
            // one synonym hit at most per entry
            for synonym in entry.synonyms {
                if let Some(pos) = normalized.find(synonym) {
                    entities.push(RecognizedEntity {
                        text: synonym.to_string(),
                        entity_type: entry.entity_type,
                        confidence: entry.base_confidence * SYNONYM_DISCOUNT,
                        normalized_value: entry.canonical.to_string(),
                        start_offset: pos,
                        end_offset: pos + synonym.len(),
                    });
                    break;
                }
            }
        }

        entities.extend(scan_time_patterns(normalized));

        debug!("Extracted {} entities", entities.len());
        entities
    }
}

// Every regex match becomes its own entity; there is no deduplication
// against lexicon-based TIME_PERIOD hits.
fn scan_time_patterns(normalized: &str) -> Vec<RecognizedEntity> {
    let mut entities = Vec::new();
    for pattern in TIME_PATTERNS.iter() {
        for m in pattern.find_iter(normalized) {
            entities.push(RecognizedEntity {
                text: m.as_str().to_string(),
                entity_type: EntityType::TimePeriod,
                confidence: TIME_PATTERN_CONFIDENCE,
                normalized_value: m.as_str().to_string(),
                start_offset: m.start(),
                end_offset: m.end(),
            });
        }
    }
    entities
}
