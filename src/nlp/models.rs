use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::language::Language;


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    ServiceType,
    DocumentType,
    Location,
    PersonType,
    TimePeriod,
    FeeType,
    Ministry,
    Authority,
    Emirate,
    Nationality,
}


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentLabel {
    Application,
    Renewal,
    Cancellation,
    Payment,
    Status,
    Complaint,
    Information,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedEntity {

    pub text: String,
    pub entity_type: EntityType,
    pub confidence: f64,

    pub normalized_value: String,
    // Byte offsets into the normalized query, first occurrence only.
    pub start_offset: usize,
    pub end_offset: usize,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub label: IntentLabel,
    pub confidence: f64,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecognitionResult {
    pub entities: Vec<RecognizedEntity>,
    pub intents: HashMap<IntentLabel, Intent>,
    pub expanded_query: String,
    pub original_query: String,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryScore {
    pub name: String,
    pub confidence: f64,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
    pub confidence: f64,
    pub subcategories: Vec<SubcategoryScore>,
}

impl ClassificationResult {

    pub fn general() -> Self {
        Self {
            category: "general".to_string(),
            confidence: super::weights::CATEGORY_BASE_CONFIDENCE,
            subcategories: Vec::new(),
        }
    }
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedQuery {
    pub language: Language,
    pub normalized_query: String,

    pub tokens: Vec<String>,
    pub recognition: EntityRecognitionResult,
    pub classification: ClassificationResult,
}
