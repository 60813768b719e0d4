// Every confidence/score constant used by the extractor, classifier and
// ranker lives here so the arithmetic stays consistent across components.


pub const SYNONYM_DISCOUNT: f64 = 0.9;


pub const TIME_PATTERN_CONFIDENCE: f64 = 0.9;


pub const DEFAULT_INTENT_CONFIDENCE: f64 = 0.7;


pub const KEYWORD_HIT_SCORE: i64 = 1;

pub const EXACT_MATCH_BONUS: i64 = 3;

pub const LEADING_MATCH_BONUS: i64 = 2;


pub const CATEGORY_BASE_CONFIDENCE: f64 = 0.5;

pub const CATEGORY_CONFIDENCE_SPAN: f64 = 0.5;

pub const CATEGORY_CONFIDENCE_CAP: f64 = 0.95;


pub const SUBCATEGORY_BASE_CONFIDENCE: f64 = 0.6;

pub const SUBCATEGORY_CONFIDENCE_SPAN: f64 = 0.35;

pub const SUBCATEGORY_MISS_CONFIDENCE: f64 = 0.3;

pub const SUBCATEGORY_MIN_CONFIDENCE: f64 = 0.4;


pub const TITLE_MATCH_WEIGHT: f64 = 10.0;

pub const DESCRIPTION_MATCH_WEIGHT: f64 = 5.0;

pub const CATEGORY_MATCH_WEIGHT: f64 = 3.0;

pub const SUBCATEGORY_MATCH_WEIGHT: f64 = 2.0;

pub const INTENT_BONUS_WEIGHT: f64 = 5.0;
