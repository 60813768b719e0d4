use tracing::debug;

use super::language::Language;
use super::lexicon::{self, CategoryDef};
use super::models::{ClassificationResult, SubcategoryScore};
use super::weights::{
    CATEGORY_BASE_CONFIDENCE, CATEGORY_CONFIDENCE_CAP, CATEGORY_CONFIDENCE_SPAN,
    EXACT_MATCH_BONUS, KEYWORD_HIT_SCORE, LEADING_MATCH_BONUS, SUBCATEGORY_BASE_CONFIDENCE,
    SUBCATEGORY_CONFIDENCE_SPAN, SUBCATEGORY_MIN_CONFIDENCE, SUBCATEGORY_MISS_CONFIDENCE,
};


pub struct CategoryClassifier {
    language: Language,
}

impl CategoryClassifier {
    pub fn new(language: Language) -> Self {
        Self { language }
    }


    pub fn classify(&self, normalized: &str) -> ClassificationResult {
        let profile = lexicon::profile(self.language);

        let mut best: Option<(&CategoryDef, i64)> = None;
        let mut total_score: i64 = 0;

        for category in profile.categories {
            let score = score_category(normalized, category);
            total_score += score;
            // strict > keeps the first-seen category on ties
            match best {
                Some((_, best_score)) if score > best_score => best = Some((category, score)),
                None => best = Some((category, score)),
                _ => {}
            }
        }

        let (winner, top_score) = match best {
            Some((category, score)) if score > 0 => (category, score),
            _ => {
                debug!("No category scored; returning general");
                return ClassificationResult::general();
            }
        };

        let share = top_score as f64 / (total_score as f64 + 1.0);
        let confidence =
            (CATEGORY_BASE_CONFIDENCE + share * CATEGORY_CONFIDENCE_SPAN).min(CATEGORY_CONFIDENCE_CAP);

        let subcategories = winner
            .subcategories
            .iter()
            .filter_map(|sub| {
                let matched = sub
                    .keywords
                    .iter()
                    .filter(|kw| normalized.contains(*kw))
                    .count();
                let confidence = if matched > 0 {
                    (SUBCATEGORY_BASE_CONFIDENCE
                        + (matched as f64 / sub.keywords.len() as f64) * SUBCATEGORY_CONFIDENCE_SPAN)
                        .min(CATEGORY_CONFIDENCE_CAP)
                } else {
                    SUBCATEGORY_MISS_CONFIDENCE
                };
                (confidence > SUBCATEGORY_MIN_CONFIDENCE).then(|| SubcategoryScore {
                    name: sub.name.to_string(),
                    confidence,
                })
            })
            .collect();

        debug!(
            "Classified as {} (score {}/{})",
            winner.name, top_score, total_score
        );

        ClassificationResult {
            category: winner.name.to_string(),
            confidence,
            subcategories,
        }
    }
}

fn score_category(normalized: &str, category: &CategoryDef) -> i64 {
    let mut score = 0;
    for keyword in category.keywords {
        if normalized.contains(keyword) {
            score += KEYWORD_HIT_SCORE;
        }
        if normalized == *keyword {
            score += EXACT_MATCH_BONUS;
        }
        if normalized.starts_with(&format!("{keyword} ")) {
            score += LEADING_MATCH_BONUS;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::normalizer::normalize;

    fn classify(query: &str, language: Language) -> ClassificationResult {
        CategoryClassifier::new(language).classify(&normalize(query, language))
    }

    #[test]
    fn test_identity_category() {
        let result = classify("i want to renew my emirates id in dubai", Language::En);
        assert_eq!(result.category, "identity");
    }

    #[test]
    fn test_general_fallback_iff_all_scores_zero() {
        let result = classify("xyzzy plugh", Language::En);
        assert_eq!(result.category, "general");
        assert_eq!(result.confidence, 0.5);
        assert!(result.subcategories.is_empty());
    }

    #[test]
    fn test_confidence_bounds() {
        for query in [
            "emirates id",
            "renew visa residence sponsor immigration entry permit",
            "driving license fine parking",
            "hospital",
            "qwerty",
        ] {
            let result = classify(query, Language::En);
            assert!(
                result.confidence >= 0.5 && result.confidence <= 0.95,
                "query {query} gave {}",
                result.confidence
            );
        }
    }

    #[test]
    fn test_exact_match_bonus_beats_scattered_hits() {
        // "visa" alone: substring hit + exact bonus + no leading bonus
        let exact = classify("visa", Language::En);
        assert_eq!(exact.category, "visa");
        let leading = classify("visa renewal for my spouse", Language::En);
        assert_eq!(leading.category, "visa");
        // exact match concentrates the share, so it is at least as confident
        assert!(exact.confidence >= leading.confidence);
    }

    #[test]
    fn test_subcategories_filtered_and_in_table_order() {
        let result = classify("renew my visa before expiry", Language::En);
        assert_eq!(result.category, "visa");
        // "visa renewal" matched (renew + expiry); unmatched subcategories
        // score 0.3 and are filtered out
        assert!(!result.subcategories.is_empty());
        for sub in &result.subcategories {
            assert!(sub.confidence > 0.4);
        }
        assert!(result.subcategories.iter().any(|s| s.name == "visa renewal"));
    }

    #[test]
    fn test_tie_keeps_first_seen_category() {
        // "salary" scores employment, "student" scores education, 1-1;
        // employment comes first in the table and wins the tie
        let result = classify("student salary", Language::En);
        assert_eq!(result.category, "employment");
    }

    #[test]
    fn test_arabic_visa_category() {
        let result = classify("دبي تأشيرة", Language::Ar);
        assert_eq!(result.category, "visa");
    }
}
