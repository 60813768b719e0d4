use std::collections::HashMap;

use tracing::debug;

use super::language::Language;
use super::lexicon;
use super::models::{Intent, IntentLabel};
use super::weights::DEFAULT_INTENT_CONFIDENCE;


pub struct IntentResolver {
    language: Language,
}

impl IntentResolver {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    // One entry per distinct label; repeated triggers keep the maximum
    // confidence observed, never a sum or average.
    pub fn resolve(&self, normalized: &str) -> HashMap<IntentLabel, Intent> {
        let profile = lexicon::profile(self.language);
        let mut intents: HashMap<IntentLabel, Intent> = HashMap::new();

        for trigger in profile.intent_triggers {
            if !normalized.contains(trigger.phrase) {
                continue;
            }
            intents
                .entry(trigger.label)
                .and_modify(|intent| {
                    if trigger.confidence > intent.confidence {
                        intent.confidence = trigger.confidence;
                    }
                })
                .or_insert(Intent {
                    label: trigger.label,
                    confidence: trigger.confidence,
                });
        }

        if intents.is_empty() {
            intents.insert(
                IntentLabel::Information,
                Intent {
                    label: IntentLabel::Information,
                    confidence: DEFAULT_INTENT_CONFIDENCE,
                },
            );
        }

        debug!("Resolved {} intents", intents.len());
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::normalizer::normalize;

    fn resolve(query: &str, language: Language) -> HashMap<IntentLabel, Intent> {
        IntentResolver::new(language).resolve(&normalize(query, language))
    }

    #[test]
    fn test_renewal_intent() {
        let intents = resolve("i want to renew my emirates id in dubai", Language::En);
        let renewal = &intents[&IntentLabel::Renewal];
        assert_eq!(renewal.confidence, 0.9);
    }

    #[test]
    fn test_default_intent_when_no_trigger() {
        let intents = resolve("emirates id dubai", Language::En);
        assert_eq!(intents.len(), 1);
        let info = &intents[&IntentLabel::Information];
        assert_eq!(info.confidence, 0.7);
    }

    #[test]
    fn test_default_absent_when_trigger_matched() {
        let intents = resolve("renew my visa", Language::En);
        assert!(intents.contains_key(&IntentLabel::Renewal));
        assert!(!intents.contains_key(&IntentLabel::Information));
    }

    #[test]
    fn test_multiple_distinct_intents_coexist() {
        let intents = resolve("renew my visa and pay the fee", Language::En);
        assert!(intents.contains_key(&IntentLabel::Renewal));
        assert!(intents.contains_key(&IntentLabel::Payment));
    }

    #[test]
    fn test_same_label_keeps_maximum_confidence() {
        // "expire" (0.75) and "renew" (0.9) both map to RENEWAL
        let intents = resolve("renew my visa before it can expire", Language::En);
        assert_eq!(intents[&IntentLabel::Renewal].confidence, 0.9);
    }

    #[test]
    fn test_confidence_never_decreases() {
        // trigger order is renew (0.9) then expire (0.75); the weaker later
        // trigger must not overwrite the stronger one
        let intents = resolve("expire renew", Language::En);
        assert_eq!(intents[&IntentLabel::Renewal].confidence, 0.9);
    }

    #[test]
    fn test_arabic_renewal() {
        let intents = resolve("أريد تجديد التأشيرة", Language::Ar);
        assert_eq!(intents[&IntentLabel::Renewal].confidence, 0.9);
    }
}
