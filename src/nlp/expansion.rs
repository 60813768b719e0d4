use tracing::debug;

use super::language::Language;
use super::lexicon;


pub struct QueryExpander {
    language: Language,
}

impl QueryExpander {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    // Appends the canonical term whenever only a synonym matched, so that
    // downstream keyword search sees the canonical vocabulary. Entries whose
    // canonical term already appears are skipped entirely; a canonical term
    // appended by more than one entry is accepted, not deduplicated.
    pub fn expand(&self, normalized: &str) -> String {
        let profile = lexicon::profile(self.language);
        let mut expanded = normalized.to_string();

        for entry in profile.entities {
            if normalized.contains(entry.canonical) {
                continue;
            }
            for synonym in entry.synonyms {
                if normalized.contains(synonym) {
                    expanded.push(' ');
                    expanded.push_str(entry.canonical);
                    break;
                }
            }
        }

        if expanded.len() > normalized.len() {
            debug!("Expanded query: {}", expanded);
        }
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::normalizer::normalize;

    fn expand(query: &str, language: Language) -> String {
        QueryExpander::new(language).expand(&normalize(query, language))
    }

    #[test]
    fn test_synonym_appends_canonical() {
        assert_eq!(
            expand("interior ministry", Language::En),
            "interior ministry ministry of interior"
        );
    }

    #[test]
    fn test_canonical_present_appends_nothing() {
        assert_eq!(
            expand("renew emirates id", Language::En),
            "renew emirates id"
        );
    }

    #[test]
    fn test_first_synonym_wins_per_entry() {
        // "eid" and "id card" are both synonyms of "emirates id"; the
        // canonical term is appended once for that entry
        assert_eq!(expand("eid id card", Language::En), "eid id card emirates id");
    }

    #[test]
    fn test_arabic_canonicals_present() {
        let normalized = normalize("دبي تأشيرة", Language::Ar);
        assert_eq!(expand("دبي تأشيرة", Language::Ar), normalized);
    }

    #[test]
    fn test_no_match_is_identity() {
        assert_eq!(expand("hello world", Language::En), "hello world");
    }
}
