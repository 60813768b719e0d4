use super::language::Language;
use super::lexicon;

// Bag-of-words view used by downstream keyword consumers. Entity lookup
// deliberately does NOT run on stemmed tokens: the lexicon matches literal
// multi-word phrases against the normalized text, and stemming would corrupt
// fixed phrases like "emirates id".


pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}


pub fn remove_stopwords(tokens: Vec<String>, language: Language) -> Vec<String> {
    let stopwords = &lexicon::profile(language).stopwords;
    tokens
        .into_iter()
        .filter(|t| !stopwords.contains(t.as_str()))
        .collect()
}


pub fn stem(token: &str, language: Language) -> String {
    match language {
        Language::En => stem_english(token),
        Language::Ar => stem_arabic(token),
    }
}


pub fn content_tokens(normalized: &str, language: Language) -> Vec<String> {
    remove_stopwords(tokenize(normalized), language)
        .iter()
        .map(|t| stem(t, language))
        .collect()
}

// Heuristic suffix stripping, at most one suffix; first rule that applies
// wins. Not a linguistic stemmer.
fn stem_english(token: &str) -> String {
    let len = token.len();
    if let Some(stripped) = token.strip_suffix("ing") {
        stripped.to_string()
    } else if let Some(stripped) = token.strip_suffix("ed") {
        stripped.to_string()
    } else if len > 4 && token.ends_with("ies") {
        format!("{}y", &token[..len - 3])
    } else if len > 4 && token.ends_with("es") {
        token[..len - 2].to_string()
    } else if len > 3 && token.ends_with('s') {
        token[..len - 1].to_string()
    } else {
        token.to_string()
    }
}

// Strips the definite article and at most one plural suffix. Lengths are in
// chars because Arabic is multibyte.
fn stem_arabic(token: &str) -> String {
    let mut stemmed = token.to_string();
    if stemmed.chars().count() > 3 {
        if let Some(stripped) = stemmed.strip_prefix("ال") {
            stemmed = stripped.to_string();
        }
    }
    if stemmed.chars().count() > 4 {
        for suffix in ["ون", "ات", "ين"] {
            if let Some(stripped) = stemmed.strip_suffix(suffix) {
                stemmed = stripped.to_string();
                break;
            }
        }
    }
    stemmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_empties() {
        assert_eq!(tokenize("renew emirates id"), vec!["renew", "emirates", "id"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_stopword_removal_english() {
        let tokens = tokenize("i want to renew my emirates id");
        let filtered = remove_stopwords(tokens, Language::En);
        assert_eq!(filtered, vec!["renew", "emirates", "id"]);
    }

    #[test]
    fn test_english_stem_ing_first() {
        assert_eq!(stem("renewing", Language::En), "renew");
    }

    #[test]
    fn test_english_stem_ed() {
        assert_eq!(stem("applied", Language::En), "appli");
    }

    #[test]
    fn test_english_stem_ies() {
        assert_eq!(stem("policies", Language::En), "policy");
        // len guard: "ties" falls through to the plain "s" rule
        assert_eq!(stem("ties", Language::En), "tie");
    }

    #[test]
    fn test_english_stem_es_and_s_guards() {
        assert_eq!(stem("licenses", Language::En), "licens");
        assert_eq!(stem("fees", Language::En), "fee");
        // too short for the "s" rule
        assert_eq!(stem("is", Language::En), "is");
    }

    #[test]
    fn test_english_at_most_one_suffix() {
        assert_eq!(stem("housing", Language::En), "hous");
        assert_eq!(stem("renewals", Language::En), "renewal");
    }

    #[test]
    fn test_arabic_stem_definite_article() {
        assert_eq!(stem("الهويه", Language::Ar), "هويه");
        // too short to strip
        assert_eq!(stem("الى", Language::Ar), "الى");
    }

    #[test]
    fn test_arabic_stem_plural_suffix() {
        assert_eq!(stem("مقيمون", Language::Ar), "مقيم");
        assert_eq!(stem("خدمات", Language::Ar), "خدم");
    }

    #[test]
    fn test_arabic_article_then_one_suffix() {
        assert_eq!(stem("المقيمين", Language::Ar), "مقيم");
    }
}
