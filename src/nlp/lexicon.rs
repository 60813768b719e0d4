use std::collections::HashSet;

use lazy_static::lazy_static;

use super::language::Language;
use super::models::{EntityType, IntentLabel};

// Hand-curated lookup tables. All terms are stored in normalized form (see
// normalizer.rs) because matching runs against the normalized query; for
// Arabic that means hamza/ta-marbuta/ya variants are already folded. The
// Arabic tables are a deliberate subset of the English ones in coverage.


#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub canonical: &'static str,
    pub entity_type: EntityType,
    pub base_confidence: f64,
    pub synonyms: &'static [&'static str],
}


#[derive(Debug, Clone, Copy)]
pub struct IntentTrigger {
    pub phrase: &'static str,
    pub label: IntentLabel,
    pub confidence: f64,
}


#[derive(Debug, Clone, Copy)]
pub struct SubcategoryDef {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}


#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub subcategories: &'static [SubcategoryDef],
}


pub struct LanguageProfile {
    pub entities: &'static [LexiconEntry],
    pub intent_triggers: &'static [IntentTrigger],
    pub categories: &'static [CategoryDef],
    pub stopwords: HashSet<&'static str>,
}


pub fn profile(language: Language) -> &'static LanguageProfile {
    match language {
        Language::En => &EN_PROFILE,
        Language::Ar => &AR_PROFILE,
    }
}

const fn entry(
    canonical: &'static str,
    entity_type: EntityType,
    base_confidence: f64,
    synonyms: &'static [&'static str],
) -> LexiconEntry {
    LexiconEntry {
        canonical,
        entity_type,
        base_confidence,
        synonyms,
    }
}

const fn trigger(phrase: &'static str, label: IntentLabel, confidence: f64) -> IntentTrigger {
    IntentTrigger {
        phrase,
        label,
        confidence,
    }
}

use EntityType::*;
use IntentLabel::*;

static EN_ENTITIES: &[LexiconEntry] = &[
    // service types
    entry("emirates id", ServiceType, 0.9, &["eid", "identity card", "id card"]),
    entry("visa", ServiceType, 0.9, &["entry permit", "residence permit"]),
    entry("golden visa", ServiceType, 0.85, &["long term residence"]),
    entry("driving license", ServiceType, 0.9, &["driving licence", "driver license"]),
    entry("passport", ServiceType, 0.9, &["travel document"]),
    entry("trade license", ServiceType, 0.9, &["business license", "commercial license"]),
    entry("vehicle registration", ServiceType, 0.9, &["car registration"]),
    entry("work permit", ServiceType, 0.9, &["labour card", "labor card"]),
    entry("health card", ServiceType, 0.85, &["medical card"]),
    entry("tenancy contract", ServiceType, 0.85, &["ejari", "rental contract"]),
    // document types
    entry("birth certificate", DocumentType, 0.8, &["birth cert"]),
    entry("marriage certificate", DocumentType, 0.8, &[]),
    entry("salary certificate", DocumentType, 0.8, &["salary letter"]),
    entry("no objection certificate", DocumentType, 0.8, &["noc", "no objection letter"]),
    entry("police clearance", DocumentType, 0.8, &["good conduct certificate"]),
    entry("attestation", DocumentType, 0.8, &["attested copy"]),
    // locations
    entry("dubai", Location, 0.9, &["dxb"]),
    entry("abu dhabi", Location, 0.9, &["abudhabi"]),
    entry("sharjah", Location, 0.9, &[]),
    entry("ajman", Location, 0.9, &[]),
    entry("fujairah", Location, 0.9, &[]),
    entry("ras al khaimah", Location, 0.9, &["rak"]),
    entry("umm al quwain", Location, 0.9, &["uaq"]),
    entry("al ain", Location, 0.9, &[]),
    entry("uae", Location, 0.9, &["united arab emirates"]),
    // person types
    entry("resident", PersonType, 0.8, &["expat", "expatriate"]),
    entry("citizen", PersonType, 0.8, &["emirati", "national"]),
    entry("visitor", PersonType, 0.8, &["tourist"]),
    entry("investor", PersonType, 0.8, &[]),
    entry("employee", PersonType, 0.8, &["worker"]),
    entry("student", PersonType, 0.8, &[]),
    entry("sponsor", PersonType, 0.8, &[]),
    entry("dependent", PersonType, 0.8, &["dependant", "family member"]),
    // time periods (lexical; numeric patterns are regex-driven)
    entry("today", TimePeriod, 0.7, &[]),
    entry("tomorrow", TimePeriod, 0.7, &[]),
    entry("urgent", TimePeriod, 0.7, &["express", "fast track"]),
    entry("working days", TimePeriod, 0.7, &["business days"]),
    entry("this week", TimePeriod, 0.7, &[]),
    entry("this month", TimePeriod, 0.7, &[]),
    // fee types
    entry("fee", FeeType, 0.8, &["charges", "cost"]),
    entry("fine", FeeType, 0.8, &["penalty"]),
    entry("deposit", FeeType, 0.8, &[]),
    entry("refund", FeeType, 0.8, &[]),
    entry("installment", FeeType, 0.8, &["instalment"]),
    // ministries
    entry("ministry of interior", Ministry, 0.9, &["interior ministry", "moi"]),
    entry("ministry of foreign affairs", Ministry, 0.9, &["foreign ministry", "mofa"]),
    entry("ministry of health", Ministry, 0.9, &["health ministry", "mohap"]),
    entry("ministry of human resources", Ministry, 0.9, &["ministry of labour", "labour ministry", "mohre"]),
    entry("ministry of education", Ministry, 0.9, &["education ministry"]),
    entry("ministry of finance", Ministry, 0.9, &["finance ministry"]),
    entry("ministry of justice", Ministry, 0.9, &["justice ministry"]),
    // authorities
    entry("federal authority for identity and citizenship", Authority, 0.9, &["icp", "identity and citizenship"]),
    entry("general directorate of residency", Authority, 0.9, &["gdrfa", "immigration department"]),
    entry("roads and transport authority", Authority, 0.9, &["rta"]),
    entry("dubai electricity and water authority", Authority, 0.9, &["dewa"]),
    entry("federal tax authority", Authority, 0.9, &["tax authority"]),
    entry("dubai health authority", Authority, 0.9, &["health authority"]),
    // emirates
    entry("dubai", Emirate, 0.85, &["emirate of dubai"]),
    entry("abu dhabi", Emirate, 0.85, &[]),
    entry("sharjah", Emirate, 0.85, &[]),
    entry("ajman", Emirate, 0.85, &[]),
    entry("fujairah", Emirate, 0.85, &[]),
    entry("ras al khaimah", Emirate, 0.85, &[]),
    entry("umm al quwain", Emirate, 0.85, &[]),
    // nationalities
    entry("indian", Nationality, 0.8, &[]),
    entry("pakistani", Nationality, 0.8, &[]),
    entry("filipino", Nationality, 0.8, &["philippine"]),
    entry("egyptian", Nationality, 0.8, &[]),
    entry("british", Nationality, 0.8, &["uk national"]),
    entry("american", Nationality, 0.8, &["us national"]),
];

static AR_ENTITIES: &[LexiconEntry] = &[
    // service types
    entry("تاشيره", ServiceType, 0.9, &["فيزا"]),
    entry("هويه الامارات", ServiceType, 0.9, &["بطاقه الهويه", "الهويه الاماراتيه"]),
    entry("رخصه القياده", ServiceType, 0.9, &["رخصه قياده"]),
    entry("جواز السفر", ServiceType, 0.9, &["جواز سفر"]),
    entry("تصريح عمل", ServiceType, 0.9, &["بطاقه العمل"]),
    // document types
    entry("شهاده الميلاد", DocumentType, 0.8, &["شهاده ميلاد"]),
    entry("شهاده عدم الممانعه", DocumentType, 0.8, &[]),
    // locations
    entry("دبي", Location, 0.9, &[]),
    entry("ابوظبي", Location, 0.9, &["ابو ظبي"]),
    entry("الشارقه", Location, 0.9, &[]),
    entry("عجمان", Location, 0.9, &[]),
    entry("راس الخيمه", Location, 0.9, &[]),
    entry("الفجيره", Location, 0.9, &[]),
    entry("ام القيوين", Location, 0.9, &[]),
    entry("العين", Location, 0.9, &[]),
    // person types
    entry("مقيم", PersonType, 0.8, &[]),
    entry("مواطن", PersonType, 0.8, &[]),
    entry("زاير", PersonType, 0.8, &["سايح"]),
    entry("مستثمر", PersonType, 0.8, &[]),
    entry("طالب", PersonType, 0.8, &[]),
    // time periods
    entry("اليوم", TimePeriod, 0.7, &[]),
    entry("غدا", TimePeriod, 0.7, &[]),
    entry("عاجل", TimePeriod, 0.7, &["مستعجل"]),
    // fee types
    entry("رسوم", FeeType, 0.8, &["تكلفه"]),
    entry("غرامه", FeeType, 0.8, &["مخالفه"]),
    // ministries
    entry("وزاره الداخليه", Ministry, 0.9, &["الداخليه"]),
    entry("وزاره الصحه", Ministry, 0.9, &["الصحه"]),
    // emirates
    entry("دبي", Emirate, 0.85, &[]),
    entry("ابوظبي", Emirate, 0.85, &[]),
    entry("الشارقه", Emirate, 0.85, &[]),
    // nationalities
    entry("هندي", Nationality, 0.8, &[]),
    entry("مصري", Nationality, 0.8, &[]),
];

static EN_TRIGGERS: &[IntentTrigger] = &[
    trigger("how to apply", Application, 0.95),
    trigger("apply for", Application, 0.9),
    trigger("apply", Application, 0.8),
    trigger("application", Application, 0.8),
    trigger("register", Application, 0.8),
    trigger("obtain", Application, 0.7),
    trigger("renew", Renewal, 0.9),
    trigger("extend", Renewal, 0.8),
    trigger("expire", Renewal, 0.75),
    trigger("expiry", Renewal, 0.75),
    trigger("cancel", Cancellation, 0.9),
    trigger("terminate", Cancellation, 0.8),
    trigger("pay", Payment, 0.9),
    trigger("how much", Payment, 0.85),
    trigger("fee", Payment, 0.8),
    trigger("cost", Payment, 0.8),
    trigger("fine", Payment, 0.75),
    trigger("charge", Payment, 0.75),
    trigger("status", Status, 0.9),
    trigger("track", Status, 0.85),
    trigger("follow up", Status, 0.8),
    trigger("complain", Complaint, 0.9),
    trigger("report a problem", Complaint, 0.85),
    trigger("tell me about", Information, 0.85),
    trigger("documents required", Information, 0.85),
    trigger("what is", Information, 0.8),
    trigger("information", Information, 0.8),
    trigger("requirements", Information, 0.75),
];

static AR_TRIGGERS: &[IntentTrigger] = &[
    trigger("تجديد", Renewal, 0.9),
    trigger("جدد", Renewal, 0.85),
    trigger("تقديم", Application, 0.85),
    trigger("طلب جديد", Application, 0.85),
    trigger("تسجيل", Application, 0.8),
    trigger("الغاء", Cancellation, 0.9),
    trigger("دفع", Payment, 0.9),
    trigger("رسوم", Payment, 0.8),
    trigger("تكلفه", Payment, 0.8),
    trigger("حاله الطلب", Status, 0.9),
    trigger("تتبع", Status, 0.85),
    trigger("شكوي", Complaint, 0.9),
    trigger("معلومات", Information, 0.8),
    trigger("ما هي", Information, 0.8),
    trigger("استعلام", Information, 0.8),
];

static EN_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "identity",
        keywords: &["emirates id", "identity", "id card", "eid", "passport", "citizenship", "family book"],
        subcategories: &[
            SubcategoryDef { name: "id card", keywords: &["emirates id", "id card", "eid", "identity"] },
            SubcategoryDef { name: "passport", keywords: &["passport", "travel document"] },
            SubcategoryDef { name: "citizenship", keywords: &["citizenship", "naturalization", "family book"] },
        ],
    },
    CategoryDef {
        name: "visa",
        keywords: &["visa", "entry permit", "residence", "residency", "sponsor", "immigration", "golden"],
        subcategories: &[
            SubcategoryDef { name: "new visa", keywords: &["new", "apply", "entry permit", "tourist"] },
            SubcategoryDef { name: "visa renewal", keywords: &["renew", "extend", "expiry"] },
            SubcategoryDef { name: "visa cancellation", keywords: &["cancel", "exit"] },
            SubcategoryDef { name: "golden visa", keywords: &["golden", "long term", "investor"] },
        ],
    },
    CategoryDef {
        name: "transport",
        keywords: &["driving license", "driving", "vehicle", "car", "traffic", "fine", "parking", "metro", "road"],
        subcategories: &[
            SubcategoryDef { name: "driving license", keywords: &["driving license", "driver", "learning permit"] },
            SubcategoryDef { name: "vehicle registration", keywords: &["vehicle", "registration", "ownership"] },
            SubcategoryDef { name: "traffic fines", keywords: &["fine", "penalty", "violation", "black points"] },
            SubcategoryDef { name: "public transport", keywords: &["bus", "metro", "taxi", "nol"] },
        ],
    },
    CategoryDef {
        name: "business",
        keywords: &["trade license", "business", "company", "commercial", "investor", "economic"],
        subcategories: &[
            SubcategoryDef { name: "license issuance", keywords: &["new", "establish", "start", "register"] },
            SubcategoryDef { name: "license renewal", keywords: &["renew", "expiry"] },
            SubcategoryDef { name: "permits", keywords: &["permit", "approval"] },
        ],
    },
    CategoryDef {
        name: "employment",
        keywords: &["work", "labour", "labor", "employment", "salary", "job", "domestic"],
        subcategories: &[
            SubcategoryDef { name: "work permit", keywords: &["work permit", "labour card", "labor card"] },
            SubcategoryDef { name: "contracts", keywords: &["contract", "offer letter"] },
            SubcategoryDef { name: "wages", keywords: &["salary", "wage", "wps"] },
        ],
    },
    CategoryDef {
        name: "health",
        keywords: &["health", "medical", "hospital", "clinic", "insurance", "vaccination", "pharmacy"],
        subcategories: &[
            SubcategoryDef { name: "health card", keywords: &["health card", "medical card"] },
            SubcategoryDef { name: "insurance", keywords: &["insurance", "coverage"] },
            SubcategoryDef { name: "facilities", keywords: &["hospital", "clinic", "pharmacy"] },
        ],
    },
    CategoryDef {
        name: "education",
        keywords: &["school", "university", "education", "student", "scholarship", "tuition"],
        subcategories: &[
            SubcategoryDef { name: "school services", keywords: &["school", "kindergarten"] },
            SubcategoryDef { name: "higher education", keywords: &["university", "college", "scholarship"] },
            SubcategoryDef { name: "equivalency", keywords: &["equivalency", "attestation"] },
        ],
    },
    CategoryDef {
        name: "housing",
        keywords: &["tenancy", "rent", "ejari", "utility", "electricity", "water", "housing", "property"],
        subcategories: &[
            SubcategoryDef { name: "tenancy", keywords: &["tenancy", "rent", "lease", "ejari"] },
            SubcategoryDef { name: "utilities", keywords: &["electricity", "water", "utility", "dewa"] },
        ],
    },
];

static AR_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "identity",
        keywords: &["هويه", "بطاقه الهويه", "جواز"],
        subcategories: &[
            SubcategoryDef { name: "id card", keywords: &["هويه", "بطاقه"] },
            SubcategoryDef { name: "passport", keywords: &["جواز"] },
        ],
    },
    CategoryDef {
        name: "visa",
        keywords: &["تاشيره", "فيزا", "اقامه", "كفاله"],
        subcategories: &[
            SubcategoryDef { name: "new visa", keywords: &["جديده", "سياحيه"] },
            SubcategoryDef { name: "visa renewal", keywords: &["تجديد"] },
            SubcategoryDef { name: "visa cancellation", keywords: &["الغاء"] },
        ],
    },
    CategoryDef {
        name: "transport",
        keywords: &["رخصه القياده", "قياده", "مركبه", "مخالفه"],
        subcategories: &[
            SubcategoryDef { name: "driving license", keywords: &["رخصه"] },
            SubcategoryDef { name: "traffic fines", keywords: &["مخالفه", "غرامه"] },
        ],
    },
    CategoryDef {
        name: "health",
        keywords: &["صحه", "طبي", "مستشفي", "تامين"],
        subcategories: &[
            SubcategoryDef { name: "insurance", keywords: &["تامين"] },
        ],
    },
];

static EN_STOPWORDS: &[&str] = &[
    "the", "a", "an", "i", "my", "me", "we", "our", "you", "your", "to", "for",
    "in", "on", "of", "at", "by", "from", "is", "are", "was", "be", "do",
    "does", "can", "how", "what", "where", "when", "who", "why", "and", "or",
    "with", "it", "this", "that", "want", "need", "please",
];

static AR_STOPWORDS: &[&str] = &[
    "في", "من", "الي", "علي", "عن", "ان", "او", "و", "مع", "هذا", "هذه",
    "انا", "اريد", "كيف", "ما", "هل", "لي", "ثم", "التي", "الذي",
];

lazy_static! {
    static ref EN_PROFILE: LanguageProfile = LanguageProfile {
        entities: EN_ENTITIES,
        intent_triggers: EN_TRIGGERS,
        categories: EN_CATEGORIES,
        stopwords: EN_STOPWORDS.iter().copied().collect(),
    };
    static ref AR_PROFILE: LanguageProfile = LanguageProfile {
        entities: AR_ENTITIES,
        intent_triggers: AR_TRIGGERS,
        categories: AR_CATEGORIES,
        stopwords: AR_STOPWORDS.iter().copied().collect(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::normalizer::normalize;

    #[test]
    fn test_profiles_load() {
        assert!(!profile(Language::En).entities.is_empty());
        assert!(!profile(Language::Ar).entities.is_empty());
    }

    #[test]
    fn test_confidences_in_range() {
        for lang in [Language::En, Language::Ar] {
            for entry in profile(lang).entities {
                assert!(entry.base_confidence > 0.0 && entry.base_confidence <= 1.0);
            }
            for trigger in profile(lang).intent_triggers {
                assert!(trigger.confidence > 0.0 && trigger.confidence <= 1.0);
            }
        }
    }

    #[test]
    fn test_terms_are_stored_normalized() {
        // Lexicon matching runs on normalized text, so every stored term and
        // synonym must be a fixed point of the normalizer.
        for lang in [Language::En, Language::Ar] {
            for entry in profile(lang).entities {
                assert_eq!(normalize(entry.canonical, lang), entry.canonical, "{}", entry.canonical);
                for syn in entry.synonyms {
                    assert_eq!(normalize(syn, lang), *syn, "{syn}");
                }
            }
            for trigger in profile(lang).intent_triggers {
                assert_eq!(normalize(trigger.phrase, lang), trigger.phrase);
            }
        }
    }

    #[test]
    fn test_arabic_coverage_is_subset() {
        assert!(profile(Language::Ar).entities.len() < profile(Language::En).entities.len());
        assert!(profile(Language::Ar).categories.len() < profile(Language::En).categories.len());
    }
}
