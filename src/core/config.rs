use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MAX_RESULTS, DEFAULT_OVERALL_DEADLINE_SECS, DEFAULT_PORTAL_URL,
    DEFAULT_SOURCE_TIMEOUT_SECS,
};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DalilConfig {

    pub portal_base_url: String,
    pub user_agent: String,

    // The upstream sources historically had no timeout at all; a hung source
    // would stall the whole aggregation. Both bounds are configurable.
    pub source_timeout_secs: u64,
    pub overall_deadline_secs: u64,


    pub max_results: usize,
    pub default_language: String,
}

impl DalilConfig {

    pub fn new(portal_base_url: &str) -> Self {
        Self {
            portal_base_url: portal_base_url.to_string(),
            user_agent: format!("dalil/{}", env!("CARGO_PKG_VERSION")),
            source_timeout_secs: DEFAULT_SOURCE_TIMEOUT_SECS,
            overall_deadline_secs: DEFAULT_OVERALL_DEADLINE_SECS,
            max_results: DEFAULT_MAX_RESULTS,
            default_language: "en".to_string(),
        }
    }


    pub fn from_env() -> Self {
        let mut config = Self::new(
            &std::env::var("DALIL_PORTAL_URL").unwrap_or_else(|_| DEFAULT_PORTAL_URL.to_string()),
        );

        if let Ok(secs) = std::env::var("DALIL_SOURCE_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.source_timeout_secs = secs;
            }
        }
        if let Ok(secs) = std::env::var("DALIL_OVERALL_DEADLINE_SECS") {
            if let Ok(secs) = secs.parse() {
                config.overall_deadline_secs = secs;
            }
        }
        if let Ok(max) = std::env::var("DALIL_MAX_RESULTS") {
            if let Ok(max) = max.parse() {
                config.max_results = max;
            }
        }
        if let Ok(lang) = std::env::var("DALIL_DEFAULT_LANGUAGE") {
            config.default_language = lang;
        }

        config
    }
}

impl Default for DalilConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORTAL_URL)
    }
}
