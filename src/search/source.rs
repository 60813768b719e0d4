use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;
use tracing::debug;

use crate::core::config::DalilConfig;
use crate::core::error::Result;
use crate::nlp::models::{EntityType, RecognizedEntity};

use super::models::ServiceRecord;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SourceId {

    GovernmentPortal,
    IdentityAuthority,
    ResidencyDirectorate,
    TransportAuthority,
    HealthAuthority,
    LabourMinistry,
}


#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}


#[async_trait]
pub trait ServiceSource: Send + Sync {
    fn id(&self) -> SourceId;


    async fn fetch(&self, query: &str) -> std::result::Result<Vec<ServiceRecord>, SourceError>;
}


pub struct HttpServiceSource {
    id: SourceId,
    client: reqwest::Client,
    base_url: String,
}

impl HttpServiceSource {
    pub fn new(id: SourceId, base_url: &str, config: &DalilConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            id,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ServiceSource for HttpServiceSource {
    fn id(&self) -> SourceId {
        self.id
    }

    async fn fetch(&self, query: &str) -> std::result::Result<Vec<ServiceRecord>, SourceError> {
        let url = format!("{}/services", self.base_url);
        debug!("Fetching {} for: {}", self.id, query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let records: Vec<ServiceRecord> = response.json().await?;
        debug!("Source {} returned {} records", self.id, records.len());
        Ok(records)
    }
}


pub struct StaticSource {
    id: SourceId,
    records: Vec<ServiceRecord>,
}

impl StaticSource {
    pub fn new(id: SourceId, records: Vec<ServiceRecord>) -> Self {
        Self { id, records }
    }


    pub fn empty(id: SourceId) -> Self {
        Self::new(id, Vec::new())
    }
}

#[async_trait]
impl ServiceSource for StaticSource {
    fn id(&self) -> SourceId {
        self.id
    }

    async fn fetch(&self, _query: &str) -> std::result::Result<Vec<ServiceRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

// Maps recognized entities to the registries worth querying. The general
// portal is always included.
pub fn select_sources(entities: &[RecognizedEntity]) -> Vec<SourceId> {
    let mut sources = vec![SourceId::GovernmentPortal];
    let push = |sources: &mut Vec<SourceId>, id: SourceId| {
        if !sources.contains(&id) {
            sources.push(id);
        }
    };

    for entity in entities {
        let value = entity.normalized_value.as_str();
        match entity.entity_type {
            EntityType::ServiceType => {
                if value.contains("emirates id") || value.contains("passport") || value.contains("هويه") {
                    push(&mut sources, SourceId::IdentityAuthority);
                }
                if value.contains("visa") || value.contains("تاشيره") {
                    push(&mut sources, SourceId::ResidencyDirectorate);
                }
                if value.contains("driving") || value.contains("vehicle") || value.contains("رخصه") {
                    push(&mut sources, SourceId::TransportAuthority);
                }
                if value.contains("health") {
                    push(&mut sources, SourceId::HealthAuthority);
                }
                if value.contains("work permit") || value.contains("تصريح عمل") {
                    push(&mut sources, SourceId::LabourMinistry);
                }
            }
            EntityType::Ministry => {
                if value.contains("interior") || value.contains("الداخليه") {
                    push(&mut sources, SourceId::IdentityAuthority);
                }
                if value.contains("health") || value.contains("الصحه") {
                    push(&mut sources, SourceId::HealthAuthority);
                }
                if value.contains("human resources") {
                    push(&mut sources, SourceId::LabourMinistry);
                }
            }
            EntityType::Authority => {
                if value.contains("identity") {
                    push(&mut sources, SourceId::IdentityAuthority);
                }
                if value.contains("residency") {
                    push(&mut sources, SourceId::ResidencyDirectorate);
                }
                if value.contains("transport") {
                    push(&mut sources, SourceId::TransportAuthority);
                }
                if value.contains("health") {
                    push(&mut sources, SourceId::HealthAuthority);
                }
            }
            _ => {}
        }
    }

    sources
}
