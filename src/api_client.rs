use std::env;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::client::Client;
use crate::error::{EnvVarError, Error};
use crate::types::*;

pub const API_KEY_VAR: &str = "STEAM_API_KEY";

pub const COMMUNITY_BASE_URL: &str = "https://steamcommunity.com";
pub const API_BASE_URL: &str = "https://api.steampowered.com";

const MEMBERS_PATH: &str = "/groups/$GROUP/memberslistxml/?xml=1";
const PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002/";

pub struct SteamApiClient {
    client: reqwest::Client,
    api_key: String,
    group: String,
    community_base: String,
    api_base: String,
}

impl SteamApiClient {
    pub fn new(api_key: String, group: &str, timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            api_key,
            group: group.into(),
            community_base: COMMUNITY_BASE_URL.into(),
            api_base: API_BASE_URL.into(),
        })
    }

    // requires STEAM_API_KEY env var
    // can use dotenv
    pub fn from_env(group: &str, timeout: Duration) -> Result<Self, Error> {
        let api_key = require_api_key(env::var(API_KEY_VAR))?;
        Self::new(api_key, group, timeout)
    }

    pub fn with_base_urls(mut self, community_base: &str, api_base: &str) -> Self {
        self.community_base = community_base.trim_end_matches('/').into();
        self.api_base = api_base.trim_end_matches('/').into();
        self
    }
}

/// An empty key is as good as none.
fn require_api_key(value: Result<String, env::VarError>) -> Result<String, EnvVarError> {
    match value {
        Ok(key) if key.trim().is_empty() => {
            Err(EnvVarError::new(API_KEY_VAR, env::VarError::NotPresent))
        }
        Ok(key) => Ok(key),
        Err(e) => Err(EnvVarError::new(API_KEY_VAR, e)),
    }
}

#[async_trait]
impl Client for SteamApiClient {
    async fn fetch_members_xml(&self) -> Result<String, Error> {
        let url = format!(
            "{}{}",
            self.community_base,
            MEMBERS_PATH.replace("$GROUP", &self.group)
        );
        debug!("GET {url}");

        Ok(self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }

    async fn fetch_player_summaries(&self, ids: &[String]) -> Result<Vec<PlayerSummary>, Error> {
        let url = format!("{}{}", self.api_base, PLAYER_SUMMARIES_PATH);
        debug!("GET {url} ({} steamids)", ids.len());

        let steamids = ids.join(",");
        let body = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str()), ("steamids", steamids.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let summaries = serde_json::from_str::<PlayerSummaries>(&body)?;
        Ok(summaries.response.players)
    }
}
