use std::time::Duration;

use clap::Parser;
use log::info;

use crate::api_client::{SteamApiClient, API_BASE_URL, COMMUNITY_BASE_URL};
use crate::client::Client;
use crate::error::Error;
use crate::members::parse_steam_ids;
use crate::report::build_report;
use crate::types::Report;

const DEFAULT_GROUP: &str = "fieldfuckers";

/// Lists the members of a Steam community group with their public profile data.
///
/// The Steam Web API key is read from STEAM_API_KEY.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cmd {
    /// Group URL name, as in steamcommunity.com/groups/<GROUP>
    #[arg(long, env = "STEAM_GROUP", default_value = DEFAULT_GROUP)]
    pub group: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    #[arg(long, hide = true, default_value = COMMUNITY_BASE_URL)]
    pub community_url: String,

    #[arg(long, hide = true, default_value = API_BASE_URL)]
    pub api_url: String,
}

/// Roster fetch, id extraction and summaries lookup, in that order.
pub async fn load_report(client: &impl Client) -> Result<Report, Error> {
    info!("fetching group member list...");
    let xml = client.fetch_members_xml().await?;

    info!("parsing steam ids...");
    let ids = parse_steam_ids(&xml)?;
    info!("found {} members", ids.len());

    build_report(client, &ids).await
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = SteamApiClient::from_env(&self.group, Duration::from_secs(self.timeout))?
            .with_base_urls(&self.community_url, &self.api_url);

        let report = load_report(&client).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);

        Ok(())
    }
}
