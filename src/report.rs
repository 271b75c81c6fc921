use log::{info, warn};

use crate::client::Client;
use crate::error::Error;
use crate::types::{PlayerList, PlayerSummary, Report};

/// Looks up the summaries for `ids` in one request and orders them by steamid.
///
/// No request is made for an empty roster.
pub async fn build_report(client: &impl Client, ids: &[String]) -> Result<Report, Error> {
    if ids.is_empty() {
        warn!("no steam ids to query");
        return Ok(Report::default());
    }

    info!("fetching player summaries...");
    let players = client.fetch_player_summaries(ids).await?;

    Ok(Report {
        response: PlayerList {
            players: sort_players(players),
        },
    })
}

/// Stable ascending sort on the numeric steamid.
pub fn sort_players(mut players: Vec<PlayerSummary>) -> Vec<PlayerSummary> {
    players.sort_by_key(PlayerSummary::numeric_id);
    players
}
