use async_trait::async_trait;

use crate::error::Error;
use crate::types::PlayerSummary;

#[async_trait]
pub trait Client {
    /// Raw member list XML of the configured group.
    async fn fetch_members_xml(&self) -> Result<String, Error>;

    /// One batched summaries request for every id in `ids`.
    async fn fetch_player_summaries(&self, ids: &[String]) -> Result<Vec<PlayerSummary>, Error>;
}
