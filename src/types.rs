use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A player record cut down to the fields the report keeps.
///
/// Deserializing drops every other key of the API record. Absent keys stay `None`
/// and are left out again on output; a key present as `null` is kept as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub steamid: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub personaname: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub profileurl: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub avatarfull: Option<Value>,
}

// only called for keys that exist, so `null` becomes `Some(Value::Null)`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PlayerSummary {
    /// Integer value of `steamid`, 0 when missing or unparseable.
    pub fn numeric_id(&self) -> i128 {
        match &self.steamid {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .or_else(|| n.as_f64().map(|f| f.trunc() as i128))
                .unwrap_or(0),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerSummaries {
    #[serde(default, deserialize_with = "object_or_empty")]
    pub response: PlayerList,
}

// a `response` that is not an object carries no players
fn object_or_empty<'de, D>(deserializer: D) -> Result<PlayerList, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => {
            PlayerList::deserialize(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(PlayerList::default()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerList {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub response: PlayerList,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_projection_drops_extra_fields() {
        let summaries: PlayerSummaries = serde_json::from_value(json!({
            "response": {
                "players": [{
                    "steamid": "76561197960435530",
                    "communityvisibilitystate": 3,
                    "personaname": "Robin",
                    "profileurl": "https://steamcommunity.com/id/robinwalker/",
                    "avatar": "https://avatars.steamstatic.com/small.jpg",
                    "avatarfull": "https://avatars.steamstatic.com/full.jpg",
                    "realname": "Robin Walker"
                }]
            }
        }))
        .unwrap();

        let out = serde_json::to_value(&summaries.response.players[0]).unwrap();
        assert_eq!(
            out,
            json!({
                "steamid": "76561197960435530",
                "personaname": "Robin",
                "profileurl": "https://steamcommunity.com/id/robinwalker/",
                "avatarfull": "https://avatars.steamstatic.com/full.jpg"
            })
        );
    }

    #[test]
    fn test_projection_does_not_fill_missing_fields() {
        let player: PlayerSummary =
            serde_json::from_value(json!({ "steamid": "1", "personastate": 0 })).unwrap();

        assert_eq!(
            serde_json::to_string(&player).unwrap(),
            r#"{"steamid":"1"}"#
        );
    }

    #[test]
    fn test_projection_keeps_present_nulls() {
        let player: PlayerSummary =
            serde_json::from_value(json!({ "steamid": "1", "personaname": null })).unwrap();

        assert_eq!(player.personaname, Some(Value::Null));
        assert_eq!(player.profileurl, None);
        assert_eq!(
            serde_json::to_string(&player).unwrap(),
            r#"{"steamid":"1","personaname":null}"#
        );
    }

    #[test]
    fn test_response_of_wrong_type_is_empty() {
        for body in [r#"{"response":"x"}"#, r#"{"response":null}"#, r#"{"response":[1]}"#] {
            let summaries: PlayerSummaries = serde_json::from_str(body).unwrap();
            assert!(summaries.response.players.is_empty(), "{body}");
        }
    }

    #[test]
    fn test_missing_response_path_is_empty() {
        let no_response: PlayerSummaries = serde_json::from_str("{}").unwrap();
        assert!(no_response.response.players.is_empty());

        let no_players: PlayerSummaries = serde_json::from_str(r#"{"response":{}}"#).unwrap();
        assert!(no_players.response.players.is_empty());
    }

    #[test]
    fn test_numeric_id() {
        let id = |v: Option<Value>| PlayerSummary {
            steamid: v,
            ..Default::default()
        }
        .numeric_id();

        assert_eq!(id(Some(json!("76561197960435530"))), 76561197960435530);
        assert_eq!(id(Some(json!(42))), 42);
        assert_eq!(id(Some(json!("not a number"))), 0);
        assert_eq!(id(Some(json!("-5"))), -5);
        assert_eq!(id(Some(json!(-5))), -5);
        assert_eq!(id(Some(json!(u64::MAX))), u64::MAX as i128);
        assert_eq!(id(Some(json!("18446744073709551616"))), 18446744073709551616);
        assert_eq!(id(None), 0);
    }

    #[test]
    fn test_empty_report_shape() {
        assert_eq!(
            serde_json::to_value(Report::default()).unwrap(),
            json!({ "response": { "players": [] } })
        );
    }
}
