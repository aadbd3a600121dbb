use crate::error::SourceError;
use crate::filter::ValuationFilter;
use crate::sources::{FantasyCalcParams, HttpSource};
use engine::ValuationRecord;
use log::info;
use serde::Deserialize;

/// The values endpoint answers with either a bare list or `{"players": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValuesPayload {
    List(Vec<ValueEntry>),
    Wrapped { players: Vec<ValueEntry> },
}

#[derive(Debug, Deserialize)]
struct ValueEntry {
    #[serde(default)]
    player: PlayerInfo,
    #[serde(rename = "redraftValue", default)]
    redraft_value: f64,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerInfo {
    #[serde(rename = "sleeperId", default)]
    sleeper_id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    position: String,
}

/// Market valuations from FantasyCalc, redraft values only.
pub struct FantasyCalcClient<'h> {
    http: &'h HttpSource,
    url: String,
    params: FantasyCalcParams,
}

impl<'h> FantasyCalcClient<'h> {
    pub fn new(http: &'h HttpSource, url: impl Into<String>, params: FantasyCalcParams) -> Self {
        FantasyCalcClient {
            http,
            url: url.into(),
            params,
        }
    }

    pub async fn fetch_values(&self) -> Result<Vec<ValuationRecord>, SourceError> {
        let payload: serde_json::Value = self.http.get_json(&self.url, &self.params.query()).await?;

        let values = Self::parse(payload)?;

        info!("fetched {} player values from FantasyCalc", values.len());

        Ok(values)
    }

    pub fn parse(payload: serde_json::Value) -> Result<Vec<ValuationRecord>, SourceError> {
        let entries = match serde_json::from_value::<ValuesPayload>(payload) {
            Ok(ValuesPayload::List(entries)) => entries,
            Ok(ValuesPayload::Wrapped { players }) => players,
            Err(e) => {
                return Err(SourceError::Malformed(format!(
                    "unexpected FantasyCalc payload: {}",
                    e
                )));
            }
        };

        let records = entries
            .into_iter()
            .map(|entry| ValuationRecord {
                player_id: entry
                    .player
                    .sleeper_id
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty()),
                name: entry.player.name,
                position: entry.player.position,
                value: entry.redraft_value,
            })
            .collect();

        Ok(ValuationFilter::apply(records))
    }
}
