use crate::error::SourceError;
use crate::sources::HttpSource;
use engine::{RosterEntry, RosterRecord};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct SleeperRoster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SleeperUser {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// One entry of the NFL player catalogue, keyed by player id.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperPlayer {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl SleeperPlayer {
    pub fn name(&self) -> Option<String> {
        if let Some(full) = self.full_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return Some(full.to_string());
        }

        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (!joined.is_empty()).then_some(joined)
    }
}

/// League membership from the Sleeper API.
pub struct SleeperClient<'h> {
    http: &'h HttpSource,
    base_url: String,
    league_id: String,
}

impl<'h> SleeperClient<'h> {
    pub fn new(
        http: &'h HttpSource,
        base_url: impl Into<String>,
        league_id: impl Into<String>,
    ) -> Self {
        SleeperClient {
            http,
            base_url: base_url.into(),
            league_id: league_id.into(),
        }
    }

    fn url(&self, resource: &str) -> String {
        format!(
            "{}/league/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.league_id,
            resource
        )
    }

    pub async fn fetch_rosters(&self) -> Result<Vec<SleeperRoster>, SourceError> {
        let rosters: Vec<SleeperRoster> = self.http.get_json(&self.url("rosters"), &[]).await?;

        info!("fetched {} rosters from Sleeper", rosters.len());

        Ok(rosters)
    }

    /// user id to display name
    pub async fn fetch_users(&self) -> Result<HashMap<String, String>, SourceError> {
        let users: Vec<SleeperUser> = self.http.get_json(&self.url("users"), &[]).await?;

        let names = Self::user_names(users);

        debug!("fetched {} league users", names.len());

        Ok(names)
    }

    /// The full NFL player catalogue. Large; only fetched when a valuation
    /// row has no player id and must join on name and position.
    pub async fn fetch_players(&self) -> Result<HashMap<String, SleeperPlayer>, SourceError> {
        let url = format!("{}/players/nfl", self.base_url.trim_end_matches('/'));
        let players: HashMap<String, SleeperPlayer> = self.http.get_json(&url, &[]).await?;

        info!("fetched {} catalogue players from Sleeper", players.len());

        Ok(players)
    }

    /// Rosters with owner names. `with_player_names` also fetches the player
    /// catalogue so entries carry the name and position fallback key.
    pub async fn fetch_league(
        &self,
        with_player_names: bool,
    ) -> Result<Vec<RosterRecord>, SourceError> {
        let rosters = self.fetch_rosters().await?;
        let users = self.fetch_users().await?;

        let mut records = Self::roster_records(rosters, &users);

        if with_player_names {
            let players = self.fetch_players().await?;
            let named = Self::attach_player_names(&mut records, &players);
            debug!("attached names to {} rostered players", named);
        }

        Ok(records)
    }

    pub fn user_names(users: Vec<SleeperUser>) -> HashMap<String, String> {
        users
            .into_iter()
            .filter_map(|user| {
                let id = user.user_id.filter(|id| !id.is_empty())?;
                let name = user
                    .display_name
                    .filter(|n| !n.trim().is_empty())
                    .or(user.username.filter(|n| !n.trim().is_empty()))
                    .unwrap_or_else(|| format!("User_{}", id));
                Some((id, name))
            })
            .collect()
    }

    /// Team ids are the zero-padded roster id so lexical order follows roster order.
    /// Owners missing from `users` get an empty display name, which the join
    /// turns into `Team <id>`.
    pub fn roster_records(
        rosters: Vec<SleeperRoster>,
        users: &HashMap<String, String>,
    ) -> Vec<RosterRecord> {
        rosters
            .into_iter()
            .map(|roster| RosterRecord {
                team_id: format!("{:02}", roster.roster_id),
                display_name: roster
                    .owner_id
                    .as_ref()
                    .and_then(|owner| users.get(owner))
                    .cloned()
                    .unwrap_or_default(),
                players: roster
                    .players
                    .unwrap_or_default()
                    .into_iter()
                    .map(RosterEntry::new)
                    .collect(),
            })
            .collect()
    }

    /// Fills name and position on entries that lack them. Returns how many
    /// entries were named.
    pub fn attach_player_names(
        records: &mut [RosterRecord],
        players: &HashMap<String, SleeperPlayer>,
    ) -> usize {
        let mut named = 0;

        for entry in records.iter_mut().flat_map(|r| r.players.iter_mut()) {
            if entry.name.is_some() {
                continue;
            }

            let Some(player) = players.get(entry.player_id.trim()) else {
                continue;
            };

            if let (Some(name), Some(position)) = (player.name(), player.position.clone()) {
                *entry = RosterEntry::new(entry.player_id.clone()).with_name(name, position);
                named += 1;
            }
        }

        named
    }
}
