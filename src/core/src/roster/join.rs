use crate::club::{Player, PlayerId, Position, Team, TeamId};
use crate::error::DataIntegrityError;
use crate::league::League;
use crate::roster::{RosterRecord, ValuationRecord};
use crate::transfers::MAX_MATCHING_NODES;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Joins roster membership with market valuations into one `League`.
///
/// Valuations are matched by player id first. Rows without an id match on the
/// fallback key (normalized name + position) when the roster entry carries a name.
/// Rostered players without any valuation are dropped.
pub struct LeagueBuilder;

struct ValuationIndex<'v> {
    by_id: HashMap<&'v str, (&'v ValuationRecord, Position)>,
    by_name: HashMap<(String, Position), (&'v ValuationRecord, Position)>,
}

impl LeagueBuilder {
    pub fn join(
        rosters: &[RosterRecord],
        valuations: &[ValuationRecord],
        expected_teams: usize,
    ) -> Result<League, DataIntegrityError> {
        if expected_teams > MAX_MATCHING_NODES {
            return Err(DataIntegrityError::TooManyTeams {
                actual: expected_teams,
                max: MAX_MATCHING_NODES,
            });
        }

        if rosters.is_empty() {
            return Err(DataIntegrityError::EmptyRosters);
        }

        if rosters.len() != expected_teams {
            return Err(DataIntegrityError::TeamCount {
                expected: expected_teams,
                actual: rosters.len(),
            });
        }

        let index = Self::index_valuations(valuations)?;

        let mut owners: HashMap<&str, TeamId> = HashMap::new();
        let mut teams: Vec<Team> = Vec::with_capacity(rosters.len());
        let mut unvalued = 0usize;

        for (row, roster) in rosters.iter().enumerate() {
            let team_key = roster.team_id.trim();
            if team_key.is_empty() {
                return Err(DataIntegrityError::MissingTeamId { index: row });
            }

            let team_id = TeamId::new(team_key);
            if teams.iter().any(|t| t.id == team_id) {
                return Err(DataIntegrityError::DuplicateTeam(team_id));
            }

            let mut players = Vec::with_capacity(roster.players.len());

            for entry in &roster.players {
                let player_key = entry.player_id.trim();
                if player_key.is_empty() {
                    return Err(DataIntegrityError::MissingPlayerId { team: team_id });
                }

                if let Some(first) = owners.get(player_key) {
                    return Err(DataIntegrityError::DuplicatePlayer {
                        player: PlayerId::new(player_key),
                        first: first.clone(),
                        second: team_id,
                    });
                }
                owners.insert(player_key, team_id.clone());

                let Some((valuation, position)) = index.lookup(
                    player_key,
                    entry.name.as_deref(),
                    entry.position.as_deref(),
                ) else {
                    debug!(
                        "player {} on team {} has no valuation, dropped",
                        player_key, team_id
                    );
                    unvalued += 1;
                    continue;
                };

                players.push(Player::new(
                    PlayerId::new(player_key),
                    valuation.name.trim().to_string(),
                    position,
                    valuation.value,
                    team_id.clone(),
                ));
            }

            let name = match roster.display_name.trim() {
                "" => format!("Team {}", team_id),
                name => name.to_string(),
            };

            teams.push(Team::new(team_id, name, players));
        }

        let league = League::new(teams);

        if unvalued > 0 {
            warn!("{} rostered players had no valuation and were dropped", unvalued);
        }

        info!(
            "joined {} teams with {} valued players",
            league.len(),
            league.player_count()
        );

        Ok(league)
    }

    fn index_valuations(
        valuations: &[ValuationRecord],
    ) -> Result<ValuationIndex<'_>, DataIntegrityError> {
        let mut index = ValuationIndex {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        };

        for valuation in valuations {
            if !valuation.value.is_finite() || valuation.value < 0.0 {
                return Err(DataIntegrityError::InvalidValue {
                    key: valuation
                        .player_id
                        .clone()
                        .unwrap_or_else(|| valuation.name.clone()),
                    value: valuation.value,
                });
            }

            let position = match valuation.position.parse::<Position>() {
                Ok(position) => position,
                Err(e) => {
                    debug!("skipping valuation for {}: {}", valuation.name, e);
                    continue;
                }
            };

            let id = valuation.player_id.as_deref().map(str::trim).unwrap_or("");
            if !id.is_empty() {
                if index.by_id.contains_key(id) {
                    warn!("duplicate valuation for player {}, keeping the first", id);
                } else {
                    index.by_id.insert(id, (valuation, position));
                }
            }

            index
                .by_name
                .entry((normalize_name(&valuation.name), position))
                .or_insert((valuation, position));
        }

        if index.by_id.is_empty() && index.by_name.is_empty() {
            return Err(DataIntegrityError::EmptyValuations);
        }

        Ok(index)
    }
}

impl<'v> ValuationIndex<'v> {
    fn lookup(
        &self,
        player_id: &str,
        name: Option<&str>,
        position: Option<&str>,
    ) -> Option<(&'v ValuationRecord, Position)> {
        if let Some(found) = self.by_id.get(player_id) {
            return Some(*found);
        }

        let name = name?;
        let position = position?.parse::<Position>().ok()?;

        self.by_name
            .get(&(normalize_name(name), position))
            .copied()
    }
}

/// Lowercased alphanumerics only, so "D.J. Moore" and "DJ Moore" share a key.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterEntry;

    fn valuation(id: Option<&str>, name: &str, position: &str, value: f64) -> ValuationRecord {
        ValuationRecord {
            player_id: id.map(str::to_string),
            name: name.to_string(),
            position: position.to_string(),
            value,
        }
    }

    fn roster(team_id: &str, name: &str, entries: Vec<RosterEntry>) -> RosterRecord {
        RosterRecord {
            team_id: team_id.to_string(),
            display_name: name.to_string(),
            players: entries,
        }
    }

    #[test]
    fn joins_by_id_and_falls_back_to_name_and_position() {
        let valuations = vec![
            valuation(Some("100"), "Joe Burrow", "QB", 5200.0),
            valuation(None, "D.J. Moore", "WR", 4100.0),
        ];
        let rosters = vec![
            roster("1", "Alpha", vec![RosterEntry::new("100")]),
            roster(
                "2",
                "",
                vec![
                    RosterEntry::new("200").with_name("DJ Moore", "WR"),
                    RosterEntry::new("300"),
                ],
            ),
        ];

        let league = LeagueBuilder::join(&rosters, &valuations, 2).unwrap();

        let alpha = league.team(&"1".into()).unwrap();
        assert_eq!(alpha.players[0].name, "Joe Burrow");
        assert_eq!(alpha.players[0].position, Position::Quarterback);

        let second = league.team(&"2".into()).unwrap();
        assert_eq!(second.name, "Team 2");
        assert_eq!(second.players.len(), 1);
        assert_eq!(second.players[0].id.as_str(), "200");
        assert_eq!(second.players[0].value, 4100.0);
    }

    #[test]
    fn rejects_wrong_team_count() {
        let valuations = vec![valuation(Some("1"), "A", "QB", 1.0)];
        let rosters = vec![roster("1", "Alpha", vec![RosterEntry::new("1")])];

        let err = LeagueBuilder::join(&rosters, &valuations, 12).unwrap_err();

        assert_eq!(
            err,
            DataIntegrityError::TeamCount {
                expected: 12,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_player_on_two_rosters() {
        let valuations = vec![valuation(Some("1"), "A", "QB", 1.0)];
        let rosters = vec![
            roster("1", "Alpha", vec![RosterEntry::new("1")]),
            roster("2", "Beta", vec![RosterEntry::new("1")]),
        ];

        let err = LeagueBuilder::join(&rosters, &valuations, 2).unwrap_err();

        assert!(matches!(err, DataIntegrityError::DuplicatePlayer { .. }));
    }

    #[test]
    fn rejects_non_finite_or_negative_values() {
        let rosters = vec![roster("1", "Alpha", Vec::new()), roster("2", "Beta", Vec::new())];

        let nan = vec![valuation(Some("1"), "A", "QB", f64::NAN)];
        assert!(matches!(
            LeagueBuilder::join(&rosters, &nan, 2),
            Err(DataIntegrityError::InvalidValue { .. })
        ));

        let negative = vec![valuation(Some("1"), "A", "QB", -4.0)];
        assert!(matches!(
            LeagueBuilder::join(&rosters, &negative, 2),
            Err(DataIntegrityError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_empty_sources_and_duplicate_teams() {
        let valuations = vec![valuation(Some("1"), "A", "QB", 1.0)];

        assert_eq!(
            LeagueBuilder::join(&[], &valuations, 0).unwrap_err(),
            DataIntegrityError::EmptyRosters
        );

        let rosters = vec![roster("1", "Alpha", Vec::new()), roster("1", "Again", Vec::new())];
        assert_eq!(
            LeagueBuilder::join(&rosters, &valuations, 2).unwrap_err(),
            DataIntegrityError::DuplicateTeam("1".into())
        );

        let rosters = vec![roster("1", "Alpha", Vec::new()), roster("2", "Beta", Vec::new())];
        assert_eq!(
            LeagueBuilder::join(&rosters, &[], 2).unwrap_err(),
            DataIntegrityError::EmptyValuations
        );
    }

    #[test]
    fn normalizes_punctuation_and_case() {
        assert_eq!(normalize_name("D.J. Moore"), normalize_name("dj moore"));
        assert_eq!(normalize_name("Ja'Marr Chase"), "jamarrchase");
    }
}
