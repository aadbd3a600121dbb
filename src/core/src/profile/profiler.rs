use crate::club::{Position, TeamId, VALUED_POSITIONS};
use crate::error::ProfileError;
use crate::league::League;
use crate::squad::{LineupConfig, StarterSelector};
use crate::utils::FloatUtils;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionalProfile {
    pub position: Position,
    pub starter_value: f64,
    pub median: f64,
    /// Positive is surplus, negative is need.
    pub delta: f64,
}

/// Value/median/delta row for the FLEX and TOTAL report lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSummary {
    pub value: f64,
    pub median: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamProfile {
    pub team_id: TeamId,
    pub positions: Vec<PositionalProfile>,
    pub flex: SlotSummary,
    pub total: SlotSummary,
}

impl TeamProfile {
    pub fn position(&self, position: Position) -> Option<&PositionalProfile> {
        self.positions.iter().find(|p| p.position == position)
    }

    pub fn delta(&self, position: Position) -> f64 {
        self.position(position).map(|p| p.delta).unwrap_or(0.0)
    }

    /// Up to `limit` positions with a positive delta, largest first.
    pub fn surplus_positions(&self, limit: usize) -> Vec<Position> {
        let mut surplus: Vec<&PositionalProfile> =
            self.positions.iter().filter(|p| p.delta > 0.0).collect();
        surplus.sort_by(|a, b| b.delta.total_cmp(&a.delta));
        surplus.into_iter().take(limit).map(|p| p.position).collect()
    }

    /// Up to `limit` positions with a negative delta, most negative first.
    pub fn need_positions(&self, limit: usize) -> Vec<Position> {
        let mut needs: Vec<&PositionalProfile> =
            self.positions.iter().filter(|p| p.delta < 0.0).collect();
        needs.sort_by(|a, b| a.delta.total_cmp(&b.delta));
        needs.into_iter().take(limit).map(|p| p.position).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueProfile {
    teams: Vec<TeamProfile>,
}

impl LeagueProfile {
    pub fn teams(&self) -> &[TeamProfile] {
        &self.teams
    }

    pub fn team(&self, id: &TeamId) -> Option<&TeamProfile> {
        self.teams.iter().find(|t| &t.team_id == id)
    }

    pub fn median(&self, position: Position) -> f64 {
        self.teams
            .first()
            .and_then(|t| t.position(position))
            .map(|p| p.median)
            .unwrap_or(0.0)
    }
}

pub struct LeagueProfiler;

impl LeagueProfiler {
    /// Starter value per position for every team, compared with the league median.
    pub fn profile(league: &League, lineup: &LineupConfig) -> Result<LeagueProfile, ProfileError> {
        struct Raw {
            team_id: TeamId,
            values: Vec<f64>,
            flex: f64,
            total: f64,
        }

        let mut raw = Vec::with_capacity(league.len());

        for team in league.teams() {
            for (position, _) in lineup.mandatory_positions() {
                if team.count_at(position) == 0 && !lineup.is_flex_eligible(position) {
                    return Err(ProfileError::MissingMandatoryPosition {
                        team: team.id.clone(),
                        position,
                    });
                }
            }

            let assignment = StarterSelector::select(&team.players(), lineup);

            raw.push(Raw {
                team_id: team.id.clone(),
                values: VALUED_POSITIONS
                    .iter()
                    .map(|&position| assignment.position_value(position))
                    .collect(),
                flex: assignment.flex_value(),
                total: assignment.total_value(),
            });
        }

        let medians: Vec<f64> = (0..VALUED_POSITIONS.len())
            .map(|idx| FloatUtils::median(&raw.iter().map(|r| r.values[idx]).collect::<Vec<_>>()))
            .collect();
        let flex_median = FloatUtils::median(&raw.iter().map(|r| r.flex).collect::<Vec<_>>());
        let total_median = FloatUtils::median(&raw.iter().map(|r| r.total).collect::<Vec<_>>());

        debug!(
            "league medians over {} teams: {}",
            raw.len(),
            VALUED_POSITIONS
                .iter()
                .zip(&medians)
                .map(|(position, median)| format!("{}={:.1}", position, median))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let teams = raw
            .into_iter()
            .map(|r| TeamProfile {
                team_id: r.team_id,
                positions: VALUED_POSITIONS
                    .iter()
                    .zip(r.values.iter().zip(&medians))
                    .map(|(&position, (&starter_value, &median))| PositionalProfile {
                        position,
                        starter_value,
                        median,
                        delta: starter_value - median,
                    })
                    .collect(),
                flex: SlotSummary {
                    value: r.flex,
                    median: flex_median,
                    delta: r.flex - flex_median,
                },
                total: SlotSummary {
                    value: r.total,
                    median: total_median,
                    delta: r.total - total_median,
                },
            })
            .collect();

        Ok(LeagueProfile { teams })
    }
}
