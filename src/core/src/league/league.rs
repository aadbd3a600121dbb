use crate::club::{Player, PlayerId, Team, TeamId};

/// One league snapshot for a single run. Teams are held in `TeamId` order so
/// every downstream iteration is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    teams: Vec<Team>,
}

impl League {
    pub fn new(mut teams: Vec<Team>) -> Self {
        teams.sort_by(|a, b| a.id.cmp(&b.id));
        League { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn team_index(&self, id: &TeamId) -> Option<usize> {
        self.teams.iter().position(|t| &t.id == id)
    }

    pub fn team_name<'a>(&'a self, id: &'a TeamId) -> &'a str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or(id.as_str())
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.teams.iter().find_map(|t| t.player(id))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.players.len()).sum()
    }
}
