use serde::{Deserialize, Serialize};

/// Query parameters sent to the valuation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FantasyCalcParams {
    pub is_dynasty: bool,
    pub num_qbs: u8,
    pub num_teams: u8,
    pub ppr: f32,
}

impl Default for FantasyCalcParams {
    fn default() -> Self {
        FantasyCalcParams {
            is_dynasty: false,
            num_qbs: 1,
            num_teams: 12,
            ppr: 1.0,
        }
    }
}

impl FantasyCalcParams {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isDynasty", self.is_dynasty.to_string()),
            ("numQbs", self.num_qbs.to_string()),
            ("numTeams", self.num_teams.to_string()),
            ("ppr", self.ppr.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub league_id: String,
    /// Teams the roster source must return.
    pub team_count: usize,
    pub sleeper_base_url: String,
    pub fantasycalc_url: String,
    pub fantasycalc: FantasyCalcParams,
    pub timeout_secs: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            league_id: "1240782642371104768".to_string(),
            team_count: 12,
            sleeper_base_url: "https://api.sleeper.app/v1".to_string(),
            fantasycalc_url: "https://api.fantasycalc.com/values/current".to_string(),
            fantasycalc: FantasyCalcParams::default(),
            timeout_secs: 30,
            max_retries: 2,
            retry_delay_ms: 1000,
        }
    }
}
