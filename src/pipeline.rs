use crate::cli::Cli;
use crate::config::AppConfig;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use database::{FantasyCalcClient, HttpSource, RetryPolicy, SleeperClient, ValuesCsvLoader};
use engine::utils::TimeEstimation;
use engine::{
    League, LeagueBuilder, LeagueError, LeagueProfile, LeagueProfiler, RosterRecord, TradeMarket,
    TradeOutcome, ValuationRecord,
};
use log::info;
use report::{ReportAssembler, ReportOptions};
use std::path::Path;
use std::time::Instant;

const PREVIEW_CHARS: usize = 1000;

pub struct Analysis {
    pub league: League,
    pub profile: LeagueProfile,
    pub outcome: TradeOutcome,
}

pub async fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    let started = Instant::now();
    let (rosters, valuations) = load_sources(cli.values.as_deref(), config).await?;
    info!("sources loaded: {} ms", started.elapsed().as_millis());

    let (analysis, estimated) = TimeEstimation::estimate(|| analyze(&rosters, &valuations, config));
    let analysis = analysis.wrap_err("analysing league")?;
    info!("analysis finished: {} ms", estimated);

    let options = ReportOptions {
        generated_on: chrono::Local::now().date_naive(),
        ascii_only: config.output.ascii_only,
    };
    let text = ReportAssembler::render(
        &analysis.league,
        &analysis.profile,
        &analysis.outcome,
        &options,
    )
    .wrap_err("rendering report")?;

    if cli.dry_run {
        println!("{}", preview(&text));
        return Ok(());
    }

    write_report(&config.output.path, &text)?;
    info!("report written to {}", config.output.path.display());

    Ok(())
}

async fn load_sources(
    values: Option<&Path>,
    config: &AppConfig,
) -> Result<(Vec<RosterRecord>, Vec<ValuationRecord>)> {
    let http = HttpSource::new(RetryPolicy::from_config(&config.sources))
        .wrap_err("building http client")?;

    let valuations = match values {
        Some(path) => ValuesCsvLoader::load(path).wrap_err("loading values file")?,
        None => FantasyCalcClient::new(
            &http,
            config.sources.fantasycalc_url.as_str(),
            config.sources.fantasycalc.clone(),
        )
        .fetch_values()
        .await
        .wrap_err("fetching player values")?,
    };

    let rosters = SleeperClient::new(
        &http,
        config.sources.sleeper_base_url.as_str(),
        config.sources.league_id.as_str(),
    )
    .fetch_league(needs_player_names(&valuations))
    .await
    .wrap_err("fetching league rosters")?;

    Ok((rosters, valuations))
}

/// Rows without a player id can only join on name and position.
pub fn needs_player_names(valuations: &[ValuationRecord]) -> bool {
    valuations
        .iter()
        .any(|v| v.player_id.as_deref().is_none_or(|id| id.trim().is_empty()))
}

/// Join, profile and match. No I/O.
pub fn analyze(
    rosters: &[RosterRecord],
    valuations: &[ValuationRecord],
    config: &AppConfig,
) -> std::result::Result<Analysis, LeagueError> {
    let league = LeagueBuilder::join(rosters, valuations, config.sources.team_count)?;
    let profile = LeagueProfiler::profile(&league, &config.lineup)?;

    let outcome = TradeMarket::new(&league, &profile, &config.lineup).run(
        &config.trades,
        &config.relaxation,
        config.output.max_alternates,
    );

    info!(
        "{} trades selected at {}{}",
        outcome.trades.len(),
        outcome.tier,
        if outcome.degraded { " (partial)" } else { "" }
    );

    Ok(Analysis {
        league,
        profile,
        outcome,
    })
}

pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}\n... ({} characters total)", head, text.chars().count())
}

pub fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating {}", parent.display()))?;
    }

    std::fs::write(path, text).wrap_err_with(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{DataIntegrityError, ProfileError, RosterEntry};

    fn records(teams: usize, with_qb: bool) -> (Vec<RosterRecord>, Vec<ValuationRecord>) {
        let mut rosters = Vec::new();
        let mut valuations = Vec::new();

        for n in 1..=teams {
            let team = format!("{:02}", n);
            let mut entries = Vec::new();
            let mut positions = vec!["RB", "RB", "WR", "WR", "TE"];
            if with_qb || n > 1 {
                positions.push("QB");
            }

            for (idx, position) in positions.iter().enumerate() {
                let id = format!("{}-{}", team, idx);
                valuations.push(ValuationRecord {
                    player_id: Some(id.clone()),
                    name: format!("Player {}", id),
                    position: position.to_string(),
                    value: 10.0 + idx as f64,
                });
                entries.push(RosterEntry::new(id));
            }

            rosters.push(RosterRecord {
                team_id: team,
                display_name: String::new(),
                players: entries,
            });
        }

        (rosters, valuations)
    }

    #[test]
    fn identical_rosters_degrade_without_failing() {
        let (rosters, valuations) = records(12, true);

        let analysis = analyze(&rosters, &valuations, &AppConfig::default()).unwrap();

        assert_eq!(analysis.league.len(), 12);
        assert!(analysis.outcome.degraded);
        assert!(analysis.outcome.trades.is_empty());
        assert_eq!(analysis.outcome.unmatched.len(), 12);
    }

    #[test]
    fn integrity_and_profile_errors_abort() {
        let (rosters, valuations) = records(11, true);
        let err = analyze(&rosters, &valuations, &AppConfig::default()).err().unwrap();
        assert!(matches!(
            err,
            LeagueError::DataIntegrity(DataIntegrityError::TeamCount { .. })
        ));

        let (rosters, valuations) = records(12, false);
        let err = analyze(&rosters, &valuations, &AppConfig::default()).err().unwrap();
        assert!(matches!(
            err,
            LeagueError::Profile(ProfileError::MissingMandatoryPosition { .. })
        ));
    }

    #[test]
    fn player_names_are_requested_only_for_id_less_rows() {
        let (_, mut valuations) = records(1, true);
        assert!(!needs_player_names(&valuations));

        valuations[0].player_id = Some("  ".to_string());
        assert!(needs_player_names(&valuations));

        valuations[0].player_id = None;
        assert!(needs_player_names(&valuations));
    }

    #[test]
    fn preview_is_truncated_with_total_length() {
        let text = "x".repeat(1500);

        let shown = preview(&text);

        assert!(shown.starts_with(&"x".repeat(1000)));
        assert!(shown.ends_with("... (1500 characters total)"));
    }

    #[test]
    fn report_parent_directories_are_created() {
        let dir = std::env::temp_dir().join(format!("weekly_trades_{}", std::process::id()));
        let path = dir.join("nested").join("report.txt");

        write_report(&path, "hello").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
