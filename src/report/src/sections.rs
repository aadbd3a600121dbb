use engine::{CandidateTrade, League, LeagueProfile, Player, TeamProfile, TradeOutcome, TradeSide};
use std::fmt::{self, Write};

const SNAPSHOT_LIMIT: usize = 2;
const NEEDS_LIMIT: usize = 3;

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    writeln!(out)
}

fn strongest(profile: &TeamProfile) -> Vec<String> {
    profile
        .surplus_positions(SNAPSHOT_LIMIT)
        .into_iter()
        .map(|p| format!("{} {:+.1}", p, profile.delta(p)))
        .collect()
}

fn weakest(profile: &TeamProfile) -> Vec<String> {
    profile
        .need_positions(SNAPSHOT_LIMIT)
        .into_iter()
        .map(|p| format!("{} {:+.1}", p, profile.delta(p)))
        .collect()
}

pub fn snapshot(league: &League, profile: &LeagueProfile) -> Result<String, fmt::Error> {
    let mut out = String::new();
    heading(&mut out, "TEAM STRENGTHS")?;

    for team in profile.teams() {
        writeln!(out, "{}:", league.team_name(&team.team_id))?;

        let strong = strongest(team);
        if !strong.is_empty() {
            writeln!(out, "  Strong: {}", strong.join(", "))?;
        }

        let weak = weakest(team);
        if !weak.is_empty() {
            writeln!(out, "  Weak: {}", weak.join(", "))?;
        }

        writeln!(
            out,
            "  FLEX {:.1} ({:+.1}) | TOTAL {:.1} ({:+.1})",
            team.flex.value, team.flex.delta, team.total.value, team.total.delta
        )?;
        writeln!(out)?;
    }

    Ok(out)
}

fn player_line(out: &mut String, arrow: &str, player: &Player) -> fmt::Result {
    writeln!(out, "    {} {} {:.1}", arrow, player, player.value)
}

fn sends(out: &mut String, league: &League, side: &TradeSide, arrow: &str) -> fmt::Result {
    writeln!(
        out,
        "  {} sends ({:.1}):",
        league.team_name(&side.team_id),
        side.value_sent
    )?;
    for player in &side.sends {
        player_line(out, arrow, player)?;
    }
    Ok(())
}

fn gains(league: &League, trade: &CandidateTrade) -> String {
    format!(
        "{} {:+.1}, {} {:+.1}",
        league.team_name(&trade.side_a.team_id),
        trade.side_a.starter_gain,
        league.team_name(&trade.side_b.team_id),
        trade.side_b.starter_gain
    )
}

fn title(league: &League, trade: &CandidateTrade) -> String {
    format!(
        "{} <-> {} ({})",
        league.team_name(&trade.side_a.team_id),
        league.team_name(&trade.side_b.team_id),
        trade.shape
    )
}

pub fn trades(league: &League, outcome: &TradeOutcome) -> Result<String, fmt::Error> {
    let mut out = String::new();
    heading(&mut out, "TRADE SUGGESTIONS")?;

    if outcome.trades.is_empty() {
        writeln!(out, "No trades available.")?;
        return Ok(out);
    }

    for (idx, trade) in outcome.trades.iter().enumerate() {
        writeln!(out, "Trade #{}: {}", idx + 1, title(league, trade))?;
        sends(&mut out, league, &trade.side_a, "->")?;
        sends(&mut out, league, &trade.side_b, "<-")?;
        writeln!(
            out,
            "  Fairness: {:.1}% | Score: {:.1}",
            trade.fairness_pct, trade.score
        )?;
        for flag in &trade.risk_flags {
            writeln!(out, "  Risk: {}", flag)?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn needs(profile: &LeagueProfile, side: &TradeSide) -> String {
    let needs: Vec<String> = profile
        .team(&side.team_id)
        .map(|t| t.need_positions(NEEDS_LIMIT))
        .unwrap_or_default()
        .into_iter()
        .map(|p| p.to_string())
        .collect();

    if needs.is_empty() {
        "None".to_string()
    } else {
        needs.join(", ")
    }
}

pub fn rationales(
    league: &League,
    profile: &LeagueProfile,
    outcome: &TradeOutcome,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if outcome.trades.is_empty() {
        return Ok(out);
    }

    heading(&mut out, "TRADE RATIONALES")?;

    for (idx, trade) in outcome.trades.iter().enumerate() {
        writeln!(out, "Trade #{} Rationale:", idx + 1)?;
        writeln!(
            out,
            "{} <-> {}",
            league.team_name(&trade.side_a.team_id),
            league.team_name(&trade.side_b.team_id)
        )?;
        writeln!(out, "{}", "-".repeat(30))?;
        writeln!(
            out,
            "{} needs: {} | {} needs: {}",
            league.team_name(&trade.side_a.team_id),
            needs(profile, &trade.side_a),
            league.team_name(&trade.side_b.team_id),
            needs(profile, &trade.side_b)
        )?;
        writeln!(
            out,
            "Fair value exchange ({:.1}% difference)",
            trade.fairness_pct
        )?;
        writeln!(out, "Starter gains: {}", gains(league, trade))?;
        writeln!(out)?;
    }

    Ok(out)
}

pub fn unmatched(league: &League, outcome: &TradeOutcome) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if outcome.unmatched.is_empty() {
        return Ok(out);
    }

    heading(&mut out, "UNMATCHED TEAMS")?;
    for team_id in &outcome.unmatched {
        writeln!(out, "- {}", league.team_name(team_id))?;
    }

    Ok(out)
}

pub fn alternates(league: &League, outcome: &TradeOutcome) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if outcome.alternates.is_empty() {
        return Ok(out);
    }

    heading(&mut out, "ALTERNATES")?;

    for (idx, trade) in outcome.alternates.iter().enumerate() {
        writeln!(out, "Alt #{}: {}", idx + 1, title(league, trade))?;
        sends(&mut out, league, &trade.side_a, "->")?;
        sends(&mut out, league, &trade.side_b, "<-")?;
        writeln!(
            out,
            "  Fairness: {:.1}% | Gains: {} | Score: {:.1}",
            trade.fairness_pct,
            gains(league, trade),
            trade.score
        )?;
        if !trade.is_accepted() {
            let reasons: Vec<String> = trade.rejections.iter().map(|r| r.to_string()).collect();
            writeln!(out, "  Rejected: {}", reasons.join("; "))?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{
        BundleShape, LeagueProfiler, LineupConfig, Position, Rejection, RelaxationTier, Team,
        TeamId, TradeSettings,
    };

    fn player(id: &str, position: Position, value: f64, team: &str) -> Player {
        Player::new(id.into(), id.to_uppercase(), position, value, team.into())
    }

    fn league() -> League {
        League::new(vec![
            Team::new("01".into(), "Alpha".to_string(), Vec::new()),
            Team::new("02".into(), "Beta".to_string(), Vec::new()),
            Team::new("03".into(), "Gamma".to_string(), Vec::new()),
        ])
    }

    fn rejected_trade() -> CandidateTrade {
        CandidateTrade {
            shape: BundleShape::TwoForOne,
            side_a: TradeSide {
                team_id: "01".into(),
                sends: vec![
                    player("a1", Position::RunningBack, 20.0, "01"),
                    player("a2", Position::TightEnd, 5.0, "01"),
                ],
                value_sent: 25.0,
                starter_gain: 4.0,
                lineup_changed: true,
            },
            side_b: TradeSide {
                team_id: "03".into(),
                sends: vec![player("c1", Position::WideReceiver, 18.0, "03")],
                value_sent: 18.0,
                starter_gain: 6.0,
                lineup_changed: true,
            },
            fairness_pct: 28.0,
            risk_flags: Vec::new(),
            score: 7.2,
            rejections: vec![Rejection::FairnessExceeded {
                fairness_pct: 28.0,
                threshold_pct: 20.0,
            }],
        }
    }

    fn degraded_outcome() -> TradeOutcome {
        TradeOutcome {
            tier: RelaxationTier::strict(&TradeSettings::default()),
            trades: Vec::new(),
            total_weight: 0.0,
            degraded: true,
            unmatched: vec![TeamId::new("01"), TeamId::new("02"), TeamId::new("03")],
            alternates: vec![rejected_trade()],
            attempts: 8,
        }
    }

    #[test]
    fn alternates_show_rejection_reasons() {
        let text = alternates(&league(), &degraded_outcome()).unwrap();

        assert!(text.starts_with("ALTERNATES\n==========\n"));
        assert!(text.contains("Alt #1: Alpha <-> Gamma (2-for-1)"));
        assert!(text.contains("  Alpha sends (25.0):\n    -> A1 (RB) 20.0\n    -> A2 (TE) 5.0\n"));
        assert!(text.contains("Gains: Alpha +4.0, Gamma +6.0 | Score: 7.2"));
        assert!(text.contains("Rejected: fairness 28.0% over 20.0%"));
    }

    #[test]
    fn empty_trade_list_has_a_placeholder_and_no_rationales() {
        let outcome = degraded_outcome();
        let profile =
            LeagueProfiler::profile(&League::new(Vec::new()), &LineupConfig::default()).unwrap();

        assert!(trades(&league(), &outcome).unwrap().contains("No trades available."));
        assert!(rationales(&league(), &profile, &outcome).unwrap().is_empty());
        assert_eq!(
            unmatched(&league(), &outcome).unwrap(),
            "UNMATCHED TEAMS\n===============\n\n- Alpha\n- Beta\n- Gamma\n"
        );
    }
}
