use crate::sections;
use chrono::NaiveDate;
use engine::{League, LeagueProfile, TradeOutcome};
use log::debug;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub generated_on: NaiveDate,
    /// Strip every non-ASCII character from the rendered text.
    pub ascii_only: bool,
}

/// Plain-text weekly report: snapshot, trades, rationales and, for degraded
/// runs, unmatched teams and alternates.
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn render(
        league: &League,
        profile: &LeagueProfile,
        outcome: &TradeOutcome,
        options: &ReportOptions,
    ) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "WEEKLY TRADE SUGGESTIONS")?;
        writeln!(out, "Generated: {}", options.generated_on.format("%Y-%m-%d"))?;
        writeln!(
            out,
            "Teams: {} | Trades: {} | Relaxation: {}",
            league.len(),
            outcome.trades.len(),
            outcome.tier
        )?;
        if outcome.degraded {
            writeln!(
                out,
                "No full set of trades was found; showing the largest set available."
            )?;
        }

        let body = [
            sections::snapshot(league, profile)?,
            sections::trades(league, outcome)?,
            sections::rationales(league, profile, outcome)?,
            sections::unmatched(league, outcome)?,
            sections::alternates(league, outcome)?,
        ];

        for section in body.iter().filter(|s| !s.is_empty()) {
            writeln!(out)?;
            writeln!(out)?;
            out.push_str(section);
        }

        if options.ascii_only {
            let before = out.len();
            out.retain(|c| c.is_ascii());
            if out.len() < before {
                debug!("stripped {} bytes of non-ascii text", before - out.len());
            }
        }

        Ok(out)
    }
}
