use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weekly_trades")]
#[command(version)]
#[command(
    about = "Weekly fair, mutually beneficial trade suggestions for a 12-team league",
    long_about = None
)]
pub struct Cli {
    /// Player values CSV (sleeper_id,player,position,value) used instead of the valuation API
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// League id on the roster platform
    #[arg(long, env = "WEEKLY_TRADES_LEAGUE_ID")]
    pub league: Option<String>,

    /// Report output path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Extra configuration file layered over config/default.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a preview of the report instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
