use crate::cli::Cli;
use config::{Config, ConfigError, Environment, File};
use database::SourceConfig;
use engine::{LineupConfig, RelaxationConfig, TradeSettings};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub ascii_only: bool,
    pub max_alternates: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from("weekly_trades_output.txt"),
            ascii_only: true,
            max_alternates: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sources: SourceConfig,
    pub lineup: LineupConfig,
    pub trades: TradeSettings,
    pub relaxation: RelaxationConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Built-in defaults, then `config/default.toml`, then `extra`, then
    /// `WEEKLY_TRADES__SECTION__KEY` environment variables.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from("config", extra)
    }

    pub fn load_from<P: AsRef<Path>>(
        config_dir: P,
        extra: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(config_dir.as_ref().join("default.toml")).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("WEEKLY_TRADES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Command-line flags win over every configuration layer.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(league) = &cli.league {
            self.sources.league_id = league.clone();
        }

        if let Some(out) = &cli.out {
            self.output.path = out.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use config::FileFormat;
    use engine::{BundleShape, Position};

    const PARTIAL: &str = r#"
[lineup]
flex_slots = 2

[lineup.starters]
QB = 1
RB = 3
WR = 2
TE = 1

[trades]
fairness_threshold_pct = 10.0
bundle_shapes = ["1-for-1"]

[output]
max_alternates = 2
"#;

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(PARTIAL, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.lineup.flex_slots, 2);
        assert_eq!(config.lineup.required(Position::RunningBack), 3);
        assert_eq!(config.trades.fairness_threshold_pct, 10.0);
        assert_eq!(config.trades.bundle_shapes, vec![BundleShape::OneForOne]);
        assert_eq!(config.trades.min_starter_gain, 3.0);
        assert_eq!(config.relaxation, RelaxationConfig::default());
        assert_eq!(config.output.max_alternates, 2);
        assert!(config.output.ascii_only);
        assert_eq!(config.sources.team_count, 12);
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let config = AppConfig::load_from("/nonexistent/config", None).unwrap();

        assert_eq!(config.lineup, LineupConfig::default());
        assert_eq!(config.output.path, PathBuf::from("weekly_trades_output.txt"));
    }

    #[test]
    fn cli_flags_override_configuration() {
        let mut config = AppConfig::default();
        let cli = Cli::parse_from(["weekly_trades", "--league", "999", "--out", "reports/wk1.txt"]);

        config.apply_cli(&cli);

        assert_eq!(config.sources.league_id, "999");
        assert_eq!(config.output.path, PathBuf::from("reports/wk1.txt"));
    }
}
