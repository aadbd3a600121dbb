mod cli;
mod config;
mod pipeline;

use clap::Parser;
use cli::Cli;
use color_eyre::eyre::WrapErr;
use config::AppConfig;
use env_logger::Env;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(if cli.verbose { "debug" } else { "info" }),
    )
    .init();

    let mut config = AppConfig::load(cli.config.as_deref()).wrap_err("loading configuration")?;
    config.apply_cli(&cli);

    pipeline::run(&cli, &config).await
}
