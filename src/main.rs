use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use primeorder::cli::Cli;
use primeorder::i18n::Catalog;
use primeorder::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("loading config")?;

    init_tracing(&config.logging).context("opening log file")?;

    let catalog = Catalog::load(config.i18n.locale_path.as_deref(), config.i18n.default_locale)
        .context("loading translations")?;
    let route = cli.initial_route(&config);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        route = %route.as_path(),
        "starting primeorder"
    );

    primeorder::ui::run(&config, Arc::new(catalog), route)?;
    Ok(())
}
