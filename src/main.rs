use anyhow::Result;
use clap::Parser;
use restaurant_order_cli::{
    cli::{Args, CliApp},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        config.env_filter()?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let app = CliApp::new(config);
    app.run(args)
}
