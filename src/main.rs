use bubbletea_rs::Program;
use clap::Parser;
use rolodex::config::{Args, Config};
use rolodex::{app, logging, App};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::try_from(Args::parse())?;

    if logging::init(&config)? {
        tracing::info!(endpoint = %config.endpoint, results = config.results, "starting");
    }

    app::install_config(config);

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    tracing::info!("exiting");
    Ok(())
}
