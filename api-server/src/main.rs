mod api;
mod data;
mod models;


use models::config::Config;
use models::context::{Context, ContextPointer};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use std::sync::Arc;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = Config::load()?;
    let context: ContextPointer = Arc::new(Context::from_config(config));

    log::info!(
        "Capital Compass API running on port {}",
        context.config().port()
    );

    api::rocket(context).launch().await?;

    Ok(())
}
