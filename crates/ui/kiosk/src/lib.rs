pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod pages;
pub mod router;
pub mod style;
pub mod tui;

use crate::{app::App, cli::Cli};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
pub async fn run() -> Result<()> {
    crate::errors::init()?;
    crate::logging::init()?;

    let args = Cli::parse();
    let mut app = App::new(args)?;
    app.run().await?;
    Ok(())
}
