//! Binary crate for the weather web service.
//!
//! This crate focuses on:
//! - Process startup (env, logging, CLI flags)
//! - The HTTP routes and their handlers
//! - Rendering reports into HTML pages

use clap::Parser;

mod cli;
mod handlers;
mod server;
mod templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Cli::parse();
    server::run(args).await
}
