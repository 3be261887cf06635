#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod html;
mod prelude;
mod quantity;
mod report;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, compare},
    prelude::*,
    tables::build_power_tiers_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => {
            compare(&args).await?;
        }
        Command::Tiers => {
            println!("{}", build_power_tiers_table());
        }
    }

    info!("done!");
    Ok(())
}
