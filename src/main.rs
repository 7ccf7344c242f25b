mod cli;

use clap::{Parser, crate_version};
use flurry::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => args.run()?,
        Command::Breakdown(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
