mod api;
mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod logging;
mod output;
mod product;
mod search;
mod session;

use clap::Parser;
use error::ErrorFormatter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;
    logging::init(verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
