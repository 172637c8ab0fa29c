mod card;
mod catalog;
mod cli;
mod commands;
mod config;
mod continent;
mod error;
mod http;
mod output;
mod safety;
mod tui;
mod unsplash;
mod view;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
