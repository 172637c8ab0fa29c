use clap::{Parser, Subcommand};

use crate::commands::{browse, continents, fetch_images, info, list};

#[derive(Debug, Parser)]
#[command(name = "nmd")]
#[command(about = "Nomad City Catalog CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List cities in the catalog
    List(list::Args),

    /// Show details for a single city
    Info(info::Args),

    /// List continent filter options
    Continents(continents::Args),

    /// Browse cities interactively
    Browse(browse::Args),

    /// Fetch placeholder city images from Unsplash
    FetchImages(fetch_images::Args),
}
