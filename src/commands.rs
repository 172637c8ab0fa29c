use crate::catalog::Catalog;
use crate::cli::{Cli, Command};
use std::path::Path;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args),
        Command::Info(args) => info::run(args),
        Command::Continents(args) => continents::run(args),
        Command::Browse(args) => browse::run(args),
        Command::FetchImages(args) => fetch_images::run(args).await,
    }
}

/// カタログを読み込む（--catalog 指定時はTOML、なければ組み込み）
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, crate::error::NmdError> {
    match path {
        Some(p) => Catalog::from_toml_path(p),
        None => Ok(Catalog::builtin()),
    }
}

pub mod browse;
pub mod continents;
pub mod fetch_images;
pub mod info;
pub mod list;
