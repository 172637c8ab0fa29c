//! nmd fetch-images コマンド
//!
//! カタログの各都市についてUnsplashで画像を検索し、ローカルへ保存する。
//! レート制限を守るため常に順次実行し、リクエスト間に固定待機を挟む。

use crate::catalog::{Catalog, CityRecord};
use crate::commands::load_catalog;
use crate::config::FetchConfig;
use crate::error::NmdError;
use crate::output::CommandSummary;
use crate::unsplash::{AccessKey, UnsplashClient};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output directory for downloaded images
    #[arg(long, default_value = "public/city")]
    pub out_dir: PathBuf,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Fetch only the first N cities
    #[arg(long)]
    pub limit: Option<usize>,

    /// Unsplash access key (falls back to UNSPLASH_ACCESS_KEY)
    #[arg(long)]
    pub access_key: Option<String>,

    /// Load the catalog from a TOML file instead of the builtin data
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// 1都市分の取得結果
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 取得結果マニフェスト
#[derive(Debug, Serialize)]
pub struct FetchManifest {
    pub fetched_at: DateTime<Utc>,
    pub entries: Vec<ManifestEntry>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;
    let access_key = AccessKey::resolve(args.access_key.as_deref()).map_err(|e| e.to_string())?;

    let config = FetchConfig {
        out_dir: args.out_dir,
        delay: Duration::from_millis(args.delay_ms),
        ..FetchConfig::default()
    };

    fetch_all(&catalog, access_key, &config, args.limit)
        .await
        .map_err(|e| e.to_string())
}

/// 全都市の画像を順次取得
async fn fetch_all(
    catalog: &Catalog,
    access_key: AccessKey,
    config: &FetchConfig,
    limit: Option<usize>,
) -> Result<(), NmdError> {
    std::fs::create_dir_all(&config.out_dir)?;

    let client = UnsplashClient::new(access_key);
    let cities: Vec<&CityRecord> = match limit {
        Some(n) => catalog.cities().iter().take(n).collect(),
        None => catalog.cities().iter().collect(),
    };
    let total = cities.len();

    let mut entries = Vec::new();
    let mut saved = 0usize;
    let mut failed = 0usize;

    for (i, city) in cities.iter().enumerate() {
        let file_name = image_file_name(city);
        println!("[{}/{}] {} ({})", i + 1, total, city.name, city.country);

        match fetch_city(&client, city, &config.out_dir, &file_name, config.retries).await {
            Ok(photo_id) => {
                saved += 1;
                entries.push(ManifestEntry {
                    id: city.id.clone(),
                    name: city.name.clone(),
                    file: file_name,
                    photo_id: Some(photo_id),
                    error: None,
                });
            }
            Err(err) => {
                failed += 1;
                eprintln!("  failed: {}", err);
                entries.push(ManifestEntry {
                    id: city.id.clone(),
                    name: city.name.clone(),
                    file: file_name,
                    photo_id: None,
                    error: Some(err.to_string()),
                });
            }
        }

        // レート制限対策の固定待機（最後の都市の後は不要）
        if i + 1 < total {
            tokio::time::sleep(config.delay).await;
        }
    }

    write_manifest(&config.out_dir, entries)?;

    let summary = CommandSummary::format(saved, failed);
    println!("{} {}", summary.prefix, summary.message);

    Ok(())
}

/// 1都市分の検索とダウンロード（リトライ可能なエラーのみ再試行）
async fn fetch_city(
    client: &UnsplashClient,
    city: &CityRecord,
    out_dir: &Path,
    file_name: &str,
    retries: u32,
) -> Result<String, NmdError> {
    let query = search_query(city);

    let mut attempt = 0;
    loop {
        match try_fetch(client, &query, out_dir, file_name).await {
            Ok(photo_id) => return Ok(photo_id),
            Err(err) if err.is_retryable() && attempt < retries => {
                attempt += 1;
                eprintln!("  retrying ({}/{}): {}", attempt, retries, err);
            }
            Err(err) => return Err(err),
        }
    }
}

async fn try_fetch(
    client: &UnsplashClient,
    query: &str,
    out_dir: &Path,
    file_name: &str,
) -> Result<String, NmdError> {
    let hit = client.search_photo(query).await?;
    let bytes = client.download(&hit.urls.regular).await?;

    // 一時ファイルへ書き込んでから本来のパスへ移動する
    let mut tmp = NamedTempFile::new_in(out_dir)?;
    tmp.write_all(&bytes)?;
    tmp.persist(out_dir.join(file_name))
        .map_err(|e| NmdError::Io(e.error))?;

    Ok(hit.id)
}

/// 検索クエリを組み立てる
fn search_query(city: &CityRecord) -> String {
    format!("{} {} city skyline", city.name, city.country)
}

/// image_path からファイル名部分を取り出す
fn image_file_name(city: &CityRecord) -> String {
    Path::new(&city.image_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("{}.jpg", city.id))
}

/// マニフェストを書き出す
fn write_manifest(out_dir: &Path, entries: Vec<ManifestEntry>) -> Result<(), NmdError> {
    let manifest = FetchManifest {
        fetched_at: Utc::now(),
        entries,
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(out_dir.join("manifest.json"), json)?;
    Ok(())
}

#[cfg(test)]
#[path = "fetch_images_test.rs"]
mod tests;
