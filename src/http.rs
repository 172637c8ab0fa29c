//! 共通HTTPヘルパー

use crate::error::{NmdError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

/// プログレスバー付きダウンロード
pub async fn download_with_progress(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(NmdError::Api { status, message });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Downloading...")
                .unwrap(),
        );
        pb
    };

    let bytes = response.bytes().await?;
    pb.finish_and_clear();

    Ok(bytes.to_vec())
}
