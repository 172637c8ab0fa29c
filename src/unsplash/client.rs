use super::AccessKey;
use crate::config::HttpConfig;
use crate::error::{NmdError, Result};
use crate::http::download_with_progress;
use serde::Deserialize;

/// 検索ヒット1件
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoHit {
    pub id: String,
    pub urls: PhotoUrls,
}

/// 画像URL一式
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    /// 横幅1080pxの標準サイズ
    pub regular: String,
}

/// 検索レスポンス
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<PhotoHit>,
}

/// Unsplash APIクライアント
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    access_key: AccessKey,
}

impl UnsplashClient {
    /// 新しいクライアントを作成
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            client: HttpConfig::default().build_client(),
            base_url: "https://api.unsplash.com".to_string(),
            access_key,
        }
    }

    /// 検索クエリに一致する横長写真を1件検索
    pub async fn search_photo(&self, query: &str) -> Result<PhotoHit> {
        let url = format!("{}/search/photos", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .header("Authorization", self.access_key.to_client_id())
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NmdError::Api { status, message });
        }

        let search: SearchResponse = serde_json::from_str(&response.text().await?)?;
        search
            .results
            .into_iter()
            .next()
            .ok_or_else(|| NmdError::NoSearchResult(query.to_string()))
    }

    /// 画像をダウンロード
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        download_with_progress(&self.client, url).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
