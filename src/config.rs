//! HTTP設定と画像取得設定

use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "nmd-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 画像取得の設定
///
/// Unsplashのレート制限（50 req/h）を守るため、リクエスト間に
/// 固定待機を挟む。取得は常に順次実行。
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// 保存先ディレクトリ
    pub out_dir: PathBuf,
    /// リクエスト間の待機時間
    pub delay: Duration,
    /// リトライ回数（リトライ可能なエラーのみ）
    pub retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("public/city"),
            delay: Duration::from_millis(1000),
            retries: 1,
        }
    }
}
