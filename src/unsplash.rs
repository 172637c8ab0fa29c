//! Unsplash API連携
//!
//! 都市画像の検索とダウンロード。セットアップ時の一回限りの
//! データ準備用で、表示パスからは使われない。

mod access_key;
mod client;

pub use access_key::AccessKey;
pub use client::{PhotoHit, UnsplashClient};
