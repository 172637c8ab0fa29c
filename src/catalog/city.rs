//! 都市レコード

use crate::continent::Continent;
use crate::safety::Safety;
use serde::{Deserialize, Serialize};

/// 都市1件のレコード
///
/// カタログ構築後は不変。`image_path` は静的アセット解決用の
/// 不透明な相対パスで、本体ではI/Oを行わない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// 一意な識別子
    pub id: String,
    /// 順位（カタログ内で一意、既定の表示順）
    pub rank: u32,
    pub name: String,
    pub country: String,
    pub continent: Continent,
    pub image_path: String,
    /// 総合スコア（5点満点）
    pub overall_score: f64,
    /// 月額生活費（USD）
    pub cost_per_month: u32,
    /// 回線速度（Mbps）
    pub internet_speed: u32,
    /// 好評率（0–100）
    pub liked_percentage: u8,
    pub safety: Safety,
    /// 平均気温（°C）
    pub temperature: i32,
    /// 大気質指数（低いほど良い）
    pub aqi: u32,
}
