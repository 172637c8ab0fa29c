//! 安全度ティア
//!
//! high/medium/low の三段階評価。表示ラベルと色トークンは固定の
//! 対応表（High→success / Medium→warning / Low→danger）を使う。

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// 安全度
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    High,
    Medium,
    Low,
}

impl Safety {
    /// 表示ラベルを取得
    pub fn label(&self) -> &'static str {
        match self {
            Safety::High => "High",
            Safety::Medium => "Medium",
            Safety::Low => "Low",
        }
    }

    /// 色トークンを取得
    pub fn color_token(&self) -> &'static str {
        match self {
            Safety::High => "success",
            Safety::Medium => "warning",
            Safety::Low => "danger",
        }
    }

    /// 端末表示用に色付けしたラベル
    pub fn colored_label(&self) -> String {
        match self {
            Safety::High => self.label().green().to_string(),
            Safety::Medium => self.label().yellow().to_string(),
            Safety::Low => self.label().red().to_string(),
        }
    }
}

impl std::fmt::Display for Safety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
#[path = "safety_test.rs"]
mod tests;
