//! 大陸の列挙と選択状態
//!
//! カタログとフィルタオプションが共有する閉じた大陸集合。
//! "all" はレコードに付く値ではなく、選択状態（`Selection::All`）と
//! 文字列パース境界にのみ存在する。

use crate::error::{NmdError, Result};
use serde::{Deserialize, Serialize};

/// 大陸
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Continent {
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Africa,
    Oceania,
}

impl Continent {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Asia => "asia",
            Continent::Europe => "europe",
            Continent::NorthAmerica => "north-america",
            Continent::SouthAmerica => "south-america",
            Continent::Africa => "africa",
            Continent::Oceania => "oceania",
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Africa => "Africa",
            Continent::Oceania => "Oceania",
        }
    }

    /// 全大陸を取得
    pub fn all() -> &'static [Continent] {
        &[
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::SouthAmerica,
            Continent::Africa,
            Continent::Oceania,
        ]
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// フィルタ選択状態
///
/// "all" センチネルを大陸型に混ぜず、タグ付きの変種として表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// 全大陸
    #[default]
    All,
    /// 特定の大陸のみ
    Only(Continent),
}

impl Selection {
    /// "all" または大陸識別子をパース
    ///
    /// 大文字小文字と前後の空白は無視する。未知の値は
    /// `UnknownContinent` で拒否し、呼び出し側の状態は変えない。
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Ok(Selection::All);
        }
        Continent::all()
            .iter()
            .find(|c| c.as_str() == normalized)
            .map(|c| Selection::Only(*c))
            .ok_or_else(|| NmdError::UnknownContinent(input.to_string()))
    }

    /// 選択に一致する大陸かどうか
    pub fn matches(&self, continent: Continent) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(c) => *c == continent,
        }
    }

    /// 識別子文字列を取得
    pub fn value(&self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Only(c) => c.as_str(),
        }
    }
}

/// 大陸フィルタオプション
#[derive(Debug, Clone, Copy)]
pub struct ContinentOption {
    pub selection: Selection,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// フィルタオプション一覧（並び順 = ボタン・タブの表示順）
pub const CONTINENT_OPTIONS: &[ContinentOption] = &[
    ContinentOption {
        selection: Selection::All,
        label: "All",
        glyph: "🌍",
    },
    ContinentOption {
        selection: Selection::Only(Continent::Asia),
        label: "Asia",
        glyph: "🌏",
    },
    ContinentOption {
        selection: Selection::Only(Continent::Europe),
        label: "Europe",
        glyph: "🌍",
    },
    ContinentOption {
        selection: Selection::Only(Continent::NorthAmerica),
        label: "North America",
        glyph: "🌎",
    },
    ContinentOption {
        selection: Selection::Only(Continent::SouthAmerica),
        label: "South America",
        glyph: "🌎",
    },
    ContinentOption {
        selection: Selection::Only(Continent::Africa),
        label: "Africa",
        glyph: "🌍",
    },
    ContinentOption {
        selection: Selection::Only(Continent::Oceania),
        label: "Oceania",
        glyph: "🌏",
    },
];

#[cfg(test)]
#[path = "continent_test.rs"]
mod tests;
