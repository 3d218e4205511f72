//! Importance - タスクの優先度
//!
//! 選択可能なのは High / Medium / Low の 3 段階のみ。
//! ストアから読んだドキュメントに未知の値が入っていても読み込みは失敗させず、
//! `Unknown` として扱います（ランキングでは Low より下）。

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Importance {
    High,
    Medium,
    Low,

    /// 未知の値・欠損値。フォームからは選べない。
    Unknown,
}

impl Importance {
    /// フォームで選択できる順（High, Medium, Low）
    pub const LEVELS: [Importance; 3] = [Importance::High, Importance::Medium, Importance::Low];

    /// ランキング用の重み。大きいほど先頭に並ぶ。
    pub const fn weight(self) -> u8 {
        match self {
            Importance::High => 3,
            Importance::Medium => 2,
            Importance::Low => 1,
            Importance::Unknown => 0,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Importance::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
            Importance::Unknown => "Unknown",
        }
    }

    /// serde の欠損値用
    pub(crate) fn missing() -> Self {
        Importance::Unknown
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文字列からの変換は失敗しない（未知の値は `Unknown`）。
impl FromStr for Importance {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "High" => Importance::High,
            "Medium" => Importance::Medium,
            "Low" => Importance::Low,
            _ => Importance::Unknown,
        })
    }
}

/// 文字列以外（null や数値）も `Unknown` として読む
impl<'de> Deserialize<'de> for Importance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = lenient::tag_name(deserializer)?;
        Ok(name
            .and_then(|name| Importance::from_str(&name).ok())
            .unwrap_or(Importance::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::high("\"High\"", Importance::High)]
    #[case::medium("\"Medium\"", Importance::Medium)]
    #[case::low("\"Low\"", Importance::Low)]
    #[case::lowercase("\"high\"", Importance::Unknown)]
    #[case::garbage("\"Urgent!!\"", Importance::Unknown)]
    #[case::null("null", Importance::Unknown)]
    #[case::number("2", Importance::Unknown)]
    #[case::boolean("true", Importance::Unknown)]
    #[case::object("{\"level\": \"High\"}", Importance::Unknown)]
    fn deserializes_known_and_unknown_values(#[case] raw: &str, #[case] expected: Importance) {
        let parsed: Importance = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn weights_follow_level_order() {
        let weights: Vec<u8> = Importance::LEVELS.iter().map(|i| i.weight()).collect();
        assert_eq!(weights, vec![3, 2, 1]);
        assert!(Importance::Unknown.weight() < Importance::Low.weight());
    }

    #[test]
    fn from_str_never_fails() {
        assert_eq!("Medium".parse::<Importance>(), Ok(Importance::Medium));
        assert_eq!("".parse::<Importance>(), Ok(Importance::Unknown));
    }
}
