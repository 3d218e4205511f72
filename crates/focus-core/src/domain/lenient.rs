//! 古いクライアントが書いたドキュメント向けの寛容な読み込み
//!
//! 列挙値のフィールドに文字列以外（null, 数値, bool, オブジェクト）が入っていても
//! 読み込みは失敗させず、呼び出し側のフォールバック値に寄せる。

use serde::de::{Deserialize, Deserializer, IgnoredAny};

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawTag {
    Name(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// 文字列ならその値、それ以外は `None`
pub(crate) fn tag_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawTag::deserialize(deserializer)? {
        RawTag::Name(name) => Some(name),
        RawTag::Other(_) => None,
    })
}
