//! TaskContext - タスクの文脈タグ（表示用のみ、ランキングには影響しない）

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TaskContext {
    Home,
    Study,
    Work,
    Errands,

    /// 未知の値もここに寄せる（フォームのデフォルトと同じ）
    #[default]
    General,
}

impl TaskContext {
    /// フォームに並べる順
    pub const ALL: [TaskContext; 5] = [
        TaskContext::General,
        TaskContext::Home,
        TaskContext::Study,
        TaskContext::Work,
        TaskContext::Errands,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskContext::General => "General",
            TaskContext::Home => "Home",
            TaskContext::Study => "Study",
            TaskContext::Work => "Work",
            TaskContext::Errands => "Errands",
        }
    }
}

impl fmt::Display for TaskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = lenient::tag_name(deserializer)?;
        Ok(TaskContext::ALL
            .into_iter()
            .find(|context| name.as_deref() == Some(context.as_str()))
            .unwrap_or_default())
    }
}
