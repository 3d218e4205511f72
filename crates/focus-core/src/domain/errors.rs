//! Errors - コアのエラー型
//!
//! 永続化層の障害（接続断・書き込み競合など）は `StoreError` に閉じ込め、
//! ここでは呼び出し側の入力ミスとストア由来のエラーを区別するだけにします。

use thiserror::Error;

use super::ids::TaskId;
use crate::ports::StoreError;

#[derive(Debug, Error)]
pub enum FocusError {
    /// 呼び出し側が渡した値が不正（負の limit、未知の importance での保存など）
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// 空（空白のみ）のタイトルは保存しない
    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error(transparent)]
    Store(StoreError),
}

impl FocusError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        FocusError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<StoreError> for FocusError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => FocusError::TaskNotFound(id),
            other => FocusError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_task_not_found() {
        let err = FocusError::from(StoreError::NotFound(TaskId::new("doc-1")));
        assert!(matches!(err, FocusError::TaskNotFound(ref id) if id.as_str() == "doc-1"));
    }

    #[test]
    fn other_store_errors_are_wrapped() {
        let err = FocusError::from(StoreError::Unavailable("timeout".to_string()));

        assert!(matches!(err, FocusError::Store(StoreError::Unavailable(_))));
        assert_eq!(err.to_string(), "store unavailable: timeout");
    }
}
