//! UI からストアへの書き込み命令
//!
//! 書き込みはランキングを経由しない。結果は購読中のスナップショットとして戻ってくる。

use crate::domain::{FocusError, TaskId};
use crate::form::{FormCommand, FormState};
use crate::ports::TaskStore;

/// フォームを保存し、成功したら空のフォームを返す
///
/// 失敗したときはエラーを返し、フォームはそのまま（呼び出し側が保持している）。
/// 更新の失敗を新規作成で埋め合わせることはしない。
pub async fn save_form<S>(store: &S, form: &FormState) -> Result<FormState, FocusError>
where
    S: TaskStore + ?Sized,
{
    let command = form.submit()?;
    let result = match command {
        FormCommand::Create(draft) => store.create(draft).await.map(|id| {
            tracing::debug!(task_id = %id, "form saved as new task");
        }),
        FormCommand::Update { id, draft } => store.update(&id, draft).await.map(|()| {
            tracing::debug!(task_id = %id, "form saved as update");
        }),
    };

    if let Err(err) = result {
        tracing::warn!(
            collection = store.collection(),
            editing = form.is_editing(),
            error = %err,
            "failed to save task"
        );
        return Err(err.into());
    }
    Ok(FormState::default())
}

pub async fn delete_task<S>(store: &S, id: &TaskId) -> Result<(), FocusError>
where
    S: TaskStore + ?Sized,
{
    store.delete(id).await?;
    Ok(())
}
