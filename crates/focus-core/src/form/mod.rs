//! Form - タスク作成・編集フォームの状態
//!
//! フォームの状態は不変の値 `FormState` として持ち、
//! `reduce(&state, action)` で次の状態を作ります（元の状態は変更しない）。
//! 保存時は `submit()` でストアへの命令（`FormCommand`）に変換します。

use crate::domain::{FocusError, Importance, Task, TaskContext, TaskDraft, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub importance: Importance,
    pub context: TaskContext,
    pub is_habit: bool,
    /// 編集中のタスク。`None` なら新規作成
    pub editing: Option<TaskId>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            importance: Importance::Medium,
            context: TaskContext::General,
            is_habit: false,
            editing: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetTitle(String),
    SetImportance(Importance),
    SetContext(TaskContext),
    ToggleHabit,
    /// 既存タスクの値をフォームに読み込む
    Edit(Task),
    /// 新規作成モードに戻す
    Reset,
}

/// ストアに送る命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Create(TaskDraft),
    Update { id: TaskId, draft: TaskDraft },
}

pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SetTitle(title) => FormState {
            title,
            ..state.clone()
        },
        FormAction::SetImportance(importance) => FormState {
            importance,
            ..state.clone()
        },
        FormAction::SetContext(context) => FormState {
            context,
            ..state.clone()
        },
        FormAction::ToggleHabit => FormState {
            is_habit: !state.is_habit,
            ..state.clone()
        },
        FormAction::Edit(task) => FormState {
            title: task.title,
            // 未知の値はフォームで選べないので既定値に寄せる
            importance: if task.importance.is_known() {
                task.importance
            } else {
                FormState::default().importance
            },
            context: task.context,
            is_habit: task.is_habit,
            editing: Some(task.id),
        },
        FormAction::Reset => FormState::default(),
    }
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// 保存ボタンのラベル
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Task"
        } else {
            "Add Task"
        }
    }

    pub fn submit(&self) -> Result<FormCommand, FocusError> {
        let draft = TaskDraft::new(&self.title, self.importance, self.context, self.is_habit)?;
        Ok(match &self.editing {
            Some(id) => FormCommand::Update {
                id: id.clone(),
                draft,
            },
            None => FormCommand::Create(draft),
        })
    }
}
