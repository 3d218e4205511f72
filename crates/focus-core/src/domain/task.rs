//! Task record and the edit set submitted from the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::context::TaskContext;
use super::errors::FocusError;
use super::ids::TaskId;
use super::importance::Importance;

/// A task as it lives in the collection.
///
/// Field names follow the stored document (`isHabit`, `createdAt`, ...).
/// Documents written by older clients may miss fields; every optional field
/// has a lenient default so a snapshot never fails to load because of one
/// stale document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,

    #[serde(default = "Importance::missing")]
    pub importance: Importance,

    #[serde(default)]
    pub context: TaskContext,

    #[serde(default)]
    pub is_habit: bool,

    /// Only meaningful for habits. Never advanced by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,

    /// Assigned by the store on create; absent while a write is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Streak shown next to a habit. A habit without a stored streak shows 1.
    pub fn habit_streak(&self) -> Option<u32> {
        self.is_habit.then(|| self.streak.unwrap_or(1))
    }
}

/// The fields a user can edit: title, importance, context and the habit flag.
///
/// Construction validates, so a `TaskDraft` is always safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    importance: Importance,
    context: TaskContext,
    is_habit: bool,
}

impl TaskDraft {
    pub fn new(
        title: impl AsRef<str>,
        importance: Importance,
        context: TaskContext,
        is_habit: bool,
    ) -> Result<Self, FocusError> {
        // 検証だけでなく保存する値もトリム後のタイトル
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(FocusError::EmptyTitle);
        }
        if !importance.is_known() {
            return Err(FocusError::invalid_argument(
                "importance",
                "expected one of High, Medium, Low",
            ));
        }
        Ok(Self {
            title: title.to_string(),
            importance,
            context,
            is_habit,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    pub fn context(&self) -> TaskContext {
        self.context
    }

    pub fn is_habit(&self) -> bool {
        self.is_habit
    }

    /// Apply the edit set to an existing record. `streak` and `created_at`
    /// are left as they are.
    pub fn apply_to(&self, task: &mut Task) {
        task.title = self.title.clone();
        task.importance = self.importance;
        task.context = self.context;
        task.is_habit = self.is_habit;
    }

    /// Build the full record written on create.
    pub fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> Task {
        let streak = if self.is_habit { 1 } else { 0 };
        Task {
            id,
            title: self.title,
            importance: self.importance,
            context: self.context,
            is_habit: self.is_habit,
            streak: Some(streak),
            created_at: Some(created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n")]
    fn blank_titles_are_rejected(#[case] title: &str) {
        let result = TaskDraft::new(title, Importance::High, TaskContext::Work, false);
        assert!(matches!(result, Err(FocusError::EmptyTitle)));
    }

    #[test]
    fn unknown_importance_cannot_be_saved() {
        let result = TaskDraft::new("Pay rent", Importance::Unknown, TaskContext::Home, false);
        assert!(matches!(
            result,
            Err(FocusError::InvalidArgument { name: "importance", .. })
        ));
    }

    #[test]
    fn title_is_trimmed() {
        let draft = TaskDraft::new("  Read ch. 4  ", Importance::Low, TaskContext::Study, false)
            .unwrap();
        assert_eq!(draft.title(), "Read ch. 4");
    }

    #[rstest]
    #[case::habit(true, 1)]
    #[case::one_off(false, 0)]
    fn new_task_gets_initial_streak(#[case] is_habit: bool, #[case] streak: u32) {
        let draft = TaskDraft::new("Stretch", Importance::Medium, TaskContext::Home, is_habit)
            .unwrap();
        let task = draft.into_task(TaskId::new("t1"), created_at());

        assert_eq!(task.streak, Some(streak));
        assert_eq!(task.created_at, Some(created_at()));
    }

    #[test]
    fn update_keeps_streak_and_created_at() {
        let mut task = TaskDraft::new("Run", Importance::Low, TaskContext::General, true)
            .unwrap()
            .into_task(TaskId::new("t1"), created_at());
        task.streak = Some(12);

        let edit = TaskDraft::new("Run 5k", Importance::High, TaskContext::Home, false).unwrap();
        edit.apply_to(&mut task);

        assert_eq!(task.title, "Run 5k");
        assert_eq!(task.importance, Importance::High);
        assert!(!task.is_habit);
        assert_eq!(task.streak, Some(12));
        assert_eq!(task.created_at, Some(created_at()));
    }

    #[test]
    fn sparse_documents_load_with_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": "abc", "title": "Call mom"}"#).unwrap();

        assert_eq!(task.importance, Importance::Unknown);
        assert_eq!(task.context, TaskContext::General);
        assert!(!task.is_habit);
        assert_eq!(task.streak, None);
        assert_eq!(task.habit_streak(), None);
    }

    #[test]
    fn stale_documents_do_not_fail_the_whole_export() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": "a", "title": "x", "importance": null},
                {"id": "b", "title": "y", "importance": 2, "context": null},
                {"id": "c", "title": "z", "importance": "High", "context": "Work"}
            ]"#,
        )
        .unwrap();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].importance, Importance::Unknown);
        assert_eq!(tasks[1].importance, Importance::Unknown);
        assert_eq!(tasks[1].context, TaskContext::General);
        assert_eq!(tasks[2].importance, Importance::High);
        assert_eq!(tasks[2].context, TaskContext::Work);
    }

    #[test]
    fn habit_without_streak_displays_one() {
        let task: Task = serde_json::from_str(
            r#"{"id": "abc", "title": "Floss", "importance": "Low", "isHabit": true}"#,
        )
        .unwrap();
        assert_eq!(task.habit_streak(), Some(1));
    }

    #[test]
    fn document_fields_are_camel_case() {
        let task = TaskDraft::new("Floss", Importance::Low, TaskContext::Home, true)
            .unwrap()
            .into_task(TaskId::new("abc"), created_at());
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["isHabit"], true);
        assert_eq!(json["streak"], 1);
        assert!(json.get("createdAt").is_some());
    }
}
