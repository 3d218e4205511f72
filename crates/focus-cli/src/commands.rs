use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use focus_core::app::{FocusPipeline, delete_task, save_form};
use focus_core::config::FocusConfig;
use focus_core::domain::{Importance, Snapshot, Task, TaskContext};
use focus_core::form::{FormAction, FormState, reduce};
use focus_core::impls::InMemoryTaskStore;
use focus_core::observability::TaskCounts;
use focus_core::ports::{TaskStore, ViewSink};
use focus_core::ranking::{FocusLimit, RankingEngine};

use crate::render::TerminalRenderer;

/// デモの 1 手ごとの間隔
///
/// 購読はスナップショットを合流させるので、遅い端末では途中の revision が描画されないことがある。
const DEMO_STEP: Duration = Duration::from_millis(50);

fn read_tasks(path: &Path) -> anyhow::Result<Vec<Task>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of tasks", path.display()))
}

fn resolve_limit(config: &FocusConfig, cli_limit: Option<i64>) -> anyhow::Result<FocusLimit> {
    match cli_limit {
        Some(raw) => Ok(FocusLimit::try_from(raw)?),
        None => Ok(config.focus_limit()?),
    }
}

pub fn rank(config: &FocusConfig, file: &Path, limit: Option<i64>) -> anyhow::Result<()> {
    let limit = resolve_limit(config, limit)?;
    let tasks = read_tasks(file)?;
    tracing::debug!(tasks = tasks.len(), %limit, "ranking export");

    let view = RankingEngine::new(limit).view(&Snapshot::new(0, tasks));
    TerminalRenderer::stdout().render(&view);
    Ok(())
}

pub fn status(file: &Path) -> anyhow::Result<()> {
    let counts = TaskCounts::from_tasks(&read_tasks(file)?);
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

/// フォーム reducer → save_form → ストア → 購読 → 描画 の一周を見せる
pub async fn demo(config: &FocusConfig) -> anyhow::Result<()> {
    let engine = RankingEngine::new(config.focus_limit()?);
    let store = Arc::new(InMemoryTaskStore::new(config.collection.clone()));
    let pipeline = FocusPipeline::spawn(store.subscribe(), engine, TerminalRenderer::stdout());

    let entries = [
        ("Water the plants", Importance::Low, TaskContext::Home, false),
        ("Finish quarterly report", Importance::High, TaskContext::Work, false),
        ("Flashcards", Importance::Medium, TaskContext::Study, true),
        ("Pick up parcel", Importance::Medium, TaskContext::Errands, false),
    ];
    for (title, importance, context, is_habit) in entries {
        let mut form = reduce(&FormState::default(), FormAction::SetTitle(title.to_string()));
        form = reduce(&form, FormAction::SetImportance(importance));
        form = reduce(&form, FormAction::SetContext(context));
        if is_habit {
            form = reduce(&form, FormAction::ToggleHabit);
        }
        save_form(&*store, &form).await?;
        tokio::time::sleep(DEMO_STEP).await;
    }

    let snapshot = store.snapshot().await?;
    if let Some(task) = snapshot.tasks.iter().find(|t| t.importance == Importance::Low) {
        let form = reduce(&FormState::default(), FormAction::Edit(task.clone()));
        let form = reduce(&form, FormAction::SetImportance(Importance::High));
        tracing::info!(task_id = %task.id, action = form.submit_label(), "editing task");
        save_form(&*store, &form).await?;
        tokio::time::sleep(DEMO_STEP).await;
    }
    if let Some(task) = snapshot.tasks.iter().find(|t| t.context == TaskContext::Errands) {
        delete_task(&*store, &task.id).await?;
        tokio::time::sleep(DEMO_STEP).await;
    }

    let (_, report) = pipeline
        .shutdown_and_join()
        .await
        .context("focus loop panicked")?;
    tracing::info!(
        rendered = report.rendered,
        last_revision = ?report.last_revision,
        "demo finished"
    );
    Ok(())
}
