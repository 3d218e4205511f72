//! ターミナル向けの描画
//!
//! フォーカスリスト（上位 N 件）と全タスク一覧の 2 セクションを出力する。

use std::fmt::Write as _;
use std::io::Write;

use focus_core::Task;
use focus_core::ports::ViewSink;
use focus_core::ranking::RankedView;

fn task_line(task: &Task) -> String {
    let mut line = format!("[{}] {} ({})", task.importance, task.title, task.context);
    if let Some(streak) = task.habit_streak() {
        let _ = write!(line, " habit, streak {streak}");
    }
    line
}

/// 1 ビュー分のテキスト
pub fn format_view(view: &RankedView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Focus Mode: Top {} Tasks", view.focus.len());
    if view.focus.is_empty() {
        let _ = writeln!(out, "  (nothing to focus on)");
    }
    for (rank, task) in view.focus.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", rank + 1, task_line(task));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "All Tasks ({})", view.ranked.len());
    for task in &view.ranked {
        let _ = writeln!(out, "  - {}", task_line(task));
    }
    out
}

/// ビューを受け取るたびに writer へ書き出す
pub struct TerminalRenderer<W> {
    out: W,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ViewSink for TerminalRenderer<W> {
    fn render(&mut self, view: &RankedView) {
        let text = format_view(view);
        if let Err(error) = writeln!(self.out, "--- revision {} ---\n{text}", view.revision) {
            tracing::warn!(%error, "failed to write view");
        }
    }
}
