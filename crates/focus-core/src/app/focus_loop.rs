//! Focus loop: スナップショット購読 → ランキング → 描画 をつなぐ接着剤
//!
//! - スナップショットが届くたびにエンジンを頭から実行する（差分更新はしない）
//! - 購読が終わる（ストアが消える）か shutdown が来たら抜ける
//! - `Subscription` はループが所有し、抜けた時点で解放される

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ports::{Subscription, ViewSink};
use crate::ranking::RankingEngine;

/// ループ終了時の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusLoopReport {
    /// 描画したビューの数
    pub rendered: usize,
    /// 最後に描画したスナップショットの revision
    pub last_revision: Option<u64>,
}

pub async fn run_focus_loop<S: ViewSink + ?Sized>(
    mut subscription: Subscription,
    engine: &RankingEngine,
    sink: &mut S,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> FocusLoopReport {
    let mut report = FocusLoopReport::default();

    loop {
        // shutdown が来ていたら抜ける
        if *shutdown_rx.borrow() {
            break;
        }

        let snapshot = tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() {
                    // 送信側が消えた = もう止める人がいない。購読側の終了を待つ
                    subscription.next().await
                } else {
                    // 変更が入ったら次のループで判定
                    continue;
                }
            }
            snapshot = subscription.next() => snapshot,
        };

        let Some(snapshot) = snapshot else {
            tracing::debug!(
                subscription = %subscription.id(),
                "snapshot feed closed"
            );
            break;
        };

        let view = engine.view(&snapshot);
        tracing::debug!(
            revision = view.revision,
            tasks = view.ranked.len(),
            focus = view.focus.len(),
            "view recomputed"
        );
        sink.render(&view);

        report.rendered += 1;
        report.last_revision = Some(view.revision);
    }

    subscription.unsubscribe();
    report
}

/// バックグラウンドで動く focus loop のハンドル
///
/// - `request_shutdown()` で止める
/// - `shutdown_and_join()` で止めてから sink と集計を受け取る
pub struct FocusPipeline<S> {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<(S, FocusLoopReport)>,
}

impl<S: ViewSink + 'static> FocusPipeline<S> {
    pub fn spawn(subscription: Subscription, engine: RankingEngine, mut sink: S) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let join = tokio::spawn(async move {
            let report = run_focus_loop(subscription, &engine, &mut sink, &mut shutdown_rx).await;
            (sink, report)
        });
        Self { shutdown_tx, join }
    }

    pub fn request_shutdown(&self) {
        // receivers may already be dropped
        let _ = self.shutdown_tx.send(true);
    }

    /// ループの終了を待つ（shutdown は送らない）
    pub async fn join(self) -> Result<(S, FocusLoopReport), tokio::task::JoinError> {
        self.join.await
    }

    pub async fn shutdown_and_join(self) -> Result<(S, FocusLoopReport), tokio::task::JoinError> {
        self.request_shutdown();
        self.join.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::save_form;
    use crate::domain::{Importance, TaskContext, TaskDraft};
    use crate::form::{FormAction, FormState, reduce};
    use crate::impls::InMemoryTaskStore;
    use crate::ports::{CollectingSink, TaskStore};
    use crate::ranking::FocusLimit;
    use std::sync::Arc;
    use std::time::Duration;

    fn draft(title: &str, importance: Importance) -> TaskDraft {
        TaskDraft::new(title, importance, TaskContext::General, false).unwrap()
    }

    fn titles(tasks: &[crate::domain::Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[tokio::test]
    async fn renders_until_feed_closes() {
        let store = Arc::new(InMemoryTaskStore::new("tasks"));
        let pipeline = FocusPipeline::spawn(
            store.subscribe(),
            RankingEngine::default(),
            CollectingSink::default(),
        );

        store.create(draft("low", Importance::Low)).await.unwrap();
        store.create(draft("high", Importance::High)).await.unwrap();
        store.create(draft("mid", Importance::Medium)).await.unwrap();
        store.create(draft("high 2", Importance::High)).await.unwrap();

        drop(store);

        let (sink, report) = tokio::time::timeout(Duration::from_secs(5), pipeline.join())
            .await
            .expect("loop ends when the store is gone")
            .unwrap();

        let last = sink.last().unwrap();
        assert_eq!(report.last_revision, Some(4));
        assert_eq!(last.revision, 4);
        assert_eq!(titles(&last.ranked), vec!["high", "high 2", "mid", "low"]);
        assert_eq!(titles(&last.focus), vec!["high", "high 2", "mid"]);
        assert_eq!(report.rendered, sink.views.len());
    }

    #[tokio::test]
    async fn shutdown_stops_the_loop_and_releases_subscription() {
        let store = InMemoryTaskStore::new("tasks");
        let pipeline = FocusPipeline::spawn(
            store.subscribe(),
            RankingEngine::new(FocusLimit::new(1)),
            CollectingSink::default(),
        );
        assert_eq!(store.active_subscriptions(), 1);

        let form = reduce(&FormState::default(), FormAction::SetTitle("only".into()));
        save_form(&store, &form).await.unwrap();

        let joined = tokio::time::timeout(Duration::from_secs(5), pipeline.shutdown_and_join()).await;
        let (sink, report) = joined.unwrap().unwrap();

        assert_eq!(report.rendered, sink.views.len());
        assert_eq!(store.active_subscriptions(), 0);
    }

    #[tokio::test]
    async fn every_rendered_view_is_internally_consistent() {
        let store = Arc::new(InMemoryTaskStore::new("tasks"));
        let pipeline = FocusPipeline::spawn(
            store.subscribe(),
            RankingEngine::default(),
            CollectingSink::default(),
        );

        let levels = [
            Importance::Low,
            Importance::High,
            Importance::Medium,
            Importance::Low,
            Importance::High,
        ];
        for (i, importance) in levels.into_iter().enumerate() {
            store.create(draft(&format!("t{i}"), importance)).await.unwrap();
            tokio::task::yield_now().await;
        }
        drop(store);

        let (sink, _) = pipeline.join().await.unwrap();
        for view in &sink.views {
            assert_eq!(view.ranked.len(), view.revision as usize);
            assert_eq!(view.focus.len(), view.ranked.len().min(3));
            assert_eq!(&view.focus[..], &view.ranked[..view.focus.len()]);
        }
    }
}
