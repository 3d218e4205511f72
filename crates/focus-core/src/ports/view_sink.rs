//! ViewSink port - 描画側（UI）への出口
//!
//! スナップショットごとに 1 回、ランキング済みのビューが渡されます。

use crate::ranking::RankedView;

pub trait ViewSink: Send {
    fn render(&mut self, view: &RankedView);
}

/// 受け取ったビューをそのまま溜める（テスト・デバッグ用）
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub views: Vec<RankedView>,
}

impl CollectingSink {
    pub fn last(&self) -> Option<&RankedView> {
        self.views.last()
    }
}

impl ViewSink for CollectingSink {
    fn render(&mut self, view: &RankedView) {
        self.views.push(view.clone());
    }
}
