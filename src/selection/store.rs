//! Store：持有 Reducer 状态并把 Effect 交给宿主
//!
//! 生命周期只有两个阶段：展示中 -> 已关闭（终态）

use tracing::{debug, info};

use super::Reducer;
use super::effect::{Effect, SelectionDelegate};

/// 展示阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Presenting,
    Dismissed,
}

pub struct Store<R: Reducer> {
    state: R,
    delegate: Box<dyn SelectionDelegate<R::Output>>,
    phase: Phase,
}

impl<R: Reducer> Store<R>
where
    R::Action: std::fmt::Debug,
{
    pub fn new(state: R, delegate: impl SelectionDelegate<R::Output> + 'static) -> Self {
        Self {
            state,
            delegate: Box::new(delegate),
            phase: Phase::Presenting,
        }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dismissed(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    /// 处理一个 Action 并按顺序执行产生的 Effect
    pub fn send(&mut self, action: R::Action) {
        if self.is_dismissed() {
            debug!(?action, "ignoring action after dismissal");
            return;
        }

        for effect in self.state.reduce(action) {
            match effect {
                Effect::Publish(selection) => {
                    info!("publishing selection");
                    self.delegate.publish(selection);
                }
                Effect::Dismiss => {
                    info!("dismissing picker");
                    self.phase = Phase::Dismissed;
                    self.delegate.dismiss();
                }
            }
        }
    }
}
