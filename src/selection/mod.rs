//! 选择容器模块
//!
//! 采用 Reducer 架构：
//! - State: 单选/多选容器持有的条目、搜索文本与选中集合
//! - Action: 用户操作转化的语义化事件
//! - Effect: reduce 后返回给宿主的通知（发布选择、关闭）

pub mod effect;
pub mod multi;
pub mod search;
pub mod single;
pub mod store;

pub use effect::{Callbacks, Effect, SelectionDelegate};
pub use multi::{MultiAction, MultiSelection};
pub use search::SearchState;
pub use single::{SingleAction, SingleSelection};
pub use store::{Phase, Store};

/// 状态容器：处理一个 Action，修改自身状态并返回需要执行的 Effect
pub trait Reducer {
    type Action;
    /// 发布给宿主的选择结果类型
    type Output;

    fn reduce(&mut self, action: Self::Action) -> Vec<Effect<Self::Output>>;
}
