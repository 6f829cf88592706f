//! Effect 定义与宿主回调

/// reduce 产生的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<P> {
    /// 将最终选择交还给宿主
    Publish(P),
    /// 结束当前展示
    Dismiss,
}

/// 宿主侧接收通知的接口
pub trait SelectionDelegate<P> {
    fn publish(&mut self, selection: P);
    fn dismiss(&mut self);
}

/// 由两个闭包组成的回调
pub struct Callbacks<P> {
    on_publish: Box<dyn FnMut(P)>,
    on_dismiss: Box<dyn FnMut()>,
}

impl<P> Callbacks<P> {
    pub fn new(on_publish: impl FnMut(P) + 'static, on_dismiss: impl FnMut() + 'static) -> Self {
        Self {
            on_publish: Box::new(on_publish),
            on_dismiss: Box::new(on_dismiss),
        }
    }
}

impl<P> SelectionDelegate<P> for Callbacks<P> {
    fn publish(&mut self, selection: P) {
        (self.on_publish)(selection)
    }

    fn dismiss(&mut self) {
        (self.on_dismiss)()
    }
}
