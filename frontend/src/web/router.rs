//! 路由服务模块 - 核心引擎
//!
//! 页面状态只保存在内存中，不同步 URL，也不写入浏览器历史。
//! 控制面板的访问判定通过注入的信号获得，与认证模块解耦。

use fastcode_shared::{DashboardGate, Page};
use leptos::prelude::*;

/// 平滑滚动到页面顶部
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 用户请求的页面
    current_page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// 经过访问判定后实际渲染的页面
    resolved: Memo<Page>,
    /// 控制面板访问判定（注入的信号）
    dashboard_gate: Signal<DashboardGate>,
}

impl RouterService {
    fn new(dashboard_gate: Signal<DashboardGate>) -> Self {
        let (current_page, set_page) = signal(Page::default());
        let resolved = Memo::new(move |_| dashboard_gate.get().resolve(current_page.get()));

        Self {
            current_page,
            set_page,
            resolved,
            dashboard_gate,
        }
    }

    /// 实际渲染的页面
    pub fn page(&self) -> Memo<Page> {
        self.resolved
    }

    /// 切换页面并滚动到顶部
    pub fn navigate(&self, page: Page) {
        log::debug!("[Router] Navigate to {}", page);
        self.set_page.set(page);
        scroll_to_top();
    }

    /// 未登录访问控制面板时，将当前页面同步为登录页
    fn setup_login_redirect(&self) {
        let current_page = self.current_page;
        let set_page = self.set_page;
        let dashboard_gate = self.dashboard_gate;

        Effect::new(move |_| {
            let gate = dashboard_gate.get();
            let page = current_page.get();
            let target = gate.resolve(page);
            if target != page {
                log::info!("[Router] {} requires sign-in, showing {}", page, target);
                set_page.set(target);
            }
        });
    }
}

fn provide_router(dashboard_gate: Signal<DashboardGate>) -> RouterService {
    let router = RouterService::new(dashboard_gate);
    router.setup_login_redirect();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 控制面板访问判定信号
    dashboard_gate: Signal<DashboardGate>,
    children: Children,
) -> impl IntoView {
    provide_router(dashboard_gate);

    children()
}

/// 路由出口组件
///
/// 根据判定后的页面渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前页面，返回对应视图
    matcher: fn(Page) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.page().get())
}
