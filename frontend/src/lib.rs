//! FastCode 站点前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 内存路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `theme`: 明暗主题
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod footer;
    mod icons;
    pub mod home;
    pub mod join;
    pub mod login;
    pub mod navbar;
    pub mod project_card;
    pub mod projects;
    pub mod team;
    pub mod team_card;
}
mod config;
mod theme;

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::footer::Footer;
use crate::components::home::HomePage;
use crate::components::join::JoinPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsPage;
use crate::components::team::TeamPage;
use crate::theme::ThemeContext;

use fastcode_shared::{ConfigError, Page, SiteConfig};
use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::BrowserHttpClient;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 Page 枚举返回对应的视图组件。
fn route_matcher(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Projects => view! { <ProjectsPage /> }.into_any(),
        Page::Team => view! { <TeamPage /> }.into_any(),
        Page::Join => view! { <JoinPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
    }
}

fn config_error_screen(error: ConfigError) -> AnyView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4">
            <div class="max-w-md text-center">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">"Site is not configured"</h1>
                <p class="text-gray-600 dark:text-gray-400">{error.to_string()}</p>
            </div>
        </div>
    }
    .into_any()
}

/// 页面外壳：导航栏、当前页面与页脚
#[component]
fn Shell() -> impl IntoView {
    let router = use_router();
    let page = router.page();

    view! {
        <div class="min-h-screen bg-white dark:bg-gray-900 transition-colors">
            <Show when=move || page.get().shows_navbar()>
                <Navbar />
            </Show>
            <main>
                <RouterOutlet matcher=route_matcher />
            </main>
            <Show when=move || page.get().shows_footer()>
                <Footer />
            </Show>
        </div>
    }
}

#[component]
fn Site(config: SiteConfig) -> impl IntoView {
    // 1. 共享配置与匿名客户端
    let client = api::connect(&config);
    provide_context(config);
    provide_context(client.clone());

    // 2. 主题
    provide_context(ThemeContext::new());

    // 3. 会话：从 LocalStorage 恢复
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, client);

    // 4. 访问判定信号注入路由服务
    let dashboard_gate = auth_ctx.dashboard_gate_signal();

    view! {
        <Router dashboard_gate=dashboard_gate>
            <Shell />
        </Router>
    }
}

#[component]
pub fn App() -> impl IntoView {
    match config::load() {
        Ok(config) => view! { <Site config=config /> }.into_any(),
        Err(e) => {
            log::error!("[App] Invalid site configuration: {}", e);
            config_error_screen(e)
        }
    }
}
