use crate::api::{use_client, use_config};
use crate::auth::use_auth;
use crate::components::icons::{
    Activity, AlertCircle, AlertTriangle, CheckCircle2, ExternalLink, LayoutDashboard, Megaphone,
    tool_icon,
};
use crate::components::project_card::tag_chips;
use chrono::Utc;
use fastcode_shared::dashboard::{DashboardData, load_dashboard};
use fastcode_shared::date::display_date;
use fastcode_shared::{Announcement, DashboardGate, Priority, Project, QuickTool};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 最近项目卡片展示的技术标签数量
const TECH_LIMIT: usize = 3;

fn loading_screen() -> AnyView {
    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center">
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-blue-600 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-gray-600 dark:text-gray-400">"Loading dashboard..."</p>
            </div>
        </div>
    }
    .into_any()
}

fn priority_icon(priority: Priority) -> AnyView {
    match priority {
        Priority::High => view! { <AlertTriangle attr:class="w-5 h-5 text-red-500" /> }.into_any(),
        Priority::Medium => view! { <AlertCircle attr:class="w-5 h-5 text-yellow-500" /> }.into_any(),
        Priority::Low => view! { <CheckCircle2 attr:class="w-5 h-5 text-green-500" /> }.into_any(),
        Priority::Unknown => view! { <AlertCircle attr:class="w-5 h-5 text-gray-500" /> }.into_any(),
    }
}

fn section_header(icon: AnyView, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 mb-4">
            {icon}
            <h2 class="text-xl font-bold text-gray-900 dark:text-white">{title}</h2>
        </div>
    }
}

fn announcement_list(announcements: Vec<Announcement>) -> AnyView {
    if announcements.is_empty() {
        return view! {
            <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-8 text-center">
                <p class="text-gray-600 dark:text-gray-400">"No announcements at this time"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="space-y-4">
            {announcements
                .into_iter()
                .map(|a| view! {
                    <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-6">
                        <div class="flex items-start gap-3">
                            {priority_icon(a.priority)}
                            <div class="flex-1">
                                <h3 class="font-bold text-gray-900 dark:text-white mb-1">{a.title}</h3>
                                <p class="text-gray-600 dark:text-gray-400 text-sm mb-2">{a.content}</p>
                                <p class="text-xs text-gray-500 dark:text-gray-500">{display_date(&a.created_at)}</p>
                            </div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn recent_projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {projects
                .into_iter()
                .map(|project| {
                    let status_class = if project.is_active() {
                        "px-2 py-1 rounded text-xs font-medium bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-400"
                    } else {
                        "px-2 py-1 rounded text-xs font-medium bg-yellow-100 dark:bg-yellow-900/30 text-yellow-700 dark:text-yellow-400"
                    };
                    view! {
                        <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-6 hover:border-blue-500 dark:hover:border-blue-500 transition-colors">
                            <div class="flex items-start justify-between mb-3">
                                <h3 class="font-bold text-gray-900 dark:text-white">{project.title.clone()}</h3>
                                <span class=status_class>{project.status.clone()}</span>
                            </div>
                            <p class="text-sm text-gray-600 dark:text-gray-400 mb-3 line-clamp-2">
                                {project.description.clone()}
                            </p>
                            <div class="flex flex-wrap gap-2">
                                {tag_chips(
                                    &project.tech_stack,
                                    TECH_LIMIT,
                                    "px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded text-xs",
                                )}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn quick_tools(tools: Vec<QuickTool>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {tools
                .into_iter()
                .map(|tool| {
                    let icon = tool.icon();
                    view! {
                        <a
                            href=tool.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group flex items-center gap-3 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-4 hover:border-blue-500 dark:hover:border-blue-500 transition-all hover:scale-[1.02]"
                        >
                            <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center flex-shrink-0">
                                {tool_icon(icon, "w-5 h-5 text-white")}
                            </div>
                            <div class="flex-1 min-w-0">
                                <h3 class="font-semibold text-gray-900 dark:text-white text-sm">{tool.name}</h3>
                                <p class="text-xs text-gray-600 dark:text-gray-400 truncate">{tool.description}</p>
                            </div>
                            <ExternalLink attr:class="w-4 h-4 text-gray-400 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors flex-shrink-0" />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// 已登录时的面板内容
///
/// 以用户身份并发加载三个区块，全部结束后一起渲染。
#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let client = use_client();

    let (data, set_data) = signal(Option::<DashboardData>::None);

    let client = match auth.state.with_untracked(|s| s.session().cloned()) {
        Some(session) => client.authorized(&session),
        None => client,
    };
    spawn_local(async move {
        let loaded = load_dashboard(&client, config.announcements, Utc::now()).await;
        set_data.set(Some(loaded));
    });

    move || {
        let Some(data) = data.get() else {
            return loading_screen();
        };

        view! {
            <div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-8">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="mb-8">
                        <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">"Welcome Back!"</h1>
                        <p class="text-gray-600 dark:text-gray-400">
                            "Here's what's happening with your projects today"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <div class="lg:col-span-2 space-y-8">
                            <section>
                                {section_header(
                                    view! { <Megaphone attr:class="w-5 h-5 text-blue-600 dark:text-blue-400" /> }.into_any(),
                                    "Announcements",
                                )}
                                {announcement_list(data.announcements)}
                            </section>
                            <section>
                                {section_header(
                                    view! { <Activity attr:class="w-5 h-5 text-blue-600 dark:text-blue-400" /> }.into_any(),
                                    "Recent Projects",
                                )}
                                {recent_projects(data.projects)}
                            </section>
                        </div>

                        <div class="space-y-8">
                            <section>
                                {section_header(
                                    view! { <LayoutDashboard attr:class="w-5 h-5 text-blue-600 dark:text-blue-400" /> }.into_any(),
                                    "Quick Tools",
                                )}
                                {quick_tools(data.quick_tools)}
                            </section>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}

/// 控制面板
///
/// 会话恢复期间只显示加载状态；未登录时路由已经改为渲染登录页。
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let gate = Memo::new(move |_| auth.state.with(|s| s.dashboard_gate()));

    move || match gate.get() {
        DashboardGate::Render => view! { <DashboardContent /> }.into_any(),
        DashboardGate::Wait | DashboardGate::RedirectToLogin => loading_screen(),
    }
}
