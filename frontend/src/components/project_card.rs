use crate::components::icons::{ExternalLink, Github};
use fastcode_shared::Project;
use fastcode_shared::models::split_tags;
use leptos::prelude::*;

/// 项目卡片展示的技术标签数量
const TECH_LIMIT: usize = 4;

/// 标签列表，超出部分折叠为 `+N`
pub fn tag_chips(tags: &[String], limit: usize, class: &'static str) -> AnyView {
    let (shown, overflow) = split_tags(tags, limit);
    view! {
        {shown
            .iter()
            .map(|tag| view! { <span class=class>{tag.clone()}</span> })
            .collect_view()}
        {(overflow > 0).then(|| view! { <span class=class>{format!("+{}", overflow)}</span> })}
    }
    .into_any()
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let status_class = if project.is_active() {
        "px-3 py-1 rounded-full text-xs font-medium bg-green-500/90 text-white"
    } else {
        "px-3 py-1 rounded-full text-xs font-medium bg-yellow-500/90 text-white"
    };

    view! {
        <div class="group bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 overflow-hidden hover:shadow-xl hover:scale-[1.02] transition-all duration-300">
            <div class="h-48 bg-gradient-to-br from-blue-500 to-purple-600 relative overflow-hidden">
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/10 transition-colors"></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="text-6xl font-bold text-white/10 group-hover:scale-110 transition-transform">
                        {project.initials()}
                    </div>
                </div>
                <div class="absolute top-4 right-4">
                    <span class=status_class>{project.status.clone()}</span>
                </div>
            </div>

            <div class="p-6">
                <div class="mb-2">
                    <span class="text-xs font-medium text-blue-600 dark:text-blue-400">
                        {project.category.clone()}
                    </span>
                </div>
                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-600 dark:text-gray-400 text-sm mb-4 line-clamp-2">
                    {project.description.clone()}
                </p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {tag_chips(
                        &project.tech_stack,
                        TECH_LIMIT,
                        "px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded text-xs font-medium",
                    )}
                </div>

                <div class="flex gap-3">
                    {project.github_url.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors text-sm font-medium"
                        >
                            <Github attr:class="w-4 h-4" />
                            "Code"
                        </a>
                    })}
                    {project.demo_url.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg hover:opacity-90 transition-opacity text-sm font-medium"
                        >
                            <ExternalLink attr:class="w-4 h-4" />
                            "Demo"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
