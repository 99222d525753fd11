use crate::api::use_client;
use crate::components::icons::Filter;
use crate::components::project_card::ProjectCard;
use fastcode_shared::Project;
use fastcode_shared::catalog::{CategoryFilter, categories, load_projects};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SELECTED: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors whitespace-nowrap bg-gradient-to-r from-blue-600 to-purple-600 text-white";
const UNSELECTED: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors whitespace-nowrap bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 border border-gray-200 dark:border-gray-700 hover:border-blue-500 dark:hover:border-blue-500";

/// 列表加载时的占位卡片
pub fn skeleton_grid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {(0..6)
                .map(|_| view! {
                    <div class="h-96 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 animate-pulse"></div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let client = use_client();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(CategoryFilter::All);

    spawn_local(async move {
        match load_projects(&client).await {
            Ok(data) => set_projects.set(data),
            Err(e) => log::error!("Error loading projects: {}", e),
        }
        set_loading.set(false);
    });

    let category_list = Memo::new(move |_| projects.with(|p| categories(p)));
    let shown = Memo::new(move |_| filter.with(|f| projects.with(|p| f.apply(p))));

    let body = move || {
        if loading.get() {
            skeleton_grid().into_any()
        } else if shown.with(|p| p.is_empty()) {
            view! {
                <div class="text-center py-16">
                    <p class="text-gray-600 dark:text-gray-400 text-lg">
                        "No projects found in this category"
                    </p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || shown.get()
                        key=|p| p.id.clone()
                        children=move |project| view! { <ProjectCard project=project /> }
                    />
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        "Our Projects"
                    </h1>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Explore our portfolio of innovative POS and cloud-based solutions designed to empower businesses"
                    </p>
                </div>

                <div class="flex items-center gap-4 mb-8 overflow-x-auto pb-2">
                    <div class="flex items-center gap-2 text-gray-700 dark:text-gray-300">
                        <Filter attr:class="w-5 h-5" />
                        <span class="font-medium">"Filter:"</span>
                    </div>
                    <button
                        on:click=move |_| set_filter.set(CategoryFilter::All)
                        class=move || if filter.with(|f| *f == CategoryFilter::All) { SELECTED } else { UNSELECTED }
                    >
                        "All Projects"
                    </button>
                    <For
                        each=move || category_list.get()
                        key=|c| c.clone()
                        children=move |category| {
                            let label = category.clone();
                            let target = category.clone();
                            view! {
                                <button
                                    on:click=move |_| set_filter.set(CategoryFilter::Only(target.clone()))
                                    class=move || if filter.with(|f| f.is(&category)) { SELECTED } else { UNSELECTED }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>

                {body}
            </div>
        </div>
    }
}
