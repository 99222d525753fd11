use crate::components::icons::{ArrowRight, Zap, feature_icon};
use crate::web::router::use_router;
use fastcode_shared::Page;
use fastcode_shared::content::{
    CTA_SUBTITLE, CTA_TITLE, FEATURES, HERO_BADGE, HERO_HIGHLIGHT, HERO_SUBTITLE, HERO_TITLE,
    MilestoneStatus, ROADMAP,
};
use leptos::prelude::*;

fn status_class(status: MilestoneStatus) -> (&'static str, &'static str) {
    match status {
        MilestoneStatus::Completed => ("text-green-600 dark:text-green-400", "bg-green-500"),
        MilestoneStatus::InProgress => ("text-blue-600 dark:text-blue-400", "bg-blue-500"),
        MilestoneStatus::Planned => ("text-yellow-600 dark:text-yellow-400", "bg-yellow-500"),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="group p-6 bg-gray-50 dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 hover:border-blue-500 dark:hover:border-blue-500 hover:shadow-lg transition-all duration-300">
                    <div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center mb-4 group-hover:scale-110 transition-transform">
                        {feature_icon(feature.icon, "w-6 h-6 text-white")}
                    </div>
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">{feature.title}</h3>
                    <p class="text-gray-600 dark:text-gray-400">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    let roadmap = ROADMAP
        .iter()
        .enumerate()
        .map(|(index, milestone)| {
            let (text, dot) = status_class(milestone.status);
            let last = index + 1 == ROADMAP.len();
            view! {
                <div class="relative flex flex-col items-start md:w-1/3 p-4">
                    <div class=format!("flex items-center space-x-3 mb-4 text-sm font-semibold {}", text)>
                        <span class=format!("w-3 h-3 rounded-full {}", dot)></span>
                        <span>{milestone.status.label()}</span>
                    </div>
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">
                        {format!("{}: {}", milestone.quarter, milestone.title)}
                    </h3>
                    <ul class="text-gray-600 dark:text-gray-400 list-disc list-inside space-y-1">
                        {milestone.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                    </ul>
                    {(!last).then(|| view! {
                        <div class="absolute top-1/2 right-0 hidden md:block transform -translate-y-1/2 translate-x-1/2">
                            <ArrowRight attr:class="w-8 h-8 text-gray-300 dark:text-gray-600" />
                        </div>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen">
            <section class="relative overflow-hidden bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-900 dark:to-gray-800">
                <div class="absolute inset-0 bg-grid-pattern opacity-5"></div>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 md:py-32 relative">
                    <div class="text-center max-w-4xl mx-auto">
                        <div class="inline-flex items-center gap-2 px-4 py-2 bg-blue-100 dark:bg-blue-900/30 rounded-full text-sm font-medium text-blue-600 dark:text-blue-400 mb-6 animate-fade-in">
                            <Zap attr:class="w-4 h-4" />
                            {HERO_BADGE}
                        </div>
                        <h1 class="text-5xl md:text-7xl font-bold text-gray-900 dark:text-white mb-6 animate-slide-up">
                            {HERO_TITLE}" "
                            <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                {HERO_HIGHLIGHT}
                            </span>
                        </h1>
                        <p class="text-xl text-gray-600 dark:text-gray-400 mb-8 max-w-2xl mx-auto animate-slide-up-delay">
                            {HERO_SUBTITLE}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center animate-slide-up-delay-2">
                            <button
                                on:click=move |_| router.navigate(Page::Projects)
                                class="group px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg font-medium hover:opacity-90 transition-all hover:scale-105 flex items-center justify-center gap-2"
                            >
                                "Explore Projects"
                                <ArrowRight attr:class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                            </button>
                            <button
                                on:click=move |_| router.navigate(Page::Join)
                                class="px-8 py-4 bg-white dark:bg-gray-800 text-gray-900 dark:text-white border-2 border-gray-200 dark:border-gray-700 rounded-lg font-medium hover:border-blue-600 dark:hover:border-blue-500 transition-all hover:scale-105"
                            >
                                "Join Our Team"
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-white dark:bg-gray-900">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                            "Why Choose FastCode?"
                        </h2>
                        <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                            "We combine cutting-edge technology with deep industry expertise to deliver exceptional POS solutions"
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">{features}</div>
                </div>
            </section>

            <section class="py-20 bg-gray-100 dark:bg-gray-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                            "POS Platform Roadmap"
                        </h2>
                        <p class="text-lg text-gray-600 dark:text-gray-400 max-w-3xl mx-auto">
                            "See what we're building next to power the future of commerce for our users and developers."
                        </p>
                    </div>
                    <div class="relative flex flex-col items-start space-y-8 md:space-y-0 md:flex-row md:justify-between">
                        {roadmap}
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gradient-to-br from-blue-600 to-purple-600">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">{CTA_TITLE}</h2>
                    <p class="text-xl text-blue-100 mb-8 max-w-2xl mx-auto">{CTA_SUBTITLE}</p>
                    <button
                        on:click=move |_| router.navigate(Page::Projects)
                        class="group px-8 py-4 bg-white text-blue-600 rounded-lg font-medium hover:scale-105 transition-all flex items-center gap-2 mx-auto"
                    >
                        "Get Started Today"
                        <ArrowRight attr:class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                    </button>
                </div>
            </section>
        </div>
    }
}
