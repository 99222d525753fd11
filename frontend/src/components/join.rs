use crate::components::icons::{ArrowRight, Briefcase, Clock, MapPin};
use fastcode_shared::content::{BENEFITS, JOIN_INTRO, OPEN_POSITIONS, Position};
use leptos::prelude::*;

fn position_card(position: &'static Position) -> impl IntoView {
    view! {
        <div class="group bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-6 hover:border-blue-500 dark:hover:border-blue-500 hover:shadow-lg transition-all">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-4">
                <div>
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">{position.title}</h3>
                    <div class="flex flex-wrap gap-4 text-sm text-gray-600 dark:text-gray-400">
                        <div class="flex items-center gap-1">
                            <MapPin attr:class="w-4 h-4" />
                            {position.location}
                        </div>
                        <div class="flex items-center gap-1">
                            <Clock attr:class="w-4 h-4" />
                            {position.kind}
                        </div>
                        <div class="flex items-center gap-1">
                            <Briefcase attr:class="w-4 h-4" />
                            {position.department}
                        </div>
                    </div>
                </div>
                <button class="group flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg hover:opacity-90 transition-all whitespace-nowrap">
                    "Apply Now"
                    <ArrowRight attr:class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                </button>
            </div>
            <p class="text-gray-600 dark:text-gray-400 mb-4">{position.description}</p>
            <div class="flex flex-wrap gap-2">
                {position
                    .requirements
                    .iter()
                    .map(|req| view! {
                        <span class="px-3 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded text-sm">
                            {*req}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn JoinPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <section class="bg-gradient-to-br from-blue-600 to-purple-600 py-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-white mb-4">"Join the FastCode Team"</h1>
                    <p class="text-xl text-blue-100 max-w-2xl mx-auto">
                        "Help us build the future of POS technology and work with cutting-edge cloud solutions"
                    </p>
                </div>
            </section>

            <section class="py-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-8 mb-12">
                        <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">"Why Work at FastCode?"</h2>
                        <p class="text-gray-600 dark:text-gray-400 mb-6">{JOIN_INTRO}</p>
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                            {BENEFITS
                                .iter()
                                .map(|benefit| view! {
                                    <div class="flex items-center gap-2 text-gray-700 dark:text-gray-300">
                                        <div class="w-2 h-2 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full"></div>
                                        <span class="text-sm">{*benefit}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="mb-8">
                        <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">"Open Positions"</h2>
                        <p class="text-gray-600 dark:text-gray-400">
                            {format!("{} positions available", OPEN_POSITIONS.len())}
                        </p>
                    </div>

                    <div class="space-y-6">
                        {OPEN_POSITIONS.iter().map(position_card).collect_view()}
                    </div>

                    <div class="mt-12 text-center">
                        <p class="text-gray-600 dark:text-gray-400 mb-4">
                            "Don't see a position that fits? We're always looking for talented people."
                        </p>
                        <button class="px-6 py-3 bg-white dark:bg-gray-800 text-gray-900 dark:text-white border-2 border-gray-200 dark:border-gray-700 rounded-lg font-medium hover:border-blue-600 dark:hover:border-blue-500 transition-all">
                            "Send us your resume"
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}
