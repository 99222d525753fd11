use crate::components::icons::{Code2, social_icon};
use chrono::{Datelike, Utc};
use fastcode_shared::BRAND;
use fastcode_shared::content::{
    COMPANY_LINKS, FOOTER_TAGLINE, PRODUCT_LINKS, SOCIAL_LINKS, copyright,
};
use leptos::prelude::*;

fn link_list(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-semibold text-gray-900 dark:text-white mb-4">{title}</h3>
            <ul class="space-y-2">
                {links
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <a
                                    href="#"
                                    class="text-sm text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="col-span-1 md:col-span-2">
                        <div class="flex items-center gap-2 mb-4">
                            <Code2 attr:class="w-8 h-8 text-blue-600 dark:text-blue-500" />
                            <span class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                {BRAND}
                            </span>
                        </div>
                        <p class="text-gray-600 dark:text-gray-400 text-sm mb-4 max-w-md">
                            {FOOTER_TAGLINE}
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                                        >
                                            {social_icon(link.network, "w-5 h-5 text-gray-700 dark:text-gray-300")}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {link_list("Product", &PRODUCT_LINKS)}
                    {link_list("Company", &COMPANY_LINKS)}
                </div>

                <div class="mt-12 pt-8 border-t border-gray-200 dark:border-gray-800">
                    <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                        {copyright(year)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
