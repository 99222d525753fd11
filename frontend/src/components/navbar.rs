use crate::api::use_client;
use crate::auth::{logout, use_auth};
use crate::components::icons::{Code2, Menu, Moon, Sun, X};
use crate::theme::use_theme;
use crate::web::router::use_router;
use fastcode_shared::{BRAND, Page};
use leptos::prelude::*;

const AUTH_BUTTON: &str = "px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg hover:opacity-90 transition-opacity";
const MOBILE_AUTH_BUTTON: &str = "flex-1 px-4 py-2 rounded-lg text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:opacity-90 transition-opacity";

#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let theme = use_theme();
    let auth = use_auth();
    let client = StoredValue::new(use_client());

    let (menu_open, set_menu_open) = signal(false);
    let signed_in = move || auth.state.with(|s| s.is_signed_in());
    let items = move || Page::nav_items(signed_in());
    let current = router.page();

    let go = move |page: Page| {
        router.navigate(page);
        set_menu_open.set(false);
    };

    let sign_out = move || {
        client.with_value(|client| logout(&auth, client));
        go(Page::Home);
    };

    let desktop_class = move |page: Page| {
        if current.get() == page {
            "text-sm font-medium transition-colors hover:text-blue-600 dark:hover:text-blue-400 text-blue-600 dark:text-blue-400"
        } else {
            "text-sm font-medium transition-colors hover:text-blue-600 dark:hover:text-blue-400 text-gray-700 dark:text-gray-300"
        }
    };

    let mobile_class = move |page: Page| {
        if current.get() == page {
            "block w-full text-left px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-50 dark:bg-blue-900/20 text-blue-600 dark:text-blue-400"
        } else {
            "block w-full text-left px-4 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
        }
    };

    let auth_button = move |class: &'static str| {
        if signed_in() {
            view! { <button on:click=move |_| sign_out() class=class>"Sign Out"</button> }
                .into_any()
        } else {
            view! { <button on:click=move |_| go(Page::Login) class=class>"Sign In"</button> }
                .into_any()
        }
    };

    view! {
        <nav class="sticky top-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-lg border-b border-gray-200 dark:border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        on:click=move |_| go(Page::Home)
                        class="flex items-center gap-2 text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent hover:opacity-80 transition-opacity"
                    >
                        <Code2 attr:class="w-8 h-8 text-blue-600 dark:text-blue-500" />
                        {BRAND}
                    </button>

                    <div class="hidden md:flex items-center gap-8">
                        <For
                            each=items
                            key=|page| *page
                            children=move |page| {
                                view! {
                                    <button on:click=move |_| go(page) class=move || desktop_class(page)>
                                        {page.label()}
                                    </button>
                                }
                            }
                        />
                    </div>

                    <div class="hidden md:flex items-center gap-4">
                        <button
                            on:click=move |_| theme.toggle()
                            class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                            aria-label="Toggle theme"
                        >
                            {move || if theme.theme().is_dark() {
                                view! { <Sun attr:class="w-5 h-5 text-gray-700 dark:text-gray-300" /> }.into_any()
                            } else {
                                view! { <Moon attr:class="w-5 h-5 text-gray-700 dark:text-gray-300" /> }.into_any()
                            }}
                        </button>
                        {move || auth_button(AUTH_BUTTON)}
                    </div>

                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="md:hidden p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                    >
                        {move || if menu_open.get() {
                            view! { <X attr:class="w-6 h-6 text-gray-700 dark:text-gray-300" /> }.into_any()
                        } else {
                            view! { <Menu attr:class="w-6 h-6 text-gray-700 dark:text-gray-300" /> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
                    <div class="px-4 py-4 space-y-3">
                        <For
                            each=items
                            key=|page| *page
                            children=move |page| {
                                view! {
                                    <button on:click=move |_| go(page) class=move || mobile_class(page)>
                                        {page.label()}
                                    </button>
                                }
                            }
                        />
                        <div class="flex items-center gap-3 pt-3 border-t border-gray-200 dark:border-gray-800">
                            <button
                                on:click=move |_| theme.toggle()
                                class="flex-1 px-4 py-2 rounded-lg text-sm font-medium bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            >
                                {move || if theme.theme().is_dark() { "Light Mode" } else { "Dark Mode" }}
                            </button>
                            {move || auth_button(MOBILE_AUTH_BUTTON)}
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
