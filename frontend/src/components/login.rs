use crate::api::use_client;
use crate::auth::{login, use_auth};
use crate::components::icons::{AlertCircle, Code2};
use crate::web::router::use_router;
use fastcode_shared::{BRAND, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-50 dark:bg-gray-900 border border-gray-300 dark:border-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent text-gray-900 dark:text-white transition-colors";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let client = StoredValue::new(use_client());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_is_submitting.set(true);

        let client = client.get_value();
        spawn_local(async move {
            match login(&auth, &client, email.get_untracked(), password.get_untracked()).await {
                Ok(next) => router.navigate(next),
                Err(message) => {
                    set_error_msg.set(Some(message));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <div class="flex items-center justify-center gap-2 mb-4">
                        <Code2 attr:class="w-10 h-10 text-blue-600 dark:text-blue-500" />
                        <span class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            {BRAND}
                        </span>
                    </div>
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">"Welcome Back"</h1>
                    <p class="text-gray-600 dark:text-gray-400">"Sign in to access your dashboard"</p>
                </div>

                <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 p-8 shadow-xl">
                    <form on:submit=on_submit class="space-y-6">
                        {move || error_msg.get().map(|message| view! {
                            <div role="alert" class="flex items-start gap-3 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
                                <AlertCircle attr:class="w-5 h-5 text-red-600 dark:text-red-400 flex-shrink-0 mt-0.5" />
                                <p class="text-sm text-red-600 dark:text-red-400">{message}</p>
                            </div>
                        })}

                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                "Email Address"
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class=INPUT_CLASS
                                required
                            />
                        </div>

                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                "Password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class=INPUT_CLASS
                                required
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || is_submitting.get()
                            class="w-full py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg font-medium hover:opacity-90 transition-opacity disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || if is_submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <div class="mt-6 text-center">
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            "Don't have an account? "
                            <button
                                on:click=move |_| router.navigate(Page::Home)
                                class="text-blue-600 dark:text-blue-400 font-medium hover:underline"
                            >
                                "Contact us"
                            </button>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
