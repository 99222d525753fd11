use crate::api::use_client;
use crate::components::icons::Users;
use crate::components::projects::skeleton_grid;
use crate::components::team_card::TeamCard;
use fastcode_shared::TeamMember;
use fastcode_shared::team::load_team;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TeamPage() -> impl IntoView {
    let client = use_client();

    let (members, set_members) = signal(Vec::<TeamMember>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match load_team(&client).await {
            Ok(data) => set_members.set(data),
            Err(e) => log::error!("Error loading team members: {}", e),
        }
        set_loading.set(false);
    });

    let body = move || {
        if loading.get() {
            skeleton_grid().into_any()
        } else if members.with(|m| m.is_empty()) {
            view! {
                <div class="text-center py-16">
                    <p class="text-gray-600 dark:text-gray-400 text-lg">
                        "Team members information coming soon"
                    </p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || members.get()
                        key=|m| m.id.clone()
                        children=move |member| view! { <TeamCard member=member /> }
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
                    <div class="inline-flex items-center gap-2 px-4 py-2 bg-blue-100 dark:bg-blue-900/30 rounded-full text-sm font-medium text-blue-600 dark:text-blue-400 mb-6">
                        <Users attr:class="w-4 h-4" />
                        "Meet the Team"
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        "The People Behind FastCode"
                    </h1>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Our diverse team of talented developers, designers, and innovators working together to build exceptional POS solutions"
                    </p>
                </div>

                {body}
            </div>
        </div>
    }
}
