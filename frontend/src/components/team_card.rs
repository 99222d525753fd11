use crate::components::icons::{Github, Linkedin, User};
use crate::components::project_card::tag_chips;
use fastcode_shared::TeamMember;
use leptos::prelude::*;

const SKILL_LIMIT: usize = 3;

#[component]
pub fn TeamCard(member: TeamMember) -> impl IntoView {
    let avatar = match member.avatar_url.clone() {
        Some(url) => view! {
            <img src=url alt=member.full_name.clone() class="w-full h-full object-cover" />
        }
        .into_any(),
        None => view! {
            <div class="w-full h-full flex items-center justify-center">
                <User attr:class="w-20 h-20 text-white/30" />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="group bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 overflow-hidden hover:shadow-xl hover:scale-[1.02] transition-all duration-300">
            <div class="h-48 bg-gradient-to-br from-blue-500 to-purple-600 relative overflow-hidden">
                {avatar}
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-1">
                    {member.full_name.clone()}
                </h3>
                <p class="text-blue-600 dark:text-blue-400 text-sm font-medium mb-3">
                    {member.role.clone()}
                </p>

                {member.bio.clone().map(|bio| view! {
                    <p class="text-gray-600 dark:text-gray-400 text-sm mb-4 line-clamp-2">{bio}</p>
                })}

                <div class="flex flex-wrap gap-2 mb-4">
                    {tag_chips(
                        &member.expertise,
                        SKILL_LIMIT,
                        "px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded text-xs font-medium",
                    )}
                </div>

                <div class="flex gap-2">
                    {member.github_url.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                        >
                            <Github attr:class="w-4 h-4" />
                        </a>
                    })}
                    {member.linkedin_url.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                        >
                            <Linkedin attr:class="w-4 h-4" />
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
