use leptos::prelude::*;

use crate::profile::{profile, Milestone, Role};

#[component]
pub fn Experience() -> impl IntoView {
    let profile = profile();
    view! {
        <section id="experience" class="py-20 px-4 bg-gray-50">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"Work Experience"</h2>
                <div class="space-y-8">
                    {profile.experience.iter().map(role_card).collect_view()}
                </div>
                <h2 class="text-3xl font-bold text-center mt-20 mb-12">"Journey"</h2>
                <ol class="relative border-l-2 border-purple-300 ml-4 space-y-10">
                    {profile.timeline.iter().map(milestone).collect_view()}
                </ol>
            </div>
        </section>
    }
}

fn role_card(role: &Role) -> impl IntoView {
    view! {
        <article class="p-8 rounded-xl bg-white shadow-lg">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                <div>
                    <h3 class="text-2xl font-bold">{role.position.clone()}</h3>
                    <p class="text-lg text-purple-600 font-semibold">{role.company.clone()}</p>
                </div>
                <div class="text-sm text-gray-500 md:text-right">
                    <p>{role.duration.clone()}</p>
                    <p>{role.location.clone()}</p>
                </div>
            </div>
            <p class="mt-4 text-gray-700 leading-relaxed">{role.description.clone()}</p>
            <ul class="mt-4 space-y-2">
                {role
                    .achievements
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex gap-2 text-gray-700">
                                <span class="text-purple-600">"★"</span>
                                {a.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}

fn milestone(m: &Milestone) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-2 w-4 h-4 rounded-full bg-gradient-to-r from-purple-600 to-pink-600" />
            <p class="text-sm font-semibold text-purple-600">{m.year.clone()}</p>
            <h3 class="text-lg font-bold">{m.title.clone()}</h3>
            <p class="text-gray-600">{m.description.clone()}</p>
        </li>
    }
}
