use leptos::prelude::*;

use crate::profile::profile;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"Skills & Technologies"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {profile()
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="p-6 rounded-xl bg-white shadow-lg">
                                    <div class="flex items-center gap-4 mb-4">
                                        <i class=format!("{} text-4xl", skill.icon) />
                                        <h3 class="text-lg font-semibold">{skill.name.clone()}</h3>
                                        <span class="ml-auto text-sm text-gray-500">
                                            {format!("{}%", skill.level)}
                                        </span>
                                    </div>
                                    <div class="w-full h-2 rounded-full bg-gray-200">
                                        <div
                                            class="h-2 rounded-full bg-gradient-to-r from-purple-600 to-pink-600"
                                            style:width=format!("{}%", skill.level)
                                        />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
