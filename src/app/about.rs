use leptos::prelude::*;

use super::scheduler::use_animator;
use crate::counter::{format_thousands, CountUp};
use crate::profile::{profile, Stat};

#[component]
pub fn About() -> impl IntoView {
    let profile = profile();
    view! {
        <section id="about" class="py-20 px-4 bg-gray-50">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"About Me"</h2>
                <div class="max-w-3xl mx-auto space-y-4 text-lg text-gray-700 leading-relaxed">
                    {profile
                        .about
                        .iter()
                        .map(|p| view! { <p>{p.clone()}</p> })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-6 mt-16">
                    {profile
                        .stats
                        .iter()
                        .cloned()
                        .map(|stat| view! { <StatCounter stat /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCounter(stat: Stat) -> impl IntoView {
    let Stat { label, value, suffix } = stat;
    let (count, counter) = use_animator::<CountUp>(0);
    Effect::watch(|| (), move |_, _, _| counter.start(CountUp::new(value)), true);

    view! {
        <div class="text-center p-6 rounded-xl bg-white shadow-lg">
            <p class="text-3xl font-bold text-purple-600">
                {move || format_thousands(count.get())}
                {suffix}
            </p>
            <p class="mt-2 text-gray-600">{label}</p>
        </div>
    }
}
