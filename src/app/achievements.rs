use leptos::prelude::*;

use crate::catalog::{achievements, Achievement};

use super::components::SectionTitle;

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements" class="py-32 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle icon="extra-award" title="Achievements & Certifications" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {achievements()
                        .iter()
                        .map(|achievement| view! { <AchievementCard achievement /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AchievementCard(achievement: &'static Achievement) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-xl bg-white shadow-lg group border border-gray-100 hover:shadow-xl transition-shadow duration-300 flex flex-col h-full section-content">
            <div class="relative aspect-[16/10] overflow-hidden">
                <img
                    src=achievement.image.as_str()
                    alt=achievement.title.as_str()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                    loading="lazy"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-black/30 to-transparent"></div>
                <div class="absolute bottom-3 left-3 z-10">
                    <span class="px-3 py-1 bg-blue-500 text-white text-xs font-semibold rounded-full shadow">
                        {achievement.date.as_str()}
                    </span>
                </div>
            </div>
            <div class="p-5 sm:p-6 flex-grow">
                <h3 class="text-lg font-bold mb-2 text-gray-900">{achievement.title.as_str()}</h3>
                <p class="text-gray-600 text-sm leading-relaxed">
                    {achievement.description.as_str()}
                </p>
            </div>
        </div>
    }
}
