use leptos::prelude::*;

use crate::catalog::{skill_groups, Skill};

use super::components::SectionTitle;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-32 bg-gray-50 text-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle icon="extra-cpu" title="Technical Skills" />
                {skill_groups()
                    .iter()
                    .map(|group| {
                        view! {
                            <h3 class="text-xl font-semibold border-b-2 border-gray-300 pb-2 mt-10 first-of-type:mt-0 mb-6 text-gray-800">
                                {group.heading.as_str()}
                            </h3>
                            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6 mb-10">
                                {group
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <SkillIcon skill /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillIcon(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-4 sm:p-5 bg-white rounded-xl transition-all duration-300 border border-gray-100 text-center shadow-sm hover:shadow-lg hover:-translate-y-1 hover:scale-105 cursor-default section-content">
            <div class="mb-3 text-blue-600">
                <i class=format!("{} text-[32px] leading-none", skill.icon) />
            </div>
            <span class="text-sm sm:text-base text-gray-700 font-medium leading-tight">
                {skill.name.as_str()}
            </span>
        </div>
    }
}
