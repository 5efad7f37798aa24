use leptos::prelude::*;

#[component]
pub fn SectionTitle(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-12 md:mb-16 section-content">
            <div class="p-3 bg-gradient-to-br from-blue-500 to-purple-600 rounded-xl text-white shadow-lg flex-shrink-0">
                <i class=format!("{icon} text-[28px] leading-none") />
            </div>
            <h2 class="text-4xl md:text-5xl font-bold text-gray-900">{title}</h2>
        </div>
    }
}

/// Tag pills in insertion order; an empty list renders an empty row.
#[component]
pub fn TagList(tags: &'static [String], pill_class: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-4">
            {tags
                .iter()
                .map(|tag| view! { <span class=pill_class>{tag.as_str()}</span> })
                .collect_view()}
        </div>
    }
}
