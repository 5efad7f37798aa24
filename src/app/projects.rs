use leptos::{ev::KeyboardEvent, prelude::*};

use crate::catalog::{projects, ProjectRecord};
use crate::disclosure::{BodyScrollLock, Disclosure, ScrollLock};

use super::components::{SectionTitle, TagList};
use super::project_modal::ProjectDetailModal;

#[component]
pub fn Projects() -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::Closed);
    let is_open = Memo::new(move |_| disclosure.with(|d| d.is_open()));

    // effects only run in the browser, so the body is never touched during SSR
    Effect::watch(
        move || is_open.get(),
        move |open, _, _| BodyScrollLock.apply(*open),
        false,
    );
    on_cleanup(move || {
        if disclosure.try_with_untracked(|d| d.is_open()) == Some(true) {
            BodyScrollLock.release();
        }
    });

    let on_select = Callback::new(move |record: &'static ProjectRecord| {
        disclosure.update(|d| d.select(record));
    });

    view! {
        <section id="projects" class="py-32 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle icon="extra-code" title="Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 justify-items-center mx-auto">
                    {projects()
                        .iter()
                        .map(|record| view! { <ProjectCard record on_select /> })
                        .collect_view()}
                </div>
            </div>
        </section>
        <ProjectDetailModal disclosure />
    }
}

/// Summary tile for one project. Activating it hands the record to `on_select`.
#[component]
pub fn ProjectCard(
    record: &'static ProjectRecord,
    on_select: Callback<&'static ProjectRecord>,
) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            on_select.run(record);
        }
    };

    view! {
        <div
            role="button"
            tabindex="0"
            aria-label=format!("Show details for {}", record.title)
            on:click=move |_| on_select.run(record)
            on:keydown=on_keydown
            class="group relative bg-white shadow-lg rounded-2xl overflow-hidden border border-gray-100 hover:shadow-xl transition-shadow duration-300 h-full flex flex-col cursor-pointer section-content"
        >
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=record.image.as_str()
                    alt=record.title.as_str()
                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 via-black/10 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
            </div>
            <div class="p-6 flex-grow flex flex-col justify-between">
                <div>
                    <h3 class="text-xl font-bold mb-2 text-gray-900">{record.title.as_str()}</h3>
                    // clamped for display only, the full text stays in the DOM
                    <p class="text-gray-600 mb-4 text-sm line-clamp-3">
                        {record.description.as_str()}
                    </p>
                    <TagList
                        tags=record.tags.as_slice()
                        pill_class="px-2.5 py-0.5 bg-blue-100 text-blue-800 rounded-full text-xs font-medium"
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::catalog::ProjectDetails;

    fn render(record: &'static ProjectRecord) -> String {
        Owner::new().with(|| {
            let on_select = Callback::new(|_: &'static ProjectRecord| {});
            view! { <ProjectCard record on_select /> }.to_html()
        })
    }

    #[test]
    fn test_every_catalog_card_renders() {
        for record in projects() {
            let html = render(record);
            assert!(html.contains("line-clamp-3"));
            for tag in &record.tags {
                assert!(html.contains(tag.as_str()));
            }
        }
    }

    #[test]
    fn test_card_keeps_full_description() {
        let record = projects()
            .iter()
            .find(|p| p.title == "Handwriting Recognition System")
            .expect("catalog should contain the handwriting project");
        let html = render(record);
        assert!(html.contains(&record.description));
    }

    #[test]
    fn test_card_without_tags_or_gallery() {
        let record: &'static ProjectRecord = Box::leak(Box::new(ProjectRecord {
            title: "Empty".to_string(),
            description: "Nothing attached".to_string(),
            image: "assets/empty.png".to_string(),
            tags: vec![],
            details: ProjectDetails {
                challenge: String::new(),
                solution: String::new(),
                results: String::new(),
                images: vec![],
            },
            link: None,
        }));
        let html = render(record);
        assert!(html.contains("Nothing attached"));
        assert!(!html.contains("rounded-full text-xs"));
    }
}
