use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::catalog::ProjectRecord;
use crate::disclosure::{Disclosure, OverlayRegion};

use super::components::TagList;

/// Detail overlay for the selected project; renders nothing while closed.
#[component]
pub fn ProjectDetailModal(disclosure: RwSignal<Disclosure<'static>>) -> impl IntoView {
    view! {
        {move || {
            disclosure
                .with(|d| d.selected())
                .map(|record| view! { <ProjectDetail record disclosure /> })
        }}
    }
}

#[component]
fn ProjectDetail(
    record: &'static ProjectRecord,
    disclosure: RwSignal<Disclosure<'static>>,
) -> impl IntoView {
    // lives only as long as the overlay is mounted
    _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        dismiss_on_key(disclosure, &ev.key());
    });

    view! {
        <div
            class="fixed inset-0 bg-black/70 backdrop-blur-sm z-[100] flex items-center justify-center p-4 overflow-y-auto animate-fade-in"
            on:click=move |_| route_click(disclosure, OverlayRegion::Backdrop)
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-detail-title"
                class="bg-white rounded-xl shadow-2xl max-w-3xl w-full max-h-[95vh] overflow-y-auto relative animate-pop-in"
                on:click=move |ev| {
                    ev.stop_propagation();
                    route_click(disclosure, OverlayRegion::Panel);
                }
            >
                <button
                    on:click=move |_| disclosure.maybe_update(|d| d.clear())
                    class="absolute top-3 right-3 md:top-4 md:right-4 text-gray-400 hover:text-gray-700 transition-colors z-20 bg-white/50 hover:bg-gray-100 rounded-full p-1.5"
                    aria-label="Close project details"
                >
                    <i class="extra-close text-2xl" />
                </button>
                <div class="w-full h-56 md:h-72 overflow-hidden rounded-t-xl">
                    <img
                        src=record.image.as_str()
                        alt=record.title.as_str()
                        class="w-full h-full object-cover"
                    />
                </div>
                <div class="p-6 md:p-8 space-y-6">
                    <div>
                        <h2
                            id="project-detail-title"
                            class="text-3xl md:text-4xl font-bold mb-2 text-gray-900"
                        >
                            {record.title.as_str()}
                        </h2>
                        <TagList
                            tags=record.tags.as_slice()
                            pill_class="px-3 py-1 bg-gray-100 text-gray-700 rounded-full text-xs font-semibold"
                        />
                    </div>
                    <div class="prose prose-sm sm:prose-base max-w-none text-gray-700">
                        <Narrative heading="The Challenge:" body=record.details.challenge.as_str() />
                        <Narrative heading="Our Solution:" body=record.details.solution.as_str() />
                        <Narrative heading="Key Results:" body=record.details.results.as_str() />
                    </div>
                    {record.gallery().map(|images| view! { <Gallery record images /> })}
                    {record
                        .link
                        .as_deref()
                        .map(|link| {
                            view! {
                                <div class="mt-8 pt-6 border-t border-gray-200">
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center justify-center gap-2 w-full sm:w-auto bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg text-base font-semibold transition-colors duration-200 shadow-md hover:shadow-lg"
                                    >
                                        "Visit Project"
                                        <i class="extra-external-link" />
                                    </a>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

// Only a state change notifies, so ignored input never rebuilds the overlay.
fn dismiss_on_key(disclosure: RwSignal<Disclosure<'static>>, key: &str) {
    disclosure.maybe_update(|d| d.handle_key(key));
}

fn route_click(disclosure: RwSignal<Disclosure<'static>>, region: OverlayRegion) {
    disclosure.maybe_update(|d| d.handle_click(region));
}

#[component]
fn Narrative(heading: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-semibold text-gray-800 mb-1">{heading}</h4>
            <p>{body}</p>
        </div>
    }
}

#[component]
fn Gallery(record: &'static ProjectRecord, images: &'static [String]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-lg font-semibold text-gray-800 mb-3">"Gallery:"</h4>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-3 md:gap-4">
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <div class="aspect-video rounded-lg overflow-hidden shadow-md hover:shadow-lg hover:scale-[1.03] transition">
                                <img
                                    src=src.as_str()
                                    alt=record.gallery_alt(i)
                                    class="w-full h-full object-cover"
                                    loading="lazy"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::catalog::projects;

    fn zip_cracker() -> &'static ProjectRecord {
        projects()
            .iter()
            .find(|p| p.title == "Brute-Force ZIP Password Cracker")
            .expect("catalog should contain the ZIP cracker")
    }

    fn render(record: &'static ProjectRecord) -> String {
        Owner::new().with(|| {
            let disclosure = RwSignal::new(Disclosure::Open(record));
            view! { <ProjectDetail record disclosure /> }.to_html()
        })
    }

    #[test]
    fn test_zip_cracker_detail() {
        let html = render(zip_cracker());
        assert_eq!(html.matches("Brute-Force ZIP Password Cracker gallery image").count(), 2);
        assert!(html.contains("Gallery:"));
        assert_eq!(html.matches("Visit Project").count(), 1);
        assert!(html.contains("noopener noreferrer"));
    }

    #[test]
    fn test_no_link_no_call_to_action() {
        let record: &'static ProjectRecord = Box::leak(Box::new(ProjectRecord {
            link: None,
            ..zip_cracker().clone()
        }));
        let html = render(record);
        assert!(!html.contains("Visit Project"));
        assert_eq!(html.matches("gallery image").count(), 2);
    }

    #[test]
    fn test_empty_gallery_is_omitted() {
        let record = projects()
            .iter()
            .find(|p| p.title == "Hate Speech Detection using NLP")
            .expect("catalog should contain the NLP project");
        let html = render(record);
        assert!(!html.contains("Gallery:"));
        assert!(html.contains("The Challenge:"));
    }

    #[test]
    fn test_ignored_input_does_not_notify() {
        Owner::new().with(|| {
            let disclosure = RwSignal::new(Disclosure::Open(zip_cracker()));
            let runs = Arc::new(AtomicUsize::new(0));
            let shown = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    disclosure.with(|d| d.selected().map(|r| r.title.clone()))
                }
            });
            assert!(shown.get().is_some());
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            dismiss_on_key(disclosure, "ArrowDown");
            route_click(disclosure, OverlayRegion::Panel);
            assert!(shown.get().is_some());
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            route_click(disclosure, OverlayRegion::Backdrop);
            assert_eq!(shown.get(), None);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            // already closed, nothing to notify
            dismiss_on_key(disclosure, "Escape");
            assert_eq!(shown.get(), None);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        })
    }

    #[test]
    fn test_escape_closes_open_overlay() {
        Owner::new().with(|| {
            let disclosure = RwSignal::new(Disclosure::Open(zip_cracker()));
            dismiss_on_key(disclosure, "Escape");
            assert_eq!(disclosure.get_untracked(), Disclosure::Closed);
        })
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        Owner::new().with(|| {
            let disclosure = RwSignal::new(Disclosure::Closed);
            let html = view! { <ProjectDetailModal disclosure /> }.to_html();
            assert!(!html.contains("role=\"dialog\""));
        })
    }
}
