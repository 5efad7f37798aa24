use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{self, ContactForm, SubmissionStatus, CONTACT_ENDPOINT};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-gray-50 border border-gray-300 text-gray-900 placeholder-gray-500 focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none transition-all";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let submitting = Memo::new(move |_| form.with(|f| f.status.is_submitting()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        log::info!("sending contact form");
        spawn_local(async move {
            let result = contact::submit(CONTACT_ENDPOINT, &payload).await;
            form.update(|f| f.finish(result));
        });
    };

    view! {
        <section id="contact" class="py-32 bg-gradient-to-b from-white to-gray-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 section-content">
                <h2 class="text-5xl font-bold mb-8 text-center text-gray-900">
                    "Let's Create Something Amazing"
                </h2>
                <p class="text-xl text-gray-600 mb-12 max-w-2xl mx-auto text-center">
                    "Whether you have a project in mind or just want to chat, I'm always open to discussing new opportunities."
                </p>
                <div class="max-w-2xl mx-auto">
                    <div class="p-8 rounded-2xl bg-white shadow-xl">
                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <label for="name" class=LABEL_CLASS>
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Your name"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="email" class=LABEL_CLASS>
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Your email"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="message" class=LABEL_CLASS>
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Your message"
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="w-full flex items-center justify-center gap-2 bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white px-8 py-4 rounded-lg text-lg font-semibold transition-all duration-300 shadow hover:shadow-md hover:scale-[1.02] active:scale-[0.98] disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                                <i class="extra-send" />
                            </button>
                            {move || {
                                form.with(|f| match &f.status {
                                    SubmissionStatus::Success(msg) => {
                                        Some(
                                            Either::Left(
                                                view! {
                                                    <p role="status" class="text-center text-green-600 font-medium">
                                                        {msg.clone()}
                                                    </p>
                                                },
                                            ),
                                        )
                                    }
                                    SubmissionStatus::Error(msg) => {
                                        Some(
                                            Either::Right(
                                                view! {
                                                    <p role="alert" class="text-center text-red-600 font-medium">
                                                        {msg.clone()}
                                                    </p>
                                                },
                                            ),
                                        )
                                    }
                                    SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
                                })
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
