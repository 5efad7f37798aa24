use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="py-12 border-t border-gray-200 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <div>
                        <h3 class="text-2xl font-bold mb-4 text-gray-900">"P Sudarsan"</h3>
                        <p class="text-gray-600">
                            "Turning ideas into elegant code & seamless experiences."
                        </p>
                    </div>
                    <div class="flex justify-start md:justify-end space-x-6">
                        <a
                            href="https://github.com/sudarsansda"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-500 hover:text-blue-600 hover:scale-110 transition text-2xl"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href="mailto:sudarsanjcr@gmail.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-500 hover:text-blue-600 hover:scale-110 transition text-2xl"
                            aria-label="Send Email"
                        >
                            <i class="extra-email"></i>
                        </a>
                    </div>
                </div>
                <div class="mt-12 pt-8 border-t border-gray-200 text-center text-gray-600">
                    <p>{format!("© {year} P Sudarsan. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
