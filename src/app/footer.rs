use leptos::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};

// Set by build.rs at compile time.
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let build_year = BUILD_TIME.get(..4).unwrap_or("2025");

    view! {
        <footer class="bg-gray-900 border-t border-gray-800 py-10">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 flex flex-col items-center gap-4">
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-400 hover:text-teal-400 text-2xl"
                                    aria-label=link.label
                                >
                                    <i class=link.icon_class></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-gray-400 text-sm">
                    "© " {build_year} " " {OWNER_NAME} ". All rights reserved."
                </p>
                <p class="text-gray-600 text-xs">"Built with Rust and Leptos."</p>
            </div>
        </footer>
    }
}
