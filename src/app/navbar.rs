use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::NAV_ITEMS;
use crate::scrollspy::{active_section, header_scrolled, SectionSpan, REFERENCE_LINE_PX};

/// Smooth-scrolls to a section by anchor id. A missing element is a no-op.
pub(super) fn scroll_to_anchor(anchor: &str) {
    if let Some(el) = document().get_element_by_id(anchor) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Reads the current vertical span of every section that exists in the
/// document, preserving nav order.
fn section_spans() -> Vec<SectionSpan> {
    NAV_ITEMS
        .iter()
        .filter_map(|item| {
            document().get_element_by_id(item.anchor).map(|el| {
                let rect = el.get_bounding_client_rect();
                SectionSpan {
                    anchor: item.anchor,
                    top: rect.top(),
                    bottom: rect.bottom(),
                }
            })
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (active, set_active) = signal("home");
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Scroll-spy: pick the first section whose span contains the reference
    // line, and flip the header style once past the shadow threshold.
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled(header_scrolled(y));
        if let Some(anchor) = active_section(&section_spans(), REFERENCE_LINE_PX) {
            set_active(anchor);
        }
    });

    let nav_link = move |anchor: &'static str, label: &'static str, mobile: bool| {
        let is_active = move || active() == anchor;
        let class = move || {
            if mobile {
                if is_active() {
                    "block px-3 py-2 rounded-md text-base font-medium text-teal-400"
                } else {
                    "block px-3 py-2 rounded-md text-base font-medium text-gray-300 hover:text-white"
                }
            } else if is_active() {
                "text-sm font-medium transition-all duration-300 relative text-teal-400"
            } else {
                "text-sm font-medium transition-all duration-300 relative text-gray-300 hover:text-white"
            }
        };
        view! {
            <a
                href=format!("#{anchor}")
                class=class
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_anchor(anchor);
                    set_menu_open(false);
                }
            >
                {label}
                {move || {
                    (is_active() && !mobile)
                        .then(|| {
                            view! {
                                <span class="absolute left-0 -bottom-1 w-full h-[2px] bg-teal-400 rounded-full"></span>
                            }
                        })
                }}
            </a>
        }
    };

    view! {
        <header class="fixed top-4 z-50 w-full flex justify-center">
            <div class=move || {
                let base = "flex items-center justify-between px-6 py-3 rounded-full shadow-lg transition-all duration-300 w-[90%] md:w-[70%]";
                if scrolled() {
                    format!("{base} bg-black/80 backdrop-blur-md border border-gray-700")
                } else {
                    format!("{base} bg-black/60 backdrop-blur-sm")
                }
            }>
                <a
                    href="#home"
                    class="flex items-center text-lg font-bold text-white"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_anchor("home");
                    }
                >
                    <div class="w-8 h-8 bg-green-500 rounded-lg flex items-center justify-center mr-2">
                        <span class="text-black font-bold text-sm">"S"</span>
                    </div>
                    "Siddhesh"
                </a>

                <nav class="hidden md:flex flex-1 justify-center">
                    <ul class="flex space-x-6">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! { <li>{nav_link(item.anchor, item.label, false)}</li> }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <button
                    class="md:hidden p-2 rounded-md text-gray-300 hover:text-teal-400"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open(!menu_open.get_untracked())
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="absolute top-16 w-[90%] md:hidden bg-black/95 backdrop-blur-md rounded-2xl shadow-lg border border-gray-700 px-4 py-4 space-y-2">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|item| nav_link(item.anchor, item.label, true))
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </header>
    }
}
