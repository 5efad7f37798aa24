use std::time::Duration;

use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::chrome::{
    anchor_target, is_scrolled, section_scroll_top, MobileMenu, NavItem, MOBILE_SCROLL_DELAY_MS,
    NAV_ITEMS,
};

const DESKTOP_LINK_CLASS: &str =
    "text-gray-700 hover:text-blue-600 transition-colors px-1 font-medium relative group";
const MOBILE_LINK_CLASS: &str = "block w-full px-3 py-2 rounded-md text-base font-medium text-gray-700 hover:text-gray-900 hover:bg-gray-50 text-left";

#[component]
pub fn NavBar(hero_ref: NodeRef<html::Header>) -> impl IntoView {
    let nav_ref = NodeRef::<html::Nav>::new();
    let (menu, set_menu) = signal(MobileMenu::default());

    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| {
        let hero_height = hero_ref.get().map(|el| el.offset_height() as f64);
        is_scrolled(scroll_y.get(), hero_height)
    });

    let UseWindowSizeReturn { width, .. } = use_window_size();
    Effect::new(move |_| {
        let width = width.get();
        if menu.get_untracked().is_open() {
            set_menu.update(|m| m.on_resize(width));
        }
    });

    let nav_to = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        set_menu.update(|m| m.close());
        let Some(id) = anchor_target(href) else {
            return;
        };
        set_timeout(
            move || {
                let nav_height = nav_ref.get_untracked().map(|el| el.offset_height() as f64);
                scroll_to_section(id, nav_height);
            },
            Duration::from_millis(MOBILE_SCROLL_DELAY_MS),
        );
    };

    view! {
        <nav
            node_ref=nav_ref
            class=move || {
                if scrolled.get() || menu.get().is_open() {
                    "fixed w-full z-50 transition-all duration-300 bg-white/90 backdrop-blur-lg shadow-md"
                } else {
                    "fixed w-full z-50 transition-all duration-300 bg-transparent"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="#top"
                        class="text-xl font-bold text-gray-900 cursor-pointer"
                        on:click=move |ev| nav_to(ev, "#top")
                    >
                        "SDA"
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS.iter().map(|item| view! { <DesktopLink item /> }).collect_view()}
                    </div>
                    <div class="md:hidden flex items-center">
                        <button
                            on:click=move |_| set_menu.update(|m| m.toggle())
                            class="p-2 inline-flex items-center justify-center rounded-md text-gray-700 hover:text-gray-900 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-blue-500 transition"
                            aria-expanded=move || menu.get().is_open().to_string()
                            aria-label=move || menu.get().aria_label()
                        >
                            <i class=move || {
                                if menu.get().is_open() {
                                    "extra-close text-2xl"
                                } else {
                                    "extra-menu text-2xl"
                                }
                            } />
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-white shadow-lg absolute top-full left-0 right-0 z-40 overflow-hidden border-t border-gray-200">
                    <div class="px-2 pt-2 pb-4 space-y-1 sm:px-3">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class=MOBILE_LINK_CLASS
                                        on:click=move |ev| nav_to(ev, item.href)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn DesktopLink(item: &'static NavItem) -> impl IntoView {
    view! {
        <a href=item.href class=DESKTOP_LINK_CLASS>
            {item.label}
            <span class="absolute bottom-0 left-0 h-0.5 bg-blue-600 w-0 group-hover:w-full transition-all duration-300"></span>
        </a>
    }
}

fn scroll_to_section(id: &str, nav_height: Option<f64>) {
    let Some(target) = document().get_element_by_id(id) else {
        log::warn!("scroll target #{id} not found");
        return;
    };
    let window = window();
    let page_offset = window.page_y_offset().unwrap_or_default();
    let top = section_scroll_top(
        target.get_bounding_client_rect().top(),
        page_offset,
        nav_height,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
