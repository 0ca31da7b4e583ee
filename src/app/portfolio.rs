use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_media_query, use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::scroll::{self, MenuState, SectionId};

use super::navigation::Navigation;
use super::sections::{AboutSection, ContactSection, ExperienceSection, HomeSection, ProjectsSection};

const LOADING_SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Document offset of a section's top edge, measured fresh from layout.
fn section_top(id: SectionId, scroll_y: f64) -> Option<f64> {
    document()
        .get_element_by_id(id.as_str())
        .map(|el| el.get_bounding_client_rect().top() + scroll_y)
}

/// The one page of the site. Owns all cross-cutting state (active
/// section, scroll progress, menu, splash) and passes it down read-only;
/// children ask for changes through callbacks.
#[component]
pub fn Portfolio() -> impl IntoView {
    let (active_section, set_active_section) = signal(SectionId::Home);
    let (scroll_progress, set_scroll_progress) = signal(0.0f64);
    let (menu, set_menu) = signal(MenuState::Closed);
    let (show_scroll_top, set_show_scroll_top) = signal(false);
    let (loading_complete, set_loading_complete) = signal(false);

    let (_scroll_x, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, height } = use_window_size();
    let is_desktop = use_media_query(scroll::DESKTOP_MEDIA_QUERY);

    // Initial loading splash
    Effect::new(move |_| {
        set_timeout(
            move || set_loading_complete(true),
            LOADING_SPLASH_DURATION,
        );
    });

    // Recompute scroll-derived state on every scroll and resize. Each
    // pass reads fresh layout metrics; with five sections the full
    // recomputation is cheap enough to skip throttling.
    Effect::new(move |_| {
        let y = scroll_y.get();
        let viewport_height = height.get();
        width.track();

        let tops = SectionId::ALL
            .iter()
            .filter_map(|id| section_top(*id, y).map(|top| (*id, top)))
            .collect::<Vec<_>>();
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();

        set_active_section(scroll::active_section(y, &tops));
        set_scroll_progress(scroll::scroll_progress(y, document_height, viewport_height));
        set_show_scroll_top(y > scroll::SCROLL_TOP_THRESHOLD);
    });

    // Crossing into the desktop layout retires the mobile menu
    Effect::new(move |_| {
        if is_desktop.get() {
            set_menu(MenuState::Closed);
        }
    });

    let scroll_to_section = Callback::new(move |id: SectionId| {
        let y = scroll_y.get_untracked();
        if let Some(top) = section_top(id, y) {
            // smooth behavior comes from the scroll-behavior CSS rule
            window().scroll_to_with_x_and_y(0.0, scroll::scroll_target(top));
        }
        set_menu(MenuState::Closed);
    });

    let toggle_menu = Callback::new(move |_: ()| {
        set_menu(menu.get_untracked().toggled());
    });

    view! {
        <Title text="Portfolio" />

        {move || {
            if loading_complete.get() {
                None
            } else {
                Some(
                    view! {
                        <div class="fixed inset-0 bg-white flex items-center justify-center z-50">
                            <div class="text-center">
                                <div class="mb-4 text-blue-600 loading-mark">
                                    <span class="text-5xl font-bold">
                                        <span>"<"</span>
                                        "Ashwin.dev"
                                        <span>"/>"</span>
                                    </span>
                                </div>
                                <div class="h-1 bg-blue-500 max-w-md mx-auto loading-bar"></div>
                            </div>
                        </div>
                    },
                )
            }
        }}

        <div class=move || {
            if loading_complete.get() {
                "relative min-h-screen bg-gray-50 content-reveal"
            } else {
                "relative min-h-screen bg-gray-50 opacity-0"
            }
        }>
            // Scroll progress indicator
            <div
                class="scroll-indicator"
                style:width=move || format!("{}%", scroll_progress.get())
            ></div>

            <Navigation
                active_section=active_section
                scrolled=Signal::derive(move || scroll_y.get() > scroll::NAV_SCROLL_THRESHOLD)
                menu_open=Signal::derive(move || menu.get().is_open())
                on_navigate=scroll_to_section
                on_toggle_menu=toggle_menu
            />

            <main>
                <HomeSection on_navigate=scroll_to_section />
                <AboutSection />
                <ExperienceSection />
                <ProjectsSection />
                <ContactSection />
            </main>

            {move || {
                if !show_scroll_top.get() {
                    None
                } else {
                    Some(
                        view! {
                            <button
                                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                                class="fixed right-6 bottom-6 w-12 h-12 rounded-full bg-blue-600 text-white shadow-lg flex items-center justify-center z-40 hover:scale-110 transition-transform duration-200"
                                aria-label="Scroll to top"
                            >
                                <i class="extra-arrow-up"></i>
                            </button>
                        },
                    )
                }
            }}
        </div>
    }
}
