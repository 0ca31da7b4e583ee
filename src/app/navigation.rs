use leptos::prelude::*;

use crate::scroll::SectionId;

/// Fixed top navigation. All state arrives read-only; selecting a link
/// or the hamburger only fires the callbacks back up.
#[component]
pub fn Navigation(
    #[prop(into)] active_section: Signal<SectionId>,
    #[prop(into)] scrolled: Signal<bool>,
    #[prop(into)] menu_open: Signal<bool>,
    #[prop(into)] on_navigate: Callback<SectionId>,
    #[prop(into)] on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let link_class = move |section: SectionId| {
        if active_section.get() == section {
            "capitalize px-4 py-2 rounded-md transition-colors duration-300 text-blue-600 font-medium bg-blue-50"
        } else {
            "capitalize px-4 py-2 rounded-md transition-colors duration-300 text-gray-600 hover:text-blue-600 hover:bg-gray-100"
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() { "fixed top-0 w-full z-50 nav-scroll scrolled" } else { "fixed top-0 w-full z-50 nav-scroll" }
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    // Logo/Title
                    <h1 class="text-xl font-bold text-gray-800">
                        <span class="text-blue-600">"<"</span>
                        "Ashwin.build(dev)"
                        <span class="text-blue-600">"/>"</span>
                    </h1>

                    // Hamburger Icon (for mobile)
                    <button
                        class="lg:hidden text-3xl flex items-center justify-center"
                        on:click=move |_| on_toggle_menu.run(())
                        aria-label="Toggle menu"
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <i class="extra-close"></i> }.into_any()
                            } else {
                                view! { <i class="extra-menu"></i> }.into_any()
                            }
                        }}
                    </button>

                    // Desktop Menu
                    <div class="hidden lg:flex space-x-6">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class=move || link_class(section)
                                        on:click=move |_| on_navigate.run(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Mobile Menu
            <div class=move || {
                if menu_open.get() {
                    "lg:hidden overflow-hidden mobile-menu open"
                } else {
                    "lg:hidden overflow-hidden mobile-menu"
                }
            }>
                <div class="flex flex-col items-center py-4">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            let entry_class = move || {
                                if active_section.get() == section {
                                    "capitalize w-full text-blue-600 font-medium bg-blue-50 py-3 px-6 text-center"
                                } else {
                                    "capitalize w-full text-gray-600 hover:text-blue-600 hover:bg-gray-100 py-3 px-6 text-center"
                                }
                            };
                            view! {
                                <button class=entry_class on:click=move |_| on_navigate.run(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
