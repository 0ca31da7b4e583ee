use leptos::prelude::*;

use crate::scroll::SectionId;

use super::super::social::SocialButtons;
use super::super::typewriter::Typewriter;

const HERO_PHRASES: &[&str] = &[
    "Problem Solver",
    "Computer Science Student",
    "Software Developer",
    "UI/UX Enthusiast",
];

/// Hero section. The action buttons route through the shared
/// navigate-to-section command rather than raw anchor jumps.
#[component]
pub fn HomeSection(#[prop(into)] on_navigate: Callback<SectionId>) -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex flex-col justify-center items-center relative bg-gradient-to-b from-white to-blue-50 pt-20"
        >
            // Background decoration
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -right-40 -top-40 w-96 h-96 rounded-full bg-blue-100 opacity-50"></div>
                <div class="absolute -left-20 top-1/3 w-64 h-64 rounded-full bg-blue-100 opacity-30"></div>
                <div class="absolute right-20 bottom-20 w-48 h-48 rounded-full bg-blue-200 opacity-30"></div>
            </div>

            <div class="container mx-auto px-6 text-center z-10">
                <div class="mb-4 fade-up">
                    <span class="inline-block px-4 py-2 bg-blue-100 text-blue-600 rounded-full text-sm font-medium mb-4">
                        "Welcome to my portfolio"
                    </span>
                </div>

                <h1 class="text-5xl md:text-6xl font-bold text-gray-800 mb-6 fade-up">
                    "Hi, I'm " <span class="text-blue-600">"Ashwin Thomas"</span>
                </h1>

                <div class="text-xl md:text-2xl text-gray-600 mb-12 fade-up">
                    <Typewriter phrases=HERO_PHRASES />
                </div>

                // Social and Resume Buttons Bar
                <div class="mb-16 fade-up">
                    <SocialButtons />
                </div>

                // Action Buttons
                <div class="flex flex-wrap justify-center gap-6 fade-up">
                    <button
                        class="custom-button"
                        on:click=move |_| on_navigate.run(SectionId::Projects)
                    >
                        "View My Work"
                    </button>

                    <button
                        class="custom-button-outline"
                        on:click=move |_| on_navigate.run(SectionId::Contact)
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 scroll-cue">
                <i class="extra-arrow-down text-blue-600 text-3xl"></i>
            </div>
        </section>
    }
}
