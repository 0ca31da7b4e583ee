use leptos::{either::Either, html, prelude::*};

use super::use_reveal;

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    technologies: &'static [&'static str],
    github: &'static str,
    live: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Travel AI Scheduler",
        description: "An intelligent travel scheduler app that uses AI to generate custom itineraries based on user choices and responses.",
        image: "/placeholder-travel.jpg",
        technologies: &["React", "TypeScript", "SCSS", "DynamoDB"],
        github: "https://github.com/ashwinthomas03/TravelAI.git",
        live: None,
    },
    Project {
        title: "Fitness App",
        description: "A comprehensive fitness application offering tailored workout plans for specific muscle groups, calorie tracking, water intake monitoring, and a workout log.",
        image: "/placeholder-fitness.jpg",
        technologies: &["React Native", "MySQL", "JavaScript", "CSS"],
        github: "https://github.com/ashwinthomas03/fitness-app",
        live: None,
    },
    Project {
        title: "Instant Messenger",
        description: "A real-time messaging application with a server that allows multiple clients to communicate over a TCP connection.",
        image: "/placeholder-messenger.jpg",
        technologies: &["Java", "Sockets"],
        github: "https://github.com/ashwinthomas03/instant-messenger",
        live: None,
    },
    Project {
        title: "Bank Program",
        description: "A secure banking application featuring authentication, deposit, withdraw, account dashboard, profile update, and support for multiple accounts.",
        image: "/placeholder-bank.jpg",
        technologies: &["Java", "MySQL"],
        github: "https://github.com/ashwinthomas03/bank-program",
        live: None,
    },
    Project {
        title: "Inventory Management System",
        description: "A comprehensive warehouse inventory system with item management and a tkinter frontend featuring login, signup, and a dashboard.",
        image: "/placeholder-inventory.jpg",
        technologies: &["Python", "Tkinter"],
        github: "https://github.com/ashwinthomas03/inventory-system",
        live: None,
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id="projects" node_ref=section_ref class="min-h-screen py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-12">
                    <p class="text-blue-600 font-medium mb-2">"My Recent Work"</p>
                    <h2 class="section-title text-4xl font-bold text-gray-800">"Projects"</h2>
                </div>

                <div
                    class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 section-reveal"
                    class:appear=move || revealed.get()
                >
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    // Image failure is expected (placeholder paths); fall back to a glyph.
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <div class="project-card">
            <div class="relative h-48 mb-6 overflow-hidden rounded-lg bg-blue-100 flex items-center justify-center">
                {move || {
                    if image_failed.get() {
                        Either::Left(view! { <i class="extra-code text-blue-500 text-5xl"></i> })
                    } else {
                        Either::Right(
                            view! {
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-full object-cover"
                                    on:error=move |_| set_image_failed(true)
                                />
                            },
                        )
                    }
                }}
                <div class="project-overlay rounded-lg">
                    <div class="flex space-x-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-white bg-blue-700 hover:bg-blue-800 rounded-full p-2"
                            aria-label="View source on GitHub"
                        >
                            <i class="devicon-github-plain text-xl"></i>
                        </a>
                        {project
                            .live
                            .map(|live| {
                                view! {
                                    <a
                                        href=live
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-white bg-blue-700 hover:bg-blue-800 rounded-full p-2"
                                        aria-label="View live site"
                                    >
                                        <i class="extra-link text-xl"></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>

            <h3 class="text-xl font-semibold text-gray-800 mb-2">{project.title}</h3>
            <p class="text-gray-600 mb-4">{project.description}</p>

            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! { <span class="skill-tag">{*tech}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
