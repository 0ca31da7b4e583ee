use leptos::{html, prelude::*};

use super::use_reveal;

struct ExperienceEntry {
    company: &'static str,
    position: &'static str,
    location: &'static str,
    duration: &'static str,
    responsibilities: &'static [&'static str],
    skills: &'static [&'static str],
}

const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Altice USA Inc.",
        position: "Software Developer Intern",
        location: "Bethpage, NY",
        duration: "Jan 2025 - Present",
        responsibilities: &[
            "Coding in Python to create automations, streamline processes, and improve overall system efficiency",
            "Contributing to the development and maintenance of software solutions for Optimum's Network Operations Center (NOC)",
            "Assisting in the identification of repetitive and long-running tasks to improve workflow efficiency",
        ],
        skills: &["Python", "Automation", "Software Development"],
    },
    ExperienceEntry {
        company: "New York Institute of Technology",
        position: "Information Technology Support Student Technician II",
        location: "Old Westbury, NY",
        duration: "Aug 2022 - Present",
        responsibilities: &[
            "Service phone, email, and web-based service requests, including password resets and software installations",
            "Assist the New York Tech community with UNIFLOW print account and troubleshooting",
            "Route tickets to the appropriate departments for efficient issue resolution",
        ],
        skills: &["IT Support", "Technical Troubleshooting", "Customer Service"],
    },
    ExperienceEntry {
        company: "Sub360 Inc.",
        position: "Software Engineering Intern",
        location: "Remote",
        duration: "Jun 2024 - Sep 2024",
        responsibilities: &[
            "Develop reusable React components to enhance application performance",
            "Implement responsive design in React components, ensuring compatibility across various devices",
            "Utilize Storybook for building, testing, and documenting React components",
        ],
        skills: &["React", "Responsive Design", "Component Development", "Storybook"],
    },
    ExperienceEntry {
        company: "The National Urban Technology Center Inc.",
        position: "Computer Science Intern",
        location: "New York, NY",
        duration: "Feb 2023 - Jun 2023",
        responsibilities: &[
            "Developed website and webpages using CSS, JavaScript, and HTML",
            "Managed Google ads to enhance online presence",
            "Collaborated with the social media team to design effective social media posts",
        ],
        skills: &["Web Development", "HTML/CSS", "JavaScript", "Digital Marketing"],
    },
    ExperienceEntry {
        company: "Consolidated Shipping Line Private Ltd.",
        position: "Computer Assistant",
        location: "Kerala, India",
        duration: "Jul 2019 - Aug 2019",
        responsibilities: &[
            "Created Management Information System (MIS) reports using MySQL",
            "Designed creatives for departmental meetings",
        ],
        skills: &["MySQL", "MIS Reporting", "Graphic Design"],
    },
];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            id="experience"
            node_ref=section_ref
            class="min-h-screen py-32 bg-gradient-to-b from-white to-blue-50"
        >
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center mb-16">
                    <p class="text-blue-600 font-medium mb-2">"My Professional Journey"</p>
                    <h2 class="section-title text-4xl font-bold text-gray-800">"Work Experience"</h2>
                </div>

                <div class="relative">
                    // Timeline vertical line
                    <div class="absolute left-0 md:left-1/2 top-0 h-full w-0.5 bg-blue-500 transform md:translate-x-[-0.5px] z-10 hidden md:block"></div>

                    <div class="space-y-16 section-reveal" class:appear=move || revealed.get()>
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, exp)| {
                                let card_side = if index % 2 == 0 { "md:mr-auto" } else { "md:ml-auto" };
                                view! {
                                    <div class="relative">
                                        // Circle indicator on the timeline
                                        <div class="absolute left-[-8px] md:left-1/2 top-6 w-4 h-4 rounded-full bg-blue-500 transform md:translate-x-[-8px] z-20 hidden md:block"></div>

                                        <div class=format!(
                                            "w-full md:w-[calc(50%-20px)] {card_side} bg-white p-6 rounded-xl shadow-md hover:shadow-lg transition-all duration-300 relative",
                                        )>
                                            // Date tag
                                            <div class="absolute top-4 right-4">
                                                <span class="timeline-date flex items-center">
                                                    <i class="extra-calendar mr-1 text-blue-500"></i>
                                                    {exp.duration}
                                                </span>
                                            </div>

                                            <div class="mb-8 pt-6">
                                                <h3 class="text-xl font-semibold text-gray-800 mb-1">{exp.company}</h3>
                                                <p class="text-blue-600 font-medium flex items-center mb-1">
                                                    <i class="extra-briefcase mr-2"></i>
                                                    {exp.position}
                                                </p>
                                                <p class="text-gray-600 flex items-center">
                                                    <i class="extra-location mr-2"></i>
                                                    {exp.location}
                                                </p>
                                            </div>

                                            <ul class="text-gray-600 space-y-2 mb-4">
                                                {exp.responsibilities
                                                    .iter()
                                                    .map(|item| {
                                                        view! {
                                                            <li class="flex items-start">
                                                                <span class="text-blue-500 mr-2">"•"</span>
                                                                {*item}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>

                                            <div class="flex flex-wrap gap-3 mt-4">
                                                {exp.skills
                                                    .iter()
                                                    .map(|skill| view! { <span class="skill-tag">{*skill}</span> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
