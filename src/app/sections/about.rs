use leptos::{html, prelude::*};

use super::use_reveal;

struct SkillGroup {
    name: &'static str,
    icon: &'static str,
    items: &'static [&'static str],
}

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        name: "Frontend",
        icon: "extra-code",
        items: &["React", "React Native", "JavaScript", "HTML/CSS", "TypeScript"],
    },
    SkillGroup {
        name: "Backend",
        icon: "extra-server",
        items: &["Java", "Python", "Node.js"],
    },
    SkillGroup {
        name: "Database",
        icon: "extra-database",
        items: &["MySQL", "DynamoDB"],
    },
];

const SCHOOL: &str = "New York Institute of Technology";
const GPA: &str = "3.94";

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="min-h-screen py-20 bg-gradient-to-b from-blue-50 to-white"
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-12">
                    <p class="text-blue-600 font-medium mb-2">"Get To Know More"</p>
                    <h2 class="section-title text-4xl font-bold text-gray-800">"About Me"</h2>
                </div>

                <div
                    class="grid grid-cols-1 md:grid-cols-5 gap-8 items-center section-reveal"
                    class:appear=move || revealed.get()
                >
                    // Profile Image
                    <div class="md:col-span-2">
                        <div class="relative">
                            <div class="absolute inset-0 bg-blue-500 rounded-3xl transform rotate-6"></div>
                            <div class="relative overflow-hidden rounded-3xl shadow-lg">
                                <img src="/pic.jpg" alt="Ashwin Thomas" class="w-full h-full object-cover" />
                            </div>
                        </div>
                    </div>

                    // About Text
                    <div class="md:col-span-3 space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                            <div class="bg-white p-6 rounded-2xl shadow-md text-center card-hover">
                                <div class="flex justify-center mb-4">
                                    <div class="w-12 h-12 bg-blue-100 rounded-full flex items-center justify-center text-blue-600">
                                        <i class="extra-award text-2xl"></i>
                                    </div>
                                </div>
                                <h3 class="text-xl font-semibold mb-2">"Experience"</h3>
                                <p class="text-lg font-medium mb-1">"4+ Years"</p>
                                <p class="text-gray-600">"Combined Experience"</p>
                            </div>

                            <div class="bg-white p-6 rounded-2xl shadow-md text-center card-hover">
                                <div class="flex justify-center mb-4">
                                    <div class="w-12 h-12 bg-blue-100 rounded-full flex items-center justify-center text-blue-600">
                                        <i class="extra-code text-2xl"></i>
                                    </div>
                                </div>
                                <h3 class="text-xl font-semibold mb-2">"Education"</h3>
                                <p class="text-lg font-medium mb-1">"GPA: " {GPA}</p>
                                <p class="text-gray-600">{SCHOOL}</p>
                            </div>
                        </div>

                        <div class="bg-white p-6 rounded-2xl shadow-md card-hover">
                            <h3 class="text-xl font-semibold mb-4">"My Skills"</h3>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {SKILLS
                                    .iter()
                                    .map(|group| {
                                        view! {
                                            <div class="space-y-2">
                                                <div class="flex items-center text-blue-600 mb-2">
                                                    <i class=format!("{} mr-2", group.icon)></i>
                                                    <h4 class="font-medium">{group.name}</h4>
                                                </div>
                                                <ul>
                                                    {group
                                                        .items
                                                        .iter()
                                                        .map(|skill| {
                                                            view! {
                                                                <li class="flex items-center text-gray-600 mb-1">
                                                                    <span class="text-blue-500 mr-2">"•"</span>
                                                                    {*skill}
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <p class="text-gray-600 leading-relaxed bg-white p-6 rounded-2xl shadow-md">
                            "Hi there! I'm Ashwin Thomas, a senior Computer Science major with a Mathematics minor at the New York Institute of Technology, paving my way to obtain the Accelerated Masters degree in Data Science. As an aspiring programmer, I'm always looking for opportunities to apply my skills and learn more about the industry."
                            <br />
                            <br />
                            "I'm particularly interested in combining finance, data, and technology, and have worked on several projects in these areas. My goal is to leverage my analytical and technical skills to drive data-driven decisions and solutions in a software engineering or data science role."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
