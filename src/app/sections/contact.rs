use leptos::{either::Either, html, prelude::*, task::spawn_local};

use crate::contact::{ContactMessage, SubmitStatus, STATUS_RESET_DELAY};

use super::use_reveal;

struct ContactInfo {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    link: Option<&'static str>,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "extra-email",
        label: "Email",
        value: "ashwin.thomas2003@outlook.com",
        link: Some("mailto:ashwin.thomas2003@outlook.com"),
    },
    ContactInfo {
        icon: "extra-phone",
        label: "Phone",
        value: "+1 516-667-4078",
        link: Some("tel:+15166674078"),
    },
    ContactInfo {
        icon: "extra-location",
        label: "Location",
        value: "Franklin Square, NY",
        link: None,
    },
    ContactInfo {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "linkedin.com/in/ashwin-thomas-9a1393256",
        link: Some("https://linkedin.com/in/ashwin-thomas-9a1393256/"),
    },
    ContactInfo {
        icon: "devicon-github-plain",
        label: "GitHub",
        value: "github.com/ashwinthomas03",
        link: Some("https://github.com/ashwinthomas03"),
    },
];

/// Forwards a contact message to the transactional-email relay.
#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use crate::contact::{deliver_message, EmailRelay};

    let relay = EmailRelay::from_env();
    deliver_message(&relay, &message).await.map_err(|e| {
        log::error!("contact delivery failed: {e}");
        ServerFnError::new("couldn't deliver message")
    })
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !status.get_untracked().can_submit() {
            return;
        }
        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        set_status(SubmitStatus::Pending);
        spawn_local(async move {
            let result = send_contact_message(draft).await;
            if let Err(e) = &result {
                log::error!("error sending message: {e}");
            }
            let settled = SubmitStatus::settle(&result);
            if settled.clears_draft() {
                set_name(String::new());
                set_email(String::new());
                set_message(String::new());
            }
            set_status(settled);
            set_timeout(
                move || {
                    // leave an attempt started during the status display alone
                    set_status.update(|s| {
                        if *s != SubmitStatus::Pending {
                            *s = SubmitStatus::Idle;
                        }
                    });
                },
                STATUS_RESET_DELAY,
            );
        });
    };

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="min-h-screen py-20 bg-gradient-to-t from-blue-50 to-white"
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-12">
                    <p class="text-blue-600 font-medium mb-2">"Get In Touch"</p>
                    <h2 class="section-title text-4xl font-bold text-gray-800">"Contact Me"</h2>
                </div>

                <div
                    class="grid grid-cols-1 lg:grid-cols-2 gap-8 section-reveal"
                    class:appear=move || revealed.get()
                >
                    // Contact Information
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold text-gray-800">"Let's Connect"</h3>
                        <p class="text-gray-600 mb-6">
                            "Feel free to reach out if you're looking for a developer, have a question, or just want to connect."
                        </p>

                        <div class="space-y-4">
                            {CONTACT_INFO.iter().map(|info| view! { <ContactInfoRow info /> }).collect_view()}
                        </div>
                    </div>

                    // Contact Form
                    <div>
                        <div class="bg-white p-8 rounded-2xl shadow-md">
                            <h3 class="text-2xl font-semibold text-gray-800 mb-6">"Send Me a Message"</h3>

                            <form class="space-y-4" on:submit=handle_submit>
                                <div>
                                    <label for="name" class="block text-gray-700 mb-2">"Name"</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        prop:value=move || name.get()
                                        on:input=move |ev| set_name(event_target_value(&ev))
                                        class="form-input w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        placeholder="Your name"
                                        required
                                    />
                                </div>

                                <div>
                                    <label for="email" class="block text-gray-700 mb-2">"Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| set_email(event_target_value(&ev))
                                        class="form-input w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        placeholder="Your email"
                                        required
                                    />
                                </div>

                                <div>
                                    <label for="message" class="block text-gray-700 mb-2">"Message"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        prop:value=move || message.get()
                                        on:input=move |ev| set_message(event_target_value(&ev))
                                        class="form-input w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        placeholder="Your message"
                                        rows="5"
                                        required
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    prop:disabled=move || !status.get().can_submit()
                                    class="custom-button w-full flex items-center justify-center"
                                >
                                    {move || {
                                        if status.get() == SubmitStatus::Pending {
                                            Either::Left(
                                                view! {
                                                    <span class="inline-block animate-spin mr-2">"⟳"</span>
                                                    "Sending..."
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <i class="extra-send mr-2"></i>
                                                    "Send Message"
                                                },
                                            )
                                        }
                                    }}
                                </button>

                                {move || match status.get() {
                                    SubmitStatus::Success => {
                                        Some(
                                            view! {
                                                <p class="text-green-600 text-center mt-4 fade-up">
                                                    "Message sent successfully!"
                                                </p>
                                            }
                                            .into_any(),
                                        )
                                    }
                                    SubmitStatus::Error => {
                                        Some(
                                            view! {
                                                <p class="text-red-600 text-center mt-4 fade-up">
                                                    "There was an error sending your message. Please try again."
                                                </p>
                                            }
                                            .into_any(),
                                        )
                                    }
                                    _ => None,
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </div>

            // Footer
            <div class="mt-20 py-6 border-t border-gray-200">
                <div class="container mx-auto px-6 text-center space-y-2">
                    <p class="text-gray-600">
                        "© " {env!("BUILD_YEAR")} " Ashwin Thomas. All rights reserved."
                    </p>
                    <p class="text-gray-600">
                        "This website was designed using Figma and developed using Rust, Leptos, and TailwindCSS"
                    </p>
                    <p class="text-gray-600">"Thank you for visiting my portfolio!"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfoRow(info: &'static ContactInfo) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="w-12 h-12 bg-blue-100 rounded-full flex items-center justify-center text-blue-600 mr-4">
                <i class=info.icon></i>
            </div>
            <div>
                <h4 class="text-lg font-medium text-gray-800">{info.label}</h4>
                {match info.link {
                    Some(link) => {
                        let external = link.starts_with("http");
                        Either::Left(
                            view! {
                                <a
                                    href=link
                                    class="text-gray-600 hover:text-blue-600 transition-colors"
                                    target=if external { "_blank" } else { "_self" }
                                    rel=if external { "noopener noreferrer" } else { "" }
                                >
                                    {info.value}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(view! { <p class="text-gray-600">{info.value}</p> }),
                }}
            </div>
        </div>
    }
}
