use leptos::prelude::*;

const LINKEDIN_URL: &str = "https://linkedin.com/in/ashwin-thomas-9a1393256/";
const GITHUB_URL: &str = "https://github.com/ashwinthomas03";
const EMAIL_ADDRESS: &str = "ashwin.thomas2003@outlook.com";
const RESUME_URL: &str =
    "https://raw.githubusercontent.com/ashwinthomas03/ashwin-portfolio/main/Ashwin_Thomas_Resume..pdf";

/// Social profile and resume buttons shown under the hero headline.
#[component]
pub fn SocialButtons() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center space-x-8 py-4">
            <a
                href=LINKEDIN_URL
                target="_blank"
                rel="noopener noreferrer"
                class="social-icon linkedin"
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain text-white text-2xl"></i>
            </a>

            <a
                href=GITHUB_URL
                target="_blank"
                rel="noopener noreferrer"
                class="social-icon github"
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain text-white text-2xl"></i>
            </a>

            <a
                href=format!("mailto:{EMAIL_ADDRESS}")
                class="social-icon email"
                aria-label="Email Me"
            >
                <i class="extra-email text-white text-2xl"></i>
            </a>

            <a
                href=RESUME_URL
                target="_blank"
                rel="noopener noreferrer"
                class="resume-button-styled"
                aria-label="View Resume"
            >
                <span class="pdf-icon">"PDF"</span>
                <span class="ml-2">"My Resume"</span>
            </a>
        </div>
    }
}
