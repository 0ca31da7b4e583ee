mod about;
mod contact;
mod experience;
mod home;
mod projects;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use home::HomeSection;
pub use projects::ProjectsSection;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// True once the section has scrolled into view, and latched there so
/// the entrance animation plays once.
fn use_reveal(el: NodeRef<html::Section>) -> Signal<bool> {
    let visibility = use_element_visibility(el);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visibility.get() {
            set_seen(true);
        }
    });
    seen.into()
}
