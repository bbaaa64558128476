mod about;
mod contact;
mod experience;
mod hero;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;

use leptos::{logging, prelude::*};

use crate::{content::ContentError, nav::Section};

const SECTION_CLASS: &str =
    "min-h-screen flex flex-col justify-center px-6 py-24 mx-auto w-full max-w-5xl scroll-mt-24";

/// Anchored wrapper every content section renders into.
#[component]
fn SectionFrame(section: Section, #[prop(optional)] heading: bool, children: Children) -> impl IntoView {
    view! {
        <section id=section.id() class=SECTION_CLASS>
            {heading
                .then(|| {
                    view! {
                        <h2 class="text-3xl sm:text-4xl font-bold mb-10 text-orange-400">
                            {section.label()}
                        </h2>
                    }
                })}
            {children()}
        </section>
    }
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    logging::error!("{error}");
    view! { <p class="text-gray-400 italic">"This section couldn't be loaded."</p> }
}
