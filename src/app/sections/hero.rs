use leptos::{either::Either, prelude::*};

use crate::{content::profile, nav::Section};

use super::{ContentUnavailable, SectionFrame};

#[component]
pub fn Hero() -> impl IntoView {
    let body = match profile() {
        Ok(profile) => Either::Left(view! {
            <div class="text-center hero-enter">
                <p class="text-lg text-orange-400 font-medium tracking-wide mb-4">"Hi, I'm"</p>
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-extrabold mb-6">{profile.name}</h1>
                <p class="text-2xl sm:text-3xl text-gray-300 mb-6">{profile.title}</p>
                <p class="max-w-2xl mx-auto text-lg text-gray-400 mb-10">{profile.tagline}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href=format!("#{}", Section::Projects.id())
                        class="px-8 py-3 rounded-full bg-orange-400 text-gray-900 font-bold hover:bg-orange-300 transition duration-300"
                    >
                        "See my work"
                    </a>
                    <a
                        href=format!("#{}", Section::Contact.id())
                        class="px-8 py-3 rounded-full border border-gray-600 hover:border-orange-400 hover:text-orange-400 transition duration-300"
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! { <SectionFrame section=Section::Home>{body}</SectionFrame> }
}
