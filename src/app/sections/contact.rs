use leptos::{either::Either, prelude::*};

use crate::{
    content::{profile, BUILD_TIME},
    nav::Section,
};

use super::{ContentUnavailable, SectionFrame};

#[component]
pub fn Contact() -> impl IntoView {
    let body = match profile() {
        Ok(profile) => Either::Left(view! {
            <div class="text-center max-w-2xl mx-auto">
                <p class="text-lg text-gray-300 mb-8">
                    "Have a project in mind, a question, or just want to say hi? My inbox is open."
                </p>
                <a
                    href=format!("mailto:{}", profile.email)
                    class="inline-block px-8 py-3 rounded-full bg-orange-400 text-gray-900 font-bold hover:bg-orange-300 transition duration-300"
                >
                    {profile.email.clone()}
                </a>
                <div class="flex justify-center gap-6 mt-8">
                    {profile
                        .links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-400 hover:text-orange-400 transition duration-300"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <SectionFrame section=Section::Contact heading=true>
            {body}
            <footer class="mt-24 text-center text-xs text-gray-500">
                "Built with Rust and Leptos · " {BUILD_TIME}
            </footer>
        </SectionFrame>
    }
}
