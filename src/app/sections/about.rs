use leptos::{either::Either, prelude::*};

use crate::{content::profile, nav::Section};

use super::{ContentUnavailable, SectionFrame};

#[component]
pub fn About() -> impl IntoView {
    let body = match profile() {
        Ok(profile) => Either::Left(view! {
            <div class="grid gap-10 lg:grid-cols-3">
                <div class="lg:col-span-2 space-y-4 text-lg leading-relaxed text-gray-300">
                    {profile.about.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
                <div>
                    <h3 class="text-xl font-bold mb-4">"Tools I reach for"</h3>
                    <ul class="flex flex-wrap gap-2">
                        {profile
                            .skills
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <li class="px-3 py-1 rounded-full bg-gray-800 border border-gray-700 text-sm">
                                        {skill}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <SectionFrame section=Section::About heading=true>
            {body}
        </SectionFrame>
    }
}
