use leptos::{either::Either, prelude::*};

use crate::{
    content::{jobs, Job},
    nav::Section,
};

use super::{ContentUnavailable, SectionFrame};

#[component]
pub fn Experience() -> impl IntoView {
    let body = match jobs() {
        Ok(jobs) => Either::Left(view! {
            <ol class="relative border-l border-gray-700 space-y-10 ml-2">
                {jobs.into_iter().map(|job| view! { <JobEntry job /> }).collect_view()}
            </ol>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <SectionFrame section=Section::Experiences heading=true>
            {body}
        </SectionFrame>
    }
}

#[component]
fn JobEntry(job: Job) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-1.5 mt-2 w-3 h-3 rounded-full bg-orange-400"></span>
            <div class="flex flex-col sm:flex-row sm:items-baseline sm:justify-between gap-1">
                <h3 class="text-xl font-bold">
                    {job.role} <span class="text-gray-400 font-normal">" @ " {job.company}</span>
                </h3>
                <span class="text-sm text-orange-400 font-medium shrink-0">{job.period}</span>
            </div>
            <p class="mt-2 text-gray-300">{job.summary}</p>
            <ul class="mt-3 list-disc list-inside space-y-1 text-gray-400">
                {job.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
        </li>
    }
}
