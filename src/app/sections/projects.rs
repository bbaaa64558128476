use leptos::{either::Either, prelude::*};

use crate::{
    content::{projects, Project},
    nav::Section,
};

use super::{ContentUnavailable, SectionFrame};

#[component]
pub fn Projects() -> impl IntoView {
    let body = match projects() {
        Ok(projects) => Either::Left(view! {
            <div class="grid gap-6 md:grid-cols-2">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <SectionFrame section=Section::Projects heading=true>
            {body}
        </SectionFrame>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        name,
        description,
        tech,
        url,
        source,
    } = project;
    view! {
        <article class="flex flex-col p-6 rounded-2xl bg-gray-800 border border-gray-700 hover:border-orange-400 transition duration-300">
            <h3 class="text-xl font-bold mb-2">{name}</h3>
            <p class="text-gray-400 mb-4 flex-grow">{description}</p>
            <ul class="flex flex-wrap gap-2 mb-4">
                {tech
                    .into_iter()
                    .map(|t| view! { <li class="text-xs px-2 py-1 rounded bg-gray-700">{t}</li> })
                    .collect_view()}
            </ul>
            <div class="flex gap-4 text-sm font-medium">
                {url
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-orange-400 hover:underline">
                                "Live"
                            </a>
                        }
                    })}
                {source
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-orange-400 hover:underline">
                                "Source"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
