use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::{
    backdrop_class, bar_class, desktop_link_class, mobile_link_class, panel_class,
    trigger_visible, NavEvent, NavOrigin, NavState, Section,
};

use super::icons::{BarsIcon, CloseIcon};

/// Brings the section's element into view. A missing element is skipped.
fn scroll_to(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element with id '{section}', skipping scroll");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Feeds the window's vertical scroll offset into the nav state. The listener
/// belongs to the calling component's owner and is removed with it.
fn watch_scroll(dispatch: Callback<NavEvent>) {
    let (_, y) = use_window_scroll();
    Effect::new(move |_| dispatch.run(NavEvent::Scrolled(y.get())));
}

#[component]
pub fn Navigation() -> impl IntoView {
    let state = RwSignal::new(NavState::new());

    let dispatch = Callback::new(move |event: NavEvent| {
        let mut target = None;
        state.update(|s| target = s.apply(event));
        if let Some(section) = target {
            scroll_to(section);
        }
    });

    watch_scroll(dispatch);

    let active = Memo::new(move |_| state.get().active);
    let menu_open = Memo::new(move |_| state.get().menu_open);
    let past_threshold = Memo::new(move |_| state.get().past_threshold);

    view! {
        <DesktopNav active past_threshold dispatch />
        <MobileTrigger menu_open dispatch />
        <MobileMenu active menu_open dispatch />
    }
}

#[component]
fn DesktopNav(
    active: Memo<Section>,
    past_threshold: Memo<bool>,
    dispatch: Callback<NavEvent>,
) -> impl IntoView {
    view! {
        <nav class=move || bar_class(past_threshold.get())>
            <div class="hidden lg:flex space-x-6">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                href=format!("#{}", section.id())
                                class=move || desktop_link_class(active.get() == section)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    dispatch
                                        .run(NavEvent::Select {
                                            section,
                                            origin: NavOrigin::Desktop,
                                        });
                                }
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn MobileTrigger(menu_open: Memo<bool>, dispatch: Callback<NavEvent>) -> impl IntoView {
    view! {
        <div class="fixed top-6 right-6 z-50 lg:hidden flex items-center justify-center w-12 h-12 trigger-enter">
            <Show when=move || trigger_visible(menu_open.get())>
                <button
                    type="button"
                    aria-label="Open menu"
                    class="text-white text-2xl sm:text-3xl md:text-4xl cursor-pointer"
                    on:click=move |_| dispatch.run(NavEvent::OpenMenu)
                >
                    <BarsIcon />
                </button>
            </Show>
        </div>
    }
}

#[component]
fn MobileMenu(
    active: Memo<Section>,
    menu_open: Memo<bool>,
    dispatch: Callback<NavEvent>,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("lg:hidden {}", backdrop_class(menu_open.get()))
            on:click=move |_| dispatch.run(NavEvent::CloseMenu)
        ></div>
        <nav
            class=move || format!("lg:hidden {}", panel_class(menu_open.get()))
            aria-hidden=move || (!menu_open.get()).to_string()
        >
            <div class="absolute top-6 right-6 flex items-center justify-center w-12 h-12">
                <button
                    type="button"
                    aria-label="Close menu"
                    class="text-white text-2xl sm:text-3xl md:text-4xl cursor-pointer"
                    on:click=move |_| dispatch.run(NavEvent::CloseMenu)
                >
                    <CloseIcon />
                </button>
            </div>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <a
                            href=format!("#{}", section.id())
                            class=move || mobile_link_class(active.get() == section)
                            on:click=move |ev| {
                                ev.prevent_default();
                                dispatch
                                    .run(NavEvent::Select {
                                        section,
                                        origin: NavOrigin::Mobile,
                                    });
                            }
                        >
                            {section.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
