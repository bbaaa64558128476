use std::{fmt, str::FromStr};

use thiserror::Error;

/// Vertical offset (CSS px) past which the floating bar switches to its
/// scrolled look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Experiences,
    Contact,
}

impl Section {
    /// Display order of the page.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experiences,
        Section::Contact,
    ];

    /// Anchor token, shared by the nav links and the section elements.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experiences => "experiences",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

impl FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

/// Which menu a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Select { section: Section, origin: NavOrigin },
    OpenMenu,
    CloseMenu,
    Scrolled(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
    pub past_threshold: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one UI event. Returns the section to bring into view, if the
    /// event asks for a scroll.
    pub fn apply(&mut self, event: NavEvent) -> Option<Section> {
        match event {
            NavEvent::Select { section, origin } => {
                self.active = section;
                if origin == NavOrigin::Mobile {
                    self.menu_open = false;
                }
                Some(section)
            }
            NavEvent::OpenMenu => {
                self.menu_open = true;
                None
            }
            NavEvent::CloseMenu => {
                self.menu_open = false;
                None
            }
            NavEvent::Scrolled(offset_y) => {
                self.past_threshold = offset_y > SCROLL_THRESHOLD;
                None
            }
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

const BAR_BASE: &str = "fixed top-6 left-1/2 -translate-x-1/2 backdrop-blur-lg text-white py-3 px-8 flex justify-center items-center z-50 shadow-xl rounded-4xl border border-gray-700 transition-all duration-500 nav-enter";

pub fn bar_class(past_threshold: bool) -> String {
    if past_threshold {
        format!("{BAR_BASE} bg-gray-800/95 shadow-orange-400/50")
    } else {
        format!("{BAR_BASE} bg-gray-800/80")
    }
}

/// The open-menu trigger is only mounted while the panel is closed.
pub fn trigger_visible(menu_open: bool) -> bool {
    !menu_open
}

pub fn desktop_link_class(is_active: bool) -> &'static str {
    if is_active {
        "transition duration-300 hover:scale-110 text-lg px-6 py-2 rounded-full tracking-wide bg-orange-400 text-gray-900 font-bold shadow-md shadow-orange-500"
    } else {
        "transition duration-300 hover:scale-110 text-lg px-6 py-2 rounded-full font-medium tracking-wide hover:text-orange-400 hover:bg-gray-700/40"
    }
}

pub fn mobile_link_class(is_active: bool) -> &'static str {
    if is_active {
        "transition duration-300 hover:scale-110 text-xl px-6 py-3 rounded-md w-full text-center bg-orange-400 text-gray-900 font-bold"
    } else {
        "transition duration-300 hover:scale-110 text-xl font-medium px-6 py-3 rounded-md w-full text-center hover:text-orange-400 hover:bg-gray-700"
    }
}

pub fn backdrop_class(menu_open: bool) -> &'static str {
    if menu_open {
        "fixed inset-0 bg-black/50 z-40 transition-opacity duration-300 opacity-100"
    } else {
        "fixed inset-0 bg-black/50 z-40 transition-opacity duration-300 opacity-0 pointer-events-none"
    }
}

pub fn panel_class(menu_open: bool) -> &'static str {
    if menu_open {
        "fixed top-0 right-0 w-3/4 sm:w-1/2 h-full bg-gray-800 text-white shadow-lg flex flex-col items-center justify-center space-y-6 z-50 rounded-l-2xl transition-transform duration-500 ease-out translate-x-0"
    } else {
        "fixed top-0 right-0 w-3/4 sm:w-1/2 h-full bg-gray-800 text-white shadow-lg flex flex-col items-center justify-center space-y-6 z-50 rounded-l-2xl transition-transform duration-500 ease-out translate-x-full pointer-events-none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_class(classes: &str, class: &str) -> bool {
        classes.split_whitespace().any(|c| c == class)
    }

    fn select(state: &mut NavState, section: Section, origin: NavOrigin) -> Option<Section> {
        state.apply(NavEvent::Select { section, origin })
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert_eq!(state.active, Section::Home);
        assert!(!state.menu_open);
        assert!(!state.past_threshold);
    }

    #[test]
    fn test_select_sets_active_for_every_section() {
        for origin in [NavOrigin::Desktop, NavOrigin::Mobile] {
            let mut state = NavState::new();
            for section in Section::ALL {
                let target = select(&mut state, section, origin);
                assert_eq!(target, Some(section));
                assert_eq!(state.active, section);
                assert!(Section::ALL
                    .iter()
                    .all(|&s| state.is_active(s) == (s == section)));
            }
        }
    }

    #[test]
    fn test_mobile_select_closes_menu() {
        let mut state = NavState::new();
        state.apply(NavEvent::OpenMenu);
        select(&mut state, Section::Contact, NavOrigin::Mobile);
        assert!(!state.menu_open);

        // already closed stays closed
        select(&mut state, Section::About, NavOrigin::Mobile);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_desktop_select_leaves_menu_alone() {
        let mut state = NavState::new();
        state.apply(NavEvent::OpenMenu);
        select(&mut state, Section::About, NavOrigin::Desktop);
        assert!(state.menu_open);
        assert_eq!(state.active, Section::About);
    }

    #[test]
    fn test_scroll_threshold_boundaries() {
        let mut state = NavState::new();
        let cases = [
            (0.0, false),
            (-10.0, false),
            (50.0, false),
            (50.0001, true),
            (50.5, true),
            (51.0, true),
            (120.0, true),
            (0.0, false),
        ];
        for (offset, expected) in cases {
            assert_eq!(state.apply(NavEvent::Scrolled(offset)), None);
            assert_eq!(state.past_threshold, expected, "offset {offset}");
        }
    }

    #[test]
    fn test_open_close_round_trip() {
        let mut state = NavState::new();
        let before = state;
        state.apply(NavEvent::OpenMenu);
        assert!(state.menu_open);
        state.apply(NavEvent::CloseMenu);
        assert_eq!(state, before);

        // close is idempotent
        state.apply(NavEvent::CloseMenu);
        assert_eq!(state, before);

        state.apply(NavEvent::OpenMenu);
        state.apply(NavEvent::OpenMenu);
        state.apply(NavEvent::CloseMenu);
        assert_eq!(state, before);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = NavState::new();
        state.apply(NavEvent::Scrolled(300.0));
        state.apply(NavEvent::OpenMenu);
        select(&mut state, Section::Projects, NavOrigin::Desktop);
        assert!(state.past_threshold);
        assert!(state.menu_open);

        state.apply(NavEvent::CloseMenu);
        assert!(state.past_threshold);
        assert_eq!(state.active, Section::Projects);

        state.apply(NavEvent::Scrolled(0.0));
        assert!(!state.menu_open);
        assert_eq!(state.active, Section::Projects);
    }

    #[test]
    fn test_narrow_viewport_scenario() {
        let mut state = NavState::new();
        assert!(trigger_visible(state.menu_open));
        state.apply(NavEvent::OpenMenu);
        assert!(!trigger_visible(state.menu_open));
        assert_eq!(panel_class(state.menu_open), panel_class(true));
        assert!(!backdrop_class(state.menu_open).contains("pointer-events-none"));

        let target = select(&mut state, Section::Projects, NavOrigin::Mobile);
        assert_eq!(target, Some(Section::Projects));
        assert_eq!(state.active, Section::Projects);
        assert!(!state.menu_open);
        assert!(panel_class(state.menu_open).contains("translate-x-full"));
        assert!(trigger_visible(state.menu_open));
    }

    #[test]
    fn test_section_ids_and_labels() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "about", "projects", "experiences", "contact"]);
        let labels = Section::ALL.map(Section::label);
        assert_eq!(
            labels,
            ["Home", "About", "Projects", "Experiences", "Contact"].map(String::from)
        );
        assert_eq!(Section::Experiences.to_string(), "experiences");
    }

    #[test]
    fn test_parse_section() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(NavError::UnknownSection("blog".to_string()))
        );
        assert!("Home".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_class_rules() {
        let idle = bar_class(false);
        let scrolled = bar_class(true);
        assert!(has_class(&idle, "bg-gray-800/80"));
        assert!(!has_class(&idle, "bg-gray-800/95"));
        assert!(!has_class(&idle, "shadow-orange-400/50"));
        assert!(has_class(&scrolled, "bg-gray-800/95"));
        assert!(!has_class(&scrolled, "bg-gray-800/80"));
        assert!(has_class(&scrolled, "shadow-orange-400/50"));

        assert!(has_class(desktop_link_class(true), "bg-orange-400"));
        assert!(!has_class(desktop_link_class(false), "bg-orange-400"));
        assert!(has_class(mobile_link_class(true), "bg-orange-400"));
        assert!(!has_class(mobile_link_class(false), "bg-orange-400"));

        assert!(has_class(backdrop_class(false), "opacity-0"));
        assert!(has_class(backdrop_class(false), "pointer-events-none"));
        assert!(has_class(backdrop_class(true), "opacity-100"));
        assert!(has_class(panel_class(true), "translate-x-0"));
        assert!(!has_class(panel_class(true), "pointer-events-none"));
    }
}
