use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::{
    geometry::{GeometryProvider, ScrollMetrics, SmoothScroller},
    hit::ClickRegion,
    listener::{ListenerKind, ListenerRegistry},
    section::Section,
    theme::{ColorSchemeSignal, PreferenceStore, Theme, ThemeTarget, resolve_theme},
};

// header turns opaque past this many pixels
pub const SCROLLED_THRESHOLD: f64 = 50.0;

// the nav highlight switches this far (plus the header height) before a
// section's top edge reaches the header
pub const SECTION_LOOKAHEAD: f64 = 50.0;

// within this many pixels of the bottom, contact is active no matter what
pub const BOTTOM_SNAP_TOLERANCE: f64 = 10.0;

// a section is revealed once its top is above viewport_height / REVEAL_DIVISOR
pub const REVEAL_DIVISOR: f64 = 1.5;

pub const MENU_ID: &str = "mobile-menu";
pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";

// the toggle button sits in the header, not the drawer, but a press on it
// must not count as outside or the following click would reopen the menu
pub const MENU_REGIONS: [&str; 2] = [MENU_ID, MENU_TOGGLE_ID];

// SectionVisibility
//
// reveal flags for the fade-in sections.  these are recomputed on every
// scroll and can go back to false when scrolling up
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionVisibility {
    revealed: BTreeSet<Section>,
}

impl SectionVisibility {
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    pub fn set(&mut self, section: Section, revealed: bool) {
        if revealed {
            self.revealed.insert(section);
        } else {
            self.revealed.remove(&section);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub theme: Theme,
    pub active_section: Section,
    pub is_scrolled: bool,
    pub visibility: SectionVisibility,
    pub menu_open: bool,
}

pub fn active_section(metrics: &ScrollMetrics) -> Section {
    let scroll = metrics.scroll_offset;

    if scroll + metrics.viewport_height >= metrics.document_height - BOTTOM_SNAP_TOLERANCE {
        return Section::Contact;
    }

    let lookahead = metrics.header_height + SECTION_LOOKAHEAD;

    [Section::Contact, Section::Work, Section::About]
        .into_iter()
        .find(|section| match metrics.offset_top(*section) {
            Some(top) => scroll >= top - lookahead,
            None => false,
        })
        .unwrap_or(Section::Home)
}

// ViewStateController
//
// owns theme, nav highlight, reveal flags, header chrome and the mobile menu.
// every method is a synchronous reaction to one ui event
#[derive(Clone)]
pub struct ViewStateController<S, T> {
    store: S,
    target: T,
    theme_key: String,
    state: ViewState,
}

impl<S, T> ViewStateController<S, T>
where
    S: PreferenceStore,
    T: ThemeTarget,
{
    pub fn new(store: S, target: T, theme_key: impl Into<String>) -> Self {
        ViewStateController {
            store,
            target,
            theme_key: theme_key.into(),
            state: ViewState::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.state.visibility.is_revealed(section)
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    // resolves the startup theme and applies it the same way a toggle would,
    // so the root flag and the stored value agree from the first frame
    pub fn initialize_theme(&mut self, system: &impl ColorSchemeSignal) -> Theme {
        let theme = resolve_theme(&self.store, &self.theme_key, system);
        self.set_theme(theme);
        theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        info!({ theme = %theme }, "setting theme");

        self.state.theme = theme;
        self.store.set(&self.theme_key, theme.as_str());
        self.target.apply(theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.set_theme(theme);
        theme
    }

    // returns whether anything changed, so callers can skip re-rendering
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        let mut next = self.state.clone();

        next.is_scrolled = metrics.scroll_offset > SCROLLED_THRESHOLD;
        next.active_section = active_section(metrics);

        let threshold = metrics.viewport_height / REVEAL_DIVISOR;
        for section in Section::REVEALABLE {
            if let Some(top) = metrics.viewport_top(section) {
                next.visibility.set(section, top < threshold);
            }
        }

        if next == self.state {
            return false;
        }

        if next.active_section != self.state.active_section {
            debug!(
                { from = %self.state.active_section, to = %next.active_section },
                "active section changed"
            );
        }

        self.state = next;
        true
    }

    // registers the scroll listener if it is not already held, recomputing
    // from the current geometry right away so the first frame is correct
    // without waiting for a scroll event.  returns whether it registered
    pub fn register_scroll<H>(
        &mut self,
        registry: &mut ListenerRegistry<H>,
        geometry: &impl GeometryProvider,
        make: impl FnOnce() -> H,
    ) -> bool {
        registry.register(ListenerKind::Scroll, || {
            self.on_scroll(&ScrollMetrics::capture(geometry));
            make()
        })
    }

    // the highlight is set optimistically; later scroll events are
    // authoritative and may pick something else while the animation runs
    pub fn scroll_to_section(
        &mut self,
        section: Section,
        geometry: &impl GeometryProvider,
        scroller: &impl SmoothScroller,
    ) -> Option<f64> {
        let Some(target) = geometry.section(section) else {
            debug!({ section = %section }, "section not mounted, ignoring scroll request");
            return None;
        };

        let offset = target.viewport_top + geometry.scroll_offset() - geometry.header_height();
        scroller.smooth_scroll_to(offset);

        self.state.active_section = section;
        self.state.menu_open = false;

        Some(offset)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    // returns whether the click closed the menu
    pub fn handle_outside_click(&mut self, region: ClickRegion) -> bool {
        if self.state.menu_open && region == ClickRegion::Outside {
            self.state.menu_open = false;
            return true;
        }
        false
    }

    // a mousedown anywhere on the document; contains reports whether the
    // named menu region holds the press target
    pub fn handle_document_press(&mut self, contains: impl FnMut(&'static str) -> bool) -> bool {
        if !self.state.menu_open {
            return false;
        }
        self.handle_outside_click(ClickRegion::from_regions(MENU_REGIONS, contains))
    }
}
