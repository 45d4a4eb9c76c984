use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use folio_common::{
    geometry::{GeometryProvider, ScrollMetrics, SectionGeometry, SmoothScroller},
    hit::Rect,
    section::Section,
    theme::{ColorSchemeSignal, Theme, ThemeTarget},
};

use super::ViewController;

pub const HEADER_ID: &str = "site-header";

const DARK_CLASS: &str = "dark";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window()?.document()
}

pub fn html_element(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn element_rect(id: &str) -> Option<Rect> {
    let rect = document()?.get_element_by_id(id)?.get_bounding_client_rect();

    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

// DomGeometry
//
// live layout queries against the page.  sections are found by their id,
// which is the same id the nav anchors point at
#[derive(Clone, Copy, Debug, Default)]
pub struct DomGeometry;

impl GeometryProvider for DomGeometry {
    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        document()
            .and_then(|d| d.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn header_height(&self) -> f64 {
        html_element(HEADER_ID)
            .map(|header| header.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn section(&self, section: Section) -> Option<SectionGeometry> {
        let element = html_element(section.id())?;

        Some(SectionGeometry {
            offset_top: element.offset_top() as f64,
            viewport_top: element.get_bounding_client_rect().top(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroller;

impl SmoothScroller for WindowScroller {
    fn smooth_scroll_to(&self, offset: f64) {
        let Some(window) = window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            return;
        };

        let classes = root.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1(DARK_CLASS),
            Theme::Light => classes.remove_1(DARK_CLASS),
        };

        if let Err(err) = result {
            warn!({ theme = %theme }, "failed to update root class: {err:?}");
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemScheme;

impl ColorSchemeSignal for SystemScheme {
    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

// recompute from a fresh snapshot, only touching the signal when something
// actually changed so idle scrolling does not re-render the page
fn refresh_view(mut view: Signal<ViewController>) {
    let metrics = ScrollMetrics::capture(&DomGeometry);

    let mut next = view.peek().clone();
    if next.on_scroll(&metrics) {
        view.set(next);
    }
}

pub fn scroll_listener(view: Signal<ViewController>) -> Option<EventListener> {
    let window = window()?;

    Some(EventListener::new(&window, "scroll", move |_| {
        refresh_view(view)
    }))
}

pub fn outside_click_listener(mut view: Signal<ViewController>) -> Option<EventListener> {
    let document = document()?;

    Some(EventListener::new(&document, "mousedown", move |event| {
        if !view.peek().menu_open() {
            return;
        }

        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };

        view.write().handle_document_press(|id| {
            html_element(id).is_some_and(|element| element.contains(Some(&target)))
        });
    }))
}
