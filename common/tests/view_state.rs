use std::{cell::RefCell, rc::Rc};

use folio_common::{
    catalog::{Project, ProjectId, ProjectImage},
    geometry::{GeometryProvider, ScrollMetrics, SectionGeometry, SmoothScroller},
    hit::{ClickRegion, Point, Rect},
    modal::GalleryModal,
    section::Section,
    theme::{ColorSchemeSignal, MemoryStore, PreferenceStore, Theme, ThemeTarget},
    view::ViewStateController,
};

struct NoopRoot;

impl ThemeTarget for NoopRoot {
    fn apply(&self, _theme: Theme) {}
}

struct System(bool);

impl ColorSchemeSignal for System {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

// a page laid out like the real one: about at 800, work at 2000, contact at
// 3200, with a 100px header
struct Page {
    scroll: f64,
    viewport: f64,
    document: f64,
}

impl Page {
    const TOPS: [(Section, f64); 4] = [
        (Section::Home, 0.0),
        (Section::About, 800.0),
        (Section::Work, 2000.0),
        (Section::Contact, 3200.0),
    ];
}

impl GeometryProvider for Page {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn document_height(&self) -> f64 {
        self.document
    }

    fn header_height(&self) -> f64 {
        100.0
    }

    fn section(&self, section: Section) -> Option<SectionGeometry> {
        Page::TOPS
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| SectionGeometry {
                offset_top: *top,
                viewport_top: top - self.scroll,
            })
    }
}

#[derive(Default)]
struct Scroller(RefCell<Vec<f64>>);

impl SmoothScroller for Scroller {
    fn smooth_scroll_to(&self, offset: f64) {
        self.0.borrow_mut().push(offset);
    }
}

fn page(scroll: f64) -> Page {
    Page {
        scroll,
        viewport: 800.0,
        document: 4400.0,
    }
}

fn controller(store: Rc<MemoryStore>) -> ViewStateController<Rc<MemoryStore>, NoopRoot> {
    ViewStateController::new(store, NoopRoot, "theme")
}

#[test]
fn near_bottom_is_always_contact() {
    let mut view = controller(Rc::new(MemoryStore::default()));

    for scroll in [3590.0, 3595.0, 3600.0, 4000.0] {
        view.on_scroll(&ScrollMetrics::capture(&page(scroll)));
        assert_eq!(view.active_section(), Section::Contact, "scroll {scroll}");
    }

    // bottom snap holds even when the contact section is tall and far away
    let short = Page {
        scroll: 1200.0,
        viewport: 800.0,
        document: 2000.0,
    };
    view.on_scroll(&ScrollMetrics::capture(&short));
    assert_eq!(view.active_section(), Section::Contact);
}

#[test]
fn above_about_lookahead_is_home() {
    let mut view = controller(Rc::new(MemoryStore::default()));

    for scroll in [0.0, 100.0, 400.0, 649.5] {
        view.on_scroll(&ScrollMetrics::capture(&page(scroll)));
        assert_eq!(view.active_section(), Section::Home, "scroll {scroll}");
    }
}

#[test]
fn work_is_active_inside_its_lookahead() {
    let mut view = controller(Rc::new(MemoryStore::default()));

    view.on_scroll(&ScrollMetrics::capture(&page(1950.0)));

    assert_eq!(view.active_section(), Section::Work);
    assert!(view.is_scrolled());
    assert!(view.is_revealed(Section::About));
    assert!(view.is_revealed(Section::Work));
    assert!(!view.is_revealed(Section::Contact));
}

#[test]
fn theme_survives_reload() {
    let store = Rc::new(MemoryStore::default());

    let mut first = controller(store.clone());
    first.initialize_theme(&System(false));
    first.set_theme(Theme::Dark);
    drop(first);

    let mut second = controller(store.clone());
    assert_eq!(second.initialize_theme(&System(false)), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn system_dark_applies_without_stored_value() {
    let mut view = controller(Rc::new(MemoryStore::default()));

    assert_eq!(view.initialize_theme(&System(true)), Theme::Dark);
}

#[test]
fn nav_click_scrolls_and_closes_menu() {
    let mut view = controller(Rc::new(MemoryStore::default()));
    let scroller = Scroller::default();

    view.toggle_menu();
    let offset = view.scroll_to_section(Section::Contact, &page(500.0), &scroller);

    assert_eq!(offset, Some(3100.0));
    assert_eq!(view.active_section(), Section::Contact);
    assert!(!view.menu_open());

    // a scroll event mid-animation re-derives the highlight
    view.on_scroll(&ScrollMetrics::capture(&page(1000.0)));
    assert_eq!(view.active_section(), Section::About);
}

fn project(id: &str) -> Project {
    Project {
        id: ProjectId::new(id),
        title: id.to_owned(),
        description: String::new(),
        images: vec![ProjectImage {
            src: format!("{id}.png"),
            caption: id.to_owned(),
        }],
    }
}

#[test]
fn modal_open_close_open_replaces_selection() {
    let mut modal = GalleryModal::default();

    modal.open(&project("a"));
    modal.close();
    modal.open(&project("b"));

    assert!(modal.is_open());
    assert_eq!(modal.current(), Some(&project("b")));
}

#[test]
fn panel_clicks_keep_modal_open() {
    let panel = Rect {
        left: 200.0,
        top: 100.0,
        width: 800.0,
        height: 600.0,
    };
    let mut modal = GalleryModal::default();
    modal.open(&project("a"));

    let inside = ClickRegion::classify(Some(panel), Point { x: 600.0, y: 400.0 });
    modal.on_click(inside);
    assert!(modal.is_open());

    let backdrop = ClickRegion::classify(Some(panel), Point { x: 50.0, y: 400.0 });
    modal.on_click(backdrop);
    assert!(!modal.is_open());
}

#[test]
fn empty_stored_theme_uses_system_preference() {
    let store = Rc::new(MemoryStore::default());
    store.set("theme", "");

    let mut view = controller(store.clone());

    assert_eq!(view.initialize_theme(&System(true)), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
