#![allow(non_snake_case)]
use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::Level;

use folio_common::{
    config::Site,
    listener::{ListenerKind, ListenerRegistry},
};

mod common;
use common::{
    ViewController,
    dom::{DocumentRoot, DomGeometry, SystemScheme, outside_click_listener, scroll_listener},
    storage::LocalPreferenceStore,
    style,
};

mod components;
use components::{footer::Footer, menu::MobileMenu, modal::ProjectModal, navigation::NavBar};

mod about;
mod contact;
mod home;
mod work;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let site = use_hook(common::load_site);

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: style::FONTS }
        style { "{style::SITE_STYLES}" }
        match site {
            Some(site) => rsx! {
                Portfolio { site }
            },
            None => rsx! {
                div { class: "site-error", "This page failed to load its content, see the browser console." }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioProps {
    site: Rc<Site>,
}

type Listeners = Rc<RefCell<ListenerRegistry<Option<EventListener>>>>;

#[component]
fn Portfolio(props: PortfolioProps) -> Element {
    let site = use_context_provider(|| props.site.clone());

    let mut view = use_signal(|| {
        let mut view = ViewController::new(
            LocalPreferenceStore,
            DocumentRoot,
            site.config.theme_key.clone(),
        );
        view.initialize_theme(&SystemScheme);
        view
    });
    use_context_provider(|| view);

    // listeners go on once the sections exist and come off with the page
    let listeners: Listeners = use_hook(|| Rc::new(RefCell::new(ListenerRegistry::default())));

    use_effect({
        let listeners = listeners.clone();
        move || {
            let mut registry = listeners.borrow_mut();

            let mut next = view.peek().clone();
            if next.register_scroll(&mut registry, &DomGeometry, || scroll_listener(view)) {
                view.set(next);
            }
            registry.register(ListenerKind::OutsideClick, || outside_click_listener(view));
        }
    });

    use_drop(move || listeners.borrow_mut().release_all());

    rsx! {
        div { class: "page",
            NavBar { owner: site.config.owner.clone() }
            MobileMenu {}
            home::Hero {}
            about::About {}
            work::Work {}
            contact::Contact {}
            Footer { owner: site.config.owner.clone() }
            ProjectModal {}
        }
    }
}
