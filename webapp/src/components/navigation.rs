use dioxus::prelude::*;

use folio_common::{section::Section, view::MENU_TOGGLE_ID};

use crate::{
    common::{
        ViewController,
        dom::{DomGeometry, HEADER_ID, WindowScroller},
    },
    components::icons::{MenuIcon, MoonIcon, SunIcon},
};

#[derive(Clone, PartialEq, Props)]
pub struct NavBarButtonProps {
    section: Section,
}

#[component]
pub fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;

    let mut view = use_context::<Signal<ViewController>>();
    let active = view.read().active_section() == section;

    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            href: "#{section.id()}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                view.write().scroll_to_section(section, &DomGeometry, &WindowScroller);
            },
            "{section.label()}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut view = use_context::<Signal<ViewController>>();
    let dark = view.read().theme().is_dark();

    rsx! {
        button {
            class: "icon-button",
            aria_label: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                view.write().toggle_theme();
            },
            if dark {
                SunIcon {}
            } else {
                MoonIcon {}
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    owner: String,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let owner = props.owner;

    let mut view = use_context::<Signal<ViewController>>();
    let scrolled = view.read().is_scrolled();

    rsx! {
        header {
            id: HEADER_ID,
            class: if scrolled { "site-header scrolled" } else { "site-header" },

            div { class: "header-desktop",
                h1 { class: "site-title", "{owner}" }
                div { class: "header-row",
                    nav {
                        ul { class: "nav-links",
                            for section in Section::ALL {
                                li { key: "{section.id()}",
                                    NavBarButton { section }
                                }
                            }
                        }
                    }
                    ThemeToggle {}
                }
            }

            div { class: "header-mobile",
                h1 { class: "site-title", "{owner}" }
                div { class: "header-row",
                    ThemeToggle {}
                    button {
                        id: MENU_TOGGLE_ID,
                        class: "icon-button",
                        aria_label: "Toggle navigation",
                        onclick: move |_| {
                            view.write().toggle_menu();
                        },
                        MenuIcon {}
                    }
                }
            }
        }
    }
}
