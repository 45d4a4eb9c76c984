use dioxus::prelude::*;

use folio_common::{section::Section, view::MENU_ID};

use crate::{common::ViewController, components::navigation::NavBarButton};

// the drawer stays in the tree while closed so the outside-click listener
// always has something to test containment against
#[component]
pub fn MobileMenu() -> Element {
    let mut view = use_context::<Signal<ViewController>>();
    let open = view.read().menu_open();

    rsx! {
        div {
            id: MENU_ID,
            class: if open { "mobile-menu open" } else { "mobile-menu" },
            button {
                class: "icon-button menu-close",
                aria_label: "Close navigation",
                onclick: move |_| view.write().close_menu(),
                "×"
            }
            ul {
                for section in Section::ALL {
                    li { key: "{section.id()}",
                        NavBarButton { section }
                    }
                }
            }
        }
    }
}
