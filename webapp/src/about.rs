use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::{config::Site, section::Section};

use crate::components::section::RevealSection;

#[component]
pub fn About() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        RevealSection { section: Section::About, title: "About Me",
            for (idx, block) in site.config.about.iter().enumerate() {
                div { key: "{idx}", class: "about-block",
                    h3 { "{block.heading}" }
                    for paragraph in block.paragraphs.iter() {
                        p { "{paragraph}" }
                    }
                }
            }
        }
    }
}
