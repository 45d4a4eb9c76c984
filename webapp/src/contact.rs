use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::{config::Site, section::Section};

use crate::components::{icons::SocialGlyph, section::RevealSection};

#[component]
pub fn Contact() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        RevealSection { section: Section::Contact, title: "Contact",
            p { class: "contact-blurb", "{site.config.contact_blurb}" }
            div { class: "social-links",
                for link in site.config.social_links.iter() {
                    a {
                        key: "{link.href}",
                        class: "social-link",
                        href: link.href.clone(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: link.label.clone(),
                        SocialGlyph { icon: link.icon }
                    }
                }
            }
        }
    }
}
